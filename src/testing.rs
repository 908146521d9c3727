//! Test doubles for the router and platform seams

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::future::Future;
use std::io;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

use crate::modifier::{InputEvent, ListenerKind};
use crate::navigation::{is_external_url, ResolveError, Router};
use crate::platform::{EventHandler, Platform, PlatformError, Registration};

/// Route a failing push can be provoked with
const FAILING_PATH: &str = "/fail";

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("router_newtab=debug"))
        .with_test_writer()
        .try_init();
}

/// In-memory log sink for asserting on emitted lines
///
/// Install with `tracing::subscriber::with_default(capture.subscriber(), ..)`
/// so only the current thread's events land here.
#[derive(Clone, Default)]
pub struct LogCapture {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fmt subscriber writing every enhancer line, debug and up, to this
    /// capture
    pub fn subscriber(&self) -> impl tracing::Subscriber + Send + Sync + 'static {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("router_newtab=debug"))
            .with_ansi(false)
            .without_time()
            .with_writer(self.clone())
            .finish()
    }

    pub fn contents(&self) -> String {
        let buf = self.buf.lock().unwrap();
        String::from_utf8_lossy(&buf).into_owned()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.contents().contains(needle)
    }

    pub fn clear(&self) {
        self.buf.lock().unwrap().clear();
    }
}

pub struct CaptureWriter {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl io::Write for CaptureWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.lock().unwrap().extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = CaptureWriter;

    fn make_writer(&'a self) -> Self::Writer {
        CaptureWriter {
            buf: Arc::clone(&self.buf),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationFailure(pub String);

/// Router over `String` locations
///
/// Paths and external URLs resolve to themselves.
/// `name:<route>?<param>=<value>` resolves named routes from a small table;
/// unknown names fail to resolve.
pub struct MockRouter {
    named: HashMap<&'static str, &'static str>,
    pushes: RefCell<Vec<String>>,
}

impl MockRouter {
    pub fn new() -> Self {
        let named = HashMap::from([
            ("home", "/"),
            ("about", "/about"),
            ("contact", "/contact"),
            ("user", "/user/:id"),
        ]);
        Self {
            named,
            pushes: RefCell::new(Vec::new()),
        }
    }

    /// Every location handed to `push`, in order
    pub fn pushes(&self) -> Vec<String> {
        self.pushes.borrow().clone()
    }

    fn resolve_named(&self, spec: &str) -> Result<String, ResolveError> {
        let (name, query) = spec.split_once('?').unwrap_or((spec, ""));
        let pattern = self
            .named
            .get(name)
            .ok_or_else(|| ResolveError::NoMatch(name.to_string()))?;

        let params: HashMap<&str, &str> = query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .collect();

        let mut path = String::new();
        for segment in pattern.split('/').filter(|s| !s.is_empty()) {
            path.push('/');
            match segment.strip_prefix(':') {
                Some(param) => {
                    let value = params.get(param).ok_or_else(|| ResolveError::MissingParam {
                        route: name.to_string(),
                        param: param.to_string(),
                    })?;
                    path.push_str(value);
                }
                None => path.push_str(segment),
            }
        }
        if path.is_empty() {
            path.push('/');
        }
        Ok(path)
    }
}

impl Router for MockRouter {
    type Location = String;
    type Output = String;
    type Error = NavigationFailure;

    fn push(&self, to: String) -> impl Future<Output = Result<String, NavigationFailure>> {
        self.pushes.borrow_mut().push(to.clone());
        async move {
            if to == FAILING_PATH {
                Err(NavigationFailure(to))
            } else {
                Ok(format!("navigated to {to}"))
            }
        }
    }

    fn resolve(&self, to: &String) -> Result<String, ResolveError> {
        if let Some(spec) = to.strip_prefix("name:") {
            self.resolve_named(spec)
        } else if is_external_url(to) || to.starts_with('/') {
            Ok(to.clone())
        } else {
            Err(ResolveError::Invalid(to.clone()))
        }
    }
}

/// One call to `open_window`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenCall {
    pub url: String,
    pub target: String,
    pub features: String,
}

type Listener = (u64, ListenerKind, Rc<dyn Fn(&InputEvent)>);

#[derive(Default)]
struct MockState {
    next_id: Cell<u64>,
    listeners: RefCell<Vec<Listener>>,
    registered: RefCell<HashMap<ListenerKind, usize>>,
    removed: RefCell<HashMap<ListenerKind, usize>>,
    fail_listen: Cell<Option<ListenerKind>>,
    popups_blocked: Cell<bool>,
    opened: RefCell<Vec<OpenCall>>,
}

/// Browser stand-in that records registrations and window opens
///
/// Clones share state, so a test can keep one handle while the enhancer owns
/// another.
#[derive(Clone, Default)]
pub struct MockPlatform {
    state: Rc<MockState>,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make registration of `kind` fail
    pub fn fail_listen(&self, kind: ListenerKind) {
        self.state.fail_listen.set(Some(kind));
    }

    /// Make every `open_window` call fail like a popup blocker would
    pub fn block_popups(&self) {
        self.state.popups_blocked.set(true);
    }

    /// Deliver `event` to every live listener of its kind
    pub fn dispatch(&self, event: InputEvent) {
        let handlers: Vec<Rc<dyn Fn(&InputEvent)>> = self
            .state
            .listeners
            .borrow()
            .iter()
            .filter(|(_, kind, _)| *kind == event.kind())
            .map(|(_, _, handler)| Rc::clone(handler))
            .collect();
        for handler in handlers {
            handler(&event);
        }
    }

    pub fn active_listeners(&self) -> usize {
        self.state.listeners.borrow().len()
    }

    pub fn registered(&self, kind: ListenerKind) -> usize {
        self.state.registered.borrow().get(&kind).copied().unwrap_or(0)
    }

    pub fn removed(&self, kind: ListenerKind) -> usize {
        self.state.removed.borrow().get(&kind).copied().unwrap_or(0)
    }

    pub fn opened(&self) -> Vec<OpenCall> {
        self.state.opened.borrow().clone()
    }
}

impl Platform for MockPlatform {
    type Window = String;

    fn is_browser(&self) -> bool {
        true
    }

    fn listen(
        &self,
        kind: ListenerKind,
        handler: EventHandler,
    ) -> Result<Registration, PlatformError> {
        if self.state.fail_listen.get() == Some(kind) {
            return Err(PlatformError::Listen {
                kind,
                reason: "listener rejected".to_string(),
            });
        }

        let id = self.state.next_id.get();
        self.state.next_id.set(id + 1);
        let handler: Rc<dyn Fn(&InputEvent)> = Rc::from(handler);
        self.state.listeners.borrow_mut().push((id, kind, handler));
        *self.state.registered.borrow_mut().entry(kind).or_default() += 1;

        let state = Rc::clone(&self.state);
        Ok(Registration::new(kind, move || {
            state.listeners.borrow_mut().retain(|(listener, _, _)| *listener != id);
            *state.removed.borrow_mut().entry(kind).or_default() += 1;
        }))
    }

    fn open_window(
        &self,
        url: &str,
        target: &str,
        features: &str,
    ) -> Result<Option<String>, PlatformError> {
        self.state.opened.borrow_mut().push(OpenCall {
            url: url.to_string(),
            target: target.to_string(),
            features: features.to_string(),
        });

        if self.state.popups_blocked.get() {
            Err(PlatformError::OpenWindow("popup blocked".to_string()))
        } else {
            Ok(Some(url.to_string()))
        }
    }
}
