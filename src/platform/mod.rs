//! Host platform abstraction
//!
//! The core never touches `window` or `document` directly. Everything it
//! needs from the host (global key/blur listeners and the window-open
//! primitive) goes through [`Platform`].

mod headless;
#[cfg(feature = "web")]
pub mod web;

use std::fmt;

pub use headless::Headless;

use crate::modifier::{InputEvent, ListenerKind};

/// Callback installed for one listener kind
pub type EventHandler = Box<dyn Fn(&InputEvent)>;

/// Window features passed to every new tab so it gets no handle back to us
pub const NEW_TAB_FEATURES: &str = "noopener,noreferrer";

/// Browsing context target for a new tab
pub const BLANK_TARGET: &str = "_blank";

/// The host environment the enhancer runs in
pub trait Platform {
    /// Handle returned by a successful window-open
    type Window;

    /// Whether a global event surface (window and document) exists
    fn is_browser(&self) -> bool;

    /// Register `handler` for `kind` on the global event surface
    fn listen(
        &self,
        kind: ListenerKind,
        handler: EventHandler,
    ) -> Result<Registration, PlatformError>;

    /// Open `url` in a new browsing context
    ///
    /// `Ok(None)` mirrors `window.open` returning `null`, which is what
    /// browsers do for `noopener` windows.
    fn open_window(
        &self,
        url: &str,
        target: &str,
        features: &str,
    ) -> Result<Option<Self::Window>, PlatformError>;
}

/// A live listener registration
///
/// The listener is removed exactly once: on [`Registration::remove`] or on
/// drop, whichever comes first.
#[must_use = "dropping a Registration removes the listener"]
pub struct Registration {
    kind: ListenerKind,
    remover: Option<Box<dyn FnOnce()>>,
}

impl Registration {
    /// Wrap the closure that unregisters a listener
    pub fn new(kind: ListenerKind, remover: impl FnOnce() + 'static) -> Self {
        Self {
            kind,
            remover: Some(Box::new(remover)),
        }
    }

    /// The event kind this registration listens for
    pub fn kind(&self) -> ListenerKind {
        self.kind
    }

    /// Remove the listener now
    pub fn remove(mut self) {
        self.run_remover();
    }

    fn run_remover(&mut self) {
        if let Some(remover) = self.remover.take() {
            remover();
        }
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        self.run_remover();
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("kind", &self.kind)
            .field("active", &self.remover.is_some())
            .finish()
    }
}

/// Errors raised by the host platform
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("no global event surface available")]
    Unavailable,

    #[error("failed to register {kind} listener: {reason}")]
    Listen { kind: ListenerKind, reason: String },

    #[error("failed to open new window: {0}")]
    OpenWindow(String),
}
