//! Navigation decision wrapper
//!
//! Sits in front of a router's `push`. Each call is either handed to the
//! router unchanged or turned into a `window.open` for the resolved href.

use std::cell::Cell;
use std::rc::Rc;

use tracing::warn;

use crate::config::{Config, ConfigUpdate};
use crate::logging::{debug_log, DebugLogger, LOG_TARGET};
use crate::modifier::ModifierTracker;
use crate::platform::{Platform, BLANK_TARGET};
use crate::policy::{decide, Decision, PushOptions};

use super::router::Router;
use super::url::{open_in_new_tab, resolve_route_url};

/// How a push was carried out
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The router navigated; carries the router's result
    Navigated(T),
    /// A new tab was opened, or at least attempted
    NewTab,
}

impl<T> Outcome<T> {
    pub fn is_new_tab(&self) -> bool {
        matches!(self, Outcome::NewTab)
    }

    /// The router's result, if the push was delegated
    pub fn navigated(self) -> Option<T> {
        match self {
            Outcome::Navigated(output) => Some(output),
            Outcome::NewTab => None,
        }
    }
}

/// Wraps a router's `push` with Cmd/Ctrl+click new-tab behavior
pub struct NewTabNavigator<R: Router, P: Platform> {
    router: Rc<R>,
    platform: Rc<P>,
    tracker: ModifierTracker,
    config: Cell<Config>,
    log: DebugLogger,
    destroyed: Cell<bool>,
}

impl<R: Router, P: Platform> NewTabNavigator<R, P> {
    /// Create the navigator and start tracking modifier keys
    pub fn new(router: Rc<R>, platform: Rc<P>, config: Config) -> Self {
        let log = DebugLogger::new(config.debug_mode);
        let tracker = ModifierTracker::new(log.clone());

        if let Err(e) = tracker.attach(&*platform) {
            warn!(target: LOG_TARGET, error = %e, "failed to attach keyboard monitor");
            warn!(target: LOG_TARGET, "continuing without modifier key support");
        }

        debug_log!(log, ?config, "new tab router initialized");

        Self {
            router,
            platform,
            tracker,
            config: Cell::new(config),
            log,
            destroyed: Cell::new(false),
        }
    }

    /// Navigate to `to`, possibly in a new tab
    ///
    /// Never fails because of the new-tab path: an unresolvable destination
    /// falls back to the router and a blocked popup only logs a warning.
    /// Router errors are returned as-is.
    pub async fn navigate(
        &self,
        to: R::Location,
        options: Option<PushOptions>,
    ) -> Result<Outcome<R::Output>, R::Error> {
        if self.destroyed.get() {
            return self.delegate(to).await;
        }

        let options = options.unwrap_or_default();
        let config = self.config.get();
        debug_log!(self.log, ?to, ?options, "new tab push called");

        let decision = decide(options, self.tracker.is_pressed(), config.enable_ctrl_click);
        debug_log!(self.log, %decision, "push decision");

        match decision {
            Decision::NewTab(_) => self.open_new_tab(to).await,
            Decision::Navigate(_) => self.delegate(to).await,
        }
    }

    async fn delegate(&self, to: R::Location) -> Result<Outcome<R::Output>, R::Error> {
        self.router.push(to).await.map(Outcome::Navigated)
    }

    async fn open_new_tab(&self, to: R::Location) -> Result<Outcome<R::Output>, R::Error> {
        let resolved = match resolve_route_url(&*self.router, &to) {
            Ok(resolved) => resolved,
            Err(e) => {
                debug_log!(
                    self.log,
                    ?to,
                    error = %e,
                    "error in new tab navigation, falling back to normal navigation"
                );
                return self.delegate(to).await;
            }
        };

        if resolved.is_external {
            debug_log!(self.log, url = %resolved.href, "external URL detected, opening directly");
        } else {
            debug_log!(
                self.log,
                route = ?to,
                resolved = %resolved.href,
                "internal route, opening in new tab"
            );
        }

        if open_in_new_tab(&*self.platform, &resolved.href, BLANK_TARGET).is_none() {
            debug_log!(self.log, url = %resolved.href, "no window handle returned");
        }

        Ok(Outcome::NewTab)
    }

    /// Current configuration
    pub fn config(&self) -> Config {
        self.config.get()
    }

    /// Merge `update` into the configuration
    pub fn update_config(&self, update: ConfigUpdate) {
        let mut config = self.config.get();
        config.apply(update);
        self.config.set(config);
        self.log.set_enabled(config.debug_mode);
        debug_log!(self.log, ?config, "configuration updated");
    }

    /// Whether Cmd/Ctrl is currently held
    pub fn is_modifier_pressed(&self) -> bool {
        self.tracker.is_pressed()
    }

    /// The modifier tracker backing this navigator
    pub fn tracker(&self) -> &ModifierTracker {
        &self.tracker
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed.get()
    }

    /// Stop listening for modifier keys; later pushes go straight to the
    /// router
    pub fn destroy(&self) {
        if self.destroyed.replace(true) {
            return;
        }
        self.tracker.detach();
        debug_log!(self.log, "new tab router destroyed");
    }
}
