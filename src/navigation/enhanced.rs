//! Drop-in router adapter
//!
//! [`EnhancedRouter`] owns the router and an optional navigator slot.
//! `push` goes through the navigator while one is installed and straight to
//! the router otherwise, so [`destroy`] restores the plain router behavior.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::warn;

use crate::config::Config;
use crate::logging::LOG_TARGET;
use crate::platform::Platform;
use crate::policy::PushOptions;

use super::navigator::{NewTabNavigator, Outcome};
use super::router::Router;

/// A router whose `push` understands new-tab options
pub struct EnhancedRouter<R: Router, P: Platform> {
    router: Rc<R>,
    platform: Rc<P>,
    navigator: RefCell<Option<Rc<NewTabNavigator<R, P>>>>,
}

/// Add Cmd/Ctrl+click new-tab behavior to `router`
///
/// Outside a browser the router is returned wrapped but unenhanced: `push`
/// behaves exactly like the router's own.
pub fn enhance<R: Router, P: Platform>(
    router: R,
    platform: P,
    config: Option<Config>,
) -> EnhancedRouter<R, P> {
    let router = Rc::new(router);
    let platform = Rc::new(platform);

    let navigator = if platform.is_browser() {
        let config = config.unwrap_or_default();
        Some(Rc::new(NewTabNavigator::new(
            Rc::clone(&router),
            Rc::clone(&platform),
            config,
        )))
    } else {
        warn!(target: LOG_TARGET, "enhancement skipped outside a browser");
        None
    };

    EnhancedRouter {
        router,
        platform,
        navigator: RefCell::new(navigator),
    }
}

/// The navigator installed on `router`, if any
pub fn get_instance<R: Router, P: Platform>(
    router: &EnhancedRouter<R, P>,
) -> Option<Rc<NewTabNavigator<R, P>>> {
    router.instance()
}

/// Tear down the navigator installed on `router`, if any
pub fn destroy<R: Router, P: Platform>(router: &EnhancedRouter<R, P>) {
    router.destroy();
}

impl<R: Router, P: Platform> EnhancedRouter<R, P> {
    /// Navigate to `to`; see [`NewTabNavigator::navigate`] for how
    /// `options` are interpreted
    pub async fn push(
        &self,
        to: R::Location,
        options: Option<PushOptions>,
    ) -> Result<Outcome<R::Output>, R::Error> {
        // Clone out of the slot so no borrow is held across the await.
        let navigator = self.navigator.borrow().clone();
        match navigator {
            Some(navigator) => navigator.navigate(to, options).await,
            None => self.router.push(to).await.map(Outcome::Navigated),
        }
    }

    /// The wrapped router
    pub fn router(&self) -> &R {
        &self.router
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// The installed navigator, if any
    pub fn instance(&self) -> Option<Rc<NewTabNavigator<R, P>>> {
        self.navigator.borrow().clone()
    }

    pub fn is_enhanced(&self) -> bool {
        self.navigator.borrow().is_some()
    }

    /// Detach the keyboard listeners and uninstall the navigator
    ///
    /// Safe to call more than once.
    pub fn destroy(&self) {
        let navigator = self.navigator.borrow_mut().take();
        if let Some(navigator) = navigator {
            navigator.destroy();
        }
    }
}

impl<R: Router, P: Platform> Drop for EnhancedRouter<R, P> {
    fn drop(&mut self) {
        self.destroy();
    }
}
