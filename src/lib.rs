//! router-newtab: Cmd/Ctrl+click behavior for programmatic router pushes
//!
//! Anchor tags open in a new tab when clicked with Cmd (macOS) or Ctrl
//! (Windows/Linux) held. Programmatic `router.push()` calls do not. This
//! crate wraps a client-side router so they do:
//! - A modifier tracker listens to global key and blur events
//! - A decision policy combines the modifier flag with per-call options
//! - The enhanced router either delegates to the original `push` or opens
//!   the resolved href with `noopener,noreferrer`
//!
//! ```ignore
//! let router = enhance(app_router, BrowserPlatform::new(), None);
//! router.push(location, Some(PushOptions::force_new_tab())).await?;
//! destroy(&router);
//! ```

pub mod config;
pub mod logging;
pub mod modifier;
pub mod navigation;
pub mod platform;
pub mod policy;

#[cfg(test)]
mod testing;

pub use config::{Config, ConfigError, ConfigUpdate};
pub use logging::DebugLogger;
pub use modifier::{InputEvent, ListenerKind, ModifierKeys, ModifierTracker};
pub use navigation::{
    destroy, enhance, get_instance, is_external_url, open_in_new_tab, resolve_route_url,
    EnhancedRouter, NewTabNavigator, Outcome, ResolveError, ResolvedUrl, Router,
};
pub use platform::{Headless, Platform, PlatformError, Registration};
pub use policy::{decide, Decision, PushOptions, Reason};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
