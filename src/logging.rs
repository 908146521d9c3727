//! Debug switch shared by the navigator and the modifier tracker
//!
//! Diagnostics are ordinary `tracing` events. The `debug_mode` config flag
//! decides whether the enhancer's debug lines are emitted at all, on top of
//! whatever filter the application's subscriber applies. Warnings bypass the
//! switch.

use std::cell::Cell;
use std::rc::Rc;

use cfg_if::cfg_if;

/// Log target for every line the enhancer emits
pub const LOG_TARGET: &str = "router_newtab";

/// Shared on/off switch for enhancer debug lines
///
/// Clones share the same switch, so flipping it through the navigator's
/// config also silences the tracker's event handlers.
#[derive(Debug, Clone, Default)]
pub struct DebugLogger {
    enabled: Rc<Cell<bool>>,
}

impl DebugLogger {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: Rc::new(Cell::new(enabled)),
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled.get()
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
    }
}

/// Emit a `tracing::debug!` line when the given [`DebugLogger`] is on
macro_rules! debug_log {
    ($logger:expr, $($arg:tt)+) => {
        if $logger.enabled() {
            ::tracing::debug!(target: $crate::logging::LOG_TARGET, $($arg)+);
        }
    };
}

pub(crate) use debug_log;

cfg_if! {
    if #[cfg(feature = "web")] {
        use tracing_subscriber::prelude::*;
        use tracing_subscriber::EnvFilter;
        use tracing_web::MakeWebConsoleWriter;

        /// Install a subscriber that writes to the browser console
        ///
        /// Returns `false` if a global subscriber was already set.
        pub fn init_console(directives: &str) -> bool {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .without_time()
                .with_writer(MakeWebConsoleWriter::new());

            tracing_subscriber::registry()
                .with(EnvFilter::new(directives))
                .with(fmt_layer)
                .try_init()
                .is_ok()
        }
    }
}
