//! Modifier-key tracker
//!
//! Subscribes to global key-down, key-up and window-blur events and keeps a
//! single flag: whether a new-tab modifier (meta or ctrl) is currently held.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::warn;

use crate::logging::{debug_log, DebugLogger, LOG_TARGET};
use crate::platform::{Platform, PlatformError, Registration};

use super::keys::{InputEvent, ListenerKind};

const LISTENED: [ListenerKind; 3] = [
    ListenerKind::KeyDown,
    ListenerKind::KeyUp,
    ListenerKind::Blur,
];

/// Tracks whether a new-tab modifier key is held
///
/// The flag is only written by the installed event handlers; everything
/// else reads it through [`ModifierTracker::is_pressed`].
#[derive(Debug)]
pub struct ModifierTracker {
    pressed: Rc<Cell<bool>>,
    registrations: RefCell<Vec<Registration>>,
    log: DebugLogger,
}

impl ModifierTracker {
    /// Create a detached tracker with the flag cleared
    pub fn new(log: DebugLogger) -> Self {
        Self {
            pressed: Rc::new(Cell::new(false)),
            registrations: RefCell::new(Vec::new()),
            log,
        }
    }

    /// Register the key-down, key-up and blur listeners on `platform`
    ///
    /// Does nothing outside a browser or when already attached. If any
    /// registration fails, the ones already made are removed again.
    pub fn attach<P: Platform>(&self, platform: &P) -> Result<(), PlatformError> {
        if !platform.is_browser() {
            debug_log!(self.log, "keyboard monitoring disabled outside a browser");
            return Ok(());
        }
        if self.is_attached() {
            debug_log!(self.log, "keyboard monitor already attached");
            return Ok(());
        }

        let mut registrations = Vec::with_capacity(LISTENED.len());
        for kind in LISTENED {
            let pressed = Rc::clone(&self.pressed);
            let log = self.log.clone();
            let handler = Box::new(move |event: &InputEvent| apply(&pressed, &log, event));

            // Early return drops `registrations`, which unregisters them.
            registrations.push(platform.listen(kind, handler)?);
        }

        *self.registrations.borrow_mut() = registrations;
        debug_log!(self.log, "keyboard monitor attached");
        Ok(())
    }

    /// Whether a new-tab modifier is currently held
    pub fn is_pressed(&self) -> bool {
        self.pressed.get()
    }

    /// Whether listeners are currently registered
    pub fn is_attached(&self) -> bool {
        !self.registrations.borrow().is_empty()
    }

    /// Remove every registered listener
    ///
    /// Idempotent. The flag keeps its last value.
    pub fn detach(&self) {
        let registrations = std::mem::take(&mut *self.registrations.borrow_mut());
        if registrations.is_empty() {
            return;
        }

        for registration in registrations {
            registration.remove();
        }
        debug_log!(self.log, "keyboard monitor detached");
    }
}

impl Drop for ModifierTracker {
    fn drop(&mut self) {
        if self.is_attached() {
            warn!(target: LOG_TARGET, "modifier tracker dropped while attached, detaching");
        }
        self.detach();
    }
}

/// Last event wins
fn apply(pressed: &Cell<bool>, log: &DebugLogger, event: &InputEvent) {
    match event {
        InputEvent::KeyDown(keys) if keys.is_new_tab_modifier() => {
            pressed.set(true);
            debug_log!(log, meta = keys.meta, ctrl = keys.ctrl, "modifier key pressed");
        }
        InputEvent::KeyUp(keys) if !keys.is_new_tab_modifier() => {
            pressed.set(false);
            debug_log!(log, "modifier key released");
        }
        InputEvent::Blur => {
            pressed.set(false);
            debug_log!(log, "window blurred, resetting modifier state");
        }
        _ => {}
    }
}
