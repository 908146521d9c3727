//! Modifier key snapshots and the input events the tracker consumes
//!
//! A key event from the host carries the state of every modifier at the
//! moment it fired. Only meta (macOS Command) and ctrl (Windows/Linux
//! Control) count as new-tab modifiers.

/// Which modifier keys a single key event reported as held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModifierKeys {
    /// Meta / Command key is held
    pub meta: bool,
    /// Control key is held
    pub ctrl: bool,
    /// Shift key is held
    pub shift: bool,
    /// Alt / Option key is held
    pub alt: bool,
}

impl ModifierKeys {
    /// Snapshot with only the meta key held
    pub fn meta() -> Self {
        Self {
            meta: true,
            ..Self::default()
        }
    }

    /// Snapshot with only the control key held
    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::default()
        }
    }

    /// Check if a key that turns a navigation into a new tab is held
    /// (Command on macOS, Control elsewhere)
    pub fn is_new_tab_modifier(&self) -> bool {
        self.meta || self.ctrl
    }
}

/// Host event kinds the tracker subscribes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// `keydown` on the document
    KeyDown,
    /// `keyup` on the document
    KeyUp,
    /// `blur` on the window
    Blur,
}

impl ListenerKind {
    /// DOM event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            ListenerKind::KeyDown => "keydown",
            ListenerKind::KeyUp => "keyup",
            ListenerKind::Blur => "blur",
        }
    }
}

impl std::fmt::Display for ListenerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.event_type())
    }
}

/// A host signal delivered to the tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A key went down
    KeyDown(ModifierKeys),
    /// A key came up
    KeyUp(ModifierKeys),
    /// The window lost focus
    Blur,
}

impl InputEvent {
    /// The listener kind that delivers this event
    pub fn kind(&self) -> ListenerKind {
        match self {
            InputEvent::KeyDown(_) => ListenerKind::KeyDown,
            InputEvent::KeyUp(_) => ListenerKind::KeyUp,
            InputEvent::Blur => ListenerKind::Blur,
        }
    }
}
