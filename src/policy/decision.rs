//! New-tab decision policy
//!
//! Combines the per-call push options, the modifier flag and the
//! `enable_ctrl_click` switch. Rules are checked in order and the first
//! match wins.

use serde::{Deserialize, Serialize};

/// Per-call overrides accepted by `push`
///
/// Mirrors `{ forceNewTab?, newTab? }`; `None` means the flag was not given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushOptions {
    /// Open a new tab no matter what
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force_new_tab: Option<bool>,

    /// `Some(true)`: let a held modifier open a new tab.
    /// `Some(false)`: never open a new tab for this call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_tab: Option<bool>,
}

impl PushOptions {
    pub fn force_new_tab() -> Self {
        Self {
            force_new_tab: Some(true),
            new_tab: None,
        }
    }

    pub fn new_tab(allow: bool) -> Self {
        Self {
            force_new_tab: None,
            new_tab: Some(allow),
        }
    }
}

/// Which rule produced a decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// `force_new_tab` was set
    Forced,
    /// `new_tab: true` and a modifier was held
    RequestedWithModifier,
    /// `new_tab: false` suppressed modifier handling
    Suppressed,
    /// No option given, modifier held, ctrl-click enabled
    ModifierHeld,
    /// Nothing asked for a new tab
    Default,
}

/// Outcome of the policy for one push
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Open the destination in a new tab
    NewTab(Reason),
    /// Hand the destination to the router
    Navigate(Reason),
}

impl Decision {
    pub fn is_new_tab(&self) -> bool {
        matches!(self, Decision::NewTab(_))
    }

    pub fn reason(&self) -> Reason {
        match self {
            Decision::NewTab(reason) | Decision::Navigate(reason) => *reason,
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::NewTab(Reason::Forced) => write!(f, "new tab (forced)"),
            Decision::NewTab(Reason::RequestedWithModifier) => {
                write!(f, "new tab (newTab option with modifier key)")
            }
            Decision::NewTab(reason) => write!(f, "new tab ({:?})", reason),
            Decision::Navigate(Reason::Suppressed) => {
                write!(f, "navigate (newTab explicitly disabled)")
            }
            Decision::Navigate(reason) => write!(f, "navigate ({:?})", reason),
        }
    }
}

/// Decide between in-place navigation and a new tab
///
/// `new_tab: Some(true)` without a held modifier does not force a new tab;
/// it falls through to normal navigation. Use `force_new_tab` for that.
pub fn decide(options: PushOptions, modifier_pressed: bool, enable_ctrl_click: bool) -> Decision {
    if options.force_new_tab == Some(true) {
        return Decision::NewTab(Reason::Forced);
    }

    match options.new_tab {
        Some(true) if modifier_pressed => Decision::NewTab(Reason::RequestedWithModifier),
        Some(false) => Decision::Navigate(Reason::Suppressed),
        None if enable_ctrl_click && modifier_pressed => Decision::NewTab(Reason::ModifierHeld),
        _ => Decision::Navigate(Reason::Default),
    }
}
