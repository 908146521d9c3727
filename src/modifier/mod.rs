//! Modifier module for global keyboard state
//!
//! Listens to key and blur events on the host to know whether Cmd (macOS)
//! or Ctrl (Windows/Linux) is held at the moment a navigation happens.

mod keys;
mod tracker;

pub use keys::{InputEvent, ListenerKind, ModifierKeys};
pub use tracker::ModifierTracker;
