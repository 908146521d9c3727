//! Platform for hosts without a window, such as server rendering

use crate::modifier::ListenerKind;

use super::{EventHandler, Platform, PlatformError, Registration};

/// A host with no event surface and no way to open windows
#[derive(Debug, Clone, Copy, Default)]
pub struct Headless;

impl Platform for Headless {
    type Window = ();

    fn is_browser(&self) -> bool {
        false
    }

    fn listen(
        &self,
        _kind: ListenerKind,
        _handler: EventHandler,
    ) -> Result<Registration, PlatformError> {
        Err(PlatformError::Unavailable)
    }

    fn open_window(
        &self,
        _url: &str,
        _target: &str,
        _features: &str,
    ) -> Result<Option<()>, PlatformError> {
        Ok(None)
    }
}
