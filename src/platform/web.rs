//! Browser platform backed by `web-sys`
//!
//! Key listeners go on `document` as passive listeners, the blur listener
//! goes on `window`. Each registration owns its `wasm_bindgen` closure and
//! drops it after unregistering, so nothing is leaked with `forget`.

use tracing::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Event, EventTarget, KeyboardEvent, Window};

use crate::logging::LOG_TARGET;
use crate::modifier::{InputEvent, ListenerKind, ModifierKeys};

use super::{EventHandler, Platform, PlatformError, Registration};

/// The real browser: `window`, `document` and `window.open`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPlatform;

impl BrowserPlatform {
    pub fn new() -> Self {
        Self
    }

    fn target_for(kind: ListenerKind) -> Result<EventTarget, PlatformError> {
        let window = web_sys::window().ok_or(PlatformError::Unavailable)?;
        match kind {
            ListenerKind::KeyDown | ListenerKind::KeyUp => {
                let document = window.document().ok_or(PlatformError::Unavailable)?;
                Ok(document.into())
            }
            ListenerKind::Blur => Ok(window.into()),
        }
    }
}

/// Read the modifier snapshot off a DOM keyboard event
pub fn modifier_keys(event: &KeyboardEvent) -> ModifierKeys {
    ModifierKeys {
        meta: event.meta_key(),
        ctrl: event.ctrl_key(),
        shift: event.shift_key(),
        alt: event.alt_key(),
    }
}

fn to_input_event(kind: ListenerKind, event: &Event) -> Option<InputEvent> {
    match kind {
        ListenerKind::Blur => Some(InputEvent::Blur),
        ListenerKind::KeyDown => event
            .dyn_ref::<KeyboardEvent>()
            .map(|key| InputEvent::KeyDown(modifier_keys(key))),
        ListenerKind::KeyUp => event
            .dyn_ref::<KeyboardEvent>()
            .map(|key| InputEvent::KeyUp(modifier_keys(key))),
    }
}

fn js_reason(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

impl Platform for BrowserPlatform {
    type Window = Window;

    fn is_browser(&self) -> bool {
        web_sys::window()
            .and_then(|window| window.document())
            .is_some()
    }

    fn listen(
        &self,
        kind: ListenerKind,
        handler: EventHandler,
    ) -> Result<Registration, PlatformError> {
        let target = Self::target_for(kind)?;

        let closure = Closure::<dyn Fn(Event)>::new(move |event: Event| {
            if let Some(input) = to_input_event(kind, &event) {
                handler(&input);
            }
        });

        let added = match kind {
            ListenerKind::KeyDown | ListenerKind::KeyUp => {
                let options = AddEventListenerOptions::new();
                options.set_passive(true);
                target.add_event_listener_with_callback_and_add_event_listener_options(
                    kind.event_type(),
                    closure.as_ref().unchecked_ref(),
                    &options,
                )
            }
            ListenerKind::Blur => target.add_event_listener_with_callback(
                kind.event_type(),
                closure.as_ref().unchecked_ref(),
            ),
        };
        added.map_err(|e| PlatformError::Listen {
            kind,
            reason: js_reason(&e),
        })?;

        debug!(target: LOG_TARGET, %kind, "browser listener registered");

        Ok(Registration::new(kind, move || {
            let removed = target.remove_event_listener_with_callback(
                kind.event_type(),
                closure.as_ref().unchecked_ref(),
            );
            if let Err(e) = removed {
                warn!(
                    target: LOG_TARGET,
                    %kind,
                    reason = %js_reason(&e),
                    "failed to remove browser listener"
                );
            }
            drop(closure);
        }))
    }

    fn open_window(
        &self,
        url: &str,
        target: &str,
        features: &str,
    ) -> Result<Option<Window>, PlatformError> {
        let window = web_sys::window().ok_or(PlatformError::Unavailable)?;
        window
            .open_with_url_and_target_and_features(url, target, features)
            .map_err(|e| PlatformError::OpenWindow(js_reason(&e)))
    }
}
