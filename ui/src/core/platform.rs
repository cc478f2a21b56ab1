//! Browser bridge for the viewport signals.
//!
//! On wasm32 the bridge owns one `scroll` and one `resize` listener on
//! `window` and forwards their values to [`ViewportSignal`]. Elsewhere there
//! is no window; the bridge attaches nothing and signals are only driven by
//! explicit `emit` calls.
//!
//! Listeners are shared: the first [`ViewportBridge::acquire`] attaches them,
//! and dropping the last handle removes them again. Acquiring never emits;
//! callers seed their subscribers with [`ViewportBridge::publish_current`]
//! once they are allowed to write state (after mount, not during render).

use std::cell::RefCell;

use thiserror::Error;

#[cfg_attr(all(not(target_arch = "wasm32"), not(test)), allow(unused_imports))]
use super::viewport::ViewportSignal;

#[derive(Debug, Error)]
pub enum ViewportError {
    #[error("no browser window available")]
    NoWindow,
    #[error("failed to {action} `{event}` listener: {reason}")]
    Listener {
        action: &'static str,
        event: &'static str,
        reason: String,
    },
}

#[derive(Default)]
struct BridgeSlot {
    holders: usize,
    listeners: Option<WindowListeners>,
}

thread_local! {
    static BRIDGE: RefCell<BridgeSlot> = RefCell::new(BridgeSlot::default());
}

/// Handle on the shared browser listeners. Release happens on drop.
#[must_use = "dropping the bridge handle may detach the browser listeners"]
#[derive(Debug)]
pub struct ViewportBridge {
    _private: (),
}

impl ViewportBridge {
    pub fn acquire() -> Result<Self, ViewportError> {
        let attached = BRIDGE.with(|slot| -> Result<bool, ViewportError> {
            let mut slot = slot.borrow_mut();
            if slot.holders == 0 {
                slot.listeners = Some(WindowListeners::attach()?);
            }
            slot.holders += 1;
            Ok(slot.holders == 1)
        })?;

        if attached {
            tracing::debug!("viewport bridge attached");
        }
        Ok(Self { _private: () })
    }

    /// Emits the current width and scroll offset to every subscriber.
    pub fn publish_current(&self) {
        publish_current();
    }

    pub fn holders() -> usize {
        BRIDGE.with(|slot| slot.borrow().holders)
    }
}

impl Drop for ViewportBridge {
    fn drop(&mut self) {
        let detached = BRIDGE
            .try_with(|slot| {
                let mut slot = slot.borrow_mut();
                slot.holders = slot.holders.saturating_sub(1);
                if slot.holders == 0 {
                    slot.listeners.take()
                } else {
                    None
                }
            })
            .ok()
            .flatten();

        if let Some(listeners) = detached {
            if let Err(err) = listeners.detach() {
                tracing::warn!("viewport bridge: {err}");
            }
            tracing::debug!("viewport bridge detached");
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::{Event, Window};

    use super::{ViewportError, ViewportSignal};

    type Callback = Closure<dyn FnMut(Event)>;

    pub(super) struct WindowListeners {
        window: Window,
        scroll: Callback,
        resize: Callback,
    }

    impl WindowListeners {
        pub(super) fn attach() -> Result<Self, ViewportError> {
            let window = web_sys::window().ok_or(ViewportError::NoWindow)?;

            let scroll_window = window.clone();
            let scroll = Closure::wrap(Box::new(move |_: Event| {
                ViewportSignal::Scroll.emit(scroll_offset(&scroll_window));
            }) as Box<dyn FnMut(Event)>);

            let resize_window = window.clone();
            let resize = Closure::wrap(Box::new(move |_: Event| {
                ViewportSignal::Resize.emit(inner_width(&resize_window));
            }) as Box<dyn FnMut(Event)>);

            add(&window, "scroll", &scroll)?;
            if let Err(err) = add(&window, "resize", &resize) {
                let _ = remove(&window, "scroll", &scroll);
                return Err(err);
            }

            Ok(Self {
                window,
                scroll,
                resize,
            })
        }

        pub(super) fn detach(self) -> Result<(), ViewportError> {
            remove(&self.window, "scroll", &self.scroll)?;
            remove(&self.window, "resize", &self.resize)
        }
    }

    pub(super) fn publish_current() {
        if let Some(window) = web_sys::window() {
            ViewportSignal::Resize.emit(inner_width(&window));
            ViewportSignal::Scroll.emit(scroll_offset(&window));
        }
    }

    fn scroll_offset(window: &Window) -> f64 {
        window.scroll_y().unwrap_or(0.0)
    }

    fn inner_width(window: &Window) -> f64 {
        window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(0.0)
    }

    fn add(window: &Window, event: &'static str, cb: &Callback) -> Result<(), ViewportError> {
        window
            .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
            .map_err(|e| ViewportError::Listener {
                action: "add",
                event,
                reason: format!("{e:?}"),
            })
    }

    fn remove(window: &Window, event: &'static str, cb: &Callback) -> Result<(), ViewportError> {
        window
            .remove_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
            .map_err(|e| ViewportError::Listener {
                action: "remove",
                event,
                reason: format!("{e:?}"),
            })
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use super::ViewportError;

    pub(super) struct WindowListeners;

    impl WindowListeners {
        pub(super) fn attach() -> Result<Self, ViewportError> {
            Ok(Self)
        }

        pub(super) fn detach(self) -> Result<(), ViewportError> {
            Ok(())
        }
    }

    pub(super) fn publish_current() {}
}

#[cfg(target_arch = "wasm32")]
use wasm::{publish_current, WindowListeners};

#[cfg(not(target_arch = "wasm32"))]
use native::{publish_current, WindowListeners};
