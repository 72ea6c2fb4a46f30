// Copyright 2026 the Ridgeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Window scroll and resize subscriptions.
//!
//! [`WindowListeners`] owns the two JS closures registered on the window and
//! guarantees symmetric removal: [`unsubscribe`](WindowListeners::unsubscribe)
//! (or drop) detaches both. The scroll listener is registered passive — the
//! engine never calls `preventDefault`, and passive listeners keep the
//! browser's scrolling off the main-thread fast path.

use alloc::boxed::Box;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{AddEventListenerOptions, Window};

type ListenerClosure = Closure<dyn FnMut()>;

/// Scroll and resize subscriptions on a window, removed on drop.
pub(crate) struct WindowListeners {
    window: Window,
    scroll: Option<ListenerClosure>,
    resize: Option<ListenerClosure>,
}

impl WindowListeners {
    /// Subscribes `on_scroll` (passive) and `on_resize` to the window.
    pub(crate) fn subscribe(
        window: &Window,
        on_scroll: impl FnMut() + 'static,
        on_resize: impl FnMut() + 'static,
    ) -> Result<Self, JsValue> {
        let scroll = Closure::wrap(Box::new(on_scroll) as Box<dyn FnMut()>);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        window.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            scroll.as_ref().unchecked_ref(),
            &options,
        )?;

        let resize = Closure::wrap(Box::new(on_resize) as Box<dyn FnMut()>);
        if let Err(err) =
            window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())
        {
            // Roll back the scroll subscription so a failed subscribe leaves
            // no listener behind.
            let _ = window
                .remove_event_listener_with_callback("scroll", scroll.as_ref().unchecked_ref());
            return Err(err);
        }

        Ok(Self {
            window: window.clone(),
            scroll: Some(scroll),
            resize: Some(resize),
        })
    }

    /// Removes both listeners. Safe to call more than once.
    pub(crate) fn unsubscribe(&mut self) {
        if let Some(scroll) = self.scroll.take() {
            let _ = self
                .window
                .remove_event_listener_with_callback("scroll", scroll.as_ref().unchecked_ref());
        }
        if let Some(resize) = self.resize.take() {
            let _ = self
                .window
                .remove_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());
        }
    }
}

impl Drop for WindowListeners {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl core::fmt::Debug for WindowListeners {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WindowListeners")
            .field("scroll", &self.scroll.is_some())
            .field("resize", &self.resize.is_some())
            .finish()
    }
}
