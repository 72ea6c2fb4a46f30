// Copyright 2026 the Ridgeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot `requestAnimationFrame` scheduling.
//!
//! [`FramePump`] frame-aligns recomputation: every call to
//! [`request`](FramePump::request) registers the pump's callback for the
//! next rendering frame. Unlike a continuous animation loop, the callback
//! does **not** re-register itself — recomputation is event-driven, and the
//! [`FrameCoalescer`](ridgeline_core::coalesce::FrameCoalescer) upstream
//! decides when a new registration is needed.
//!
//! [`cancel_all`](FramePump::cancel_all) revokes every outstanding
//! registration, so teardown can guarantee that no callback runs afterwards
//! even if one was already scheduled.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

// Direct global bindings instead of `web_sys::Window` methods — avoids
// fetching (and unwrapping) the Window object on every registration.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "requestAnimationFrame")]
    fn request_animation_frame(callback: &JsValue) -> i32;

    #[wasm_bindgen(js_name = "cancelAnimationFrame")]
    fn cancel_animation_frame(id: i32);
}

/// A one-shot frame-callback scheduler over `requestAnimationFrame`.
///
/// Create with [`FramePump::new`], then call [`request`](Self::request) each
/// time the callback should run on the next frame. Requests accumulate:
/// three requests before the frame boundary yield three callback runs, so
/// callers that want coalescing guard `request` themselves.
pub(crate) struct FramePump {
    inner: Rc<PumpInner>,
}

type PumpClosure = Closure<dyn FnMut(f64)>;

struct PumpInner {
    /// The JS closure registered with `requestAnimationFrame`.
    ///
    /// Stored in its own `RefCell` so it can be set once at construction and
    /// referenced from inside itself without conflicting with `callback`.
    closure: RefCell<Option<PumpClosure>>,

    /// The user-supplied callback run on each scheduled frame.
    callback: RefCell<Box<dyn FnMut()>>,

    /// IDs of registrations that have not fired yet, oldest first.
    outstanding: RefCell<Vec<i32>>,

    /// Set once by [`FramePump::cancel_all`]; no callback runs afterwards.
    cancelled: Cell<bool>,
}

impl FramePump {
    /// Creates a pump with nothing scheduled.
    pub(crate) fn new(callback: impl FnMut() + 'static) -> Self {
        let inner = Rc::new(PumpInner {
            closure: RefCell::new(None),
            callback: RefCell::new(Box::new(callback)),
            outstanding: RefCell::new(Vec::new()),
            cancelled: Cell::new(false),
        });

        let pump = Rc::clone(&inner);
        let closure = Closure::wrap(Box::new(move |_timestamp_ms: f64| {
            if pump.cancelled.get() {
                return;
            }
            // Registrations fire in order; retire the oldest.
            let retired = {
                let mut outstanding = pump.outstanding.borrow_mut();
                if outstanding.is_empty() {
                    None
                } else {
                    Some(outstanding.remove(0))
                }
            };
            if retired.is_some() {
                pump.callback.borrow_mut()();
            }
        }) as Box<dyn FnMut(f64)>);
        *inner.closure.borrow_mut() = Some(closure);

        Self { inner }
    }

    /// Registers the callback to run on the next rendering frame.
    ///
    /// A no-op after [`cancel_all`](Self::cancel_all).
    pub(crate) fn request(&self) {
        if self.inner.cancelled.get() {
            return;
        }
        if let Some(ref closure) = *self.inner.closure.borrow() {
            let id = request_animation_frame(closure.as_ref().unchecked_ref());
            self.inner.outstanding.borrow_mut().push(id);
        }
    }

    /// Revokes every outstanding registration and refuses future ones.
    ///
    /// Safe to call more than once.
    pub(crate) fn cancel_all(&self) {
        self.inner.cancelled.set(true);
        for id in self.inner.outstanding.borrow_mut().drain(..) {
            cancel_animation_frame(id);
        }
        // Drop the JS closure so it doesn't leak.
        self.inner.closure.borrow_mut().take();
    }
}

impl Drop for FramePump {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

impl core::fmt::Debug for FramePump {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FramePump")
            .field("outstanding", &self.inner.outstanding.borrow().len())
            .field("cancelled", &self.inner.cancelled.get())
            .finish()
    }
}
