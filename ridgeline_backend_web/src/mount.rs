// Copyright 2026 the Ridgeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mount lifecycle: attach, frame-aligned recompute, teardown.
//!
//! [`Parallax`] is the teardown handle returned by
//! [`attach`](Parallax::attach). Internally it owns the engine, the DOM
//! presenter, the window subscriptions, and the frame pump, tied together by
//! a liveness flag:
//!
//! - Scroll events are routed through the
//!   [`FrameCoalescer`](ridgeline_core::coalesce::FrameCoalescer), so any
//!   burst within one rendering frame yields exactly one recompute.
//! - Resize events each schedule their own frame callback, independent of
//!   the scroll guard.
//! - [`detach`](Parallax::detach) is idempotent, and a frame callback that
//!   was already scheduled when detach ran finds the liveness flag cleared
//!   and does nothing.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use wasm_bindgen::JsValue;
use web_sys::{HtmlElement, Window};

use ridgeline_core::backend::Presenter as _;
use ridgeline_core::coalesce::{FrameCoalescer, RecomputeReason};
use ridgeline_core::config::ParallaxConfig;
use ridgeline_core::engine::ParallaxEngine;
use ridgeline_core::layer::{FrameChanges, PLANE_COUNT};
use ridgeline_core::trace::{
    ApplyEvent, AttachEvent, DetachEvent, RecomputeEvent, TraceSink, Tracer,
};

use crate::decor::{self, CaptionBackdrop, CaptionPlacement};
use crate::events::WindowListeners;
use crate::measure::probe_geometry;
use crate::presenter::{DomPresenter, decorate_container};
use crate::raf::FramePump;

/// Optional mount cosmetics and instrumentation.
///
/// The caption node is host-supplied content layered above the image layers
/// (and above the optional scrim), pinned independently of scroll.
#[derive(Default)]
pub struct MountOptions {
    /// Host-supplied caption content, if any.
    pub caption: Option<HtmlElement>,
    /// Where to pin the caption.
    pub caption_placement: CaptionPlacement,
    /// Backdrop drawn behind the caption text.
    pub caption_backdrop: CaptionBackdrop,
    /// Whether to add a gradient scrim above the layers for text contrast.
    pub scrim: bool,
    /// Recompute-loop instrumentation (only observed with the core `trace`
    /// feature enabled).
    pub trace_sink: Option<Box<dyn TraceSink>>,
}

impl core::fmt::Debug for MountOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MountOptions")
            .field("caption", &self.caption.is_some())
            .field("caption_placement", &self.caption_placement)
            .field("caption_backdrop", &self.caption_backdrop)
            .field("scrim", &self.scrim)
            .field("trace_sink", &self.trace_sink.is_some())
            .finish()
    }
}

struct MountInner {
    engine: RefCell<ParallaxEngine>,
    presenter: RefCell<DomPresenter>,
    window: Window,
    coalescer: FrameCoalescer,

    /// Cleared exactly once, by detach. Every event and frame path checks it
    /// before touching the engine.
    live: Cell<bool>,

    /// Monotonically increasing recompute counter for trace events.
    sequence: Cell<u64>,

    /// Reason attached to the next frame's trace event.
    pending_reason: Cell<RecomputeReason>,

    /// Reused change buffer for the per-frame path.
    changes: RefCell<FrameChanges>,

    /// Scrim and caption nodes to remove at teardown.
    decor: RefCell<Vec<HtmlElement>>,

    listeners: RefCell<Option<WindowListeners>>,
    pump: RefCell<Option<FramePump>>,
    sink: RefCell<Option<Box<dyn TraceSink>>>,
}

impl MountInner {
    fn on_scroll(&self) {
        if !self.live.get() {
            return;
        }
        if self.coalescer.request() {
            self.pending_reason.set(RecomputeReason::Scroll);
            if let Some(pump) = &*self.pump.borrow() {
                pump.request();
            }
        }
    }

    fn on_resize(&self) {
        if !self.live.get() {
            return;
        }
        self.pending_reason.set(RecomputeReason::Resize);
        if let Some(pump) = &*self.pump.borrow() {
            pump.request();
        }
    }

    fn run_frame(&self) {
        // A frame scheduled before detach may still fire afterwards.
        if !self.live.get() {
            return;
        }
        let geometry = {
            let presenter = self.presenter.borrow();
            probe_geometry(presenter.container(), &self.window)
        };
        let sequence = self.sequence.get();
        self.sequence.set(sequence + 1);
        let reason = self.pending_reason.get();

        let mut engine = self.engine.borrow_mut();
        let mut changes = self.changes.borrow_mut();
        engine.recompute_into(geometry, &mut changes);
        self.presenter.borrow_mut().apply(engine.stack(), &changes);

        let mut guard = self.sink.borrow_mut();
        let mut tracer = tracer_for(guard.as_deref_mut());
        tracer.recompute(&RecomputeEvent {
            sequence,
            reason,
            progress: engine.progress(),
        });
        tracer.apply(&ApplyEvent::new(sequence, &changes));
        drop(guard);

        self.coalescer.finish();
    }
}

fn tracer_for(sink: Option<&mut dyn TraceSink>) -> Tracer<'_> {
    match sink {
        Some(sink) => Tracer::new(sink),
        None => Tracer::none(),
    }
}

/// A mounted parallax effect and its teardown handle.
///
/// Dropping the handle detaches the effect; keep it alive for as long as the
/// host page section exists.
pub struct Parallax {
    inner: Rc<MountInner>,
}

impl Parallax {
    /// Mounts the effect under `container`.
    ///
    /// Decorates the container (relative positioning, configured height,
    /// hidden overflow, isolated stacking context), creates the three layer
    /// elements plus any requested decor, subscribes passive scroll and
    /// resize listeners, and runs one initial recompute so the layers are
    /// positioned before the next paint.
    ///
    /// # Errors
    ///
    /// Fails if there is no global window or a listener cannot be
    /// subscribed.
    pub fn attach(
        container: HtmlElement,
        config: ParallaxConfig,
        options: MountOptions,
    ) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        decorate_container(&container, config.height());

        let mut decor_nodes = Vec::new();
        if options.scrim
            && let Some(scrim) = decor::mount_scrim(&container)
        {
            decor_nodes.push(scrim);
        }
        if let Some(caption) = options.caption {
            decor::mount_caption(
                &container,
                &caption,
                options.caption_placement,
                options.caption_backdrop,
            );
            decor_nodes.push(caption);
        }

        let inner = Rc::new(MountInner {
            engine: RefCell::new(ParallaxEngine::new(config)),
            presenter: RefCell::new(DomPresenter::new(container)),
            window,
            coalescer: FrameCoalescer::new(),
            live: Cell::new(true),
            sequence: Cell::new(0),
            pending_reason: Cell::new(RecomputeReason::Initial),
            changes: RefCell::new(FrameChanges::default()),
            decor: RefCell::new(decor_nodes),
            listeners: RefCell::new(None),
            pump: RefCell::new(None),
            sink: RefCell::new(options.trace_sink),
        });

        let pump_inner = Rc::clone(&inner);
        *inner.pump.borrow_mut() = Some(FramePump::new(move || pump_inner.run_frame()));

        let scroll_inner = Rc::clone(&inner);
        let resize_inner = Rc::clone(&inner);
        let listeners = WindowListeners::subscribe(
            &inner.window,
            move || scroll_inner.on_scroll(),
            move || resize_inner.on_resize(),
        )?;
        *inner.listeners.borrow_mut() = Some(listeners);

        // Initial positioning, synchronous so the first paint is laid out.
        inner.run_frame();
        {
            let engine = inner.engine.borrow();
            let mut guard = inner.sink.borrow_mut();
            let mut tracer = tracer_for(guard.as_deref_mut());
            #[expect(
                clippy::cast_possible_truncation,
                reason = "a stack has exactly three slots"
            )]
            let layers = PLANE_COUNT as u32;
            tracer.attach(&AttachEvent {
                progress: engine.progress(),
                layers,
            });
        }

        Ok(Self { inner })
    }

    /// Returns the most recently computed scroll progress.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.inner.engine.borrow().progress()
    }

    /// Returns whether the mount is still live.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.inner.live.get()
    }

    /// Replaces the config.
    ///
    /// An identity-equal config is a no-op; otherwise all layers are torn
    /// down and re-created with the new images, and a frame-aligned
    /// recompute is scheduled against fresh geometry. A no-op after detach.
    pub fn set_config(&self, config: ParallaxConfig) {
        let inner = &self.inner;
        if !inner.live.get() {
            return;
        }
        let mut engine = inner.engine.borrow_mut();
        if &config == engine.config() {
            return;
        }
        decorate_container(inner.presenter.borrow().container(), config.height());

        let changes = engine.set_config(config);
        inner.presenter.borrow_mut().apply(engine.stack(), &changes);

        let mut guard = inner.sink.borrow_mut();
        let mut tracer = tracer_for(guard.as_deref_mut());
        tracer.apply(&ApplyEvent::new(inner.sequence.get(), &changes));
        drop(guard);
        drop(engine);

        // The rebuilt layers reused the old progress; realign next frame.
        if inner.coalescer.request() {
            inner.pending_reason.set(RecomputeReason::ConfigChange);
            if let Some(pump) = &*inner.pump.borrow() {
                pump.request();
            }
        }
    }

    /// Tears the mount down: removes the layers and decor, cancels any
    /// pending frame callback, and unsubscribes both listeners.
    ///
    /// Idempotent — later calls are no-ops. The container's decoration is
    /// left in place, since the container belongs to the host.
    pub fn detach(&self) {
        let inner = &self.inner;
        if !inner.live.replace(false) {
            return;
        }
        if let Some(mut listeners) = inner.listeners.borrow_mut().take() {
            listeners.unsubscribe();
        }
        if let Some(pump) = inner.pump.borrow_mut().take() {
            pump.cancel_all();
        }

        let mut engine = inner.engine.borrow_mut();
        let changes = engine.detach();
        inner.presenter.borrow_mut().apply(engine.stack(), &changes);
        for node in inner.decor.borrow_mut().drain(..) {
            node.remove();
        }

        let mut guard = inner.sink.borrow_mut();
        let mut tracer = tracer_for(guard.as_deref_mut());
        #[expect(
            clippy::cast_possible_truncation,
            reason = "a stack has exactly three slots"
        )]
        let layers_removed = changes.removed.len() as u32;
        tracer.detach(&DetachEvent { layers_removed });
    }
}

impl Drop for Parallax {
    fn drop(&mut self) {
        self.detach();
    }
}

impl core::fmt::Debug for Parallax {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Parallax")
            .field("live", &self.inner.live.get())
            .field("sequence", &self.inner.sequence.get())
            .finish()
    }
}
