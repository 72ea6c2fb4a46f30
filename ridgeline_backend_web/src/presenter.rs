// Copyright 2026 the Ridgeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM element management.
//!
//! Translates [`LayerStack`] state into a set of full-bleed background
//! `<div>` elements by applying incremental updates from [`FrameChanges`].
//!
//! [`LayerStack`]: ridgeline_core::layer::LayerStack
//! [`FrameChanges`]: ridgeline_core::layer::FrameChanges

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use ridgeline_core::backend::Presenter;
use ridgeline_core::config::ImageRef;
use ridgeline_core::layer::{FrameChanges, LayerStack};
use wasm_bindgen::JsCast as _;
use web_sys::HtmlElement;

/// Styles shared by every layer element: absolute full-bleed positioning,
/// cover-fit background, 120% height overdraw so the maximum offset
/// (`100 * (1 - 0.2) = 80px` for the background) never exposes the
/// container edge, and transform/containment hints for the compositor.
const LAYER_BASE_STYLES: &[(&str, &str)] = &[
    ("position", "absolute"),
    ("top", "0"),
    ("left", "0"),
    ("width", "100%"),
    ("height", "120%"),
    ("background-size", "cover"),
    ("background-position", "center"),
    ("background-repeat", "no-repeat"),
    ("will-change", "transform"),
    ("contain", "layout style paint"),
];

/// Maps a [`LayerStack`] to live DOM elements, applying incremental updates
/// from [`FrameChanges`].
///
/// The presenter owns a container `HtmlElement` to which layer `<div>`
/// elements are added and removed. Call [`apply`](Presenter::apply) after
/// each recompute with the latest `FrameChanges` to synchronize the DOM
/// with the stack.
pub struct DomPresenter {
    container: HtmlElement,
    elements: Vec<Option<HtmlElement>>,
}

impl core::fmt::Debug for DomPresenter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomPresenter")
            .field("container", &"HtmlElement")
            .field("elements_len", &self.elements.len())
            .finish()
    }
}

impl DomPresenter {
    /// Creates a new presenter that manages layer children of `container`.
    #[must_use]
    pub fn new(container: HtmlElement) -> Self {
        Self {
            container,
            elements: Vec::new(),
        }
    }

    /// Returns a reference to the container element.
    #[must_use]
    pub fn container(&self) -> &HtmlElement {
        &self.container
    }

    /// Returns the DOM element for the given slot index, if it exists.
    #[must_use]
    pub fn get_element(&self, idx: u32) -> Option<&HtmlElement> {
        self.elements
            .get(idx as usize)
            .and_then(|slot| slot.as_ref())
    }

    /// Takes an element out of the slot, leaving `None`.
    fn take_element(&mut self, idx: u32) -> Option<HtmlElement> {
        self.elements.get_mut(idx as usize)?.take()
    }

    /// Stores an element at the given slot index, growing the vec if needed.
    fn put_element(&mut self, idx: u32, el: HtmlElement) {
        let slot = idx as usize;
        if self.elements.len() <= slot {
            self.elements.resize_with(slot + 1, || None);
        }
        self.elements[slot] = Some(el);
    }
}

impl Presenter for DomPresenter {
    /// Applies incremental changes from a [`FrameChanges`] to the DOM.
    fn apply(&mut self, stack: &LayerStack, changes: &FrameChanges) {
        // 1. Removals (first, so a rebuild can reuse slot indices)
        for &idx in &changes.removed {
            if let Some(el) = self.take_element(idx) {
                el.remove();
            }
        }

        // 2. Additions
        for &idx in &changes.added {
            let doc = self.container.owner_document().expect("no owner document");
            let el: HtmlElement = doc
                .create_element("div")
                .expect("create_element failed")
                .unchecked_into();
            let s = el.style();
            for &(prop, value) in LAYER_BASE_STYLES {
                let _ = s.set_property(prop, value);
            }
            let plane = stack.plane_at(idx);
            let _ = s.set_property("z-index", &format!("{}", plane.z_index()));
            let _ = self.container.append_child(&el);
            self.put_element(idx, el);
        }

        // 3. Content
        for &idx in &changes.content {
            if let Some(el) = self.get_element(idx) {
                let css = background_image_css(stack.image_at(idx));
                let _ = el.style().set_property("background-image", &css);
            }
        }

        // 4. Transforms
        for &idx in &changes.transforms {
            if let Some(el) = self.get_element(idx) {
                let css = translate_css(stack.offset_y_at(idx));
                let _ = el.style().set_property("transform", &css);
            }
        }
    }
}

/// Decorates the host-owned container for layering: relative positioning,
/// the configured height, hidden overflow, and an isolated stacking context
/// so the layer z-indices cannot leak into the surrounding page.
pub(crate) fn decorate_container(container: &HtmlElement, height: &str) {
    let s = container.style();
    let _ = s.set_property("position", "relative");
    let _ = s.set_property("height", height);
    let _ = s.set_property("overflow", "hidden");
    let _ = s.set_property("width", "100%");
    let _ = s.set_property("margin-bottom", "2rem");
    let _ = s.set_property("isolation", "isolate");
    let _ = s.set_property("z-index", "1");
}

/// Formats a vertical offset as a `translate3d` value (3-D form, which
/// browsers promote to its own compositing layer).
pub(crate) fn translate_css(offset_y: f64) -> String {
    format!("translate3d(0, {offset_y}px, 0)")
}

/// Formats an image reference as a `background-image` value.
pub(crate) fn background_image_css(image: &ImageRef) -> String {
    format!("url({})", image.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_is_vertical_only() {
        assert_eq!(translate_css(0.0), "translate3d(0, 0px, 0)");
        assert_eq!(translate_css(40.0), "translate3d(0, 40px, 0)");
        assert_eq!(translate_css(12.5), "translate3d(0, 12.5px, 0)");
    }

    #[test]
    fn background_image_wraps_url() {
        let image = ImageRef::new("mountains/back.webp");
        assert_eq!(background_image_css(&image), "url(mountains/back.webp)");
    }

    #[test]
    fn base_styles_cover_and_overdraw() {
        let find = |prop: &str| {
            LAYER_BASE_STYLES
                .iter()
                .find(|(p, _)| *p == prop)
                .map(|(_, v)| *v)
        };
        assert_eq!(find("height"), Some("120%"));
        assert_eq!(find("background-size"), Some("cover"));
        assert_eq!(find("will-change"), Some("transform"));
        assert_eq!(find("position"), Some("absolute"));
    }
}
