// Copyright 2026 the Ridgeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web demo: a scrolling page with two parallax sections.
//!
//! The hero section mounts with a glass-backdrop caption, a gradient scrim,
//! and a HUD fed by a [`TraceSink`] showing live progress and the recompute
//! count. The second section is captionless. Two buttons exercise the
//! lifecycle: one swaps the hero's image set (full layer rebuild), the other
//! detaches the second section (idempotent — click it twice).
//!
//! Build with: `wasm-pack build --target web demos/web_parallax`
//!
//! Then serve `demos/web_parallax/` and open `index.html` in a browser.
//!
//! [`TraceSink`]: ridgeline_core::trace::TraceSink

// This crate only runs in the browser; suppress dead-code warnings when
// cargo-checking on a native host target.
#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

use alloc::boxed::Box;
use alloc::format;
use alloc::rc::Rc;
use core::cell::Cell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast as _;
use web_sys::{Document, HtmlElement};

use ridgeline_backend_web::{CaptionBackdrop, CaptionPlacement, MountOptions, Parallax};
use ridgeline_core::config::ParallaxConfig;
use ridgeline_core::trace::{RecomputeEvent, TraceSink};

const HERO_LAYERS: [&str; 3] = [
    "assets/dusk-back.svg",
    "assets/dusk-mid.svg",
    "assets/dusk-front.svg",
];

const RIDGE_LAYERS: [&str; 3] = [
    "assets/pine-back.svg",
    "assets/pine-mid.svg",
    "assets/pine-front.svg",
];

const INTRO_COPY: &str = "Scroll down. Each section below stacks three image \
layers and drives their vertical offsets from a single scroll-progress \
ratio, so the background drifts while the foreground holds still.";

const BETWEEN_COPY: &str = "Scroll events are coalesced to one recompute per \
rendering frame; the HUD in the corner counts how many actually ran. Resize \
the window to trigger the independent resize path.";

const OUTRO_COPY: &str = "The buttons above the footer swap the hero's image \
set (tearing down and re-creating all three layers) and detach the second \
section entirely.";

/// HUD sink: rewrites one line of text per recompute.
struct HudSink {
    hud: HtmlElement,
    recomputes: u64,
}

impl TraceSink for HudSink {
    fn on_recompute(&mut self, e: &RecomputeEvent) {
        self.recomputes += 1;
        let text = format!(
            "progress {:.2} · recomputes {}",
            e.progress, self.recomputes
        );
        self.hud.set_text_content(Some(&text));
    }
}

fn hero_config() -> ParallaxConfig {
    ParallaxConfig::new(HERO_LAYERS[0], HERO_LAYERS[1], HERO_LAYERS[2]).with_height("70vh")
}

fn swapped_hero_config() -> ParallaxConfig {
    ParallaxConfig::new(RIDGE_LAYERS[0], RIDGE_LAYERS[1], RIDGE_LAYERS[2]).with_height("70vh")
}

/// Entry point — called automatically by `wasm_bindgen(start)`.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    let window = web_sys::window().expect("no global window");
    let document = window.document().expect("no document");
    let body = document.body().expect("no body");

    style_page(&body);

    append_heading(&document, &body, "Ridgeline")?;
    append_copy(&document, &body, INTRO_COPY)?;

    // Hero: caption + scrim + HUD instrumentation.
    let hud = create_hud(&document, &body)?;
    let hero_container = create_section(&document, &body)?;
    let caption = create_caption(
        &document,
        "Depth from scroll",
        "Three layers, one progress ratio.",
    )?;
    let hero = Parallax::attach(
        hero_container,
        hero_config(),
        MountOptions {
            caption: Some(caption),
            caption_placement: CaptionPlacement::Center,
            caption_backdrop: CaptionBackdrop::Glass,
            scrim: true,
            trace_sink: Some(Box::new(HudSink { hud, recomputes: 0 })),
        },
    )?;

    append_copy(&document, &body, BETWEEN_COPY)?;

    // Second section: images only.
    let ridge_container = create_section(&document, &body)?;
    let ridge = Parallax::attach(
        ridge_container,
        ParallaxConfig::new(RIDGE_LAYERS[0], RIDGE_LAYERS[1], RIDGE_LAYERS[2]),
        MountOptions {
            scrim: true,
            ..MountOptions::default()
        },
    )?;

    append_copy(&document, &body, OUTRO_COPY)?;

    // Swap the hero's image set on click — a full layer rebuild.
    let hero = Rc::new(hero);
    let swap_button = create_button(&document, &body, "Swap hero images")?;
    let hero_for_swap = Rc::clone(&hero);
    let flipped = Cell::new(false);
    let on_swap = Closure::wrap(Box::new(move || {
        let config = if flipped.get() {
            hero_config()
        } else {
            swapped_hero_config()
        };
        flipped.set(!flipped.get());
        hero_for_swap.set_config(config);
    }) as Box<dyn FnMut()>);
    swap_button.add_event_listener_with_callback("click", on_swap.as_ref().unchecked_ref())?;
    on_swap.forget();

    // Detach the second section on click. Clicking twice is safe.
    let ridge = Rc::new(ridge);
    let detach_button = create_button(&document, &body, "Detach second section")?;
    let ridge_for_detach = Rc::clone(&ridge);
    let on_detach = Closure::wrap(Box::new(move || ridge_for_detach.detach()) as Box<dyn FnMut()>);
    detach_button.add_event_listener_with_callback("click", on_detach.as_ref().unchecked_ref())?;
    on_detach.forget();

    append_copy(
        &document,
        &body,
        "That's the whole engine: attach, recompute on scroll and resize, detach.",
    )?;

    // Keep the mounts alive — there is no graceful shutdown on the web.
    core::mem::forget(hero);
    core::mem::forget(ridge);

    Ok(())
}

fn style_page(body: &HtmlElement) {
    let s = body.style();
    let _ = s.set_property("margin", "0");
    let _ = s.set_property("background", "#10151c");
    let _ = s.set_property("color", "#d8dee6");
    let _ = s.set_property(
        "font-family",
        "system-ui, -apple-system, 'Segoe UI', sans-serif",
    );
    let _ = s.set_property("line-height", "1.6");
}

fn create_element(document: &Document, tag: &str) -> Result<HtmlElement, JsValue> {
    Ok(document.create_element(tag)?.unchecked_into())
}

fn append_heading(
    document: &Document,
    body: &HtmlElement,
    text: &str,
) -> Result<HtmlElement, JsValue> {
    let heading = create_element(document, "h1")?;
    heading.set_text_content(Some(text));
    let s = heading.style();
    let _ = s.set_property("margin", "2rem auto 0");
    let _ = s.set_property("max-width", "42rem");
    let _ = s.set_property("padding", "0 1.5rem");
    body.append_child(&heading)?;
    Ok(heading)
}

fn append_copy(
    document: &Document,
    body: &HtmlElement,
    text: &str,
) -> Result<HtmlElement, JsValue> {
    let paragraph = create_element(document, "p")?;
    paragraph.set_text_content(Some(text));
    let s = paragraph.style();
    let _ = s.set_property("margin", "2rem auto");
    let _ = s.set_property("max-width", "42rem");
    let _ = s.set_property("padding", "0 1.5rem");
    body.append_child(&paragraph)?;
    Ok(paragraph)
}

/// Creates a bare container for a parallax mount; the engine decorates it.
fn create_section(document: &Document, body: &HtmlElement) -> Result<HtmlElement, JsValue> {
    let section = create_element(document, "div")?;
    body.append_child(&section)?;
    Ok(section)
}

fn create_caption(
    document: &Document,
    title: &str,
    subtitle: &str,
) -> Result<HtmlElement, JsValue> {
    let caption = create_element(document, "div")?;
    let heading = create_element(document, "h2")?;
    heading.set_text_content(Some(title));
    let _ = heading.style().set_property("margin", "0 0 0.5rem");
    let line = create_element(document, "p")?;
    line.set_text_content(Some(subtitle));
    let _ = line.style().set_property("margin", "0");
    caption.append_child(&heading)?;
    caption.append_child(&line)?;
    Ok(caption)
}

fn create_hud(document: &Document, body: &HtmlElement) -> Result<HtmlElement, JsValue> {
    let hud = create_element(document, "div")?;
    hud.set_text_content(Some("progress 0.00 · recomputes 0"));
    let s = hud.style();
    let _ = s.set_property("position", "fixed");
    let _ = s.set_property("top", "0.75rem");
    let _ = s.set_property("right", "0.75rem");
    let _ = s.set_property("padding", "0.4rem 0.7rem");
    let _ = s.set_property("background", "rgba(0, 0, 0, 0.6)");
    let _ = s.set_property("border-radius", "6px");
    let _ = s.set_property("font-size", "0.8rem");
    let _ = s.set_property("font-variant-numeric", "tabular-nums");
    let _ = s.set_property("z-index", "100");
    body.append_child(&hud)?;
    Ok(hud)
}

fn create_button(
    document: &Document,
    body: &HtmlElement,
    label: &str,
) -> Result<HtmlElement, JsValue> {
    let button = create_element(document, "button")?;
    button.set_text_content(Some(label));
    let s = button.style();
    let _ = s.set_property("display", "block");
    let _ = s.set_property("margin", "0.5rem auto");
    let _ = s.set_property("padding", "0.5rem 1.25rem");
    body.append_child(&button)?;
    Ok(button)
}
