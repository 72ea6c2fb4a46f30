// Copyright 2026 the Ridgeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-facing cosmetics: caption overlay and gradient scrim.
//!
//! None of this participates in the parallax contract — the caption and
//! scrim sit above the three image layers in the container's stacking
//! context and are never touched by the scroll transform. They exist so a
//! host can put readable text over the effect without styling from scratch.
//!
//! Stacking order inside the container: layers 1–3, scrim 4, caption 10.

use wasm_bindgen::JsCast as _;
use web_sys::HtmlElement;

/// Where the caption is pinned inside the container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CaptionPlacement {
    /// Dead center.
    #[default]
    Center,
    /// Centered near the top edge.
    Top,
    /// Centered near the bottom edge.
    Bottom,
    /// Vertically centered at the left edge.
    Left,
    /// Vertically centered at the right edge.
    Right,
    /// Top-left corner.
    TopLeft,
    /// Top-right corner.
    TopRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Bottom-right corner.
    BottomRight,
}

impl CaptionPlacement {
    /// Position properties for this placement.
    #[must_use]
    pub fn styles(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Center => &[
                ("top", "50%"),
                ("left", "50%"),
                ("transform", "translate(-50%, -50%)"),
                ("text-align", "center"),
            ],
            Self::Top => &[
                ("top", "8%"),
                ("left", "50%"),
                ("transform", "translateX(-50%)"),
                ("text-align", "center"),
            ],
            Self::Bottom => &[
                ("bottom", "8%"),
                ("left", "50%"),
                ("transform", "translateX(-50%)"),
                ("text-align", "center"),
            ],
            Self::Left => &[
                ("left", "5%"),
                ("top", "50%"),
                ("transform", "translateY(-50%)"),
                ("text-align", "left"),
            ],
            Self::Right => &[
                ("right", "5%"),
                ("top", "50%"),
                ("transform", "translateY(-50%)"),
                ("text-align", "right"),
            ],
            Self::TopLeft => &[("top", "8%"), ("left", "5%"), ("text-align", "left")],
            Self::TopRight => &[("top", "8%"), ("right", "5%"), ("text-align", "right")],
            Self::BottomLeft => &[("bottom", "8%"), ("left", "5%"), ("text-align", "left")],
            Self::BottomRight => &[("bottom", "8%"), ("right", "5%"), ("text-align", "right")],
        }
    }
}

/// The backdrop drawn behind the caption text for contrast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CaptionBackdrop {
    /// Bare text over the layers.
    None,
    /// Translucent dark panel.
    Overlay,
    /// Frosted-glass panel (backdrop blur).
    #[default]
    Glass,
    /// Near-opaque dark panel.
    Solid,
    /// Diagonal dark gradient panel.
    Gradient,
}

impl CaptionBackdrop {
    /// Backdrop properties for this style.
    #[must_use]
    pub fn styles(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::None => &[],
            Self::Overlay => &[
                ("background", "rgba(0, 0, 0, 0.6)"),
                ("border-radius", "8px"),
            ],
            Self::Glass => &[
                ("background", "rgba(255, 255, 255, 0.1)"),
                ("backdrop-filter", "blur(12px) saturate(180%)"),
                ("border", "1px solid rgba(255, 255, 255, 0.2)"),
                ("border-radius", "12px"),
                ("box-shadow", "0 8px 32px rgba(0, 0, 0, 0.3)"),
            ],
            Self::Solid => &[
                ("background", "rgba(0, 0, 0, 0.8)"),
                ("border", "2px solid rgba(255, 255, 255, 0.1)"),
                ("border-radius", "8px"),
            ],
            Self::Gradient => &[
                (
                    "background",
                    "linear-gradient(135deg, rgba(0, 0, 0, 0.7) 0%, rgba(0, 0, 0, 0.3) 100%)",
                ),
                ("border", "1px solid rgba(255, 255, 255, 0.1)"),
                ("border-radius", "12px"),
            ],
        }
    }
}

/// Styles shared by every caption regardless of placement and backdrop.
const CAPTION_BASE_STYLES: &[(&str, &str)] = &[
    ("position", "absolute"),
    ("z-index", "10"),
    ("padding", "1.5rem 2rem"),
    ("box-sizing", "border-box"),
    ("max-width", "95%"),
    ("color", "white"),
    (
        "text-shadow",
        "2px 2px 4px rgba(0, 0, 0, 0.8), 0 0 8px rgba(0, 0, 0, 0.5)",
    ),
];

/// A dark gradient overlay above the image layers, below the caption, for
/// text contrast across the whole container.
const SCRIM_STYLES: &[(&str, &str)] = &[
    ("position", "absolute"),
    ("top", "0"),
    ("left", "0"),
    ("width", "100%"),
    ("height", "100%"),
    (
        "background",
        "linear-gradient(135deg, rgba(0, 0, 0, 0.4) 0%, rgba(0, 0, 0, 0.1) 60%, rgba(0, 0, 0, 0.3) 100%)",
    ),
    ("z-index", "4"),
    ("pointer-events", "none"),
];

fn apply_styles(el: &HtmlElement, styles: &[(&str, &str)]) {
    let s = el.style();
    for &(prop, value) in styles {
        let _ = s.set_property(prop, value);
    }
}

/// Styles the host-supplied caption node and appends it to the container.
pub(crate) fn mount_caption(
    container: &HtmlElement,
    caption: &HtmlElement,
    placement: CaptionPlacement,
    backdrop: CaptionBackdrop,
) {
    apply_styles(caption, CAPTION_BASE_STYLES);
    apply_styles(caption, placement.styles());
    apply_styles(caption, backdrop.styles());
    let _ = container.append_child(caption);
}

/// Creates and mounts the scrim element, returning it for teardown.
pub(crate) fn mount_scrim(container: &HtmlElement) -> Option<HtmlElement> {
    let doc = container.owner_document()?;
    let el: HtmlElement = doc.create_element("div").ok()?.unchecked_into();
    apply_styles(&el, SCRIM_STYLES);
    let _ = container.append_child(&el);
    Some(el)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_of<'a>(styles: &[(&str, &'a str)], prop: &str) -> Option<&'a str> {
        styles.iter().find(|(p, _)| *p == prop).map(|&(_, v)| v)
    }

    #[test]
    fn center_placement_translates_both_axes() {
        let styles = CaptionPlacement::Center.styles();
        assert_eq!(value_of(styles, "transform"), Some("translate(-50%, -50%)"));
    }

    #[test]
    fn corner_placements_need_no_transform() {
        for placement in [
            CaptionPlacement::TopLeft,
            CaptionPlacement::TopRight,
            CaptionPlacement::BottomLeft,
            CaptionPlacement::BottomRight,
        ] {
            assert_eq!(value_of(placement.styles(), "transform"), None);
        }
    }

    #[test]
    fn none_backdrop_is_empty() {
        assert!(CaptionBackdrop::None.styles().is_empty());
    }

    #[test]
    fn glass_backdrop_blurs() {
        let styles = CaptionBackdrop::Glass.styles();
        assert_eq!(
            value_of(styles, "backdrop-filter"),
            Some("blur(12px) saturate(180%)")
        );
    }

    #[test]
    fn caption_sits_above_scrim_above_layers() {
        let caption_z: i32 = value_of(CAPTION_BASE_STYLES, "z-index")
            .unwrap()
            .parse()
            .unwrap();
        let scrim_z: i32 = value_of(SCRIM_STYLES, "z-index").unwrap().parse().unwrap();
        assert!(caption_z > scrim_z, "caption must render above the scrim");
        assert!(scrim_z > 3, "scrim must render above all three layers");
    }

    #[test]
    fn scrim_ignores_pointer_events() {
        assert_eq!(value_of(SCRIM_STYLES, "pointer-events"), Some("none"));
    }
}
