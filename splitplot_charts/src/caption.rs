// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Region captions: a plain name on the left and a call name on the right.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use peniko::Brush;
use peniko::color::palette::css;
use splitplot_core::{FontFamily, Mark, MarkId, Region, TextAnchor, TextBaseline};

use crate::text_mark::TextMarkSpec;
use crate::z_order;

/// Caption styling.
#[derive(Clone, Debug, PartialEq)]
pub struct CaptionStyle {
    /// Font size for both captions.
    pub font_size: f64,
    /// Unit-frame `v` of the caption baselines (negative is below the region).
    pub offset: f64,
    /// Left caption paint.
    pub left_fill: Brush,
    /// Left caption font.
    pub left_family: FontFamily,
    /// Right caption paint.
    pub right_fill: Brush,
    /// Right caption font.
    pub right_family: FontFamily,
}

impl CaptionStyle {
    /// Multiplies the font size by `k`.
    pub fn scaled(mut self, k: f64) -> Self {
        self.font_size *= k;
        self
    }
}

impl Default for CaptionStyle {
    fn default() -> Self {
        Self {
            font_size: 8.0,
            offset: -0.08,
            left_fill: Brush::Solid(css::BLACK),
            left_family: FontFamily::SansSerif,
            right_fill: Brush::Solid(css::BLUE),
            right_family: FontFamily::Monospace,
        }
    }
}

/// A pair of captions under a region.
#[derive(Clone, Debug, PartialEq)]
pub struct CaptionSpec {
    /// Stable-id base; the left caption uses `id_base`, the right `id_base + 1`.
    pub id_base: u64,
    /// Text anchored at the region's left edge.
    pub left: String,
    /// Text anchored at the region's right edge.
    pub right: String,
    /// Styling.
    pub style: CaptionStyle,
}

impl CaptionSpec {
    /// Creates captions with the default style.
    pub fn new(id_base: u64, left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            id_base,
            left: left.into(),
            right: right.into(),
            style: CaptionStyle::default(),
        }
    }

    /// Sets the style.
    pub fn with_style(mut self, style: CaptionStyle) -> Self {
        self.style = style;
        self
    }

    /// Generates both caption marks. They carry no clip.
    pub fn marks(&self, region: &Region) -> Vec<Mark> {
        let s = &self.style;
        let left = TextMarkSpec::new(
            MarkId::from_raw(self.id_base),
            region.to_scene(0.0, s.offset),
            self.left.clone(),
        )
        .with_anchor(TextAnchor::Start)
        .with_baseline(TextBaseline::Alphabetic)
        .with_font_size(s.font_size)
        .with_font_family(s.left_family.clone())
        .with_fill(s.left_fill.clone())
        .with_z_index(z_order::TITLES);
        let right = TextMarkSpec::new(
            MarkId::from_raw(self.id_base + 1),
            region.to_scene(1.0, s.offset),
            self.right.clone(),
        )
        .with_anchor(TextAnchor::End)
        .with_baseline(TextBaseline::Alphabetic)
        .with_font_size(s.font_size)
        .with_font_family(s.right_family.clone())
        .with_fill(s.right_fill.clone())
        .with_z_index(z_order::TITLES);
        alloc::vec![left.mark(), right.mark()]
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use kurbo::Rect;
    use splitplot_core::MarkPayload;

    #[test]
    fn captions_sit_below_region_corners() {
        let region = Region::new(Rect::new(100.0, 100.0, 300.0, 300.0));
        let marks = CaptionSpec::new(500, "Pie plot", "ax.pie()").marks(&region);
        assert_eq!(marks.len(), 2);
        let texts: Vec<_> = marks
            .iter()
            .map(|m| match &m.payload {
                MarkPayload::Text(t) => t.clone(),
                _ => panic!("caption must be text"),
            })
            .collect();
        assert_eq!(texts[0].text, "Pie plot");
        assert_eq!(texts[0].anchor, TextAnchor::Start);
        assert_eq!(texts[0].pos.x, 100.0);
        assert!((texts[0].pos.y - 316.0).abs() < 1e-9);
        assert_eq!(texts[1].anchor, TextAnchor::End);
        assert_eq!(texts[1].pos.x, 300.0);
        assert!(texts[1].font_family.is_monospace());
        assert!(marks.iter().all(|m| !m.is_clipped()));
    }
}
