// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Region titles.
//!
//! A title is centred above a region and sits `padding` above its top edge.
//! It is rendered as a single unclipped [`splitplot_core::Mark`].

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;
use peniko::Brush;
use splitplot_core::{FontFamily, Mark, MarkId, TextAnchor, TextBaseline};

use crate::z_order;
use crate::{TextMeasurer, TextStyle};

/// A region-level title.
#[derive(Clone, Debug)]
pub struct TitleSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Title text (unshaped).
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Font family.
    pub font_family: FontFamily,
    /// Fill paint.
    pub fill: Brush,
    /// Gap between the region top and the title's text box.
    pub padding: f64,
    /// Horizontal anchor along the region top.
    pub anchor: TextAnchor,
    /// Rendering order hint.
    pub z_index: i32,
}

impl TitleSpec {
    /// Creates a title spec with default styling.
    pub fn new(id: MarkId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            font_size: 10.0,
            font_family: FontFamily::default(),
            fill: Brush::default(),
            padding: 6.0,
            anchor: TextAnchor::Middle,
            z_index: z_order::TITLES,
        }
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the vertical padding.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the horizontal anchor.
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    fn style(&self) -> TextStyle {
        TextStyle::new(self.font_size).with_family(self.font_family.clone())
    }

    /// Returns the height this title occupies above its region.
    pub fn measure(&self, measurer: &dyn TextMeasurer) -> f64 {
        let metrics = measurer.measure(&self.text, &self.style());
        (self.padding.max(0.0) + metrics.line_height()).max(0.0)
    }

    /// Returns the title's text box above `region`.
    pub fn bounds(&self, measurer: &dyn TextMeasurer, region: Rect) -> Rect {
        let metrics = measurer.measure(&self.text, &self.style());
        let x0 = match self.anchor {
            TextAnchor::Start => region.x0,
            TextAnchor::Middle => 0.5 * (region.x0 + region.x1) - 0.5 * metrics.advance_width,
            TextAnchor::End => region.x1 - metrics.advance_width,
        };
        let bottom = region.y0 - self.padding.max(0.0);
        Rect::new(x0, bottom - metrics.line_height(), x0 + metrics.advance_width, bottom)
    }

    /// Emits the title mark placed above `region`.
    pub fn marks(&self, measurer: &dyn TextMeasurer, region: Rect) -> Vec<Mark> {
        let metrics = measurer.measure(&self.text, &self.style());
        let x = match self.anchor {
            TextAnchor::Start => region.x0,
            TextAnchor::Middle => 0.5 * (region.x0 + region.x1),
            TextAnchor::End => region.x1,
        };
        // Baseline sits one descent above the padded edge.
        let y = region.y0 - self.padding.max(0.0) - metrics.descent;
        let mark = Mark::builder(self.id)
            .text()
            .z_index(self.z_index)
            .x(x)
            .y(y)
            .label(self.text.clone())
            .font_size(self.font_size)
            .font_family(self.font_family.clone())
            .fill(self.fill.clone())
            .text_anchor(self.anchor)
            .text_baseline(TextBaseline::Alphabetic)
            .angle(0.0)
            .build();
        alloc::vec![mark]
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::HeuristicTextMeasurer;
    use splitplot_core::MarkPayload;

    #[test]
    fn title_sits_centred_above_region() {
        let measurer = HeuristicTextMeasurer;
        let region = Rect::new(100.0, 100.0, 300.0, 300.0);
        let title = TitleSpec::new(MarkId::from_raw(10), "X linear, Y linear").with_padding(8.0);

        let marks = title.marks(&measurer, region);
        assert_eq!(marks.len(), 1);
        let MarkPayload::Text(text) = &marks[0].payload else {
            panic!("expected a text mark");
        };
        assert_eq!(text.pos.x, 200.0);
        assert!(text.pos.y < 92.0);
        assert_eq!(text.anchor, TextAnchor::Middle);
        assert!(marks[0].clips.is_empty());

        let b = title.bounds(&measurer, region);
        assert!(b.y1 <= 92.0 + 1e-9);
        assert!((0.5 * (b.x0 + b.x1) - 200.0).abs() < 1e-9);
        assert!((title.measure(&measurer) - 18.0).abs() < 1e-9);
    }
}
