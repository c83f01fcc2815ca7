// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar mark generation.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;
use peniko::Brush;
use splitplot_core::{Mark, MarkId};

use crate::axis::StrokeStyle;
use crate::scale::ScaleContinuous;

/// Vertical bars centred on `xs[i]`, spanning from the baseline to `heights[i]`.
///
/// Negative heights extend below the baseline.
#[derive(Clone, Debug)]
pub struct BarMarkSpec {
    /// Stable-id base.
    pub id_base: u64,
    /// Bar centres in data units.
    pub xs: Vec<f64>,
    /// Bar heights in data units (relative to the baseline).
    pub heights: Vec<f64>,
    /// Bar width in data units.
    pub width: f64,
    /// Baseline in data units.
    pub baseline: f64,
    /// X scale mapping data x into scene x.
    pub x_scale: ScaleContinuous,
    /// Y scale mapping data y into scene y.
    pub y_scale: ScaleContinuous,
    /// Fill paint.
    pub fill: Brush,
    /// Optional bar outline.
    pub stroke: Option<StrokeStyle>,
    /// Rendering order hint.
    pub z_index: i32,
}

impl BarMarkSpec {
    /// Creates bars of width `0.8` on a zero baseline.
    pub fn new(
        id_base: u64,
        xs: Vec<f64>,
        heights: Vec<f64>,
        x_scale: ScaleContinuous,
        y_scale: ScaleContinuous,
    ) -> Self {
        Self {
            id_base,
            xs,
            heights,
            width: 0.8,
            baseline: 0.0,
            x_scale,
            y_scale,
            fill: Brush::default(),
            stroke: None,
            z_index: crate::z_order::SERIES_FILL,
        }
    }

    /// Sets the bar width in data units.
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Sets the baseline.
    pub fn with_baseline(mut self, baseline: f64) -> Self {
        self.baseline = baseline;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the bar outline.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Sets the z-index.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates one rect mark per finite bar.
    pub fn marks(&self) -> Vec<Mark> {
        let base = MarkId::from_raw(self.id_base);
        let half = 0.5 * self.width;
        self.xs
            .iter()
            .zip(&self.heights)
            .enumerate()
            .filter(|(_, (x, h))| x.is_finite() && h.is_finite())
            .map(|(i, (&x, &h))| {
                let rect = Rect::new(
                    self.x_scale.map(x - half),
                    self.y_scale.map(self.baseline),
                    self.x_scale.map(x + half),
                    self.y_scale.map(self.baseline + h),
                )
                .abs();
                let mut builder = Mark::builder(base.child(i as u64))
                    .rect()
                    .z_index(self.z_index)
                    .bounds(rect)
                    .fill(self.fill.clone());
                if let Some(stroke) = &self.stroke {
                    builder = builder
                        .stroke(stroke.brush.clone())
                        .stroke_width(stroke.stroke_width);
                }
                builder.build()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::scale::ScaleLinear;
    use splitplot_core::MarkPayload;

    #[test]
    fn negative_bars_extend_below_baseline() {
        let x = ScaleContinuous::Linear(ScaleLinear::new((0.0, 10.0), (0.0, 100.0)));
        let y = ScaleContinuous::Linear(ScaleLinear::new((-1.0, 1.0), (100.0, 0.0)));
        let marks = BarMarkSpec::new(1, alloc::vec![2.0, 5.0], alloc::vec![0.5, -0.5], x, y)
            .with_width(1.0)
            .marks();
        assert_eq!(marks.len(), 2);
        let (MarkPayload::Rect(up), MarkPayload::Rect(down)) = (&marks[0].payload, &marks[1].payload)
        else {
            panic!("expected rect payloads");
        };
        assert_eq!(up.rect, Rect::new(15.0, 25.0, 25.0, 50.0));
        assert_eq!(down.rect, Rect::new(45.0, 50.0, 55.0, 75.0));
    }
}
