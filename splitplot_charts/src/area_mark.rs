// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Area mark generation.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::BezPath;
use peniko::{Brush, Color};
use splitplot_core::{Mark, MarkId};

use crate::axis::StrokeStyle;
use crate::scale::ScaleContinuous;

/// The lower edge of an area.
#[derive(Clone, Debug)]
pub enum AreaBase {
    /// A constant baseline in data units.
    Baseline(f64),
    /// A per-sample lower curve in data units.
    Lower(Vec<f64>),
}

/// A filled band between a lower edge and `upper`, sampled at `xs`.
///
/// This generates:
/// - one filled path mark for the band, and
/// - optionally one stroked path mark along the upper edge.
#[derive(Clone, Debug)]
pub struct AreaMarkSpec {
    /// Stable-id base for marks emitted by this mark.
    pub id_base: u64,
    /// X values in data units.
    pub xs: Vec<f64>,
    /// Upper edge values in data units.
    pub upper: Vec<f64>,
    /// Lower edge.
    pub base: AreaBase,
    /// X scale mapping data x into scene x.
    pub x_scale: ScaleContinuous,
    /// Y scale mapping data y into scene y.
    pub y_scale: ScaleContinuous,
    /// Fill paint for the area.
    pub fill: Brush,
    /// Optional stroke for the upper edge.
    pub stroke: Option<StrokeStyle>,
    /// Rendering order hint for the filled area.
    pub z_index: i32,
}

impl AreaMarkSpec {
    /// Creates an area down to a baseline at `0`.
    pub fn new(
        id_base: u64,
        xs: Vec<f64>,
        upper: Vec<f64>,
        x_scale: ScaleContinuous,
        y_scale: ScaleContinuous,
    ) -> Self {
        Self {
            id_base,
            xs,
            upper,
            base: AreaBase::Baseline(0.0),
            x_scale,
            y_scale,
            fill: Brush::default(),
            stroke: None,
            z_index: crate::z_order::SERIES_FILL,
        }
    }

    /// Sets a constant baseline in data units.
    pub fn with_baseline(mut self, baseline: f64) -> Self {
        self.base = AreaBase::Baseline(baseline);
        self
    }

    /// Fills between `lower` and the upper edge instead of a baseline.
    pub fn with_lower(mut self, lower: Vec<f64>) -> Self {
        self.base = AreaBase::Lower(lower);
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the upper-edge stroke.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Sets the z-index; the optional stroke is drawn above the fill.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    fn lower_at(&self, i: usize) -> f64 {
        match &self.base {
            AreaBase::Baseline(b) => *b,
            AreaBase::Lower(v) => v.get(i).copied().unwrap_or(f64::NAN),
        }
    }

    /// Generates marks; samples with a non-finite edge are skipped.
    pub fn marks(&self) -> Vec<Mark> {
        let pts: Vec<(f64, f64, f64)> = self
            .xs
            .iter()
            .zip(&self.upper)
            .enumerate()
            .map(|(i, (&x, &hi))| (x, hi, self.lower_at(i)))
            .filter(|(x, hi, lo)| x.is_finite() && hi.is_finite() && lo.is_finite())
            .collect();
        if pts.is_empty() {
            return Vec::new();
        }

        let xm = |x: f64| self.x_scale.map(x);
        let ym = |y: f64| self.y_scale.map(y);

        let mut band = BezPath::new();
        band.move_to((xm(pts[0].0), ym(pts[0].1)));
        for &(x, hi, _) in &pts[1..] {
            band.line_to((xm(x), ym(hi)));
        }
        for &(x, _, lo) in pts.iter().rev() {
            band.line_to((xm(x), ym(lo)));
        }
        band.close_path();

        let mut out = alloc::vec![
            Mark::builder(MarkId::from_raw(self.id_base))
                .path()
                .z_index(self.z_index)
                .shape(band)
                .fill(self.fill.clone())
                .stroke_width(0.0)
                .build()
        ];

        if let Some(stroke) = &self.stroke {
            let mut line = BezPath::new();
            line.move_to((xm(pts[0].0), ym(pts[0].1)));
            for &(x, hi, _) in &pts[1..] {
                line.line_to((xm(x), ym(hi)));
            }
            out.push(
                Mark::builder(MarkId::from_raw(self.id_base + 1))
                    .path()
                    .z_index(self.z_index.saturating_add(crate::z_order::SERIES_STROKE))
                    .shape(line)
                    .fill(Color::TRANSPARENT)
                    .stroke(stroke.brush.clone())
                    .stroke_width(stroke.stroke_width)
                    .build(),
            );
        }

        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::scale::ScaleLinear;
    use kurbo::{Point, Shape};
    use peniko::color::palette::css;
    use splitplot_core::MarkPayload;

    #[test]
    fn band_contains_points_between_edges() {
        let s = ScaleContinuous::Linear(ScaleLinear::new((0.0, 10.0), (0.0, 10.0)));
        let spec = AreaMarkSpec::new(
            10,
            alloc::vec![0.0, 5.0, 10.0],
            alloc::vec![6.0, 6.0, 6.0],
            s,
            s,
        )
        .with_lower(alloc::vec![2.0, 2.0, 2.0])
        .with_fill(css::BLACK.with_alpha(0.15))
        .with_stroke(StrokeStyle::solid(css::BLACK, 1.0));
        let marks = spec.marks();
        assert_eq!(marks.len(), 2);
        let MarkPayload::Path(p) = &marks[0].payload else {
            panic!("expected path payload");
        };
        assert!(p.path.contains(Point::new(5.0, 4.0)));
        assert!(!p.path.contains(Point::new(5.0, 8.0)));
        assert!(marks[1].z_index > marks[0].z_index);
    }
}
