// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point mark generation.

extern crate alloc;

use alloc::vec::Vec;

use peniko::{Brush, Color};
use splitplot_core::{Mark, MarkId};

use crate::axis::StrokeStyle;
use crate::scale::ScaleContinuous;
use crate::symbol::Symbol;

/// One symbol per `(xs[i], ys[i])` sample.
///
/// Each point is its own path mark (ids derived from `id_base`), so
/// translucent points darken where they overlap.
#[derive(Clone, Debug)]
pub struct PointMarkSpec {
    /// Stable-id base.
    pub id_base: u64,
    /// X values in data units.
    pub xs: Vec<f64>,
    /// Y values in data units.
    pub ys: Vec<f64>,
    /// X scale mapping data x into scene x.
    pub x_scale: ScaleContinuous,
    /// Y scale mapping data y into scene y.
    pub y_scale: ScaleContinuous,
    /// Symbol diameter/side in scene coordinates.
    pub size: f64,
    /// The point glyph shape.
    pub symbol: Symbol,
    /// Fill paint for the point glyphs.
    pub fill: Brush,
    /// Optional outline.
    pub stroke: Option<StrokeStyle>,
    /// Rendering order hint.
    pub z_index: i32,
}

impl PointMarkSpec {
    /// Creates black circles of size 6.
    pub fn new(
        id_base: u64,
        xs: Vec<f64>,
        ys: Vec<f64>,
        x_scale: ScaleContinuous,
        y_scale: ScaleContinuous,
    ) -> Self {
        Self {
            id_base,
            xs,
            ys,
            x_scale,
            y_scale,
            size: 6.0,
            symbol: Symbol::Circle,
            fill: Brush::Solid(Color::BLACK),
            stroke: None,
            z_index: crate::z_order::SERIES_POINTS,
        }
    }

    /// Sets the glyph size.
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the outline.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Sets the symbol shape.
    pub fn with_symbol(mut self, symbol: Symbol) -> Self {
        self.symbol = symbol;
        self
    }

    /// Sets the z-index.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates one mark per finite sample.
    pub fn marks(&self) -> Vec<Mark> {
        let base = MarkId::from_raw(self.id_base);
        self.xs
            .iter()
            .zip(&self.ys)
            .enumerate()
            .filter(|(_, (x, y))| x.is_finite() && y.is_finite())
            .map(|(i, (&x, &y))| {
                let path = self
                    .symbol
                    .path(self.x_scale.map(x), self.y_scale.map(y), self.size);
                let mut builder = Mark::builder(base.child(i as u64))
                    .path()
                    .z_index(self.z_index)
                    .shape(path)
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
    use kurbo::Shape;
    use splitplot_core::MarkPayload;

    #[test]
    fn one_mark_per_finite_point() {
        let s = ScaleContinuous::Linear(ScaleLinear::new((0.0, 1.0), (0.0, 100.0)));
        let spec = PointMarkSpec::new(
            5,
            alloc::vec![0.1, 0.5, f64::NAN],
            alloc::vec![0.2, 0.5, 0.3],
            s,
            s,
        )
        .with_size(10.0);
        let marks = spec.marks();
        assert_eq!(marks.len(), 2);
        assert_ne!(marks[0].id, marks[1].id);
        let MarkPayload::Path(p) = &marks[1].payload else {
            panic!("expected path payload");
        };
        let b = p.path.bounding_box();
        assert!((b.center().x - 50.0).abs() < 0.05);
        assert!((b.width() - 10.0).abs() < 0.05);
    }
}
