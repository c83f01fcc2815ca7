// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line mark generation.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::BezPath;
use peniko::Color;
use splitplot_core::{Mark, MarkId};

use crate::axis::StrokeStyle;
use crate::scale::ScaleContinuous;

/// A polyline through `(xs[i], ys[i])`.
///
/// Non-finite samples break the line into separate runs.
#[derive(Clone, Debug)]
pub struct LineMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// X values in data units.
    pub xs: Vec<f64>,
    /// Y values in data units.
    pub ys: Vec<f64>,
    /// X scale mapping data x into scene x.
    pub x_scale: ScaleContinuous,
    /// Y scale mapping data y into scene y.
    pub y_scale: ScaleContinuous,
    /// Stroke style.
    pub stroke: StrokeStyle,
    /// Rendering order hint.
    pub z_index: i32,
}

impl LineMarkSpec {
    /// Creates a line with a 1px black stroke.
    pub fn new(
        id: MarkId,
        xs: Vec<f64>,
        ys: Vec<f64>,
        x_scale: ScaleContinuous,
        y_scale: ScaleContinuous,
    ) -> Self {
        Self {
            id,
            xs,
            ys,
            x_scale,
            y_scale,
            stroke: StrokeStyle::default(),
            z_index: crate::z_order::SERIES_STROKE,
        }
    }

    /// Sets the stroke style.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }

    /// Sets the z-index.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Builds the polyline path in scene coordinates.
    pub fn path(&self) -> BezPath {
        let mut p = BezPath::new();
        let mut pen_down = false;
        for (&x, &y) in self.xs.iter().zip(&self.ys) {
            if !x.is_finite() || !y.is_finite() {
                pen_down = false;
                continue;
            }
            let pt = (self.x_scale.map(x), self.y_scale.map(y));
            if pen_down {
                p.line_to(pt);
            } else {
                p.move_to(pt);
                pen_down = true;
            }
        }
        p
    }

    /// Generates the line mark; empty input yields no marks.
    pub fn marks(&self) -> Vec<Mark> {
        let path = self.path();
        if path.elements().is_empty() {
            return Vec::new();
        }
        alloc::vec![
            Mark::builder(self.id)
                .path()
                .z_index(self.z_index)
                .shape(path)
                .fill(Color::TRANSPARENT)
                .stroke(self.stroke.brush.clone())
                .stroke_width(self.stroke.stroke_width)
                .build()
        ]
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::scale::ScaleLinear;
    use kurbo::PathEl;

    fn unit() -> ScaleContinuous {
        ScaleContinuous::Linear(ScaleLinear::new((0.0, 1.0), (0.0, 100.0)))
    }

    #[test]
    fn nan_breaks_the_line() {
        let spec = LineMarkSpec::new(
            MarkId::from_raw(1),
            alloc::vec![0.0, 0.5, 0.6, 1.0],
            alloc::vec![0.0, f64::NAN, 0.5, 1.0],
            unit(),
            unit(),
        );
        let moves = spec
            .path()
            .elements()
            .iter()
            .filter(|el| matches!(el, PathEl::MoveTo(_)))
            .count();
        assert_eq!(moves, 2);
    }

    #[test]
    fn empty_series_has_no_marks() {
        let spec = LineMarkSpec::new(MarkId::from_raw(1), Vec::new(), Vec::new(), unit(), unit());
        assert!(spec.marks().is_empty());
    }
}
