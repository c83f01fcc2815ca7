// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rule mark generation.
//!
//! A "rule" is a straight line segment: gridlines, ticks, spines and the
//! split-view diagonal are all rules.

use kurbo::{BezPath, Line};
use peniko::{Brush, Color};
use splitplot_core::{Mark, MarkId};

use crate::axis::StrokeStyle;
use crate::z_order;

/// A single line segment in scene coordinates.
#[derive(Clone, Debug)]
pub struct RuleMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// The segment.
    pub line: Line,
    /// Stroke style.
    pub stroke: StrokeStyle,
    /// Rendering order hint.
    pub z_index: i32,
}

impl RuleMarkSpec {
    /// Creates a rule from `(x0, y0)` to `(x1, y1)` with a 1px black stroke.
    pub fn new(id: MarkId, x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::from_line(id, Line::new((x0, y0), (x1, y1)))
    }

    /// Creates a rule along `line`.
    pub fn from_line(id: MarkId, line: Line) -> Self {
        Self {
            id,
            line,
            stroke: StrokeStyle::default(),
            z_index: z_order::SERIES_STROKE,
        }
    }

    /// Horizontal rule at `y`.
    pub fn horizontal(id: MarkId, y: f64, x0: f64, x1: f64) -> Self {
        Self::new(id, x0, y, x1, y)
    }

    /// Vertical rule at `x`.
    pub fn vertical(id: MarkId, x: f64, y0: f64, y1: f64) -> Self {
        Self::new(id, x, y0, x, y1)
    }

    /// Sets the stroke paint and width.
    pub fn with_stroke(mut self, stroke: impl Into<Brush>, stroke_width: f64) -> Self {
        self.stroke = StrokeStyle::solid(stroke, stroke_width);
        self
    }

    /// Sets the stroke style.
    pub fn with_stroke_style(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }

    /// Sets the z-index.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates the rule mark.
    pub fn mark(&self) -> Mark {
        let mut p = BezPath::new();
        p.move_to(self.line.p0);
        p.line_to(self.line.p1);
        Mark::builder(self.id)
            .path()
            .shape(p)
            .z_index(self.z_index)
            .fill(Color::TRANSPARENT)
            .stroke(self.stroke.brush.clone())
            .stroke_width(self.stroke.stroke_width)
            .build()
    }
}
