// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quiver (arrow field) mark generation.
//!
//! Each arrow is a closed polygon drawn from its tail. Head dimensions are in
//! units of the shaft width; arrows shorter than the head shrink as a whole.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Affine, BezPath, Point};
use peniko::Brush;
use splitplot_core::{Mark, MarkId};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::axis::StrokeStyle;
use crate::scale::ScaleContinuous;

/// Arrow head proportions, in shaft widths.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrowHead {
    /// Full width of the head.
    pub width: f64,
    /// Tip to barb distance along the outline.
    pub length: f64,
    /// Tip to shaft joint distance along the axis.
    pub axis_length: f64,
}

impl Default for ArrowHead {
    fn default() -> Self {
        Self {
            width: 3.0,
            length: 5.0,
            axis_length: 4.5,
        }
    }
}

/// Arrows at `(xs[i], ys[i])` pointing along `(us[i], vs[i])`.
#[derive(Clone, Debug)]
pub struct QuiverMarkSpec {
    /// Stable-id base; arrow `i` uses `MarkId::from_raw(id_base).child(i)`.
    pub id_base: u64,
    /// Tail x in data units.
    pub xs: Vec<f64>,
    /// Tail y in data units.
    pub ys: Vec<f64>,
    /// Vector x components.
    pub us: Vec<f64>,
    /// Vector y components.
    pub vs: Vec<f64>,
    /// X scale mapping data x into scene x.
    pub x_scale: ScaleContinuous,
    /// Y scale mapping data y into scene y.
    pub y_scale: ScaleContinuous,
    /// Scene length of a unit vector.
    pub length_scale: f64,
    /// Shaft width in scene units.
    pub shaft_width: f64,
    /// Head proportions.
    pub head: ArrowHead,
    /// Fill paints, cycled per arrow.
    pub fills: Vec<Brush>,
    /// Optional outline.
    pub stroke: Option<StrokeStyle>,
    /// Rendering order hint.
    pub z_index: i32,
}

impl QuiverMarkSpec {
    /// Creates black, unstroked arrows.
    pub fn new(
        id_base: u64,
        xs: Vec<f64>,
        ys: Vec<f64>,
        us: Vec<f64>,
        vs: Vec<f64>,
        x_scale: ScaleContinuous,
        y_scale: ScaleContinuous,
    ) -> Self {
        Self {
            id_base,
            xs,
            ys,
            us,
            vs,
            x_scale,
            y_scale,
            length_scale: 1.0,
            shaft_width: 1.0,
            head: ArrowHead::default(),
            fills: alloc::vec![Brush::default()],
            stroke: None,
            z_index: crate::z_order::SERIES_FILL,
        }
    }

    /// Sets the scene length of a unit vector.
    pub fn with_length_scale(mut self, length_scale: f64) -> Self {
        self.length_scale = length_scale;
        self
    }

    /// Sets the shaft width.
    pub fn with_shaft_width(mut self, shaft_width: f64) -> Self {
        self.shaft_width = shaft_width;
        self
    }

    /// Sets the head proportions.
    pub fn with_head(mut self, head: ArrowHead) -> Self {
        self.head = head;
        self
    }

    /// Uses one fill for every arrow.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fills = alloc::vec![fill.into()];
        self
    }

    /// Uses per-arrow fills (cycled if shorter than the arrow count).
    pub fn with_fills(mut self, fills: impl IntoIterator<Item = Brush>) -> Self {
        self.fills = fills.into_iter().collect();
        self
    }

    /// Sets the outline.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Sets the z-index.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// The outline of one arrow with its tail at `tail`.
    ///
    /// `angle` is in radians, counter-clockwise from +x in data orientation.
    pub fn arrow_path(&self, tail: Point, angle: f64, length: f64) -> BezPath {
        let w = self.shaft_width;
        if w <= 0.0 || length <= 0.0 {
            return BezPath::new();
        }
        let len = length / w;
        let k = if len < self.head.length {
            len / self.head.length
        } else {
            1.0
        };
        let hw = 0.5 * self.head.width * k;
        let hl = self.head.length * k;
        let hal = self.head.axis_length * k;
        let sw = 0.5 * k;
        let outline = [
            (0.0, -sw),
            (len - hal, -sw),
            (len - hl, -hw),
            (len, 0.0),
            (len - hl, hw),
            (len - hal, sw),
            (0.0, sw),
        ];
        // Scene y grows down, so the data angle is negated.
        let xf = Affine::translate(tail.to_vec2()) * Affine::rotate(-angle) * Affine::scale(w);
        let mut path = BezPath::new();
        for (i, (x, y)) in outline.into_iter().enumerate() {
            let p = xf * Point::new(x, y);
            if i == 0 {
                path.move_to(p);
            } else {
                path.line_to(p);
            }
        }
        path.close_path();
        path
    }

    /// Generates one path mark per finite, non-zero vector.
    pub fn marks(&self) -> Vec<Mark> {
        let n = self
            .xs
            .len()
            .min(self.ys.len())
            .min(self.us.len())
            .min(self.vs.len());
        let mut out = Vec::with_capacity(n);
        for i in 0..n {
            let (x, y, u, v) = (self.xs[i], self.ys[i], self.us[i], self.vs[i]);
            if !(x.is_finite() && y.is_finite() && u.is_finite() && v.is_finite()) {
                continue;
            }
            let mag = (u * u + v * v).sqrt();
            if mag == 0.0 {
                continue;
            }
            let tail = Point::new(self.x_scale.map(x), self.y_scale.map(y));
            let path = self.arrow_path(tail, v.atan2(u), mag * self.length_scale);
            let fill = if self.fills.is_empty() {
                Brush::default()
            } else {
                self.fills[i % self.fills.len()].clone()
            };
            let mut builder = Mark::builder(MarkId::from_raw(self.id_base).child(i as u64))
                .path()
                .z_index(self.z_index)
                .shape(path)
                .fill(fill);
            if let Some(stroke) = &self.stroke {
                builder = builder
                    .stroke(stroke.brush.clone())
                    .stroke_width(stroke.stroke_width);
            }
            out.push(builder.build());
        }
        out
    }
}
