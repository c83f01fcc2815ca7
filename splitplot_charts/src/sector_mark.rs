// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sector (arc) mark generation.
//!
//! Pie and donut slices are annular sectors driven by start/end angles and
//! inner/outer radii.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Circle, Point, Shape};
use peniko::Brush;
use splitplot_core::{Mark, MarkId};

use crate::axis::StrokeStyle;

/// A single annular sector in scene coordinates.
///
/// Angles are in radians, measured clockwise from +x in scene space (y down).
#[derive(Clone, Debug)]
pub struct SectorMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Centre in scene coordinates.
    pub center: Point,
    /// Inner radius (`0` for a full wedge).
    pub inner_radius: f64,
    /// Outer radius.
    pub outer_radius: f64,
    /// Start angle.
    pub start_angle: f64,
    /// End angle.
    pub end_angle: f64,
    /// Fill paint.
    pub fill: Brush,
    /// Optional outline.
    pub stroke: Option<StrokeStyle>,
    /// Flattening tolerance for the arc.
    pub tolerance: f64,
    /// Rendering order hint.
    pub z_index: i32,
}

impl SectorMarkSpec {
    /// Creates an unstroked sector.
    pub fn new(
        id: MarkId,
        center: Point,
        inner_radius: f64,
        outer_radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Self {
        Self {
            id,
            center,
            inner_radius,
            outer_radius,
            start_angle,
            end_angle,
            fill: Brush::default(),
            stroke: None,
            tolerance: 0.1,
            z_index: crate::z_order::SERIES_FILL,
        }
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

    /// Sets the arc flattening tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the z-index.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates the sector mark.
    pub fn marks(&self) -> Vec<Mark> {
        let circle = Circle::new(self.center, self.outer_radius);
        let sweep = self.end_angle - self.start_angle;
        let segment = circle.segment(self.inner_radius, self.start_angle, sweep);
        let path = segment.path_elements(self.tolerance).collect();

        let mut builder = Mark::builder(self.id)
            .path()
            .shape(path)
            .z_index(self.z_index)
            .fill(self.fill.clone());

        if let Some(stroke) = &self.stroke {
            builder = builder
                .stroke(stroke.brush.clone())
                .stroke_width(stroke.stroke_width);
        }

        alloc::vec![builder.build()]
    }
}

/// A ring of sectors whose sweeps are proportional to `values`.
///
/// Slices start at `start_angle` and run counter-clockwise on screen, the way
/// pie charts conventionally read.
#[derive(Clone, Debug)]
pub struct PieSpec {
    /// Stable-id base.
    pub id_base: u64,
    /// Centre in scene coordinates.
    pub center: Point,
    /// Outer radius.
    pub outer_radius: f64,
    /// Ring width (`outer_radius` for a full pie).
    pub width: f64,
    /// Slice values; non-positive values get no slice.
    pub values: Vec<f64>,
    /// Slice fills, cycled.
    pub fills: Vec<Brush>,
    /// Optional slice outline (wedge edges).
    pub stroke: Option<StrokeStyle>,
    /// Start angle in radians, counter-clockwise from +x on screen.
    pub start_angle: f64,
    /// Rendering order hint.
    pub z_index: i32,
}

impl PieSpec {
    /// Creates a full pie starting at 3 o'clock.
    pub fn new(id_base: u64, center: Point, outer_radius: f64, values: Vec<f64>) -> Self {
        Self {
            id_base,
            center,
            outer_radius,
            width: outer_radius,
            values,
            fills: Vec::new(),
            stroke: None,
            start_angle: 0.0,
            z_index: crate::z_order::SERIES_FILL,
        }
    }

    /// Turns the pie into a donut ring of the given width.
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Sets slice fills.
    pub fn with_fills(mut self, fills: impl IntoIterator<Item = Brush>) -> Self {
        self.fills = fills.into_iter().collect();
        self
    }

    /// Sets the slice outline.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Generates one sector mark per positive value.
    pub fn marks(&self) -> Vec<Mark> {
        let total: f64 = self.values.iter().filter(|v| **v > 0.0).sum();
        if total <= 0.0 || !total.is_finite() {
            return Vec::new();
        }
        let base = MarkId::from_raw(self.id_base);
        let inner = (self.outer_radius - self.width).max(0.0);
        let mut out = Vec::new();
        let mut angle = self.start_angle;
        for (i, &v) in self.values.iter().enumerate() {
            if v <= 0.0 || !v.is_finite() {
                continue;
            }
            let sweep = core::f64::consts::TAU * v / total;
            // Screen y points down, so counter-clockwise on screen is a negative angle.
            let mut sector = SectorMarkSpec::new(
                base.child(i as u64),
                self.center,
                inner,
                self.outer_radius,
                -(angle + sweep),
                -angle,
            )
            .with_z_index(self.z_index);
            if !self.fills.is_empty() {
                sector = sector.with_fill(self.fills[i % self.fills.len()].clone());
            }
            if let Some(stroke) = &self.stroke {
                sector = sector.with_stroke(stroke.clone());
            }
            out.extend(sector.marks());
            angle += sweep;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::Rect;
    use peniko::Color;
    use peniko::color::palette::css;
    use splitplot_core::{MarkKind, MarkPayload};

    use super::*;

    #[test]
    fn sector_emits_a_path_mark_with_bounds() {
        let sector = SectorMarkSpec::new(
            MarkId::from_raw(1),
            Point::new(50.0, 50.0),
            10.0,
            20.0,
            0.0,
            core::f64::consts::FRAC_PI_2,
        )
        .with_fill(css::TOMATO)
        .with_stroke(StrokeStyle::solid(css::BLACK, 2.0));

        let marks = sector.marks();
        let [mark] = &marks[..] else {
            panic!("expected a single mark");
        };
        assert_eq!(mark.id, MarkId::from_raw(1));
        assert_eq!(mark.kind(), MarkKind::Path);
        assert!(mark.payload.bounds().is_some());

        let MarkPayload::Path(p) = &mark.payload else {
            panic!("expected path payload");
        };
        assert_eq!(p.fill, css::TOMATO.into());
        assert_eq!(p.stroke, css::BLACK.into());
        assert_eq!(p.stroke_width, 2.0);
        assert_ne!(p.path.bounding_box(), Rect::new(0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn sector_without_stroke_has_zero_stroke_width() {
        let sector = SectorMarkSpec::new(
            MarkId::from_raw(1),
            Point::new(0.0, 0.0),
            0.0,
            10.0,
            0.0,
            core::f64::consts::PI,
        )
        .with_fill(Color::TRANSPARENT);

        let marks = sector.marks();
        let MarkPayload::Path(p) = &marks[0].payload else {
            panic!("expected path payload");
        };
        assert_eq!(p.stroke_width, 0.0);
    }

    #[test]
    fn pie_first_slice_starts_counter_clockwise_from_east() {
        let pie = PieSpec::new(100, Point::new(0.0, 0.0), 10.0, alloc::vec![1.0, 3.0])
            .with_width(3.0)
            .with_fills([Brush::from(css::RED), Brush::from(css::BLUE)]);
        let marks = pie.marks();
        assert_eq!(marks.len(), 2);
        let MarkPayload::Path(first) = &marks[0].payload else {
            panic!("expected path payload");
        };
        // A quarter turn counter-clockwise on screen covers the upper-right quadrant (y < 0).
        assert!(first.path.contains(Point::new(6.0, -6.0)));
        assert!(!first.path.contains(Point::new(6.0, 6.0)));
        // The ring leaves the centre empty.
        assert!(!first.path.contains(Point::new(1.0, -1.0)));
        assert_eq!(first.fill, css::RED.into());
    }
}
