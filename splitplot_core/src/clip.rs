// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{BezPath, Point, Rect, Shape};

/// A closed clip outline in scene coordinates.
///
/// Containment follows the non-zero winding rule.
#[derive(Clone, Debug, PartialEq)]
pub struct ClipPath {
    path: BezPath,
}

impl ClipPath {
    /// Wraps an arbitrary closed path.
    pub fn new(path: BezPath) -> Self {
        Self { path }
    }

    /// A rectangular clip.
    pub fn rect(rect: Rect) -> Self {
        Self::polygon(&[
            Point::new(rect.x0, rect.y0),
            Point::new(rect.x1, rect.y0),
            Point::new(rect.x1, rect.y1),
            Point::new(rect.x0, rect.y1),
        ])
    }

    /// A closed polygon through `points`.
    ///
    /// Fewer than three points produce an empty clip that contains nothing.
    pub fn polygon(points: &[Point]) -> Self {
        let mut path = BezPath::new();
        if points.len() >= 3 {
            path.move_to(points[0]);
            for p in &points[1..] {
                path.line_to(*p);
            }
            path.close_path();
        }
        Self { path }
    }

    /// The clip outline.
    pub fn path(&self) -> &BezPath {
        &self.path
    }

    /// Returns `true` if `pt` lies inside the outline.
    pub fn contains(&self, pt: Point) -> bool {
        self.path.winding(pt) != 0
    }

    /// Bounding box of the outline.
    pub fn bounds(&self) -> Rect {
        self.path.bounding_box()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn triangle_contains_interior_only() {
        let clip = ClipPath::polygon(&[
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ]);
        assert!(clip.contains(Point::new(8.0, 2.0)));
        assert!(!clip.contains(Point::new(2.0, 8.0)));
        assert!(!clip.contains(Point::new(20.0, 2.0)));
    }

    #[test]
    fn degenerate_polygon_is_empty() {
        let clip = ClipPath::polygon(&[Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
        assert!(clip.path().elements().is_empty());
        assert!(!clip.contains(Point::new(0.5, 0.5)));
    }
}
