// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Line, Point, Rect};

use crate::ClipPath;

/// One of the two triangles a [`Region`]'s diagonal cuts it into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegionHalf {
    /// Unit vertices `(0,0), (0,1), (1,1)`.
    UpperLeft,
    /// Unit vertices `(0,0), (1,0), (1,1)`.
    LowerRight,
}

impl RegionHalf {
    /// Triangle vertices in the region's unit frame.
    pub fn unit_vertices(self) -> [(f64, f64); 3] {
        match self {
            Self::UpperLeft => [(0.0, 0.0), (0.0, 1.0), (1.0, 1.0)],
            Self::LowerRight => [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)],
        }
    }

    /// The other half.
    pub fn opposite(self) -> Self {
        match self {
            Self::UpperLeft => Self::LowerRight,
            Self::LowerRight => Self::UpperLeft,
        }
    }
}

/// A rectangular drawing area with an axis-relative unit-square frame.
///
/// Unit `(0, 0)` is the bottom-left corner and `(1, 1)` the top-right corner,
/// independent of whatever data coordinates are drawn inside.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    rect: Rect,
}

impl Region {
    /// Creates a region covering `rect` (scene coordinates, y down).
    pub fn new(rect: Rect) -> Self {
        Self { rect: rect.abs() }
    }

    /// The region rectangle in scene coordinates.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Maps unit coordinates into scene coordinates.
    pub fn to_scene(&self, u: f64, v: f64) -> Point {
        Point::new(
            self.rect.x0 + u * self.rect.width(),
            self.rect.y1 - v * self.rect.height(),
        )
    }

    /// Maps a scene point into unit coordinates.
    ///
    /// A zero-sized region maps everything to the origin.
    pub fn to_unit(&self, pt: Point) -> (f64, f64) {
        let w = self.rect.width();
        let h = self.rect.height();
        if w == 0.0 || h == 0.0 {
            return (0.0, 0.0);
        }
        ((pt.x - self.rect.x0) / w, (self.rect.y1 - pt.y) / h)
    }

    /// The unit → scene transform.
    pub fn transform(&self) -> Affine {
        Affine::new([
            self.rect.width(),
            0.0,
            0.0,
            -self.rect.height(),
            self.rect.x0,
            self.rect.y1,
        ])
    }

    /// The diagonal from unit `(0,0)` to unit `(1,1)`.
    pub fn diagonal(&self) -> Line {
        Line::new(self.to_scene(0.0, 0.0), self.to_scene(1.0, 1.0))
    }

    /// The triangular clip mask for one half, in scene coordinates.
    pub fn half_mask(&self, half: RegionHalf) -> ClipPath {
        let [a, b, c] = half.unit_vertices();
        ClipPath::polygon(&[
            self.to_scene(a.0, a.1),
            self.to_scene(b.0, b.1),
            self.to_scene(c.0, c.1),
        ])
    }

    /// The full-region clip.
    pub fn clip(&self) -> ClipPath {
        ClipPath::rect(self.rect)
    }

    /// Classifies a scene point by the half it falls in.
    ///
    /// Points on the diagonal or outside the region have no half.
    pub fn half_of(&self, pt: Point) -> Option<RegionHalf> {
        let (u, v) = self.to_unit(pt);
        if !(0.0..=1.0).contains(&u) || !(0.0..=1.0).contains(&v) {
            return None;
        }
        if v > u {
            Some(RegionHalf::UpperLeft)
        } else if v < u {
            Some(RegionHalf::LowerRight)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn regions() -> [Region; 3] {
        [
            Region::new(Rect::new(0.0, 0.0, 100.0, 100.0)),
            Region::new(Rect::new(40.0, 12.0, 240.0, 62.0)),
            Region::new(Rect::new(3.5, 900.0, 4.25, 1300.0)),
        ]
    }

    #[test]
    fn unit_frame_is_y_up() {
        let r = Region::new(Rect::new(10.0, 20.0, 110.0, 220.0));
        assert_eq!(r.to_scene(0.0, 0.0), Point::new(10.0, 220.0));
        assert_eq!(r.to_scene(1.0, 1.0), Point::new(110.0, 20.0));
        assert_eq!(r.transform() * Point::new(0.5, 0.5), Point::new(60.0, 120.0));
        let (u, v) = r.to_unit(Point::new(60.0, 120.0));
        assert!((u - 0.5).abs() < 1e-12 && (v - 0.5).abs() < 1e-12);
    }

    #[test]
    fn half_masks_partition_the_unit_square() {
        for region in regions() {
            let upper = region.half_mask(RegionHalf::UpperLeft);
            let lower = region.half_mask(RegionHalf::LowerRight);
            // Sample a grid offset from the diagonal so no sample sits on a shared edge.
            for i in 0..40 {
                for j in 0..40 {
                    let u = (f64::from(i) + 0.37) / 40.0;
                    let v = (f64::from(j) + 0.61) / 40.0;
                    if (u - v).abs() < 1e-9 {
                        continue;
                    }
                    let pt = region.to_scene(u, v);
                    let in_upper = upper.contains(pt);
                    let in_lower = lower.contains(pt);
                    assert!(
                        in_upper ^ in_lower,
                        "({u}, {v}) must be covered by exactly one mask"
                    );
                    let expected = if v > u {
                        RegionHalf::UpperLeft
                    } else {
                        RegionHalf::LowerRight
                    };
                    assert_eq!(region.half_of(pt), Some(expected), "classification at ({u}, {v})");
                    assert_eq!(in_upper, expected == RegionHalf::UpperLeft, "mask at ({u}, {v})");
                }
            }
        }
    }

    #[test]
    fn half_masks_cover_the_region_bounds() {
        for region in regions() {
            let upper = region.half_mask(RegionHalf::UpperLeft).bounds();
            let lower = region.half_mask(RegionHalf::LowerRight).bounds();
            assert_eq!(upper.union(lower), region.rect());
        }
    }

    #[test]
    fn diagonal_and_outside_have_no_half() {
        let r = Region::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(r.half_of(r.to_scene(0.5, 0.5)), None);
        assert_eq!(r.half_of(Point::new(-5.0, 50.0)), None);
        assert_eq!(RegionHalf::UpperLeft.opposite(), RegionHalf::LowerRight);
    }
}
