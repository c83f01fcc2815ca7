// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 3D surface mark generation.
//!
//! The surface is normalized into the cube `[-1, 1]³` using its x/y extent and
//! the z limits, projected orthographically through a [`Camera`], and fitted
//! into a scene frame. Each grid cell becomes one quad, emitted far to near so
//! that paint order resolves visibility.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, Point, Rect};
use splitplot_core::{Mark, MarkId};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::axis::StrokeStyle;
use crate::colormap::{Colormap, Normalize};
use crate::contour::ScalarGrid;
use crate::z_order;

/// Orthographic viewing direction, in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    /// Rotation about the z axis.
    pub azimuth: f64,
    /// Angle above the xy plane.
    pub elevation: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            azimuth: -60.0,
            elevation: 30.0,
        }
    }
}

impl Camera {
    /// Projects `(x, y, z)` to view-plane `(right, up)` and its distance from
    /// the viewer along the view axis (larger is farther).
    pub fn project(&self, x: f64, y: f64, z: f64) -> (f64, f64, f64) {
        let (sa, ca) = (self.azimuth.to_radians().sin(), self.azimuth.to_radians().cos());
        let (se, ce) = (
            self.elevation.to_radians().sin(),
            self.elevation.to_radians().cos(),
        );
        let right = -x * sa + y * ca;
        let back = -x * ca - y * sa;
        let up = z * ce + back * se;
        let distance = back * ce - z * se;
        (right, up, distance)
    }
}

/// One projected grid cell.
#[derive(Clone, Debug, PartialEq)]
pub struct Facet {
    /// Row-major cell index, `j * (nx - 1) + i`.
    pub index: usize,
    /// Scene-space corners.
    pub corners: [Point; 4],
    /// Mean of the corner values, in data units.
    pub value: f64,
    /// Mean corner distance from the viewer.
    pub distance: f64,
}

/// A colormapped surface `z = grid(x, y)`.
#[derive(Clone, Debug)]
pub struct SurfaceSpec {
    /// Stable-id base; cell `k` uses `from_raw(id_base).child(k)`.
    pub id_base: u64,
    /// Surface heights over the grid extent.
    pub grid: ScalarGrid,
    /// Z range mapped onto the cube height.
    pub z_limits: (f64, f64),
    /// Scene rect the projected cube is fitted into.
    pub frame: Rect,
    /// Viewing direction.
    pub camera: Camera,
    /// Facet colormap.
    pub colormap: Colormap,
    /// Facet value normalization; `None` spans the finite data.
    pub norm: Option<Normalize>,
    /// Optional facet edges.
    pub edges: Option<StrokeStyle>,
}

impl SurfaceSpec {
    /// Creates an edgeless surface with the default camera.
    pub fn new(
        id_base: u64,
        grid: ScalarGrid,
        z_limits: (f64, f64),
        frame: Rect,
        colormap: Colormap,
    ) -> Self {
        Self {
            id_base,
            grid,
            z_limits,
            frame,
            camera: Camera::default(),
            colormap,
            norm: None,
            edges: None,
        }
    }

    /// Sets the camera.
    pub fn with_camera(mut self, camera: Camera) -> Self {
        self.camera = camera;
        self
    }

    /// Sets an explicit normalization.
    pub fn with_norm(mut self, norm: Normalize) -> Self {
        self.norm = Some(norm);
        self
    }

    /// Strokes every facet outline.
    pub fn with_edges(mut self, edges: StrokeStyle) -> Self {
        self.edges = Some(edges);
        self
    }

    /// Maps data coordinates into the unit cube `[-1, 1]³`.
    fn to_cube(&self, x: f64, y: f64, z: f64) -> (f64, f64, f64) {
        let (x0, x1, y0, y1) = self.grid.extent;
        let (z0, z1) = self.z_limits;
        let unit = |v: f64, lo: f64, hi: f64| {
            if hi == lo {
                0.0
            } else {
                2.0 * (v - lo) / (hi - lo) - 1.0
            }
        };
        (unit(x, x0, x1), unit(y, y0, y1), unit(z, z0, z1))
    }

    /// Scale and offset fitting the projected cube into the frame.
    fn fit(&self) -> (f64, Point) {
        let mut lo = (f64::INFINITY, f64::INFINITY);
        let mut hi = (f64::NEG_INFINITY, f64::NEG_INFINITY);
        for corner in 0..8_u8 {
            let c = |bit: u8| if corner & bit == 0 { -1.0 } else { 1.0 };
            let (r, u, _) = self.camera.project(c(1), c(2), c(4));
            lo = (lo.0.min(r), lo.1.min(u));
            hi = (hi.0.max(r), hi.1.max(u));
        }
        let scale = (self.frame.width() / (hi.0 - lo.0)).min(self.frame.height() / (hi.1 - lo.1));
        let centre = Point::new(0.5 * (lo.0 + hi.0), 0.5 * (lo.1 + hi.1));
        (scale, centre)
    }

    /// Projects every finite cell, sorted far to near.
    pub fn facets(&self) -> Vec<Facet> {
        let (nx, ny) = (self.grid.nx, self.grid.ny);
        if nx < 2 || ny < 2 {
            return Vec::new();
        }
        let (scale, centre) = self.fit();
        let mid = self.frame.center();
        let project = |i: usize, j: usize| {
            let (x, y) = self.grid.position(i, j);
            let (cx, cy, cz) = self.to_cube(x, y, self.grid.value(i, j));
            let (r, u, d) = self.camera.project(cx, cy, cz);
            let p = Point::new(
                mid.x + (r - centre.x) * scale,
                mid.y - (u - centre.y) * scale,
            );
            (p, d)
        };

        let mut facets = Vec::with_capacity((nx - 1) * (ny - 1));
        for j in 0..ny - 1 {
            for i in 0..nx - 1 {
                let cells = [(i, j), (i + 1, j), (i + 1, j + 1), (i, j + 1)];
                let values = cells.map(|(i, j)| self.grid.value(i, j));
                if values.iter().any(|v| !v.is_finite()) {
                    continue;
                }
                let projected = cells.map(|(i, j)| project(i, j));
                facets.push(Facet {
                    index: j * (nx - 1) + i,
                    corners: projected.map(|(p, _)| p),
                    value: values.iter().sum::<f64>() / 4.0,
                    distance: projected.iter().map(|(_, d)| d).sum::<f64>() / 4.0,
                });
            }
        }
        // Stable sort keeps the cell order for equal distances.
        facets.sort_by(|a, b| b.distance.total_cmp(&a.distance));
        facets
    }

    /// Generates one quad mark per facet in painter's order.
    pub fn marks(&self) -> Vec<Mark> {
        let norm = self
            .norm
            .or_else(|| Normalize::from_values(&self.grid.values))
            .unwrap_or(Normalize::new(0.0, 1.0));
        let base = MarkId::from_raw(self.id_base);
        self.facets()
            .into_iter()
            .map(|facet| {
                let mut path = BezPath::new();
                path.move_to(facet.corners[0]);
                for &p in &facet.corners[1..] {
                    path.line_to(p);
                }
                path.close_path();
                let mut builder = Mark::builder(base.child(facet.index as u64))
                    .path()
                    .z_index(z_order::SERIES_FILL)
                    .shape(path)
                    .fill(self.colormap.map(norm.apply(facet.value)));
                if let Some(edges) = &self.edges {
                    builder = builder
                        .stroke(edges.brush.clone())
                        .stroke_width(edges.stroke_width);
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
    use peniko::Brush;
    use splitplot_core::MarkPayload;

    fn linspace(n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| -1.0 + 2.0 * i as f64 / (n - 1) as f64)
            .collect()
    }

    fn ripple(n: usize) -> ScalarGrid {
        let xs = linspace(n);
        ScalarGrid::from_fn(&xs, &xs, (-1.0, 1.0, -1.0, 1.0), |x, y| {
            (5.0 * (x * x + y * y).sqrt()).sin()
        })
    }

    fn frame() -> Rect {
        Rect::new(0.0, 0.0, 200.0, 200.0)
    }

    #[test]
    fn camera_keeps_z_up_and_origin_fixed() {
        let cam = Camera::default();
        let (r, u, d) = cam.project(0.0, 0.0, 0.0);
        assert_eq!((r, u, d), (0.0, 0.0, 0.0));
        let (r, u, d) = cam.project(0.0, 0.0, 1.0);
        assert!(r.abs() < 1e-12);
        assert!((u - 30_f64.to_radians().cos()).abs() < 1e-12);
        // Looking down: higher points are nearer.
        assert!(d < 0.0);
    }

    #[test]
    fn facets_are_painted_far_to_near_inside_the_frame() {
        let spec = SurfaceSpec::new(1, ripple(25), (-2.0, 2.0), frame(), Colormap::Magma);
        let facets = spec.facets();
        assert_eq!(facets.len(), 24 * 24);
        assert!(facets.windows(2).all(|w| w[0].distance >= w[1].distance));
        let inside = frame().inflate(1e-9, 1e-9);
        assert!(
            facets
                .iter()
                .flat_map(|f| f.corners)
                .all(|p| inside.contains(p))
        );
    }

    #[test]
    fn facet_colour_follows_the_normalized_mean() {
        let xs = linspace(3);
        let grid = ScalarGrid::from_fn(&xs, &xs, (-1.0, 1.0, -1.0, 1.0), |_, _| 0.25);
        let norm = Normalize::new(-1.5, 1.0);
        let spec = SurfaceSpec::new(1, grid, (-2.0, 2.0), frame(), Colormap::Gray)
            .with_norm(norm)
            .with_edges(StrokeStyle::default());
        let marks = spec.marks();
        assert_eq!(marks.len(), 4);
        let want = Brush::Solid(Colormap::Gray.map(norm.apply(0.25)));
        for mark in &marks {
            let MarkPayload::Path(p) = &mark.payload else {
                panic!("facets are paths");
            };
            assert_eq!(p.fill, want);
            assert_eq!(p.stroke_width, 1.0);
        }
    }

    #[test]
    fn cells_touching_missing_samples_are_skipped() {
        let mut grid = ripple(3);
        grid.values[4] = f64::NAN;
        let spec = SurfaceSpec::new(1, grid, (-2.0, 2.0), frame(), Colormap::Gray);
        assert!(spec.facets().is_empty());
        let mut grid = ripple(3);
        grid.values[0] = f64::NAN;
        let spec = SurfaceSpec::new(1, grid, (-2.0, 2.0), frame(), Colormap::Gray);
        assert_eq!(spec.marks().len(), 3);
    }
}
