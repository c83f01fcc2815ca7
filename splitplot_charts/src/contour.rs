// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Filled contour bands and isolines over a regular scalar grid.
//!
//! Every grid cell is split into two triangles along its `(0,0)`–`(1,1)`
//! diagonal. Within a triangle the field is linear, so a band `[lo, hi]` is the
//! triangle clipped against both levels, and an isoline is a single segment.
//! Runs of cells lying wholly inside one band are emitted as rectangles.
//!
//! Each band becomes one path mark and each level one stroked path mark.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, Point};
use peniko::Brush;
use splitplot_core::{Mark, MarkId};

use crate::axis::StrokeStyle;
use crate::colormap::{Colormap, Normalize};
use crate::scale::{ScaleContinuous, infer_domain_f64, nice_ticks};
use crate::z_order;

/// Which grid row sits at the top of the extent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GridOrigin {
    /// Row 0 is at the top (image convention).
    #[default]
    Upper,
    /// Row 0 is at the bottom.
    Lower,
}

/// Values sampled on a regular `nx × ny` lattice.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarGrid {
    /// Samples per row.
    pub nx: usize,
    /// Number of rows.
    pub ny: usize,
    /// Row-major samples, `values[row * nx + col]`.
    pub values: Vec<f64>,
    /// Data extent `(x0, x1, y0, y1)` covered by the lattice.
    pub extent: (f64, f64, f64, f64),
    /// Row orientation.
    pub origin: GridOrigin,
}

impl ScalarGrid {
    /// Samples `f` over `xs × ys`; row `j` holds `f(xs[i], ys[j])`.
    ///
    /// `ys[0]` should correspond to the top of `extent` (see [`GridOrigin::Upper`]).
    pub fn from_fn(
        xs: &[f64],
        ys: &[f64],
        extent: (f64, f64, f64, f64),
        f: impl Fn(f64, f64) -> f64,
    ) -> Self {
        let f = &f;
        let values = ys
            .iter()
            .flat_map(|&y| xs.iter().map(move |&x| f(x, y)))
            .collect();
        Self::new(xs.len(), ys.len(), values, extent)
    }

    /// Wraps row-major `values`; missing samples read as NaN.
    pub fn new(nx: usize, ny: usize, values: Vec<f64>, extent: (f64, f64, f64, f64)) -> Self {
        Self {
            nx,
            ny,
            values,
            extent,
            origin: GridOrigin::Upper,
        }
    }

    /// Sets the row orientation.
    pub fn with_origin(mut self, origin: GridOrigin) -> Self {
        self.origin = origin;
        self
    }

    /// The sample at column `i`, row `j`.
    pub fn value(&self, i: usize, j: usize) -> f64 {
        self.values.get(j * self.nx + i).copied().unwrap_or(f64::NAN)
    }

    /// Data coordinates of lattice point `(i, j)`.
    pub fn position(&self, i: usize, j: usize) -> (f64, f64) {
        let (x0, x1, y0, y1) = self.extent;
        let fx = if self.nx > 1 {
            i as f64 / (self.nx - 1) as f64
        } else {
            0.0
        };
        let fy = if self.ny > 1 {
            j as f64 / (self.ny - 1) as f64
        } else {
            0.0
        };
        let y = match self.origin {
            GridOrigin::Upper => y1 - fy * (y1 - y0),
            GridOrigin::Lower => y0 + fy * (y1 - y0),
        };
        (x0 + fx * (x1 - x0), y)
    }

    /// Finite `(min, max)` of the samples.
    pub fn range(&self) -> Option<(f64, f64)> {
        infer_domain_f64(&self.values)
    }
}

/// About `n` nice contour levels whose first and last values bracket `[zmin, zmax]`.
pub fn contour_levels(zmin: f64, zmax: f64, n: usize) -> Vec<f64> {
    nice_ticks(zmin, zmax, n)
}

/// One colour per band, sampled at band midpoints normalized over the level range.
pub fn band_colors(levels: &[f64], colormap: Colormap, alpha: f32) -> Vec<Brush> {
    let (Some(&first), Some(&last)) = (levels.first(), levels.last()) else {
        return Vec::new();
    };
    let norm = Normalize::new(first, last);
    levels
        .windows(2)
        .map(|w| Brush::Solid(colormap.map(norm.apply(0.5 * (w[0] + w[1]))).with_alpha(alpha)))
        .collect()
}

type Vertex = (Point, f64);

/// Filled bands and isolines for one grid.
#[derive(Clone, Debug)]
pub struct ContourSpec {
    /// Stable-id base; band `k` uses `from_raw(id_base).child(k)` and level `k`
    /// uses `from_raw(id_base + 1).child(k)`.
    pub id_base: u64,
    /// The sampled field.
    pub grid: ScalarGrid,
    /// Ascending levels; band `k` spans `levels[k]..=levels[k + 1]`.
    pub levels: Vec<f64>,
    /// X scale mapping data x into scene x.
    pub x_scale: ScaleContinuous,
    /// Y scale mapping data y into scene y.
    pub y_scale: ScaleContinuous,
    /// Band fills; no bands are drawn when empty.
    pub band_fills: Vec<Brush>,
    /// Isoline stroke; no lines are drawn when `None`.
    pub lines: Option<StrokeStyle>,
}

impl ContourSpec {
    /// Creates a spec with neither bands nor lines enabled.
    pub fn new(
        id_base: u64,
        grid: ScalarGrid,
        levels: Vec<f64>,
        x_scale: ScaleContinuous,
        y_scale: ScaleContinuous,
    ) -> Self {
        Self {
            id_base,
            grid,
            levels,
            x_scale,
            y_scale,
            band_fills: Vec::new(),
            lines: None,
        }
    }

    /// Fills bands with explicit paints (cycled if shorter than the band count).
    pub fn with_band_fills(mut self, fills: Vec<Brush>) -> Self {
        self.band_fills = fills;
        self
    }

    /// Fills bands from a colormap.
    pub fn with_colormap(self, colormap: Colormap, alpha: f32) -> Self {
        let fills = band_colors(&self.levels, colormap, alpha);
        self.with_band_fills(fills)
    }

    /// Strokes every level.
    pub fn with_lines(mut self, stroke: StrokeStyle) -> Self {
        self.lines = Some(stroke);
        self
    }

    fn vertex(&self, i: usize, j: usize) -> Vertex {
        let (x, y) = self.grid.position(i, j);
        (
            Point::new(self.x_scale.map(x), self.y_scale.map(y)),
            self.grid.value(i, j),
        )
    }

    /// The two triangles of every cell whose corners are all finite.
    fn triangles(&self) -> impl Iterator<Item = [Vertex; 3]> + '_ {
        let cols = self.grid.nx.saturating_sub(1);
        let rows = self.grid.ny.saturating_sub(1);
        (0..rows)
            .flat_map(move |j| (0..cols).map(move |i| (i, j)))
            .filter_map(|(i, j)| {
                let c = [
                    self.vertex(i, j),
                    self.vertex(i + 1, j),
                    self.vertex(i + 1, j + 1),
                    self.vertex(i, j + 1),
                ];
                c.iter()
                    .all(|v| v.1.is_finite())
                    .then_some([[c[0], c[1], c[2]], [c[0], c[2], c[3]]])
            })
            .flatten()
    }

    /// Band `k` as a path in scene coordinates.
    pub fn band_path(&self, k: usize) -> BezPath {
        let mut path = BezPath::new();
        let (Some(&lo), Some(&hi)) = (self.levels.get(k), self.levels.get(k + 1)) else {
            return path;
        };
        let last = k + 2 == self.levels.len();
        let in_band = |z: f64| z >= lo && (z < hi || (last && z <= hi));
        let cols = self.grid.nx.saturating_sub(1);
        let rows = self.grid.ny.saturating_sub(1);

        let mut a = Vec::with_capacity(8);
        let mut b = Vec::with_capacity(8);
        for j in 0..rows {
            let mut run: Option<usize> = None;
            for i in 0..=cols {
                let full = i < cols
                    && [(i, j), (i + 1, j), (i + 1, j + 1), (i, j + 1)]
                        .iter()
                        .all(|&(ci, cj)| in_band(self.grid.value(ci, cj)));
                if full {
                    run.get_or_insert(i);
                    continue;
                }
                if let Some(start) = run.take() {
                    push_polygon(
                        &mut path,
                        [
                            self.vertex(start, j).0,
                            self.vertex(i, j).0,
                            self.vertex(i, j + 1).0,
                            self.vertex(start, j + 1).0,
                        ]
                        .into_iter(),
                    );
                }
                if i == cols {
                    break;
                }
                let c = [
                    self.vertex(i, j),
                    self.vertex(i + 1, j),
                    self.vertex(i + 1, j + 1),
                    self.vertex(i, j + 1),
                ];
                if !c.iter().all(|v| v.1.is_finite()) {
                    continue;
                }
                for tri in [[c[0], c[1], c[2]], [c[0], c[2], c[3]]] {
                    a.clear();
                    a.extend_from_slice(&tri);
                    clip_polygon(&a, lo, true, &mut b);
                    clip_polygon(&b, hi, false, &mut a);
                    if a.len() >= 3 {
                        push_polygon(&mut path, a.iter().map(|v| v.0));
                    }
                }
            }
        }
        path
    }

    /// The isoline at `level` as a set of segments in scene coordinates.
    pub fn isoline_path(&self, level: f64) -> BezPath {
        let mut path = BezPath::new();
        let mut pen: Option<Point> = None;
        for tri in self.triangles() {
            let mut hits: [Point; 2] = [Point::ZERO; 2];
            let mut n = 0;
            for (p, q) in [(0, 1), (1, 2), (0, 2)] {
                let (va, vb) = (tri[p], tri[q]);
                if (va.1 > level) != (vb.1 > level) && n < 2 {
                    hits[n] = crossing(va, vb, level);
                    n += 1;
                }
            }
            if n != 2 {
                continue;
            }
            let [s, e] = if pen == Some(hits[1]) {
                [hits[1], hits[0]]
            } else {
                hits
            };
            if pen != Some(s) {
                path.move_to(s);
            }
            path.line_to(e);
            pen = Some(e);
        }
        path
    }

    /// Generates band fills followed by isolines.
    pub fn marks(&self) -> Vec<Mark> {
        let mut out = Vec::new();
        if !self.band_fills.is_empty() {
            for k in 0..self.levels.len().saturating_sub(1) {
                let path = self.band_path(k);
                if path.elements().is_empty() {
                    continue;
                }
                out.push(
                    Mark::builder(MarkId::from_raw(self.id_base).child(k as u64))
                        .path()
                        .z_index(z_order::SERIES_FILL)
                        .shape(path)
                        .fill(self.band_fills[k % self.band_fills.len()].clone())
                        .build(),
                );
            }
        }
        if let Some(stroke) = &self.lines {
            for (k, level) in self.levels.iter().enumerate() {
                let path = self.isoline_path(*level);
                if path.elements().is_empty() {
                    continue;
                }
                out.push(
                    Mark::builder(MarkId::from_raw(self.id_base + 1).child(k as u64))
                        .path()
                        .z_index(z_order::SERIES_STROKE)
                        .shape(path)
                        .stroke(stroke.brush.clone())
                        .stroke_width(stroke.stroke_width)
                        .build(),
                );
            }
        }
        out
    }
}

/// Point where the field crosses `level` along `a`–`b`.
///
/// Endpoints are ordered canonically so neighbouring triangles agree exactly.
fn crossing(a: Vertex, b: Vertex, level: f64) -> Point {
    let (a, b) = if (a.0.x, a.0.y) <= (b.0.x, b.0.y) {
        (a, b)
    } else {
        (b, a)
    };
    let t = (level - a.1) / (b.1 - a.1);
    a.0.lerp(b.0, t)
}

/// Sutherland–Hodgman against a single level in value space.
fn clip_polygon(input: &[Vertex], level: f64, keep_above: bool, out: &mut Vec<Vertex>) {
    out.clear();
    let inside = |v: &Vertex| {
        if keep_above {
            v.1 >= level
        } else {
            v.1 <= level
        }
    };
    let Some(mut prev) = input.last().copied() else {
        return;
    };
    for &cur in input {
        match (inside(&prev), inside(&cur)) {
            (true, true) => out.push(cur),
            (true, false) => out.push((crossing(prev, cur, level), level)),
            (false, true) => {
                out.push((crossing(prev, cur, level), level));
                out.push(cur);
            }
            (false, false) => {}
        }
        prev = cur;
    }
}

fn push_polygon(path: &mut BezPath, mut points: impl Iterator<Item = Point>) {
    let Some(first) = points.next() else {
        return;
    };
    path.move_to(first);
    for p in points {
        path.line_to(p);
    }
    path.close_path();
}
