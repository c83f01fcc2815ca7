// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Colormapped image (heatmap) marks.
//!
//! Each sample of a [`ScalarGrid`] is treated as one pixel: the extent is cut
//! into `nx × ny` equal cells. Bicubic resampling evaluates the field on a finer
//! cell grid before colormapping, so the output stays a set of rects.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;
use splitplot_core::{Mark, MarkId};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::colormap::{Colormap, Normalize};
use crate::contour::{GridOrigin, ScalarGrid};
use crate::rect_mark::RectMarkSpec;
use crate::scale::ScaleContinuous;
use crate::z_order;

/// Pixel resampling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Interpolation {
    /// One output cell per sample.
    Nearest,
    /// Catmull-Rom bicubic, `upsample × upsample` output cells per sample.
    Bicubic {
        /// Output cells per sample along each axis.
        upsample: usize,
    },
}

/// A colormapped image.
#[derive(Clone, Debug)]
pub struct ImageMarkSpec {
    /// Stable-id base; cell `k` (row-major) uses `from_raw(id_base).child(k)`.
    pub id_base: u64,
    /// Pixel values; see the module docs for the cell layout.
    pub grid: ScalarGrid,
    /// X scale mapping data x into scene x.
    pub x_scale: ScaleContinuous,
    /// Y scale mapping data y into scene y.
    pub y_scale: ScaleContinuous,
    /// Colormap.
    pub colormap: Colormap,
    /// Value normalization; `None` spans the finite data.
    pub norm: Option<Normalize>,
    /// Resampling mode.
    pub interpolation: Interpolation,
    /// Rendering order hint.
    pub z_index: i32,
}

impl ImageMarkSpec {
    /// Creates a nearest-neighbour image.
    pub fn new(
        id_base: u64,
        grid: ScalarGrid,
        x_scale: ScaleContinuous,
        y_scale: ScaleContinuous,
        colormap: Colormap,
    ) -> Self {
        Self {
            id_base,
            grid,
            x_scale,
            y_scale,
            colormap,
            norm: None,
            interpolation: Interpolation::Nearest,
            z_index: z_order::SERIES_FILL,
        }
    }

    /// Sets the resampling mode.
    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    /// Sets an explicit normalization.
    pub fn with_norm(mut self, norm: Normalize) -> Self {
        self.norm = Some(norm);
        self
    }

    /// Sets the z-index.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Output resolution `(columns, rows)`.
    pub fn output_size(&self) -> (usize, usize) {
        let k = match self.interpolation {
            Interpolation::Nearest => 1,
            Interpolation::Bicubic { upsample } => upsample.max(1),
        };
        (self.grid.nx * k, self.grid.ny * k)
    }

    /// Field value at output cell `(col, row)`.
    fn sample(&self, col: usize, row: usize) -> f64 {
        match self.interpolation {
            Interpolation::Nearest => self.grid.value(col, row),
            Interpolation::Bicubic { upsample } => {
                let k = upsample.max(1) as f64;
                // Output cell centre in source pixel-centre coordinates.
                let sx = (col as f64 + 0.5) / k - 0.5;
                let sy = (row as f64 + 0.5) / k - 0.5;
                bicubic(&self.grid, sx, sy)
            }
        }
    }

    /// Scene rect of output cell `(col, row)`.
    fn cell_rect(&self, col: usize, row: usize, cols: usize, rows: usize) -> Rect {
        let (x0, x1, y0, y1) = self.grid.extent;
        let fx = |c: usize| x0 + (x1 - x0) * c as f64 / cols as f64;
        let fy = |r: usize| match self.grid.origin {
            GridOrigin::Upper => y1 - (y1 - y0) * r as f64 / rows as f64,
            GridOrigin::Lower => y0 + (y1 - y0) * r as f64 / rows as f64,
        };
        Rect::new(
            self.x_scale.map(fx(col)),
            self.y_scale.map(fy(row)),
            self.x_scale.map(fx(col + 1)),
            self.y_scale.map(fy(row + 1)),
        )
        .abs()
    }

    /// Generates one rect per output cell with a finite value.
    pub fn marks(&self) -> Vec<Mark> {
        let (cols, rows) = self.output_size();
        let norm = self
            .norm
            .or_else(|| Normalize::from_values(&self.grid.values))
            .unwrap_or(Normalize::new(0.0, 1.0));
        let mut out = Vec::with_capacity(cols * rows);
        for row in 0..rows {
            for col in 0..cols {
                let v = self.sample(col, row);
                if !v.is_finite() {
                    continue;
                }
                let k = (row * cols + col) as u64;
                out.push(
                    RectMarkSpec::new(
                        MarkId::from_raw(self.id_base).child(k),
                        self.cell_rect(col, row, cols, rows),
                    )
                    .with_fill(self.colormap.map(norm.apply(v)))
                    .with_z_index(self.z_index)
                    .mark(),
                );
            }
        }
        out
    }
}

/// Catmull-Rom weights for a fractional offset `t` in `[0, 1)`.
fn cubic_weights(t: f64) -> [f64; 4] {
    let t2 = t * t;
    let t3 = t2 * t;
    [
        0.5 * (-t3 + 2.0 * t2 - t),
        0.5 * (3.0 * t3 - 5.0 * t2 + 2.0),
        0.5 * (-3.0 * t3 + 4.0 * t2 + t),
        0.5 * (t3 - t2),
    ]
}

/// Bicubic sample at pixel-centre coordinates, clamping at the edges.
fn bicubic(grid: &ScalarGrid, x: f64, y: f64) -> f64 {
    if grid.nx == 0 || grid.ny == 0 {
        return f64::NAN;
    }
    let fx = x.floor();
    let fy = y.floor();
    let wx = cubic_weights(x - fx);
    let wy = cubic_weights(y - fy);
    let clamp = |v: f64, n: usize| {
        #[allow(clippy::cast_possible_truncation, reason = "clamped to the grid size")]
        {
            v.clamp(0.0, (n - 1) as f64) as usize
        }
    };
    let mut acc = 0.0;
    for (dy, wy) in wy.iter().enumerate() {
        let j = clamp(fy + dy as f64 - 1.0, grid.ny);
        for (dx, wx) in wx.iter().enumerate() {
            let i = clamp(fx + dx as f64 - 1.0, grid.nx);
            acc += wx * wy * grid.value(i, j);
        }
    }
    acc
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::scale::{ScaleLinearSpec, ScaleSpec};
    use splitplot_core::MarkPayload;

    fn scale(range: (f64, f64)) -> ScaleContinuous {
        ScaleSpec::Linear(ScaleLinearSpec::new((-1.0, 1.0))).instantiate(range, 5)
    }

    fn grid() -> ScalarGrid {
        // Two rows: top row dark, bottom row bright.
        ScalarGrid::new(2, 2, alloc::vec![0.0, 0.0, 1.0, 1.0], (-1.0, 1.0, -1.0, 1.0))
    }

    fn image() -> ImageMarkSpec {
        ImageMarkSpec::new(
            1,
            grid(),
            scale((0.0, 100.0)),
            scale((100.0, 0.0)),
            Colormap::Gray,
        )
    }

    fn fill_r(mark: &Mark) -> u8 {
        match &mark.payload {
            MarkPayload::Rect(r) => match &r.fill {
                peniko::Brush::Solid(c) => c.to_rgba8().r,
                _ => panic!("solid fill"),
            },
            _ => panic!("image cells are rects"),
        }
    }

    #[test]
    fn nearest_emits_one_rect_per_pixel_with_origin_upper() {
        let marks = image().marks();
        assert_eq!(marks.len(), 4);
        let first = marks[0].payload.bounds().expect("rect");
        assert_eq!(first, Rect::new(0.0, 0.0, 50.0, 50.0));
        assert_eq!(fill_r(&marks[0]), 0);
        assert_eq!(fill_r(&marks[3]), 255);
    }

    #[test]
    fn bicubic_upsamples_and_interpolates() {
        let spec = image().with_interpolation(Interpolation::Bicubic { upsample: 3 });
        assert_eq!(spec.output_size(), (6, 6));
        let marks = spec.marks();
        assert_eq!(marks.len(), 36);
        // Rows step from dark to bright through intermediate shades.
        let column: Vec<u8> = (0..6).map(|row| fill_r(&marks[row * 6])).collect();
        assert!(column.windows(2).all(|w| w[0] <= w[1]), "{column:?}");
        assert!(column.iter().any(|&r| r > 10 && r < 245));
    }

    #[test]
    fn weights_sum_to_one() {
        for t in [0.0, 0.25, 0.5, 0.9] {
            let s: f64 = cubic_weights(t).iter().sum();
            assert!((s - 1.0).abs() < 1e-12);
        }
    }
}
