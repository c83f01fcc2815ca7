// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Subplot grid layout.
//!
//! A figure is divided into `rows × cols` regions. Outer margins are fractions
//! of the figure size and the gaps between cells are fractions of the mean cell
//! size, the same parameterization matplotlib's `subplotpars` use.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;
use splitplot_core::Region;

/// A width/height pair used by layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in scene units.
    pub width: f64,
    /// Height in scene units.
    pub height: f64,
}

impl Size {
    /// Creates a size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Fractional figure margins and inter-cell spacing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SubplotParams {
    /// Left edge of the grid, as a fraction of figure width.
    pub left: f64,
    /// Right edge of the grid, as a fraction of figure width.
    pub right: f64,
    /// Bottom edge of the grid, as a fraction of figure height (measured from the bottom).
    pub bottom: f64,
    /// Top edge of the grid, as a fraction of figure height (measured from the bottom).
    pub top: f64,
    /// Horizontal gap between cells, as a fraction of the mean cell width.
    pub wspace: f64,
    /// Vertical gap between cells, as a fraction of the mean cell height.
    pub hspace: f64,
}

impl Default for SubplotParams {
    fn default() -> Self {
        Self {
            left: 0.125,
            right: 0.9,
            bottom: 0.11,
            top: 0.88,
            wspace: 0.2,
            hspace: 0.2,
        }
    }
}

/// A `rows × cols` grid of subplot regions inside a figure.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SubplotGrid {
    /// Figure size in scene units.
    pub figure: Size,
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
    /// Margins and spacing.
    pub params: SubplotParams,
}

impl SubplotGrid {
    /// Creates a grid with default parameters.
    pub fn new(figure: Size, rows: usize, cols: usize) -> Self {
        Self {
            figure,
            rows,
            cols,
            params: SubplotParams::default(),
        }
    }

    /// Overrides the margins and spacing.
    pub fn with_params(mut self, params: SubplotParams) -> Self {
        self.params = params;
        self
    }

    /// The scene rectangle for cell `(row, col)`, with row 0 at the top.
    ///
    /// Returns `None` for out-of-range indices.
    pub fn cell(&self, row: usize, col: usize) -> Option<Rect> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        let p = &self.params;
        let (x0, cell_w, gap_w) = split_axis(
            self.figure.width * p.left,
            self.figure.width * (p.right - p.left),
            self.cols,
            p.wspace,
        );
        // Fractions are measured from the bottom; scene y grows down.
        let (y0, cell_h, gap_h) = split_axis(
            self.figure.height * (1.0 - p.top),
            self.figure.height * (p.top - p.bottom),
            self.rows,
            p.hspace,
        );
        let x = x0 + col as f64 * (cell_w + gap_w);
        let y = y0 + row as f64 * (cell_h + gap_h);
        Some(Rect::new(x, y, x + cell_w, y + cell_h))
    }

    /// Cell regions in row-major order.
    pub fn regions(&self) -> Vec<Region> {
        (0..self.rows)
            .flat_map(|r| (0..self.cols).map(move |c| (r, c)))
            .filter_map(|(r, c)| self.cell(r, c))
            .map(Region::new)
            .collect()
    }
}

/// Splits `extent` into `n` cells separated by `space × cell` gaps.
fn split_axis(start: f64, extent: f64, n: usize, space: f64) -> (f64, f64, f64) {
    let n = n.max(1) as f64;
    let cell = extent / (n + space * (n - 1.0));
    (start, cell, space * cell)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn cells_follow_subplot_params() {
        let grid = SubplotGrid::new(Size::new(800.0, 800.0), 3, 3);
        let first = grid.cell(0, 0).expect("cell");
        let last = grid.cell(2, 2).expect("cell");
        assert!((first.x0 - 100.0).abs() < 1e-9);
        assert!((first.y0 - 96.0).abs() < 1e-9);
        assert!((last.x1 - 720.0).abs() < 1e-9);
        assert!((last.y1 - 712.0).abs() < 1e-9);
        // Gap is 0.2 of the cell width.
        let next = grid.cell(0, 1).expect("cell");
        assert!(((next.x0 - first.x1) - 0.2 * first.width()).abs() < 1e-9);
        assert!(grid.cell(3, 0).is_none());
    }

    #[test]
    fn regions_are_row_major() {
        let grid = SubplotGrid::new(Size::new(800.0, 800.0), 2, 2);
        let regions = grid.regions();
        assert_eq!(regions.len(), 4);
        assert!(regions[1].rect().x0 > regions[0].rect().x0);
        assert!(regions[2].rect().y0 > regions[0].rect().y0);
        assert_eq!(regions[0].rect().y0, regions[1].rect().y0);
    }
}
