// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Z-order conventions for chart-generated marks.
//!
//! `splitplot_core` marks carry an explicit `z_index`; scenes paint by
//! `(z_index, insertion order)`. The chart layer sets z-indexes consistently so
//! callers don't have to hand-tune paint order per chart.

/// Plot background fills.
pub const PLOT_BACKGROUND: i32 = -100;
/// Minor gridlines, behind major ones.
pub const MINOR_GRID_LINES: i32 = -60;
/// Gridlines drawn behind series.
pub const GRID_LINES: i32 = -50;

/// Filled series marks (bars, areas, bands, image cells).
pub const SERIES_FILL: i32 = 0;
/// Stroked series marks (lines, rules, isolines).
pub const SERIES_STROKE: i32 = 10;
/// Point series marks drawn above lines.
pub const SERIES_POINTS: i32 = 20;

/// Plot frame spines.
pub const FRAME: i32 = 25;
/// Axis tick marks.
pub const AXIS_RULES: i32 = 30;
/// Axis tick labels.
pub const AXIS_LABELS: i32 = 40;
/// Axis title labels.
pub const AXIS_TITLES: i32 = 50;

/// Highest z-index a split-view variant may use.
pub const VARIANT_MAX: i32 = 59;
/// Split-view diagonal separator.
pub const SEPARATOR: i32 = 60;
/// Split-view region border, above the separator.
pub const REGION_BORDER: i32 = 70;
/// Chart-level titles and captions.
pub const TITLES: i32 = 80;
