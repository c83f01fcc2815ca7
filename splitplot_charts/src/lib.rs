// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart building blocks for `splitplot_core`.
//!
//! This crate turns data into stable-identity marks:
//! - **Scales** map data values into scene coordinates.
//! - **Guides** (axes, grids, titles, captions) are generated as marks.
//! - **Mark specs** cover lines, areas, points, bars, sectors, contours, images,
//!   box plots, quivers and projected 3D surfaces.
//! - [`SplitView`] composes two variants of one chart into a region, each
//!   clipped to one triangular half, with the diagonal drawn on top.
//!
//! Text shaping is out of scope; text marks store unshaped strings and layout
//! uses a [`TextMeasurer`].

#![no_std]

extern crate alloc;

mod area_mark;
mod axes;
mod axis;
mod bar_mark;
mod boxplot_mark;
mod caption;
mod colormap;
mod contour;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod image_mark;
mod layout;
mod line_mark;
mod point_mark;
mod quiver_mark;
mod rect_mark;
mod rule_mark;
mod scale;
mod sector_mark;
mod split_view;
mod surface_mark;
mod symbol;
mod text_mark;
mod title;
mod z_order;

pub use area_mark::{AreaBase, AreaMarkSpec};
pub use axes::AxesSpec;
pub use axis::{AxisOrient, AxisSpec, AxisStyle, GridStyle, StrokeStyle, TickFormatter};
pub use bar_mark::BarMarkSpec;
pub use boxplot_mark::{BoxPlotSpec, BoxStats, percentile};
pub use caption::{CaptionSpec, CaptionStyle};
pub use colormap::{Colormap, Normalize, gray, tab20c};
pub use contour::{ContourSpec, GridOrigin, ScalarGrid, band_colors, contour_levels};
pub use format::{format_power_of_ten, format_tick_with_step};
pub use image_mark::{ImageMarkSpec, Interpolation};
pub use layout::{Size, SubplotGrid, SubplotParams};
pub use line_mark::LineMarkSpec;
pub use point_mark::PointMarkSpec;
pub use quiver_mark::{ArrowHead, QuiverMarkSpec};
pub use rect_mark::RectMarkSpec;
pub use rule_mark::RuleMarkSpec;
pub use scale::{
    ScaleContinuous, ScaleLinear, ScaleLinearSpec, ScaleLog, ScaleLogSpec, ScaleSpec,
    infer_domain_f64,
};
pub use sector_mark::{PieSpec, SectorMarkSpec};
pub use split_view::SplitView;
pub use splitplot_text::{FontFamily, HeuristicTextMeasurer, TextMeasurer, TextMetrics, TextStyle};
pub use surface_mark::{Camera, Facet, SurfaceSpec};
pub use symbol::Symbol;
pub use text_mark::TextMarkSpec;
pub use title::TitleSpec;
pub use z_order::*;
