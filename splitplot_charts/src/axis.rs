// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis mark generation.
//!
//! A single [`AxisSpec`] covers all four sides through its [`AxisOrient`]. An
//! axis owns its scale, so the same spec that draws ticks also maps series
//! data into the plot rectangle. Grids are generated by the axis whose ticks
//! they follow: a bottom axis draws vertical gridlines and a left axis draws
//! horizontal ones.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use kurbo::{Line, Point, Rect};
use peniko::Brush;
use peniko::color::palette::css;
use splitplot_core::{Mark, MarkId, TextAnchor, TextBaseline};

use crate::format::{format_power_of_ten, format_tick_with_step};
use crate::rule_mark::RuleMarkSpec;
use crate::scale::{ScaleContinuous, ScaleSpec};
use crate::text_mark::TextMarkSpec;
use crate::z_order;

/// A paint + width pair for stroked paths (ticks, gridlines, spines).
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// Axis styling.
///
/// Lengths are in scene units; [`AxisStyle::scaled`] converts a style authored
/// in points.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisStyle {
    /// Style for major tick marks.
    pub rule: StrokeStyle,
    /// Style for minor tick marks.
    pub minor_rule: StrokeStyle,
    /// Major tick length (drawn outward).
    pub tick_size: f64,
    /// Minor tick length (drawn outward).
    pub minor_tick_size: f64,
    /// Gap between tick end and label.
    pub tick_padding: f64,
    /// Fill paint for tick labels.
    pub label_fill: Brush,
    /// Font size for tick labels.
    pub label_font_size: f64,
    /// Fill paint for the axis title.
    pub title_fill: Brush,
    /// Font size for the axis title.
    pub title_font_size: f64,
}

impl AxisStyle {
    /// Multiplies every length and font size by `k`.
    pub fn scaled(mut self, k: f64) -> Self {
        self.rule.stroke_width *= k;
        self.minor_rule.stroke_width *= k;
        self.tick_size *= k;
        self.minor_tick_size *= k;
        self.tick_padding *= k;
        self.label_font_size *= k;
        self.title_font_size *= k;
        self
    }
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            rule: StrokeStyle::solid(css::BLACK, 0.8),
            minor_rule: StrokeStyle::solid(css::BLACK, 0.6),
            tick_size: 3.5,
            minor_tick_size: 2.0,
            tick_padding: 3.5,
            label_fill: Brush::Solid(css::BLACK),
            label_font_size: 10.0,
            title_fill: Brush::Solid(css::BLACK),
            title_font_size: 10.0,
        }
    }
}

/// Gridline styling.
#[derive(Clone, Debug, PartialEq)]
pub struct GridStyle {
    /// Stroke style for gridlines.
    pub stroke: StrokeStyle,
}

impl GridStyle {
    /// A solid grid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            stroke: StrokeStyle::solid(brush, stroke_width),
        }
    }
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            stroke: StrokeStyle {
                brush: Brush::Solid(css::BLACK.with_alpha(40.0 / 255.0)),
                stroke_width: 1.0,
            },
        }
    }
}

/// Axis placement relative to the plot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisOrient {
    /// A horizontal axis placed above the plot area.
    Top,
    /// A horizontal axis placed below the plot area.
    Bottom,
    /// A vertical axis placed to the left of the plot area.
    Left,
    /// A vertical axis placed to the right of the plot area.
    Right,
}

impl AxisOrient {
    /// Returns `true` for top/bottom axes.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

/// Tick label formatter: `(value, major step) -> label`.
pub type TickFormatter = Arc<dyn Fn(f64, f64) -> String>;

/// An axis: scale, ticks, labels, grids and an optional title.
#[derive(Clone)]
pub struct AxisSpec {
    /// Stable-id base; each generated mark uses a deterministic offset from this base.
    pub id_base: u64,
    /// The axis scale specification.
    pub scale: ScaleSpec,
    /// Axis placement relative to the plot.
    pub orient: AxisOrient,
    /// Approximate number of major ticks (linear scales).
    pub tick_count: usize,
    /// Minor subdivisions per major step; `0` disables minor ticks.
    ///
    /// Log scales place minors at `2..=9` per decade for any non-zero value.
    pub minor_subdivisions: usize,
    /// Whether to draw tick marks.
    pub ticks: bool,
    /// Whether to draw tick labels.
    pub labels: bool,
    /// Axis styling.
    pub style: AxisStyle,
    /// Major gridlines spanning the plot area.
    pub grid: Option<GridStyle>,
    /// Minor gridlines spanning the plot area.
    pub minor_grid: Option<GridStyle>,
    /// Optional axis title text.
    pub title: Option<String>,
    /// Distance from the tick labels to the title.
    pub title_offset: f64,
    /// Optional tick label formatter.
    pub tick_formatter: Option<TickFormatter>,
}

impl core::fmt::Debug for AxisSpec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AxisSpec")
            .field("id_base", &self.id_base)
            .field("scale", &self.scale)
            .field("orient", &self.orient)
            .field("tick_count", &self.tick_count)
            .field("minor_subdivisions", &self.minor_subdivisions)
            .field("ticks", &self.ticks)
            .field("labels", &self.labels)
            .field("style", &self.style)
            .field("grid", &self.grid)
            .field("minor_grid", &self.minor_grid)
            .field("title", &self.title)
            .field("title_offset", &self.title_offset)
            .field("tick_formatter", &self.tick_formatter.is_some())
            .finish()
    }
}

impl AxisSpec {
    /// Creates an axis with ticks and labels, no minors, no grid and no title.
    pub fn new(id_base: u64, scale: impl Into<ScaleSpec>, orient: AxisOrient) -> Self {
        Self {
            id_base,
            scale: scale.into(),
            orient,
            tick_count: 5,
            minor_subdivisions: 0,
            ticks: true,
            labels: true,
            style: AxisStyle::default(),
            grid: None,
            minor_grid: None,
            title: None,
            title_offset: 4.0,
            tick_formatter: None,
        }
    }

    /// Convenience constructor for a `bottom` axis.
    pub fn bottom(id_base: u64, scale: impl Into<ScaleSpec>) -> Self {
        Self::new(id_base, scale, AxisOrient::Bottom)
    }

    /// Convenience constructor for a `top` axis.
    pub fn top(id_base: u64, scale: impl Into<ScaleSpec>) -> Self {
        Self::new(id_base, scale, AxisOrient::Top)
    }

    /// Convenience constructor for a `left` axis.
    pub fn left(id_base: u64, scale: impl Into<ScaleSpec>) -> Self {
        Self::new(id_base, scale, AxisOrient::Left)
    }

    /// Convenience constructor for a `right` axis.
    pub fn right(id_base: u64, scale: impl Into<ScaleSpec>) -> Self {
        Self::new(id_base, scale, AxisOrient::Right)
    }

    /// Set the approximate major tick count.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Set minor subdivisions per major step.
    pub fn with_minor_subdivisions(mut self, n: usize) -> Self {
        self.minor_subdivisions = n;
        self
    }

    /// Enable or disable tick marks.
    pub fn with_ticks(mut self, ticks: bool) -> Self {
        self.ticks = ticks;
        self
    }

    /// Enable or disable tick labels.
    pub fn with_labels(mut self, labels: bool) -> Self {
        self.labels = labels;
        self
    }

    /// Set a custom tick label formatter.
    pub fn with_tick_formatter(mut self, f: impl Fn(f64, f64) -> String + 'static) -> Self {
        self.tick_formatter = Some(Arc::new(f));
        self
    }

    /// Set the axis style.
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    /// Enable major gridlines.
    pub fn with_grid(mut self, grid: GridStyle) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Enable minor gridlines.
    pub fn with_minor_grid(mut self, grid: GridStyle) -> Self {
        self.minor_grid = Some(grid);
        self
    }

    /// Set the axis title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Returns the scale mapping axis values into plot coordinates.
    pub fn scale_continuous(&self, plot: Rect) -> ScaleContinuous {
        let range = if self.orient.is_horizontal() {
            (plot.x0, plot.x1)
        } else {
            (plot.y1, plot.y0)
        };
        self.scale.instantiate(range, self.tick_count)
    }

    /// Major tick values inside the domain.
    pub fn major_values(&self, plot: Rect) -> Vec<f64> {
        let scale = self.scale_continuous(plot);
        scale
            .ticks(match self.scale {
                ScaleSpec::Linear(_) => self.tick_count,
                ScaleSpec::Log(_) => 0,
            })
            .into_iter()
            .filter(|v| scale.contains(*v))
            .collect()
    }

    /// Minor tick values inside the domain.
    pub fn minor_values(&self, plot: Rect) -> Vec<f64> {
        if self.minor_subdivisions == 0 {
            return Vec::new();
        }
        let scale = self.scale_continuous(plot);
        scale
            .minor_ticks(self.tick_count, self.minor_subdivisions)
            .into_iter()
            .filter(|v| scale.contains(*v))
            .collect()
    }

    fn format_tick(&self, v: f64, step: f64) -> String {
        match (&self.tick_formatter, self.scale) {
            (Some(f), _) => (f)(v, step),
            (None, ScaleSpec::Log(_)) => format_power_of_ten(v, step),
            (None, ScaleSpec::Linear(_)) => format_tick_with_step(v, step),
        }
    }

    /// Generates grid, tick, label and title marks around `plot`.
    pub fn marks(&self, plot: Rect) -> Vec<Mark> {
        let place = Placement {
            orient: self.orient,
            plot,
        };
        let scale = self.scale_continuous(plot);
        let major = self.major_values(plot);
        let minor = self.minor_values(plot);
        let step = tick_step(&major);
        let style = &self.style;

        let mut out = Vec::new();

        if let Some(grid) = &self.minor_grid {
            out.extend(grid_rules(
                self.id_base + 3000,
                &minor,
                &scale,
                &place,
                &grid.stroke,
                z_order::MINOR_GRID_LINES,
            ));
        }
        if let Some(grid) = &self.grid {
            out.extend(grid_rules(
                self.id_base + 2000,
                &major,
                &scale,
                &place,
                &grid.stroke,
                z_order::GRID_LINES,
            ));
        }

        if self.ticks {
            for (i, v) in minor.iter().enumerate() {
                let along = scale.map(*v);
                out.push(
                    RuleMarkSpec::from_line(
                        MarkId::from_raw(self.id_base + 4000 + i as u64),
                        Line::new(
                            place.point(along, 0.0),
                            place.point(along, style.minor_tick_size),
                        ),
                    )
                    .with_stroke_style(style.minor_rule.clone())
                    .with_z_index(z_order::AXIS_RULES)
                    .mark(),
                );
            }
        }

        let tick_extent = if self.ticks { style.tick_size } else { 0.0 };
        for (i, v) in major.iter().enumerate() {
            let along = scale.map(*v);
            if self.ticks {
                out.push(
                    RuleMarkSpec::from_line(
                        MarkId::from_raw(self.id_base + 1 + i as u64),
                        Line::new(place.point(along, 0.0), place.point(along, style.tick_size)),
                    )
                    .with_stroke_style(style.rule.clone())
                    .with_z_index(z_order::AXIS_RULES)
                    .mark(),
                );
            }
            if self.labels {
                let (anchor, baseline) = place.label_alignment();
                out.push(
                    TextMarkSpec::new(
                        MarkId::from_raw(self.id_base + 1000 + i as u64),
                        place.point(along, tick_extent + style.tick_padding),
                        self.format_tick(*v, step),
                    )
                    .with_anchor(anchor)
                    .with_baseline(baseline)
                    .with_font_size(style.label_font_size)
                    .with_fill(style.label_fill.clone())
                    .with_z_index(z_order::AXIS_LABELS)
                    .mark(),
                );
            }
        }

        if let Some(title) = &self.title {
            let label_extent = if self.labels {
                style.tick_padding
                    + if self.orient.is_horizontal() {
                        style.label_font_size
                    } else {
                        // Vertical axes: leave room for roughly five label glyphs.
                        3.0 * style.label_font_size
                    }
            } else {
                0.0
            };
            let mid = if self.orient.is_horizontal() {
                0.5 * (plot.x0 + plot.x1)
            } else {
                0.5 * (plot.y0 + plot.y1)
            };
            let (_, baseline) = place.label_alignment();
            let angle = match self.orient {
                AxisOrient::Left => -90.0,
                AxisOrient::Right => 90.0,
                AxisOrient::Top | AxisOrient::Bottom => 0.0,
            };
            out.push(
                TextMarkSpec::new(
                    MarkId::from_raw(self.id_base + 9000),
                    place.point(mid, tick_extent + label_extent + self.title_offset),
                    title.clone(),
                )
                .with_anchor(TextAnchor::Middle)
                .with_baseline(if self.orient.is_horizontal() {
                    baseline
                } else {
                    TextBaseline::Alphabetic
                })
                .with_angle(angle)
                .with_font_size(style.title_font_size)
                .with_fill(style.title_fill.clone())
                .with_z_index(z_order::AXIS_TITLES)
                .mark(),
            );
        }

        out
    }
}

/// Geometry of one plot side.
struct Placement {
    orient: AxisOrient,
    plot: Rect,
}

impl Placement {
    /// A point `along` the axis direction, `offset` outward from the plot edge.
    fn point(&self, along: f64, offset: f64) -> Point {
        match self.orient {
            AxisOrient::Bottom => Point::new(along, self.plot.y1 + offset),
            AxisOrient::Top => Point::new(along, self.plot.y0 - offset),
            AxisOrient::Left => Point::new(self.plot.x0 - offset, along),
            AxisOrient::Right => Point::new(self.plot.x1 + offset, along),
        }
    }

    /// A line across the whole plot at `along`.
    fn across(&self, along: f64) -> Line {
        if self.orient.is_horizontal() {
            Line::new((along, self.plot.y0), (along, self.plot.y1))
        } else {
            Line::new((self.plot.x0, along), (self.plot.x1, along))
        }
    }

    fn label_alignment(&self) -> (TextAnchor, TextBaseline) {
        match self.orient {
            AxisOrient::Bottom => (TextAnchor::Middle, TextBaseline::Hanging),
            AxisOrient::Top => (TextAnchor::Middle, TextBaseline::Alphabetic),
            AxisOrient::Left => (TextAnchor::End, TextBaseline::Middle),
            AxisOrient::Right => (TextAnchor::Start, TextBaseline::Middle),
        }
    }
}

fn grid_rules(
    id_base: u64,
    values: &[f64],
    scale: &ScaleContinuous,
    place: &Placement,
    stroke: &StrokeStyle,
    z_index: i32,
) -> Vec<Mark> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            RuleMarkSpec::from_line(
                MarkId::from_raw(id_base + i as u64),
                place.across(scale.map(*v)),
            )
            .with_stroke_style(stroke.clone())
            .with_z_index(z_index)
            .mark()
        })
        .collect()
}

fn tick_step(ticks: &[f64]) -> f64 {
    match ticks {
        [a, b, ..] => (b - a).abs(),
        _ => 0.0,
    }
}
