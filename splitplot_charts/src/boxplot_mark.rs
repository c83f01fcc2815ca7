// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Box-and-whisker mark generation.
//!
//! Quartiles use linear interpolation between order statistics. Whiskers reach
//! the most extreme samples within `1.5 × IQR` of the box; anything beyond is a
//! flier.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;
use peniko::Brush;
use peniko::color::palette::css;
use splitplot_core::{Mark, MarkId};

use crate::axis::StrokeStyle;
use crate::point_mark::PointMarkSpec;
use crate::rect_mark::RectMarkSpec;
use crate::rule_mark::RuleMarkSpec;
use crate::scale::ScaleContinuous;
use crate::z_order;

/// Whisker reach, in multiples of the interquartile range.
const WHISKER_REACH: f64 = 1.5;

/// Linearly interpolated percentile of sorted data, `p` in `[0, 1]`.
///
/// Returns NaN for empty input.
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    match sorted.len() {
        0 => f64::NAN,
        1 => sorted[0],
        n => {
            let pos = p.clamp(0.0, 1.0) * (n - 1) as f64;
            #[allow(clippy::cast_possible_truncation, reason = "pos is within 0..n")]
            let lo = pos as usize;
            let hi = (lo + 1).min(n - 1);
            let t = pos - lo as f64;
            sorted[lo] + (sorted[hi] - sorted[lo]) * t
        }
    }
}

/// Summary statistics of one box.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxStats {
    /// First quartile.
    pub q1: f64,
    /// Median.
    pub median: f64,
    /// Third quartile.
    pub q3: f64,
    /// Lower whisker end.
    pub whisker_low: f64,
    /// Upper whisker end.
    pub whisker_high: f64,
    /// Samples outside the whiskers, ascending.
    pub fliers: Vec<f64>,
}

impl BoxStats {
    /// Computes statistics over the finite values; `None` if there are none.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_by(f64::total_cmp);
        let q1 = percentile(&sorted, 0.25);
        let median = percentile(&sorted, 0.5);
        let q3 = percentile(&sorted, 0.75);
        let reach = WHISKER_REACH * (q3 - q1);
        let (lo_fence, hi_fence) = (q1 - reach, q3 + reach);
        let inside = || sorted.iter().copied().filter(|&v| v >= lo_fence && v <= hi_fence);
        // The quartiles always lie inside the fences, so `inside` is non-empty.
        let whisker_low = inside().next().unwrap_or(q1);
        let whisker_high = inside().last().unwrap_or(q3);
        let fliers = sorted
            .iter()
            .copied()
            .filter(|&v| v < lo_fence || v > hi_fence)
            .collect();
        Some(Self {
            q1,
            median,
            q3,
            whisker_low,
            whisker_high,
            fliers,
        })
    }

    /// Interquartile range.
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// One box per data column, centred on `positions[i]`.
#[derive(Clone, Debug)]
pub struct BoxPlotSpec {
    /// Stable-id base; parts use `id_base..id_base + 5` as namespaces.
    pub id_base: u64,
    /// Samples per box.
    pub columns: Vec<Vec<f64>>,
    /// Box centres in data x.
    pub positions: Vec<f64>,
    /// X scale mapping data x into scene x.
    pub x_scale: ScaleContinuous,
    /// Y scale mapping data y into scene y.
    pub y_scale: ScaleContinuous,
    /// Box width in data units.
    pub width: f64,
    /// Cap width in data units.
    pub cap_width: f64,
    /// Box fill.
    pub box_fill: Brush,
    /// Box outline.
    pub box_stroke: StrokeStyle,
    /// Median line.
    pub median: StrokeStyle,
    /// Whisker and cap lines.
    pub whiskers: StrokeStyle,
    /// Flier fill.
    pub flier_fill: Brush,
    /// Flier outline.
    pub flier_stroke: StrokeStyle,
    /// Flier diameter in scene units.
    pub flier_size: f64,
}

impl BoxPlotSpec {
    /// Creates black-outlined boxes at `1, 2, …, n`.
    pub fn new(
        id_base: u64,
        columns: Vec<Vec<f64>>,
        x_scale: ScaleContinuous,
        y_scale: ScaleContinuous,
    ) -> Self {
        let positions = (1..=columns.len()).map(|i| i as f64).collect();
        Self {
            id_base,
            columns,
            positions,
            x_scale,
            y_scale,
            width: 0.5,
            cap_width: 0.25,
            box_fill: Brush::Solid(css::WHITE),
            box_stroke: StrokeStyle::default(),
            median: StrokeStyle::solid(css::ORANGE, 1.0),
            whiskers: StrokeStyle::default(),
            flier_fill: Brush::Solid(css::TRANSPARENT),
            flier_stroke: StrokeStyle::default(),
            flier_size: 6.0,
        }
    }

    /// Sets the box centres.
    pub fn with_positions(mut self, positions: Vec<f64>) -> Self {
        self.positions = positions;
        self
    }

    /// Sets the box width in data units.
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Sets the cap width in data units.
    pub fn with_cap_width(mut self, cap_width: f64) -> Self {
        self.cap_width = cap_width;
        self
    }

    /// Sets the box fill.
    pub fn with_box_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.box_fill = fill.into();
        self
    }

    /// Sets the median line.
    pub fn with_median(mut self, median: StrokeStyle) -> Self {
        self.median = median;
        self
    }

    /// Sets the width of every outline and line.
    pub fn with_line_width(mut self, width: f64) -> Self {
        for stroke in [
            &mut self.box_stroke,
            &mut self.median,
            &mut self.whiskers,
            &mut self.flier_stroke,
        ] {
            stroke.stroke_width = width;
        }
        self
    }

    /// Sets the flier diameter.
    pub fn with_flier_size(mut self, size: f64) -> Self {
        self.flier_size = size;
        self
    }

    /// Paints every part with one colour, keeping the stroke widths.
    pub fn with_color(mut self, color: impl Into<Brush>) -> Self {
        let brush = color.into();
        self.box_fill = brush.clone();
        self.flier_fill = brush.clone();
        for stroke in [
            &mut self.box_stroke,
            &mut self.median,
            &mut self.whiskers,
            &mut self.flier_stroke,
        ] {
            stroke.brush = brush.clone();
        }
        self
    }

    /// Statistics of every column, in order.
    pub fn stats(&self) -> Vec<Option<BoxStats>> {
        self.columns
            .iter()
            .map(|c| BoxStats::from_values(c))
            .collect()
    }

    /// Generates boxes, medians, whiskers, caps and fliers.
    pub fn marks(&self) -> Vec<Mark> {
        let part = |k: u64| MarkId::from_raw(self.id_base + k);
        let mut out = Vec::new();
        for (c, (stats, &x)) in self.stats().iter().zip(&self.positions).enumerate() {
            let Some(stats) = stats else { continue };
            if !x.is_finite() {
                continue;
            }
            let c = c as u64;
            let sx = |dx: f64| self.x_scale.map(x + dx);
            let sy = |y: f64| self.y_scale.map(y);
            let half = 0.5 * self.width;
            let cap = 0.5 * self.cap_width;

            out.push(
                RectMarkSpec::new(
                    part(0).child(c),
                    Rect::new(sx(-half), sy(stats.q1), sx(half), sy(stats.q3)).abs(),
                )
                .with_fill(self.box_fill.clone())
                .with_stroke(self.box_stroke.clone())
                .with_z_index(z_order::SERIES_FILL)
                .mark(),
            );
            out.push(
                RuleMarkSpec::horizontal(part(1).child(c), sy(stats.median), sx(-half), sx(half))
                    .with_stroke_style(self.median.clone())
                    .with_z_index(z_order::SERIES_STROKE)
                    .mark(),
            );
            for (k, (from, to)) in [(stats.q1, stats.whisker_low), (stats.q3, stats.whisker_high)]
                .into_iter()
                .enumerate()
            {
                let k = 2 * c + k as u64;
                out.push(
                    RuleMarkSpec::vertical(part(2).child(k), sx(0.0), sy(from), sy(to))
                        .with_stroke_style(self.whiskers.clone())
                        .with_z_index(z_order::SERIES_STROKE)
                        .mark(),
                );
                out.push(
                    RuleMarkSpec::horizontal(part(3).child(k), sy(to), sx(-cap), sx(cap))
                        .with_stroke_style(self.whiskers.clone())
                        .with_z_index(z_order::SERIES_STROKE)
                        .mark(),
                );
            }
            if !stats.fliers.is_empty() {
                out.extend(
                    PointMarkSpec::new(
                        part(4).child(c).0,
                        alloc::vec![x; stats.fliers.len()],
                        stats.fliers.clone(),
                        self.x_scale,
                        self.y_scale,
                    )
                    .with_size(self.flier_size)
                    .with_fill(self.flier_fill.clone())
                    .with_stroke(self.flier_stroke.clone())
                    .marks(),
                );
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::scale::ScaleLinear;
    use splitplot_core::MarkKind;

    fn with_outlier() -> Vec<f64> {
        let mut v: Vec<f64> = (1..=9_u32).map(f64::from).collect();
        v.push(100.0);
        v
    }

    #[test]
    fn percentiles_interpolate_linearly() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(percentile(&sorted, 0.25), 1.75);
        assert_eq!(percentile(&sorted, 0.5), 2.5);
        assert_eq!(percentile(&sorted, 1.0), 4.0);
        assert!(percentile(&[], 0.5).is_nan());
    }

    #[test]
    fn whiskers_stop_at_the_fences() {
        let stats = BoxStats::from_values(&with_outlier()).expect("finite data");
        assert_eq!(stats.q1, 3.25);
        assert_eq!(stats.median, 5.5);
        assert_eq!(stats.q3, 7.75);
        assert_eq!(stats.iqr(), 4.5);
        assert_eq!(stats.whisker_low, 1.0);
        assert_eq!(stats.whisker_high, 9.0);
        assert_eq!(stats.fliers, [100.0]);
    }

    #[test]
    fn non_finite_samples_are_ignored() {
        assert!(BoxStats::from_values(&[f64::NAN, f64::INFINITY]).is_none());
        let stats = BoxStats::from_values(&[f64::NAN, 2.0]).expect("one sample");
        assert_eq!(stats.median, 2.0);
        assert!(stats.fliers.is_empty());
    }

    #[test]
    fn marks_cover_every_part() {
        let x = ScaleContinuous::Linear(ScaleLinear::new((0.0, 2.0), (0.0, 200.0)));
        let y = ScaleContinuous::Linear(ScaleLinear::new((0.0, 100.0), (0.0, 100.0)));
        let spec = BoxPlotSpec::new(10, alloc::vec![with_outlier(), Vec::new()], x, y);
        let marks = spec.marks();
        // Box, median, two whiskers, two caps, one flier; the empty column is skipped.
        assert_eq!(marks.len(), 7);
        assert_eq!(marks[0].kind(), MarkKind::Rect);
        let b = marks[0].payload.bounds().expect("box bounds");
        assert_eq!(b, Rect::new(75.0, 3.25, 125.0, 7.75));
        let mut ids: Vec<_> = marks.iter().map(|m| m.id).collect();
        ids.sort_by_key(|id| id.0);
        ids.dedup();
        assert_eq!(ids.len(), marks.len());
    }

    #[test]
    fn with_color_paints_everything() {
        let x = ScaleContinuous::Linear(ScaleLinear::new((0.0, 2.0), (0.0, 200.0)));
        let spec = BoxPlotSpec::new(10, alloc::vec![with_outlier()], x, x).with_color(css::RED);
        let red = Brush::Solid(css::RED);
        assert_eq!(spec.box_fill, red);
        assert_eq!(spec.median.brush, red);
        assert_eq!(spec.whiskers.brush, red);
        assert_eq!(spec.flier_fill, red);
    }
}
