// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axes composition.
//!
//! [`AxesSpec`] owns the guides of one plot (x and y axes, a frame and an
//! optional title) and hands the resolved scales to a series builder. Series
//! marks are clipped to the plot rectangle; guides are not.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Line, Rect};
use peniko::color::palette::css;
use splitplot_core::{ClipPath, Mark, MarkId};

use crate::rule_mark::RuleMarkSpec;
use crate::{AxisSpec, ScaleContinuous, StrokeStyle, TextMeasurer, TitleSpec, z_order};

/// A plot rectangle with its axes, frame spines and title.
#[derive(Clone, Debug)]
pub struct AxesSpec {
    /// Stable-id base for the frame spines.
    pub id_base: u64,
    /// The horizontal axis (usually bottom).
    pub x_axis: AxisSpec,
    /// The vertical axis (usually left).
    pub y_axis: AxisSpec,
    /// Optional title above the plot.
    pub title: Option<TitleSpec>,
    /// Spine style; `None` draws no frame.
    pub frame: Option<StrokeStyle>,
}

impl AxesSpec {
    /// Creates axes with a default frame and no title.
    pub fn new(id_base: u64, x_axis: AxisSpec, y_axis: AxisSpec) -> Self {
        Self {
            id_base,
            x_axis,
            y_axis,
            title: None,
            frame: Some(StrokeStyle::solid(css::BLACK, 0.8)),
        }
    }

    /// Sets the title.
    pub fn with_title(mut self, title: TitleSpec) -> Self {
        self.title = Some(title);
        self
    }

    /// Sets (or clears) the frame style.
    pub fn with_frame(mut self, frame: Option<StrokeStyle>) -> Self {
        self.frame = frame;
        self
    }

    /// Instantiates the x scale for a given plot rectangle.
    pub fn x_scale(&self, plot: Rect) -> ScaleContinuous {
        self.x_axis.scale_continuous(plot)
    }

    /// Instantiates the y scale for a given plot rectangle.
    pub fn y_scale(&self, plot: Rect) -> ScaleContinuous {
        self.y_axis.scale_continuous(plot)
    }

    /// Four spines around `plot`.
    pub fn frame_marks(&self, plot: Rect) -> Vec<Mark> {
        let Some(stroke) = &self.frame else {
            return Vec::new();
        };
        let sides = [
            Line::new((plot.x0, plot.y1), (plot.x1, plot.y1)),
            Line::new((plot.x0, plot.y0), (plot.x1, plot.y0)),
            Line::new((plot.x0, plot.y0), (plot.x0, plot.y1)),
            Line::new((plot.x1, plot.y0), (plot.x1, plot.y1)),
        ];
        sides
            .into_iter()
            .enumerate()
            .map(|(i, line)| {
                RuleMarkSpec::from_line(MarkId::from_raw(self.id_base + i as u64), line)
                    .with_stroke_style(stroke.clone())
                    .with_z_index(z_order::FRAME)
                    .mark()
            })
            .collect()
    }

    /// Generates title, axis, grid and frame marks.
    pub fn guide_marks(&self, measurer: &dyn TextMeasurer, plot: Rect) -> Vec<Mark> {
        let mut out = Vec::new();
        if let Some(title) = &self.title {
            out.extend(title.marks(measurer, plot));
        }
        out.extend(self.x_axis.marks(plot));
        out.extend(self.y_axis.marks(plot));
        out.extend(self.frame_marks(plot));
        out
    }

    /// Convenience to produce a full mark list: series marks + guide marks.
    ///
    /// The series builder receives the resolved x and y scales. Its marks are
    /// clipped to `plot`.
    pub fn marks(
        &self,
        measurer: &dyn TextMeasurer,
        plot: Rect,
        build_series: impl FnOnce(ScaleContinuous, ScaleContinuous) -> Vec<Mark>,
    ) -> Vec<Mark> {
        let clip = ClipPath::rect(plot);
        let mut marks = build_series(self.x_scale(plot), self.y_scale(plot));
        for mark in &mut marks {
            mark.push_clip(clip.clone());
        }
        marks.extend(self.guide_marks(measurer, plot));
        marks
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::{HeuristicTextMeasurer, LineMarkSpec, ScaleLinearSpec, ScaleLogSpec};
    use kurbo::Point;
    use peniko::Color;
    use splitplot_core::Scene;

    fn axes() -> AxesSpec {
        AxesSpec::new(
            90_000,
            AxisSpec::bottom(10_000, ScaleLogSpec::new((0.1, 10_000.0))),
            AxisSpec::left(20_000, ScaleLinearSpec::new((0.0, 10_000.0))),
        )
        .with_title(TitleSpec::new(MarkId::from_raw(30_000), "X logarithmic, Y linear"))
    }

    #[test]
    fn series_are_clipped_to_plot_and_guides_are_not() {
        let plot = Rect::new(50.0, 50.0, 250.0, 250.0);
        let marks = axes().marks(&HeuristicTextMeasurer, plot, |x, y| {
            LineMarkSpec::new(
                MarkId::from_raw(1),
                alloc::vec![0.01, 100.0],
                alloc::vec![5000.0, 5000.0],
                x,
                y,
            )
            .marks()
        });
        let series: Vec<_> = marks.iter().filter(|m| m.id == MarkId::from_raw(1)).collect();
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].clips.len(), 1);
        assert!(
            marks
                .iter()
                .filter(|m| m.id != MarkId::from_raw(1))
                .all(|m| !m.is_clipped())
        );

        // The line extends left of the domain; clipping hides it there.
        let mut scene = Scene::new();
        scene.extend(marks);
        let inside = scene.sample(Point::new(150.0, 150.0), Color::WHITE).to_rgba8();
        let outside = scene.sample(Point::new(40.0, 150.0), Color::WHITE).to_rgba8();
        assert_eq!(inside.r, 0);
        assert_eq!(outside.r, 255);
    }

    #[test]
    fn frame_has_four_spines() {
        let plot = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(axes().frame_marks(plot).len(), 4);
        assert!(axes().with_frame(None).frame_marks(plot).is_empty());
    }
}
