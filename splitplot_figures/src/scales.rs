// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The 2×2 axis-scale comparison.

use core::f64::consts::TAU;

use peniko::color::palette::css;
use splitplot_charts::{
    AxesSpec, AxisSpec, AxisStyle, GridStyle, HeuristicTextMeasurer, LineMarkSpec,
    ScaleLinearSpec, ScaleLogSpec, ScaleSpec, StrokeStyle, SubplotGrid, TitleSpec,
    format_power_of_ten, gray,
};
use splitplot_core::{Mark, MarkId, Region};

use crate::{Figure, FigureConfig, linspace};

const PANEL_STRIDE: u64 = 100_000;
const X_AXIS_OFFSET: u64 = 10_000;
const Y_AXIS_OFFSET: u64 = 20_000;
const TITLE_OFFSET: u64 = 30_000;
const CURVE_OFFSET: u64 = 40_000;

const LINEAR_DOMAIN: (f64, f64) = (0.0, 10_000.0);
const LOG_DOMAIN: (f64, f64) = (0.1, 10_000.0);

/// Samples on the circle.
const CIRCLE_SAMPLES: usize = 200;

/// Builds the scales figure.
pub fn scales(config: &FigureConfig) -> Figure {
    let mut figure = Figure::new(config.clone());
    let grid = SubplotGrid::new(figure.size(), 2, 2);
    let panels = [
        (false, false, "X linear, Y linear"),
        (true, false, "X logarithmic, Y linear"),
        (false, true, "X linear, Y logarithmic"),
        (true, true, "X logarithmic, Y logarithmic"),
    ];
    for (i, (region, (log_x, log_y, title))) in grid.regions().into_iter().zip(panels).enumerate()
    {
        let id_base = (i as u64 + 1) * PANEL_STRIDE;
        figure.add(panel(config, region, id_base, log_x, log_y, title));
    }
    figure
}

fn axis(config: &FigureConfig, axis: AxisSpec, log: bool) -> AxisSpec {
    let axis = axis
        .with_tick_count(5)
        .with_minor_subdivisions(10)
        .with_style(AxisStyle::default().scaled(config.pt(1.0)))
        .with_minor_grid(GridStyle::solid(gray(0.75), config.pt(0.5)))
        .with_grid(GridStyle::solid(gray(0.5), config.pt(0.75)));
    if log {
        axis
    } else {
        axis.with_tick_formatter(format_power_of_ten)
    }
}

fn scale(log: bool) -> ScaleSpec {
    if log {
        ScaleLogSpec::new(LOG_DOMAIN).into()
    } else {
        ScaleLinearSpec::new(LINEAR_DOMAIN).into()
    }
}

fn panel(
    config: &FigureConfig,
    region: Region,
    id_base: u64,
    log_x: bool,
    log_y: bool,
    title: &str,
) -> Vec<Mark> {
    let axes = AxesSpec::new(
        id_base,
        axis(
            config,
            AxisSpec::bottom(id_base + X_AXIS_OFFSET, scale(log_x)),
            log_x,
        ),
        axis(
            config,
            AxisSpec::left(id_base + Y_AXIS_OFFSET, scale(log_y)),
            log_y,
        ),
    )
    .with_title(
        TitleSpec::new(MarkId::from_raw(id_base + TITLE_OFFSET), title)
            .with_font_size(config.pt(10.0))
            .with_padding(config.pt(6.0)),
    )
    .with_frame(Some(StrokeStyle::solid(css::BLACK, config.pt(0.8))));

    let (xs, ys): (Vec<f64>, Vec<f64>) = linspace(0.0, TAU, CIRCLE_SAMPLES)
        .into_iter()
        .map(|t| (5_000.0 + 4_999.9 * t.cos(), 5_000.0 + 4_999.9 * t.sin()))
        .unzip();
    axes.marks(&HeuristicTextMeasurer, region.rect(), |sx, sy| {
        LineMarkSpec::new(MarkId::from_raw(id_base + CURVE_OFFSET), xs, ys, sx, sy)
            .with_stroke(StrokeStyle::solid(css::BLACK, config.pt(1.0)))
            .marks()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use splitplot_core::MarkPayload;

    fn labels(figure: &Figure) -> Vec<String> {
        figure
            .scene()
            .paint_order()
            .into_iter()
            .filter_map(|m| match &m.payload {
                MarkPayload::Text(t) => Some(t.text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn every_combination_is_titled() {
        let texts = labels(&scales(&FigureConfig::scales()));
        for title in [
            "X linear, Y linear",
            "X logarithmic, Y linear",
            "X linear, Y logarithmic",
            "X logarithmic, Y logarithmic",
        ] {
            assert!(texts.iter().any(|t| t == title), "missing {title}");
        }
    }

    #[test]
    fn tick_labels_use_powers_of_ten() {
        let texts = labels(&scales(&FigureConfig::scales()));
        for label in ["0", "2.10³", "8.10³", "10⁴", "10⁻¹"] {
            assert!(texts.iter().any(|t| t == label), "missing {label}");
        }
    }

    #[test]
    fn the_curve_is_clipped_to_each_plot() {
        let config = FigureConfig::scales();
        let figure = scales(&config);
        for i in 0..4_u64 {
            let id = MarkId::from_raw((i + 1) * PANEL_STRIDE + CURVE_OFFSET);
            let curve = figure.scene().get(id).expect("curve");
            assert_eq!(curve.clips.len(), 1);
        }
    }

    #[test]
    fn output_is_deterministic() {
        let config = FigureConfig::scales();
        assert_eq!(
            scales(&config).to_svg_string(),
            scales(&config).to_svg_string()
        );
    }
}
