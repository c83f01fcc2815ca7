// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The 3×3 chart catalogue.
//!
//! Every panel is a [`SplitView`]: the same chart twice, once in a neutral
//! style above the diagonal and once in colour below it.

use core::f64::consts::PI;

use peniko::color::palette::css;
use peniko::{Brush, Color};
use splitplot_charts::{
    AreaMarkSpec, BarMarkSpec, BoxPlotSpec, CaptionSpec, CaptionStyle, Colormap, ContourSpec,
    ImageMarkSpec, Interpolation, LineMarkSpec, Normalize, PieSpec, PointMarkSpec,
    QuiverMarkSpec, ScalarGrid, ScaleContinuous, ScaleLinearSpec, ScaleSpec, SplitView,
    StrokeStyle, SubplotGrid, SurfaceSpec, contour_levels, gray, tab20c,
};
use splitplot_core::{Mark, MarkId, Region};

use crate::{Figure, FigureConfig, Rng, linspace};

/// Id stride between panels.
const PANEL_STRIDE: u64 = 100_000;
/// Id offset of the coloured variant within a panel.
const LOWER_OFFSET: u64 = 50_000;
/// Id offset of the split-view overlay within a panel.
const OVERLAY_OFFSET: u64 = 99_000;

/// The field shown by the image and contour panels.
fn peaks(x: f64, y: f64) -> f64 {
    (1.0 - x / 2.0 + x.powi(5) + y.powi(3)) * (-x * x - y * y).exp()
}

/// Which half of a panel is being drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Variant {
    /// Neutral style, upper-left half.
    Upper,
    /// Coloured style, lower-right half.
    Lower,
}

/// One catalogue cell.
struct Panel<'a> {
    config: &'a FigureConfig,
    region: Region,
    id_base: u64,
}

impl Panel<'_> {
    fn pt(&self, points: f64) -> f64 {
        self.config.pt(points)
    }

    /// Id base for component `k` of a variant.
    fn id(&self, variant: Variant, k: u64) -> u64 {
        let offset = match variant {
            Variant::Upper => 0,
            Variant::Lower => LOWER_OFFSET,
        };
        self.id_base + offset + k * 1_000
    }

    /// Linear scales mapping the data limits onto the region.
    fn scales(&self, x: (f64, f64), y: (f64, f64)) -> (ScaleContinuous, ScaleContinuous) {
        let r = self.region.rect();
        (
            ScaleSpec::Linear(ScaleLinearSpec::new(x)).instantiate((r.x0, r.x1), 5),
            ScaleSpec::Linear(ScaleLinearSpec::new(y)).instantiate((r.y1, r.y0), 5),
        )
    }

    /// Composes both variants with separator, border and captions.
    fn compose(&self, left: &str, right: &str, upper: Vec<Mark>, lower: Vec<Mark>) -> Vec<Mark> {
        let overlay = self.id_base + OVERLAY_OFFSET;
        SplitView::new(overlay, self.region)
            .with_separator(StrokeStyle::solid(css::BLACK, self.pt(0.5)))
            .with_border(Some(StrokeStyle::solid(css::BLACK, self.pt(0.75))))
            .with_captions(
                CaptionSpec::new(overlay + 10, left, right)
                    .with_style(CaptionStyle::default().scaled(self.pt(1.0))),
            )
            .marks(move |_, _| upper, move |_, _| lower)
    }
}

/// Builds the catalogue figure.
pub fn catalogue(config: &FigureConfig) -> Figure {
    let mut figure = Figure::new(config.clone());
    let mut rng = Rng::new(config.seed);
    let grid = SubplotGrid::new(figure.size(), 3, 3);
    let panels: [fn(&Panel<'_>, &mut Rng) -> Vec<Mark>; 9] = [
        line_plot,
        scatter_plot,
        bar_plot,
        image_plot,
        contour_plot,
        box_plot,
        quiver_plot,
        pie_plot,
        surface_plot,
    ];
    for (i, (region, draw)) in grid.regions().into_iter().zip(panels).enumerate() {
        let panel = Panel {
            config,
            region,
            id_base: (i as u64 + 1) * PANEL_STRIDE,
        };
        figure.add(draw(&panel, &mut rng));
    }
    figure
}

fn line_plot(p: &Panel<'_>, _rng: &mut Rng) -> Vec<Mark> {
    let xs = linspace(-1.0, 1.0, 100);
    let ys: Vec<f64> = xs.iter().map(|x| 0.25 * (1.0 + PI * x).cos()).collect();
    let (sx, sy) = p.scales((-1.0, 1.0), (-1.0, 1.0));
    let draw = |variant: Variant, color: Color| {
        let mut marks = AreaMarkSpec::new(
            p.id(variant, 0),
            xs.clone(),
            ys.iter().map(|y| y + 0.25).collect(),
            sx,
            sy,
        )
        .with_lower(ys.iter().map(|y| y - 0.25).collect())
        .with_fill(color.with_alpha(0.15))
        .marks();
        marks.extend(
            LineMarkSpec::new(
                MarkId::from_raw(p.id(variant, 1)),
                xs.clone(),
                ys.clone(),
                sx,
                sy,
            )
            .with_stroke(StrokeStyle::solid(color, p.pt(2.0)))
            .marks(),
        );
        marks
    };
    p.compose(
        "Line plot",
        "ax.plot()",
        draw(Variant::Upper, css::BLACK),
        draw(Variant::Lower, css::RED),
    )
}

fn scatter_plot(p: &Panel<'_>, rng: &mut Rng) -> Vec<Mark> {
    let n = 500;
    let xs = rng.normals(n, 0.0, 0.5);
    let ys = rng.normals(n, 0.0, 0.5);
    let (sx, sy) = p.scales((-1.0, 1.0), (-1.0, 1.0));
    // Marker areas in pt², as diameters in scene units.
    let size = p.pt(25_f64.sqrt());
    let dot = p.pt(12.5_f64.sqrt());
    let draw = |variant: Variant, color: Color| {
        let points = |k: u64| PointMarkSpec::new(p.id(variant, k), xs.clone(), ys.clone(), sx, sy);
        let mut marks = points(0)
            .with_size(size)
            .with_fill(Color::TRANSPARENT)
            .with_stroke(StrokeStyle::solid(gray(0.25), p.pt(0.75)))
            .marks();
        marks.extend(points(1).with_size(size).with_fill(css::WHITE).marks());
        marks.extend(
            points(2)
                .with_size(dot)
                .with_fill(color.with_alpha(0.5))
                .marks(),
        );
        marks
    };
    p.compose(
        "Scatter plot",
        "ax.scatter()",
        draw(Variant::Upper, css::BLACK),
        draw(Variant::Lower, css::RED),
    )
}

fn bar_plot(p: &Panel<'_>, rng: &mut Rng) -> Vec<Mark> {
    let n: u32 = 16;
    let xs: Vec<f64> = (0..n).map(f64::from).collect();
    let mut heights = |sign: f64| -> Vec<f64> {
        xs.iter()
            .map(|x| sign * (1.0 - 0.25 * x / f64::from(n)) * rng.uniform_range(0.25, 0.75))
            .collect()
    };
    let up = heights(1.0);
    let down = heights(-1.0);
    let (sx, sy) = p.scales((-1.0, f64::from(n)), (-1.0, 1.0));
    let edge = StrokeStyle::solid(css::WHITE, p.pt(1.0));
    let draw = |variant: Variant, fills: [Color; 2]| {
        let bars = |k: u64, heights: &[f64], fill: Color| {
            BarMarkSpec::new(p.id(variant, k), xs.clone(), heights.to_vec(), sx, sy)
                .with_width(1.0)
                .with_fill(fill)
                .with_stroke(edge.clone())
                .marks()
        };
        let mut marks = bars(0, &up, fills[0]);
        marks.extend(bars(1, &down, fills[1]));
        marks
    };
    p.compose(
        "Bar plot",
        "ax.bar()",
        draw(
            Variant::Upper,
            [Color::from_rgb8(0xcc, 0xcc, 0xcc), Color::from_rgb8(0x99, 0x99, 0x99)],
        ),
        draw(
            Variant::Lower,
            [Color::from_rgb8(0xff, 0xaa, 0xaa), Color::from_rgb8(0xff, 0x77, 0x77)],
        ),
    )
}

/// `peaks` sampled `n × n` over `[-3, 3]²`, shown on `[-1, 1]²`.
fn peaks_grid(n: usize) -> ScalarGrid {
    let xs = linspace(-3.0, 3.0, n);
    ScalarGrid::from_fn(&xs, &xs, (-1.0, 1.0, -1.0, 1.0), peaks)
}

fn image_plot(p: &Panel<'_>, _rng: &mut Rng) -> Vec<Mark> {
    let grid = peaks_grid(32);
    let (sx, sy) = p.scales((-1.0, 1.0), (-1.0, 1.0));
    let upper = ImageMarkSpec::new(p.id(Variant::Upper, 0), grid.clone(), sx, sy, Colormap::Gray)
        .marks();
    let lower = ImageMarkSpec::new(p.id(Variant::Lower, 0), grid, sx, sy, Colormap::Hot)
        .with_interpolation(Interpolation::Bicubic { upsample: 3 })
        .marks();
    p.compose("Image plot", "ax.imshow()", upper, lower)
}

fn contour_plot(p: &Panel<'_>, _rng: &mut Rng) -> Vec<Mark> {
    let grid = peaks_grid(100);
    let (zmin, zmax) = grid.range().unwrap_or((0.0, 1.0));
    let levels = contour_levels(zmin, zmax, 10);
    let (sx, sy) = p.scales((-1.0, 1.0), (-1.0, 1.0));
    let draw = |variant: Variant, colormap: Colormap, alpha: f32, lines: Color| {
        ContourSpec::new(p.id(variant, 0), grid.clone(), levels.clone(), sx, sy)
            .with_colormap(colormap, alpha)
            .with_lines(StrokeStyle::solid(lines, p.pt(0.5)))
            .marks()
    };
    p.compose(
        "Contour plot",
        "ax.contour()",
        draw(Variant::Upper, Colormap::Gray, 0.5, css::BLACK),
        draw(Variant::Lower, Colormap::Viridis, 0.75, css::WHITE),
    )
}

fn box_plot(p: &Panel<'_>, rng: &mut Rng) -> Vec<Mark> {
    let (rows, cols) = (100, 5);
    // Row-major draws, one column per box.
    let draws = rng.normals(rows * cols, 0.0, 0.25);
    let columns: Vec<Vec<f64>> = (0..cols)
        .map(|c| draws.iter().skip(c).step_by(cols).copied().collect())
        .collect();
    let (sx, sy) = p.scales((0.0, cols as f64 + 1.0), (-1.0, 1.0));
    let spec = |variant: Variant| {
        BoxPlotSpec::new(p.id(variant, 0), columns.clone(), sx, sy)
            .with_line_width(p.pt(1.0))
            .with_flier_size(p.pt(6.0))
    };
    let upper = spec(Variant::Upper)
        .with_box_fill(gray(0.9))
        .with_median(StrokeStyle::solid(css::BLACK, p.pt(1.0)))
        .marks();
    let lower = spec(Variant::Lower).with_color(css::RED).marks();
    p.compose("Box plot", "ax.boxplot()", upper, lower)
}

fn quiver_plot(p: &Panel<'_>, _rng: &mut Rng) -> Vec<Mark> {
    let n = 10;
    let axis = linspace(-1.0, 1.0, n);
    let (mut xs, mut ys) = (Vec::new(), Vec::new());
    for &x in &axis {
        for &y in &axis {
            xs.push(x);
            ys.push(y);
        }
    }
    let angles: Vec<f64> = xs.iter().zip(&ys).map(|(x, y)| y.atan2(*x)).collect();
    let us: Vec<f64> = angles.iter().map(|t| 0.1 * t.cos()).collect();
    let vs: Vec<f64> = angles.iter().map(|t| 0.1 * t.sin()).collect();
    let (sx, sy) = p.scales((-1.0, 1.0), (-1.0, 1.0));
    // Lengths and widths are fractions of the panel width.
    let width = p.region.rect().width();
    let spec = |variant: Variant| {
        QuiverMarkSpec::new(
            p.id(variant, 0),
            xs.clone(),
            ys.clone(),
            us.clone(),
            vs.clone(),
            sx,
            sy,
        )
        .with_length_scale(width)
        .with_shaft_width(0.015 * width)
        .with_stroke(StrokeStyle::solid(css::BLACK, p.pt(0.5)))
    };
    let norm = Normalize::from_values(&angles).unwrap_or(Normalize::new(-PI, PI));
    let upper = spec(Variant::Upper).with_fill(gray(0.9)).marks();
    let lower = spec(Variant::Lower)
        .with_fills(
            angles
                .iter()
                .map(|t| Brush::Solid(Colormap::Hot.map(norm.apply(*t)))),
        )
        .marks();
    p.compose("Quiver plot", "ax.quiver()", upper, lower)
}

fn pie_plot(p: &Panel<'_>, _rng: &mut Rng) -> Vec<Mark> {
    let groups = [[60.0, 32.0], [37.0, 40.0], [29.0, 10.0]];
    let outer: Vec<f64> = groups.iter().map(|g| g[0] + g[1]).collect();
    let inner: Vec<f64> = groups.iter().flatten().copied().collect();
    let inner_index: [u32; 6] = [1, 2, 5, 6, 9, 10];
    let ring_width = 0.3;

    let rect = p.region.rect();
    let center = rect.center();
    // Data limits are [-1.25, 1.25] on both axes with equal aspect.
    let unit = rect.width().min(rect.height()) / 2.5;
    let edge = StrokeStyle::solid(css::WHITE, p.pt(1.0));
    let draw = |variant: Variant, outer_fills: Vec<Color>, inner_fills: Vec<Color>| {
        let ring = |k: u64, radius: f64, values: &[f64], fills: Vec<Color>| {
            PieSpec::new(p.id(variant, k), center, radius * unit, values.to_vec())
                .with_width(ring_width * unit)
                .with_fills(fills.into_iter().map(Brush::Solid))
                .with_stroke(edge.clone())
                .marks()
        };
        let mut marks = ring(0, 1.0, &outer, outer_fills);
        marks.extend(ring(1, 1.0 - ring_width, &inner, inner_fills));
        marks
    };
    let upper = draw(
        Variant::Upper,
        (0..3_u32).map(|i| gray(0.1 + f64::from(i) / 4.0)).collect(),
        inner_index.iter().map(|&k| gray(f64::from(k) / 12.0)).collect(),
    );
    let lower = draw(
        Variant::Lower,
        (0..3).map(tab20c).collect(),
        inner_index.iter().map(|&k| tab20c(k as usize)).collect(),
    );
    p.compose("Pie plot", "ax.pie()", upper, lower)
}

fn surface_plot(p: &Panel<'_>, _rng: &mut Rng) -> Vec<Mark> {
    let axis = linspace(-1.0, 1.0, 25);
    let grid = ScalarGrid::from_fn(&axis, &axis, (-1.0, 1.0, -1.0, 1.0), |x, y| {
        (5.0 * (x * x + y * y).sqrt()).sin()
    });
    let norm = Normalize::new(-1.5, 1.0);
    let frame = p.region.rect();
    let spec = |variant: Variant, colormap: Colormap| {
        SurfaceSpec::new(p.id(variant, 0), grid.clone(), (-2.0, 2.0), frame, colormap)
            .with_norm(norm)
    };
    let upper = spec(Variant::Upper, Colormap::Gray)
        .with_edges(StrokeStyle::solid(css::BLACK, p.pt(0.25)))
        .marks();
    let lower = spec(Variant::Lower, Colormap::Magma).marks();
    p.compose("3D plot", "ax.plot_surface()", upper, lower)
}

#[cfg(test)]
mod tests {
    use super::*;
    use splitplot_core::{MarkPayload, RegionHalf};

    #[test]
    fn every_panel_is_split_and_captioned() {
        let config = FigureConfig::catalogue();
        let figure = catalogue(&config);
        let scene = figure.scene();
        let regions = SubplotGrid::new(config.size(), 3, 3).regions();
        for (i, region) in regions.iter().enumerate() {
            let overlay = (i as u64 + 1) * PANEL_STRIDE + OVERLAY_OFFSET;
            let separator = scene.get(MarkId::from_raw(overlay)).expect("separator");
            assert!(!separator.is_clipped());
            for caption in [overlay + 10, overlay + 11] {
                let mark = scene.get(MarkId::from_raw(caption)).expect("caption");
                assert!(!mark.is_clipped());
                let MarkPayload::Text(text) = &mark.payload else {
                    panic!("captions are text");
                };
                assert!(text.pos.y > region.rect().y1);
            }
            // Every clipped mark in this panel uses one of its two masks.
            let masks = [
                region.half_mask(RegionHalf::UpperLeft),
                region.half_mask(RegionHalf::LowerRight),
            ];
            let clipped = scene
                .paint_order()
                .into_iter()
                .filter(|m| m.clips.iter().any(|c| masks.contains(c)))
                .count();
            assert!(clipped > 0, "panel {i} has no variant marks");
        }
    }

    #[test]
    fn same_seed_same_figure() {
        let config = FigureConfig::catalogue();
        let a = catalogue(&config).to_svg_string();
        let b = catalogue(&config).to_svg_string();
        assert_eq!(a, b);
        assert!(a.contains("<clipPath "));
        assert!(a.contains("ax.plot_surface()"));
        let other = catalogue(&config.clone().with_seed(7)).to_svg_string();
        assert_ne!(a, other);
    }

    #[test]
    fn peaks_matches_known_values() {
        assert_eq!(peaks(0.0, 0.0), 1.0);
        assert!((peaks(1.0, 0.0) - 1.5 * (-1.0_f64).exp()).abs() < 1e-12);
    }
}
