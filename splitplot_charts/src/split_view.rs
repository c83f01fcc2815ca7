// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The diagonal split-view renderer.
//!
//! A [`SplitView`] draws two variants of the same chart into one [`Region`].
//! The first variant is restricted to the upper-left triangle and the second to
//! the lower-right triangle. The diagonal and the region border are drawn on
//! top of both, unclipped, followed by optional captions below the region.
//!
//! ```
//! use kurbo::Rect;
//! use peniko::color::palette::css;
//! use splitplot_charts::{RectMarkSpec, SplitView};
//! use splitplot_core::{MarkId, Region};
//!
//! let region = Region::new(Rect::new(0.0, 0.0, 100.0, 100.0));
//! let marks = SplitView::new(1_000, region).marks(
//!     |r, _mask| vec![RectMarkSpec::new(MarkId::from_raw(1), r.rect()).with_fill(css::GRAY).mark()],
//!     |r, _mask| vec![RectMarkSpec::new(MarkId::from_raw(2), r.rect()).with_fill(css::RED).mark()],
//! );
//! assert_eq!(marks.iter().filter(|m| m.is_clipped()).count(), 2);
//! ```

extern crate alloc;

use alloc::vec::Vec;

use peniko::color::palette::css;
use splitplot_core::{ClipPath, Mark, MarkId, Region, RegionHalf};

use crate::caption::CaptionSpec;
use crate::rect_mark::RectMarkSpec;
use crate::rule_mark::RuleMarkSpec;
use crate::{StrokeStyle, z_order};

/// Split-view composition for one region.
#[derive(Clone, Debug)]
pub struct SplitView {
    /// Stable-id base for the separator (`id_base`) and border (`id_base + 1`).
    pub id_base: u64,
    /// The region being split.
    pub region: Region,
    /// Diagonal stroke.
    pub separator: StrokeStyle,
    /// Border stroke; `None` draws no border.
    pub border: Option<StrokeStyle>,
    /// Optional captions below the region.
    pub captions: Option<CaptionSpec>,
}

impl SplitView {
    /// Creates a split view with a 0.5 diagonal and a 0.75 border.
    pub fn new(id_base: u64, region: Region) -> Self {
        Self {
            id_base,
            region,
            separator: StrokeStyle::solid(css::BLACK, 0.5),
            border: Some(StrokeStyle::solid(css::BLACK, 0.75)),
            captions: None,
        }
    }

    /// Sets the diagonal stroke.
    pub fn with_separator(mut self, separator: StrokeStyle) -> Self {
        self.separator = separator;
        self
    }

    /// Sets (or clears) the border stroke.
    pub fn with_border(mut self, border: Option<StrokeStyle>) -> Self {
        self.border = border;
        self
    }

    /// Sets the captions.
    pub fn with_captions(mut self, captions: CaptionSpec) -> Self {
        self.captions = Some(captions);
        self
    }

    /// Composes both variants with the separator, border and captions.
    ///
    /// Each closure receives the region and the mask its output will be
    /// clipped to. The mask is pushed onto every returned mark, and variant
    /// z-indices are capped at [`z_order::VARIANT_MAX`].
    pub fn marks<A, B>(&self, upper: A, lower: B) -> Vec<Mark>
    where
        A: FnOnce(&Region, &ClipPath) -> Vec<Mark>,
        B: FnOnce(&Region, &ClipPath) -> Vec<Mark>,
    {
        let mut out = self.variant(RegionHalf::UpperLeft, upper);
        out.extend(self.variant(RegionHalf::LowerRight, lower));
        out.extend(self.overlay_marks());
        out
    }

    fn variant(
        &self,
        half: RegionHalf,
        draw: impl FnOnce(&Region, &ClipPath) -> Vec<Mark>,
    ) -> Vec<Mark> {
        let mask = self.region.half_mask(half);
        let mut marks = draw(&self.region, &mask);
        for mark in &mut marks {
            mark.push_clip(mask.clone());
            mark.z_index = mark.z_index.min(z_order::VARIANT_MAX);
        }
        marks
    }

    /// Unclipped marks drawn over both variants.
    pub fn overlay_marks(&self) -> Vec<Mark> {
        let mut out = Vec::new();
        out.push(
            RuleMarkSpec::from_line(MarkId::from_raw(self.id_base), self.region.diagonal())
                .with_stroke_style(self.separator.clone())
                .with_z_index(z_order::SEPARATOR)
                .mark(),
        );
        if let Some(border) = &self.border {
            out.push(
                RectMarkSpec::new(MarkId::from_raw(self.id_base + 1), self.region.rect())
                    .with_stroke(border.clone())
                    .with_z_index(z_order::REGION_BORDER)
                    .mark(),
            );
        }
        if let Some(captions) = &self.captions {
            out.extend(captions.marks(&self.region));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use kurbo::{Point, Rect};
    use peniko::Color;
    use splitplot_core::{MarkKind, Scene};

    const BANDS: usize = 6;

    fn band_color(variant: usize, band: usize) -> Color {
        let level = 40 * band as u8;
        if variant == 0 {
            Color::from_rgb8(200, level, 0)
        } else {
            Color::from_rgb8(0, level, 200)
        }
    }

    /// Horizontal stripes across the whole region, one mark per band.
    fn stripes(id_base: u64, variant: usize) -> impl FnOnce(&Region, &ClipPath) -> Vec<Mark> {
        move |region, _mask| {
            let r = region.rect();
            let h = r.height() / BANDS as f64;
            (0..BANDS)
                .map(|i| {
                    let y0 = r.y0 + i as f64 * h;
                    RectMarkSpec::new(
                        MarkId::from_raw(id_base + i as u64),
                        Rect::new(r.x0, y0, r.x1, y0 + h),
                    )
                    .with_fill(band_color(variant, i))
                    .with_z_index(z_order::SERIES_FILL)
                    .mark()
                })
                .collect()
        }
    }

    fn regions() -> [Region; 3] {
        [
            Region::new(Rect::new(0.0, 0.0, 120.0, 120.0)),
            Region::new(Rect::new(30.0, 10.0, 330.0, 110.0)),
            Region::new(Rect::new(5.0, 400.0, 65.0, 700.0)),
        ]
    }

    #[test]
    fn every_band_is_restricted_to_its_half() {
        for region in regions() {
            let view = SplitView::new(9_000, region);
            let marks = view.marks(stripes(100, 0), stripes(200, 1));
            let mut scene = Scene::new();
            scene.extend(marks);

            let rect = region.rect();
            let h = rect.height() / BANDS as f64;
            for band in 0..BANDS {
                // Stripe centre, expressed in the unit frame (v grows up).
                let v = 1.0 - (band as f64 + 0.5) * h / rect.height();
                for (u, variant) in [(v - 0.05, 0), (v + 0.05, 1)] {
                    if !(0.01..0.99).contains(&u) {
                        continue;
                    }
                    let pt = region.to_scene(u, v);
                    let got = scene.sample(pt, Color::WHITE).to_rgba8();
                    let want = band_color(variant, band).to_rgba8();
                    let other = band_color(1 - variant, band).to_rgba8();
                    assert_eq!(got, want, "band {band} at ({u:.3}, {v:.3})");
                    assert_ne!(got, other);
                }
            }
        }
    }

    #[test]
    fn all_variant_marks_carry_their_mask() {
        let region = regions()[1];
        let view = SplitView::new(9_000, region);
        let marks = view.marks(stripes(100, 0), stripes(200, 1));
        let upper = region.half_mask(RegionHalf::UpperLeft);
        let lower = region.half_mask(RegionHalf::LowerRight);
        let in_upper = marks.iter().filter(|m| m.clips.as_slice() == [upper.clone()]);
        let in_lower = marks.iter().filter(|m| m.clips.as_slice() == [lower.clone()]);
        assert_eq!(in_upper.count(), BANDS);
        assert_eq!(in_lower.count(), BANDS);
    }

    #[test]
    fn separator_and_border_are_topmost_and_unclipped() {
        let region = regions()[0];
        let view = SplitView::new(9_000, region);
        let marks = view.marks(
            |r, _| {
                alloc::vec![
                    RectMarkSpec::new(MarkId::from_raw(1), r.rect())
                        .with_fill(css::RED)
                        .with_z_index(1_000)
                        .mark()
                ]
            },
            stripes(200, 1),
        );
        let separator = marks
            .iter()
            .find(|m| m.id == MarkId::from_raw(9_000))
            .expect("separator");
        let border = marks
            .iter()
            .find(|m| m.id == MarkId::from_raw(9_001))
            .expect("border");
        assert!(!separator.is_clipped() && !border.is_clipped());
        assert_eq!(separator.kind(), MarkKind::Path);
        let variant_max = marks
            .iter()
            .filter(|m| m.is_clipped())
            .map(|m| m.z_index)
            .max()
            .expect("variant marks");
        assert_eq!(variant_max, z_order::VARIANT_MAX);
        assert!(separator.z_index > variant_max);
        assert!(border.z_index > separator.z_index);

        let mut scene = Scene::new();
        scene.extend(marks);
        let ids: Vec<u64> = scene.paint_order().iter().map(|m| m.id.0).collect();
        assert_eq!(&ids[ids.len() - 2..], [9_000, 9_001]);

        // The diagonal shows over both opaque variants.
        let on_diagonal = scene.sample(region.to_scene(0.4, 0.4), Color::WHITE).to_rgba8();
        assert_eq!(on_diagonal, css::BLACK.to_rgba8());
        // The border shows along an edge, outside both masks' interiors.
        let on_border = scene.sample(Point::new(60.0, 120.2), Color::WHITE).to_rgba8();
        assert_eq!(on_border, css::BLACK.to_rgba8());
    }

    #[test]
    fn captions_are_emitted_unclipped() {
        let region = regions()[0];
        let view = SplitView::new(9_000, region)
            .with_captions(CaptionSpec::new(9_010, "Line plot", "ax.plot()"));
        let marks = view.marks(|_, _| Vec::new(), |_, _| Vec::new());
        assert_eq!(marks.len(), 4);
        assert!(marks.iter().all(|m| !m.is_clipped()));
    }
}
