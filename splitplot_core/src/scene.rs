// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::{BezPath, ParamCurveNearest, Point, Shape};
use peniko::{Brush, Color};

use crate::{Mark, MarkId, MarkPayload};

/// Curve accuracy used when measuring stroke distance.
const NEAREST_ACCURACY: f64 = 1e-6;

/// The marks of one figure, with a deterministic paint order.
///
/// Marks are keyed by [`MarkId`]; inserting an id twice replaces the earlier
/// mark. Paint order is `(z_index, insertion sequence)`.
#[derive(Debug, Default)]
pub struct Scene {
    marks: HashMap<MarkId, (u64, Mark)>,
    next_seq: u64,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a mark, returning the mark it replaced, if any.
    pub fn insert(&mut self, mark: Mark) -> Option<Mark> {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.marks.insert(mark.id, (seq, mark)).map(|(_, old)| old)
    }

    /// Inserts marks in iteration order.
    pub fn extend(&mut self, marks: impl IntoIterator<Item = Mark>) {
        for mark in marks {
            self.insert(mark);
        }
    }

    /// Number of marks.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns `true` if the scene has no marks.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Looks up a mark by id.
    pub fn get(&self, id: MarkId) -> Option<&Mark> {
        self.marks.get(&id).map(|(_, m)| m)
    }

    /// Marks in back-to-front paint order.
    pub fn paint_order(&self) -> Vec<&Mark> {
        let mut entries: Vec<_> = self.marks.values().collect();
        entries.sort_by_key(|(seq, m)| (m.z_index, *seq));
        entries.into_iter().map(|(_, m)| m).collect()
    }

    /// Composites every mark covering `pt` over `background`.
    ///
    /// Fills use path containment and strokes use distance to the outline.
    /// Marks are skipped where their clip stack excludes `pt`. Text is not
    /// sampled, and non-solid brushes are ignored.
    pub fn sample(&self, pt: Point, background: Color) -> Color {
        let mut acc = background.components;
        for mark in self.paint_order() {
            if !mark.visible_at(pt) {
                continue;
            }
            match &mark.payload {
                MarkPayload::Rect(r) => {
                    if r.rect.contains(pt) {
                        over(&mut acc, &r.fill);
                    }
                    if r.stroke_width > 0.0 && near_outline(&r.rect.to_path(0.1), pt, r.stroke_width)
                    {
                        over(&mut acc, &r.stroke);
                    }
                }
                MarkPayload::Path(p) => {
                    if is_visible(&p.fill) && p.path.contains(pt) {
                        over(&mut acc, &p.fill);
                    }
                    if p.stroke_width > 0.0 && near_outline(&p.path, pt, p.stroke_width) {
                        over(&mut acc, &p.stroke);
                    }
                }
                MarkPayload::Text(_) => {}
            }
        }
        Color::new(acc)
    }
}

fn is_visible(brush: &Brush) -> bool {
    match brush {
        Brush::Solid(c) => c.components[3] > 0.0,
        _ => false,
    }
}

fn near_outline(path: &BezPath, pt: Point, stroke_width: f64) -> bool {
    let half = 0.5 * stroke_width;
    let limit = half * half;
    path.segments()
        .any(|seg| seg.nearest(pt, NEAREST_ACCURACY).distance_sq <= limit)
}

/// Source-over compositing of a solid brush onto straight-alpha `dst`.
fn over(dst: &mut [f32; 4], brush: &Brush) {
    let Brush::Solid(src) = brush else {
        return;
    };
    let [sr, sg, sb, sa] = src.components;
    if sa <= 0.0 {
        return;
    }
    let da = dst[3];
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        *dst = [0.0; 4];
        return;
    }
    let blend = |s: f32, d: f32| (s * sa + d * da * (1.0 - sa)) / out_a;
    *dst = [
        blend(sr, dst[0]),
        blend(sg, dst[1]),
        blend(sb, dst[2]),
        out_a,
    ];
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::{ClipPath, Region, RegionHalf};
    use kurbo::Rect;
    use peniko::color::palette::css;

    fn rect_mark(id: u64, z: i32, rect: Rect, fill: Color) -> Mark {
        Mark::builder(MarkId::from_raw(id))
            .rect()
            .z_index(z)
            .bounds(rect)
            .fill(fill)
            .build()
    }

    #[test]
    fn paint_order_is_z_then_insertion() {
        let mut scene = Scene::new();
        let r = Rect::new(0.0, 0.0, 1.0, 1.0);
        scene.insert(rect_mark(30, 5, r, css::RED));
        scene.insert(rect_mark(10, 5, r, css::GREEN));
        scene.insert(rect_mark(20, -1, r, css::BLUE));
        let ids: Vec<u64> = scene.paint_order().iter().map(|m| m.id.0).collect();
        assert_eq!(ids, [20, 30, 10]);
    }

    #[test]
    fn reinserting_an_id_replaces_it() {
        let mut scene = Scene::new();
        let r = Rect::new(0.0, 0.0, 1.0, 1.0);
        assert!(scene.insert(rect_mark(1, 0, r, css::RED)).is_none());
        let old = scene.insert(rect_mark(1, 0, r, css::BLUE));
        assert!(old.is_some());
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn sample_composites_alpha_over_background() {
        let mut scene = Scene::new();
        scene.insert(rect_mark(
            1,
            0,
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Color::from_rgba8(0, 0, 0, 255).with_alpha(0.5),
        ));
        let c = scene.sample(Point::new(5.0, 5.0), Color::WHITE).to_rgba8();
        assert!((i32::from(c.r) - 128).abs() <= 1, "got {c:?}");
        assert_eq!(c.a, 255);
        let outside = scene.sample(Point::new(50.0, 5.0), Color::WHITE).to_rgba8();
        assert_eq!((outside.r, outside.g, outside.b), (255, 255, 255));
    }

    #[test]
    fn sample_respects_clip_masks() {
        let region = Region::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        let mut scene = Scene::new();
        let mut red = rect_mark(1, 0, region.rect(), css::RED);
        red.push_clip(region.half_mask(RegionHalf::UpperLeft));
        let mut blue = rect_mark(2, 0, region.rect(), css::BLUE);
        blue.push_clip(region.half_mask(RegionHalf::LowerRight));
        scene.extend([red, blue]);

        let ul = scene.sample(region.to_scene(0.1, 0.9), Color::WHITE);
        let lr = scene.sample(region.to_scene(0.9, 0.1), Color::WHITE);
        assert_eq!(ul.to_rgba8(), css::RED.to_rgba8());
        assert_eq!(lr.to_rgba8(), css::BLUE.to_rgba8());
    }

    #[test]
    fn stroke_coverage_uses_distance() {
        let mut path = BezPath::new();
        path.move_to((0.0, 50.0));
        path.line_to((100.0, 50.0));
        let mut scene = Scene::new();
        scene.insert(
            Mark::builder(MarkId::from_raw(1))
                .path()
                .shape(path)
                .stroke(css::BLACK)
                .stroke_width(4.0)
                .clip(ClipPath::rect(Rect::new(0.0, 0.0, 50.0, 100.0)))
                .build(),
        );
        let on = scene.sample(Point::new(20.0, 51.5), Color::WHITE).to_rgba8();
        let off = scene.sample(Point::new(20.0, 53.0), Color::WHITE).to_rgba8();
        let clipped = scene.sample(Point::new(70.0, 50.0), Color::WHITE).to_rgba8();
        assert_eq!(on.r, 0);
        assert_eq!(off.r, 255);
        assert_eq!(clipped.r, 255);
    }
}
