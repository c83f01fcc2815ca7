// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `splitplot_core`: marks, clip masks, regions and paint-ordered scenes.
//!
//! This crate provides:
//! - stable mark identity ([`MarkId`])
//! - per-kind mark payloads ([`MarkPayload`])
//! - clip stacks on marks ([`ClipPath`])
//! - rectangular drawing areas with an axis-relative unit frame ([`Region`])
//! - a deterministic paint order and point sampler ([`Scene`])
//!
//! A chart layer builds [`Mark`]s for one [`Region`] at a time and inserts them
//! into a [`Scene`]. Renderers walk [`Scene::paint_order`].

#![no_std]

extern crate alloc;

mod clip;
mod region;
mod scene;

use alloc::string::String;
use kurbo::{BezPath, Point, Rect, Shape};
use peniko::{Brush, Color};
use smallvec::SmallVec;

pub use clip::ClipPath;
pub use region::{Region, RegionHalf};
pub use scene::Scene;
pub use splitplot_text::FontFamily;

/// Stable identifier for a [`Mark`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkId(pub u64);

impl MarkId {
    /// Create a mark id from a raw value.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Create a stable id for the `index`-th sub-element of a generated mark group.
    ///
    /// This is a deterministic namespacing mix; it does not depend on insertion order.
    pub fn child(self, index: u64) -> Self {
        let ns = self.0.wrapping_mul(0x9E37_79B9_7F4A_7C15);
        Self(ns ^ index.rotate_left(17) ^ index.wrapping_mul(0xD6E8_FEB8_6659_FD93))
    }
}

/// The geometric "kind" of a mark, which determines how its payload is interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkKind {
    /// An axis-aligned rectangle using [`RectChannels`].
    Rect,
    /// A text label using [`TextChannels`].
    Text,
    /// A vector path using [`PathChannels`].
    Path,
}

/// Resolved visual values for a mark.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkPayload {
    /// Rect payload.
    Rect(RectChannels),
    /// Text payload.
    Text(TextChannels),
    /// Path payload.
    Path(PathChannels),
}

impl MarkPayload {
    /// Return the kind of this payload.
    pub fn kind(&self) -> MarkKind {
        match self {
            Self::Rect(_) => MarkKind::Rect,
            Self::Text(_) => MarkKind::Text,
            Self::Path(_) => MarkKind::Path,
        }
    }

    /// Geometry bounds, if known.
    ///
    /// Text shaping happens downstream, so text has no bounds here.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Rect(r) => Some(r.rect),
            Self::Text(_) => None,
            Self::Path(p) => Some(p.path.bounding_box()),
        }
    }
}

/// Channels for [`MarkKind::Rect`].
#[derive(Clone, Debug, PartialEq)]
pub struct RectChannels {
    /// Rectangle geometry in scene coordinates.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width in scene coordinates; `0` disables the stroke.
    pub stroke_width: f64,
}

/// Channels for [`MarkKind::Text`].
#[derive(Clone, Debug, PartialEq)]
pub struct TextChannels {
    /// Anchor position in scene coordinates.
    pub pos: Point,
    /// Text content (unshaped).
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Font family.
    pub font_family: FontFamily,
    /// Text rotation angle in degrees, with positive angles rotating clockwise.
    pub angle: f64,
    /// Horizontal text anchoring relative to [`TextChannels::pos`].
    pub anchor: TextAnchor,
    /// Vertical alignment relative to [`TextChannels::pos`].
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
}

/// Horizontal anchoring for text.
///
/// In SVG terms, this maps to the `text-anchor` attribute. Left captions use
/// [`TextAnchor::Start`] and right captions use [`TextAnchor::End`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// Anchor at the start (left in LTR).
    Start,
    /// Anchor in the middle.
    Middle,
    /// Anchor at the end (right in LTR).
    End,
}

/// Vertical alignment for text.
///
/// In SVG terms, this maps to the `dominant-baseline` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// Baseline is centered on the anchor point.
    Middle,
    /// Baseline is the font’s alphabetic baseline.
    Alphabetic,
    /// Baseline is the font’s hanging baseline.
    Hanging,
}

/// Channels for [`MarkKind::Path`].
#[derive(Clone, Debug, PartialEq)]
pub struct PathChannels {
    /// The vector path geometry.
    pub path: BezPath,
    /// Fill paint.
    pub fill: Brush,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width in scene coordinates; `0` disables the stroke.
    pub stroke_width: f64,
}

impl Default for RectChannels {
    fn default() -> Self {
        Self {
            rect: Rect::new(0.0, 0.0, 0.0, 0.0),
            fill: Brush::Solid(Color::from_rgba8(0, 0, 0, 255)),
            stroke: Brush::Solid(Color::TRANSPARENT),
            stroke_width: 0.0,
        }
    }
}

impl Default for TextChannels {
    fn default() -> Self {
        Self {
            pos: Point::new(0.0, 0.0),
            text: String::new(),
            font_size: 10.0,
            font_family: FontFamily::SansSerif,
            angle: 0.0,
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Alphabetic,
            fill: Brush::Solid(Color::from_rgba8(0, 0, 0, 255)),
        }
    }
}

impl Default for PathChannels {
    fn default() -> Self {
        Self {
            path: BezPath::new(),
            fill: Brush::Solid(Color::TRANSPARENT),
            stroke: Brush::Solid(Color::from_rgba8(0, 0, 0, 255)),
            stroke_width: 0.0,
        }
    }
}

/// A drawable sub-element with a stable id, a paint order and a clip stack.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Stable identity.
    pub id: MarkId,
    /// Rendering order; lower values are painted first.
    pub z_index: i32,
    /// Geometry and paint.
    pub payload: MarkPayload,
    /// Clip paths, all of which must contain a point for the mark to show there.
    pub clips: SmallVec<[ClipPath; 2]>,
}

impl Mark {
    /// Start building a mark (defaults to a rect).
    pub fn builder(id: MarkId) -> MarkBuilder {
        MarkBuilder {
            mark: Self {
                id,
                z_index: 0,
                payload: MarkPayload::Rect(RectChannels::default()),
                clips: SmallVec::new(),
            },
        }
    }

    /// The mark kind.
    pub fn kind(&self) -> MarkKind {
        self.payload.kind()
    }

    /// Intersect this mark's visible area with `clip`.
    pub fn push_clip(&mut self, clip: ClipPath) {
        self.clips.push(clip);
    }

    /// Returns `true` if any clip path is attached.
    pub fn is_clipped(&self) -> bool {
        !self.clips.is_empty()
    }

    /// Returns `true` if every clip in the stack contains `pt`.
    pub fn visible_at(&self, pt: Point) -> bool {
        self.clips.iter().all(|c| c.contains(pt))
    }
}

/// A builder for [`Mark`].
///
/// Setters that do not apply to the current kind are ignored, so kind must be
/// chosen first.
#[derive(Debug)]
pub struct MarkBuilder {
    mark: Mark,
}

impl MarkBuilder {
    /// Set the mark z-index (rendering order).
    pub fn z_index(mut self, z_index: i32) -> Self {
        self.mark.z_index = z_index;
        self
    }

    /// Set the mark kind, resetting the payload to that kind's defaults.
    pub fn kind(mut self, kind: MarkKind) -> Self {
        self.mark.payload = match kind {
            MarkKind::Rect => MarkPayload::Rect(RectChannels::default()),
            MarkKind::Text => MarkPayload::Text(TextChannels::default()),
            MarkKind::Path => MarkPayload::Path(PathChannels::default()),
        };
        self
    }

    /// Convenience for `MarkKind::Rect`.
    pub fn rect(self) -> Self {
        self.kind(MarkKind::Rect)
    }

    /// Convenience for `MarkKind::Text`.
    pub fn text(self) -> Self {
        self.kind(MarkKind::Text)
    }

    /// Convenience for `MarkKind::Path`.
    pub fn path(self) -> Self {
        self.kind(MarkKind::Path)
    }

    /// Set the `x` position (rect origin or text anchor).
    pub fn x(mut self, v: f64) -> Self {
        match &mut self.mark.payload {
            MarkPayload::Rect(r) => r.rect = r.rect.with_origin((v, r.rect.y0)),
            MarkPayload::Text(t) => t.pos.x = v,
            MarkPayload::Path(_) => {}
        }
        self
    }

    /// Set the `y` position (rect origin or text anchor).
    pub fn y(mut self, v: f64) -> Self {
        match &mut self.mark.payload {
            MarkPayload::Rect(r) => r.rect = r.rect.with_origin((r.rect.x0, v)),
            MarkPayload::Text(t) => t.pos.y = v,
            MarkPayload::Path(_) => {}
        }
        self
    }

    /// Set the rect width.
    pub fn w(mut self, v: f64) -> Self {
        if let MarkPayload::Rect(r) = &mut self.mark.payload {
            r.rect.x1 = r.rect.x0 + v;
        }
        self
    }

    /// Set the rect height.
    pub fn h(mut self, v: f64) -> Self {
        if let MarkPayload::Rect(r) = &mut self.mark.payload {
            r.rect.y1 = r.rect.y0 + v;
        }
        self
    }

    /// Set the full rect geometry.
    pub fn bounds(mut self, rect: Rect) -> Self {
        if let MarkPayload::Rect(r) = &mut self.mark.payload {
            r.rect = rect;
        }
        self
    }

    /// Set the text content.
    pub fn label(mut self, text: impl Into<String>) -> Self {
        if let MarkPayload::Text(t) = &mut self.mark.payload {
            t.text = text.into();
        }
        self
    }

    /// Set the font size.
    pub fn font_size(mut self, v: f64) -> Self {
        if let MarkPayload::Text(t) = &mut self.mark.payload {
            t.font_size = v;
        }
        self
    }

    /// Set the font family.
    pub fn font_family(mut self, family: FontFamily) -> Self {
        if let MarkPayload::Text(t) = &mut self.mark.payload {
            t.font_family = family;
        }
        self
    }

    /// Set the text rotation angle in degrees.
    pub fn angle(mut self, v: f64) -> Self {
        if let MarkPayload::Text(t) = &mut self.mark.payload {
            t.angle = v;
        }
        self
    }

    /// Set horizontal text anchoring.
    pub fn text_anchor(mut self, anchor: TextAnchor) -> Self {
        if let MarkPayload::Text(t) = &mut self.mark.payload {
            t.anchor = anchor;
        }
        self
    }

    /// Set vertical text alignment.
    pub fn text_baseline(mut self, baseline: TextBaseline) -> Self {
        if let MarkPayload::Text(t) = &mut self.mark.payload {
            t.baseline = baseline;
        }
        self
    }

    /// Set the path geometry.
    pub fn shape(mut self, path: BezPath) -> Self {
        if let MarkPayload::Path(p) = &mut self.mark.payload {
            p.path = path;
        }
        self
    }

    /// Set the fill paint.
    pub fn fill(mut self, brush: impl Into<Brush>) -> Self {
        let brush = brush.into();
        match &mut self.mark.payload {
            MarkPayload::Rect(r) => r.fill = brush,
            MarkPayload::Text(t) => t.fill = brush,
            MarkPayload::Path(p) => p.fill = brush,
        }
        self
    }

    /// Set the stroke paint.
    pub fn stroke(mut self, brush: impl Into<Brush>) -> Self {
        let brush = brush.into();
        match &mut self.mark.payload {
            MarkPayload::Rect(r) => r.stroke = brush,
            MarkPayload::Path(p) => p.stroke = brush,
            MarkPayload::Text(_) => {}
        }
        self
    }

    /// Set the stroke width.
    pub fn stroke_width(mut self, v: f64) -> Self {
        match &mut self.mark.payload {
            MarkPayload::Rect(r) => r.stroke_width = v,
            MarkPayload::Path(p) => p.stroke_width = v,
            MarkPayload::Text(_) => {}
        }
        self
    }

    /// Push a clip path onto the mark's clip stack.
    pub fn clip(mut self, clip: ClipPath) -> Self {
        self.mark.push_clip(clip);
        self
    }

    /// Finish building.
    pub fn build(self) -> Mark {
        self.mark
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use peniko::color::palette::css;

    #[test]
    fn child_ids_are_stable_and_distinct() {
        let base = MarkId::from_raw(7);
        assert_eq!(base.child(3), base.child(3));
        assert_ne!(base.child(3), base.child(4));
        assert_ne!(base.child(0), MarkId::from_raw(8).child(0));
    }

    #[test]
    fn rect_builder_sets_geometry_and_paint() {
        let mark = Mark::builder(MarkId::from_raw(1))
            .rect()
            .x(10.0)
            .y(20.0)
            .w(5.0)
            .h(6.0)
            .fill(css::TOMATO)
            .stroke(css::WHITE)
            .stroke_width(1.0)
            .build();
        let MarkPayload::Rect(r) = &mark.payload else {
            panic!("expected rect payload");
        };
        assert_eq!(r.rect, Rect::new(10.0, 20.0, 15.0, 26.0));
        assert_eq!(r.fill, css::TOMATO.into());
        assert_eq!(r.stroke_width, 1.0);
        assert_eq!(mark.payload.bounds(), Some(Rect::new(10.0, 20.0, 15.0, 26.0)));
    }

    #[test]
    fn setters_for_other_kinds_are_ignored() {
        let mark = Mark::builder(MarkId::from_raw(1))
            .text()
            .x(1.0)
            .y(2.0)
            .w(100.0)
            .shape(BezPath::new())
            .label("hello")
            .font_family(FontFamily::Monospace)
            .build();
        assert_eq!(mark.kind(), MarkKind::Text);
        let MarkPayload::Text(t) = &mark.payload else {
            panic!("expected text payload");
        };
        assert_eq!(t.pos, Point::new(1.0, 2.0));
        assert_eq!(t.text, "hello");
        assert_eq!(t.font_family, FontFamily::Monospace);
        assert_eq!(mark.payload.bounds(), None);
    }

    #[test]
    fn clip_stack_is_an_intersection() {
        let a = ClipPath::rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        let b = ClipPath::rect(Rect::new(5.0, 0.0, 15.0, 10.0));
        let mark = Mark::builder(MarkId::from_raw(1))
            .path()
            .clip(a)
            .clip(b)
            .build();
        assert!(mark.is_clipped());
        assert!(mark.visible_at(Point::new(7.0, 5.0)));
        assert!(!mark.visible_at(Point::new(2.0, 5.0)));
        assert!(!mark.visible_at(Point::new(12.0, 5.0)));
    }
}
