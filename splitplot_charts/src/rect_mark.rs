// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rect mark generation.

use kurbo::Rect;
use peniko::{Brush, Color};
use splitplot_core::{Mark, MarkId};

use crate::axis::StrokeStyle;
use crate::z_order;

/// A single rectangle in scene coordinates, optionally stroked.
///
/// Used for backgrounds, plot frames, region borders and image cells.
#[derive(Clone, Debug)]
pub struct RectMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Rectangle geometry.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
    /// Optional outline.
    pub stroke: Option<StrokeStyle>,
    /// Rendering order hint.
    pub z_index: i32,
}

impl RectMarkSpec {
    /// Creates a transparent, unstroked rect.
    pub fn new(id: MarkId, rect: Rect) -> Self {
        Self {
            id,
            rect,
            fill: Brush::Solid(Color::TRANSPARENT),
            stroke: None,
            z_index: z_order::PLOT_BACKGROUND,
        }
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the outline.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Sets the z-index.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates the rect mark.
    pub fn mark(&self) -> Mark {
        let mut builder = Mark::builder(self.id)
            .rect()
            .z_index(self.z_index)
            .bounds(self.rect)
            .fill(self.fill.clone());
        if let Some(stroke) = &self.stroke {
            builder = builder
                .stroke(stroke.brush.clone())
                .stroke_width(stroke.stroke_width);
        }
        builder.build()
    }
}
