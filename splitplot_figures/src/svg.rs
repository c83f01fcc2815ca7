// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG serialization of a [`Scene`].
//!
//! Clip outlines are deduplicated into `<clipPath>` definitions, and runs of
//! consecutive marks sharing a clip stack are wrapped in nested
//! `<g clip-path=…>` groups. The output depends only on the scene contents.

use std::collections::HashMap;
use std::fmt::Write as _;

use peniko::{Brush, Color};
use splitplot_charts::Size;
use splitplot_core::{Mark, MarkPayload, Scene, TextAnchor, TextBaseline};

/// Renders `scene` as a standalone SVG document of the given size.
pub(crate) fn to_svg_string(scene: &Scene, size: Size, background: Color) -> String {
    let marks = scene.paint_order();

    // Clip outlines in first-use order, keyed by their path data.
    let mut clip_ids: HashMap<String, usize> = HashMap::new();
    let mut clip_defs: Vec<String> = Vec::new();
    let stacks: Vec<Vec<usize>> = marks
        .iter()
        .map(|mark| {
            mark.clips
                .iter()
                .map(|clip| {
                    let d = clip.path().to_svg();
                    *clip_ids.entry(d.clone()).or_insert_with(|| {
                        clip_defs.push(d);
                        clip_defs.len() - 1
                    })
                })
                .collect()
        })
        .collect();

    let mut out = String::new();
    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
    let _ = writeln!(
        out,
        r#"viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
        w = num(size.width),
        h = num(size.height),
    );
    if !clip_defs.is_empty() {
        out.push_str("<defs>\n");
        for (i, d) in clip_defs.iter().enumerate() {
            let _ = writeln!(
                out,
                r#"<clipPath id="clip{i}" clipPathUnits="userSpaceOnUse"><path d="{d}"/></clipPath>"#
            );
        }
        out.push_str("</defs>\n");
    }
    out.push_str(r#"<rect x="0" y="0" width="100%" height="100%""#);
    write_paint_attr(&mut out, "fill", &Brush::Solid(background));
    out.push_str("/>\n");

    let mut open: &[usize] = &[];
    for (mark, stack) in marks.iter().zip(&stacks) {
        if open != stack.as_slice() {
            for _ in open {
                out.push_str("</g>\n");
            }
            for clip in stack {
                let _ = writeln!(out, r#"<g clip-path="url(#clip{clip})">"#);
            }
            open = stack.as_slice();
        }
        write_mark(&mut out, mark);
    }
    for _ in open {
        out.push_str("</g>\n");
    }

    out.push_str("</svg>\n");
    out
}

fn write_mark(out: &mut String, mark: &Mark) {
    match &mark.payload {
        MarkPayload::Rect(r) => {
            let _ = write!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                num(r.rect.x0),
                num(r.rect.y0),
                num(r.rect.width()),
                num(r.rect.height()),
            );
            write_paint_attr(out, "fill", &r.fill);
            write_stroke_attrs(out, &r.stroke, r.stroke_width);
            out.push_str("/>\n");
        }
        MarkPayload::Text(t) => {
            let _ = write!(
                out,
                r#"<text x="{}" y="{}" font-size="{}" font-family="{}""#,
                num(t.pos.x),
                num(t.pos.y),
                num(t.font_size),
                t.font_family.as_css_family(),
            );
            out.push_str(match t.baseline {
                TextBaseline::Middle => r#" dominant-baseline="middle""#,
                TextBaseline::Alphabetic => r#" dominant-baseline="alphabetic""#,
                TextBaseline::Hanging => r#" dominant-baseline="hanging""#,
            });
            if t.angle != 0.0 {
                let _ = write!(
                    out,
                    r#" transform="rotate({} {} {})""#,
                    num(t.angle),
                    num(t.pos.x),
                    num(t.pos.y)
                );
            }
            out.push_str(match t.anchor {
                TextAnchor::Start => r#" text-anchor="start""#,
                TextAnchor::Middle => r#" text-anchor="middle""#,
                TextAnchor::End => r#" text-anchor="end""#,
            });
            write_paint_attr(out, "fill", &t.fill);
            out.push('>');
            out.push_str(&escape_xml(&t.text));
            out.push_str("</text>\n");
        }
        MarkPayload::Path(p) => {
            let _ = write!(out, r#"<path d="{}""#, p.path.to_svg());
            write_paint_attr(out, "fill", &p.fill);
            write_stroke_attrs(out, &p.stroke, p.stroke_width);
            out.push_str("/>\n");
        }
    }
}

/// Formats a coordinate with at most three decimals.
fn num(v: f64) -> String {
    let r = (v * 1000.0).round() / 1000.0;
    // Avoids printing `-0`.
    if r == 0.0 { "0".to_string() } else { format!("{r}") }
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            if rgba.a == 0 {
                return ("none".to_string(), None);
            }
            let paint = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (paint, opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    let _ = write!(out, r#" {name}="{value}""#);
    if let Some(o) = opacity {
        let _ = write!(out, r#" {name}-opacity="{}""#, num(o));
    }
}

fn write_stroke_attrs(out: &mut String, brush: &Brush, width: f64) {
    if width > 0.0 {
        write_paint_attr(out, "stroke", brush);
        let _ = write!(out, r#" stroke-width="{}""#, num(width));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Rect;
    use peniko::color::palette::css;
    use splitplot_core::{ClipPath, MarkId};

    fn rect(id: u64, z: i32, clip: Option<ClipPath>) -> Mark {
        let mut mark = Mark::builder(MarkId::from_raw(id))
            .rect()
            .z_index(z)
            .bounds(Rect::new(0.0, 0.0, 10.0, 10.0))
            .fill(css::RED)
            .build();
        if let Some(clip) = clip {
            mark.push_clip(clip);
        }
        mark
    }

    #[test]
    fn shared_clips_are_defined_once_and_grouped() {
        let a = ClipPath::rect(Rect::new(0.0, 0.0, 5.0, 5.0));
        let b = ClipPath::rect(Rect::new(5.0, 5.0, 10.0, 10.0));
        let mut scene = Scene::new();
        scene.extend([
            rect(1, 0, Some(a.clone())),
            rect(2, 0, Some(a.clone())),
            rect(3, 0, Some(b)),
            rect(4, 1, None),
            rect(5, 2, Some(a)),
        ]);
        let svg = to_svg_string(&scene, Size::new(10.0, 10.0), css::WHITE);
        assert_eq!(svg.matches("<clipPath ").count(), 2);
        // Runs: [a, a], [b], [], [a].
        assert_eq!(svg.matches(r##"<g clip-path="url(#clip0)">"##).count(), 2);
        assert_eq!(svg.matches(r##"<g clip-path="url(#clip1)">"##).count(), 1);
        assert_eq!(svg.matches("<g ").count(), svg.matches("</g>").count());
        assert!(svg.contains(r##"fill="#ffffff""##));
    }

    #[test]
    fn text_is_escaped_and_styled() {
        let mut scene = Scene::new();
        scene.insert(
            Mark::builder(MarkId::from_raw(1))
                .text()
                .x(1.0)
                .y(2.0)
                .label("a < b")
                .font_family(splitplot_core::FontFamily::Monospace)
                .fill(css::BLUE)
                .build(),
        );
        let svg = to_svg_string(&scene, Size::new(10.0, 10.0), css::WHITE);
        assert!(svg.contains("a &lt; b"));
        assert!(svg.contains(r#"font-family="monospace""#));
        assert!(svg.contains(r##"fill="#0000ff""##));
    }

    #[test]
    fn numbers_are_compact() {
        assert_eq!(num(-0.0001), "0");
        assert_eq!(num(1.23456), "1.235");
        assert_eq!(num(400.0), "400");
    }
}
