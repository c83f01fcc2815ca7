// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Colormaps and value normalization.
//!
//! Continuous maps are piecewise-linear in sRGB between fixed stops. Stops for
//! `viridis` and `magma` are sampled at ten evenly spaced positions.

use peniko::Color;

/// A continuous colormap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Colormap {
    /// Black to white.
    Gray,
    /// Black through red and yellow to white.
    Hot,
    /// Perceptually uniform purple-blue-green-yellow.
    Viridis,
    /// Perceptually uniform black-purple-orange-cream.
    Magma,
}

type Stop = (f64, [u8; 3]);

const GRAY: &[Stop] = &[(0.0, [0, 0, 0]), (1.0, [255, 255, 255])];

const HOT: &[Stop] = &[
    (0.0, [11, 0, 0]),
    (0.365079, [255, 0, 0]),
    (0.746032, [255, 255, 0]),
    (1.0, [255, 255, 255]),
];

const VIRIDIS: &[Stop] = &[
    (0.0 / 9.0, [0x44, 0x01, 0x54]),
    (1.0 / 9.0, [0x48, 0x28, 0x78]),
    (2.0 / 9.0, [0x3e, 0x49, 0x89]),
    (3.0 / 9.0, [0x31, 0x68, 0x8e]),
    (4.0 / 9.0, [0x26, 0x82, 0x8e]),
    (5.0 / 9.0, [0x1f, 0x9e, 0x89]),
    (6.0 / 9.0, [0x35, 0xb7, 0x79]),
    (7.0 / 9.0, [0x6e, 0xce, 0x58]),
    (8.0 / 9.0, [0xb5, 0xde, 0x2b]),
    (9.0 / 9.0, [0xfd, 0xe7, 0x25]),
];

const MAGMA: &[Stop] = &[
    (0.0 / 9.0, [0x00, 0x00, 0x04]),
    (1.0 / 9.0, [0x18, 0x0f, 0x3d]),
    (2.0 / 9.0, [0x44, 0x0f, 0x76]),
    (3.0 / 9.0, [0x72, 0x1f, 0x81]),
    (4.0 / 9.0, [0x9e, 0x2f, 0x7f]),
    (5.0 / 9.0, [0xcd, 0x40, 0x71]),
    (6.0 / 9.0, [0xf1, 0x60, 0x5d]),
    (7.0 / 9.0, [0xfd, 0x96, 0x68]),
    (8.0 / 9.0, [0xfe, 0xca, 0x8d]),
    (9.0 / 9.0, [0xfc, 0xfd, 0xbf]),
];

const TAB20C: [[u8; 3]; 20] = [
    [0x31, 0x82, 0xbd],
    [0x6b, 0xae, 0xd6],
    [0x9e, 0xca, 0xe1],
    [0xc6, 0xdb, 0xef],
    [0xe6, 0x55, 0x0d],
    [0xfd, 0x8d, 0x3c],
    [0xfd, 0xae, 0x6b],
    [0xfd, 0xd0, 0xa2],
    [0x31, 0xa3, 0x54],
    [0x74, 0xc4, 0x76],
    [0xa1, 0xd9, 0x9b],
    [0xc7, 0xe9, 0xc0],
    [0x75, 0x6b, 0xb1],
    [0x9e, 0x9a, 0xc8],
    [0xbc, 0xbd, 0xdc],
    [0xda, 0xda, 0xeb],
    [0x63, 0x63, 0x63],
    [0x96, 0x96, 0x96],
    [0xbd, 0xbd, 0xbd],
    [0xd9, 0xd9, 0xd9],
];

impl Colormap {
    fn stops(self) -> &'static [Stop] {
        match self {
            Self::Gray => GRAY,
            Self::Hot => HOT,
            Self::Viridis => VIRIDIS,
            Self::Magma => MAGMA,
        }
    }

    /// Returns the colour at `t`, clamped to `[0, 1]`.
    ///
    /// NaN maps to the low end.
    pub fn map(self, t: f64) -> Color {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let stops = self.stops();
        let mut lo = stops[0];
        for &hi in &stops[1..] {
            if t <= hi.0 {
                let span = hi.0 - lo.0;
                let f = if span > 0.0 { (t - lo.0) / span } else { 0.0 };
                return lerp_rgb(lo.1, hi.1, f);
            }
            lo = hi;
        }
        lerp_rgb(lo.1, lo.1, 0.0)
    }
}

/// A shade of gray; `0.0` is black and `1.0` white.
pub fn gray(level: f64) -> Color {
    Colormap::Gray.map(level)
}

/// The qualitative `tab20c` palette, indexed modulo 20.
pub fn tab20c(index: usize) -> Color {
    let [r, g, b] = TAB20C[index % TAB20C.len()];
    Color::from_rgb8(r, g, b)
}

fn lerp_rgb(a: [u8; 3], b: [u8; 3], f: f64) -> Color {
    let ch = |i: usize| {
        let v = f64::from(a[i]) + (f64::from(b[i]) - f64::from(a[i])) * f;
        #[allow(clippy::cast_possible_truncation, reason = "channel stays within 0..=255")]
        {
            (v / 255.0) as f32
        }
    };
    Color::new([ch(0), ch(1), ch(2), 1.0])
}

/// Linear normalization of data values into `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Normalize {
    /// Value mapped to `0`.
    pub vmin: f64,
    /// Value mapped to `1`.
    pub vmax: f64,
}

impl Normalize {
    /// Creates a normalization over `[vmin, vmax]`.
    pub fn new(vmin: f64, vmax: f64) -> Self {
        Self { vmin, vmax }
    }

    /// Normalization spanning the finite values; `None` if there are none.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        crate::scale::infer_domain_f64(values).map(|(lo, hi)| Self::new(lo, hi))
    }

    /// Maps `v` into `[0, 1]`, clamping outside values.
    ///
    /// A degenerate range maps everything to `0`.
    pub fn apply(&self, v: f64) -> f64 {
        let span = self.vmax - self.vmin;
        if span == 0.0 || !span.is_finite() {
            return 0.0;
        }
        ((v - self.vmin) / span).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn rgb(c: Color) -> (u8, u8, u8) {
        let c = c.to_rgba8();
        (c.r, c.g, c.b)
    }

    #[test]
    fn endpoints_match_stops() {
        assert_eq!(rgb(Colormap::Gray.map(0.0)), (0, 0, 0));
        assert_eq!(rgb(Colormap::Gray.map(1.0)), (255, 255, 255));
        assert_eq!(rgb(Colormap::Viridis.map(0.0)), (0x44, 0x01, 0x54));
        assert_eq!(rgb(Colormap::Viridis.map(1.0)), (0xfd, 0xe7, 0x25));
        assert_eq!(rgb(Colormap::Magma.map(1.0)), (0xfc, 0xfd, 0xbf));
        assert_eq!(rgb(Colormap::Hot.map(0.0)), (11, 0, 0));
        assert_eq!(rgb(Colormap::Hot.map(0.746032)), (255, 255, 0));
    }

    #[test]
    fn out_of_range_values_clamp() {
        assert_eq!(rgb(Colormap::Hot.map(-3.0)), rgb(Colormap::Hot.map(0.0)));
        assert_eq!(rgb(Colormap::Hot.map(7.0)), rgb(Colormap::Hot.map(1.0)));
        assert_eq!(rgb(Colormap::Magma.map(f64::NAN)), rgb(Colormap::Magma.map(0.0)));
    }

    #[test]
    fn gray_midpoint_and_tab20c_wraps() {
        let (r, g, b) = rgb(gray(0.5));
        assert!((i32::from(r) - 128).abs() <= 1 && r == g && g == b);
        assert_eq!(rgb(tab20c(0)), rgb(tab20c(20)));
        assert_eq!(rgb(tab20c(5)), (0xfd, 0x8d, 0x3c));
    }

    #[test]
    fn normalize_clamps_and_handles_degenerate_ranges() {
        let n = Normalize::new(-1.5, 1.0);
        assert_eq!(n.apply(-1.5), 0.0);
        assert_eq!(n.apply(1.0), 1.0);
        assert_eq!(n.apply(5.0), 1.0);
        assert!((n.apply(-0.25) - 0.5).abs() < 1e-12);
        assert_eq!(Normalize::new(2.0, 2.0).apply(3.0), 0.0);
        let from = Normalize::from_values(&[3.0, f64::NAN, -1.0]).expect("finite values");
        assert_eq!((from.vmin, from.vmax), (-1.0, 3.0));
    }
}
