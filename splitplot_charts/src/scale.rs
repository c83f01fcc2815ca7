// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Continuous scales.
//!
//! A scale maps data values into scene coordinates and proposes major and minor
//! tick positions for axes and grids.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// A scale specification (domain + options, no range yet).
#[derive(Clone, Copy, Debug)]
pub enum ScaleSpec {
    /// A linear scale.
    Linear(ScaleLinearSpec),
    /// A base-10 logarithmic scale.
    Log(ScaleLogSpec),
}

impl From<ScaleLinearSpec> for ScaleSpec {
    fn from(value: ScaleLinearSpec) -> Self {
        Self::Linear(value)
    }
}

impl From<ScaleLogSpec> for ScaleSpec {
    fn from(value: ScaleLogSpec) -> Self {
        Self::Log(value)
    }
}

impl ScaleSpec {
    /// Instantiates a concrete scale for a given output range.
    ///
    /// `tick_count` only matters for linear scales with a nice domain.
    pub fn instantiate(&self, range: (f64, f64), tick_count: usize) -> ScaleContinuous {
        match self {
            Self::Linear(s) => ScaleContinuous::Linear(s.instantiate_resolved(range, tick_count)),
            Self::Log(s) => ScaleContinuous::Log(s.instantiate(range)),
        }
    }
}

/// A continuous scale (linear or log).
#[derive(Clone, Copy, Debug)]
pub enum ScaleContinuous {
    /// Linear mapping.
    Linear(ScaleLinear),
    /// Logarithmic mapping.
    Log(ScaleLog),
}

impl ScaleContinuous {
    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        match self {
            Self::Linear(s) => s.map(x),
            Self::Log(s) => s.map(x),
        }
    }

    /// Returns major tick values.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        match self {
            Self::Linear(s) => s.ticks(count),
            Self::Log(s) => s.ticks(count),
        }
    }

    /// Returns minor tick values strictly between (and around) the major ticks.
    ///
    /// Linear scales split every major step into `subdivisions` parts; log scales
    /// always use `2..=9` times each power of ten.
    pub fn minor_ticks(&self, count: usize, subdivisions: usize) -> Vec<f64> {
        match self {
            Self::Linear(s) => s.minor_ticks(count, subdivisions),
            Self::Log(s) => s.minor_ticks(),
        }
    }

    /// Returns the minimum of the configured domain (as authored).
    pub fn domain_min(&self) -> f64 {
        match self {
            Self::Linear(s) => s.domain.0,
            Self::Log(s) => s.domain.0,
        }
    }

    /// Returns the maximum of the configured domain (as authored).
    pub fn domain_max(&self) -> f64 {
        match self {
            Self::Linear(s) => s.domain.1,
            Self::Log(s) => s.domain.1,
        }
    }

    /// Returns `true` if `v` lies within the domain (inclusive, either orientation).
    pub fn contains(&self, v: f64) -> bool {
        let (a, b) = (self.domain_min(), self.domain_max());
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let eps = 1e-9 * (hi - lo).abs().max(f64::MIN_POSITIVE);
        v >= lo - eps && v <= hi + eps
    }
}

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

/// Specification for a linear scale (domain + options, no range yet).
#[derive(Clone, Copy, Debug)]
pub struct ScaleLinearSpec {
    /// Domain in data units.
    pub domain: (f64, f64),
    /// Whether to "nice" the domain based on tick generation.
    pub nice: bool,
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Returns “nice-ish” tick values covering the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain.0, self.domain.1, count)
    }

    /// Returns minor ticks inside the domain that do not coincide with major ticks.
    pub fn minor_ticks(&self, count: usize, subdivisions: usize) -> Vec<f64> {
        let major = self.ticks(count);
        if subdivisions < 2 || major.len() < 2 {
            return Vec::new();
        }
        let step = (major[1] - major[0]) / subdivisions as f64;
        if !step.is_finite() || step <= 0.0 {
            return Vec::new();
        }
        let (lo, hi) = ordered(self.domain);
        let k0 = (lo / step - 1e-9).ceil();
        let k1 = (hi / step + 1e-9).floor();
        let n = subdivisions as f64;
        let mut out = Vec::new();
        let mut k = k0;
        while k <= k1 && out.len() < 10_000 {
            if (k / n).round() * n != k {
                out.push(k * step);
            }
            k += 1.0;
        }
        out
    }
}

impl ScaleLinearSpec {
    /// Creates a new linear scale spec.
    pub fn new(domain: (f64, f64)) -> Self {
        Self {
            domain,
            nice: false,
        }
    }

    /// Enables or disables nice-domain behavior.
    pub fn with_nice(mut self, nice: bool) -> Self {
        self.nice = nice;
        self
    }

    /// Returns the effective domain after applying `nice` (if enabled).
    pub fn resolved_domain(&self, tick_count: usize) -> (f64, f64) {
        if !self.nice {
            return self.domain;
        }
        let ticks = nice_ticks(self.domain.0, self.domain.1, tick_count);
        match (ticks.first(), ticks.last()) {
            (Some(&a), Some(&b)) if ticks.len() >= 2 => (a, b),
            _ => self.domain,
        }
    }

    /// Instantiates a concrete scale for a given output range.
    pub fn instantiate(&self, range: (f64, f64)) -> ScaleLinear {
        ScaleLinear::new(self.domain, range)
    }

    /// Instantiates a concrete scale using the `resolved_domain` (respecting `nice`).
    pub fn instantiate_resolved(&self, range: (f64, f64), tick_count: usize) -> ScaleLinear {
        ScaleLinear::new(self.resolved_domain(tick_count), range)
    }
}

fn ordered((a, b): (f64, f64)) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Nice tick values (steps of 1, 2 or 5 times a power of ten) covering `[min, max]`.
pub(crate) fn nice_ticks(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    if min == max {
        return alloc::vec![min];
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    let span = max - min;
    let step0 = span / count.max(1) as f64;
    let step = nice_step(step0);
    if step == 0.0 {
        return alloc::vec![min, max];
    }

    let start = (min / step).floor() * step;
    let stop = (max / step).ceil() * step;

    let n_f = ((stop - start) / step).round();
    let n = if n_f.is_finite() && n_f >= 0.0 {
        let n_f = n_f.min(10_000.0);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "guarded by finite/non-negative checks and capped at 10k"
        )]
        {
            n_f as u64
        }
    } else {
        0
    };
    (0..=n).map(|i| start + step * i as f64).collect()
}

fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let base = 10_f64.powf(power);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}

/// A base-10 logarithmic mapping.
#[derive(Clone, Copy, Debug)]
pub struct ScaleLog {
    domain: (f64, f64),
    range: (f64, f64),
}

/// Specification for a log scale.
#[derive(Clone, Copy, Debug)]
pub struct ScaleLogSpec {
    /// Domain in data units (must be positive).
    pub domain: (f64, f64),
}

impl ScaleLog {
    /// Creates a new log scale.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    ///
    /// Non-positive values (and non-positive domains) map to the range start.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if x <= 0.0 || d0 <= 0.0 || d1 <= 0.0 {
            return r0;
        }
        let ld0 = d0.log10();
        let denom = d1.log10() - ld0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x.log10() - ld0) / denom;
        r0 + t * (r1 - r0)
    }

    fn exponent_range(&self) -> Option<(i32, i32)> {
        let (min, max) = ordered(self.domain);
        if min <= 0.0 || !min.is_finite() || !max.is_finite() {
            return None;
        }
        let clamp = |e: f64| {
            let e = e.clamp(-300.0, 300.0);
            #[allow(clippy::cast_possible_truncation, reason = "clamped to +/-300")]
            {
                e as i32
            }
        };
        // Nudge so exact powers of ten survive `log10` rounding.
        Some((
            clamp((min.log10() + 1e-12).floor()),
            clamp((max.log10() - 1e-12).ceil()),
        ))
    }

    /// Returns one tick per power of ten overlapping the domain.
    ///
    /// `count` caps the number of ticks; `0` means no cap.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let Some((min_e, max_e)) = self.exponent_range() else {
            return Vec::new();
        };
        let mut out = Vec::new();
        for e in min_e..=max_e {
            out.push(10_f64.powi(e));
            if count != 0 && out.len() >= count {
                break;
            }
        }
        out
    }

    /// Returns `k * 10^e` for `k` in `2..=9` within the domain.
    pub fn minor_ticks(&self) -> Vec<f64> {
        let Some((min_e, max_e)) = self.exponent_range() else {
            return Vec::new();
        };
        let (lo, hi) = ordered(self.domain);
        let mut out = Vec::new();
        for e in (min_e - 1)..=max_e {
            let base = 10_f64.powi(e);
            for k in 2..=9 {
                let v = f64::from(k) * base;
                if v >= lo && v <= hi {
                    out.push(v);
                }
            }
        }
        out
    }
}

impl ScaleLogSpec {
    /// Creates a new log scale spec.
    pub fn new(domain: (f64, f64)) -> Self {
        Self { domain }
    }

    /// Instantiates a concrete scale for a given output range.
    pub fn instantiate(&self, range: (f64, f64)) -> ScaleLog {
        ScaleLog::new(self.domain, range)
    }
}

/// Infers a finite `(min, max)` domain from values, ignoring NaN and infinities.
pub fn infer_domain_f64(values: &[f64]) -> Option<(f64, f64)> {
    let mut it = values.iter().copied().filter(|v| v.is_finite());
    let first = it.next()?;
    Some(it.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn linear_scale_maps_endpoints_and_inverts_y() {
        let s = ScaleLinear::new((-1.0, 1.0), (300.0, 100.0));
        assert!((s.map(-1.0) - 300.0).abs() < 1e-9);
        assert!((s.map(1.0) - 100.0).abs() < 1e-9);
        assert!((s.map(0.0) - 200.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_domain_maps_to_range_start() {
        let s = ScaleLinear::new((2.0, 2.0), (10.0, 20.0));
        assert_eq!(s.map(5.0), 10.0);
    }

    #[test]
    fn log_scale_maps_endpoints_to_range() {
        let s = ScaleLog::new((1.0, 100.0), (0.0, 10.0));
        assert!((s.map(1.0) - 0.0).abs() < 1e-9);
        assert!((s.map(10.0) - 5.0).abs() < 1e-9);
        assert!((s.map(100.0) - 10.0).abs() < 1e-9);
        assert_eq!(s.map(-3.0), 0.0);
    }

    #[test]
    fn linear_ticks_for_ten_thousand() {
        let s = ScaleLinear::new((0.0, 10_000.0), (0.0, 1.0));
        assert_eq!(s.ticks(5), [0.0, 2000.0, 4000.0, 6000.0, 8000.0, 10_000.0]);
    }

    #[test]
    fn linear_minor_ticks_skip_majors() {
        let s = ScaleLinear::new((0.0, 10_000.0), (0.0, 1.0));
        let minor = s.minor_ticks(5, 10);
        // 51 positions at 200 spacing, minus 6 majors.
        assert_eq!(minor.len(), 45);
        assert!((minor[0] - 200.0).abs() < 1e-9);
        assert!(minor.iter().all(|v| (v / 2000.0 - (v / 2000.0).round()).abs() > 1e-9));
    }

    #[test]
    fn log_ticks_cover_each_decade() {
        let s = ScaleLog::new((0.1, 10_000.0), (0.0, 1.0));
        let ticks = s.ticks(0);
        assert_eq!(ticks.len(), 6);
        assert!((ticks[0] - 0.1).abs() < 1e-12);
        assert!((ticks[5] - 10_000.0).abs() < 1e-9);
        let minor = s.minor_ticks();
        // Eight minors per decade across five decades.
        assert_eq!(minor.len(), 40);
        assert!((minor[0] - 0.2).abs() < 1e-12);
    }

    #[test]
    fn nice_domain_expands_to_ticks() {
        let spec = ScaleLinearSpec::new((0.3, 9.2)).with_nice(true);
        assert_eq!(spec.resolved_domain(10), (0.0, 10.0));
    }

    #[test]
    fn infer_domain_ignores_nan() {
        assert_eq!(infer_domain_f64(&[3.0, f64::NAN, -1.0, 2.0]), Some((-1.0, 3.0)));
        assert_eq!(infer_domain_f64(&[f64::NAN]), None);
    }
}
