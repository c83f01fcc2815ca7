// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick label formatting.

extern crate alloc;

use alloc::format;
use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Formats `v` with just enough decimals to distinguish ticks spaced by `step`.
pub fn format_tick_with_step(v: f64, step: f64) -> String {
    if !v.is_finite() {
        return format!("{v}");
    }
    let decimals = if step.is_finite() && step > 0.0 && step < 1.0 {
        let d = (-step.log10()).ceil().clamp(0.0, 12.0);
        #[allow(clippy::cast_possible_truncation, reason = "clamped to 0..=12")]
        {
            d as usize
        }
    } else {
        0
    };
    // Avoid printing "-0".
    let v = if v.abs() < 0.5 * 10_f64.powi(-12) { 0.0 } else { v };
    format!("{v:.decimals$}")
}

/// Formats `v` as a mantissa times a power of ten with superscript exponents.
///
/// `0` stays `"0"`, `1000` becomes `"10³"`, `2000` becomes `"2.10³"` and `0.1`
/// becomes `"10⁻¹"`.
pub fn format_power_of_ten(v: f64, _step: f64) -> String {
    if v == 0.0 || !v.is_finite() {
        return format!("{}", if v == 0.0 { 0.0 } else { v });
    }
    let sign = if v < 0.0 { "-" } else { "" };
    let a = v.abs();
    let mut e = a.log10().floor();
    let mut m = a / 10_f64.powf(e);
    // `log10` may land just below an integer for exact powers of ten.
    if (m - 10.0).abs() < 1e-9 {
        m = 1.0;
        e += 1.0;
    }
    let m_rounded = (m * 1e6).round() / 1e6;
    #[allow(clippy::cast_possible_truncation, reason = "log10 of a finite f64 fits an i32")]
    let exp = superscript(e as i32);
    if (m_rounded - 1.0).abs() < 1e-9 {
        format!("{sign}10{exp}")
    } else {
        format!("{sign}{m_rounded}.10{exp}")
    }
}

fn superscript(n: i32) -> String {
    const DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];
    let mut out = String::new();
    if n < 0 {
        out.push('⁻');
    }
    for c in format!("{}", n.unsigned_abs()).chars() {
        if let Some(d) = c.to_digit(10) {
            out.push(DIGITS[d as usize]);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn power_of_ten_labels() {
        let labels: alloc::vec::Vec<String> = [0.0, 2000.0, 4000.0, 6000.0, 8000.0, 10_000.0]
            .iter()
            .map(|v| format_power_of_ten(*v, 2000.0))
            .collect();
        assert_eq!(labels, ["0", "2.10³", "4.10³", "6.10³", "8.10³", "10⁴"]);
    }

    #[test]
    fn power_of_ten_negative_exponents() {
        assert_eq!(format_power_of_ten(0.1, 0.0), "10⁻¹");
        assert_eq!(format_power_of_ten(1.0, 0.0), "10⁰");
        assert_eq!(format_power_of_ten(-300.0, 0.0), "-3.10²");
    }

    #[test]
    fn step_decimals() {
        assert_eq!(format_tick_with_step(0.5, 0.5), "0.5");
        assert_eq!(format_tick_with_step(2.0, 1.0), "2");
        assert_eq!(format_tick_with_step(-1e-15, 0.25), "0.0");
    }
}
