// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Figures built on `splitplot_charts`, exported as SVG.
//!
//! Two figures are provided:
//!
//! - [`catalogue`]: a 3×3 grid of chart types, each panel split along its
//!   diagonal into a neutral and a coloured rendering of the same chart;
//! - [`scales`]: the same circle under every combination of linear and
//!   logarithmic axes.
//!
//! Both are pure functions of a [`FigureConfig`]; synthetic data comes from a
//! seeded [`Rng`], so the output is byte-for-byte reproducible.
//!
//! ```no_run
//! use splitplot_figures::{FigureConfig, catalogue};
//!
//! let figure = catalogue(&FigureConfig::catalogue());
//! let path = figure.save()?;
//! println!("wrote {}", path.display());
//! # Ok::<(), splitplot_figures::ExportError>(())
//! ```

mod catalogue;
mod config;
mod error;
mod figure;
mod rng;
mod scales;
mod svg;

pub use catalogue::catalogue;
pub use config::FigureConfig;
pub use error::ExportError;
pub use figure::Figure;
pub use rng::Rng;
pub use scales::scales;

/// `n` evenly spaced samples from `start` to `end`, both included.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_includes_both_ends() {
        assert_eq!(linspace(-1.0, 1.0, 5), vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
        assert_eq!(linspace(2.0, 3.0, 1), vec![2.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }
}
