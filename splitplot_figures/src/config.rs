// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::PathBuf;

use splitplot_charts::Size;

/// Points per inch.
const POINTS_PER_INCH: f64 = 72.0;

/// Figure size, resolution, data seed and output path.
#[derive(Clone, Debug, PartialEq)]
pub struct FigureConfig {
    /// Width in inches.
    pub width_in: f64,
    /// Height in inches.
    pub height_in: f64,
    /// Scene units per inch.
    pub dpi: f64,
    /// Seed for synthetic data.
    pub seed: u64,
    /// Output file.
    pub output: PathBuf,
}

impl FigureConfig {
    /// The chart catalogue: 8×8 in at 100 dpi.
    pub fn catalogue() -> Self {
        Self {
            width_in: 8.0,
            height_in: 8.0,
            dpi: 100.0,
            seed: 123,
            output: PathBuf::from("catalogue.svg"),
        }
    }

    /// The axis-scale figure: 8×8 in at 100 dpi.
    pub fn scales() -> Self {
        Self {
            output: PathBuf::from("scales.svg"),
            ..Self::catalogue()
        }
    }

    /// Sets the output path.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Sets the data seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Figure size in scene units.
    pub fn size(&self) -> Size {
        Size::new(self.width_in * self.dpi, self.height_in * self.dpi)
    }

    /// Converts a length in points to scene units.
    pub fn pt(&self, points: f64) -> f64 {
        points * self.dpi / POINTS_PER_INCH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_figures() {
        let c = FigureConfig::catalogue();
        assert_eq!(c.size(), Size::new(800.0, 800.0));
        assert_eq!(c.seed, 123);
        assert_eq!(FigureConfig::scales().output, PathBuf::from("scales.svg"));
        assert!((c.pt(72.0) - 100.0).abs() < 1e-12);
    }
}
