// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::Path;

use peniko::color::palette::css;
use splitplot_charts::Size;
use splitplot_core::{Mark, Scene};

use crate::{ExportError, FigureConfig, svg};

/// A figure under construction: its configuration plus the marks drawn so far.
#[derive(Debug)]
pub struct Figure {
    config: FigureConfig,
    scene: Scene,
}

impl Figure {
    /// Creates an empty figure.
    pub fn new(config: FigureConfig) -> Self {
        Self {
            config,
            scene: Scene::new(),
        }
    }

    /// The figure configuration.
    pub fn config(&self) -> &FigureConfig {
        &self.config
    }

    /// Figure size in scene units.
    pub fn size(&self) -> Size {
        self.config.size()
    }

    /// Adds marks in order.
    pub fn add(&mut self, marks: impl IntoIterator<Item = Mark>) {
        self.scene.extend(marks);
    }

    /// The marks drawn so far.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Serializes the figure on a white background.
    pub fn to_svg_string(&self) -> String {
        svg::to_svg_string(&self.scene, self.size(), css::WHITE)
    }

    /// Writes the figure to its configured output path and returns that path.
    pub fn save(&self) -> Result<&Path, ExportError> {
        let path = self.config.output.as_path();
        let is_svg = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
        if !is_svg {
            return Err(ExportError::UnsupportedFormat(path.to_path_buf()));
        }
        std::fs::write(path, self.to_svg_string()).map_err(|source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_svg_outputs_are_rejected() {
        let figure = Figure::new(FigureConfig::scales().with_output("scales.png"));
        assert!(matches!(
            figure.save(),
            Err(ExportError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn io_failures_carry_the_path() {
        let dir = std::env::temp_dir().join("splitplot-missing-dir").join("x");
        let figure = Figure::new(FigureConfig::scales().with_output(dir.join("out.svg")));
        match figure.save() {
            Err(ExportError::Io { path, .. }) => assert_eq!(path, dir.join("out.svg")),
            other => panic!("expected an I/O error, got {other:?}"),
        }
    }

    #[test]
    fn empty_figure_has_background_only() {
        let svg = Figure::new(FigureConfig::scales()).to_svg_string();
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains(r#"width="800""#));
        assert!(!svg.contains("<defs>"));
    }
}
