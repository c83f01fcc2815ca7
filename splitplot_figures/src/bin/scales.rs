// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Writes the scales figure to `scales.svg`.

use splitplot_figures::{ExportError, FigureConfig, scales};

fn main() -> Result<(), ExportError> {
    let figure = scales(&FigureConfig::scales());
    let path = figure.save()?;
    println!("wrote {}", path.display());
    Ok(())
}
