// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Writes the catalogue figure to `catalogue.svg`.

use splitplot_figures::{ExportError, FigureConfig, catalogue};

fn main() -> Result<(), ExportError> {
    let figure = catalogue(&FigureConfig::catalogue());
    let path = figure.save()?;
    println!("wrote {}", path.display());
    Ok(())
}
