// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::PathBuf;

use thiserror::Error;

/// Failures while writing a figure.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The output file could not be written.
    #[error("failed to write {}", .path.display())]
    Io {
        /// Output path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The output path does not name an SVG file.
    #[error("unsupported output format for {} (expected .svg)", .0.display())]
    UnsupportedFormat(PathBuf),
}
