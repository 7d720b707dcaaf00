// Dweve Benchplot - Cryptographic Benchmark Reporting
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Structured error types for the benchplot CLI.
//!
//! All command implementations return `Result<T, CliError>` for
//! consistent error reporting at the binary boundary.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for CLI operations.
///
/// # Examples
///
/// ```
/// use benchplot_cli::error::CliError;
///
/// let err = CliError::invalid_source("Pixel 8 Pro");
/// assert!(err.to_string().contains("LABEL=PATH"));
/// ```
#[derive(Debug, Error)]
pub enum CliError {
    /// I/O operation failed (directory creation, file write).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The path that caused the error.
        path: PathBuf,
        /// The error message.
        message: String,
    },

    /// A `-s/--source` argument did not have the `LABEL=PATH` shape.
    #[error("Invalid source spec '{0}': expected LABEL=PATH")]
    InvalidSource(String),

    /// Every configured source in a multi-source run was missing.
    #[error("None of the configured sources could be loaded")]
    NoSources,

    /// Invalid input provided by the user.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Measurement file loading or summary writing failed.
    #[error(transparent)]
    Csv(#[from] benchplot_csv::CsvError),

    /// Chart rendering failed.
    #[error(transparent)]
    Chart(#[from] benchplot_chart::ChartError),

    /// Table transformation failed.
    #[error(transparent)]
    Core(#[from] benchplot_core::Error),
}

impl CliError {
    /// Create an I/O error with path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create an invalid source-spec error.
    pub fn invalid_source(spec: impl Into<String>) -> Self {
        Self::InvalidSource(spec.into())
    }

    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = CliError::io_error(
            "charts",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("charts"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_invalid_source_display() {
        let err = CliError::invalid_source("oops");
        assert_eq!(
            err.to_string(),
            "Invalid source spec 'oops': expected LABEL=PATH"
        );
    }

    #[test]
    fn test_csv_error_is_transparent() {
        let err: CliError = benchplot_csv::CsvError::MissingColumn("Iterations".to_string()).into();
        assert_eq!(err.to_string(), "Missing required column: Iterations");
    }
}
