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

//! Error types for measurement file loading and writing.

use std::path::PathBuf;
use thiserror::Error;

/// CSV loading and writing error types.
///
/// # Examples
///
/// ```
/// use benchplot_csv::CsvError;
///
/// let err = CsvError::MissingColumn("Iterations".to_string());
/// assert_eq!(err.to_string(), "Missing required column: Iterations");
/// ```
#[derive(Debug, Error)]
pub enum CsvError {
    /// A configured input path does not exist.
    ///
    /// Single-source runs abort on this; multi-source runs skip the
    /// source and continue with the rest.
    ///
    /// # Examples
    ///
    /// ```
    /// use benchplot_csv::CsvError;
    /// use std::path::PathBuf;
    ///
    /// let err = CsvError::SourceNotFound {
    ///     path: PathBuf::from("missing.csv"),
    /// };
    /// assert!(err.to_string().contains("missing.csv"));
    /// ```
    #[error("Source file not found: {}", path.display())]
    SourceNotFound {
        /// The path that did not resolve.
        path: PathBuf,
    },

    /// A required column is absent from the header row.
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A field value could not be converted to the expected type.
    ///
    /// # Examples
    ///
    /// ```
    /// use benchplot_csv::CsvError;
    ///
    /// let err = CsvError::TypeMismatch {
    ///     column: "Iterations".to_string(),
    ///     expected: "integer".to_string(),
    ///     value: "abc".to_string(),
    ///     row: 3,
    /// };
    /// assert!(err.to_string().contains("expected integer"));
    /// ```
    #[error("Type mismatch in column '{column}' at row {row}: expected {expected}, got '{value}'")]
    TypeMismatch {
        /// Column name where the mismatch occurred.
        column: String,
        /// Expected type description.
        expected: String,
        /// Actual value that failed to convert.
        value: String,
        /// Row number where the mismatch occurred (1-based, header is row 1).
        row: usize,
    },

    /// A row failed normalization or derivation.
    ///
    /// Wraps the core error with the offending row number.
    #[error("Row {row}: {source}")]
    Row {
        /// Row number (1-based, header is row 1).
        row: usize,
        /// The underlying normalization error.
        #[source]
        source: benchplot_core::Error,
    },

    /// I/O error during reading or writing.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the underlying CSV library.
    #[error("CSV library error: {0}")]
    CsvLib(#[from] csv::Error),
}

/// Convenience type alias for `Result` with [`CsvError`].
pub type Result<T> = std::result::Result<T, CsvError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_not_found_display() {
        let err = CsvError::SourceNotFound {
            path: PathBuf::from("results/missing.csv"),
        };
        assert_eq!(
            err.to_string(),
            "Source file not found: results/missing.csv"
        );
    }

    #[test]
    fn test_missing_column_display() {
        let err = CsvError::MissingColumn("DataSize_B".to_string());
        assert_eq!(err.to_string(), "Missing required column: DataSize_B");
    }

    #[test]
    fn test_type_mismatch_display() {
        let err = CsvError::TypeMismatch {
            column: "WallTime_Sum_ms".to_string(),
            expected: "float".to_string(),
            value: "fast".to_string(),
            row: 7,
        };
        assert_eq!(
            err.to_string(),
            "Type mismatch in column 'WallTime_Sum_ms' at row 7: expected float, got 'fast'"
        );
    }

    #[test]
    fn test_row_display_carries_source() {
        let err = CsvError::Row {
            row: 4,
            source: benchplot_core::Error::UnmappedCategory {
                column: "Algorithm".to_string(),
                raw: "Enum.blowfish".to_string(),
            },
        };
        assert_eq!(
            err.to_string(),
            "Row 4: Unrecognized Algorithm token: 'Enum.blowfish'"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let csv_err = CsvError::from(io_err);
        assert!(csv_err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CsvError>();
    }
}
