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

//! Error types for table transformations.

use thiserror::Error;

/// Core transformation error types.
///
/// Covers every failure mode of the normalize → derive → pivot pipeline.
/// Label mapping misses and zero-iteration averages are explicit errors
/// here rather than silent missing values, so callers decide whether to
/// drop, warn, or abort.
///
/// # Examples
///
/// ```
/// use benchplot_core::Error;
///
/// let err = Error::UnmappedCategory {
///     column: "Implementation".to_string(),
///     raw: "Enum.jni".to_string(),
/// };
///
/// assert_eq!(
///     err.to_string(),
///     "Unrecognized Implementation token: 'Enum.jni'"
/// );
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A raw categorical token did not map onto the known vocabulary.
    ///
    /// # Examples
    ///
    /// ```
    /// use benchplot_core::Error;
    ///
    /// let err = Error::UnmappedCategory {
    ///     column: "Algorithm".to_string(),
    ///     raw: "Enum.blowfish".to_string(),
    /// };
    /// assert!(err.to_string().contains("Algorithm"));
    /// ```
    #[error("Unrecognized {column} token: '{raw}'")]
    UnmappedCategory {
        /// Column the token came from ("Implementation" or "Algorithm").
        column: String,
        /// The raw token as it appeared in the source.
        raw: String,
    },

    /// A per-call average was requested for a row with zero iterations.
    ///
    /// The raw timing columns are sums over `iterations` repetitions, so
    /// a per-call average divides by `iterations`. Zero iterations would
    /// produce `inf`/`NaN`; it is reported as an error instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use benchplot_core::Error;
    ///
    /// let err = Error::DivideByIterations {
    ///     metric: "wall time average (ms)".to_string(),
    /// };
    /// assert!(err.to_string().contains("iterations is zero"));
    /// ```
    #[error("Cannot derive {metric}: iterations is zero")]
    DivideByIterations {
        /// Human-readable name of the metric being derived.
        metric: String,
    },

    /// A requested column is absent from the pivoted data.
    ///
    /// Raised when a fixed column ordering names a category with no
    /// contributing rows, or when a baseline column does not exist. The
    /// whole series must never be dropped silently.
    ///
    /// # Examples
    ///
    /// ```
    /// use benchplot_core::Error;
    ///
    /// let err = Error::UnknownColumn {
    ///     name: "Dart".to_string(),
    ///     available: "FFI, Platform Channel".to_string(),
    /// };
    /// assert!(err.to_string().contains("not present"));
    /// ```
    #[error("Column '{name}' not present in pivot (available: {available})")]
    UnknownColumn {
        /// The column that was requested.
        name: String,
        /// Comma-separated list of columns the data actually has.
        available: String,
    },

    /// A filter or grouping matched no rows.
    ///
    /// Recoverable at the report level: the chart for that slice is
    /// skipped with a notice and the run continues.
    ///
    /// # Examples
    ///
    /// ```
    /// use benchplot_core::Error;
    ///
    /// let err = Error::EmptyResultSet {
    ///     context: "rows for ChaCha20-Poly1305".to_string(),
    /// };
    /// assert_eq!(
    ///     err.to_string(),
    ///     "No rows matched: rows for ChaCha20-Poly1305"
    /// );
    /// ```
    #[error("No rows matched: {context}")]
    EmptyResultSet {
        /// Description of the slice that came up empty.
        context: String,
    },
}

/// Convenience type alias for `Result` with [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmapped_category_display() {
        let err = Error::UnmappedCategory {
            column: "Implementation".to_string(),
            raw: "Enum.jni".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unrecognized Implementation token: 'Enum.jni'"
        );
    }

    #[test]
    fn test_divide_by_iterations_display() {
        let err = Error::DivideByIterations {
            metric: "encrypt average (ms)".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Cannot derive encrypt average (ms): iterations is zero"
        );
    }

    #[test]
    fn test_unknown_column_display() {
        let err = Error::UnknownColumn {
            name: "Dart".to_string(),
            available: "FFI, Platform Channel".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Column 'Dart' not present in pivot (available: FFI, Platform Channel)"
        );
    }

    #[test]
    fn test_empty_result_set_display() {
        let err = Error::EmptyResultSet {
            context: "rows for AES-GCM 256".to_string(),
        };
        assert_eq!(err.to_string(), "No rows matched: rows for AES-GCM 256");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
