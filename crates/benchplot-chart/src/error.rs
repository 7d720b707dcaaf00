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

//! Error types for chart rendering.

use thiserror::Error;

/// Chart rendering error types.
///
/// # Examples
///
/// ```
/// use benchplot_chart::ChartError;
///
/// let err = ChartError::EmptyPivot {
///     context: "RAM usage for AES-GCM 256".to_string(),
/// };
/// assert!(err.to_string().contains("Nothing to draw"));
/// ```
#[derive(Debug, Error)]
pub enum ChartError {
    /// The backend failed while drawing or writing the image.
    ///
    /// Wraps the plotters error as text; the drawing error types are
    /// generic over the backend and carry no recoverable detail.
    #[error("Drawing error: {0}")]
    Draw(String),

    /// The pivot holds no drawable values.
    #[error("Nothing to draw: {context}")]
    EmptyPivot {
        /// Description of the chart that had no data.
        context: String,
    },

    /// I/O error while preparing the output location.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for `Result` with [`ChartError`].
pub type Result<T> = std::result::Result<T, ChartError>;

/// Map any backend drawing error into [`ChartError::Draw`].
pub(crate) fn draw_err(err: impl std::fmt::Display) -> ChartError {
    ChartError::Draw(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_display() {
        let err = ChartError::Draw("backend gone".to_string());
        assert_eq!(err.to_string(), "Drawing error: backend gone");
    }

    #[test]
    fn test_empty_pivot_display() {
        let err = ChartError::EmptyPivot {
            context: "throughput".to_string(),
        };
        assert_eq!(err.to_string(), "Nothing to draw: throughput");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ChartError>();
    }
}
