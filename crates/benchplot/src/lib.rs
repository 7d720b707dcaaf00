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

//! # Benchplot - crypto benchmark reporting toolkit
//!
//! Benchplot turns semicolon-delimited cryptographic benchmark
//! measurements into comparison charts and aggregated summary tables.
//! This facade crate re-exports the core pipeline; the file loading and
//! chart rendering stages are feature-gated.
//!
//! ## Quick Start
//!
//! ```
//! use benchplot::{
//!     Algorithm, BenchmarkTable, Dimension, Implementation, Metric,
//!     PivotSpec, Record,
//! };
//!
//! let table = BenchmarkTable::from_records(vec![Record {
//!     implementation: Implementation::Ffi,
//!     algorithm: Algorithm::AesGcm256,
//!     data_size_bytes: 1_024_000,
//!     iterations: 100,
//!     wall_time_sum_ms: 500.0,
//!     wall_time_encrypt_ms: 260.0,
//!     wall_time_decrypt_ms: 240.0,
//!     cpu_time_ms: 450.0,
//!     ram_avg_mb: 42.0,
//!     ram_peak_mb: 55.0,
//!     device: Some("Pixel 8 Pro".to_string()),
//! }]);
//!
//! let pivot = table
//!     .pivot(&PivotSpec {
//!         rows: &[Dimension::DataSizeKb],
//!         columns: &[Dimension::Implementation],
//!         metric: Metric::ThroughputMbPerS,
//!         row_order: None,
//!         column_order: Some(&["FFI"]),
//!     })
//!     .expect("pivot");
//! assert_eq!(pivot.columns(), &["FFI".to_string()]);
//! ```
//!
//! ## Features
//!
//! - `csv`: measurement file loading and summary tables
//!   (re-exports `benchplot-csv` as [`csv`])
//! - `chart`: PNG chart rendering (re-exports `benchplot-chart` as
//!   [`chart`](mod@chart))
//! - `serde`: `Serialize`/`Deserialize` on the core data types
//! - `all`: everything above except `serde`

// Re-export core types
pub use benchplot_core::{
    // Functions
    overhead_pct,
    speedup,
    summarize,
    // Main types
    Algorithm,
    BenchmarkTable,
    Dimension,
    // Errors
    Error,
    Implementation,
    Metric,
    PivotSpec,
    PivotTable,
    Record,
    Result,
    SummaryRow,
};

// Re-export measurement file loading
#[cfg(feature = "csv")]
pub mod csv {
    //! Measurement file loading and summary tables
    pub use benchplot_csv::{
        read_summary, read_table, read_table_reader, read_table_with_config, read_tables,
        write_summary, write_summary_writer, CombinedSources, CsvError, ReadConfig,
        SUMMARY_HEADER,
    };
}

// Re-export chart rendering
#[cfg(feature = "chart")]
pub mod chart {
    //! Chart rendering over pivoted tables
    pub use benchplot_chart::{
        render_dual_lines, render_grouped_bars, render_line_grid, render_lines,
        render_lines_with_markers, style, ChartError, ChartSpec,
    };
}
