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

//! Core data model and transformations for crypto benchmark reports.
//!
//! This crate holds the shared pipeline every report is built from:
//! normalized measurement records, the fixed label vocabulary, on-demand
//! derived metrics, and mean-aggregating pivots. Loading tables from
//! files and rendering charts live in the `benchplot-csv` and
//! `benchplot-chart` crates; this crate is purely in-memory and
//! deterministic.
//!
//! # Pipeline
//!
//! ```text
//! raw rows → normalization → derived metrics → grouping/pivot → chart
//! ```
//!
//! # Examples
//!
//! ```
//! use benchplot_core::{
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
//!     device: None,
//! }]);
//!
//! let pivot = table
//!     .pivot(&PivotSpec {
//!         rows: &[Dimension::DataSizeKb],
//!         columns: &[Dimension::Implementation],
//!         metric: Metric::WallTimeAvgMs,
//!         row_order: None,
//!         column_order: None,
//!     })
//!     .unwrap();
//!
//! assert_eq!(pivot.row_labels(), &["1000".to_string()]);
//! assert!((pivot.cell(0, 0).unwrap() - 5.0).abs() < 1e-9);
//! ```

mod error;
mod metric;
mod pivot;
mod record;
mod summary;
mod table;
mod vocab;

pub use error::{Error, Result};
pub use metric::{overhead_pct, speedup, Metric};
pub use pivot::{Dimension, PivotSpec, PivotTable};
pub use record::Record;
pub use summary::{summarize, SummaryRow};
pub use table::BenchmarkTable;
pub use vocab::{Algorithm, Implementation};
