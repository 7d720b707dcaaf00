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

//! Semicolon-delimited measurement file loading for benchplot.
//!
//! Measurement files carry one header row and one row per benchmark
//! sample:
//!
//! ```text
//! Implementation;Algorithm;DataSize_B;Iterations;WallTime_Sum_ms;WallTime_Encrypt_ms;WallTime_Decrypt_ms;CPUTime_ms;RAM_Avg_MB;RAM_Peak_MB
//! Enum.ffi;Enum.aesGcm;1024000;100;500.0;260.0;240.0;450.0;42.0;55.0
//! ```
//!
//! Blank lines are permitted and ignored, header whitespace is trimmed,
//! and the categorical tokens are normalized onto the fixed vocabulary
//! during loading. Rows that fail to normalize are reported with their
//! row number instead of being dropped.
//!
//! # Examples
//!
//! ## Loading a single device file
//!
//! ```no_run
//! use benchplot_csv::read_table;
//!
//! let table = read_table("benchmark_pixel.csv", Some("Pixel 8 Pro")).unwrap();
//! println!("{} samples", table.len());
//! ```
//!
//! ## Combining devices, tolerating missing files
//!
//! ```no_run
//! use benchplot_csv::read_tables;
//! use std::path::PathBuf;
//!
//! let sources = vec![
//!     ("LG G2 mini".to_string(), PathBuf::from("benchmark_g2.csv")),
//!     ("Pixel 8 Pro".to_string(), PathBuf::from("benchmark_pixel.csv")),
//! ];
//! let combined = read_tables(&sources).unwrap();
//! for path in &combined.skipped {
//!     eprintln!("skipped {}", path.display());
//! }
//! ```

mod error;
mod read;
mod write;

// Re-export public API
pub use error::{CsvError, Result};
pub use read::{
    read_table, read_table_reader, read_table_with_config, read_tables, CombinedSources,
    ReadConfig,
};
pub use write::{read_summary, write_summary, write_summary_writer, SUMMARY_HEADER};
