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

//! Chart rendering for pivoted benchmark tables.
//!
//! Takes the [`PivotTable`](benchplot_core::PivotTable) shapes produced
//! by `benchplot-core` and renders them to PNG files:
//!
//! - [`render_grouped_bars`]: rows become x groups, columns become bars
//! - [`render_lines`]: one line per column, optional logarithmic y axis
//! - [`render_lines_with_markers`]: average lines plus peak cross markers
//! - [`render_dual_lines`]: paired solid/dashed series (encrypt/decrypt)
//! - [`render_line_grid`]: a one-row grid of line panels
//!
//! Styling is fixed by [`style`]: implementations keep stable colors
//! across every chart, everything else cycles a small palette.
//!
//! # Examples
//!
//! ```no_run
//! use benchplot_chart::{render_grouped_bars, ChartSpec};
//! use benchplot_core::PivotTable;
//! use std::path::Path;
//!
//! let pivot = PivotTable::from_parts(
//!     vec!["10".to_string()],
//!     vec!["FFI".to_string(), "Dart".to_string()],
//!     vec![vec![Some(210.0), Some(14.0)]],
//! );
//! let spec = ChartSpec::new(
//!     "Throughput for AES-GCM 256 - Pixel 8 Pro",
//!     "Data size (KB)",
//!     "Throughput (MB/s)",
//! );
//! render_grouped_bars(&pivot, &spec, Path::new("out/throughput_aes-gcm_256.png")).unwrap();
//! ```

mod axis;
mod bar;
mod config;
mod error;
mod grid;
mod line;
pub mod style;

// Re-export public API
pub use bar::render_grouped_bars;
pub use config::ChartSpec;
pub use error::{ChartError, Result};
pub use grid::render_line_grid;
pub use line::{render_dual_lines, render_lines, render_lines_with_markers};
