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

//! Scale command - per-size device grids and the averaged log-scale
//! summary.

use super::{ensure_dir, load_sources, saved, IMPLEMENTATION_ORDER};
use crate::error::CliError;
use benchplot_chart::{render_line_grid, render_lines, ChartSpec};
use benchplot_core::{BenchmarkTable, Dimension, Metric, PivotSpec, PivotTable};

/// Generate the device-scaling report.
///
/// A one-row grid with one panel per data size, each plotting
/// device/algorithm series over the fixed implementation axis, followed
/// by a summary line chart of the all-sizes averages on a logarithmic
/// axis.
///
/// # Errors
///
/// Returns `Err` if no source loads or a chart cannot be written.
pub fn scale(sources: &[String], out_dir: &str) -> Result<(), CliError> {
    let out = ensure_dir(out_dir)?;
    let table = load_sources(sources)?;

    let mut panels = Vec::new();
    for size_kb in table.data_sizes_kb() {
        let slice = table.filter_data_size_kb(size_kb);
        panels.push((format!("{} KB", size_kb), implementation_pivot(&slice)?));
    }

    let grid_spec = ChartSpec::new(
        "Device performance comparison across implementations",
        "Implementation",
        "Average wall time (s)",
    );
    let grid_path = out.join("device_comparison.png");
    render_line_grid(&panels, &grid_spec, &grid_path)?;
    saved(&grid_path);

    let summary_spec = ChartSpec {
        y_log: true,
        ..ChartSpec::new(
            "Averaged performance across all data sizes",
            "Implementation",
            "Average wall time (s, log scale)",
        )
    };
    let summary_path = out.join("device_comparison_average.png");
    render_lines(&implementation_pivot(&table)?, &summary_spec, &summary_path)?;
    saved(&summary_path);
    Ok(())
}

/// Device/algorithm series over the implementation axis, in seconds.
fn implementation_pivot(table: &BenchmarkTable) -> Result<PivotTable, benchplot_core::Error> {
    table.pivot(&PivotSpec {
        rows: &[Dimension::Implementation],
        columns: &[Dimension::Device, Dimension::Algorithm],
        metric: Metric::WallTimeAvgS,
        row_order: Some(&IMPLEMENTATION_ORDER),
        column_order: None,
    })
}
