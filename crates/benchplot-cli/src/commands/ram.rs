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

//! Ram command - memory usage charts for one device.

use super::{ensure_dir, render_or_skip, saved, IMPLEMENTATION_ORDER};
use crate::error::CliError;
use benchplot_chart::style::slug;
use benchplot_chart::{render_lines_with_markers, ChartSpec};
use benchplot_core::{Algorithm, BenchmarkTable, Dimension, Metric, PivotSpec};
use benchplot_csv::read_table;
use std::path::Path;

/// Generate the combined RAM usage chart per algorithm.
///
/// Average RAM draws as lines, peak RAM as cross markers in the matching
/// series color. Algorithms with no rows are skipped with a notice.
///
/// # Errors
///
/// Returns `Err` if the input cannot be loaded or a chart cannot be
/// written.
pub fn ram(input: &str, device: &str, out_dir: &str) -> Result<(), CliError> {
    let out = ensure_dir(out_dir)?;
    let table = read_table(input, Some(device))?;

    for algorithm in table.algorithms() {
        let slice = table.filter_algorithm(algorithm);
        render_or_skip(
            &format!("RAM usage for {}", algorithm),
            ram_chart(&slice, algorithm, device, &out),
        )?;
    }
    Ok(())
}

fn ram_chart(
    slice: &BenchmarkTable,
    algorithm: Algorithm,
    device: &str,
    out: &Path,
) -> Result<(), CliError> {
    let dims = |metric| PivotSpec {
        rows: &[Dimension::DataSizeKb],
        columns: &[Dimension::Implementation],
        metric,
        row_order: None,
        column_order: Some(&IMPLEMENTATION_ORDER),
    };
    let averages = slice.pivot(&dims(Metric::RamAvgMb))?;
    let peaks = slice.pivot(&dims(Metric::RamPeakMb))?;

    let spec = ChartSpec::new(
        format!(
            "Average (line) and peak (x) RAM usage for {} - {}",
            algorithm, device
        ),
        "Data size (KB)",
        "RAM usage (MB)",
    );
    let path = out.join(format!("ram_combined_{}.png", slug(algorithm.label())));
    render_lines_with_markers(&averages, &peaks, &spec, &path)?;
    saved(&path);
    Ok(())
}
