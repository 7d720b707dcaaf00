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

//! Compare command - cross-device speedup and wall-time comparisons.

use super::{ensure_dir, load_sources, render_or_skip, saved, IMPLEMENTATION_ORDER};
use crate::error::CliError;
use benchplot_chart::{render_grouped_bars, ChartSpec};
use benchplot_core::{BenchmarkTable, Dimension, Metric, PivotSpec};
use std::path::Path;

/// Generate the cross-device comparison report.
///
/// Per data size: the speedup of the native call paths over the Dart
/// baseline and the full per-implementation wall-time comparison, both
/// grouped by (device, algorithm). A final chart averages the speedup
/// over every data size. The baseline is always the named Dart column,
/// so one chart never mixes baselines.
///
/// # Errors
///
/// Returns `Err` if no source loads, a present source fails to parse,
/// or the data lacks one of the fixed implementation columns.
pub fn compare(sources: &[String], out_dir: &str) -> Result<(), CliError> {
    let out = ensure_dir(out_dir)?;
    let table = load_sources(sources)?;

    for size_kb in table.data_sizes_kb() {
        let slice = table.filter_data_size_kb(size_kb);
        render_or_skip(
            &format!("speedup at {} KB", size_kb),
            speedup_chart(&slice, Some(size_kb), &out),
        )?;
        render_or_skip(
            &format!("full comparison at {} KB", size_kb),
            full_comparison_chart(&slice, size_kb, &out),
        )?;
    }

    render_or_skip("averaged speedup", speedup_chart(&table, None, &out))?;
    Ok(())
}

fn wall_time_pivot(
    table: &BenchmarkTable,
) -> Result<benchplot_core::PivotTable, benchplot_core::Error> {
    table.pivot(&PivotSpec {
        rows: &[Dimension::Device, Dimension::Algorithm],
        columns: &[Dimension::Implementation],
        metric: Metric::WallTimeAvgMs,
        row_order: None,
        column_order: Some(&IMPLEMENTATION_ORDER),
    })
}

fn speedup_chart(
    table: &BenchmarkTable,
    size_kb: Option<u64>,
    out: &Path,
) -> Result<(), CliError> {
    let speedup = wall_time_pivot(table)?.speedup_vs("Dart")?;

    let (title, filename) = match size_kb {
        Some(kb) => (
            format!("Average speedup over Dart for {} KB data", kb),
            format!("speedup_vs_dart_{}kb.png", kb),
        ),
        None => (
            "Average speedup over Dart across all data sizes".to_string(),
            "speedup_vs_dart_average.png".to_string(),
        ),
    };
    let spec = ChartSpec {
        bar_label_suffix: Some("x".to_string()),
        ..ChartSpec::new(title, "Device / Algorithm", "Times faster than Dart")
    };
    let path = out.join(filename);
    render_grouped_bars(&speedup, &spec, &path)?;
    saved(&path);
    Ok(())
}

fn full_comparison_chart(
    slice: &BenchmarkTable,
    size_kb: u64,
    out: &Path,
) -> Result<(), CliError> {
    let pivot = wall_time_pivot(slice)?;
    let spec = ChartSpec::new(
        format!("Full performance comparison for {} KB data", size_kb),
        "Device / Algorithm",
        "Average wall time (ms)",
    );
    let path = out.join(format!("full_comparison_{}kb.png", size_kb));
    render_grouped_bars(&pivot, &spec, &path)?;
    saved(&path);
    Ok(())
}
