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

//! Report command - per-algorithm performance charts for one device.

use super::{ensure_dir, render_or_skip, saved, IMPLEMENTATION_ORDER};
use crate::error::CliError;
use benchplot_chart::style::slug;
use benchplot_chart::{render_grouped_bars, render_lines, ChartSpec};
use benchplot_core::{Algorithm, BenchmarkTable, Dimension, Implementation, Metric, PivotSpec};
use benchplot_csv::read_table;
use std::path::Path;

/// Generate the single-device performance report.
///
/// Per algorithm: grouped-bar throughput, percentage overhead versus the
/// FFI baseline, and a CPU-efficiency line chart. Per implementation: a
/// grouped-bar algorithm comparison. Slices with no data are skipped
/// with a notice.
///
/// # Errors
///
/// Returns `Err` if the input cannot be loaded, a chart cannot be
/// written, or the fixed implementation ordering names a call path the
/// data does not contain.
pub fn report(input: &str, device: &str, out_dir: &str) -> Result<(), CliError> {
    let out = ensure_dir(out_dir)?;
    let table = read_table(input, Some(device))?;

    for algorithm in table.algorithms() {
        let slice = table.filter_algorithm(algorithm);
        render_or_skip(
            &format!("throughput for {}", algorithm),
            throughput_chart(&slice, algorithm, device, &out),
        )?;
        render_or_skip(
            &format!("overhead for {}", algorithm),
            overhead_chart(&slice, algorithm, device, &out),
        )?;
        render_or_skip(
            &format!("CPU efficiency for {}", algorithm),
            cpu_efficiency_chart(&slice, algorithm, device, &out),
        )?;
    }

    for implementation in table.implementations() {
        let slice = table.filter_implementation(implementation);
        render_or_skip(
            &format!("algorithm comparison for {}", implementation),
            algorithm_comparison_chart(&slice, implementation, device, &out),
        )?;
    }

    Ok(())
}

fn throughput_chart(
    slice: &BenchmarkTable,
    algorithm: Algorithm,
    device: &str,
    out: &Path,
) -> Result<(), CliError> {
    let pivot = slice.pivot(&PivotSpec {
        rows: &[Dimension::DataSizeKb],
        columns: &[Dimension::Implementation],
        metric: Metric::ThroughputMbPerS,
        row_order: None,
        column_order: Some(&IMPLEMENTATION_ORDER),
    })?;
    let spec = ChartSpec::new(
        format!("Average throughput for {} - {}", algorithm, device),
        "Data size (KB)",
        "Throughput (MB/s)",
    );
    let path = out.join(format!("throughput_{}.png", slug(algorithm.label())));
    render_grouped_bars(&pivot, &spec, &path)?;
    saved(&path);
    Ok(())
}

fn overhead_chart(
    slice: &BenchmarkTable,
    algorithm: Algorithm,
    device: &str,
    out: &Path,
) -> Result<(), CliError> {
    let pivot = slice.pivot(&PivotSpec {
        rows: &[Dimension::DataSizeKb],
        columns: &[Dimension::Implementation],
        metric: Metric::WallTimeAvgMs,
        row_order: None,
        column_order: Some(&IMPLEMENTATION_ORDER),
    })?;
    let overhead = pivot.overhead_vs("FFI")?;
    let spec = ChartSpec::new(
        format!("Wall time overhead vs FFI for {} - {}", algorithm, device),
        "Data size (KB)",
        "Overhead vs FFI (%)",
    );
    let path = out.join(format!("overhead_vs_ffi_{}.png", slug(algorithm.label())));
    render_grouped_bars(&overhead, &spec, &path)?;
    saved(&path);
    Ok(())
}

fn cpu_efficiency_chart(
    slice: &BenchmarkTable,
    algorithm: Algorithm,
    device: &str,
    out: &Path,
) -> Result<(), CliError> {
    let pivot = slice.pivot(&PivotSpec {
        rows: &[Dimension::DataSizeKb],
        columns: &[Dimension::Implementation],
        metric: Metric::CpuEfficiencyPct,
        row_order: None,
        column_order: Some(&IMPLEMENTATION_ORDER),
    })?;
    let spec = ChartSpec::new(
        format!("CPU efficiency for {} - {}", algorithm, device),
        "Data size (KB)",
        "CPU efficiency (%)",
    );
    let path = out.join(format!("cpu_efficiency_{}.png", slug(algorithm.label())));
    render_lines(&pivot, &spec, &path)?;
    saved(&path);
    Ok(())
}

fn algorithm_comparison_chart(
    slice: &BenchmarkTable,
    implementation: Implementation,
    device: &str,
    out: &Path,
) -> Result<(), CliError> {
    let pivot = slice.pivot(&PivotSpec {
        rows: &[Dimension::DataSizeKb],
        columns: &[Dimension::Algorithm],
        metric: Metric::WallTimeAvgMs,
        row_order: None,
        column_order: None,
    })?;
    let spec = ChartSpec::new(
        format!("Algorithm comparison for {} - {}", implementation, device),
        "Data size (KB)",
        "Average wall time (ms)",
    );
    let path = out.join(format!(
        "algorithm_comparison_{}.png",
        slug(implementation.label())
    ));
    render_grouped_bars(&pivot, &spec, &path)?;
    saved(&path);
    Ok(())
}
