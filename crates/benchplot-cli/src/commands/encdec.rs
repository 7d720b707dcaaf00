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

//! EncDec command - combined encrypt versus decrypt chart.

use super::{ensure_dir, load_sources, saved};
use crate::error::CliError;
use benchplot_chart::{render_dual_lines, ChartSpec};
use benchplot_core::{Dimension, Metric, PivotSpec};

/// Generate the combined encrypt/decrypt comparison chart.
///
/// One series per (algorithm, implementation) pair over the data sizes:
/// encrypt as solid lines with circles, decrypt as dashed lines with
/// crosses in the same color.
///
/// # Errors
///
/// Returns `Err` if no source loads or the chart cannot be written.
pub fn encdec(sources: &[String], out_dir: &str) -> Result<(), CliError> {
    let out = ensure_dir(out_dir)?;
    let table = load_sources(sources)?;

    let dims = |metric| PivotSpec {
        rows: &[Dimension::DataSizeKb],
        columns: &[Dimension::Algorithm, Dimension::Implementation],
        metric,
        row_order: None,
        column_order: None,
    };
    let encrypt = table.pivot(&dims(Metric::EncryptAvgMs))?;
    let decrypt = table.pivot(&dims(Metric::DecryptAvgMs))?;

    let spec = ChartSpec::new(
        "Encrypt (solid) vs decrypt (dashed) performance",
        "Data size (KB)",
        "Average time per operation (ms)",
    );
    let path = out.join("encrypt_vs_decrypt.png");
    render_dual_lines(&encrypt, &decrypt, &spec, &path)?;
    saved(&path);
    Ok(())
}
