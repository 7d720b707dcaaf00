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

//! Summary command - aggregated summary table output.

use crate::error::CliError;
use benchplot_csv::{read_table, write_summary};
use colored::Colorize;
use std::fs;
use std::path::Path;

/// Aggregate one measurement file into the per-device summary table and
/// write it back out semicolon-delimited.
///
/// # Errors
///
/// Returns `Err` if the input cannot be loaded, the table is empty, or
/// the output cannot be written.
pub fn summary(input: &str, device: &str, output: &str) -> Result<(), CliError> {
    let table = read_table(input, Some(device))?;
    let rows = table.summarize(device)?;

    let out_path = Path::new(output);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| CliError::io_error(parent, e))?;
        }
    }
    write_summary(out_path, &rows)?;

    println!(
        "{} wrote {} summary rows to {}",
        "✓".green().bold(),
        rows.len(),
        out_path.display()
    );
    Ok(())
}
