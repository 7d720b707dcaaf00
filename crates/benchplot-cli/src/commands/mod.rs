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

//! CLI command implementations

mod compare;
mod completion;
mod encdec;
mod ram;
mod report;
mod scale;
mod summary;

pub use compare::compare;
pub use completion::generate_completion_for_command;
pub use encdec::encdec;
pub use ram::ram;
pub use report::report;
pub use scale::scale;
pub use summary::summary;

use crate::error::CliError;
use benchplot_core::BenchmarkTable;
use benchplot_csv::read_tables;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed implementation ordering used on every chart, fastest call path
/// first.
pub const IMPLEMENTATION_ORDER: [&str; 3] = ["FFI", "Platform Channel", "Dart"];

/// Create the output directory if it does not exist yet.
pub(crate) fn ensure_dir(dir: &str) -> Result<PathBuf, CliError> {
    let path = PathBuf::from(dir);
    fs::create_dir_all(&path).map_err(|e| CliError::io_error(&path, e))?;
    Ok(path)
}

/// Parse repeated `LABEL=PATH` source arguments.
pub(crate) fn parse_sources(specs: &[String]) -> Result<Vec<(String, PathBuf)>, CliError> {
    specs
        .iter()
        .map(|spec| match spec.split_once('=') {
            Some((label, path)) if !label.trim().is_empty() && !path.trim().is_empty() => {
                Ok((label.trim().to_string(), PathBuf::from(path.trim())))
            }
            _ => Err(CliError::invalid_source(spec.clone())),
        })
        .collect()
}

/// Load and combine the configured sources, warning about missing files.
///
/// # Errors
///
/// Returns [`CliError::NoSources`] when nothing could be loaded, and
/// parse errors from sources that do exist.
pub(crate) fn load_sources(specs: &[String]) -> Result<BenchmarkTable, CliError> {
    let sources = parse_sources(specs)?;
    let combined = read_tables(&sources)?;
    for path in &combined.skipped {
        eprintln!(
            "{} skipped missing source '{}'",
            "⚠".yellow().bold(),
            path.display()
        );
    }
    if combined.table.is_empty() {
        return Err(CliError::NoSources);
    }
    Ok(combined.table)
}

/// Report one written output file.
pub(crate) fn saved(path: &Path) {
    println!("{} {}", "✓".green().bold(), path.display());
}

/// Run one chart unit, downgrading empty slices to a skip notice.
///
/// Empty result sets are recoverable at the report level; anything else
/// stays fatal.
pub(crate) fn render_or_skip(what: &str, result: Result<(), CliError>) -> Result<(), CliError> {
    match result {
        Err(CliError::Core(benchplot_core::Error::EmptyResultSet { .. }))
        | Err(CliError::Chart(benchplot_chart::ChartError::EmptyPivot { .. })) => {
            eprintln!("{} no data for {}, skipped", "⚠".yellow().bold(), what);
            Ok(())
        }
        other => other,
    }
}
