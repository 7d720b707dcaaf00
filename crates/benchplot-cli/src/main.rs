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

//! Benchplot Command Line Interface

use benchplot_cli::cli::Commands;
use clap::Parser;
use std::process::ExitCode;

/// Benchplot - crypto benchmark report generator
///
/// Turns semicolon-delimited benchmark measurement files into comparison
/// charts and aggregated summary tables.
///
/// # Examples
///
/// ```bash
/// # Per-algorithm charts for one device
/// benchplot report -i benchmark_pixel.csv -d "Pixel 8 Pro" -o charts/
///
/// # Cross-device comparison from three measurement files
/// benchplot compare -s "LG G2 mini=benchmark_g2.csv" \
///     -s "Pixel 8 Pro=benchmark_pixel.csv" -o charts/
///
/// # Aggregated summary table
/// benchplot summary -i benchmark_pixel.csv -d "Pixel 8 Pro" -o summary.csv
/// ```
#[derive(Parser)]
#[command(name = "benchplot")]
#[command(author, version, about = "Benchplot - crypto benchmark report generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
