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

//! Single-device report commands.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;

/// Reports over one measurement file.
///
/// All three commands read the same semicolon-delimited measurement
/// shape; they differ only in which derived metrics and groupings are
/// produced.
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Performance charts for one device
    ///
    /// Renders, per algorithm: grouped-bar throughput, percentage
    /// overhead versus the FFI baseline, and a CPU-efficiency line
    /// chart. Renders a per-implementation algorithm comparison as well.
    Report {
        /// Input measurement CSV
        #[arg(short, long, value_name = "FILE")]
        input: String,

        /// Device label shown in chart titles
        #[arg(short, long, value_name = "NAME")]
        device: String,

        /// Output directory for chart images (created if absent)
        #[arg(short, long, value_name = "DIR", default_value = "charts")]
        out_dir: String,
    },

    /// RAM usage charts for one device
    ///
    /// Renders, per algorithm, average RAM as lines with peak RAM as
    /// cross markers in the matching series color.
    Ram {
        /// Input measurement CSV
        #[arg(short, long, value_name = "FILE")]
        input: String,

        /// Device label shown in chart titles
        #[arg(short, long, value_name = "NAME")]
        device: String,

        /// Output directory for chart images (created if absent)
        #[arg(short, long, value_name = "DIR", default_value = "charts")]
        out_dir: String,
    },

    /// Aggregated summary table for one device
    ///
    /// Averages per-call encrypt and decrypt times over every data size
    /// per (algorithm, implementation) pair and writes them back out
    /// semicolon-delimited with the encrypt/decrypt percentage
    /// difference.
    Summary {
        /// Input measurement CSV
        #[arg(short, long, value_name = "FILE")]
        input: String,

        /// Device label stamped into the output table
        #[arg(short, long, value_name = "NAME")]
        device: String,

        /// Output CSV path
        #[arg(short, long, value_name = "FILE", default_value = "summary.csv")]
        output: String,
    },
}

impl ReportCommands {
    /// Execute the report command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the input cannot be loaded or an output cannot
    /// be written.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            ReportCommands::Report {
                input,
                device,
                out_dir,
            } => commands::report(&input, &device, &out_dir),
            ReportCommands::Ram {
                input,
                device,
                out_dir,
            } => commands::ram(&input, &device, &out_dir),
            ReportCommands::Summary {
                input,
                device,
                output,
            } => commands::summary(&input, &device, &output),
        }
    }
}
