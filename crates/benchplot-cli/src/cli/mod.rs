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

//! CLI command definitions and argument parsing.
//!
//! Commands are organized into the following modules:
//!
//! - [`report`]: single-device reports (charts, RAM, summary table)
//! - [`compare`]: multi-device comparison reports
//! - [`utility`]: utility commands (completion)
//!
//! Each subcommand is a thin configuration layer; the shared pipeline
//! work happens in [`crate::commands`].

mod compare;
mod report;
mod utility;

use crate::error::CliError;
use clap::Subcommand;

pub use compare::CompareCommands;
pub use report::ReportCommands;
pub use utility::UtilityCommands;

/// Top-level CLI commands enum.
///
/// # Architecture
///
/// ```text
/// Commands
/// ├── Report (report, ram, summary)
/// ├── Compare (compare, encdec, scale)
/// └── Utility (completion)
/// ```
#[derive(Subcommand)]
pub enum Commands {
    // Single-device commands - flattened to appear at top level
    #[command(flatten)]
    Report(ReportCommands),

    // Multi-device commands - flattened to appear at top level
    #[command(flatten)]
    Compare(CompareCommands),

    // Utility commands - flattened to appear at top level
    #[command(flatten)]
    Utility(UtilityCommands),
}

impl Commands {
    /// Execute the command with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns `Err` if file I/O, parsing, aggregation, or chart
    /// rendering fails.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Report(cmd) => cmd.execute(),
            Commands::Compare(cmd) => cmd.execute(),
            Commands::Utility(cmd) => cmd.execute(),
        }
    }
}
