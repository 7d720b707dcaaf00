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

//! Multi-device comparison commands.
//!
//! Every command here takes repeated `-s LABEL=PATH` sources. A source
//! whose file is missing is skipped with a warning; the run fails only
//! when nothing loads.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;

/// Reports combining several measurement files.
#[derive(Subcommand)]
pub enum CompareCommands {
    /// Cross-device speedup and wall-time comparison charts
    ///
    /// Renders, per data size: the speedup of FFI and Platform Channel
    /// over the Dart baseline, and the full per-implementation wall-time
    /// comparison over (device, algorithm) groups. Also renders the
    /// all-sizes averaged speedup chart.
    Compare {
        /// Measurement source as LABEL=PATH, repeatable
        #[arg(short, long = "source", value_name = "LABEL=PATH", required = true)]
        sources: Vec<String>,

        /// Output directory for chart images (created if absent)
        #[arg(short, long, value_name = "DIR", default_value = "charts")]
        out_dir: String,
    },

    /// Combined encrypt versus decrypt chart
    ///
    /// One line chart over data sizes with a series per algorithm and
    /// implementation pair: encrypt solid with circles, decrypt dashed
    /// with crosses.
    EncDec {
        /// Measurement source as LABEL=PATH, repeatable
        #[arg(short, long = "source", value_name = "LABEL=PATH", required = true)]
        sources: Vec<String>,

        /// Output directory for chart images (created if absent)
        #[arg(short, long, value_name = "DIR", default_value = "charts")]
        out_dir: String,
    },

    /// Per-size device grids and averaged log-scale summary
    ///
    /// Renders a one-row grid with one panel per data size, each panel
    /// plotting device and algorithm series over the implementation
    /// axis, plus a summary line chart of the all-sizes averages on a
    /// logarithmic axis.
    Scale {
        /// Measurement source as LABEL=PATH, repeatable
        #[arg(short, long = "source", value_name = "LABEL=PATH", required = true)]
        sources: Vec<String>,

        /// Output directory for chart images (created if absent)
        #[arg(short, long, value_name = "DIR", default_value = "charts")]
        out_dir: String,
    },
}

impl CompareCommands {
    /// Execute the comparison command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if no source loads, a present source fails to
    /// parse, or an output cannot be written.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            CompareCommands::Compare { sources, out_dir } => {
                commands::compare(&sources, &out_dir)
            }
            CompareCommands::EncDec { sources, out_dir } => {
                commands::encdec(&sources, &out_dir)
            }
            CompareCommands::Scale { sources, out_dir } => commands::scale(&sources, &out_dir),
        }
    }
}
