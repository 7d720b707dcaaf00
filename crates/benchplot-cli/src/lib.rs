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

//! Benchplot CLI library for command-line parsing and execution.
//!
//! Each subcommand is a thin configuration over the shared
//! load/derive/pivot/render pipeline from `benchplot-core`,
//! `benchplot-csv` and `benchplot-chart`; no report logic lives in the
//! binary itself.
//!
//! # Commands
//!
//! ## Single device
//!
//! - **report**: throughput, overhead vs FFI and CPU efficiency charts
//!   per algorithm, algorithm comparison per implementation
//! - **ram**: average/peak RAM chart per algorithm
//! - **summary**: aggregated encrypt/decrypt summary table as CSV
//!
//! ## Cross device
//!
//! - **compare**: speedup over Dart and full wall-time comparison per
//!   data size, plus the all-sizes average
//! - **encdec**: combined encrypt (solid) vs decrypt (dashed) chart
//! - **scale**: per-size panels and the averaged log-scale summary
//!
//! ## Utility
//!
//! - **completion**: shell completion scripts

pub mod cli;
pub mod commands;
pub mod error;

pub use error::CliError;
