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

//! A single normalized benchmark measurement.

use crate::vocab::{Algorithm, Implementation};

/// One normalized row of a measurement table.
///
/// Timing fields are sums over `iterations` repetitions, not per-call
/// averages; the RAM fields are plain measurements. Derived values
/// (averages, throughput, efficiency) are computed on demand by
/// [`Metric`](crate::Metric) and never stored back.
///
/// # Examples
///
/// ```
/// use benchplot_core::{Algorithm, Implementation, Record};
///
/// let rec = Record {
///     implementation: Implementation::Ffi,
///     algorithm: Algorithm::AesGcm256,
///     data_size_bytes: 1_024_000,
///     iterations: 100,
///     wall_time_sum_ms: 500.0,
///     wall_time_encrypt_ms: 260.0,
///     wall_time_decrypt_ms: 240.0,
///     cpu_time_ms: 450.0,
///     ram_avg_mb: 42.0,
///     ram_peak_mb: 55.0,
///     device: None,
/// };
///
/// assert_eq!(rec.data_size_kb(), 1000);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    /// Which call path performed the operation.
    pub implementation: Implementation,
    /// Which cipher was benchmarked.
    pub algorithm: Algorithm,
    /// Size of the plaintext processed per iteration, in bytes.
    pub data_size_bytes: u64,
    /// Number of repetitions the summed timings were accumulated over.
    pub iterations: u64,
    /// Total wall time over all iterations, in milliseconds.
    pub wall_time_sum_ms: f64,
    /// Wall time spent encrypting over all iterations, in milliseconds.
    pub wall_time_encrypt_ms: f64,
    /// Wall time spent decrypting over all iterations, in milliseconds.
    pub wall_time_decrypt_ms: f64,
    /// Total CPU time over all iterations, in milliseconds.
    pub cpu_time_ms: f64,
    /// Average resident memory during the run, in megabytes.
    pub ram_avg_mb: f64,
    /// Peak resident memory during the run, in megabytes.
    pub ram_peak_mb: f64,
    /// Device label stamped on when combining multiple source tables.
    pub device: Option<String>,
}

impl Record {
    /// Data size bucketing key in whole kilobytes (integer division).
    ///
    /// Multiple raw rows may share a bucket.
    pub fn data_size_kb(&self) -> u64 {
        self.data_size_bytes / 1024
    }

    /// Data size in megabytes, used for throughput computation.
    pub fn data_size_mb(&self) -> f64 {
        self.data_size_bytes as f64 / 1024.0 / 1024.0
    }
}
