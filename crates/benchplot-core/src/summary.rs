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

//! The aggregated per-device summary table.
//!
//! Averages the per-call encrypt and decrypt times over every data size
//! for each (algorithm, implementation) pair and stamps the device label
//! on. This is the one report that is written back out as a table rather
//! than rendered as a chart.

use crate::error::{Error, Result};
use crate::metric::Metric;
use crate::table::BenchmarkTable;
use crate::vocab::{Algorithm, Implementation};
use std::collections::BTreeMap;

/// One row of the aggregated summary table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SummaryRow {
    /// Device the measurements came from.
    pub device: String,
    /// The cipher.
    pub algorithm: Algorithm,
    /// The call path.
    pub implementation: Implementation,
    /// Mean per-call encrypt time over all data sizes, in milliseconds.
    pub encrypt_avg_ms: f64,
    /// Mean per-call decrypt time over all data sizes, in milliseconds.
    pub decrypt_avg_ms: f64,
}

impl SummaryRow {
    /// Percentage difference between encrypt and decrypt time.
    ///
    /// `(encrypt - decrypt) / encrypt * 100`; positive when decryption
    /// is the faster of the two.
    pub fn encrypt_decrypt_diff_pct(&self) -> f64 {
        (self.encrypt_avg_ms - self.decrypt_avg_ms) / self.encrypt_avg_ms * 100.0
    }
}

/// Aggregate a table into summary rows, sorted by algorithm then
/// implementation label.
///
/// # Errors
///
/// - [`Error::EmptyResultSet`] when the table has no rows.
/// - [`Error::DivideByIterations`] when any row has a zero iteration
///   count.
pub fn summarize(table: &BenchmarkTable, device: &str) -> Result<Vec<SummaryRow>> {
    if table.is_empty() {
        return Err(Error::EmptyResultSet {
            context: "summary aggregation".to_string(),
        });
    }

    let mut groups: BTreeMap<(&'static str, &'static str), (Algorithm, Implementation, f64, f64, u64)> =
        BTreeMap::new();

    for rec in table.records() {
        let encrypt = Metric::EncryptAvgMs.eval(rec)?;
        let decrypt = Metric::DecryptAvgMs.eval(rec)?;
        let entry = groups
            .entry((rec.algorithm.label(), rec.implementation.label()))
            .or_insert((rec.algorithm, rec.implementation, 0.0, 0.0, 0));
        entry.2 += encrypt;
        entry.3 += decrypt;
        entry.4 += 1;
    }

    Ok(groups
        .into_values()
        .map(|(algorithm, implementation, enc_sum, dec_sum, count)| SummaryRow {
            device: device.to_string(),
            algorithm,
            implementation,
            encrypt_avg_ms: enc_sum / count as f64,
            decrypt_avg_ms: dec_sum / count as f64,
        })
        .collect())
}
