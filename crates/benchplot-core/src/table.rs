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

//! The in-memory measurement table.
//!
//! A [`BenchmarkTable`] is loaded fresh per run, transformed in memory
//! and discarded once the charts are written. Insertion order is
//! irrelevant to downstream consumers; every consumer groups or pivots.

use crate::error::Result;
use crate::pivot::{PivotSpec, PivotTable};
use crate::record::Record;
use crate::summary::{summarize, SummaryRow};
use crate::vocab::{Algorithm, Implementation};

/// A set of normalized measurement records.
///
/// # Examples
///
/// ```
/// use benchplot_core::{Algorithm, BenchmarkTable, Implementation, Record};
///
/// let mut table = BenchmarkTable::new();
/// table.push(Record {
///     implementation: Implementation::Ffi,
///     algorithm: Algorithm::AesGcm256,
///     data_size_bytes: 10 * 1024,
///     iterations: 50,
///     wall_time_sum_ms: 100.0,
///     wall_time_encrypt_ms: 55.0,
///     wall_time_decrypt_ms: 45.0,
///     cpu_time_ms: 90.0,
///     ram_avg_mb: 40.0,
///     ram_peak_mb: 48.0,
///     device: None,
/// });
///
/// assert_eq!(table.len(), 1);
/// assert_eq!(table.algorithms(), vec![Algorithm::AesGcm256]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BenchmarkTable {
    records: Vec<Record>,
}

impl BenchmarkTable {
    /// Create an empty table.
    pub fn new() -> Self {
        BenchmarkTable::default()
    }

    /// Create a table from already-normalized records.
    pub fn from_records(records: Vec<Record>) -> Self {
        BenchmarkTable { records }
    }

    /// Append one record.
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Append all records of another table, used when combining sources.
    pub fn merge(&mut self, other: BenchmarkTable) {
        self.records.extend(other.records);
    }

    /// The normalized records.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows for one algorithm.
    pub fn filter_algorithm(&self, algorithm: Algorithm) -> BenchmarkTable {
        self.filtered(|r| r.algorithm == algorithm)
    }

    /// Rows for one implementation.
    pub fn filter_implementation(&self, implementation: Implementation) -> BenchmarkTable {
        self.filtered(|r| r.implementation == implementation)
    }

    /// Rows for one kilobyte size bucket.
    pub fn filter_data_size_kb(&self, size_kb: u64) -> BenchmarkTable {
        self.filtered(|r| r.data_size_kb() == size_kb)
    }

    fn filtered(&self, keep: impl Fn(&Record) -> bool) -> BenchmarkTable {
        BenchmarkTable {
            records: self.records.iter().filter(|r| keep(r)).cloned().collect(),
        }
    }

    /// Distinct algorithms in first-seen order.
    pub fn algorithms(&self) -> Vec<Algorithm> {
        let mut seen = Vec::new();
        for r in &self.records {
            if !seen.contains(&r.algorithm) {
                seen.push(r.algorithm);
            }
        }
        seen
    }

    /// Distinct implementations in first-seen order.
    pub fn implementations(&self) -> Vec<Implementation> {
        let mut seen = Vec::new();
        for r in &self.records {
            if !seen.contains(&r.implementation) {
                seen.push(r.implementation);
            }
        }
        seen
    }

    /// Distinct kilobyte size buckets, ascending.
    pub fn data_sizes_kb(&self) -> Vec<u64> {
        let mut sizes: Vec<u64> = self.records.iter().map(|r| r.data_size_kb()).collect();
        sizes.sort_unstable();
        sizes.dedup();
        sizes
    }

    /// Distinct device labels in first-seen order, skipping unstamped rows.
    pub fn devices(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for r in &self.records {
            if let Some(device) = &r.device {
                if !seen.iter().any(|d| d == device) {
                    seen.push(device.clone());
                }
            }
        }
        seen
    }

    /// Group and aggregate into a two-dimensional table.
    ///
    /// See [`PivotSpec`] for the knobs and [`PivotTable`] for the result.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyResultSet`](crate::Error::EmptyResultSet) when the
    ///   table has no rows.
    /// - [`Error::DivideByIterations`](crate::Error::DivideByIterations)
    ///   when a per-call metric meets a zero iteration count.
    /// - [`Error::UnknownColumn`](crate::Error::UnknownColumn) when a
    ///   fixed ordering names an absent category.
    pub fn pivot(&self, spec: &PivotSpec<'_>) -> Result<PivotTable> {
        PivotTable::build(self, spec)
    }

    /// Aggregate into the per-device summary rows.
    ///
    /// See [`summarize`] for the exact shape.
    pub fn summarize(&self, device: &str) -> Result<Vec<SummaryRow>> {
        summarize(self, device)
    }
}
