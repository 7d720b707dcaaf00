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

//! Grouping and pivoting of measurement tables.
//!
//! A pivot groups rows by the cross-product of row and column dimensions
//! and aggregates one metric per cell by arithmetic mean. The result is a
//! small two-dimensional table ready to hand to a chart renderer. Cells
//! with no contributing rows are `None`, an explicit missing marker,
//! never silently zero.

use crate::error::{Error, Result};
use crate::metric::{overhead_pct, speedup, Metric};
use crate::record::Record;
use crate::table::BenchmarkTable;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;

/// A categorical axis a table can be grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// The call path (FFI, Platform Channel, Dart).
    Implementation,
    /// The cipher (AES-GCM 256, ChaCha20-Poly1305).
    Algorithm,
    /// The kilobyte size bucket, ordered numerically.
    DataSizeKb,
    /// The device label stamped at load time.
    Device,
}

impl Dimension {
    /// Axis description for chart labeling.
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Implementation => "Implementation",
            Dimension::Algorithm => "Algorithm",
            Dimension::DataSizeKb => "Data size (KB)",
            Dimension::Device => "Device",
        }
    }

    fn key_part(&self, rec: &Record) -> KeyPart {
        match self {
            Dimension::Implementation => KeyPart::Label(rec.implementation.label().to_string()),
            Dimension::Algorithm => KeyPart::Label(rec.algorithm.label().to_string()),
            Dimension::DataSizeKb => KeyPart::Size(rec.data_size_kb()),
            Dimension::Device => KeyPart::Label(rec.device.clone().unwrap_or_default()),
        }
    }
}

/// One component of a grouping key.
///
/// Size buckets order numerically, labels lexicographically. A given
/// dimension always yields the same variant, so mixed comparisons do not
/// arise in practice.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum KeyPart {
    Size(u64),
    Label(String),
}

impl fmt::Display for KeyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyPart::Size(kb) => write!(f, "{}", kb),
            KeyPart::Label(s) => f.write_str(s),
        }
    }
}

/// What to pivot: row and column dimensions, the cell metric, and
/// optional fixed orderings.
///
/// When `column_order` (or `row_order`) is given, the output contains
/// exactly the named categories in that order; a name with no
/// contributing rows is [`Error::UnknownColumn`] rather than a silently
/// truncated table. Without an ordering, categories appear sorted.
///
/// # Examples
///
/// ```
/// use benchplot_core::{Dimension, Metric, PivotSpec};
///
/// let spec = PivotSpec {
///     rows: &[Dimension::DataSizeKb],
///     columns: &[Dimension::Implementation],
///     metric: Metric::WallTimeAvgMs,
///     row_order: None,
///     column_order: Some(&["FFI", "Platform Channel", "Dart"]),
/// };
/// assert_eq!(spec.metric, Metric::WallTimeAvgMs);
/// ```
#[derive(Debug, Clone)]
pub struct PivotSpec<'a> {
    /// Dimensions forming the row key, joined with " / " in row labels.
    pub rows: &'a [Dimension],
    /// Dimensions forming the column key, joined with " - " in column labels.
    pub columns: &'a [Dimension],
    /// The metric aggregated into each cell.
    pub metric: Metric,
    /// Optional fixed row selection and ordering by display label.
    pub row_order: Option<&'a [&'a str]>,
    /// Optional fixed column selection and ordering by display label.
    pub column_order: Option<&'a [&'a str]>,
}

/// A pivoted two-dimensional table of mean-aggregated metric values.
#[derive(Debug, Clone, PartialEq)]
pub struct PivotTable {
    row_labels: Vec<String>,
    columns: Vec<String>,
    cells: Vec<Vec<Option<f64>>>,
}

impl PivotTable {
    /// Build a pivot table directly from its parts.
    ///
    /// Intended for tests and for derived tables; `cells` must be
    /// rectangular with `row_labels.len()` rows of `columns.len()` cells.
    ///
    /// # Panics
    ///
    /// Panics when the cell matrix does not match the label dimensions.
    pub fn from_parts(
        row_labels: Vec<String>,
        columns: Vec<String>,
        cells: Vec<Vec<Option<f64>>>,
    ) -> Self {
        assert_eq!(cells.len(), row_labels.len(), "cell rows match row labels");
        for row in &cells {
            assert_eq!(row.len(), columns.len(), "cell row width matches columns");
        }
        PivotTable {
            row_labels,
            columns,
            cells,
        }
    }

    pub(crate) fn build(table: &BenchmarkTable, spec: &PivotSpec<'_>) -> Result<PivotTable> {
        if table.is_empty() {
            return Err(Error::EmptyResultSet {
                context: format!("pivot of {}", spec.metric.label()),
            });
        }

        // Mean aggregation: accumulate (sum, count) per cell. BTreeMap
        // keys give the default sorted row ordering for free.
        let mut grouped: BTreeMap<Vec<KeyPart>, HashMap<String, (f64, u64)>> = BTreeMap::new();
        let mut observed_columns: BTreeSet<String> = BTreeSet::new();

        for rec in table.records() {
            let row_key: Vec<KeyPart> = spec.rows.iter().map(|d| d.key_part(rec)).collect();
            let column = spec
                .columns
                .iter()
                .map(|d| d.key_part(rec).to_string())
                .collect::<Vec<_>>()
                .join(" - ");
            let value = spec.metric.eval(rec)?;

            observed_columns.insert(column.clone());
            let cell = grouped
                .entry(row_key)
                .or_default()
                .entry(column)
                .or_insert((0.0, 0));
            cell.0 += value;
            cell.1 += 1;
        }

        let columns = select_order(spec.column_order, &observed_columns)?;

        let mut labeled_rows: Vec<(String, HashMap<String, (f64, u64)>)> = grouped
            .into_iter()
            .map(|(key, cols)| {
                let label = key
                    .iter()
                    .map(|p| p.to_string())
                    .collect::<Vec<_>>()
                    .join(" / ");
                (label, cols)
            })
            .collect();

        if let Some(order) = spec.row_order {
            let observed: BTreeSet<String> =
                labeled_rows.iter().map(|(l, _)| l.clone()).collect();
            let wanted = select_order(Some(order), &observed)?;
            let mut reordered = Vec::with_capacity(wanted.len());
            for label in wanted {
                if let Some(row) = labeled_rows.iter().find(|(l, _)| *l == label) {
                    reordered.push(row.clone());
                }
            }
            labeled_rows = reordered;
        }

        let mut row_labels = Vec::with_capacity(labeled_rows.len());
        let mut cells = Vec::with_capacity(labeled_rows.len());
        for (label, cols) in labeled_rows {
            let row: Vec<Option<f64>> = columns
                .iter()
                .map(|c| cols.get(c).map(|(sum, count)| sum / *count as f64))
                .collect();
            row_labels.push(label);
            cells.push(row);
        }

        Ok(PivotTable {
            row_labels,
            columns,
            cells,
        })
    }

    /// Row display labels, in output order.
    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    /// Column display labels, in output order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.row_labels.len()
    }

    /// Number of columns.
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Cell value at (row, column), `None` when no rows contributed.
    pub fn cell(&self, row: usize, column: usize) -> Option<f64> {
        self.cells
            .get(row)
            .and_then(|r| r.get(column))
            .copied()
            .flatten()
    }

    /// Index of a column by label.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownColumn`] when the label is absent.
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| Error::UnknownColumn {
                name: name.to_string(),
                available: self.columns.join(", "),
            })
    }

    /// All values of one column, by row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownColumn`] when the label is absent.
    pub fn column_values(&self, name: &str) -> Result<Vec<Option<f64>>> {
        let idx = self.column_index(name)?;
        Ok(self.cells.iter().map(|row| row[idx]).collect())
    }

    /// Iterate over all present cell values.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.cells.iter().flatten().filter_map(|v| *v)
    }

    /// Derive a speedup table against a baseline column.
    ///
    /// Every other column `c` becomes `"<c> speedup"` holding
    /// `baseline / c` per row. Cells where either side is missing stay
    /// missing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownColumn`] when the baseline is absent.
    pub fn speedup_vs(&self, baseline: &str) -> Result<PivotTable> {
        self.derive_against(baseline, |cand, base| speedup(base, cand), "speedup")
    }

    /// Derive a percentage-overhead table against a baseline column.
    ///
    /// Every other column `c` becomes `"<c> overhead (%)"` holding
    /// `(c / baseline - 1) * 100` per row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownColumn`] when the baseline is absent.
    pub fn overhead_vs(&self, baseline: &str) -> Result<PivotTable> {
        self.derive_against(baseline, overhead_pct, "overhead (%)")
    }

    fn derive_against(
        &self,
        baseline: &str,
        f: impl Fn(f64, f64) -> f64,
        suffix: &str,
    ) -> Result<PivotTable> {
        let base_idx = self.column_index(baseline)?;

        let columns: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != base_idx)
            .map(|(_, c)| format!("{} {}", c, suffix))
            .collect();

        let cells: Vec<Vec<Option<f64>>> = self
            .cells
            .iter()
            .map(|row| {
                let base = row[base_idx];
                row.iter()
                    .enumerate()
                    .filter(|(i, _)| *i != base_idx)
                    .map(|(_, cand)| match (cand, base) {
                        (Some(cand), Some(base)) if *cand != 0.0 && base != 0.0 => {
                            Some(f(*cand, base))
                        }
                        _ => None,
                    })
                    .collect()
            })
            .collect();

        Ok(PivotTable {
            row_labels: self.row_labels.clone(),
            columns,
            cells,
        })
    }
}

/// Resolve a category ordering against the observed category set.
///
/// `None` keeps the sorted observed order. `Some` selects exactly the
/// named categories in the given order; an absent name is an error.
fn select_order(order: Option<&[&str]>, observed: &BTreeSet<String>) -> Result<Vec<String>> {
    match order {
        None => Ok(observed.iter().cloned().collect()),
        Some(names) => names
            .iter()
            .map(|name| {
                if observed.contains(*name) {
                    Ok((*name).to_string())
                } else {
                    Err(Error::UnknownColumn {
                        name: (*name).to_string(),
                        available: observed.iter().cloned().collect::<Vec<_>>().join(", "),
                    })
                }
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::{Algorithm, Implementation};

    fn rec(
        imp: Implementation,
        alg: Algorithm,
        size_b: u64,
        iterations: u64,
        wall_sum_ms: f64,
    ) -> Record {
        Record {
            implementation: imp,
            algorithm: alg,
            data_size_bytes: size_b,
            iterations,
            wall_time_sum_ms: wall_sum_ms,
            wall_time_encrypt_ms: wall_sum_ms / 2.0,
            wall_time_decrypt_ms: wall_sum_ms / 2.0,
            cpu_time_ms: wall_sum_ms * 0.9,
            ram_avg_mb: 40.0,
            ram_peak_mb: 50.0,
            device: None,
        }
    }

    fn spec<'a>(column_order: Option<&'a [&'a str]>) -> PivotSpec<'a> {
        PivotSpec {
            rows: &[Dimension::DataSizeKb],
            columns: &[Dimension::Implementation],
            metric: Metric::WallTimeAvgMs,
            row_order: None,
            column_order,
        }
    }

    #[test]
    fn test_mean_aggregation_of_duplicate_cells() {
        // Two samples for the same (FFI, AES-GCM 256, 10 KB) cell with
        // per-call averages 2.0 and 4.0 must pivot to a single 3.0 cell.
        let table = BenchmarkTable::from_records(vec![
            rec(Implementation::Ffi, Algorithm::AesGcm256, 10 * 1024, 10, 20.0),
            rec(Implementation::Ffi, Algorithm::AesGcm256, 10 * 1024, 10, 40.0),
        ]);
        let pivot = table.pivot(&spec(None)).unwrap();
        assert_eq!(pivot.n_rows(), 1);
        assert_eq!(pivot.row_labels(), &["10".to_string()]);
        assert!((pivot.cell(0, 0).unwrap() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_cells_are_none_not_zero() {
        let table = BenchmarkTable::from_records(vec![
            rec(Implementation::Ffi, Algorithm::AesGcm256, 1024, 10, 20.0),
            rec(Implementation::Dart, Algorithm::AesGcm256, 2048, 10, 80.0),
        ]);
        let pivot = table.pivot(&spec(None)).unwrap();
        // Columns sorted: Dart, FFI. Dart has no 1 KB sample.
        assert_eq!(pivot.columns(), &["Dart".to_string(), "FFI".to_string()]);
        assert_eq!(pivot.cell(0, 0), None);
        assert!(pivot.cell(0, 1).is_some());
    }

    #[test]
    fn test_column_order_is_selection_and_ordering() {
        let table = BenchmarkTable::from_records(vec![
            rec(Implementation::Ffi, Algorithm::AesGcm256, 1024, 10, 20.0),
            rec(Implementation::PlatformChannel, Algorithm::AesGcm256, 1024, 10, 30.0),
            rec(Implementation::Dart, Algorithm::AesGcm256, 1024, 10, 90.0),
        ]);
        let order = ["FFI", "Platform Channel", "Dart"];
        let pivot = table.pivot(&spec(Some(&order))).unwrap();
        assert_eq!(
            pivot.columns(),
            &["FFI".to_string(), "Platform Channel".to_string(), "Dart".to_string()]
        );
    }

    #[test]
    fn test_column_order_with_absent_category_fails() {
        let table = BenchmarkTable::from_records(vec![
            rec(Implementation::Ffi, Algorithm::AesGcm256, 1024, 10, 20.0),
            rec(Implementation::PlatformChannel, Algorithm::AesGcm256, 1024, 10, 30.0),
        ]);
        let order = ["FFI", "Platform Channel", "Dart"];
        let err = table.pivot(&spec(Some(&order))).unwrap_err();
        assert_eq!(
            err,
            Error::UnknownColumn {
                name: "Dart".to_string(),
                available: "FFI, Platform Channel".to_string(),
            }
        );
    }

    #[test]
    fn test_pivot_is_order_independent() {
        let rows = vec![
            rec(Implementation::Ffi, Algorithm::AesGcm256, 1024, 10, 20.0),
            rec(Implementation::Dart, Algorithm::AesGcm256, 1024, 10, 90.0),
            rec(Implementation::Ffi, Algorithm::AesGcm256, 10 * 1024, 10, 35.0),
            rec(Implementation::Dart, Algorithm::AesGcm256, 10 * 1024, 10, 120.0),
        ];
        let forward = BenchmarkTable::from_records(rows.clone())
            .pivot(&spec(None))
            .unwrap();
        let mut shuffled = rows;
        shuffled.reverse();
        shuffled.swap(0, 2);
        let backward = BenchmarkTable::from_records(shuffled)
            .pivot(&spec(None))
            .unwrap();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_size_rows_sort_numerically() {
        let table = BenchmarkTable::from_records(vec![
            rec(Implementation::Ffi, Algorithm::AesGcm256, 1000 * 1024, 10, 20.0),
            rec(Implementation::Ffi, Algorithm::AesGcm256, 2 * 1024, 10, 20.0),
            rec(Implementation::Ffi, Algorithm::AesGcm256, 100 * 1024, 10, 20.0),
        ]);
        let pivot = table.pivot(&spec(None)).unwrap();
        assert_eq!(
            pivot.row_labels(),
            &["2".to_string(), "100".to_string(), "1000".to_string()]
        );
    }

    #[test]
    fn test_composite_row_key_display() {
        let mut a = rec(Implementation::Ffi, Algorithm::AesGcm256, 1024, 10, 20.0);
        a.device = Some("Pixel 8 Pro".to_string());
        let mut b = rec(Implementation::Ffi, Algorithm::ChaCha20Poly1305, 1024, 10, 25.0);
        b.device = Some("Pixel 8 Pro".to_string());
        let table = BenchmarkTable::from_records(vec![a, b]);
        let pivot = table
            .pivot(&PivotSpec {
                rows: &[Dimension::Device, Dimension::Algorithm],
                columns: &[Dimension::Implementation],
                metric: Metric::WallTimeAvgMs,
                row_order: None,
                column_order: None,
            })
            .unwrap();
        assert_eq!(
            pivot.row_labels(),
            &[
                "Pixel 8 Pro / AES-GCM 256".to_string(),
                "Pixel 8 Pro / ChaCha20-Poly1305".to_string(),
            ]
        );
    }

    #[test]
    fn test_row_order_fixes_implementation_axis() {
        let table = BenchmarkTable::from_records(vec![
            rec(Implementation::Ffi, Algorithm::AesGcm256, 1024, 10, 20.0),
            rec(Implementation::PlatformChannel, Algorithm::AesGcm256, 1024, 10, 30.0),
            rec(Implementation::Dart, Algorithm::AesGcm256, 1024, 10, 90.0),
        ]);
        let order = ["FFI", "Platform Channel", "Dart"];
        let pivot = table
            .pivot(&PivotSpec {
                rows: &[Dimension::Implementation],
                columns: &[Dimension::Algorithm],
                metric: Metric::WallTimeAvgMs,
                row_order: Some(&order),
                column_order: None,
            })
            .unwrap();
        assert_eq!(
            pivot.row_labels(),
            &["FFI".to_string(), "Platform Channel".to_string(), "Dart".to_string()]
        );
    }

    #[test]
    fn test_empty_table_pivot_is_empty_result_set() {
        let table = BenchmarkTable::new();
        let err = table.pivot(&spec(None)).unwrap_err();
        assert!(matches!(err, Error::EmptyResultSet { .. }));
    }

    #[test]
    fn test_zero_iterations_propagates() {
        let table = BenchmarkTable::from_records(vec![rec(
            Implementation::Ffi,
            Algorithm::AesGcm256,
            1024,
            0,
            20.0,
        )]);
        let err = table.pivot(&spec(None)).unwrap_err();
        assert!(matches!(err, Error::DivideByIterations { .. }));
    }

    #[test]
    fn test_speedup_vs_baseline() {
        let pivot = PivotTable::from_parts(
            vec!["10".to_string()],
            vec!["Dart".to_string(), "FFI".to_string(), "Platform Channel".to_string()],
            vec![vec![Some(90.0), Some(9.0), Some(30.0)]],
        );
        let speedup = pivot.speedup_vs("Dart").unwrap();
        assert_eq!(
            speedup.columns(),
            &["FFI speedup".to_string(), "Platform Channel speedup".to_string()]
        );
        assert!((speedup.cell(0, 0).unwrap() - 10.0).abs() < 1e-9);
        assert!((speedup.cell(0, 1).unwrap() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_overhead_vs_baseline() {
        let pivot = PivotTable::from_parts(
            vec!["10".to_string()],
            vec!["Dart".to_string(), "FFI".to_string(), "Platform Channel".to_string()],
            vec![vec![Some(20.0), Some(10.0), Some(12.0)]],
        );
        let overhead = pivot.overhead_vs("FFI").unwrap();
        assert_eq!(
            overhead.columns(),
            &["Dart overhead (%)".to_string(), "Platform Channel overhead (%)".to_string()]
        );
        assert!((overhead.cell(0, 0).unwrap() - 100.0).abs() < 1e-9);
        assert!((overhead.cell(0, 1).unwrap() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_derived_table_with_missing_baseline_cell() {
        let pivot = PivotTable::from_parts(
            vec!["10".to_string(), "100".to_string()],
            vec!["Dart".to_string(), "FFI".to_string()],
            vec![vec![Some(90.0), Some(9.0)], vec![None, Some(12.0)]],
        );
        let speedup = pivot.speedup_vs("Dart").unwrap();
        assert!(speedup.cell(0, 0).is_some());
        assert_eq!(speedup.cell(1, 0), None);
    }

    #[test]
    fn test_missing_baseline_column_fails() {
        let pivot = PivotTable::from_parts(
            vec!["10".to_string()],
            vec!["FFI".to_string()],
            vec![vec![Some(9.0)]],
        );
        let err = pivot.speedup_vs("Dart").unwrap_err();
        assert!(matches!(err, Error::UnknownColumn { .. }));
    }
}
