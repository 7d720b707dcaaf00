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

//! Write and re-read the aggregated summary table.
//!
//! The summary is emitted in the same semicolon-delimited shape as the
//! measurement inputs, with milliseconds at 4 decimal places and the
//! percentage difference at 2. Re-reading a written file restores the
//! same rows within that formatting tolerance.

use crate::error::{CsvError, Result};
use crate::read::ReadConfig;
use benchplot_core::{Algorithm, Implementation, SummaryRow};
use csv::{ReaderBuilder, Trim, WriterBuilder};
use std::io::Write;
use std::path::Path;

/// Header row of the summary table, in output order.
pub const SUMMARY_HEADER: [&str; 6] = [
    "Device",
    "Algorithm",
    "Implementation",
    "Encrypt_Avg_ms",
    "Decrypt_Avg_ms",
    "Encrypt_Decrypt_Diff_pct",
];

/// Write summary rows to a semicolon-delimited file.
///
/// The target is overwritten whole; there is no partial-write recovery
/// at this data scale.
///
/// # Errors
///
/// Returns I/O and CSV writer errors.
pub fn write_summary<P: AsRef<Path>>(path: P, rows: &[SummaryRow]) -> Result<()> {
    let file = std::fs::File::create(path.as_ref())?;
    write_summary_writer(file, rows)
}

/// Write summary rows to any writer.
///
/// # Errors
///
/// Returns CSV writer errors.
///
/// # Examples
///
/// ```
/// use benchplot_core::{Algorithm, Implementation, SummaryRow};
/// use benchplot_csv::write_summary_writer;
///
/// let rows = vec![SummaryRow {
///     device: "Pixel 8 Pro".to_string(),
///     algorithm: Algorithm::AesGcm256,
///     implementation: Implementation::Ffi,
///     encrypt_avg_ms: 2.5,
///     decrypt_avg_ms: 2.0,
/// }];
///
/// let mut out = Vec::new();
/// write_summary_writer(&mut out, &rows).unwrap();
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.contains("Pixel 8 Pro;AES-GCM 256;FFI;2.5000;2.0000;20.00%"));
/// ```
pub fn write_summary_writer<W: Write>(writer: W, rows: &[SummaryRow]) -> Result<()> {
    let mut wtr = WriterBuilder::new().delimiter(b';').from_writer(writer);
    wtr.write_record(SUMMARY_HEADER)?;
    for row in rows {
        wtr.write_record([
            row.device.as_str(),
            row.algorithm.label(),
            row.implementation.label(),
            &format!("{:.4}", row.encrypt_avg_ms),
            &format!("{:.4}", row.decrypt_avg_ms),
            &format!("{:.2}%", row.encrypt_decrypt_diff_pct()),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Re-read a summary table written by [`write_summary`].
///
/// The percentage-difference column is derived, so it is ignored on read
/// and recomputed from the timing columns.
///
/// # Errors
///
/// Returns [`CsvError::SourceNotFound`] for a missing path and parse
/// errors with row context otherwise.
pub fn read_summary<P: AsRef<Path>>(path: P) -> Result<Vec<SummaryRow>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(CsvError::SourceNotFound {
            path: path.to_path_buf(),
        });
    }
    let config = ReadConfig::default();
    let mut rdr = ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(true)
        .trim(Trim::All)
        .from_path(path)?;

    let headers = rdr.headers()?.clone();
    let find = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| CsvError::MissingColumn(name.to_string()))
    };
    let device_idx = find("Device")?;
    let algorithm_idx = find("Algorithm")?;
    let implementation_idx = find("Implementation")?;
    let encrypt_idx = find("Encrypt_Avg_ms")?;
    let decrypt_idx = find("Decrypt_Avg_ms")?;

    let mut rows = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let row = i + 2;
        let record = result?;
        let get = |idx: usize| record.get(idx).unwrap_or_default();

        let algorithm = Algorithm::parse_token(get(algorithm_idx))
            .map_err(|source| CsvError::Row { row, source })?;
        let implementation = Implementation::parse_token(get(implementation_idx))
            .map_err(|source| CsvError::Row { row, source })?;
        let parse_ms = |idx: usize, column: &str| -> Result<f64> {
            let value = get(idx);
            value.parse::<f64>().map_err(|_| CsvError::TypeMismatch {
                column: column.to_string(),
                expected: "float".to_string(),
                value: value.to_string(),
                row,
            })
        };

        rows.push(SummaryRow {
            device: get(device_idx).to_string(),
            algorithm,
            implementation,
            encrypt_avg_ms: parse_ms(encrypt_idx, "Encrypt_Avg_ms")?,
            decrypt_avg_ms: parse_ms(decrypt_idx, "Decrypt_Avg_ms")?,
        });
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<SummaryRow> {
        vec![
            SummaryRow {
                device: "Pixel 8 Pro".to_string(),
                algorithm: Algorithm::AesGcm256,
                implementation: Implementation::Ffi,
                encrypt_avg_ms: 2.51239,
                decrypt_avg_ms: 2.0011,
            },
            SummaryRow {
                device: "Pixel 8 Pro".to_string(),
                algorithm: Algorithm::ChaCha20Poly1305,
                implementation: Implementation::Dart,
                encrypt_avg_ms: 40.5,
                decrypt_avg_ms: 39.25,
            },
        ]
    }

    #[test]
    fn test_header_and_formatting() {
        let mut out = Vec::new();
        write_summary_writer(&mut out, &sample_rows()).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Device;Algorithm;Implementation;Encrypt_Avg_ms;Decrypt_Avg_ms;Encrypt_Decrypt_Diff_pct"
        );
        let first = lines.next().unwrap();
        assert!(first.starts_with("Pixel 8 Pro;AES-GCM 256;FFI;2.5124;2.0011;"));
        assert!(first.ends_with('%'));
    }

    #[test]
    fn test_round_trip_within_formatting_tolerance() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.csv");
        let rows = sample_rows();
        write_summary(&path, &rows).unwrap();

        let reread = read_summary(&path).unwrap();
        assert_eq!(reread.len(), rows.len());
        for (a, b) in rows.iter().zip(&reread) {
            assert_eq!(a.device, b.device);
            assert_eq!(a.algorithm, b.algorithm);
            assert_eq!(a.implementation, b.implementation);
            // Milliseconds survive at 4 decimal places.
            assert!((a.encrypt_avg_ms - b.encrypt_avg_ms).abs() < 5e-5);
            assert!((a.decrypt_avg_ms - b.decrypt_avg_ms).abs() < 5e-5);
        }
    }

    #[test]
    fn test_read_summary_missing_file() {
        let err = read_summary("no/such/summary.csv").unwrap_err();
        assert!(matches!(err, CsvError::SourceNotFound { .. }));
    }
}
