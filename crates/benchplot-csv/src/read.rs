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

//! Load measurement files into normalized tables.

use crate::error::{CsvError, Result};
use benchplot_core::{Algorithm, BenchmarkTable, Implementation, Record};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Configuration for measurement file parsing.
///
/// # Examples
///
/// ```
/// use benchplot_csv::ReadConfig;
///
/// let config = ReadConfig::default();
/// assert_eq!(config.delimiter, b';');
/// assert!(config.trim);
/// ```
#[derive(Debug, Clone)]
pub struct ReadConfig {
    /// Field delimiter character (default: `;`).
    pub delimiter: u8,
    /// Whether to trim incidental whitespace from headers and fields
    /// (default: `true`).
    pub trim: bool,
}

impl Default for ReadConfig {
    fn default() -> Self {
        ReadConfig {
            delimiter: b';',
            trim: true,
        }
    }
}

/// Positions of the required measurement columns in the header row.
struct ColumnIndex {
    implementation: usize,
    algorithm: usize,
    data_size_bytes: usize,
    iterations: usize,
    wall_time_sum_ms: usize,
    wall_time_encrypt_ms: usize,
    wall_time_decrypt_ms: usize,
    cpu_time_ms: usize,
    ram_avg_mb: usize,
    ram_peak_mb: usize,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| -> Result<usize> {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| CsvError::MissingColumn(name.to_string()))
        };
        Ok(ColumnIndex {
            implementation: find("Implementation")?,
            algorithm: find("Algorithm")?,
            data_size_bytes: find("DataSize_B")?,
            iterations: find("Iterations")?,
            wall_time_sum_ms: find("WallTime_Sum_ms")?,
            wall_time_encrypt_ms: find("WallTime_Encrypt_ms")?,
            wall_time_decrypt_ms: find("WallTime_Decrypt_ms")?,
            cpu_time_ms: find("CPUTime_ms")?,
            ram_avg_mb: find("RAM_Avg_MB")?,
            ram_peak_mb: find("RAM_Peak_MB")?,
        })
    }

    fn parse_row(
        &self,
        record: &StringRecord,
        row: usize,
        device: Option<&str>,
    ) -> Result<Record> {
        let implementation = Implementation::parse_token(field(record, self.implementation))
            .map_err(|source| CsvError::Row { row, source })?;
        let algorithm = Algorithm::parse_token(field(record, self.algorithm))
            .map_err(|source| CsvError::Row { row, source })?;

        Ok(Record {
            implementation,
            algorithm,
            data_size_bytes: parse_int(record, self.data_size_bytes, "DataSize_B", row)?,
            iterations: parse_int(record, self.iterations, "Iterations", row)?,
            wall_time_sum_ms: parse_float(record, self.wall_time_sum_ms, "WallTime_Sum_ms", row)?,
            wall_time_encrypt_ms: parse_float(
                record,
                self.wall_time_encrypt_ms,
                "WallTime_Encrypt_ms",
                row,
            )?,
            wall_time_decrypt_ms: parse_float(
                record,
                self.wall_time_decrypt_ms,
                "WallTime_Decrypt_ms",
                row,
            )?,
            cpu_time_ms: parse_float(record, self.cpu_time_ms, "CPUTime_ms", row)?,
            ram_avg_mb: parse_float(record, self.ram_avg_mb, "RAM_Avg_MB", row)?,
            ram_peak_mb: parse_float(record, self.ram_peak_mb, "RAM_Peak_MB", row)?,
            device: device.map(String::from),
        })
    }
}

fn field<'a>(record: &'a StringRecord, idx: usize) -> &'a str {
    record.get(idx).unwrap_or_default()
}

fn parse_int(record: &StringRecord, idx: usize, column: &str, row: usize) -> Result<u64> {
    let value = field(record, idx);
    value.parse::<u64>().map_err(|_| CsvError::TypeMismatch {
        column: column.to_string(),
        expected: "integer".to_string(),
        value: value.to_string(),
        row,
    })
}

fn parse_float(record: &StringRecord, idx: usize, column: &str, row: usize) -> Result<f64> {
    let value = field(record, idx);
    value.parse::<f64>().map_err(|_| CsvError::TypeMismatch {
        column: column.to_string(),
        expected: "float".to_string(),
        value: value.to_string(),
        row,
    })
}

/// Load one measurement file, optionally stamping a device label on
/// every row.
///
/// # Errors
///
/// Returns [`CsvError::SourceNotFound`] when the path does not resolve,
/// and parse/normalization errors with row context otherwise.
///
/// # Examples
///
/// ```no_run
/// use benchplot_csv::read_table;
///
/// let table = read_table("benchmark_pixel.csv", Some("Pixel 8 Pro")).unwrap();
/// assert!(!table.is_empty());
/// ```
pub fn read_table<P: AsRef<Path>>(path: P, device: Option<&str>) -> Result<BenchmarkTable> {
    read_table_with_config(path, device, &ReadConfig::default())
}

/// Load one measurement file with explicit parsing configuration.
///
/// # Errors
///
/// Same conditions as [`read_table`].
pub fn read_table_with_config<P: AsRef<Path>>(
    path: P,
    device: Option<&str>,
    config: &ReadConfig,
) -> Result<BenchmarkTable> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(CsvError::SourceNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path)?;
    read_table_reader(file, device, config)
}

/// Load a measurement table from any reader.
///
/// Blank lines are ignored; headers and fields are whitespace-trimmed
/// when the configuration says so.
///
/// # Errors
///
/// Parse and normalization errors carry 1-based row numbers, counting
/// the header as row 1.
pub fn read_table_reader<R: Read>(
    reader: R,
    device: Option<&str>,
    config: &ReadConfig,
) -> Result<BenchmarkTable> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(true)
        .trim(if config.trim { Trim::All } else { Trim::None })
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let index = ColumnIndex::resolve(&headers)?;

    let mut table = BenchmarkTable::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result?;
        table.push(index.parse_row(&record, i + 2, device)?);
    }
    Ok(table)
}

/// The outcome of combining several measurement sources.
#[derive(Debug)]
pub struct CombinedSources {
    /// All rows from the sources that resolved, each stamped with its
    /// device label.
    pub table: BenchmarkTable,
    /// Paths that did not resolve and were skipped.
    pub skipped: Vec<PathBuf>,
}

/// Load and concatenate several `(device label, path)` sources.
///
/// A missing file is skipped and reported in
/// [`CombinedSources::skipped`] rather than failing the whole
/// combination; any other error is fatal. Callers decide what an
/// entirely empty result means.
///
/// # Errors
///
/// Returns parse or I/O errors from sources that do exist.
pub fn read_tables(sources: &[(String, PathBuf)]) -> Result<CombinedSources> {
    let mut table = BenchmarkTable::new();
    let mut skipped = Vec::new();
    for (device, path) in sources {
        match read_table(path, Some(device)) {
            Ok(loaded) => table.merge(loaded),
            Err(CsvError::SourceNotFound { path }) => skipped.push(path),
            Err(other) => return Err(other),
        }
    }
    Ok(CombinedSources { table, skipped })
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchplot_core::Metric;

    const HEADER: &str = "Implementation;Algorithm;DataSize_B;Iterations;WallTime_Sum_ms;WallTime_Encrypt_ms;WallTime_Decrypt_ms;CPUTime_ms;RAM_Avg_MB;RAM_Peak_MB";

    fn parse(body: &str) -> Result<BenchmarkTable> {
        read_table_reader(body.as_bytes(), None, &ReadConfig::default())
    }

    #[test]
    fn test_parses_dotted_tokens_and_derives() {
        let data = format!(
            "{}\nEnum.ffi;Enum.aesGcm;1024000;100;500.0;260.0;240.0;450.0;42.0;55.0\n",
            HEADER
        );
        let table = parse(&data).unwrap();
        assert_eq!(table.len(), 1);
        let rec = &table.records()[0];
        assert_eq!(rec.implementation, Implementation::Ffi);
        assert_eq!(rec.algorithm, Algorithm::AesGcm256);
        assert_eq!(rec.data_size_kb(), 1000);
        assert!((Metric::WallTimeAvgMs.eval(rec).unwrap() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_blank_lines_ignored() {
        let data = format!(
            "{}\n\nEnum.ffi;Enum.aesGcm;1024;10;5.0;3.0;2.0;4.0;40.0;48.0\n\n\nEnum.dart;Enum.chaChaPoly;1024;10;50.0;30.0;20.0;45.0;60.0;70.0\n",
            HEADER
        );
        let table = parse(&data).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_header_whitespace_tolerated() {
        let data = " Implementation ; Algorithm ;DataSize_B;Iterations;WallTime_Sum_ms;WallTime_Encrypt_ms;WallTime_Decrypt_ms;CPUTime_ms;RAM_Avg_MB; RAM_Peak_MB \nEnum.ffi;Enum.aesGcm;1024;10;5.0;3.0;2.0;4.0;40.0;48.0\n";
        let table = parse(data).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_cased_and_lowercased_tokens() {
        let data = format!(
            "{}\nEnum.platformChannel;Enum.aesGcm;1024;10;5.0;3.0;2.0;4.0;40.0;48.0\nEnum.platformchannel;Enum.aesgcm;1024;10;5.0;3.0;2.0;4.0;40.0;48.0\n",
            HEADER
        );
        let table = parse(&data).unwrap();
        assert_eq!(
            table.records()[0].implementation,
            Implementation::PlatformChannel
        );
        assert_eq!(
            table.records()[1].implementation,
            Implementation::PlatformChannel
        );
    }

    #[test]
    fn test_missing_column_fails() {
        let data = "Implementation;Algorithm;DataSize_B\nEnum.ffi;Enum.aesGcm;1024\n";
        let err = parse(data).unwrap_err();
        assert!(matches!(err, CsvError::MissingColumn(name) if name == "Iterations"));
    }

    #[test]
    fn test_unmapped_token_reports_row() {
        let data = format!(
            "{}\nEnum.ffi;Enum.aesGcm;1024;10;5.0;3.0;2.0;4.0;40.0;48.0\nEnum.jni;Enum.aesGcm;1024;10;5.0;3.0;2.0;4.0;40.0;48.0\n",
            HEADER
        );
        let err = parse(&data).unwrap_err();
        match err {
            CsvError::Row { row, source } => {
                assert_eq!(row, 3);
                assert!(matches!(
                    source,
                    benchplot_core::Error::UnmappedCategory { .. }
                ));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_type_mismatch_reports_column_and_row() {
        let data = format!(
            "{}\nEnum.ffi;Enum.aesGcm;lots;10;5.0;3.0;2.0;4.0;40.0;48.0\n",
            HEADER
        );
        let err = parse(&data).unwrap_err();
        match err {
            CsvError::TypeMismatch { column, row, .. } => {
                assert_eq!(column, "DataSize_B");
                assert_eq!(row, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_device_label_stamped() {
        let data = format!(
            "{}\nEnum.ffi;Enum.aesGcm;1024;10;5.0;3.0;2.0;4.0;40.0;48.0\n",
            HEADER
        );
        let table =
            read_table_reader(data.as_bytes(), Some("Pixel 8 Pro"), &ReadConfig::default())
                .unwrap();
        assert_eq!(table.records()[0].device.as_deref(), Some("Pixel 8 Pro"));
    }

    #[test]
    fn test_missing_path_is_source_not_found() {
        let err = read_table("definitely/not/here.csv", None).unwrap_err();
        assert!(matches!(err, CsvError::SourceNotFound { .. }));
    }
}
