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

//! Facade-level pipeline tests: parse, pivot, derive, summarize through
//! the re-exported API.

use benchplot::{Dimension, Implementation, Metric, PivotSpec};
use benchplot_csv::{read_table_reader, ReadConfig};

const DATA: &str = "\
Implementation;Algorithm;DataSize_B;Iterations;WallTime_Sum_ms;WallTime_Encrypt_ms;WallTime_Decrypt_ms;CPUTime_ms;RAM_Avg_MB;RAM_Peak_MB
Enum.ffi;Enum.aesGcm;10240;100;200.0;110.0;90.0;180.0;40.0;48.0
Enum.dart;Enum.aesGcm;10240;100;2000.0;1100.0;900.0;1900.0;60.0;75.0
Enum.ffi;Enum.aesGcm;102400;100;900.0;500.0;400.0;800.0;42.0;50.0
Enum.dart;Enum.aesGcm;102400;100;9000.0;5000.0;4000.0;8500.0;64.0;80.0
";

#[test]
fn test_pipeline_through_facade() {
    let table = read_table_reader(DATA.as_bytes(), Some("Pixel 8 Pro"), &ReadConfig::default())
        .expect("parse");
    assert_eq!(table.len(), 4);
    assert_eq!(
        table.implementations(),
        vec![Implementation::Ffi, Implementation::Dart]
    );

    let pivot = table
        .pivot(&PivotSpec {
            rows: &[Dimension::DataSizeKb],
            columns: &[Dimension::Implementation],
            metric: Metric::WallTimeAvgMs,
            row_order: None,
            column_order: Some(&["FFI", "Dart"]),
        })
        .expect("pivot");
    let speedup = pivot.speedup_vs("Dart").expect("baseline present");
    assert_eq!(speedup.columns(), &["FFI speedup".to_string()]);
    assert!((speedup.cell(0, 0).unwrap() - 10.0).abs() < 1e-9);

    let rows = table.summarize("Pixel 8 Pro").expect("summary");
    assert_eq!(rows.len(), 2);
}

#[test]
fn test_relative_metrics_re_exported() {
    assert!((benchplot::speedup(10.0, 2.0) - 5.0).abs() < 1e-9);
    assert!((benchplot::overhead_pct(12.0, 10.0) - 20.0).abs() < 1e-9);
}
