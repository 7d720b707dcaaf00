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

//! Basic usage example: parse measurement text, pivot it, and print the
//! aggregated summary.

use benchplot_core::{Dimension, Metric, PivotSpec};
use benchplot_csv::{read_table_reader, write_summary_writer, ReadConfig};

const MEASUREMENTS: &str = "\
Implementation;Algorithm;DataSize_B;Iterations;WallTime_Sum_ms;WallTime_Encrypt_ms;WallTime_Decrypt_ms;CPUTime_ms;RAM_Avg_MB;RAM_Peak_MB
Enum.ffi;Enum.aesGcm;10240;100;200.0;110.0;90.0;180.0;40.0;48.0
Enum.platformChannel;Enum.aesGcm;10240;100;600.0;330.0;270.0;520.0;44.0;52.0
Enum.dart;Enum.aesGcm;10240;100;2000.0;1100.0;900.0;1900.0;60.0;75.0
Enum.ffi;Enum.aesGcm;102400;100;900.0;500.0;400.0;800.0;42.0;50.0
Enum.platformChannel;Enum.aesGcm;102400;100;1800.0;1000.0;800.0;1500.0;46.0;55.0
Enum.dart;Enum.aesGcm;102400;100;9000.0;5000.0;4000.0;8500.0;64.0;80.0
";

fn main() {
    let table = read_table_reader(
        MEASUREMENTS.as_bytes(),
        Some("Pixel 8 Pro"),
        &ReadConfig::default(),
    )
    .expect("parse measurements");

    println!("=== Wall time pivot (ms) ===\n");
    let pivot = table
        .pivot(&PivotSpec {
            rows: &[Dimension::DataSizeKb],
            columns: &[Dimension::Implementation],
            metric: Metric::WallTimeAvgMs,
            row_order: None,
            column_order: Some(&["FFI", "Platform Channel", "Dart"]),
        })
        .expect("pivot");

    print!("{:>10}", "KB");
    for column in pivot.columns() {
        print!("{:>20}", column);
    }
    println!();
    for (row_idx, label) in pivot.row_labels().iter().enumerate() {
        print!("{:>10}", label);
        for col_idx in 0..pivot.n_columns() {
            match pivot.cell(row_idx, col_idx) {
                Some(v) => print!("{:>20.3}", v),
                None => print!("{:>20}", "-"),
            }
        }
        println!();
    }

    println!("\n=== Speedup over Dart ===\n");
    let speedup = pivot.speedup_vs("Dart").expect("Dart column present");
    for (row_idx, label) in speedup.row_labels().iter().enumerate() {
        for (col_idx, column) in speedup.columns().iter().enumerate() {
            if let Some(v) = speedup.cell(row_idx, col_idx) {
                println!("{} KB, {}: {:.1}x", label, column, v);
            }
        }
    }

    println!("\n=== Summary table ===\n");
    let rows = table.summarize("Pixel 8 Pro").expect("summary");
    let mut out = Vec::new();
    write_summary_writer(&mut out, &rows).expect("write summary");
    println!("{}", String::from_utf8(out).expect("utf-8"));
}
