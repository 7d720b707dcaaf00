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

//! Derived metrics over measurement records.
//!
//! Every metric is a pure function of [`Record`] fields; nothing is
//! persisted and the original columns are never mutated. Metrics that
//! average over `iterations` report a zero iteration count as
//! [`Error::DivideByIterations`] instead of yielding `inf` or `NaN`.

use crate::error::{Error, Result};
use crate::record::Record;

/// A derived per-record metric.
///
/// # Examples
///
/// ```
/// use benchplot_core::{Algorithm, Implementation, Metric, Record};
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
/// let avg = Metric::WallTimeAvgMs.eval(&rec).unwrap();
/// assert!((avg - 5.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Metric {
    /// Per-call wall time in milliseconds (`wall_time_sum_ms / iterations`).
    WallTimeAvgMs,
    /// Per-call wall time in seconds, for the cross-device comparisons.
    WallTimeAvgS,
    /// Per-call encrypt wall time in milliseconds.
    EncryptAvgMs,
    /// Per-call decrypt wall time in milliseconds.
    DecryptAvgMs,
    /// Per-call CPU time in milliseconds.
    CpuTimeAvgMs,
    /// Data volume processed per second of average wall time, in MB/s.
    ThroughputMbPerS,
    /// CPU time as a percentage of wall time.
    CpuEfficiencyPct,
    /// Average resident memory in megabytes (not iteration-summed).
    RamAvgMb,
    /// Peak resident memory in megabytes (not iteration-summed).
    RamPeakMb,
}

impl Metric {
    /// Human-readable metric name, used in error messages and axis labels.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::WallTimeAvgMs => "Average wall time (ms)",
            Metric::WallTimeAvgS => "Average wall time (s)",
            Metric::EncryptAvgMs => "Average encrypt time (ms)",
            Metric::DecryptAvgMs => "Average decrypt time (ms)",
            Metric::CpuTimeAvgMs => "Average CPU time (ms)",
            Metric::ThroughputMbPerS => "Throughput (MB/s)",
            Metric::CpuEfficiencyPct => "CPU efficiency (%)",
            Metric::RamAvgMb => "RAM usage, average (MB)",
            Metric::RamPeakMb => "RAM usage, peak (MB)",
        }
    }

    /// Evaluate the metric for one record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivideByIterations`] when the metric requires a
    /// per-call average and the record has `iterations == 0`. The RAM
    /// metrics never fail.
    pub fn eval(&self, rec: &Record) -> Result<f64> {
        match self {
            Metric::WallTimeAvgMs => per_call(rec, rec.wall_time_sum_ms, self),
            Metric::WallTimeAvgS => Ok(per_call(rec, rec.wall_time_sum_ms, self)? / 1000.0),
            Metric::EncryptAvgMs => per_call(rec, rec.wall_time_encrypt_ms, self),
            Metric::DecryptAvgMs => per_call(rec, rec.wall_time_decrypt_ms, self),
            Metric::CpuTimeAvgMs => per_call(rec, rec.cpu_time_ms, self),
            Metric::ThroughputMbPerS => {
                let wall_avg_ms = per_call(rec, rec.wall_time_sum_ms, self)?;
                Ok(rec.data_size_mb() / (wall_avg_ms / 1000.0))
            }
            Metric::CpuEfficiencyPct => {
                let cpu_avg = per_call(rec, rec.cpu_time_ms, self)?;
                let wall_avg = per_call(rec, rec.wall_time_sum_ms, self)?;
                Ok(cpu_avg / wall_avg * 100.0)
            }
            Metric::RamAvgMb => Ok(rec.ram_avg_mb),
            Metric::RamPeakMb => Ok(rec.ram_peak_mb),
        }
    }
}

/// Average a summed timing column over the record's iteration count.
fn per_call(rec: &Record, sum: f64, metric: &Metric) -> Result<f64> {
    if rec.iterations == 0 {
        return Err(Error::DivideByIterations {
            metric: metric.label().to_string(),
        });
    }
    Ok(sum / rec.iterations as f64)
}

/// Relative speedup of a candidate over a baseline (`baseline / candidate`).
///
/// A value of 3.0 means the candidate is three times faster than the
/// baseline for the same work.
pub fn speedup(baseline_avg_ms: f64, candidate_avg_ms: f64) -> f64 {
    baseline_avg_ms / candidate_avg_ms
}

/// Relative overhead of a candidate over a baseline, in percent.
///
/// `(candidate / baseline - 1) * 100`; positive when the candidate is
/// slower than the baseline.
pub fn overhead_pct(candidate_avg_ms: f64, baseline_avg_ms: f64) -> f64 {
    (candidate_avg_ms / baseline_avg_ms - 1.0) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::{Algorithm, Implementation};

    fn sample() -> Record {
        Record {
            implementation: Implementation::Ffi,
            algorithm: Algorithm::AesGcm256,
            data_size_bytes: 1_024_000,
            iterations: 100,
            wall_time_sum_ms: 500.0,
            wall_time_encrypt_ms: 260.0,
            wall_time_decrypt_ms: 240.0,
            cpu_time_ms: 450.0,
            ram_avg_mb: 42.0,
            ram_peak_mb: 55.0,
            device: None,
        }
    }

    #[test]
    fn test_wall_time_avg() {
        let rec = sample();
        assert!((Metric::WallTimeAvgMs.eval(&rec).unwrap() - 5.0).abs() < 1e-9);
        assert!((Metric::WallTimeAvgS.eval(&rec).unwrap() - 0.005).abs() < 1e-9);
    }

    #[test]
    fn test_encrypt_decrypt_avg() {
        let rec = sample();
        assert!((Metric::EncryptAvgMs.eval(&rec).unwrap() - 2.6).abs() < 1e-9);
        assert!((Metric::DecryptAvgMs.eval(&rec).unwrap() - 2.4).abs() < 1e-9);
    }

    #[test]
    fn test_throughput() {
        let rec = sample();
        // 1_024_000 B is ~0.9766 MB, processed in 5 ms per call.
        let expected = (1_024_000.0 / 1024.0 / 1024.0) / 0.005;
        assert!((Metric::ThroughputMbPerS.eval(&rec).unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_cpu_efficiency() {
        let rec = sample();
        // 4.5 ms CPU out of 5.0 ms wall per call.
        assert!((Metric::CpuEfficiencyPct.eval(&rec).unwrap() - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_ram_metrics_ignore_iterations() {
        let mut rec = sample();
        rec.iterations = 0;
        assert_eq!(Metric::RamAvgMb.eval(&rec).unwrap(), 42.0);
        assert_eq!(Metric::RamPeakMb.eval(&rec).unwrap(), 55.0);
    }

    #[test]
    fn test_zero_iterations_is_an_error_not_inf() {
        let mut rec = sample();
        rec.iterations = 0;
        for metric in [
            Metric::WallTimeAvgMs,
            Metric::WallTimeAvgS,
            Metric::EncryptAvgMs,
            Metric::DecryptAvgMs,
            Metric::CpuTimeAvgMs,
            Metric::ThroughputMbPerS,
            Metric::CpuEfficiencyPct,
        ] {
            let err = metric.eval(&rec).unwrap_err();
            assert!(
                matches!(err, Error::DivideByIterations { .. }),
                "{:?} should fail on zero iterations",
                metric
            );
        }
    }

    #[test]
    fn test_speedup_and_overhead() {
        assert!((speedup(10.0, 2.0) - 5.0).abs() < 1e-9);
        assert!((overhead_pct(12.0, 10.0) - 20.0).abs() < 1e-9);
        // Candidate faster than baseline shows as negative overhead.
        assert!((overhead_pct(8.0, 10.0) + 20.0).abs() < 1e-9);
    }
}
