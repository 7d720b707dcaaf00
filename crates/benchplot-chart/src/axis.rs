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

//! Axis range and categorical tick helpers shared by the renderers.

use benchplot_core::PivotTable;

/// Present-value bounds of a pivot, `None` when every cell is missing.
pub(crate) fn value_bounds(pivot: &PivotTable) -> Option<(f64, f64)> {
    let mut bounds: Option<(f64, f64)> = None;
    for v in pivot.values() {
        bounds = Some(match bounds {
            None => (v, v),
            Some((min, max)) => (min.min(v), max.max(v)),
        });
    }
    bounds
}

/// Smallest strictly positive value, for logarithmic axes.
pub(crate) fn positive_lower_bound(pivot: &PivotTable) -> Option<f64> {
    pivot
        .values()
        .filter(|v| *v > 0.0)
        .fold(None, |acc, v| Some(acc.map_or(v, |m: f64| m.min(v))))
}

/// Tick label for a categorical x axis laid out on integer positions.
///
/// Off-integer mesh positions render empty so only the category centers
/// are labeled.
pub(crate) fn category_label(labels: &[String], x: f64) -> String {
    let idx = x.round();
    if (x - idx).abs() < 0.3 && idx >= 0.0 && (idx as usize) < labels.len() {
        labels[idx as usize].clone()
    } else {
        String::new()
    }
}
