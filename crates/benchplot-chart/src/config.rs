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

//! Per-chart rendering configuration.

/// What to print around the data: title, axis descriptions and the
/// axis/label options.
///
/// # Examples
///
/// ```
/// use benchplot_chart::ChartSpec;
///
/// let spec = ChartSpec {
///     title: "Throughput for AES-GCM 256 - Pixel 8 Pro".to_string(),
///     x_desc: "Data size (KB)".to_string(),
///     y_desc: "Throughput (MB/s)".to_string(),
///     ..Default::default()
/// };
/// assert!(!spec.y_log);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChartSpec {
    /// Chart caption.
    pub title: String,
    /// X axis description.
    pub x_desc: String,
    /// Y axis description.
    pub y_desc: String,
    /// Use a logarithmic y axis (line charts only).
    pub y_log: bool,
    /// When set, bar charts print each value above its bar with this
    /// suffix, e.g. `"x"` renders `12.3x`.
    pub bar_label_suffix: Option<String>,
}

impl ChartSpec {
    /// Shorthand for the common title/x/y case.
    pub fn new(
        title: impl Into<String>,
        x_desc: impl Into<String>,
        y_desc: impl Into<String>,
    ) -> Self {
        ChartSpec {
            title: title.into(),
            x_desc: x_desc.into(),
            y_desc: y_desc.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sets_descriptions() {
        let spec = ChartSpec::new("t", "x", "y");
        assert_eq!(spec.title, "t");
        assert_eq!(spec.x_desc, "x");
        assert_eq!(spec.y_desc, "y");
        assert!(!spec.y_log);
        assert!(spec.bar_label_suffix.is_none());
    }
}
