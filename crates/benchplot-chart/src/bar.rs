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

//! Grouped bar charts.

use crate::axis::{category_label, value_bounds};
use crate::config::ChartSpec;
use crate::error::{draw_err, ChartError, Result};
use crate::style::{
    series_color, AXIS_LABEL_FONT_SIZE, CHART_SIZE, DATA_LABEL_FONT_SIZE, LEGEND_FONT_SIZE,
    TICK_LABEL_FONT_SIZE, TITLE_FONT_SIZE,
};
use benchplot_core::PivotTable;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

/// Render a pivot as a grouped bar chart.
///
/// Pivot rows become x-axis groups, pivot columns become the bars within
/// each group. Bars grow from zero, so negative values (overhead below
/// baseline) hang downward. Missing cells draw nothing.
///
/// # Errors
///
/// Returns [`ChartError::EmptyPivot`] when no cell holds a value, and
/// backend errors otherwise.
pub fn render_grouped_bars(pivot: &PivotTable, spec: &ChartSpec, path: &Path) -> Result<()> {
    let (min_value, max_value) =
        value_bounds(pivot).ok_or_else(|| ChartError::EmptyPivot {
            context: spec.title.clone(),
        })?;
    let y_min = if min_value < 0.0 { min_value * 1.15 } else { 0.0 };
    let y_max = if max_value > 0.0 { max_value * 1.15 } else { 1.0 };

    let n_rows = pivot.n_rows();
    let n_columns = pivot.n_columns();
    let labels = pivot.row_labels().to_vec();

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&spec.title, ("sans-serif", TITLE_FONT_SIZE))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(-0.5..(n_rows as f64 - 0.5), y_min..y_max)
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n_rows)
        .x_label_formatter(&|x| category_label(&labels, *x))
        .x_desc(spec.x_desc.as_str())
        .y_desc(spec.y_desc.as_str())
        .label_style(("sans-serif", TICK_LABEL_FONT_SIZE))
        .axis_desc_style(("sans-serif", AXIS_LABEL_FONT_SIZE))
        .draw()
        .map_err(draw_err)?;

    let group_width = 0.8;
    let bar_width = group_width / n_columns as f64;
    let gap = bar_width * 0.05;
    let label_pad = (y_max - y_min) * 0.015;

    for (col_idx, column) in pivot.columns().iter().enumerate() {
        let color = series_color(column, col_idx);

        for row_idx in 0..n_rows {
            let value = match pivot.cell(row_idx, col_idx) {
                Some(v) => v,
                None => continue,
            };
            let x_center =
                row_idx as f64 + (col_idx as f64 - (n_columns as f64 - 1.0) / 2.0) * bar_width;
            let x_left = x_center - bar_width / 2.0 + gap;
            let x_right = x_center + bar_width / 2.0 - gap;

            chart
                .draw_series(std::iter::once(Rectangle::new(
                    [(x_left, 0.0), (x_right, value)],
                    color.filled(),
                )))
                .map_err(draw_err)?;

            if let Some(suffix) = &spec.bar_label_suffix {
                let (label_y, anchor) = if value >= 0.0 {
                    (value + label_pad, VPos::Bottom)
                } else {
                    (value - label_pad, VPos::Top)
                };
                chart
                    .draw_series(std::iter::once(Text::new(
                        format!("{:.1}{}", value, suffix),
                        (x_center, label_y),
                        ("sans-serif", DATA_LABEL_FONT_SIZE)
                            .into_font()
                            .color(&BLACK)
                            .pos(Pos::new(HPos::Center, anchor)),
                    )))
                    .map_err(draw_err)?;
            }
        }

        // Invisible anchor that only carries the legend entry.
        chart
            .draw_series(std::iter::once(Circle::new(
                ((n_rows - 1) as f64, y_max),
                0,
                color.filled(),
            )))
            .map_err(draw_err)?
            .label(column.clone())
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 20, y + 5)], color.filled())
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", LEGEND_FONT_SIZE))
        .draw()
        .map_err(draw_err)?;

    root.present().map_err(draw_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pivot() -> PivotTable {
        PivotTable::from_parts(
            vec!["10".to_string(), "100".to_string()],
            vec!["FFI".to_string(), "Platform Channel".to_string(), "Dart".to_string()],
            vec![
                vec![Some(120.0), Some(80.0), Some(12.0)],
                vec![Some(210.0), Some(150.0), None],
            ],
        )
    }

    #[test]
    fn test_renders_png_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bars.png");
        let spec = ChartSpec::new("Throughput", "Data size (KB)", "MB/s");
        render_grouped_bars(&pivot(), &spec, &path).unwrap();
        let meta = std::fs::metadata(&path).unwrap();
        assert!(meta.len() > 0);
    }

    #[test]
    fn test_negative_values_render() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("overhead.png");
        let table = PivotTable::from_parts(
            vec!["10".to_string()],
            vec!["Dart overhead (%)".to_string()],
            vec![vec![Some(-12.5)]],
        );
        let spec = ChartSpec::new("Overhead", "Data size (KB)", "%");
        render_grouped_bars(&table, &spec, &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_bar_labels_do_not_fail() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("speedup.png");
        let spec = ChartSpec {
            bar_label_suffix: Some("x".to_string()),
            ..ChartSpec::new("Speedup", "Device / Algorithm", "Times faster")
        };
        render_grouped_bars(&pivot(), &spec, &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_all_missing_cells_is_empty_pivot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.png");
        let table = PivotTable::from_parts(
            vec!["10".to_string()],
            vec!["FFI".to_string()],
            vec![vec![None]],
        );
        let spec = ChartSpec::new("Empty", "x", "y");
        let err = render_grouped_bars(&table, &spec, &path).unwrap_err();
        assert!(matches!(err, ChartError::EmptyPivot { .. }));
    }
}
