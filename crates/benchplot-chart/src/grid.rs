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

//! One-row subplot grids of line charts.

use crate::axis::{category_label, value_bounds};
use crate::config::ChartSpec;
use crate::error::{draw_err, ChartError, Result};
use crate::style::{
    series_color, AXIS_LABEL_FONT_SIZE, GRID_HEIGHT, GRID_PANEL_WIDTH, LEGEND_FONT_SIZE,
    TICK_LABEL_FONT_SIZE, TITLE_FONT_SIZE,
};
use benchplot_core::PivotTable;
use plotters::prelude::*;
use std::path::Path;

/// Render a row of line-chart panels sharing one figure title.
///
/// Each panel draws its own pivot with an independent y range; the
/// legend is attached to the first panel with data. Panels whose pivot
/// holds no values are left blank.
///
/// # Errors
///
/// Returns [`ChartError::EmptyPivot`] when there are no panels at all,
/// and backend errors otherwise.
pub fn render_line_grid(
    panels: &[(String, PivotTable)],
    spec: &ChartSpec,
    path: &Path,
) -> Result<()> {
    if panels.is_empty() {
        return Err(ChartError::EmptyPivot {
            context: spec.title.clone(),
        });
    }

    let width = GRID_PANEL_WIDTH * panels.len() as u32;
    let root = BitMapBackend::new(path, (width, GRID_HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;
    let titled = root
        .titled(&spec.title, ("sans-serif", TITLE_FONT_SIZE))
        .map_err(draw_err)?;
    let areas = titled.split_evenly((1, panels.len()));

    let mut legend_drawn = false;
    for ((panel_title, pivot), area) in panels.iter().zip(areas.iter()) {
        let bounds = match value_bounds(pivot) {
            Some(b) => b,
            None => continue,
        };
        let (min_value, max_value) = bounds;
        let y_min = if min_value < 0.0 { min_value * 1.15 } else { 0.0 };
        let y_max = if max_value > 0.0 { max_value * 1.15 } else { 1.0 };

        let labels = pivot.row_labels().to_vec();
        let n_rows = labels.len();

        let mut chart = ChartBuilder::on(area)
            .caption(panel_title, ("sans-serif", AXIS_LABEL_FONT_SIZE))
            .margin(10)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(-0.5..(n_rows as f64 - 0.5), y_min..y_max)
            .map_err(draw_err)?;

        chart
            .configure_mesh()
            .x_labels(n_rows)
            .x_label_formatter(&|x| category_label(&labels, *x))
            .x_desc(spec.x_desc.as_str())
            .y_desc(spec.y_desc.as_str())
            .label_style(("sans-serif", TICK_LABEL_FONT_SIZE))
            .axis_desc_style(("sans-serif", AXIS_LABEL_FONT_SIZE))
            .draw()
            .map_err(draw_err)?;

        for (col_idx, column) in pivot.columns().iter().enumerate() {
            let color = series_color(column, col_idx);
            let points: Vec<(f64, f64)> = (0..n_rows)
                .filter_map(|row_idx| {
                    pivot.cell(row_idx, col_idx).map(|v| (row_idx as f64, v))
                })
                .collect();
            if points.is_empty() {
                continue;
            }

            let series = chart
                .draw_series(LineSeries::new(points.clone(), color.stroke_width(2)))
                .map_err(draw_err)?;
            if !legend_drawn {
                series.label(column.clone()).legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                });
            }

            chart
                .draw_series(PointSeries::of_element(
                    points,
                    3,
                    color.filled(),
                    &|coord, size, style| {
                        EmptyElement::at(coord) + Circle::new((0, 0), size, style)
                    },
                ))
                .map_err(draw_err)?;
        }

        if !legend_drawn {
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperLeft)
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .label_font(("sans-serif", LEGEND_FONT_SIZE))
                .draw()
                .map_err(draw_err)?;
            legend_drawn = true;
        }
    }

    root.present().map_err(draw_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel(scale: f64) -> PivotTable {
        PivotTable::from_parts(
            vec!["FFI".to_string(), "Platform Channel".to_string(), "Dart".to_string()],
            vec!["Pixel - AES-GCM 256".to_string(), "Pixel - ChaCha20-Poly1305".to_string()],
            vec![
                vec![Some(0.004 * scale), Some(0.005 * scale)],
                vec![Some(0.012 * scale), Some(0.013 * scale)],
                vec![Some(0.080 * scale), Some(0.092 * scale)],
            ],
        )
    }

    #[test]
    fn test_renders_grid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.png");
        let panels = vec![
            ("10 KB".to_string(), panel(1.0)),
            ("100 KB".to_string(), panel(8.0)),
            ("1000 KB".to_string(), panel(70.0)),
        ];
        let spec = ChartSpec::new("Device comparison", "Implementation", "Average time (s)");
        render_line_grid(&panels, &spec, &path).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_no_panels_is_empty_pivot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("none.png");
        let spec = ChartSpec::new("Nothing", "x", "y");
        let err = render_line_grid(&[], &spec, &path).unwrap_err();
        assert!(matches!(err, ChartError::EmptyPivot { .. }));
    }
}
