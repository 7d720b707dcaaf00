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

//! Line charts with circle markers, optional scatter and dashed
//! overlays, and an optional logarithmic y axis.

use crate::axis::{category_label, positive_lower_bound, value_bounds};
use crate::config::ChartSpec;
use crate::error::{draw_err, ChartError, Result};
use crate::style::{
    series_color, AXIS_LABEL_FONT_SIZE, CHART_SIZE, LEGEND_FONT_SIZE, TICK_LABEL_FONT_SIZE,
    TITLE_FONT_SIZE,
};
use benchplot_core::PivotTable;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::path::Path;

/// Secondary data drawn over the primary line series.
enum Overlay<'a> {
    /// No overlay.
    None,
    /// Cross markers per column, e.g. peak values over averages.
    Markers(&'a PivotTable),
    /// Dashed lines with cross markers per column, e.g. decrypt times
    /// over encrypt times. Colors follow the primary column of the same
    /// label.
    Dashed(&'a PivotTable),
}

impl<'a> Overlay<'a> {
    fn pivot(&self) -> Option<&'a PivotTable> {
        match self {
            Overlay::None => None,
            Overlay::Markers(p) | Overlay::Dashed(p) => Some(p),
        }
    }
}

/// Render a pivot as a line chart, one series per column.
///
/// Honors [`ChartSpec::y_log`]; on a logarithmic axis only strictly
/// positive cells are drawn.
///
/// # Errors
///
/// Returns [`ChartError::EmptyPivot`] when no cell holds a drawable
/// value, and backend errors otherwise.
pub fn render_lines(pivot: &PivotTable, spec: &ChartSpec, path: &Path) -> Result<()> {
    if spec.y_log {
        render_lines_log(pivot, spec, path)
    } else {
        render_linear(pivot, Overlay::None, spec, path)
    }
}

/// Render average lines with a cross-marker overlay for peaks.
///
/// Marker columns are colored like the primary column with the same
/// label, and marker rows are placed by matching row label.
///
/// # Errors
///
/// Same conditions as [`render_lines`].
pub fn render_lines_with_markers(
    lines: &PivotTable,
    markers: &PivotTable,
    spec: &ChartSpec,
    path: &Path,
) -> Result<()> {
    render_linear(lines, Overlay::Markers(markers), spec, path)
}

/// Render paired series: solid lines for the primary pivot, dashed
/// lines with cross markers for the secondary one.
///
/// # Errors
///
/// Same conditions as [`render_lines`].
pub fn render_dual_lines(
    solid: &PivotTable,
    dashed: &PivotTable,
    spec: &ChartSpec,
    path: &Path,
) -> Result<()> {
    render_linear(solid, Overlay::Dashed(dashed), spec, path)
}

/// Column points on the categorical x axis, skipping missing cells.
fn column_points(pivot: &PivotTable, col_idx: usize, x_labels: &[String]) -> Vec<(f64, f64)> {
    pivot
        .row_labels()
        .iter()
        .enumerate()
        .filter_map(|(row_idx, label)| {
            let x = x_labels.iter().position(|l| l == label)? as f64;
            let y = pivot.cell(row_idx, col_idx)?;
            Some((x, y))
        })
        .collect()
}

fn render_linear(
    primary: &PivotTable,
    overlay: Overlay<'_>,
    spec: &ChartSpec,
    path: &Path,
) -> Result<()> {
    let mut bounds = value_bounds(primary);
    if let Some(over) = overlay.pivot() {
        if let Some((o_min, o_max)) = value_bounds(over) {
            bounds = Some(match bounds {
                None => (o_min, o_max),
                Some((min, max)) => (min.min(o_min), max.max(o_max)),
            });
        }
    }
    let (min_value, max_value) = bounds.ok_or_else(|| ChartError::EmptyPivot {
        context: spec.title.clone(),
    })?;
    let y_min = if min_value < 0.0 { min_value * 1.15 } else { 0.0 };
    let y_max = if max_value > 0.0 { max_value * 1.15 } else { 1.0 };

    let labels = primary.row_labels().to_vec();
    let n_rows = labels.len();

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
        .x_labels(n_rows)
        .x_label_formatter(&|x| category_label(&labels, *x))
        .x_desc(spec.x_desc.as_str())
        .y_desc(spec.y_desc.as_str())
        .label_style(("sans-serif", TICK_LABEL_FONT_SIZE))
        .axis_desc_style(("sans-serif", AXIS_LABEL_FONT_SIZE))
        .draw()
        .map_err(draw_err)?;

    for (col_idx, column) in primary.columns().iter().enumerate() {
        let color = series_color(column, col_idx);
        let points = column_points(primary, col_idx, &labels);
        if points.is_empty() {
            continue;
        }

        chart
            .draw_series(LineSeries::new(points.clone(), color.stroke_width(3)))
            .map_err(draw_err)?
            .label(column.clone())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(3))
            });

        chart
            .draw_series(PointSeries::of_element(
                points,
                4,
                color.filled(),
                &|coord, size, style| EmptyElement::at(coord) + Circle::new((0, 0), size, style),
            ))
            .map_err(draw_err)?;
    }

    match overlay {
        Overlay::None => {}
        Overlay::Markers(markers) => {
            for (col_idx, column) in markers.columns().iter().enumerate() {
                let color = series_color(column, col_idx);
                let points = column_points(markers, col_idx, &labels);
                chart
                    .draw_series(
                        points
                            .into_iter()
                            .map(|coord| Cross::new(coord, 6, color.stroke_width(2))),
                    )
                    .map_err(draw_err)?;
            }
        }
        Overlay::Dashed(dashed) => {
            for (col_idx, column) in dashed.columns().iter().enumerate() {
                let color = series_color(column, col_idx);
                let points = column_points(dashed, col_idx, &labels);
                if points.is_empty() {
                    continue;
                }
                chart
                    .draw_series(DashedLineSeries::new(
                        points.clone(),
                        8,
                        6,
                        color.stroke_width(2),
                    ))
                    .map_err(draw_err)?;
                chart
                    .draw_series(
                        points
                            .into_iter()
                            .map(|coord| Cross::new(coord, 5, color.stroke_width(2))),
                    )
                    .map_err(draw_err)?;
            }
        }
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

fn render_lines_log(pivot: &PivotTable, spec: &ChartSpec, path: &Path) -> Result<()> {
    let min_positive = positive_lower_bound(pivot).ok_or_else(|| ChartError::EmptyPivot {
        context: spec.title.clone(),
    })?;
    let max_value = pivot.values().fold(min_positive, f64::max);
    let y_min = min_positive / 1.5;
    let y_max = max_value * 2.0;

    let labels = pivot.row_labels().to_vec();
    let n_rows = labels.len();

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&spec.title, ("sans-serif", TITLE_FONT_SIZE))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(90)
        .build_cartesian_2d(-0.5..(n_rows as f64 - 0.5), (y_min..y_max).log_scale())
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
        // Only strictly positive values can be placed on a log axis.
        let points: Vec<(f64, f64)> = column_points(pivot, col_idx, &labels)
            .into_iter()
            .filter(|(_, y)| *y > 0.0)
            .collect();
        if points.is_empty() {
            continue;
        }

        chart
            .draw_series(LineSeries::new(points.clone(), color.stroke_width(3)))
            .map_err(draw_err)?
            .label(column.clone())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(3))
            });

        chart
            .draw_series(PointSeries::of_element(
                points,
                4,
                color.filled(),
                &|coord, size, style| EmptyElement::at(coord) + Circle::new((0, 0), size, style),
            ))
            .map_err(draw_err)?;
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
            vec!["10".to_string(), "100".to_string(), "1000".to_string()],
            vec!["FFI".to_string(), "Dart".to_string()],
            vec![
                vec![Some(95.0), Some(88.0)],
                vec![Some(97.0), Some(90.0)],
                vec![Some(98.5), None],
            ],
        )
    }

    #[test]
    fn test_renders_line_chart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lines.png");
        let spec = ChartSpec::new("CPU efficiency", "Data size (KB)", "%");
        render_lines(&pivot(), &spec, &path).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_renders_log_line_chart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.png");
        let spec = ChartSpec {
            y_log: true,
            ..ChartSpec::new("Averaged wall time", "Implementation", "s (log)")
        };
        render_lines(&pivot(), &spec, &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_renders_marker_overlay() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ram.png");
        let peaks = PivotTable::from_parts(
            vec!["10".to_string(), "100".to_string(), "1000".to_string()],
            vec!["FFI".to_string(), "Dart".to_string()],
            vec![
                vec![Some(120.0), Some(110.0)],
                vec![Some(130.0), Some(118.0)],
                vec![Some(140.0), None],
            ],
        );
        let spec = ChartSpec::new("RAM usage", "Data size (KB)", "MB");
        render_lines_with_markers(&pivot(), &peaks, &spec, &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_renders_dual_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("encdec.png");
        let decrypt = pivot();
        let spec = ChartSpec::new(
            "Encrypt (solid) vs decrypt (dashed)",
            "Data size (KB)",
            "Average time (ms)",
        );
        render_dual_lines(&pivot(), &decrypt, &spec, &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_empty_pivot_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.png");
        let empty = PivotTable::from_parts(
            vec!["10".to_string()],
            vec!["FFI".to_string()],
            vec![vec![None]],
        );
        let spec = ChartSpec::new("Empty", "x", "y");
        let err = render_lines(&empty, &spec, &path).unwrap_err();
        assert!(matches!(err, ChartError::EmptyPivot { .. }));
    }
}
