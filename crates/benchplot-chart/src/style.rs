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

//! Shared chart styling: sizes, fonts, the series palette and filename
//! slugs.

use plotters::style::RGBColor;

/// Default raster size of a single-panel chart, in pixels.
pub const CHART_SIZE: (u32, u32) = (1400, 800);

/// Width of one panel in a subplot grid, in pixels.
pub const GRID_PANEL_WIDTH: u32 = 600;

/// Height of a subplot grid, in pixels.
pub const GRID_HEIGHT: u32 = 800;

// Font sizes
pub const TITLE_FONT_SIZE: u32 = 28;
pub const AXIS_LABEL_FONT_SIZE: u32 = 18;
pub const TICK_LABEL_FONT_SIZE: u32 = 14;
pub const LEGEND_FONT_SIZE: u32 = 15;
pub const DATA_LABEL_FONT_SIZE: u32 = 13;

/// Fixed colors for the implementation series, so the same call path
/// keeps the same color across every chart.
const FFI_COLOR: RGBColor = RGBColor(66, 133, 244);
const PLATFORM_CHANNEL_COLOR: RGBColor = RGBColor(251, 188, 5);
const DART_COLOR: RGBColor = RGBColor(52, 168, 83);

/// Fallback palette for series keyed by anything else (device and
/// algorithm combinations, derived columns).
const PALETTE: &[RGBColor] = &[
    RGBColor(66, 133, 244),  // blue
    RGBColor(219, 68, 55),   // red
    RGBColor(244, 180, 0),   // yellow
    RGBColor(15, 157, 88),   // green
    RGBColor(171, 71, 188),  // purple
    RGBColor(0, 172, 193),   // cyan
    RGBColor(255, 112, 67),  // orange
    RGBColor(93, 109, 126),  // slate
];

/// Color for a named series.
///
/// Implementation labels get their fixed colors; everything else cycles
/// through the fallback palette by position.
pub fn series_color(label: &str, idx: usize) -> RGBColor {
    match label {
        "FFI" => FFI_COLOR,
        "Platform Channel" => PLATFORM_CHANNEL_COLOR,
        "Dart" => DART_COLOR,
        _ => PALETTE[idx % PALETTE.len()],
    }
}

/// Deterministic filename slug for a grouping value.
///
/// Lower-cases and replaces spaces with underscores, so
/// `"AES-GCM 256"` becomes `"aes-gcm_256"`.
pub fn slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_implementation_colors_are_stable() {
        assert_eq!(series_color("FFI", 0), series_color("FFI", 7));
        assert_eq!(series_color("Dart", 3), DART_COLOR);
    }

    #[test]
    fn test_palette_cycles() {
        assert_eq!(
            series_color("Pixel - AES", 0),
            series_color("Pixel - AES", PALETTE.len())
        );
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug("AES-GCM 256"), "aes-gcm_256");
        assert_eq!(slug("Platform Channel"), "platform_channel");
        assert_eq!(slug("ChaCha20-Poly1305"), "chacha20-poly1305");
    }
}
