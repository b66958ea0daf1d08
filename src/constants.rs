// src/constants.rs

use plotters::style::RGBColor;

// Binary record layout: one u32 timestamp followed by six i32 channels.
pub const FIELD_COUNT: usize = 7;
pub const FIELD_WIDTH_BYTES: usize = 4;
pub const RECORD_SIZE_BYTES: usize = FIELD_COUNT * FIELD_WIDTH_BYTES;

// Default file names, resolved against the executable's directory.
pub const DEFAULT_INPUT_FILE: &str = "log.dat";
pub const DEFAULT_OUTPUT_FILE: &str = "log.csv";

// Plot dimensions (18 x 7 inches at 100 dpi).
pub const PLOT_WIDTH: u32 = 1800;
pub const PLOT_HEIGHT: u32 = 700;

// Axis descriptions.
pub const X_AXIS_LABEL: &str = "time[ms]";
pub const Y_AXIS_LABEL: &str = "PID value";

// Viewer window title.
pub const VIEWER_TITLE: &str = "Telemetry Log";

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 1;
pub const LINE_WIDTH_LEGEND: u32 = 2;

// Marker radius drawn at every sample point.
pub const MARKER_SIZE: u32 = 2;

// Font sizes
pub const FONT_SIZE_AXIS_LABEL: i32 = 16;
pub const FONT_SIZE_TICK_LABEL: i32 = 13;
pub const FONT_SIZE_LEGEND: i32 = 14;

// Number of tick labels per axis.
pub const X_LABEL_COUNT: usize = 20;
pub const Y_LABEL_COUNT: usize = 10;

// --- Series Palette ---
// Cycled by series index: black, tab:red, tab:green, tab:blue, tab:cyan,
// tab:olive, tab:purple, tab:orange, tab:brown, tab:gray.
pub const SERIES_PALETTE: [RGBColor; 10] = [
    RGBColor(0, 0, 0),
    RGBColor(214, 39, 40),
    RGBColor(44, 160, 44),
    RGBColor(31, 119, 180),
    RGBColor(23, 190, 207),
    RGBColor(188, 189, 34),
    RGBColor(148, 103, 189),
    RGBColor(255, 127, 14),
    RGBColor(140, 86, 75),
    RGBColor(127, 127, 127),
];

/// Picks the palette color for the n-th plotted series.
pub fn series_color(series_index: usize) -> RGBColor {
    SERIES_PALETTE[series_index % SERIES_PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_size_is_28_bytes() {
        assert_eq!(RECORD_SIZE_BYTES, 28);
    }

    #[test]
    fn test_series_color_cycles() {
        assert_eq!(series_color(0), SERIES_PALETTE[0]);
        assert_eq!(series_color(3), RGBColor(31, 119, 180));
        assert_eq!(series_color(10), series_color(0));
        assert_eq!(series_color(13), series_color(3));
    }

    #[test]
    fn test_palette_colors_are_distinct() {
        for (i, a) in SERIES_PALETTE.iter().enumerate() {
            for b in SERIES_PALETTE.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
