// src/plot_framework.rs

use plotters::backend::{BitMapBackend, DrawingBackend};
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::PathElement;
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, WHITE};
use plotters::style::{Color, RGBColor};

use std::ops::Range;
use std::path::Path;

use crate::constants::{
    FONT_SIZE_AXIS_LABEL, FONT_SIZE_LEGEND, FONT_SIZE_TICK_LABEL, LINE_WIDTH_LEGEND,
    X_LABEL_COUNT, Y_LABEL_COUNT,
};
use crate::error::Result;
use crate::font_config::{register_bundled_fonts, FONT_FAMILY};

/// Share of the plot width/height a legend is assumed to cover when picking its corner.
const LEGEND_REGION_FRACTION: f64 = 0.4;

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

#[derive(Clone, Debug)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
    /// Marker radius at each sample; 0 draws the line only.
    pub point_size: u32,
}

#[derive(Clone, Debug)]
pub struct PlotConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub series: Vec<PlotSeries>,
    pub x_label: String,
    pub y_label: String,
}

/// Legend anchors, in the order they are tried.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendAnchor {
    UpperRight,
    UpperLeft,
    LowerLeft,
    LowerRight,
    MiddleRight,
    MiddleLeft,
    LowerMiddle,
    UpperMiddle,
}

impl LegendAnchor {
    pub const CANDIDATES: [LegendAnchor; 8] = [
        LegendAnchor::UpperRight,
        LegendAnchor::UpperLeft,
        LegendAnchor::LowerLeft,
        LegendAnchor::LowerRight,
        LegendAnchor::MiddleRight,
        LegendAnchor::MiddleLeft,
        LegendAnchor::LowerMiddle,
        LegendAnchor::UpperMiddle,
    ];

    /// Region covered by a legend at this anchor, as (x_lo, x_hi, y_lo, y_hi)
    /// fractions of the plot area with y growing upwards.
    fn region(self) -> (f64, f64, f64, f64) {
        let f = LEGEND_REGION_FRACTION;
        let (x_lo, x_hi) = match self {
            Self::UpperLeft | Self::LowerLeft | Self::MiddleLeft => (0.0, f),
            Self::UpperRight | Self::LowerRight | Self::MiddleRight => (1.0 - f, 1.0),
            Self::LowerMiddle | Self::UpperMiddle => (0.5 - f / 2.0, 0.5 + f / 2.0),
        };
        let (y_lo, y_hi) = match self {
            Self::LowerLeft | Self::LowerRight | Self::LowerMiddle => (0.0, f),
            Self::UpperLeft | Self::UpperRight | Self::UpperMiddle => (1.0 - f, 1.0),
            Self::MiddleLeft | Self::MiddleRight => (0.5 - f / 2.0, 0.5 + f / 2.0),
        };
        (x_lo, x_hi, y_lo, y_hi)
    }

    pub fn to_series_label_position(self) -> SeriesLabelPosition {
        match self {
            Self::UpperRight => SeriesLabelPosition::UpperRight,
            Self::UpperLeft => SeriesLabelPosition::UpperLeft,
            Self::LowerLeft => SeriesLabelPosition::LowerLeft,
            Self::LowerRight => SeriesLabelPosition::LowerRight,
            Self::MiddleRight => SeriesLabelPosition::MiddleRight,
            Self::MiddleLeft => SeriesLabelPosition::MiddleLeft,
            Self::LowerMiddle => SeriesLabelPosition::LowerMiddle,
            Self::UpperMiddle => SeriesLabelPosition::UpperMiddle,
        }
    }
}

/// Picks the legend anchor whose region hides the fewest data points.
/// Ties go to the earliest anchor in `LegendAnchor::CANDIDATES`.
pub fn best_legend_position(plot_config: &PlotConfig) -> LegendAnchor {
    let x_span = plot_config.x_range.end - plot_config.x_range.start;
    let y_span = plot_config.y_range.end - plot_config.y_range.start;
    if x_span <= 0.0 || y_span <= 0.0 {
        return LegendAnchor::CANDIDATES[0];
    }

    let normalized: Vec<(f64, f64)> = plot_config
        .series
        .iter()
        .flat_map(|s| s.data.iter())
        .map(|&(x, y)| {
            (
                (x - plot_config.x_range.start) / x_span,
                (y - plot_config.y_range.start) / y_span,
            )
        })
        .collect();

    LegendAnchor::CANDIDATES
        .iter()
        .copied()
        .min_by_key(|anchor| {
            let (x_lo, x_hi, y_lo, y_hi) = anchor.region();
            normalized
                .iter()
                .filter(|&&(x, y)| x >= x_lo && x <= x_hi && y >= y_lo && y <= y_hi)
                .count()
        })
        .unwrap_or(LegendAnchor::UpperRight)
}

/// Draws one chart: grid, axis descriptions, every series with markers, and a legend.
pub fn draw_chart<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    plot_config: &PlotConfig,
) -> Result<()> {
    let mut builder = ChartBuilder::on(area);
    builder.margin(10).x_label_area_size(50).y_label_area_size(70);
    if !plot_config.title.is_empty() {
        builder.caption(&plot_config.title, (FONT_FAMILY, FONT_SIZE_AXIS_LABEL));
    }
    let mut chart =
        builder.build_cartesian_2d(plot_config.x_range.clone(), plot_config.y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(&plot_config.x_label)
        .y_desc(&plot_config.y_label)
        .x_labels(X_LABEL_COUNT)
        .y_labels(Y_LABEL_COUNT)
        .x_label_formatter(&|x| format!("{x:.0}"))
        .y_label_formatter(&|y| format!("{y:.0}"))
        .bold_line_style(BLACK.mix(0.15))
        .light_line_style(BLACK.mix(0.05))
        .axis_desc_style((FONT_FAMILY, FONT_SIZE_AXIS_LABEL))
        .label_style((FONT_FAMILY, FONT_SIZE_TICK_LABEL))
        .draw()?;

    let mut legend_series_count = 0;
    for s in &plot_config.series {
        let color = s.color;
        let series = chart.draw_series(
            LineSeries::new(s.data.iter().copied(), color.stroke_width(s.stroke_width))
                .point_size(s.point_size),
        )?;

        if !s.label.is_empty() {
            series.label(&s.label).legend(move |(x, y)| {
                PathElement::new(
                    vec![(x, y), (x + 20, y)],
                    color.stroke_width(LINE_WIDTH_LEGEND),
                )
            });
            legend_series_count += 1;
        }
    }

    if legend_series_count > 0 {
        chart
            .configure_series_labels()
            .position(best_legend_position(plot_config).to_series_label_position())
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font((FONT_FAMILY, FONT_SIZE_LEGEND))
            .draw()?;
    }

    Ok(())
}

/// Renders the chart into a packed RGB buffer (3 bytes per pixel, row-major).
pub fn render_to_rgb(plot_config: &PlotConfig, width: u32, height: u32) -> Result<Vec<u8>> {
    register_bundled_fonts()?;
    let mut buffer = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE)?;
        draw_chart(&root, plot_config)?;
        root.present()?;
    }
    Ok(buffer)
}

/// Renders the chart straight to an image file; the format follows the extension.
pub fn render_to_png(path: &Path, plot_config: &PlotConfig, width: u32, height: u32) -> Result<()> {
    register_bundled_fonts()?;
    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE)?;
    draw_chart(&root, plot_config)?;
    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_points(points: Vec<(f64, f64)>) -> PlotConfig {
        PlotConfig {
            title: String::new(),
            x_range: 0.0..100.0,
            y_range: 0.0..100.0,
            series: vec![PlotSeries {
                data: points,
                label: "turn".to_string(),
                color: RGBColor(0, 0, 0),
                stroke_width: 1,
                point_size: 2,
            }],
            x_label: "time[ms]".to_string(),
            y_label: "PID value".to_string(),
        }
    }

    #[test]
    fn test_calculate_range_pads() {
        let (lo, hi) = calculate_range(0.0, 100.0);
        assert!((lo + 15.0).abs() < 1e-9);
        assert!((hi - 115.0).abs() < 1e-9);
    }

    #[test]
    fn test_calculate_range_degenerate_and_swapped() {
        assert_eq!(calculate_range(5.0, 5.0), (4.5, 5.5));
        let (lo, hi) = calculate_range(10.0, 0.0);
        assert!(lo < 0.0 && hi > 10.0);
    }

    #[test]
    fn test_legend_defaults_to_upper_right_when_empty() {
        let config = config_with_points(Vec::new());
        assert_eq!(best_legend_position(&config), LegendAnchor::UpperRight);
    }

    #[test]
    fn test_legend_avoids_crowded_corner() {
        // Dense cluster in the upper right, nothing in the upper left.
        let points = (0..50).map(|i| (90.0 + i as f64 * 0.1, 95.0)).collect();
        let config = config_with_points(points);
        assert_eq!(best_legend_position(&config), LegendAnchor::UpperLeft);
    }

    #[test]
    fn test_legend_prefers_earliest_free_anchor() {
        // A rising diagonal occupies lower-left and upper-right.
        let points = (0..=100).map(|i| (i as f64, i as f64)).collect();
        let config = config_with_points(points);
        assert_eq!(best_legend_position(&config), LegendAnchor::UpperLeft);
    }

    #[test]
    fn test_anchor_regions_are_inside_unit_square() {
        for anchor in LegendAnchor::CANDIDATES {
            let (x_lo, x_hi, y_lo, y_hi) = anchor.region();
            assert!(0.0 <= x_lo && x_lo < x_hi && x_hi <= 1.0);
            assert!(0.0 <= y_lo && y_lo < y_hi && y_hi <= 1.0);
        }
    }

    #[test]
    fn test_render_to_rgb_draws_on_white() {
        let points = (0..20).map(|i| (i as f64 * 5.0, (i * i) as f64 / 4.0)).collect();
        let config = config_with_points(points);
        let rgb = render_to_rgb(&config, 320, 200).unwrap();
        assert_eq!(rgb.len(), 320 * 200 * 3);
        assert!(rgb.iter().any(|&b| b != 255));
    }
}
