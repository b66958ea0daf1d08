// src/plot_functions/plot_telemetry_log.rs

use crate::constants::{
    series_color, LINE_WIDTH_PLOT, MARKER_SIZE, X_AXIS_LABEL, Y_AXIS_LABEL,
};
use crate::data_analysis::columnar::ColumnTable;
use crate::plot_framework::{calculate_range, PlotConfig, PlotSeries};

/// Builds the single telemetry chart: every non-time column as its own
/// line-with-markers series against the time column.
pub fn build_log_plot_config(table: &ColumnTable) -> PlotConfig {
    let time: Vec<f64> = table.time().iter().map(|&t| t as f64).collect();

    let series: Vec<PlotSeries> = table
        .value_columns()
        .enumerate()
        .map(|(series_index, (name, column))| PlotSeries {
            data: time
                .iter()
                .zip(column.iter())
                .map(|(&t, &v)| (t, v as f64))
                .collect(),
            label: name.to_string(),
            color: series_color(series_index),
            stroke_width: LINE_WIDTH_PLOT,
            point_size: MARKER_SIZE,
        })
        .collect();

    let (time_min, time_max) = table.time_range().unwrap_or((0, 0));
    let (value_min, value_max) = table.value_range().unwrap_or((0, 0));
    let (x_lo, x_hi) = calculate_range(time_min as f64, time_max as f64);
    let (y_lo, y_hi) = calculate_range(value_min as f64, value_max as f64);

    PlotConfig {
        title: String::new(),
        x_range: x_lo..x_hi,
        y_range: y_lo..y_hi,
        series,
        x_label: X_AXIS_LABEL.to_string(),
        y_label: Y_AXIS_LABEL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SERIES_PALETTE;
    use crate::data_input::log_data::TelemetryRecord;

    fn scenario_table() -> ColumnTable {
        ColumnTable::from_log(&[
            TelemetryRecord::from((1000, 0, 0, 0, 0, 0, 0)),
            TelemetryRecord::from((1016, 1, -1, 5, 200, 3, 90)),
        ])
    }

    #[test]
    fn test_six_labeled_series() {
        let config = build_log_plot_config(&scenario_table());
        let labels: Vec<&str> = config.series.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["drivinstage", "turn", "omega", "hsv.val", "distance", "gyro_deg"]
        );
        assert_eq!(config.x_label, "time[ms]");
        assert_eq!(config.y_label, "PID value");
    }

    #[test]
    fn test_series_share_time_axis() {
        let config = build_log_plot_config(&scenario_table());
        let hsv = &config.series[3];
        assert_eq!(hsv.data, vec![(1000.0, 0.0), (1016.0, 200.0)]);
        for s in &config.series {
            let xs: Vec<f64> = s.data.iter().map(|p| p.0).collect();
            assert_eq!(xs, vec![1000.0, 1016.0]);
        }
    }

    #[test]
    fn test_colors_follow_palette_order() {
        let config = build_log_plot_config(&scenario_table());
        for (i, s) in config.series.iter().enumerate() {
            assert_eq!(s.color, SERIES_PALETTE[i]);
            assert!(s.point_size > 0);
        }
    }

    #[test]
    fn test_ranges_cover_data() {
        let config = build_log_plot_config(&scenario_table());
        assert!(config.x_range.start < 1000.0 && config.x_range.end > 1016.0);
        assert!(config.y_range.start < -1.0 && config.y_range.end > 200.0);
    }

    #[test]
    fn test_empty_table_gives_empty_series() {
        let config = build_log_plot_config(&ColumnTable::from_log(&[]));
        assert_eq!(config.series.len(), 6);
        assert!(config.series.iter().all(|s| s.data.is_empty()));
        assert!(config.x_range.start < config.x_range.end);
        assert!(config.y_range.start < config.y_range.end);
    }
}
