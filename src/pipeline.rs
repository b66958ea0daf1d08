// src/pipeline.rs

use std::io::{self, Write};
use std::path::PathBuf;

use tracing::info;

use crate::config::RunConfig;
use crate::constants::{PLOT_HEIGHT, PLOT_WIDTH, VIEWER_TITLE};
use crate::data_analysis::columnar::ColumnTable;
use crate::data_input::log_parser::read_log_file;
use crate::data_output::csv_export::{write_csv, write_csv_file};
use crate::error::Result;
use crate::plot_framework::{render_to_png, render_to_rgb};
use crate::plot_functions::plot_telemetry_log::build_log_plot_config;
use crate::viewer::PlotViewer;

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub records: usize,
    pub csv_path: PathBuf,
    pub png_path: Option<PathBuf>,
}

/// Read binary -> write CSV -> transpose -> plot, stopping at the first error.
/// Each file is fully consumed or written and closed before the next stage starts.
pub fn run(config: &RunConfig, viewer: &dyn PlotViewer) -> Result<RunSummary> {
    run_with_echo(config, viewer, io::stdout().lock())
}

/// Same as [`run`], with the `print_csv` echo going to `echo` instead of stdout.
pub fn run_with_echo<W: Write>(
    config: &RunConfig,
    viewer: &dyn PlotViewer,
    echo: W,
) -> Result<RunSummary> {
    info!("--- Reading Binary Log ---");
    let log = read_log_file(&config.input)?;

    info!("--- Writing CSV ---");
    write_csv_file(&config.output, &log)?;
    if config.print_csv {
        write_csv(echo, &log)?;
    }

    info!("--- Building Column Table ---");
    let table = ColumnTable::from_log(&log);
    let plot_config = build_log_plot_config(&table);

    if let Some(png_path) = &config.png {
        render_to_png(png_path, &plot_config, PLOT_WIDTH, PLOT_HEIGHT)?;
        info!(path = %png_path.display(), "Plot saved");
    }

    if config.show {
        info!("--- Displaying Plot (close the window to exit) ---");
        let rgb = render_to_rgb(&plot_config, PLOT_WIDTH, PLOT_HEIGHT)?;
        viewer.show(VIEWER_TITLE, &rgb, PLOT_WIDTH, PLOT_HEIGHT)?;
    }

    Ok(RunSummary {
        records: log.len(),
        csv_path: config.output.clone(),
        png_path: config.png.clone(),
    })
}
