// src/main.rs

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use telemetry_log_render::config::{executable_dir, PathOverrides, RunConfig};
use telemetry_log_render::logging::{init_logging, Verbosity};
use telemetry_log_render::pipeline;
use telemetry_log_render::viewer::default_viewer;

/// Decode `log.dat`, export `log.csv` and plot every channel against time.
///
/// Without arguments both files are taken from the executable's own directory.
#[derive(Debug, Parser)]
#[command(name = "telemetry-log-render", version, about, long_about = None)]
struct Cli {
    /// Binary log to read (default: log.dat next to the executable)
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// CSV file to write (default: log.csv next to the executable)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Also save the plot as an image
    #[arg(long, value_name = "FILE")]
    png: Option<PathBuf>,

    /// Do not open the interactive viewer
    #[arg(long)]
    no_show: bool,

    /// Echo the CSV to stdout as well
    #[arg(long)]
    print_csv: bool,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(Verbosity::from_flags(cli.quiet, cli.verbose));

    let base_dir = match executable_dir() {
        Ok(dir) => dir,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let overrides = PathOverrides {
        input: cli.input,
        output: cli.output,
        png: cli.png,
    };
    let config = RunConfig::resolve(&base_dir, overrides, !cli.no_show, cli.print_csv);

    match pipeline::run(&config, default_viewer().as_ref()) {
        Ok(summary) => {
            info!(
                records = summary.records,
                csv = %summary.csv_path.display(),
                "Done"
            );
            ExitCode::SUCCESS
        }
        // Reported once here; the exit status carries the failure.
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
