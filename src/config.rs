// src/config.rs

use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};
use crate::error::{Error, Result};

/// Paths given on the command line, if any.
#[derive(Debug, Clone, Default)]
pub struct PathOverrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub png: Option<PathBuf>,
}

/// Everything one pipeline run needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Also save the rendered figure here.
    pub png: Option<PathBuf>,
    /// Open the blocking viewer after rendering.
    pub show: bool,
    /// Echo the CSV to stdout in addition to the file.
    pub print_csv: bool,
}

impl RunConfig {
    /// Default run: `log.dat` in, `log.csv` out, both next to `base_dir`, viewer on.
    pub fn defaults_in(base_dir: &Path) -> Self {
        Self::resolve(base_dir, PathOverrides::default(), true, false)
    }

    /// Applies overrides; relative paths are taken relative to `base_dir`.
    pub fn resolve(base_dir: &Path, overrides: PathOverrides, show: bool, print_csv: bool) -> Self {
        let input = overrides
            .input
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_FILE));
        let output = overrides
            .output
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE));

        Self {
            input: resolve_against(base_dir, &input),
            output: resolve_against(base_dir, &output),
            png: overrides.png.map(|p| resolve_against(base_dir, &p)),
            show,
            print_csv,
        }
    }
}

fn resolve_against(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

/// Directory holding the running executable; data files live next to it.
pub fn executable_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        Error::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("executable path {} has no parent directory", exe.display()),
        ))
    })
}
