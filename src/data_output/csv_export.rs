// src/data_output/csv_export.rs

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::{Terminator, WriterBuilder};
use tracing::info;

use crate::data_input::log_data::TelemetryRecord;
use crate::error::{Error, Result};
use crate::field_names::FIELD_NAMES;

/// Writes the header row and one row per record to any writer.
/// Spreadsheet dialect: comma separated, CRLF terminated, quoting only when needed.
pub fn write_csv<W: Write>(writer: W, log: &[TelemetryRecord]) -> Result<()> {
    let mut csv_writer = WriterBuilder::new()
        .delimiter(b',')
        .terminator(Terminator::CRLF)
        .from_writer(writer);

    csv_writer.write_record(FIELD_NAMES)?;
    for record in log {
        csv_writer.write_record(record.fields().iter().map(|v| v.to_string()))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Creates (or truncates) the CSV file and writes the log into it.
/// The file is flushed and closed before returning.
pub fn write_csv_file(output_file_path: &Path, log: &[TelemetryRecord]) -> Result<()> {
    {
        let file = File::create(output_file_path).map_err(|source| Error::OutputWrite {
            path: output_file_path.to_path_buf(),
            source,
        })?;
        write_csv(BufWriter::new(file), log)?;
    }

    info!(
        path = %output_file_path.display(),
        rows = log.len(),
        "CSV export written"
    );
    Ok(())
}
