// src/data_input/log_parser.rs

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::{debug, info};

use crate::constants::RECORD_SIZE_BYTES;
use crate::data_input::log_data::TelemetryRecord;
use crate::error::{Error, Result};

/// Reads the whole binary log into memory and decodes every full record.
///
/// The file handle is closed before this returns. A trailing partial record
/// is dropped without an error.
pub fn read_log_file(input_file_path: &Path) -> Result<Vec<TelemetryRecord>> {
    let input_error = |source| Error::InputRead {
        path: input_file_path.to_path_buf(),
        source,
    };

    let mut content = Vec::new();
    {
        let file = File::open(input_file_path).map_err(input_error)?;
        let mut reader = BufReader::new(file);
        reader.read_to_end(&mut content).map_err(input_error)?;
    }

    let records = decode_records(&content);
    info!(
        path = %input_file_path.display(),
        bytes = content.len(),
        records = records.len(),
        "Decoded telemetry log"
    );
    Ok(records)
}

/// Decodes consecutive fixed-size records. Remainder bytes are discarded.
pub fn decode_records(content: &[u8]) -> Vec<TelemetryRecord> {
    let chunks = content.chunks_exact(RECORD_SIZE_BYTES);
    let trailing = chunks.remainder().len();

    let records: Vec<TelemetryRecord> = chunks
        .map(|chunk| {
            let mut fixed = [0u8; RECORD_SIZE_BYTES];
            fixed.copy_from_slice(chunk);
            TelemetryRecord::from_bytes(&fixed)
        })
        .collect();

    if trailing > 0 {
        debug!(trailing_bytes = trailing, "Dropped partial trailing record");
    }
    records
}

/// Packs records back into the on-disk layout.
pub fn encode_records(records: &[TelemetryRecord]) -> Vec<u8> {
    let mut out = Vec::with_capacity(records.len() * RECORD_SIZE_BYTES);
    for record in records {
        out.extend_from_slice(&record.to_bytes());
    }
    out
}
