use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use tracing::info;

use crate::core::models::PackagerCode;
use crate::errors::PipelineError;

/// Serialize records as CSV (`name,code,lat,lng` with a header row).
///
/// # Errors
///
/// Returns an error if serialization or the underlying writer fails.
pub fn write_packager_codes<W: Write>(
    codes: &[PackagerCode],
    writer: W,
) -> Result<(), PipelineError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for code in codes {
        csv_writer.serialize(code)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write records to the configured destination: a file when a path is set,
/// stdout otherwise. Logs stay on stderr, so piping stdout yields clean CSV.
pub fn write_output(
    codes: &[PackagerCode],
    output_path: Option<&Path>,
) -> Result<(), PipelineError> {
    match output_path {
        Some(path) => {
            let file = File::create(path)?;
            write_packager_codes(codes, file)?;
            info!("Wrote {} packager codes to {}", codes.len(), path.display());
        }
        None => {
            write_packager_codes(codes, io::stdout().lock())?;
        }
    }

    Ok(())
}
