//! Writing the generated input to a file.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use generator_core::path::Edge;
use tracing::{info, warn};

use crate::error::GeneratorError;
use crate::generator::{self, GenerationSummary};
use crate::params::GenerationParameters;

/// File name the MST server's profiling run reads.
pub const DEFAULT_OUTPUT: &str = "gprof_input.txt";

/// Generate the input described by `params` into the file at `path`.
///
/// The file is created or truncated. Parameters are validated first, so invalid
/// arguments leave an existing file untouched.
/// If writing fails the partial file is removed.
pub fn generate_file<P: AsRef<Path>, F: FnMut(Edge, u32)>(
    path: P,
    params: &GenerationParameters,
    on_edge: F,
) -> Result<GenerationSummary, GeneratorError> {
    params.validate()?;
    let path = path.as_ref();
    info!("Writing {}...", path.display());
    let summary = write_or_remove(path, |w| generator::generate(w, params, on_edge))?;
    info!("Done writing!");
    Ok(summary)
}

/// Create the file at `path`, hand a buffered writer for it to `body` and flush it.
///
/// On any error from `body` or from flushing, the file is closed and removed before the
/// error is returned.
pub fn write_or_remove<T, F>(path: &Path, body: F) -> Result<T, GeneratorError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<T, GeneratorError>,
{
    let mut writer = BufWriter::new(File::create(path)?);

    let result = body(&mut writer).and_then(|value| {
        writer.flush()?;
        Ok(value)
    });
    drop(writer);

    if result.is_err() {
        if let Err(e) = fs::remove_file(path) {
            warn!("Unable to remove partial output {}: {}", path.display(), e);
        }
    }

    result
}
