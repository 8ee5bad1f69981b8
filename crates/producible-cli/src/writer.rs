//! Writes generated files under an output root.
//!
//! Each file lands in its package directory, e.g.
//! `<out>/com/example/HomeViewModelFactory.kt`. Existing files are
//! overwritten: generated sources are build artifacts, never edited by hand.

use producible_codegen::GeneratedFileDescriptor;
use producible_core::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Writes every file below `out_dir`, creating directories as needed.
///
/// Returns the written paths in input order.
///
/// # Errors
///
/// Returns [`Error::IoError`] for the first directory or file that cannot be
/// written. Files written before the failure are left in place.
pub fn write_files(out_dir: &Path, files: &[GeneratedFileDescriptor]) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(files.len());

    for file in files {
        let path = out_dir.join(file.relative_path());

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| io_error(parent, source))?;
        }
        fs::write(&path, file.source_text()).map_err(|source| io_error(&path, source))?;

        tracing::debug!("Wrote {}", path.display());
        written.push(path);
    }

    Ok(written)
}

fn io_error(path: &Path, source: std::io::Error) -> Error {
    Error::IoError {
        path: path.display().to_string(),
        source,
    }
}
