use std::fs;
use std::path::Path;

use super::{SiteError, io_error};

/// Removes `output_dir` if present and recreates it empty.
pub fn reset_output_dir(output_dir: &Path) -> Result<(), SiteError> {
    if output_dir.exists() {
        log::debug!("Cleaning {}", output_dir.display());
        fs::remove_dir_all(output_dir).map_err(io_error(output_dir))?;
    }
    fs::create_dir_all(output_dir).map_err(io_error(output_dir))
}

/// Copies every file under `static_dir` into `output_dir`, keeping the tree shape.
///
/// Returns the number of files copied.
pub fn copy_static(static_dir: &Path, output_dir: &Path) -> Result<usize, SiteError> {
    if !static_dir.is_dir() {
        return Err(SiteError::MissingStaticDir(static_dir.to_path_buf()));
    }
    copy_directory_recursive(static_dir, output_dir)
}

fn copy_directory_recursive(from: &Path, to: &Path) -> Result<usize, SiteError> {
    fs::create_dir_all(to).map_err(io_error(to))?;

    let mut copied = 0;
    for entry in fs::read_dir(from).map_err(io_error(from))? {
        let entry = entry.map_err(io_error(from))?;
        let source = entry.path();
        let destination = to.join(entry.file_name());

        if source.is_dir() {
            log::debug!("Creating {}", destination.display());
            copied += copy_directory_recursive(&source, &destination)?;
        } else {
            fs::copy(&source, &destination).map_err(io_error(&source))?;
            log::info!("Copied {} to {}", source.display(), destination.display());
            copied += 1;
        }
    }

    Ok(copied)
}
