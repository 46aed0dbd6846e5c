//! Checks of input and output locations before any parsing starts
use std::path::Path;

use crate::{Genemap2Error, Genemap2Result};

/// Ensures that `path` is an existing `.txt` file
///
/// # Errors
///
/// - [`Genemap2Error::CannotOpenFile`]: `path` does not exist
/// - [`Genemap2Error::InvalidInput`]: `path` is not a file or has another extension
pub fn check_input_file<P: AsRef<Path>>(path: P) -> Genemap2Result<()> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Genemap2Error::CannotOpenFile(format!(
            "input file {} does not exist",
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(Genemap2Error::InvalidInput(format!(
            "input path {} is not a file",
            path.display()
        )));
    }
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("txt") => Ok(()),
        other => Err(Genemap2Error::InvalidInput(format!(
            "expected a .txt file but got '{}' instead",
            other.unwrap_or_default()
        ))),
    }
}

/// Ensures that `path` is an existing directory
///
/// # Errors
///
/// - [`Genemap2Error::CannotWriteOutput`]: `path` does not exist
/// - [`Genemap2Error::InvalidInput`]: `path` is not a directory
pub fn check_output_dir<P: AsRef<Path>>(path: P) -> Genemap2Result<()> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Genemap2Error::CannotWriteOutput(format!(
            "output path {} does not exist",
            path.display()
        )));
    }
    if !path.is_dir() {
        return Err(Genemap2Error::InvalidInput(format!(
            "output path {} is not a directory",
            path.display()
        )));
    }
    Ok(())
}
