use std::path::PathBuf;

use thiserror::Error;

use lib_pxa::export::{export_to_dir, ExportError};
use lib_pxa::Grid;

#[derive(Error, Debug)]
pub enum ExportHandlingError {
    #[error("File dialog was canceled")]
    DialogCanceled,

    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

/// Asks for an export directory and writes `icon.png` plus
/// `pixel_art_map.py` into it. Returns the chosen directory.
pub fn export_grid(grid: &Grid) -> Result<PathBuf, ExportHandlingError> {
    let dir = rfd::FileDialog::new()
        .set_title("Choose export folder")
        .pick_folder()
        .ok_or(ExportHandlingError::DialogCanceled)?;

    export_to_dir(grid, &dir)?;
    Ok(dir)
}
