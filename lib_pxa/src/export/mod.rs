mod map;
mod raster;

use std::io;
use std::path::Path;

use log::info;
use thiserror::Error;

use crate::constants::{MAP_FILE_NAME, RASTER_FILE_NAME};
use crate::grid::Grid;

pub use map::{save_map, write_map};
pub use raster::{render_rgba, save_raster};

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

/// Writes both export artifacts into `dir`: the upscaled raster as
/// `icon.png` and the color-table dump as `pixel_art_map.py`.
///
/// The grid is read synchronously, so both files see the same snapshot. The
/// first failure propagates; there is no partial-success reporting.
pub fn export_to_dir(grid: &Grid, dir: &Path) -> Result<(), ExportError> {
    save_raster(grid, &dir.join(RASTER_FILE_NAME))?;
    save_map(grid, &dir.join(MAP_FILE_NAME))?;

    info!("Exported {}x{} grid to {:?}", grid.width(), grid.height(), dir);
    Ok(())
}
