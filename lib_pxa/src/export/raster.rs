use std::path::Path;

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use log::debug;

use crate::color::Color;
use crate::constants::EXPORT_SCALE;
use crate::grid::Grid;

use super::ExportError;

/// Renders the grid into a `width x height` RGBA buffer.
///
/// Background-colored cells keep their RGB value but get alpha 0, so the
/// exported icon has a transparent background; every other cell is fully
/// opaque.
pub fn render_rgba(grid: &Grid) -> RgbaImage {
    let mut image = RgbaImage::new(grid.width(), grid.height());

    for (y, row) in grid.rows().enumerate() {
        for (x, &color) in row.iter().enumerate() {
            let alpha = if color == Color::BACKGROUND { 0 } else { 255 };
            image.put_pixel(x as u32, y as u32, Rgba([color.r, color.g, color.b, alpha]));
        }
    }

    image
}

/// Upscales the rendered grid by `EXPORT_SCALE` with nearest-neighbor
/// filtering (crisp cells, no blur) and writes it as a PNG.
///
/// # Errors
/// - Returns `ExportError::Image` if encoding or writing the file fails.
pub fn save_raster(grid: &Grid, path: &Path) -> Result<(), ExportError> {
    let image = render_rgba(grid);
    let scaled = imageops::resize(
        &image,
        grid.width() * EXPORT_SCALE,
        grid.height() * EXPORT_SCALE,
        FilterType::Nearest,
    );

    scaled.save(path)?;
    debug!(
        "Raster export written to {:?} ({}x{} pixels)",
        path,
        scaled.width(),
        scaled.height()
    );

    Ok(())
}
