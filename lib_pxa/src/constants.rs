pub const DEFAULT_GRID_WIDTH: u32 = 25;
pub const DEFAULT_GRID_HEIGHT: u32 = 25;

/// Nearest-neighbor upscale factor applied to the raster export.
pub const EXPORT_SCALE: u32 = 10;

pub const RASTER_FILE_NAME: &str = "icon.png";
pub const MAP_FILE_NAME: &str = "pixel_art_map.py";
pub const MAP_VARIABLE: &str = "pixel_art_map";
