use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::constants::MAP_VARIABLE;
use crate::grid::Grid;

use super::ExportError;

/// Writes the grid as a literal nested list of quoted hex color strings, one
/// inner list per row, in row-major order:
///
/// ```text
/// pixel_art_map = [
///     ["#FFFFFF", "#000000"],
///     ["#112233", "#FFFFFF"],
/// ]
/// ```
pub fn write_map<W: Write>(grid: &Grid, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{} = [", MAP_VARIABLE)?;
    for row in grid.rows() {
        let cells: Vec<String> = row.iter().map(|color| format!("\"{}\"", color)).collect();
        writeln!(writer, "    [{}],", cells.join(", "))?;
    }
    writeln!(writer, "]")
}

/// Writes the color-table dump to `path`.
///
/// # Errors
/// - Returns `ExportError::Io` if the file cannot be created or written.
pub fn save_map(grid: &Grid, path: &Path) -> Result<(), ExportError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_map(grid, &mut writer)?;
    writer.flush()?;

    debug!("Source-map export written to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn dump(grid: &Grid) -> String {
        let mut buffer = Vec::new();
        write_map(grid, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_map_layout_matches_grid() {
        let mut grid = Grid::new(2, 2);
        grid.set_pixel(1, 0, Color::BLACK).unwrap();
        grid.set_pixel(0, 1, Color::new(0x11, 0x22, 0x33)).unwrap();

        let expected = concat!(
            "pixel_art_map = [\n",
            "    [\"#FFFFFF\", \"#000000\"],\n",
            "    [\"#112233\", \"#FFFFFF\"],\n",
            "]\n",
        );
        assert_eq!(dump(&grid), expected);
    }

    #[test]
    fn test_uniform_grid_dump_counts() {
        let grid = Grid::with_background(4, 3, Color::new(0x11, 0x22, 0x33));
        let text = dump(&grid);

        let rows: Vec<&str> = text
            .lines()
            .filter(|line| line.trim_start().starts_with('['))
            .collect();
        assert_eq!(rows.len(), 3);
        for row in rows {
            assert_eq!(row.matches("\"#112233\"").count(), 4);
        }
    }
}
