use thiserror::Error;

use crate::color::Color;

#[derive(Error, Debug, PartialEq)]
pub enum GridError {
    #[error("coordinates ({x}, {y}) are outside the {width}x{height} grid")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

/// A fixed-size matrix of colors, stored row-major.
///
/// Dimensions are set at construction and never change. Every cell always
/// holds a valid color; construction fills the whole grid with the
/// background color.
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Color>,
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_background(width, height, Color::BACKGROUND)
    }

    pub fn with_background(width: u32, height: u32, background: Color) -> Self {
        Self {
            width,
            height,
            cells: vec![background; (width * height) as usize],
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn in_bounds(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// Returns the color at `(x, y)`.
    ///
    /// # Errors
    /// - Returns `GridError::OutOfBounds` if the coordinates fall outside the
    ///   grid. Callers are expected to bounds-check pointer input first, so
    ///   this is a guard rather than a control path.
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<Color, GridError> {
        if !self.in_bounds(x, y) {
            return Err(self.out_of_bounds(x, y));
        }
        Ok(self.cells[self.index(x, y)])
    }

    /// Overwrites the color at `(x, y)`.
    ///
    /// # Errors
    /// - Returns `GridError::OutOfBounds` if the coordinates fall outside the
    ///   grid; the grid is left untouched.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) -> Result<(), GridError> {
        if !self.in_bounds(x, y) {
            return Err(self.out_of_bounds(x, y));
        }
        let index = self.index(x, y);
        self.cells[index] = color;
        Ok(())
    }

    /// Iterates over rows top-to-bottom; each row is a left-to-right slice.
    /// A zero-width grid has no cells and yields no rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        // `chunks` rejects a size of 0; the cell buffer is empty then anyway.
        self.cells.chunks((self.width as usize).max(1))
    }

    /// Resets every cell to the background color.
    pub fn clear(&mut self) {
        self.cells.fill(Color::BACKGROUND);
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y * self.width + x) as usize
    }

    fn out_of_bounds(&self, x: u32, y: u32) -> GridError {
        GridError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_uniform_background() {
        let grid = Grid::new(4, 3);
        assert_eq!(grid.dimensions(), (4, 3));
        for row in grid.rows() {
            assert!(row.iter().all(|&c| c == Color::BACKGROUND));
        }
    }

    #[test]
    fn test_set_then_get_returns_written_color() {
        let mut grid = Grid::new(5, 5);
        let color = Color::new(0x11, 0x22, 0x33);

        grid.set_pixel(3, 2, color).unwrap();
        assert_eq!(grid.get_pixel(3, 2).unwrap(), color);
        assert_eq!(grid.get_pixel(2, 3).unwrap(), Color::BACKGROUND);
    }

    #[test]
    fn test_out_of_bounds_access_fails() {
        let mut grid = Grid::new(2, 2);

        assert!(matches!(
            grid.get_pixel(2, 0),
            Err(GridError::OutOfBounds { x: 2, y: 0, .. })
        ));
        assert!(grid.set_pixel(0, 2, Color::BLACK).is_err());

        // Failed writes leave the grid untouched.
        assert_eq!(grid.get_pixel(0, 0).unwrap(), Color::BACKGROUND);
    }

    #[test]
    fn test_rows_are_row_major() {
        let mut grid = Grid::new(3, 2);
        grid.set_pixel(2, 0, Color::BLACK).unwrap();
        grid.set_pixel(0, 1, Color::new(1, 2, 3)).unwrap();

        let rows: Vec<&[Color]> = grid.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][2], Color::BLACK);
        assert_eq!(rows[1][0], Color::new(1, 2, 3));
    }

    #[test]
    fn test_zero_width_grid_is_empty() {
        let grid = Grid::new(0, 3);
        assert_eq!(grid.rows().count(), 0);
        assert!(grid.get_pixel(0, 0).is_err());

        let empty = Grid::new(0, 0);
        assert_eq!(empty.rows().count(), 0);
    }

    #[test]
    fn test_clear_restores_background() {
        let mut grid = Grid::new(3, 3);
        grid.set_pixel(1, 1, Color::BLACK).unwrap();

        grid.clear();
        assert_eq!(grid.get_pixel(1, 1).unwrap(), Color::BACKGROUND);
    }
}
