use lib_pxa::{Color, Grid};

pub const RED: Color = Color::new(255, 0, 0);

/// Builds a white `width x height` grid with a horizontal black divider
/// across the full row `divider_y`, splitting the canvas into two regions.
pub fn grid_with_divider(width: u32, height: u32, divider_y: u32) -> Grid {
    let mut grid = Grid::new(width, height);
    for x in 0..width {
        grid.set_pixel(x, divider_y, Color::BLACK).unwrap();
    }
    grid
}

pub fn count_cells(grid: &Grid, color: Color) -> usize {
    grid.rows()
        .flat_map(|row| row.iter())
        .filter(|&&c| c == color)
        .count()
}
