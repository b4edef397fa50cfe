use log::debug;
use rand::{Rng, RngCore};

use crate::color::Color;
use crate::fill::flood_fill;
use crate::grid::Grid;
use crate::palette::Palette;

/// The drawing mode. Exactly one is active at a time; switching never touches
/// the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    Pen,
    Bucket,
    Dither,
}

/// The core controller: owns the grid, the color slots, the active tool and
/// the randomness source for the dither tool.
///
/// Pointer handlers take grid coordinates (the UI shell converts pixel
/// positions) and return the cells they mutated so the renderer can repaint
/// exactly those.
pub struct Editor {
    grid: Grid,
    palette: Palette,
    tool: Tool,
    rng: Box<dyn RngCore>,
}

impl Editor {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_rng(width, height, rand::thread_rng())
    }

    /// Builds an editor with an injected randomness source, which makes the
    /// dither tool deterministic under a seeded generator.
    pub fn with_rng(width: u32, height: u32, rng: impl RngCore + 'static) -> Self {
        Self {
            grid: Grid::new(width, height),
            palette: Palette::new(),
            tool: Tool::default(),
            rng: Box::new(rng),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn use_pen(&mut self) {
        self.tool = Tool::Pen;
    }

    pub fn use_bucket(&mut self) {
        self.tool = Tool::Bucket;
    }

    pub fn use_dither(&mut self) {
        self.tool = Tool::Dither;
    }

    /// Sets the primary color, which immediately becomes the drawing color.
    pub fn choose_primary(&mut self, color: Color) {
        self.palette.set_primary(color);
    }

    /// Sets the secondary color; the drawing color is left as-is.
    pub fn choose_secondary(&mut self, color: Color) {
        self.palette.set_secondary(color);
    }

    /// Toggles the drawing color between the primary and secondary slots.
    pub fn swap_colors(&mut self) {
        self.palette.swap();
    }

    /// Resets the whole grid to the background color.
    pub fn clear(&mut self) {
        self.grid.clear();
    }

    /// Applies the active tool at `(x, y)` and returns the mutated cells.
    /// Out-of-bounds coordinates are ignored.
    pub fn on_pointer_down(&mut self, x: u32, y: u32) -> Vec<(u32, u32)> {
        self.apply_tool(x, y)
    }

    /// Drag events paint exactly like press events.
    pub fn on_pointer_drag(&mut self, x: u32, y: u32) -> Vec<(u32, u32)> {
        self.apply_tool(x, y)
    }

    fn apply_tool(&mut self, x: u32, y: u32) -> Vec<(u32, u32)> {
        if !self.grid.in_bounds(x, y) {
            debug!("Ignoring pointer event outside grid: ({}, {})", x, y);
            return Vec::new();
        }

        match self.tool {
            Tool::Pen => self.paint_cell(x, y, self.palette.get_current_color()),
            Tool::Bucket => match self.grid.get_pixel(x, y) {
                Ok(target) => flood_fill(
                    &mut self.grid,
                    x,
                    y,
                    target,
                    self.palette.get_current_color(),
                ),
                Err(_) => Vec::new(),
            },
            Tool::Dither => {
                // Per-event coin flip between the drawing color and the
                // background, not a fixed halftone pattern.
                let color = if self.rng.gen_bool(0.5) {
                    self.palette.get_current_color()
                } else {
                    Color::BACKGROUND
                };
                self.paint_cell(x, y, color)
            }
        }
    }

    fn paint_cell(&mut self, x: u32, y: u32, color: Color) -> Vec<(u32, u32)> {
        match self.grid.set_pixel(x, y, color) {
            Ok(()) => vec![(x, y)],
            Err(_) => Vec::new(),
        }
    }
}
