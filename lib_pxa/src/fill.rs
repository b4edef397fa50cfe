use log::debug;

use crate::color::Color;
use crate::grid::Grid;

/// Recolors the maximal 4-connected region of `target`-colored cells reachable
/// from `(x, y)` to `replacement`, and returns the repainted cells in
/// visitation order.
///
/// Uses an explicit work stack instead of recursion so large regions cannot
/// blow the call stack. Neighbors are pushed without checking their color; the
/// equality check happens on pop, which makes redundant pushes harmless.
///
/// Returns an empty list when `target == replacement` or the start cell does
/// not currently hold `target` (both would otherwise cause redundant or
/// unbounded work).
pub fn flood_fill(
    grid: &mut Grid,
    x: u32,
    y: u32,
    target: Color,
    replacement: Color,
) -> Vec<(u32, u32)> {
    if target == replacement || grid.get_pixel(x, y).ok() != Some(target) {
        return Vec::new();
    }

    let mut repainted = Vec::new();
    let mut stack = vec![(x, y)];

    while let Some((cx, cy)) = stack.pop() {
        if grid.get_pixel(cx, cy).ok() != Some(target) {
            continue;
        }

        // In bounds and matching, so the write cannot fail.
        let _ = grid.set_pixel(cx, cy, replacement);
        repainted.push((cx, cy));

        if cx > 0 {
            stack.push((cx - 1, cy));
        }
        if cx + 1 < grid.width() {
            stack.push((cx + 1, cy));
        }
        if cy > 0 {
            stack.push((cx, cy - 1));
        }
        if cy + 1 < grid.height() {
            stack.push((cx, cy + 1));
        }
    }

    debug!(
        "Flood fill from ({}, {}) repainted {} cells",
        x,
        y,
        repainted.len()
    );

    repainted
}
