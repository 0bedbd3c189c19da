//! Tests for the simulator module.

use super::*;
use crate::geometry::{Direction, GridPos, RelativeDirection, DIRECTION_CYCLE};

mod decision;
mod generation;
mod monotonicity;

/// Bordered grid with an all-empty interior.
fn open_grid(rows: usize, cols: usize) -> Vec<Vec<CellKind>> {
    let mut grid = vec![vec![CellKind::Empty; cols]; rows];
    for (r, row) in grid.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            if r == 0 || r == rows - 1 || c == 0 || c == cols - 1 {
                *cell = CellKind::Wall;
            }
        }
    }
    grid
}
