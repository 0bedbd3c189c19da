//! Seeded map generation for the grid world.

use crate::geometry::GridPos;

use super::types::CellKind;
use super::world_model::{GridConfig, GridWorld};

/// Build a fresh world from the generation config and a map seed.
///
/// The border is forced to walls; each interior cell rolls for an obstacle
/// first and for dirt only if the obstacle roll missed. The base is drawn
/// uniformly among interior non-wall cells, the robot start among the
/// remaining ones. A fully walled interior falls back to the grid center
/// for both.
pub fn generate_grid_world(config: &GridConfig, seed: u64) -> GridWorld {
    let config = config.clone().sanitized();
    let mut rng = Lcg::new(seed);

    let rows = config.rows as usize;
    let cols = config.cols as usize;
    let mut grid = vec![vec![CellKind::Empty; cols]; rows];

    for (r, row) in grid.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            if r == 0 || r == rows - 1 || c == 0 || c == cols - 1 {
                *cell = CellKind::Wall;
            } else if rng.next_f64() < config.obstacle_prob {
                *cell = CellKind::Wall;
            } else if rng.next_f64() < config.dirt_prob {
                // The dirt roll only happens for cells that escaped the
                // obstacle roll; the probabilities are sequential, not
                // joint.
                *cell = CellKind::Dirt;
            }
        }
    }

    let base = random_free_cell(&grid, None, &mut rng);
    grid[base.row as usize][base.col as usize] = CellKind::Base;

    let robot = random_free_cell(&grid, Some(base), &mut rng);

    GridWorld::from_parts(grid, robot, base)
}

/// Map seed for a given reset generation, derived from the session seed so
/// consecutive resets produce different maps while equal sessions replay
/// identically.
pub fn map_seed(session_seed: u64, generation: u64) -> u64 {
    let mut x = session_seed ^ 0x9E37_79B9_7F4A_7C15;
    x ^= generation.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    splitmix64(x)
}

fn random_free_cell(grid: &[Vec<CellKind>], forbidden: Option<GridPos>, rng: &mut Lcg) -> GridPos {
    let rows = grid.len();
    let cols = grid.first().map_or(0, |row| row.len());

    let mut free = Vec::new();
    for (r, row) in grid.iter().enumerate().take(rows - 1).skip(1) {
        for (c, cell) in row.iter().enumerate().take(cols - 1).skip(1) {
            let pos = GridPos::new(r as i32, c as i32);
            if *cell != CellKind::Wall && Some(pos) != forbidden {
                free.push(pos);
            }
        }
    }

    if free.is_empty() {
        return GridPos::new(rows as i32 / 2, cols as i32 / 2);
    }
    let idx = (rng.next_u64() % free.len() as u64) as usize;
    free[idx]
}

fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    x ^= x >> 30;
    x = x.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}

struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }

    fn next_f64(&mut self) -> f64 {
        let val = (self.next_u64() >> 11) as f64;
        val / ((1u64 << 53) as f64)
    }
}
