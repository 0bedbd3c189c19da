//! Grid world model: cells, robot and base positions, spatial queries.

use serde::{Deserialize, Serialize};

use crate::geometry::{Direction, GridPos, RelativeDirection};

use super::types::{CellKind, MIN_GRID_SIDE};

// ============================================================================
// Grid Configuration
// ============================================================================

/// Map-generation parameters.
///
/// The two probabilities are rolled sequentially per interior cell: the
/// obstacle roll first, then the dirt roll only for cells that stayed
/// clear. Effective dirt density is therefore
/// `(1 - obstacle_prob) * dirt_prob`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub rows: i32,
    pub cols: i32,
    pub obstacle_prob: f64,
    pub dirt_prob: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 8,
            cols: 8,
            obstacle_prob: 0.1,
            dirt_prob: 0.2,
        }
    }
}

impl GridConfig {
    /// Floor the sides so an interior exists. Probabilities are accepted
    /// as-is; out-of-range values saturate the roll instead of failing.
    pub fn sanitized(mut self) -> Self {
        if self.rows < MIN_GRID_SIDE {
            self.rows = MIN_GRID_SIDE;
        }
        if self.cols < MIN_GRID_SIDE {
            self.cols = MIN_GRID_SIDE;
        }
        self
    }
}

// ============================================================================
// Obstacle Scan
// ============================================================================

/// Physical-wall readings around the robot, relative to an orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObstacleScan {
    pub front: bool,
    pub left: bool,
    pub right: bool,
}

// ============================================================================
// Grid World
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridWorld {
    rows: i32,
    cols: i32,
    grid: Vec<Vec<CellKind>>,
    robot: GridPos,
    base: GridPos,
}

impl GridWorld {
    /// Assemble a world from explicit parts. Dimensions are taken from the
    /// grid itself; callers pinning maps by hand own the placement
    /// invariants (robot and base on non-wall interior cells).
    pub fn from_parts(grid: Vec<Vec<CellKind>>, robot: GridPos, base: GridPos) -> Self {
        let rows = grid.len() as i32;
        let cols = grid.first().map_or(0, |row| row.len()) as i32;
        Self {
            rows,
            cols,
            grid,
            robot,
            base,
        }
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn robot_position(&self) -> GridPos {
        self.robot
    }

    pub fn base_position(&self) -> GridPos {
        self.base
    }

    // ------------------------------------------------------------------
    // Spatial queries
    // ------------------------------------------------------------------

    pub fn is_inside(&self, pos: GridPos) -> bool {
        pos.row >= 0 && pos.row < self.rows && pos.col >= 0 && pos.col < self.cols
    }

    /// Out-of-range coordinates read as walls, so callers never need a
    /// separate bounds check.
    pub fn cell(&self, pos: GridPos) -> CellKind {
        if !self.is_inside(pos) {
            return CellKind::Wall;
        }
        self.grid[pos.row as usize][pos.col as usize]
    }

    pub fn is_obstacle(&self, pos: GridPos) -> bool {
        self.cell(pos).is_obstacle()
    }

    pub fn is_dirty(&self, pos: GridPos) -> bool {
        self.cell(pos) == CellKind::Dirt
    }

    pub fn is_base(&self, pos: GridPos) -> bool {
        self.cell(pos) == CellKind::Base
    }

    // ------------------------------------------------------------------
    // Relative sensing
    // ------------------------------------------------------------------

    pub fn sense_obstacles(&self, orientation: Direction) -> ObstacleScan {
        ObstacleScan {
            front: self.is_obstacle(self.relative_neighbor(orientation, RelativeDirection::Front)),
            left: self.is_obstacle(self.relative_neighbor(orientation, RelativeDirection::Left)),
            right: self.is_obstacle(self.relative_neighbor(orientation, RelativeDirection::Right)),
        }
    }

    /// Raw cell kind next to the robot, for rules that need to tell the
    /// base (traversable) apart from a wall.
    pub fn relative_cell(&self, orientation: Direction, relative: RelativeDirection) -> CellKind {
        self.cell(self.relative_neighbor(orientation, relative))
    }

    fn relative_neighbor(&self, orientation: Direction, relative: RelativeDirection) -> GridPos {
        self.robot.neighbor(orientation.resolve(relative))
    }

    // ------------------------------------------------------------------
    // Mutators
    // ------------------------------------------------------------------

    /// Dirt under the robot becomes empty. Returns whether anything was
    /// cleaned.
    pub fn clean_current_cell(&mut self) -> bool {
        if self.cell(self.robot) != CellKind::Dirt {
            return false;
        }
        self.grid[self.robot.row as usize][self.robot.col as usize] = CellKind::Empty;
        true
    }

    /// Step onto the front neighbor unless it is a wall. Moving onto dirt
    /// or the base is legal here; cleaning and recharging are kernel
    /// effects.
    pub fn move_robot_forward(&mut self, orientation: Direction) -> bool {
        self.set_robot_position(self.robot.neighbor(orientation))
    }

    /// Teleport with the same obstacle guard as movement.
    pub fn set_robot_position(&mut self, pos: GridPos) -> bool {
        if self.is_obstacle(pos) {
            return false;
        }
        self.robot = pos;
        true
    }

    // ------------------------------------------------------------------
    // Aggregates
    // ------------------------------------------------------------------

    pub fn is_robot_on_base(&self) -> bool {
        self.robot == self.base
    }

    pub fn count_dirty_cells(&self) -> u32 {
        self.grid
            .iter()
            .flatten()
            .filter(|cell| **cell == CellKind::Dirt)
            .count() as u32
    }

    pub fn to_state(&self) -> EnvironmentState {
        EnvironmentState {
            rows: self.rows,
            cols: self.cols,
            grid: self.grid.clone(),
            robot_position: self.robot,
            base_position: self.base,
            dirty_cells: self.count_dirty_cells(),
        }
    }
}

// ============================================================================
// Projection
// ============================================================================

/// Environment slice of the simulation snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentState {
    pub rows: i32,
    pub cols: i32,
    pub grid: Vec<Vec<CellKind>>,
    pub robot_position: GridPos,
    pub base_position: GridPos,
    pub dirty_cells: u32,
}
