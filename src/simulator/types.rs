//! Core type definitions: cell kinds, actions, and simulation constants.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

pub type StepCount = u64;
pub type SimEventId = u64;

// ============================================================================
// Constants
// ============================================================================

pub const BATTERY_CAPACITY: i32 = 100;
pub const DEFAULT_INITIAL_BATTERY: i32 = 100;
pub const DEFAULT_LOW_BATTERY_THRESHOLD: i32 = 20;
pub const DEFAULT_RECHARGE_AMOUNT: i32 = 8;
pub const MIN_GRID_SIDE: i32 = 3;

// ============================================================================
// Cell Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CellKind {
    #[default]
    Empty,
    Wall,
    Dirt,
    Base,
}

impl CellKind {
    /// Only walls block movement; dirt and the base are traversable.
    pub fn is_obstacle(self) -> bool {
        matches!(self, CellKind::Wall)
    }

    pub fn label(self) -> &'static str {
        match self {
            CellKind::Empty => "EMPTY",
            CellKind::Wall => "WALL",
            CellKind::Dirt => "DIRT",
            CellKind::Base => "BASE",
        }
    }
}

// ============================================================================
// Action Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Clean,
    MoveForward,
    TurnLeft,
    TurnRight,
    GoToBase,
    Stop,
}

impl Action {
    pub fn label(self) -> &'static str {
        match self {
            Action::Clean => "clean",
            Action::MoveForward => "move_forward",
            Action::TurnLeft => "turn_left",
            Action::TurnRight => "turn_right",
            Action::GoToBase => "go_to_base",
            Action::Stop => "stop",
        }
    }
}
