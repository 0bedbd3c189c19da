//! Cleaning-robot simulator: grid world, reactive agent, and step kernel.
//!
//! This module is organized into submodules:
//! - `types`: core type definitions (cells, actions, constants)
//! - `battery`: battery state and the energy economy
//! - `world_model`: the grid world (GridWorld, GridConfig)
//! - `init`: seeded random map generation
//! - `agent`: percepts and the reactive decision cascade
//! - `kernel`: SimulationKernel (step loop, events, reset)
//! - `snapshot`: the externally visible state projection

mod agent;
mod battery;
mod init;
mod kernel;
mod snapshot;
mod types;
mod world_model;

#[cfg(test)]
mod tests;

// Re-export all public types
pub use agent::{AgentState, DecisionRecord, Percept, ReactiveAgent};
pub use battery::{BatteryState, BatteryStatus, EnergyConfig};
pub use init::{generate_grid_world, map_seed};
pub use kernel::{SimEvent, SimEventKind, SimPhase, SimulationConfig, SimulationKernel};
pub use snapshot::{SimulationSnapshot, SnapshotError};
pub use types::{
    Action, CellKind, SimEventId, StepCount, BATTERY_CAPACITY, DEFAULT_INITIAL_BATTERY,
    DEFAULT_LOW_BATTERY_THRESHOLD, DEFAULT_RECHARGE_AMOUNT, MIN_GRID_SIDE,
};
pub use world_model::{EnvironmentState, GridConfig, GridWorld, ObstacleScan};
