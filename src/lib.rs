pub mod geometry;
pub mod simulator;

pub use geometry::{squared_distance, Direction, GridPos, RelativeDirection, DIRECTION_CYCLE};
pub use simulator::{
    generate_grid_world, map_seed, Action, AgentState, BatteryState, BatteryStatus, CellKind,
    DecisionRecord, EnergyConfig, EnvironmentState, GridConfig, GridWorld, ObstacleScan, Percept,
    ReactiveAgent, SimEvent, SimEventId, SimEventKind, SimPhase, SimulationConfig,
    SimulationKernel, SimulationSnapshot, SnapshotError, StepCount, BATTERY_CAPACITY,
    DEFAULT_INITIAL_BATTERY, DEFAULT_LOW_BATTERY_THRESHOLD, DEFAULT_RECHARGE_AMOUNT,
    MIN_GRID_SIDE,
};
