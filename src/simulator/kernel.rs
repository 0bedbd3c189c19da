//! SimulationKernel: the step loop, energy accounting, and events.

use serde::{Deserialize, Serialize};

use crate::geometry::{squared_distance, Direction, GridPos};

use super::agent::{Percept, ReactiveAgent};
use super::battery::EnergyConfig;
use super::init::{generate_grid_world, map_seed};
use super::snapshot::SimulationSnapshot;
use super::types::{Action, SimEventId, StepCount};
use super::world_model::{GridConfig, GridWorld};

// ============================================================================
// Simulation Configuration
// ============================================================================

/// All construction parameters of a simulation session. Injectable, so
/// independent sessions can coexist and be pinned in tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub seed: u64,
    pub grid: GridConfig,
    pub energy: EnergyConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            grid: GridConfig::default(),
            energy: EnergyConfig::default(),
        }
    }
}

impl SimulationConfig {
    pub fn sanitized(mut self) -> Self {
        self.grid = self.grid.sanitized();
        self.energy = self.energy.sanitized();
        self
    }
}

// ============================================================================
// Simulation Phase
// ============================================================================

/// Explicit simulation phase. `Done` and `Depleted` are terminal; a step
/// taken there is a pure snapshot read. Cleared dirt wins over a dead
/// battery when both hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimPhase {
    Running,
    Done,
    Depleted,
}

impl SimPhase {
    pub fn is_terminal(self) -> bool {
        !matches!(self, SimPhase::Running)
    }
}

// ============================================================================
// Event Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimEvent {
    pub id: SimEventId,
    pub step: StepCount,
    pub kind: SimEventKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum SimEventKind {
    CellCleaned {
        pos: GridPos,
    },
    RobotMoved {
        from: GridPos,
        to: GridPos,
    },
    RobotTurned {
        from: Direction,
        to: Direction,
    },
    ReturnStep {
        from: GridPos,
        to: GridPos,
        facing: Direction,
    },
    ReturnBlocked {
        pos: GridPos,
    },
    Recharged {
        amount: i32,
        level: i32,
    },
    BatteryDepleted {
        action: Action,
    },
}

// ============================================================================
// SimulationKernel
// ============================================================================

/// Candidate order for the greedy return step. Squared-distance ties go
/// to the earliest entry, and recorded runs depend on that, so the order
/// is fixed.
const RETURN_CANDIDATES: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::West,
    Direction::East,
];

/// One simulation session: a world, an agent, and the step loop that
/// connects them. `reset` reinitializes in place, so callers holding the
/// kernel keep working across resets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationKernel {
    config: SimulationConfig,
    world: GridWorld,
    agent: ReactiveAgent,
    step_count: StepCount,
    last_percept: Option<Percept>,
    last_action: Option<Action>,
    initial_dirty_cells: u32,
    generation: u64,
    next_event_id: SimEventId,
    journal: Vec<SimEvent>,
}

impl SimulationKernel {
    pub fn new() -> Self {
        Self::with_config(SimulationConfig::default())
    }

    pub fn with_config(config: SimulationConfig) -> Self {
        let config = config.sanitized();
        let world = generate_grid_world(&config.grid, map_seed(config.seed, 0));
        Self::assemble(config, world)
    }

    /// Install a hand-built world, for scenarios that pin exact maps.
    pub fn with_world(config: SimulationConfig, world: GridWorld) -> Self {
        Self::assemble(config.sanitized(), world)
    }

    fn assemble(config: SimulationConfig, world: GridWorld) -> Self {
        let agent = ReactiveAgent::new(&config.energy);
        let initial_dirty_cells = world.count_dirty_cells().max(1);
        Self {
            config,
            world,
            agent,
            step_count: 0,
            last_percept: None,
            last_action: None,
            initial_dirty_cells,
            generation: 0,
            next_event_id: 0,
            journal: Vec::new(),
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn world(&self) -> &GridWorld {
        &self.world
    }

    pub fn agent(&self) -> &ReactiveAgent {
        &self.agent
    }

    pub fn journal(&self) -> &[SimEvent] {
        &self.journal
    }

    pub fn step_count(&self) -> StepCount {
        self.step_count
    }

    pub fn initial_dirty_cells(&self) -> u32 {
        self.initial_dirty_cells
    }

    /// Single derivation point for the phase; the step guard and the
    /// snapshot's `done` flag both read this.
    pub fn phase(&self) -> SimPhase {
        if self.world.count_dirty_cells() == 0 {
            SimPhase::Done
        } else if self.agent.battery().is_empty() {
            SimPhase::Depleted
        } else {
            SimPhase::Running
        }
    }

    // ------------------------------------------------------------------
    // Session control
    // ------------------------------------------------------------------

    /// Reinitialize in place: a fresh map from the next derived seed, the
    /// agent back to north/full, counters and logs cleared.
    pub fn reset(&mut self) -> SimulationSnapshot {
        self.generation = self.generation.wrapping_add(1);
        self.world =
            generate_grid_world(&self.config.grid, map_seed(self.config.seed, self.generation));
        self.agent
            .reset(Direction::North, self.config.energy.initial_level);
        self.step_count = 0;
        self.last_percept = None;
        self.last_action = None;
        self.initial_dirty_cells = self.world.count_dirty_cells().max(1);
        self.next_event_id = 0;
        self.journal.clear();
        self.snapshot()
    }

    /// Advance one perceive → decide → act cycle. In a terminal phase this
    /// is a pure snapshot read; nothing advances, including the step
    /// counter.
    pub fn step(&mut self) -> SimulationSnapshot {
        if self.phase().is_terminal() {
            return self.snapshot();
        }

        let percept = self.agent.perceive(&self.world);
        let action = self.agent.decide(&percept);
        self.last_percept = Some(percept);
        self.last_action = Some(action);

        self.apply_action(action);
        self.step_count = self.step_count.saturating_add(1);
        self.snapshot()
    }

    /// Read the current state without advancing.
    pub fn get_state(&self) -> SimulationSnapshot {
        self.snapshot()
    }

    // ------------------------------------------------------------------
    // Effects
    // ------------------------------------------------------------------

    fn apply_action(&mut self, action: Action) {
        let cost = self.config.energy.action_cost(action);
        self.agent.battery_mut().apply_delta(cost);

        // Draining the last unit interrupts the step before its physical
        // effect: a dead robot neither cleans nor moves nor recharges.
        if self.agent.battery().is_empty() {
            self.record_event(SimEventKind::BatteryDepleted { action });
            return;
        }

        match action {
            Action::Clean => {
                let pos = self.world.robot_position();
                if self.world.clean_current_cell() {
                    self.record_event(SimEventKind::CellCleaned { pos });
                }
            }
            Action::MoveForward => {
                let from = self.world.robot_position();
                if self.world.move_robot_forward(self.agent.orientation()) {
                    self.record_event(SimEventKind::RobotMoved {
                        from,
                        to: self.world.robot_position(),
                    });
                }
            }
            Action::TurnLeft => {
                let from = self.agent.orientation();
                let to = from.turned_left();
                self.agent.set_orientation(to);
                self.record_event(SimEventKind::RobotTurned { from, to });
            }
            Action::TurnRight => {
                let from = self.agent.orientation();
                let to = from.turned_right();
                self.agent.set_orientation(to);
                self.record_event(SimEventKind::RobotTurned { from, to });
            }
            Action::GoToBase => self.return_step(),
            Action::Stop => {}
        }

        // Ending the step on the base earns the flat recharge, stacking
        // with whatever the action just cost.
        if self.world.is_robot_on_base() {
            let amount = self.config.energy.recharge_amount;
            self.agent.battery_mut().apply_delta(amount);
            self.record_event(SimEventKind::Recharged {
                amount,
                level: self.agent.battery().level(),
            });
        }
    }

    /// One greedy step toward the base: look at the four absolute
    /// neighbors, drop walls, take the one closest to the base by squared
    /// distance. No search, no memory.
    fn return_step(&mut self) {
        let from = self.world.robot_position();
        let base = self.world.base_position();

        let mut best: Option<(Direction, i64)> = None;
        for candidate in RETURN_CANDIDATES {
            let neighbor = from.neighbor(candidate);
            if self.world.is_obstacle(neighbor) {
                continue;
            }
            let dist = squared_distance(neighbor, base);
            if best.map_or(true, |(_, best_dist)| dist < best_dist) {
                best = Some((candidate, dist));
            }
        }

        match best {
            Some((direction, _)) => {
                self.agent.set_orientation(direction);
                // Already wall-filtered, so the move cannot be rejected.
                self.world.move_robot_forward(direction);
                self.record_event(SimEventKind::ReturnStep {
                    from,
                    to: self.world.robot_position(),
                    facing: direction,
                });
            }
            None => {
                self.record_event(SimEventKind::ReturnBlocked { pos: from });
            }
        }
    }

    fn record_event(&mut self, kind: SimEventKind) {
        let event = SimEvent {
            id: self.next_event_id,
            step: self.step_count,
            kind,
        };
        self.next_event_id = self.next_event_id.saturating_add(1);
        self.journal.push(event);
    }

    // ------------------------------------------------------------------
    // Projection
    // ------------------------------------------------------------------

    pub fn snapshot(&self) -> SimulationSnapshot {
        let environment = self.world.to_state();
        let dirty_now = environment.dirty_cells;
        let progress = 1.0 - dirty_now as f64 / self.initial_dirty_cells as f64;
        SimulationSnapshot {
            step_count: self.step_count,
            environment,
            agent: self.agent.to_state(),
            last_perception: self.last_percept.clone(),
            last_action: self.last_action,
            progress,
            done: self.phase() == SimPhase::Done,
        }
    }
}

impl Default for SimulationKernel {
    fn default() -> Self {
        Self::new()
    }
}
