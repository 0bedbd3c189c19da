//! Reactive agent: percepts, the ordered decision cascade, and history.

use serde::{Deserialize, Serialize};

use crate::geometry::{Direction, RelativeDirection};

use super::battery::{BatteryState, BatteryStatus, EnergyConfig};
use super::types::{Action, CellKind};
use super::world_model::GridWorld;

// ============================================================================
// Percept
// ============================================================================

/// Locally sensed conditions, built fresh each decision cycle and never
/// cached. Obstacle flags report physical walls only; `front_is_base`
/// exists so the rules can treat the base specially even though it is
/// traversable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Percept {
    pub battery: BatteryState,
    pub front_obstacle: bool,
    pub left_obstacle: bool,
    pub right_obstacle: bool,
    pub on_dirt: bool,
    pub on_base: bool,
    pub front_is_base: bool,
}

/// One audit entry: what was sensed, what was chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRecord {
    pub percept: Percept,
    pub action: Action,
}

// ============================================================================
// Reactive Agent
// ============================================================================

/// Memoryless policy: orientation plus battery, and an append-only audit
/// log of decisions. The log is for introspection and tests; the rules
/// never read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactiveAgent {
    orientation: Direction,
    battery: BatteryStatus,
    history: Vec<DecisionRecord>,
}

impl ReactiveAgent {
    pub fn new(config: &EnergyConfig) -> Self {
        Self {
            orientation: Direction::North,
            battery: BatteryStatus::from_config(config),
            history: Vec::new(),
        }
    }

    /// Reinitialize in place: fresh orientation and charge, history
    /// cleared.
    pub fn reset(&mut self, orientation: Direction, battery_level: i32) {
        self.orientation = orientation;
        self.battery.set_level(battery_level);
        self.history.clear();
    }

    pub fn orientation(&self) -> Direction {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: Direction) {
        self.orientation = orientation;
    }

    pub fn battery(&self) -> &BatteryStatus {
        &self.battery
    }

    pub fn battery_mut(&mut self) -> &mut BatteryStatus {
        &mut self.battery
    }

    pub fn history(&self) -> &[DecisionRecord] {
        &self.history
    }

    pub fn interactions(&self) -> usize {
        self.history.len()
    }

    // ------------------------------------------------------------------
    // Perception
    // ------------------------------------------------------------------

    pub fn perceive(&self, world: &GridWorld) -> Percept {
        let obstacles = world.sense_obstacles(self.orientation);
        let pos = world.robot_position();
        Percept {
            battery: self.battery.state(),
            front_obstacle: obstacles.front,
            left_obstacle: obstacles.left,
            right_obstacle: obstacles.right,
            on_dirt: world.is_dirty(pos),
            on_base: world.is_robot_on_base(),
            front_is_base: world.relative_cell(self.orientation, RelativeDirection::Front)
                == CellKind::Base,
        }
    }

    // ------------------------------------------------------------------
    // Decision rules
    // ------------------------------------------------------------------

    /// Ordered rule cascade; the first matching rule wins. The ordering is
    /// part of the observable contract. Every call appends to the audit
    /// log.
    pub fn decide(&mut self, percept: &Percept) -> Action {
        let action = self.decide_from(percept);
        self.history.push(DecisionRecord {
            percept: percept.clone(),
            action,
        });
        action
    }

    fn decide_from(&self, percept: &Percept) -> Action {
        // 1. Low battery away from the base: head home.
        if percept.battery.is_low() && !percept.on_base {
            return Action::GoToBase;
        }

        // 2. On the base and not yet full: sit still while recharging.
        if percept.on_base && !self.battery.is_full() {
            return Action::Stop;
        }

        // 3. Dirt underneath: clean it.
        if percept.on_dirt {
            return Action::Clean;
        }

        // 4. Normal movement. A charged robot has no business re-entering
        // the base, so the base ahead counts as an obstacle here.
        let avoid_base_ahead =
            !percept.battery.is_low() && !percept.on_base && percept.front_is_base;
        let front_blocked = percept.front_obstacle || avoid_base_ahead;

        if !front_blocked {
            Action::MoveForward
        } else if !percept.left_obstacle {
            Action::TurnLeft
        } else if !percept.right_obstacle {
            Action::TurnRight
        } else {
            // Boxed in: keep turning right until something opens up.
            Action::TurnRight
        }
    }

    pub fn to_state(&self) -> AgentState {
        AgentState {
            orientation: self.orientation,
            battery_level: self.battery.level(),
            low_battery_threshold: self.battery.low_battery_threshold(),
            interactions: self.history.len(),
        }
    }
}

// ============================================================================
// Projection
// ============================================================================

/// Agent slice of the simulation snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentState {
    pub orientation: Direction,
    pub battery_level: i32,
    pub low_battery_threshold: i32,
    pub interactions: usize,
}
