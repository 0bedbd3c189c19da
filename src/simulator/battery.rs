//! Battery state and the energy economy of the cleaning robot.

use serde::{Deserialize, Serialize};

use super::types::{
    Action, BATTERY_CAPACITY, DEFAULT_INITIAL_BATTERY, DEFAULT_LOW_BATTERY_THRESHOLD,
    DEFAULT_RECHARGE_AMOUNT,
};

// ============================================================================
// Battery State
// ============================================================================

/// Coarse battery bucket exposed to the decision rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatteryState {
    /// Charge at or below the low-battery threshold.
    Low,
    /// Enough charge for normal operation.
    High,
}

impl BatteryState {
    pub fn is_low(self) -> bool {
        matches!(self, BatteryState::Low)
    }

    pub fn label(self) -> &'static str {
        match self {
            BatteryState::Low => "low",
            BatteryState::High => "high",
        }
    }
}

// ============================================================================
// Energy Configuration
// ============================================================================

/// Energy economy knobs: per-action costs and the base recharge credit.
///
/// Costs are signed deltas applied to the battery level. `go_to_base` is
/// the cheapest action so a low robot can always afford the trip home
/// across several steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnergyConfig {
    /// Charge a fresh agent starts with (default: 100).
    pub initial_level: i32,
    /// Level at or below which the battery reads `low` (default: 20).
    pub low_battery_threshold: i32,
    /// Flat credit applied whenever the robot ends a step on the base
    /// (default: 8).
    pub recharge_amount: i32,
    pub clean_cost: i32,
    pub move_forward_cost: i32,
    pub turn_left_cost: i32,
    pub turn_right_cost: i32,
    pub go_to_base_cost: i32,
    pub stop_cost: i32,
}

impl Default for EnergyConfig {
    fn default() -> Self {
        Self {
            initial_level: DEFAULT_INITIAL_BATTERY,
            low_battery_threshold: DEFAULT_LOW_BATTERY_THRESHOLD,
            recharge_amount: DEFAULT_RECHARGE_AMOUNT,
            clean_cost: -4,
            move_forward_cost: -3,
            turn_left_cost: -2,
            turn_right_cost: -2,
            go_to_base_cost: -1,
            stop_cost: 0,
        }
    }
}

impl EnergyConfig {
    pub fn sanitized(mut self) -> Self {
        self.initial_level = self.initial_level.clamp(0, BATTERY_CAPACITY);
        if self.low_battery_threshold < 0 {
            self.low_battery_threshold = 0;
        }
        if self.recharge_amount < 0 {
            self.recharge_amount = 0;
        }
        self
    }

    /// Signed energy delta charged for an action.
    pub fn action_cost(&self, action: Action) -> i32 {
        match action {
            Action::Clean => self.clean_cost,
            Action::MoveForward => self.move_forward_cost,
            Action::TurnLeft => self.turn_left_cost,
            Action::TurnRight => self.turn_right_cost,
            Action::GoToBase => self.go_to_base_cost,
            Action::Stop => self.stop_cost,
        }
    }
}

// ============================================================================
// Battery Status
// ============================================================================

/// Battery charge tracking for the agent.
///
/// The level is only ever written through the clamping setter, so it is
/// never observed outside `[0, BATTERY_CAPACITY]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatteryStatus {
    level: i32,
    low_battery_threshold: i32,
}

impl BatteryStatus {
    pub fn new(level: i32, low_battery_threshold: i32) -> Self {
        let mut status = Self {
            level: 0,
            low_battery_threshold: low_battery_threshold.max(0),
        };
        status.set_level(level);
        status
    }

    pub fn from_config(config: &EnergyConfig) -> Self {
        Self::new(config.initial_level, config.low_battery_threshold)
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn low_battery_threshold(&self) -> i32 {
        self.low_battery_threshold
    }

    /// The single write path for the level.
    pub fn set_level(&mut self, level: i32) {
        self.level = level.clamp(0, BATTERY_CAPACITY);
    }

    /// Apply a signed delta through the clamping setter.
    pub fn apply_delta(&mut self, delta: i32) {
        self.set_level(self.level.saturating_add(delta));
    }

    /// Bucket used by the decision rules: low iff at or below the
    /// threshold.
    pub fn state(&self) -> BatteryState {
        if self.level <= self.low_battery_threshold {
            BatteryState::Low
        } else {
            BatteryState::High
        }
    }

    pub fn is_empty(&self) -> bool {
        self.level == 0
    }

    pub fn is_full(&self) -> bool {
        self.level >= BATTERY_CAPACITY
    }
}

impl Default for BatteryStatus {
    fn default() -> Self {
        Self::from_config(&EnergyConfig::default())
    }
}

// ============================================================================
// Tests
// ============================================================================
