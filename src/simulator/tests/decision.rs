use super::*;

fn clear_percept() -> Percept {
    Percept {
        battery: BatteryState::High,
        front_obstacle: false,
        left_obstacle: false,
        right_obstacle: false,
        on_dirt: false,
        on_base: false,
        front_is_base: false,
    }
}

fn fresh_agent() -> ReactiveAgent {
    ReactiveAgent::new(&EnergyConfig::default())
}

#[test]
fn low_battery_away_from_base_heads_home() {
    let mut agent = fresh_agent();
    let percept = Percept {
        battery: BatteryState::Low,
        on_dirt: true,
        ..clear_percept()
    };
    // Going home outranks cleaning.
    assert_eq!(agent.decide(&percept), Action::GoToBase);
}

#[test]
fn recharging_on_base_sits_still() {
    let mut agent = fresh_agent();
    agent.battery_mut().set_level(60);
    let percept = Percept {
        on_base: true,
        ..clear_percept()
    };
    assert_eq!(agent.decide(&percept), Action::Stop);
}

#[test]
fn low_battery_on_base_keeps_recharging() {
    let mut agent = fresh_agent();
    agent.battery_mut().set_level(5);
    let percept = Percept {
        battery: BatteryState::Low,
        on_base: true,
        ..clear_percept()
    };
    assert_eq!(agent.decide(&percept), Action::Stop);
}

#[test]
fn full_battery_on_base_moves_on() {
    let mut agent = fresh_agent();
    let percept = Percept {
        on_base: true,
        ..clear_percept()
    };
    assert_eq!(agent.decide(&percept), Action::MoveForward);
}

#[test]
fn dirt_underneath_gets_cleaned() {
    let mut agent = fresh_agent();
    let percept = Percept {
        on_dirt: true,
        ..clear_percept()
    };
    assert_eq!(agent.decide(&percept), Action::Clean);
}

#[test]
fn movement_prefers_front_then_left_then_right() {
    let mut agent = fresh_agent();
    assert_eq!(agent.decide(&clear_percept()), Action::MoveForward);

    let percept = Percept {
        front_obstacle: true,
        ..clear_percept()
    };
    assert_eq!(agent.decide(&percept), Action::TurnLeft);

    let percept = Percept {
        front_obstacle: true,
        left_obstacle: true,
        ..clear_percept()
    };
    assert_eq!(agent.decide(&percept), Action::TurnRight);

    let percept = Percept {
        front_obstacle: true,
        left_obstacle: true,
        right_obstacle: true,
        ..clear_percept()
    };
    // Boxed in still turns right.
    assert_eq!(agent.decide(&percept), Action::TurnRight);
}

#[test]
fn charged_robot_avoids_the_base_ahead() {
    let mut agent = fresh_agent();
    let percept = Percept {
        front_is_base: true,
        ..clear_percept()
    };
    assert_eq!(agent.decide(&percept), Action::TurnLeft);

    // A low robot is pulled home before the avoidance rule can apply.
    let percept = Percept {
        front_is_base: true,
        battery: BatteryState::Low,
        ..clear_percept()
    };
    assert_eq!(agent.decide(&percept), Action::GoToBase);
}

#[test]
fn identical_percepts_yield_identical_actions() {
    let mut agent = fresh_agent();
    let percept = Percept {
        front_obstacle: true,
        ..clear_percept()
    };
    let first = agent.decide(&percept);
    for _ in 0..5 {
        assert_eq!(agent.decide(&percept), first);
    }
}

#[test]
fn decisions_are_logged_in_order() {
    let mut agent = fresh_agent();
    let moving = clear_percept();
    let dirty = Percept {
        on_dirt: true,
        ..clear_percept()
    };
    agent.decide(&moving);
    agent.decide(&dirty);

    assert_eq!(agent.interactions(), 2);
    assert_eq!(agent.history()[0].action, Action::MoveForward);
    assert_eq!(agent.history()[1].action, Action::Clean);
    assert_eq!(agent.history()[1].percept, dirty);

    agent.reset(Direction::North, 100);
    assert_eq!(agent.interactions(), 0);
    assert!(agent.history().is_empty());
}

#[test]
fn perceive_reads_the_world_relative_to_orientation() {
    let mut grid = open_grid(5, 5);
    grid[2][2] = CellKind::Dirt;
    grid[1][2] = CellKind::Base;
    grid[2][1] = CellKind::Wall;
    let world = GridWorld::from_parts(grid, GridPos::new(2, 2), GridPos::new(1, 2));

    // Fresh agent faces north, so the wall to the west reads as "left".
    let agent = fresh_agent();
    let percept = agent.perceive(&world);
    assert_eq!(percept.battery, BatteryState::High);
    assert!(percept.on_dirt);
    assert!(!percept.on_base);
    assert!(percept.front_is_base);
    assert!(!percept.front_obstacle);
    assert!(percept.left_obstacle);
    assert!(!percept.right_obstacle);
}
