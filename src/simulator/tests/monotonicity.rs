use super::*;

#[test]
fn progress_never_decreases() {
    for seed in 0..4 {
        let config = SimulationConfig {
            seed,
            ..SimulationConfig::default()
        };
        let mut kernel = SimulationKernel::with_config(config);
        let mut last = kernel.get_state().progress;
        for _ in 0..200 {
            let snapshot = kernel.step();
            assert!(
                snapshot.progress >= last,
                "seed {seed}: {} < {last}",
                snapshot.progress
            );
            last = snapshot.progress;
        }
    }
}

#[test]
fn dirty_cells_never_increase() {
    let config = SimulationConfig {
        seed: 9,
        ..SimulationConfig::default()
    };
    let mut kernel = SimulationKernel::with_config(config);
    let mut last = kernel.get_state().environment.dirty_cells;
    for _ in 0..200 {
        let dirty = kernel.step().environment.dirty_cells;
        assert!(dirty <= last);
        last = dirty;
    }
}

#[test]
fn battery_stays_in_range_for_a_whole_session() {
    for seed in 0..8 {
        let config = SimulationConfig {
            seed,
            ..SimulationConfig::default()
        };
        let mut kernel = SimulationKernel::with_config(config);
        for _ in 0..300 {
            let snapshot = kernel.step();
            assert!(
                (0..=100).contains(&snapshot.agent.battery_level),
                "seed {seed}"
            );
            if snapshot.done {
                break;
            }
        }
    }
}

#[test]
fn phase_and_done_flag_agree() {
    let config = SimulationConfig {
        seed: 3,
        ..SimulationConfig::default()
    };
    let mut kernel = SimulationKernel::with_config(config);
    for _ in 0..300 {
        let snapshot = kernel.step();
        assert_eq!(snapshot.done, kernel.phase() == SimPhase::Done);
    }
}
