use std::sync::atomic::Ordering;

use rover_core::{Command, ExecutionOutcome, Orientation, Position, Rover};
use rover_test_utils::{always_blocked, rover_at, CountingSensor, ScriptedSensor};

fn pose(r: &Rover) -> (u32, u32, Orientation) {
    (r.x(), r.y(), r.orientation())
}

#[test]
fn long_path_without_obstacles() {
    let mut r = rover_at(0, 0, Orientation::East);
    let outcome = r.execute_command_string("ffffffflfffffffrbbbbbblbbbbbb");
    assert_eq!(outcome.result_message(), "All commands successfully executed.");
    assert_eq!(outcome.details(), "");
    assert_eq!(pose(&r), (1, 1, Orientation::North));
}

#[test]
fn forward_from_last_row_wraps_to_first() {
    let mut r = Rover::builder().position(0, 99).grid(100, 100).build();
    assert!(r.execute_command_string("f").is_success());
    assert_eq!(pose(&r), (0, 0, Orientation::North));
}

#[test]
fn certain_obstacle_blocks_first_move() {
    let mut r = always_blocked();
    let outcome = r.execute_command_string("f");
    let report = outcome.obstacle().copied().expect("aborted");
    assert_eq!(report.obstacle, Position::new(0, 1));
    assert_eq!(report.command, Command::Forward);
    assert_eq!(pose(&r), (0, 0, Orientation::North));

    let outcome = r.execute_command_string("b");
    assert_eq!(
        outcome.obstacle().map(|rep| rep.obstacle),
        Some(Position::new(0, 99))
    );
    assert_eq!(pose(&r), (0, 0, Orientation::North));
}

#[test]
fn unknown_command_leaves_default_rover_untouched() {
    let mut r = Rover::default();
    let outcome = r.execute_command_string("a");
    assert!(matches!(outcome, ExecutionOutcome::Rejected(_)));
    assert_eq!(pose(&r), (0, 0, Orientation::North));
}

#[test]
fn abort_mid_sequence_keeps_prefix_and_skips_suffix() {
    // Third movement attempt is blocked.
    let sensor = ScriptedSensor::blocked_after(2);
    let attempts = sensor.attempts();
    let mut r = Rover::builder().sensor(sensor).build();

    let outcome = r.execute_command_string("ffrfff");
    let report = outcome.obstacle().copied().expect("aborted");

    // `f`, `f`, `r` applied; blocked on the fourth command.
    assert_eq!(report.executed, 3);
    assert_eq!(report.state.position(), Position::new(0, 2));
    assert_eq!(report.state.orientation, Orientation::East);
    assert_eq!(report.obstacle, Position::new(1, 2));
    assert_eq!(pose(&r), (0, 2, Orientation::East));

    // The two trailing moves were never attempted.
    assert_eq!(attempts.load(Ordering::SeqCst), 3);
}

#[test]
fn obstacle_check_runs_once_per_movement_attempt() {
    let sensor = CountingSensor::new();
    let calls = sensor.calls();
    let mut r = Rover::builder().sensor(sensor).build();

    r.execute_command_string("ffbblrlr");
    assert_eq!(calls.load(Ordering::SeqCst), 4);

    // Rejected strings never reach the sensor.
    r.execute_command_string("ffz");
    assert_eq!(calls.load(Ordering::SeqCst), 4);
}

#[test]
fn obstacle_can_clear_on_retry() {
    let mut r = Rover::builder()
        .sensor(ScriptedSensor::new([true, false]))
        .build();

    let first = r.execute_command_string("f");
    assert!(first.obstacle().is_some());
    assert_eq!(pose(&r), (0, 0, Orientation::North));

    let second = r.execute_command_string("f");
    assert!(second.is_success());
    assert_eq!(pose(&r), (0, 1, Orientation::North));
}

#[test]
fn seeded_rovers_replay_identically() {
    let run = || {
        let mut r = Rover::builder()
            .obstacle_probability(0.3)
            .seed(1234)
            .build();
        let outcomes: Vec<ExecutionOutcome> = (0..20)
            .map(|_| r.execute_command_string("ffrffrflb"))
            .collect();
        (outcomes, r.state())
    };
    assert_eq!(run(), run());
}

#[test]
fn abort_report_on_custom_grid() {
    let mut r = Rover::builder()
        .position(4, 0)
        .orientation("E")
        .grid(5, 3)
        .obstacle_probability(1.0)
        .seed(9)
        .build();
    let outcome = r.execute_command_string("f");
    assert_eq!(
        outcome.details(),
        "Obstacle position:[x = 0, y = 0]\n\
         Current state:\n\
         \tx: 4\n\
         \ty: 0\n\
         \torientation: E\n\
         \tTrying to execute command: f\n\
         \tGrid dimensions:\n\
         \tx dimension: 5\ty dimension: 3"
    );
}
