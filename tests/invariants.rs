//! Property tests for the path follower under random key presses

use glam::Vec2;
use proptest::prelude::*;

use snake_trail::sim::{Direction, Simulation, TickInput, tick};
use snake_trail::Settings;

const TOLERANCE: f32 = 1e-2;

fn direction() -> impl Strategy<Value = Direction> {
    (0usize..4).prop_map(|i| Direction::ALL[i])
}

/// Small playfields so wraps happen often; sizes on a binary-exact grid
fn settings() -> impl Strategy<Value = Settings> {
    (
        prop::sample::select(vec![2.5f32, 4.0, 5.0, 8.0, 10.0]),
        prop::sample::select(vec![20.0f32, 30.0, 45.0, 60.0, 80.0]),
        1usize..8,
        prop::sample::select(vec![120.0f32, 200.0, 320.0]),
        prop::sample::select(vec![100.0f32, 160.0, 240.0]),
        direction(),
    )
        .prop_map(|(step, segment_size, segment_count, width, height, initial_direction)| {
            Settings {
                width,
                height,
                segment_size,
                segment_count,
                step,
                initial_head: Some(Vec2::new((width / 2.0).floor(), (height / 2.0).floor())),
                initial_direction,
                ..Default::default()
            }
        })
}

fn script() -> impl Strategy<Value = Vec<Option<Direction>>> {
    prop::collection::vec(prop::option::weighted(0.3, direction()), 1..250)
}

proptest! {
    #[test]
    fn segments_sit_at_exact_arc_offsets(settings in settings(), script in script()) {
        let spacing = settings.segment_size;
        let mut sim = Simulation::new(settings).expect("generated settings are valid");

        for turn in script {
            tick(&mut sim, &TickInput { turn });
            let history = sim.history();
            prop_assert!(history.is_consistent());

            let mut previous_arc: Option<f32> = None;
            for segment in sim.segments() {
                let arc = history
                    .locate(segment.position, segment.arc_offset - TOLERANCE)
                    .expect("segment lies on the recorded path");
                prop_assert!((arc - segment.arc_offset).abs() < TOLERANCE);
                if let Some(prev) = previous_arc {
                    prop_assert!((arc - prev - spacing).abs() < TOLERANCE);
                }
                previous_arc = Some(arc);
            }
        }
    }

    #[test]
    fn reversal_never_changes_direction(settings in settings(), script in script()) {
        let mut sim = Simulation::new(settings).expect("generated settings are valid");
        for turn in script {
            tick(&mut sim, &TickInput { turn });
            let before = sim.direction();
            tick(&mut sim, &TickInput { turn: Some(before.opposite()) });
            prop_assert_eq!(sim.direction(), before);
        }
    }

    #[test]
    fn accepted_turns_are_a_segment_apart(settings in settings(), script in script()) {
        let step = settings.step;
        let spacing = settings.segment_size;
        let mut sim = Simulation::new(settings).expect("generated settings are valid");
        let mut accepted: Vec<u64> = Vec::new();

        for turn in script {
            tick(&mut sim, &TickInput { turn });
            if turn.is_some() && sim.last_turn_tick() == Some(sim.time_ticks()) {
                accepted.push(sim.time_ticks());
            }
        }
        for pair in accepted.windows(2) {
            let travelled = (pair[1] - pair[0]) as f32 * step;
            prop_assert!(travelled >= spacing - TOLERANCE);
        }
    }

    #[test]
    fn previous_head_is_one_step_back(settings in settings(), script in script()) {
        let step = settings.step;
        let mut sim = Simulation::new(settings).expect("generated settings are valid");

        for turn in script {
            let previous_head = sim.head();
            tick(&mut sim, &TickInput { turn });
            let history = sim.history();

            // Holds across a wrap too, where the raw jump is far larger
            prop_assert_eq!(history.stretch_length(0), Some(step));
            let (one_back, _) = history.sample_at(step);
            prop_assert!(one_back.distance(previous_head) < TOLERANCE);
        }
    }

    #[test]
    fn ribbon_is_idempotent(settings in settings(), script in script()) {
        let mut sim = Simulation::new(settings).expect("generated settings are valid");
        for turn in script {
            tick(&mut sim, &TickInput { turn });
        }
        let first = sim.ribbon();
        let second = sim.ribbon();
        prop_assert_eq!(first.polygon(), second.polygon());
        prop_assert_eq!(first, second);
        prop_assert_eq!(sim.ribbon().polygon().len(), 2 * sim.segments().len());
    }
}

#[test]
fn scenario_turn_up_at_tick_ten() {
    let settings = Settings {
        width: 800.0,
        height: 800.0,
        segment_size: 80.0,
        segment_count: 5,
        step: 8.0,
        initial_head: Some(Vec2::new(400.0, 400.0)),
        initial_direction: Direction::Right,
        ..Default::default()
    };
    let mut sim = Simulation::new(settings).expect("valid settings");

    for _ in 0..10 {
        tick(&mut sim, &TickInput::default());
    }
    assert_eq!(sim.head(), Vec2::new(480.0, 400.0));
    let turn_point = sim.head();

    sim.queue_turn(Direction::Up);
    for _ in 10..20 {
        tick(&mut sim, &TickInput::default());
    }

    let segments = sim.segments();
    assert_eq!(segments[0].direction, Direction::Up);
    assert_eq!(turn_point.y - segments[0].position.y, (20 - 10) as f32 * 8.0);
    assert_eq!(segments[0].position.x, turn_point.x);
    assert!(segments[1..].iter().all(|s| s.direction == Direction::Right));
}

#[test]
fn scenario_wrap_on_right_edge() {
    let settings = Settings {
        width: 800.0,
        height: 800.0,
        segment_size: 80.0,
        segment_count: 5,
        step: 8.0,
        initial_head: Some(Vec2::new(840.0, 400.0)),
        ..Default::default()
    };
    let mut sim = Simulation::new(settings).expect("valid settings");

    tick(&mut sim, &TickInput::default());
    assert_eq!(sim.head(), Vec2::new(0.0, 400.0));

    let history = sim.history();
    assert!(history.newest().seam);
    assert_eq!(history.stretch_length(0), Some(8.0));

    tick(&mut sim, &TickInput::default());
    assert_eq!(sim.history().stretch_length(0), Some(8.0));
    assert_eq!(sim.history().stretch_length(1), Some(8.0));
}
