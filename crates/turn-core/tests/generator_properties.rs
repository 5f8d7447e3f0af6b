use std::time::{Duration, Instant};

use freehand_common::clock::ScriptedTimer;
use freehand_path_model::elapsed::ElapsedTime;
use freehand_path_model::position::Position;
use freehand_path_model::turn::TurnEvent;
use freehand_turn_core::{DetectorKind, TurnGenerator};
use proptest::prelude::*;

fn kind() -> impl Strategy<Value = DetectorKind> {
    prop_oneof![Just(DetectorKind::Simple), Just(DetectorKind::Reversal)]
}

// A small grid so that shared coordinates (on-axis moves) are common.
fn position() -> impl Strategy<Value = Position<i32>> {
    (-4i32..=4, -4i32..=4).prop_map(|(x, y)| Position::new(x, y))
}

proptest! {
    #[test]
    fn close_without_positions_emits_nothing(initial in position(), kind in kind()) {
        let mut out: Vec<TurnEvent<i32>> = Vec::new();
        let mut generator = TurnGenerator::new(initial, kind, &mut out);
        prop_assert_eq!(generator.close().unwrap(), None);
        drop(generator);
        prop_assert!(out.is_empty());
    }

    #[test]
    fn sink_receives_returned_turns_in_order(
        initial in position(),
        path in prop::collection::vec(position(), 0..40),
        kind in kind(),
    ) {
        let mut out: Vec<TurnEvent<i32>> = Vec::new();
        let mut returned = Vec::new();
        {
            let mut generator = TurnGenerator::new(initial, kind, &mut out);
            for p in &path {
                if let Some(event) = generator.on_position(*p).unwrap() {
                    returned.push(event);
                }
            }
            if let Some(event) = generator.close().unwrap() {
                returned.push(event);
            }
        }
        prop_assert_eq!(out, returned);
    }

    #[test]
    fn flush_emits_pending_end_exactly_when_not_collapsed(
        initial in position(),
        path in prop::collection::vec(position(), 0..40),
        kind in kind(),
    ) {
        let mut generator: TurnGenerator<i32, Vec<TurnEvent<i32>>> =
            TurnGenerator::new(initial, kind, Vec::new());
        for p in &path {
            generator.on_position(*p).unwrap();
        }
        let history = *generator.history();
        let before = generator.sink().len();

        let flushed = generator.close().unwrap();
        if history.is_collapsed() {
            prop_assert_eq!(flushed, None);
        } else {
            prop_assert_eq!(flushed, Some(TurnEvent::flushed(history.end())));
        }
        prop_assert_eq!(generator.sink().len(), before + usize::from(flushed.is_some()));

        // At most once.
        prop_assert_eq!(generator.close().unwrap(), None);
        prop_assert_eq!(generator.sink().len(), before + usize::from(flushed.is_some()));
    }

    #[test]
    fn repeating_the_end_position_is_a_no_op(
        initial in position(),
        path in prop::collection::vec(position(), 0..20),
        repeats in 1usize..10,
        kind in kind(),
    ) {
        let mut generator: TurnGenerator<i32, Vec<TurnEvent<i32>>> =
            TurnGenerator::new(initial, kind, Vec::new());
        for p in &path {
            generator.on_position(*p).unwrap();
        }
        let start = generator.history().start();
        let end = generator.history().end();
        let emitted = generator.sink().len();

        for _ in 0..repeats {
            prop_assert_eq!(generator.on_position(end).unwrap(), None);
        }
        prop_assert_eq!(generator.history().start(), start);
        prop_assert_eq!(generator.sink().len(), emitted);
    }

    #[test]
    fn elapsed_is_the_interval_of_the_turning_position(
        initial in position(),
        steps in prop::collection::vec((position(), 0u64..100), 1..40),
        kind in kind(),
    ) {
        let intervals: Vec<Duration> =
            steps.iter().map(|(_, ms)| Duration::from_millis(*ms)).collect();
        let mut generator = TurnGenerator::with_timer(
            initial,
            kind,
            Vec::<TurnEvent<i32>>::new(),
            ScriptedTimer::new(intervals),
        );
        for (p, ms) in &steps {
            if let Some(event) = generator.on_position(*p).unwrap() {
                prop_assert_eq!(event.elapsed, ElapsedTime::from_millis(*ms));
            }
        }
        if let Some(event) = generator.close().unwrap() {
            prop_assert_eq!(event.elapsed, ElapsedTime::ZERO);
        }
    }

    #[test]
    fn simple_turns_only_when_leaving_the_tracked_line(
        initial in position(),
        path in prop::collection::vec(position(), 0..40),
    ) {
        let mut generator: TurnGenerator<i32, Vec<TurnEvent<i32>>> =
            TurnGenerator::new(initial, DetectorKind::Simple, Vec::new());
        for p in &path {
            let start = generator.history().start();
            let end = generator.history().end();
            let off_both = p.x != start.x && p.y != start.y;
            let same_line = (p.x == start.x && end.x == start.x)
                || (p.y == start.y && end.y == start.y);

            let turn = generator.on_position(*p).unwrap().map(|event| event.position);
            if off_both {
                prop_assert!(turn.is_some());
            } else if same_line {
                prop_assert_eq!(turn, None);
            } else {
                // Crossed from the line through start and end onto the other one.
                prop_assert_eq!(turn, Some(end));
            }
        }
    }
}

#[test]
fn rapid_sends_do_not_accumulate_elapsed_time() {
    let begun = Instant::now();
    let mut generator: TurnGenerator<i32, Vec<TurnEvent<i32>>> =
        TurnGenerator::new(Position::new(0, 0), DetectorKind::Simple, Vec::new());
    std::thread::sleep(Duration::from_millis(30));

    // Staircase: every diagonal step is a turn.
    let mut total_ms = 0u64;
    for i in 1..50 {
        let event = generator
            .on_position(Position::new(i, i))
            .unwrap()
            .expect("diagonal step turns");
        total_ms += event.elapsed.as_millis();
    }

    // Intervals partition the wall time; a cumulative clock would count the
    // initial sleep once per turn.
    assert!(u128::from(total_ms) <= begun.elapsed().as_millis());
}
