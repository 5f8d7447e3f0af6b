//! Replay a recorded pointer trace through a turn generator.
//!
//! The first sample activates the generator; every later sample is fed as
//! a position, timed by the recorded timestamps instead of the wall clock;
//! the stream is closed after the last sample.

use freehand_common::clock::ScriptedTimer;
use freehand_common::error::{FreehandError, FreehandResult};
use freehand_path_model::position::Coordinate;
use freehand_path_model::trace::{serialize_turns, PointerSample};
use freehand_path_model::turn::TurnEvent;
use serde::Serialize;

use crate::detector::DetectorKind;
use crate::generator::TurnGenerator;

/// Outcome of a replayed trace.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplaySummary<T> {
    /// Emitted turns, in order, including a flushed tail.
    pub turns: Vec<TurnEvent<T>>,
    /// Samples consumed, including the initial one.
    pub positions: usize,
    /// Whether closing the stream emitted a pending position.
    pub flushed: bool,
}

impl<T: Serialize> ReplaySummary<T> {
    /// Turns as JSONL, one `{"x","y","elapsed_ms"}` object per line.
    pub fn to_jsonl(&self) -> FreehandResult<String> {
        Ok(serialize_turns(&self.turns)?)
    }
}

/// Run `samples` through a fresh generator using `kind`.
pub fn replay_trace<T: Coordinate>(
    samples: &[PointerSample<T>],
    kind: DetectorKind,
) -> FreehandResult<ReplaySummary<T>> {
    let (first, rest) = samples
        .split_first()
        .ok_or_else(|| FreehandError::trace("trace has no samples"))?;

    let timestamps: Vec<u64> = rest.iter().map(|s| s.timestamp_ns).collect();
    let timer = ScriptedTimer::from_timestamps_ns(first.timestamp_ns, &timestamps);

    let mut turns: Vec<TurnEvent<T>> = Vec::new();
    let flushed = {
        let mut generator = TurnGenerator::with_timer(first.position(), kind, &mut turns, timer);
        for sample in rest {
            generator.on_position(sample.position())?;
        }
        let flushed = generator.close()?.is_some();
        flushed
    };

    tracing::info!(
        detector = %kind,
        positions = samples.len(),
        turns = turns.len(),
        flushed,
        "Trace replayed"
    );

    Ok(ReplaySummary {
        turns,
        positions: samples.len(),
        flushed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use freehand_path_model::elapsed::ElapsedTime;
    use freehand_path_model::position::Position;

    fn sample(t_ms: u64, x: i64, y: i64) -> PointerSample<i64> {
        PointerSample::new(t_ms * 1_000_000, x, y)
    }

    #[test]
    fn test_empty_trace_is_an_error() {
        let err = replay_trace::<i64>(&[], DetectorKind::Simple).unwrap_err();
        assert!(matches!(err, FreehandError::Trace { .. }));
    }

    #[test]
    fn test_single_sample_emits_nothing() {
        let summary = replay_trace(&[sample(0, 4, 4)], DetectorKind::Simple).unwrap();
        assert!(summary.turns.is_empty());
        assert!(!summary.flushed);
        assert_eq!(summary.positions, 1);
    }

    #[test]
    fn test_elapsed_comes_from_timestamps() {
        let samples = [
            sample(100, 0, 0),
            sample(116, 0, 5),
            sample(140, 5, 5),
            sample(150, 9, 5),
        ];
        let summary = replay_trace(&samples, DetectorKind::Simple).unwrap();
        assert_eq!(
            summary.turns,
            vec![
                TurnEvent::new(Position::new(0, 5), ElapsedTime::from_millis(24)),
                TurnEvent::flushed(Position::new(9, 5)),
            ]
        );
        assert!(summary.flushed);
        assert_eq!(
            summary.to_jsonl().unwrap(),
            "{\"x\":0,\"y\":5,\"elapsed_ms\":24}\n{\"x\":9,\"y\":5,\"elapsed_ms\":0}\n"
        );
    }
}
