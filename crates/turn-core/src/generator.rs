//! The turn generator: a long-lived state machine between an inbound
//! pointer stream and an outbound stream of turn events.
//!
//! ```text
//!   new(initial) ──► Running ──on_position()──► Running
//!                       │
//!                     close()  (flush pending end, at most once)
//!                       ▼
//!                     Closed ──on_position()──► Err(StreamClosed)
//! ```
//!
//! Each position is timed, handed to the detector against `history.start`,
//! and either emitted as a turn (history collapses onto the position) or
//! recorded as the new `history.end`. Sink calls are synchronous and happen
//! in detection order.

use freehand_common::clock::{IntervalTimer, MonotonicTimer};
use freehand_common::error::{FreehandError, FreehandResult};
use freehand_path_model::elapsed::ElapsedTime;
use freehand_path_model::position::{Coordinate, Position};
use freehand_path_model::turn::TurnEvent;

use crate::detector::{DetectorKind, TurnDetector};
use crate::history::History;

/// Downstream consumer of turn events (typically a line generator).
pub trait TurnSink<T> {
    /// Accept one event. The event must not be silently dropped.
    fn push(&mut self, event: TurnEvent<T>) -> FreehandResult<()>;
}

impl<T> TurnSink<T> for Vec<TurnEvent<T>> {
    fn push(&mut self, event: TurnEvent<T>) -> FreehandResult<()> {
        Vec::push(self, event);
        Ok(())
    }
}

impl<T, S: TurnSink<T> + ?Sized> TurnSink<T> for &mut S {
    fn push(&mut self, event: TurnEvent<T>) -> FreehandResult<()> {
        (**self).push(event)
    }
}

/// Sink backed by a closure.
pub struct FnSink<F>(F);

/// Wrap a closure as a [`TurnSink`].
pub fn sink_fn<T, F>(f: F) -> FnSink<F>
where
    F: FnMut(TurnEvent<T>) -> FreehandResult<()>,
{
    FnSink(f)
}

impl<T, F> TurnSink<T> for FnSink<F>
where
    F: FnMut(TurnEvent<T>) -> FreehandResult<()>,
{
    fn push(&mut self, event: TurnEvent<T>) -> FreehandResult<()> {
        (self.0)(event)
    }
}

/// Lifecycle of a generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorState {
    /// Accepting positions.
    Running,
    /// Terminal: the producer closed the stream or a sink call failed.
    Closed,
}

/// Turns a stream of pointer positions into turn events.
///
/// Dropping a running generator closes it, flushing any pending position.
pub struct TurnGenerator<T, S, C = MonotonicTimer>
where
    T: Coordinate,
    S: TurnSink<T>,
    C: IntervalTimer,
{
    state: GeneratorState,
    history: History<T>,
    detector: Box<dyn TurnDetector<T>>,
    timer: C,
    sink: S,
    positions_seen: u64,
    turns_emitted: u64,
}

impl<T, S> TurnGenerator<T, S, MonotonicTimer>
where
    T: Coordinate,
    S: TurnSink<T>,
{
    /// Activate a generator at `initial`, timing positions with the
    /// monotonic clock.
    pub fn new(initial: Position<T>, kind: DetectorKind, sink: S) -> Self {
        Self::with_timer(initial, kind, sink, MonotonicTimer::start())
    }
}

impl<T, S, C> TurnGenerator<T, S, C>
where
    T: Coordinate,
    S: TurnSink<T>,
    C: IntervalTimer,
{
    /// Activate a generator with an explicit interval timer.
    pub fn with_timer(initial: Position<T>, kind: DetectorKind, sink: S, timer: C) -> Self {
        Self::with_detector(initial, kind.build(initial), sink, timer)
    }

    /// Activate a generator with a caller-built detector.
    pub fn with_detector(
        initial: Position<T>,
        detector: Box<dyn TurnDetector<T>>,
        sink: S,
        timer: C,
    ) -> Self {
        tracing::debug!(
            initial = ?initial,
            detector = detector.name(),
            started_at = timer.started_at().unwrap_or("scripted"),
            "Turn generator started"
        );
        Self {
            state: GeneratorState::Running,
            history: History::new(initial),
            detector,
            timer,
            sink,
            positions_seen: 0,
            turns_emitted: 0,
        }
    }

    /// Feed the next pointer position.
    ///
    /// Returns the emitted turn, if the position completed one.
    pub fn on_position(&mut self, position: Position<T>) -> FreehandResult<Option<TurnEvent<T>>> {
        if self.state == GeneratorState::Closed {
            return Err(FreehandError::StreamClosed);
        }

        let elapsed = ElapsedTime::from(self.timer.restart());
        self.positions_seen += 1;

        match self.detector.detect(position, self.history.start()) {
            Some(turn) => {
                let event = TurnEvent::new(turn, elapsed);
                self.emit(event)?;
                self.history.collapse(position);
                Ok(Some(event))
            }
            None => {
                // Still on an axis with history.start: wait.
                self.history.update_end(position);
                Ok(None)
            }
        }
    }

    /// Close the stream, emitting the pending end position if the path moved
    /// since the last turn. A second call does nothing.
    pub fn close(&mut self) -> FreehandResult<Option<TurnEvent<T>>> {
        if self.state == GeneratorState::Closed {
            return Ok(None);
        }
        self.state = GeneratorState::Closed;

        tracing::debug!(
            positions = self.positions_seen,
            turns = self.turns_emitted,
            collapsed = self.history.is_collapsed(),
            "Flush"
        );
        if self.history.is_collapsed() {
            return Ok(None);
        }

        let event = TurnEvent::flushed(self.history.end());
        self.emit(event)?;
        Ok(Some(event))
    }

    fn emit(&mut self, event: TurnEvent<T>) -> FreehandResult<()> {
        tracing::debug!(
            turn = ?event.position,
            elapsed_ms = event.elapsed.as_millis(),
            "Turn"
        );
        if let Err(e) = self.sink.push(event) {
            // A failed sink ends the stream; nothing more will be flushed.
            self.state = GeneratorState::Closed;
            return Err(e);
        }
        self.turns_emitted += 1;
        Ok(())
    }

    pub fn state(&self) -> GeneratorState {
        self.state
    }

    pub fn is_closed(&self) -> bool {
        self.state == GeneratorState::Closed
    }

    pub fn history(&self) -> &History<T> {
        &self.history
    }

    /// Name of the active detection strategy.
    pub fn detector_name(&self) -> &'static str {
        self.detector.name()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Positions received since activation (excluding the initial one).
    pub fn positions_seen(&self) -> u64 {
        self.positions_seen
    }

    /// Turns delivered to the sink, flush included.
    pub fn turns_emitted(&self) -> u64 {
        self.turns_emitted
    }
}

impl<T, S, C> Drop for TurnGenerator<T, S, C>
where
    T: Coordinate,
    S: TurnSink<T>,
    C: IntervalTimer,
{
    fn drop(&mut self) {
        if self.state == GeneratorState::Running {
            if let Err(e) = self.close() {
                tracing::warn!(error = %e, "Flush on drop failed");
            }
        }
    }
}
