//! Freehand Turn Core
//!
//! Reduces a live pointer stream to the points where the path turns:
//! - **History:** Displacement since the last emitted turn
//! - **Turn detection:** Pluggable strategies (`simple`, `reversal`)
//! - **Turn generator:** Running/closed state machine that pushes
//!   `(turn, elapsed)` events into a downstream sink and flushes on close
//! - **Replay:** Run a recorded pointer trace through a generator
//!
//! This crate is pure computation. The caller drives it one position at a
//! time; nothing runs between calls.

pub mod detector;
pub mod generator;
pub mod history;
pub mod replay;

pub use detector::{DetectorKind, TurnDetector};
pub use generator::{GeneratorState, TurnGenerator, TurnSink};
pub use history::History;
