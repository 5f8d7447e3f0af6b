//! Freehand Path Model
//!
//! Defines the data contracts shared by the turn pipeline:
//! - **Positions:** Exact 2D pointer coordinates, integer or real
//! - **Elapsed time:** Interval since the previous pointer position
//! - **Turn events:** The `(position, elapsed)` pairs sent downstream
//! - **Traces:** Recorded pointer streams in append-only JSONL
//!
//! Coordinates carry no units; they are device coordinates as delivered
//! by the host toolkit.

pub mod elapsed;
pub mod position;
pub mod trace;
pub mod turn;

pub use elapsed::*;
pub use position::*;
pub use trace::*;
pub use turn::*;
