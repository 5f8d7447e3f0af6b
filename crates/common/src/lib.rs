//! Freehand Common Utilities
//!
//! Shared infrastructure for all Freehand crates:
//! - Error types and result aliases
//! - Interval timers that measure time between pointer positions
//! - Tracing/logging initialization
//! - Configuration loading

pub mod clock;
pub mod config;
pub mod error;
pub mod logging;

pub use clock::*;
pub use config::*;
pub use error::*;
