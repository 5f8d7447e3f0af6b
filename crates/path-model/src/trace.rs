//! Recorded pointer traces.
//!
//! A trace is append-only JSONL: an optional `# {header}` comment line,
//! then one `{"t": <ns>, "x": .., "y": ..}` object per pointer sample.
//! Blank lines and other `#` lines are ignored. Timestamps are monotonic
//! nanoseconds since the trace started.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::position::Position;
use crate::turn::TurnEvent;

/// Monotonic timestamp in nanoseconds since the trace started.
pub type TimestampNs = u64;

/// A single recorded pointer sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerSample<T> {
    #[serde(rename = "t")]
    pub timestamp_ns: TimestampNs,
    pub x: T,
    pub y: T,
}

/// Metadata written as the first line of a trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceHeader {
    /// Schema version for forward compatibility.
    pub schema_version: String,

    /// Device or toolkit that produced the samples.
    #[serde(default)]
    pub device: Option<String>,

    /// Nominal sampling rate (Hz), if known.
    #[serde(default)]
    pub sample_rate_hz: Option<u32>,
}

/// A parsed trace.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerTrace<T> {
    pub header: Option<TraceHeader>,
    pub samples: Vec<PointerSample<T>>,
}

/// Errors raised while reading a trace.
#[derive(Debug, thiserror::Error)]
pub enum TraceError {
    #[error("Parse error on line {line}: {source}")]
    Parse {
        line: usize,
        source: serde_json::Error,
    },

    #[error("Malformed header on line {line}: {source}")]
    Header {
        line: usize,
        source: serde_json::Error,
    },

    #[error("Timestamp goes backwards on line {line}: {timestamp_ns} < {previous_ns}")]
    NonMonotonic {
        line: usize,
        timestamp_ns: TimestampNs,
        previous_ns: TimestampNs,
    },
}

impl<T: Copy> PointerSample<T> {
    pub fn new(timestamp_ns: TimestampNs, x: T, y: T) -> Self {
        Self { timestamp_ns, x, y }
    }

    pub fn position(&self) -> Position<T> {
        Position {
            x: self.x,
            y: self.y,
        }
    }
}

impl<T> PointerTrace<T> {
    /// Elapsed nanoseconds between the first and last sample.
    pub fn duration_ns(&self) -> TimestampNs {
        match (self.samples.first(), self.samples.last()) {
            (Some(first), Some(last)) => last.timestamp_ns.saturating_sub(first.timestamp_ns),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl<T: Copy + PartialOrd> PointerTrace<T> {
    /// Bounding box of all samples as `(min, max)` corners.
    pub fn extent(&self) -> Option<(Position<T>, Position<T>)> {
        let first = self.samples.first()?;
        let mut min = first.position();
        let mut max = first.position();
        for sample in &self.samples[1..] {
            if sample.x < min.x {
                min.x = sample.x;
            }
            if sample.y < min.y {
                min.y = sample.y;
            }
            if sample.x > max.x {
                max.x = sample.x;
            }
            if sample.y > max.y {
                max.y = sample.y;
            }
        }
        Some((min, max))
    }
}

/// Parse a trace from JSONL content.
pub fn parse_trace<T: DeserializeOwned>(jsonl: &str) -> Result<PointerTrace<T>, TraceError> {
    let mut header = None;
    let mut samples: Vec<PointerSample<T>> = Vec::new();

    for (index, raw) in jsonl.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(comment) = trimmed.strip_prefix('#') {
            // Only a leading `# {...}` comment carries the header.
            let comment = comment.trim();
            if header.is_none() && samples.is_empty() && comment.starts_with('{') {
                let parsed = serde_json::from_str(comment)
                    .map_err(|source| TraceError::Header { line, source })?;
                header = Some(parsed);
            }
            continue;
        }

        let sample: PointerSample<T> =
            serde_json::from_str(trimmed).map_err(|source| TraceError::Parse { line, source })?;
        if let Some(previous) = samples.last() {
            if sample.timestamp_ns < previous.timestamp_ns {
                return Err(TraceError::NonMonotonic {
                    line,
                    timestamp_ns: sample.timestamp_ns,
                    previous_ns: previous.timestamp_ns,
                });
            }
        }
        samples.push(sample);
    }

    Ok(PointerTrace { header, samples })
}

/// Serialize a trace to JSONL, header first.
pub fn serialize_trace<T: Serialize>(trace: &PointerTrace<T>) -> Result<String, serde_json::Error> {
    let mut output = String::new();
    if let Some(header) = &trace.header {
        output.push_str("# ");
        output.push_str(&serde_json::to_string(header)?);
        output.push('\n');
    }
    for sample in &trace.samples {
        output.push_str(&serde_json::to_string(sample)?);
        output.push('\n');
    }
    Ok(output)
}

/// Serialize turn events to JSONL.
pub fn serialize_turns<T: Serialize>(turns: &[TurnEvent<T>]) -> Result<String, serde_json::Error> {
    let mut output = String::new();
    for turn in turns {
        output.push_str(&serde_json::to_string(turn)?);
        output.push('\n');
    }
    Ok(output)
}
