//! Replay a pointer trace and write the detected turns.

use std::path::{Path, PathBuf};

use freehand_path_model::position::Coordinate;
use freehand_turn_core::replay::replay_trace;
use freehand_turn_core::DetectorKind;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::read_trace;

pub fn run(
    path: PathBuf,
    detector: DetectorKind,
    real: bool,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let jsonl = if real {
        replay::<f64>(&path, detector)?
    } else {
        replay::<i64>(&path, detector)?
    };

    match output {
        Some(output) => {
            std::fs::write(&output, jsonl)
                .map_err(|e| anyhow::anyhow!("Failed to write {}: {e}", output.display()))?;
            eprintln!("Turns written to: {}", output.display());
        }
        None => print!("{jsonl}"),
    }

    Ok(())
}

fn replay<T>(path: &Path, detector: DetectorKind) -> anyhow::Result<String>
where
    T: Coordinate + DeserializeOwned + Serialize,
{
    let trace = read_trace::<T>(path)?;
    tracing::debug!(samples = trace.samples.len(), path = %path.display(), "Trace loaded");

    let summary = replay_trace(&trace.samples, detector)?;
    Ok(summary.to_jsonl()?)
}
