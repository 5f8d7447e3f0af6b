//! Show trace information and turn counts per detector.

use std::fmt::Display;
use std::path::PathBuf;

use freehand_common::clock::ns_to_secs;
use freehand_path_model::position::Coordinate;
use freehand_path_model::trace::PointerTrace;
use freehand_turn_core::replay::replay_trace;
use freehand_turn_core::DetectorKind;

use super::read_trace;

pub fn run(path: PathBuf, real: bool) -> anyhow::Result<()> {
    if real {
        show(read_trace::<f64>(&path)?)
    } else {
        show(read_trace::<i64>(&path)?)
    }
}

fn show<T: Coordinate + Display>(trace: PointerTrace<T>) -> anyhow::Result<()> {
    match &trace.header {
        Some(header) => {
            println!("Trace (schema {})", header.schema_version);
            if let Some(device) = &header.device {
                println!("  Device: {device}");
            }
            if let Some(rate) = header.sample_rate_hz {
                println!("  Sample rate: {rate}Hz");
            }
        }
        None => println!("Trace (no header)"),
    }

    println!("  Samples: {}", trace.samples.len());
    println!("  Duration: {:.3}s", ns_to_secs(trace.duration_ns()));
    if let Some((min, max)) = trace.extent() {
        println!("  Extent: {min} .. {max}");
    }

    if trace.is_empty() {
        return Ok(());
    }

    println!();
    println!("Turns:");
    for kind in [DetectorKind::Simple, DetectorKind::Reversal] {
        let summary = replay_trace(&trace.samples, kind)?;
        println!(
            "  {kind}: {} ({})",
            summary.turns.len(),
            if summary.flushed {
                "last one flushed on close"
            } else {
                "ended on a turn"
            }
        );
    }

    Ok(())
}
