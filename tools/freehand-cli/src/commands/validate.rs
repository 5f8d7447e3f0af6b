//! Validate a pointer trace.

use std::path::PathBuf;

use freehand_common::clock::ns_to_secs;
use freehand_path_model::trace::PointerTrace;

use super::read_trace;

pub fn run(path: PathBuf, real: bool) -> anyhow::Result<()> {
    println!("Validating trace at: {}", path.display());

    let (samples, duration_ns, has_header) = if real {
        summarize(read_trace::<f64>(&path)?)
    } else {
        summarize(read_trace::<i64>(&path)?)
    };

    println!("  Header: {}", if has_header { "present" } else { "missing" });
    println!("  Samples: {samples}");
    println!("  Duration: {:.3}s", ns_to_secs(duration_ns));

    if samples == 0 {
        anyhow::bail!("Trace has no samples");
    }

    println!("\nTrace is valid.");
    Ok(())
}

fn summarize<T>(trace: PointerTrace<T>) -> (usize, u64, bool) {
    (
        trace.samples.len(),
        trace.duration_ns(),
        trace.header.is_some(),
    )
}
