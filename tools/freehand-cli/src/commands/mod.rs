pub mod info;
pub mod init;
pub mod turns;
pub mod validate;

use std::io::ErrorKind;
use std::path::Path;

use freehand_common::error::FreehandError;
use freehand_path_model::trace::{parse_trace, PointerTrace};
use serde::de::DeserializeOwned;

/// Read and parse a JSONL pointer trace.
pub(crate) fn read_trace<T: DeserializeOwned>(path: &Path) -> anyhow::Result<PointerTrace<T>> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => FreehandError::file_not_found(path),
        _ => FreehandError::Io(e),
    })?;
    parse_trace(&content).map_err(|e| anyhow::anyhow!("Failed to parse trace: {e}"))
}
