//! Write a starting configuration file.

use std::path::{Path, PathBuf};

use freehand_common::config::{config_file_path, AppConfig};
use freehand_common::error::FreehandError;
use freehand_turn_core::DetectorKind;

pub fn run(
    path: Option<PathBuf>,
    detector: DetectorKind,
    real: bool,
    force: bool,
) -> anyhow::Result<()> {
    let path = path.unwrap_or_else(config_file_path);
    write_config(&path, detector, real, force)?;

    println!("Config written to {}", path.display());
    println!("  Detector: {detector}");
    println!("  Coordinates: {}", if real { "real" } else { "integer" });
    Ok(())
}

fn write_config(path: &Path, detector: DetectorKind, real: bool, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    let mut config = AppConfig::default();
    config.turns.detector = detector.to_string();
    config.turns.integer_coordinates = !real;
    config.save_to(path).map_err(FreehandError::from)?;
    Ok(())
}
