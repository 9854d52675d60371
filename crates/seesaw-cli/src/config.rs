//! Input loading with default materialization.
//!
//! Both inputs follow the same contract: load from the given path; if the
//! file is absent, persist the canonical default there, then read it back.
//! A missing file is therefore never an error, only a first run.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

/// Canonical default weight list, whitespace-delimited.
pub const DEFAULT_WEIGHTS: &str = "5 5 5 10 10 25";

/// Canonical default reference partition: all weights on the −1 side,
/// sized for the default weight list.
pub const DEFAULT_REFERENCE: &str = "000000";

fn read_or_materialize(path: &Path, default: &str) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            info!(path = %path.display(), "input file missing, materializing default");
            fs::write(path, default).with_context(|| format!("creating {}", path.display()))?;
            fs::read_to_string(path).with_context(|| format!("re-reading {}", path.display()))
        }
        Err(err) => Err(err).with_context(|| format!("reading {}", path.display())),
    }
}

/// Load the ordered weight list.
pub fn load_weights(path: &Path) -> Result<Vec<i64>> {
    let text = read_or_materialize(path, DEFAULT_WEIGHTS)?;
    text.split_whitespace()
        .map(|tok| {
            tok.parse::<i64>()
                .with_context(|| format!("invalid weight {tok:?} in {}", path.display()))
        })
        .collect()
}

/// Load the reference partition's bit-string: the first line of the file.
///
/// The default is always six zeros, matching the default weight list; a
/// custom weight list of another length needs its own partition file, and
/// the length mismatch surfaces downstream as a typed error.
pub fn load_reference(path: &Path) -> Result<String> {
    let text = read_or_materialize(path, DEFAULT_REFERENCE)?;
    Ok(text.lines().next().unwrap_or("").to_owned())
}
