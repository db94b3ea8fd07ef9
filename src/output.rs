//! Artifact writer — lays rendered diagrams out on disk and exports rankings
//! as JSON.
//!
//! Diagrams for a scale go in `<out_dir>/<label>/<rank>.svg`, e.g.
//! `svg/A3maj/0.svg` for the best A major fingering in octave 3.

use std::fs;
use std::path::{Path, PathBuf};

use crate::fretboard::Fretboard;
use crate::generator::ScaleFingerings;
use crate::renderer::render_scale_svgs;

/// Totals from a batch write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteSummary {
    /// Diagrams written.
    pub files: usize,
    /// Scales that had nothing to draw.
    pub skipped: usize,
    /// Scales whose diagrams could not be written.
    pub failed: usize,
}

/// Directory holding the diagrams of `result`.
pub fn scale_dir(out_dir: &Path, result: &ScaleFingerings) -> PathBuf {
    out_dir.join(result.label())
}

/// Write every ranked fingering of `result` and return how many files were
/// written. A scale without fingerings writes nothing, not even its directory.
pub fn write_scale_diagrams(
    fretboard: &Fretboard,
    result: &ScaleFingerings,
    out_dir: &Path,
) -> Result<usize, String> {
    if result.is_empty() {
        return Ok(0);
    }

    let dir = scale_dir(out_dir, result);
    fs::create_dir_all(&dir)
        .map_err(|e| format!("Failed to create directory '{}': {e}", dir.display()))?;

    let svgs = render_scale_svgs(fretboard, result);
    for (rank, svg) in svgs.iter().enumerate() {
        let path = dir.join(format!("{rank}.svg"));
        fs::write(&path, svg)
            .map_err(|e| format!("Failed to write '{}': {e}", path.display()))?;
        log::debug!("Wrote {}", path.display());
    }
    Ok(svgs.len())
}

/// Write diagrams for every result. A failing scale is logged and counted;
/// the rest of the batch still runs.
pub fn write_all_diagrams(
    fretboard: &Fretboard,
    results: &[ScaleFingerings],
    out_dir: &Path,
) -> WriteSummary {
    let mut summary = WriteSummary::default();
    for result in results {
        if result.is_empty() {
            log::warn!("{}: nothing to render", result.label());
            summary.skipped += 1;
            continue;
        }
        match write_scale_diagrams(fretboard, result, out_dir) {
            Ok(n) => summary.files += n,
            Err(e) => {
                log::error!("{}: {e}", result.label());
                summary.failed += 1;
            }
        }
    }
    summary
}

/// Convert results to a pretty-printed JSON string.
pub fn results_to_json(results: &[ScaleFingerings]) -> Result<String, String> {
    serde_json::to_string_pretty(results).map_err(|e| format!("JSON serialization error: {e}"))
}

/// Write the JSON rankings of `results` to `path`, creating parent directories.
pub fn write_json(results: &[ScaleFingerings], path: &Path) -> Result<(), String> {
    let json = results_to_json(results)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create directory '{}': {e}", parent.display()))?;
    }
    fs::write(path, json).map_err(|e| format!("Failed to write '{}': {e}", path.display()))
}
