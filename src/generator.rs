//! Per-scale pipeline: build the scale, enumerate its fingerings, rank them.
//!
//! Each (root, octave, kind) request only reads the shared [`Fretboard`], so
//! the twelve roots of an octave are generated in parallel.

use rayon::prelude::*;
use serde::Serialize;

use crate::enumerate::{candidate_count, enumerate_fingerings};
use crate::fretboard::Fretboard;
use crate::instrument::{MAX_OCTAVE, MIN_OCTAVE};
use crate::model::{NoteName, Pitch, ScoredFingering};
use crate::scale::{build_scale, ScaleKind};
use crate::scoring::{is_consistent, rank_fingerings, DistanceMetric, SCALE_CUTOFF};

/// Options controlling ranking.
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Maximum number of fingerings kept per scale.
    pub cutoff: usize,
    pub metric: DistanceMetric,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            cutoff: SCALE_CUTOFF,
            metric: DistanceMetric::Euclidean,
        }
    }
}

/// Ranked fingerings for one scale, ready to render.
#[derive(Debug, Clone, Serialize)]
pub struct ScaleFingerings {
    pub root: NoteName,
    pub octave: i32,
    pub kind: ScaleKind,
    pub scale: Vec<Pitch>,
    /// Size of the full enumeration before filtering.
    pub candidates: usize,
    /// How many enumerated fingerings passed the consistency check.
    pub consistent: usize,
    pub fingerings: Vec<ScoredFingering>,
}

impl ScaleFingerings {
    /// Output name such as `A3maj` or `C#2min`.
    pub fn label(&self) -> String {
        format!("{}{}{}", self.root, self.octave, self.kind.label())
    }

    pub fn is_empty(&self) -> bool {
        self.fingerings.is_empty()
    }
}

/// Accept only octaves the position index covers.
pub fn check_octave(octave: i32) -> Result<i32, String> {
    if (MIN_OCTAVE..=MAX_OCTAVE).contains(&octave) {
        Ok(octave)
    } else {
        Err(format!(
            "Octave needs to be in interval [{MIN_OCTAVE}, {MAX_OCTAVE}], got {octave}"
        ))
    }
}

/// Rank the fingerings of the `kind` scale rooted at `root`.
pub fn fingerings_for_scale(
    fretboard: &Fretboard,
    root: Pitch,
    kind: ScaleKind,
    options: &GeneratorOptions,
) -> ScaleFingerings {
    let scale = build_scale(root, kind.steps());
    let paths = enumerate_fingerings(&scale, fretboard);
    let candidates = paths.len();
    debug_assert_eq!(candidates, candidate_count(&scale, fretboard));

    let consistent = paths
        .iter()
        .filter(|p| is_consistent(p.iter()))
        .count();
    let fingerings = rank_fingerings(&paths, options.cutoff, options.metric);

    let result = ScaleFingerings {
        root: root.name,
        octave: root.octave,
        kind,
        scale,
        candidates,
        consistent,
        fingerings,
    };

    if log::log_enabled!(log::Level::Debug) {
        let notes: Vec<String> = result.scale.iter().map(Pitch::to_string).collect();
        log::debug!("{}: scale {}", result.label(), notes.join(" "));
        for f in &result.fingerings {
            let coords: Vec<String> = f.positions.iter().map(|p| p.to_string()).collect();
            log::debug!("  S = {:.1}: {}", f.score, coords.concat());
        }
    }
    if result.is_empty() {
        log::info!("{}: no playable fingering ({} candidates)", result.label(), candidates);
    } else {
        log::info!(
            "{}: kept {} of {} consistent fingerings ({} candidates)",
            result.label(),
            result.fingerings.len(),
            consistent,
            candidates
        );
    }
    result
}

/// Rank every requested root of `kind` at `octave`, in chromatic order.
pub fn fingerings_for_octave(
    fretboard: &Fretboard,
    octave: i32,
    kind: ScaleKind,
    roots: &[NoteName],
    options: &GeneratorOptions,
) -> Vec<ScaleFingerings> {
    roots
        .par_iter()
        .map(|name| fingerings_for_scale(fretboard, Pitch::new(*name, octave), kind, options))
        .collect()
}
