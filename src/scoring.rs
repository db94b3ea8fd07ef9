//! Playability filter and compactness score for enumerated fingerings.
//!
//! A fingering is kept only if it never moves to a higher string index from
//! one note to the next. Survivors are scored by how tightly their positions
//! cluster around their centroid on the (line, slot) grid; the lowest scores
//! are the easiest shapes to play.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::enumerate::FingeringPath;
use crate::model::{Position, ScoredFingering};

/// Default number of fingerings kept per scale.
pub const SCALE_CUTOFF: usize = 10;

/// Distance used between a position and the fingering's centroid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMetric {
    #[default]
    Euclidean,
    Manhattan,
}

impl DistanceMetric {
    pub fn distance(self, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
        match self {
            DistanceMetric::Euclidean => {
                let dx = x2 - x1;
                let dy = y2 - y1;
                (dx * dx + dy * dy).sqrt()
            }
            DistanceMetric::Manhattan => (x2 - x1).abs() + (y2 - y1).abs(),
        }
    }
}

impl fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DistanceMetric::Euclidean => "euclidean",
            DistanceMetric::Manhattan => "manhattan",
        })
    }
}

impl FromStr for DistanceMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "euclidean" => Ok(DistanceMetric::Euclidean),
            "manhattan" => Ok(DistanceMetric::Manhattan),
            other => Err(format!(
                "Unknown distance metric '{other}' (expected 'euclidean' or 'manhattan')"
            )),
        }
    }
}

/// True if the line index never increases from one position to the next.
pub fn is_consistent<I>(positions: I) -> bool
where
    I: IntoIterator<Item = Position>,
{
    let mut iter = positions.into_iter();
    let Some(mut prev) = iter.next() else {
        return true;
    };
    for pos in iter {
        if prev.line < pos.line {
            return false;
        }
        prev = pos;
    }
    true
}

/// Sum of distances from each position to the running-mean centroid.
pub fn cluster_distance(positions: &[Position], metric: DistanceMetric) -> f64 {
    let mut mean_line = 0.0;
    let mut mean_slot = 0.0;
    for (i, pos) in positions.iter().enumerate() {
        let k = i as f64;
        mean_line = (k * mean_line + pos.line as f64) / (k + 1.0);
        mean_slot = (k * mean_slot + pos.slot as f64) / (k + 1.0);
    }

    positions
        .iter()
        .map(|pos| metric.distance(pos.line as f64, pos.slot as f64, mean_line, mean_slot))
        .sum()
}

/// Keep the consistent paths, score them, and return the `cutoff` best.
///
/// Equal scores keep their enumeration order. Only consistent paths are
/// materialized.
pub fn rank_fingerings(
    paths: &[FingeringPath],
    cutoff: usize,
    metric: DistanceMetric,
) -> Vec<ScoredFingering> {
    let mut scored: Vec<ScoredFingering> = paths
        .iter()
        .filter(|path| is_consistent(path.iter()))
        .map(|path| {
            let positions = path.to_vec();
            let score = cluster_distance(&positions, metric);
            ScoredFingering { positions, score }
        })
        .collect();

    scored.sort_by(|a, b| a.score.total_cmp(&b.score));
    scored.truncate(cutoff);
    scored
}
