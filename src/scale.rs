//! Scale construction from a root pitch and a semitone step pattern.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::Pitch;

/// Natural minor. The trailing 0 closes the scale on the octave root.
pub const MINOR_STEPS: [usize; 8] = [2, 1, 2, 2, 1, 2, 2, 0];
/// Major. The trailing 0 closes the scale on the octave root.
pub const MAJOR_STEPS: [usize; 8] = [2, 2, 1, 2, 2, 2, 1, 0];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleKind {
    Minor,
    Major,
}

impl ScaleKind {
    pub const ALL: [ScaleKind; 2] = [ScaleKind::Minor, ScaleKind::Major];

    pub fn steps(self) -> &'static [usize] {
        match self {
            ScaleKind::Minor => &MINOR_STEPS,
            ScaleKind::Major => &MAJOR_STEPS,
        }
    }

    /// Short label used in output names (`min` / `maj`).
    pub fn label(self) -> &'static str {
        match self {
            ScaleKind::Minor => "min",
            ScaleKind::Major => "maj",
        }
    }
}

impl fmt::Display for ScaleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ScaleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "min" | "minor" => Ok(ScaleKind::Minor),
            "maj" | "major" => Ok(ScaleKind::Major),
            other => Err(format!("Unknown scale type '{other}' (expected 'min' or 'maj')")),
        }
    }
}

/// Build the scale rooted at `root`.
///
/// Element `i` is the root raised by the sum of the steps before `i`, so the
/// result has one pitch per step and the last step is never applied.
pub fn build_scale(root: Pitch, steps: &[usize]) -> Vec<Pitch> {
    steps
        .iter()
        .scan(0usize, |offset, step| {
            let pitch = root.transpose(*offset);
            *offset += step;
            Some(pitch)
        })
        .collect()
}
