//! Data model for pitches, fretboard positions and ranked fingerings.
//!
//! These are small value types: they compare and hash by their fields,
//! so they can be used directly as map keys.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of names in the chromatic alphabet.
pub const NUM_NOTE_NAMES: usize = 12;

/// One of the 12 canonical chromatic note names. Sharps only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NoteName {
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C#")]
    CSharp,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "D#")]
    DSharp,
    #[serde(rename = "E")]
    E,
    #[serde(rename = "F")]
    F,
    #[serde(rename = "F#")]
    FSharp,
    #[serde(rename = "G")]
    G,
    #[serde(rename = "G#")]
    GSharp,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A#")]
    ASharp,
    #[serde(rename = "B")]
    B,
}

impl NoteName {
    /// The chromatic alphabet in order, starting at C.
    pub const ALL: [NoteName; NUM_NOTE_NAMES] = [
        NoteName::C,
        NoteName::CSharp,
        NoteName::D,
        NoteName::DSharp,
        NoteName::E,
        NoteName::F,
        NoteName::FSharp,
        NoteName::G,
        NoteName::GSharp,
        NoteName::A,
        NoteName::ASharp,
        NoteName::B,
    ];

    /// Position of this name in the chromatic cycle (C = 0).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Name at `index` in the chromatic cycle, wrapping past B.
    pub fn from_index(index: usize) -> NoteName {
        Self::ALL[index % NUM_NOTE_NAMES]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NoteName::C => "C",
            NoteName::CSharp => "C#",
            NoteName::D => "D",
            NoteName::DSharp => "D#",
            NoteName::E => "E",
            NoteName::F => "F",
            NoteName::FSharp => "F#",
            NoteName::G => "G",
            NoteName::GSharp => "G#",
            NoteName::A => "A",
            NoteName::ASharp => "A#",
            NoteName::B => "B",
        }
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NoteName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|n| n.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown note name '{s}' (expected one of C, C#, D, ..., B)"))
    }
}

/// A note name together with its octave, e.g. `C#3`.
///
/// Enharmonic spellings are never unified: the alphabet has no flats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pitch {
    pub name: NoteName,
    pub octave: i32,
}

impl Pitch {
    pub fn new(name: NoteName, octave: i32) -> Self {
        Self { name, octave }
    }

    /// Move up by `semitones`, wrapping the name and bumping the octave
    /// once per full trip around the alphabet.
    pub fn transpose(self, semitones: usize) -> Pitch {
        let i = self.name.index() + semitones;
        Pitch {
            name: NoteName::from_index(i),
            octave: self.octave + (i / NUM_NOTE_NAMES) as i32,
        }
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.octave)
    }
}

impl FromStr for Pitch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = s
            .find(|c: char| c.is_ascii_digit() || c == '-')
            .ok_or_else(|| format!("Pitch '{s}' has no octave"))?;
        let (name, octave) = s.split_at(split);
        let name: NoteName = name.parse()?;
        let octave: i32 = octave
            .parse()
            .map_err(|e| format!("Invalid octave in pitch '{s}': {e}"))?;
        Ok(Pitch { name, octave })
    }
}

/// A (string, fret) coordinate on the fretboard.
///
/// `line` 0 is the first open string of the instrument; `slot` 0 is the
/// open string itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub slot: usize,
}

impl Position {
    pub fn new(line: usize, slot: usize) -> Self {
        Self { line, slot }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {})", self.line, self.slot)
    }
}

/// A ranked fingering: one position per scale note plus its compactness score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredFingering {
    pub positions: Vec<Position>,
    /// Lower is more compact.
    pub score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transpose_wraps_into_next_octave() {
        let b3 = Pitch::new(NoteName::B, 3);
        assert_eq!(b3.transpose(0), b3);
        assert_eq!(b3.transpose(1), Pitch::new(NoteName::C, 4));
        assert_eq!(b3.transpose(13), Pitch::new(NoteName::C, 5));
        assert_eq!(Pitch::new(NoteName::E, 2).transpose(24), Pitch::new(NoteName::E, 4));
    }

    #[test]
    fn pitch_parses_and_displays() {
        let p: Pitch = "C#3".parse().unwrap();
        assert_eq!(p, Pitch::new(NoteName::CSharp, 3));
        assert_eq!(p.to_string(), "C#3");
        assert_eq!("a2".parse::<Pitch>().unwrap(), Pitch::new(NoteName::A, 2));
    }

    #[test]
    fn flats_are_not_note_names() {
        assert!("Bb".parse::<NoteName>().is_err());
        assert!("Db3".parse::<Pitch>().is_err());
        assert!("G".parse::<Pitch>().is_err());
    }

    #[test]
    fn note_names_serialize_with_sharps() {
        let json = serde_json::to_string(&Pitch::new(NoteName::FSharp, 4)).unwrap();
        assert_eq!(json, r#"{"name":"F#","octave":4}"#);
    }
}
