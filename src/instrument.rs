//! Fixed description of a fretted instrument: its open strings, fret count
//! and the octave range the position index covers.

use serde::Serialize;

use crate::model::{NoteName, Pitch};

/// Lowest octave covered by the position index.
pub const MIN_OCTAVE: i32 = 2;
/// Highest octave covered by the position index.
pub const MAX_OCTAVE: i32 = 6;

/// Open strings and fret count of an instrument.
///
/// Built once and handed to [`crate::fretboard::Fretboard::new`]; nothing
/// mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Instrument {
    /// Open-string pitch of each line, in line order.
    pub open_strings: Vec<Pitch>,
    /// Number of slots per string, including the open string.
    pub num_frets: usize,
    pub min_octave: i32,
    pub max_octave: i32,
}

impl Instrument {
    /// Six-string guitar in standard tuning, 25 slots per string.
    ///
    /// Line 0 is the high E string, line 5 the low E string.
    pub fn standard_guitar() -> Self {
        Self {
            open_strings: vec![
                Pitch::new(NoteName::E, 4),
                Pitch::new(NoteName::B, 3),
                Pitch::new(NoteName::G, 3),
                Pitch::new(NoteName::D, 3),
                Pitch::new(NoteName::A, 2),
                Pitch::new(NoteName::E, 2),
            ],
            num_frets: 25,
            min_octave: MIN_OCTAVE,
            max_octave: MAX_OCTAVE,
        }
    }

    pub fn num_strings(&self) -> usize {
        self.open_strings.len()
    }

    pub fn covers_octave(&self, octave: i32) -> bool {
        (self.min_octave..=self.max_octave).contains(&octave)
    }
}

impl Default for Instrument {
    fn default() -> Self {
        Self::standard_guitar()
    }
}
