//! Position table — the pitch at every (string, fret) of an instrument and
//! the inverse index from pitch to the positions that produce it.
//!
//! Both tables are derived once from an [`Instrument`] and are read-only
//! afterwards, so a `Fretboard` can be shared freely across threads.

use std::collections::HashMap;
use std::fmt;

use crate::instrument::Instrument;
use crate::model::{Pitch, Position};

#[derive(Debug, Clone)]
pub struct Fretboard {
    instrument: Instrument,
    /// `layout[line][slot]`
    layout: Vec<Vec<Pitch>>,
    index: HashMap<Pitch, Vec<Position>>,
}

impl Fretboard {
    /// Build the layout and inverse index for `instrument`.
    pub fn new(instrument: Instrument) -> Self {
        let layout: Vec<Vec<Pitch>> = instrument
            .open_strings
            .iter()
            .map(|open| (0..instrument.num_frets).map(|slot| open.transpose(slot)).collect())
            .collect();

        // Line-major, slot-ascending scan: this fixes the candidate order
        // every lookup returns.
        let mut index: HashMap<Pitch, Vec<Position>> = HashMap::new();
        for (line, row) in layout.iter().enumerate() {
            for (slot, pitch) in row.iter().enumerate() {
                if instrument.covers_octave(pitch.octave) {
                    index.entry(*pitch).or_default().push(Position::new(line, slot));
                }
            }
        }

        log::debug!(
            "Built fretboard: {} strings x {} frets, {} distinct pitches indexed",
            instrument.num_strings(),
            instrument.num_frets,
            index.len()
        );

        Self { instrument, layout, index }
    }

    pub fn standard_guitar() -> Self {
        Self::new(Instrument::standard_guitar())
    }

    pub fn instrument(&self) -> &Instrument {
        &self.instrument
    }

    pub fn num_strings(&self) -> usize {
        self.instrument.num_strings()
    }

    pub fn num_frets(&self) -> usize {
        self.instrument.num_frets
    }

    /// Pitch sounded at `position`, or `None` off the edge of the board.
    pub fn pitch_at(&self, position: Position) -> Option<Pitch> {
        self.layout.get(position.line)?.get(position.slot).copied()
    }

    /// Every position producing `pitch`, in line-major order.
    ///
    /// A pitch outside the indexed octave range has no positions; this is
    /// an empty slice, not an error.
    pub fn positions_of(&self, pitch: &Pitch) -> &[Position] {
        self.index.get(pitch).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All indexed pitches with their positions, in no particular order.
    pub fn indexed_pitches(&self) -> impl Iterator<Item = (&Pitch, &[Position])> {
        self.index.iter().map(|(p, positions)| (p, positions.as_slice()))
    }

    /// Every position on the board, line-major.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.num_strings())
            .flat_map(move |line| (0..self.num_frets()).map(move |slot| Position::new(line, slot)))
    }
}

/// One row per string, cells separated by tabs.
impl fmt::Display for Fretboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.layout {
            for pitch in row {
                write!(f, "{pitch}\t")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NoteName;
    use pretty_assertions::assert_eq;

    #[test]
    fn layout_is_total_and_rises_by_semitones() {
        let board = Fretboard::standard_guitar();
        assert_eq!(board.positions().count(), 6 * 25);
        for line in 0..board.num_strings() {
            for slot in 0..board.num_frets() - 1 {
                let here = board.pitch_at(Position::new(line, slot)).unwrap();
                let next = board.pitch_at(Position::new(line, slot + 1)).unwrap();
                assert_eq!(here.transpose(1), next, "line {line} slot {slot}");
            }
        }
        assert_eq!(board.pitch_at(Position::new(6, 0)), None);
        assert_eq!(board.pitch_at(Position::new(0, 25)), None);
    }

    #[test]
    fn open_strings_and_octave_wrap() {
        let board = Fretboard::standard_guitar();
        assert_eq!(board.pitch_at(Position::new(5, 0)), Some(Pitch::new(NoteName::E, 2)));
        // B3 -> C4 on the first fret of the B string
        assert_eq!(board.pitch_at(Position::new(1, 1)), Some(Pitch::new(NoteName::C, 4)));
        assert_eq!(board.pitch_at(Position::new(0, 24)), Some(Pitch::new(NoteName::E, 6)));
    }

    #[test]
    fn index_round_trips_with_layout() {
        let board = Fretboard::standard_guitar();
        for (pitch, positions) in board.indexed_pitches() {
            assert!(!positions.is_empty());
            for pos in positions {
                assert_eq!(board.pitch_at(*pos), Some(*pitch));
            }
        }
        for pos in board.positions() {
            let pitch = board.pitch_at(pos).unwrap();
            assert!(board.positions_of(&pitch).contains(&pos), "{pos} missing for {pitch}");
        }
    }

    #[test]
    fn candidates_come_in_line_major_order() {
        let board = Fretboard::standard_guitar();
        let e4 = Pitch::new(NoteName::E, 4);
        assert_eq!(
            board.positions_of(&e4),
            &[
                Position::new(0, 0),
                Position::new(1, 5),
                Position::new(2, 9),
                Position::new(3, 14),
                Position::new(4, 19),
                Position::new(5, 24),
            ]
        );
    }

    #[test]
    fn unreachable_pitches_have_no_positions() {
        let board = Fretboard::standard_guitar();
        assert!(board.positions_of(&Pitch::new(NoteName::C, 2)).is_empty());
        assert!(board.positions_of(&Pitch::new(NoteName::F, 6)).is_empty());
        assert!(board.positions_of(&Pitch::new(NoteName::A, 9)).is_empty());
    }

    #[test]
    fn display_prints_one_row_per_string() {
        let board = Fretboard::standard_guitar();
        let text = board.to_string();
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 6);
        assert!(rows[0].starts_with("E4\tF4\tF#4\t"));
        assert!(rows[5].starts_with("E2\tF2\t"));
    }
}
