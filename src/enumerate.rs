//! Enumeration of every fingering that realizes a scale.
//!
//! The result is the cross-product of each note's candidate positions, so it
//! grows multiplicatively with scale length. Paths are persistent cons lists:
//! prepending a candidate allocates one node and shares the whole tail with
//! every other path built on the same sub-result.

use std::rc::Rc;

use crate::fretboard::Fretboard;
use crate::model::{Pitch, Position};

#[derive(Debug)]
struct Node {
    head: Position,
    tail: Option<Rc<Node>>,
}

/// One candidate fingering, in scale order.
#[derive(Debug, Clone)]
pub struct FingeringPath {
    node: Rc<Node>,
    len: usize,
}

impl FingeringPath {
    pub fn single(position: Position) -> Self {
        Self {
            node: Rc::new(Node { head: position, tail: None }),
            len: 1,
        }
    }

    /// A new path with `position` in front of this one. The tail is shared.
    pub fn prepend(&self, position: Position) -> Self {
        Self {
            node: Rc::new(Node {
                head: position,
                tail: Some(Rc::clone(&self.node)),
            }),
            len: self.len + 1,
        }
    }

    /// Build a path from a slice; `None` if the slice is empty.
    pub fn from_positions(positions: &[Position]) -> Option<Self> {
        let (last, rest) = positions.split_last()?;
        Some(
            rest.iter()
                .rev()
                .fold(Self::single(*last), |path, p| path.prepend(*p)),
        )
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> PathIter<'_> {
        PathIter { next: Some(&self.node) }
    }

    pub fn to_vec(&self) -> Vec<Position> {
        let mut out = Vec::with_capacity(self.len);
        out.extend(self.iter());
        out
    }
}

pub struct PathIter<'a> {
    next: Option<&'a Rc<Node>>,
}

impl Iterator for PathIter<'_> {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        let node = self.next?;
        self.next = node.tail.as_ref();
        Some(node.head)
    }
}

impl<'a> IntoIterator for &'a FingeringPath {
    type Item = Position;
    type IntoIter = PathIter<'a>;

    fn into_iter(self) -> PathIter<'a> {
        self.iter()
    }
}

/// Every way to play `scale` on `fretboard`, one position per note.
///
/// Ordered by the first note's candidates, then recursively by the rest.
/// If any note has no position on the board the result is empty.
pub fn enumerate_fingerings(scale: &[Pitch], fretboard: &Fretboard) -> Vec<FingeringPath> {
    let Some((first, rest)) = scale.split_first() else {
        return Vec::new();
    };
    let candidates = fretboard.positions_of(first);
    if candidates.is_empty() {
        return Vec::new();
    }
    if rest.is_empty() {
        return candidates.iter().map(|p| FingeringPath::single(*p)).collect();
    }

    let tails = enumerate_fingerings(rest, fretboard);
    let mut paths = Vec::with_capacity(candidates.len() * tails.len());
    for candidate in candidates {
        for tail in &tails {
            paths.push(tail.prepend(*candidate));
        }
    }
    paths
}

/// Number of paths [`enumerate_fingerings`] will produce for `scale`.
pub fn candidate_count(scale: &[Pitch], fretboard: &Fretboard) -> usize {
    if scale.is_empty() {
        return 0;
    }
    scale
        .iter()
        .map(|p| fretboard.positions_of(p).len())
        .fold(1usize, usize::saturating_mul)
}
