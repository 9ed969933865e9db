use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Per-letter `(row, col)` step.
    pub const fn delta(self) -> Coord2 {
        match self {
            Self::Horizontal => (0, 1),
            Self::Vertical => (1, 0),
        }
    }
}

/// Cells a single placed word occupies, in reading order.
pub type CellSpan = SmallVec<[Coord2; 8]>;

/// One word anchored in the grid. Lengths are measured in characters, not
/// bytes, since the shipped pool is Hangul.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WordPlacement {
    pub word: String,
    pub start: Coord2,
    pub orientation: Orientation,
}

impl WordPlacement {
    pub fn new(word: impl Into<String>, start: Coord2, orientation: Orientation) -> Self {
        Self {
            word: word.into(),
            start,
            orientation,
        }
    }

    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Whether the full span lies within a `(rows, cols)` board.
    pub fn fits(&self, (rows, cols): Coord2) -> bool {
        let len = self.len();
        let (row, col) = self.start;
        match self.orientation {
            Orientation::Horizontal => row < rows && col as usize + len <= cols as usize,
            Orientation::Vertical => col < cols && row as usize + len <= rows as usize,
        }
    }

    pub fn cells(&self) -> CellSpan {
        let (dr, dc) = self.orientation.delta();
        (0..self.len())
            .map(|i| {
                let i = i as Coord;
                (self.start.0 + dr * i, self.start.1 + dc * i)
            })
            .collect()
    }

    /// Occupied cells zipped with the characters they hold.
    pub fn letters(&self) -> impl Iterator<Item = (Coord2, char)> + '_ {
        self.cells().into_iter().zip(self.word.chars())
    }
}
