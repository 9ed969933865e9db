use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use attendance::*;
pub use controller::*;
pub use error::*;
pub use generator::*;
pub use placement::*;
pub use session::*;
pub use types::*;
pub use words::*;

mod attendance;
mod controller;
mod error;
mod generator;
mod placement;
mod session;
mod types;
mod words;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PuzzleConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub word_count: usize,
}

impl PuzzleConfig {
    pub const fn new_unchecked(rows: Coord, cols: Coord, word_count: usize) -> Self {
        Self {
            rows,
            cols,
            word_count,
        }
    }

    pub fn new(rows: Coord, cols: Coord, word_count: usize) -> Self {
        let rows = rows.clamp(1, Coord::MAX);
        let cols = cols.clamp(1, Coord::MAX);
        let word_count = word_count.clamp(1, mult(rows, cols) as usize);
        Self::new_unchecked(rows, cols, word_count)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }

    /// Longest word the grid can hold in either orientation.
    pub const fn max_word_len(&self) -> usize {
        if self.rows > self.cols {
            self.rows as usize
        } else {
            self.cols as usize
        }
    }
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self::new_unchecked(10, 8, 8)
    }
}

/// Fully-filled letter board. Every cell holds either a placed word's
/// character or a filler character.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LetterGrid {
    cells: Array2<char>,
}

impl LetterGrid {
    pub(crate) fn from_cells(cells: Array2<char>) -> Self {
        Self { cells }
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.cells.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len().try_into().unwrap()
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(PuzzleError::InvalidCoords)
        }
    }

    /// Concatenates the characters at `cells` in the given order.
    pub fn read(&self, cells: &[Coord2]) -> Result<String> {
        let mut word = String::new();
        for &coords in cells {
            let coords = self.validate_coords(coords)?;
            word.push(self[coords]);
        }
        Ok(word)
    }

    pub fn row_string(&self, row: Coord) -> String {
        self.cells.row(row.into()).iter().collect()
    }

    pub fn col_string(&self, col: Coord) -> String {
        self.cells.column(col.into()).iter().collect()
    }
}

impl Index<Coord2> for LetterGrid {
    type Output = char;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.cells[(row as usize, col as usize)]
    }
}

/// A generated board together with the words hidden in it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Puzzle {
    grid: LetterGrid,
    placements: Vec<WordPlacement>,
    words: Vec<String>,
}

impl Puzzle {
    pub(crate) fn new(grid: LetterGrid, placements: Vec<WordPlacement>) -> Self {
        let words = placements
            .iter()
            .map(|placement| placement.word.clone())
            .collect();
        Self {
            grid,
            placements,
            words,
        }
    }

    pub fn grid(&self) -> &LetterGrid {
        &self.grid
    }

    pub fn placements(&self) -> &[WordPlacement] {
        &self.placements
    }

    /// Target words actually hidden in the grid.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn contains_word(&self, word: &str) -> bool {
        self.words.iter().any(|target| target == word)
    }

    pub fn config(&self) -> PuzzleConfig {
        let (rows, cols) = self.grid.size();
        PuzzleConfig::new_unchecked(rows, cols, self.words.len())
    }
}
