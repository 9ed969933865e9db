use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SelectOutcome {
    NoMatch,
    Found,
    Solved,
}

impl SelectOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoMatch => false,
            Self::Found => true,
            Self::Solved => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SessionState {
    Active,
    Solved,
}

impl SessionState {
    pub const fn is_solved(self) -> bool {
        matches!(self, Self::Solved)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::Active
    }
}

/// Per-puzzle play state: the dealt board plus the words matched so far.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PuzzleSession {
    puzzle: Puzzle,
    found: BTreeSet<String>,
    state: SessionState,
}

impl PuzzleSession {
    pub fn new(puzzle: Puzzle) -> Self {
        Self {
            puzzle,
            found: BTreeSet::new(),
            state: Default::default(),
        }
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn grid(&self) -> &LetterGrid {
        self.puzzle.grid()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_solved(&self) -> bool {
        self.state.is_solved()
    }

    pub fn found_words(&self) -> &BTreeSet<String> {
        &self.found
    }

    pub fn remaining_count(&self) -> usize {
        self.puzzle.word_count() - self.found.len()
    }

    /// Checks one drag selection against the remaining target words. A word
    /// that was already found counts as a miss, matching the play rules.
    pub fn select(&mut self, cells: &[Coord2]) -> Result<SelectOutcome> {
        use SelectOutcome::*;

        if self.state.is_solved() {
            return Err(PuzzleError::AlreadySolved);
        }
        if cells.is_empty() {
            return Ok(NoMatch);
        }

        let selected = self.puzzle.grid().read(cells)?;
        if !self.puzzle.contains_word(&selected) || self.found.contains(&selected) {
            return Ok(NoMatch);
        }

        self.found.insert(selected);
        if self.found.len() == self.puzzle.word_count() {
            self.state = SessionState::Solved;
            Ok(Solved)
        } else {
            Ok(Found)
        }
    }
}

#[cfg(test)]
mod tests {
    use ndarray::Array2;

    use super::*;

    // a b x x
    // x x x x
    // x x x c
    // x x x d
    fn session() -> PuzzleSession {
        let mut cells = Array2::from_elem((4, 4), 'x');
        cells[[0, 0]] = 'a';
        cells[[0, 1]] = 'b';
        cells[[2, 3]] = 'c';
        cells[[3, 3]] = 'd';
        let placements = vec![
            WordPlacement::new("ab", (0, 0), Orientation::Horizontal),
            WordPlacement::new("cd", (2, 3), Orientation::Vertical),
        ];
        PuzzleSession::new(Puzzle::new(LetterGrid::from_cells(cells), placements))
    }

    #[test]
    fn matching_selection_is_found_and_tracked() {
        let mut session = session();

        let outcome = session.select(&[(0, 0), (0, 1)]).unwrap();

        assert_eq!(outcome, SelectOutcome::Found);
        assert!(outcome.has_update());
        assert!(session.found_words().contains("ab"));
        assert_eq!(session.remaining_count(), 1);
    }

    #[test]
    fn mismatched_selection_is_a_neutral_miss() {
        let mut session = session();

        let outcome = session.select(&[(1, 0), (1, 1)]).unwrap();

        assert_eq!(outcome, SelectOutcome::NoMatch);
        assert!(!outcome.has_update());
        assert_eq!(session.remaining_count(), 2);
    }

    #[test]
    fn reversed_selection_does_not_match() {
        let mut session = session();
        assert_eq!(
            session.select(&[(0, 1), (0, 0)]).unwrap(),
            SelectOutcome::NoMatch
        );
    }

    #[test]
    fn reselecting_a_found_word_is_a_miss() {
        let mut session = session();
        session.select(&[(0, 0), (0, 1)]).unwrap();

        assert_eq!(
            session.select(&[(0, 0), (0, 1)]).unwrap(),
            SelectOutcome::NoMatch
        );
        assert_eq!(session.found_words().len(), 1);
    }

    #[test]
    fn empty_selection_is_a_miss() {
        let mut session = session();
        assert_eq!(session.select(&[]).unwrap(), SelectOutcome::NoMatch);
    }

    #[test]
    fn last_word_solves_the_puzzle() {
        let mut session = session();
        session.select(&[(0, 0), (0, 1)]).unwrap();

        let outcome = session.select(&[(2, 3), (3, 3)]).unwrap();

        assert_eq!(outcome, SelectOutcome::Solved);
        assert!(session.is_solved());
        assert_eq!(session.remaining_count(), 0);
    }

    #[test]
    fn solved_puzzle_rejects_further_selections() {
        let mut session = session();
        session.select(&[(0, 0), (0, 1)]).unwrap();
        session.select(&[(2, 3), (3, 3)]).unwrap();

        assert_eq!(
            session.select(&[(1, 0), (1, 1)]),
            Err(PuzzleError::AlreadySolved)
        );
    }

    #[test]
    fn out_of_bounds_selection_is_an_error() {
        let mut session = session();
        assert_eq!(
            session.select(&[(0, 0), (0, 4)]),
            Err(PuzzleError::InvalidCoords)
        );
    }

    #[test]
    fn session_snapshot_round_trips_through_json() {
        let mut session = session();
        session.select(&[(0, 0), (0, 1)]).unwrap();

        let json = serde_json::to_string(&session).unwrap();
        let restored: PuzzleSession = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, session);
    }
}
