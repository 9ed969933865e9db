use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Word list does not fit the requested grid")]
    InvalidConfig,
    #[error("Placement retry budget exhausted")]
    GenerationExhausted,
    #[error("Puzzle already solved, no new selections are accepted")]
    AlreadySolved,
    #[error("No active puzzle, start a session first")]
    SessionNotStarted,
}

pub type Result<T> = core::result::Result<T, PuzzleError>;
