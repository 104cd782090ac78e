//! Structured error types for game setup and result lookup.
//!
//! These are designed to be displayable in the console prompt loop as-is.

use thiserror::Error;

/// Input that cannot start (or describe) a game.
///
/// Every variant is detected synchronously before any ladder work begins.
/// The session layer re-prompts on these; nothing in the core retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("ladder width must be between {min} and {max}, got {value}")]
    WidthOutOfRange { value: usize, min: usize, max: usize },

    #[error("ladder height must be a positive number, got {value}")]
    HeightNotPositive { value: i64 },

    #[error("ladder height must be at most {max}, got {value}")]
    HeightTooTall { value: usize, max: usize },

    #[error("ladder height must be a number, got '{raw}'")]
    HeightNotNumber { raw: String },

    #[error("participant names must not be blank")]
    BlankName,

    #[error("duplicate participant name '{name}'")]
    DuplicateName { name: String },

    #[error("outcomes must not be blank")]
    BlankOutcome,

    #[error("expected {names} outcomes (one per participant), got {outcomes}")]
    CountMismatch { names: usize, outcomes: usize },

    #[error("ladder has {verticals} verticals but {participants} participants were given")]
    LadderMismatch { verticals: usize, participants: usize },

    #[error("row {row} has width {actual}, expected {expected}")]
    RowWidthMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("rungs at positions {position} and {next} would share a vertical", next = .position + 1)]
    AdjacentRungs { position: usize },

    #[error("start index {start} is outside a ladder of width {width}")]
    StartOutOfRange { start: usize, width: usize },
}

/// A queried participant is not on the result board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no participant named '{name}'")]
pub struct NotFoundError {
    pub name: String,
}
