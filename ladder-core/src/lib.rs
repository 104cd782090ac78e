//! Ladder Core: value types, ladder generation, traversal, result board.
//!
//! This crate contains the whole game apart from the console:
//! - Domain value types (names, outcomes, width, height) with validation
//! - Randomized ladder generation under the no-adjacent-rungs rule
//! - Deterministic traversal from a start vertical to a landing slot
//! - Result board mapping each participant to their outcome
//! - Session driver over pluggable input/output, with retry-until-valid setup
//! - Seed derivation for reproducible games

pub mod board;
pub mod config;
pub mod domain;
pub mod game;
pub mod ladder;
pub mod rng;
pub mod session;

pub use board::{make_result_board, Answer, Query, ResultBoard};
pub use config::{ConfigError, GameConfig};
pub use domain::{Height, Name, NotFoundError, Outcome, Roster, ValidationError, Width};
pub use game::Game;
pub use ladder::{generate_ladder, generate_row, resolve, Ladder, RungRow, RungSource};
pub use session::{
    retry_until_valid, InputSource, OutputSink, ScriptedInput, Session, SessionError,
};
