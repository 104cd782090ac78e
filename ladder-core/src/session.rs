//! Interactive session driver.
//!
//! Reads setup answers from an [`InputSource`], re-prompting on invalid input,
//! generates the game, then answers result queries until the player asks for
//! everyone. All I/O goes through the two traits so the console, scripted
//! replays and tests share one flow.

use std::collections::VecDeque;
use std::io;
use thiserror::Error;

use crate::board::{Query, ResultBoard};
use crate::config::GameConfig;
use crate::domain::{Height, Name, NotFoundError, Outcome, Roster, ValidationError};
use crate::game::Game;
use crate::ladder::Ladder;
use crate::rng::RngHierarchy;

/// Errors that end a session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("input ended while waiting for {0}")]
    InputClosed(&'static str),
}

/// Where raw answers come from. `Ok(None)` means the input is exhausted.
pub trait InputSource {
    fn read_names(&mut self) -> io::Result<Option<String>>;
    fn read_outcomes(&mut self) -> io::Result<Option<String>>;
    fn read_height(&mut self) -> io::Result<Option<String>>;
    fn read_query(&mut self) -> io::Result<Option<String>>;
}

/// Where formatted results go.
pub trait OutputSink {
    fn show_ladder(&mut self, roster: &Roster, ladder: &Ladder, outcomes: &[Outcome])
        -> io::Result<()>;
    fn show_outcome(&mut self, name: &Name, outcome: &Outcome) -> io::Result<()>;
    fn show_board(&mut self, board: &ResultBoard) -> io::Result<()>;
    fn show_error(&mut self, error: &dyn std::error::Error) -> io::Result<()>;
}

/// Prepared answers, consumed in order. Each prompt kind has its own queue.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    names: VecDeque<String>,
    outcomes: VecDeque<String>,
    heights: VecDeque<String>,
    queries: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn names(mut self, raw: impl Into<String>) -> Self {
        self.names.push_back(raw.into());
        self
    }

    pub fn outcomes(mut self, raw: impl Into<String>) -> Self {
        self.outcomes.push_back(raw.into());
        self
    }

    pub fn height(mut self, raw: impl Into<String>) -> Self {
        self.heights.push_back(raw.into());
        self
    }

    pub fn query(mut self, raw: impl Into<String>) -> Self {
        self.queries.push_back(raw.into());
        self
    }
}

impl InputSource for ScriptedInput {
    fn read_names(&mut self) -> io::Result<Option<String>> {
        Ok(self.names.pop_front())
    }

    fn read_outcomes(&mut self) -> io::Result<Option<String>> {
        Ok(self.outcomes.pop_front())
    }

    fn read_height(&mut self) -> io::Result<Option<String>> {
        Ok(self.heights.pop_front())
    }

    fn read_query(&mut self) -> io::Result<Option<String>> {
        Ok(self.queries.pop_front())
    }
}

/// Run `attempt` until it stops failing validation.
///
/// Each validation failure is shown on `output` before the next attempt.
/// Any other error (I/O, closed input) is returned immediately.
pub fn retry_until_valid<T, O, F>(output: &mut O, mut attempt: F) -> Result<T, SessionError>
where
    O: OutputSink + ?Sized,
    F: FnMut() -> Result<T, SessionError>,
{
    loop {
        match attempt() {
            Ok(value) => return Ok(value),
            Err(SessionError::Validation(err)) => {
                log::warn!("rejected input: {err}");
                output.show_error(&err)?;
            }
            Err(other) => return Err(other),
        }
    }
}

fn required(line: Option<String>, what: &'static str) -> Result<String, SessionError> {
    line.ok_or(SessionError::InputClosed(what))
}

/// One game from setup prompts to the final "all" query.
pub struct Session<I, O> {
    input: I,
    output: O,
    config: GameConfig,
    seeds: Option<RngHierarchy>,
}

impl<I: InputSource, O: OutputSink> Session<I, O> {
    pub fn new(input: I, output: O, config: GameConfig) -> Self {
        Self {
            input,
            output,
            config,
            seeds: None,
        }
    }

    /// Make ladder generation reproducible from `seed`.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seeds = Some(RngHierarchy::new(seed));
        self
    }

    /// Play a full session and return the board that was built.
    pub fn play(&mut self) -> Result<ResultBoard, SessionError> {
        let game = self.setup()?;
        self.output
            .show_ladder(game.roster(), game.ladder(), game.outcomes())?;
        self.query_loop(game.board())?;
        Ok(game.into_board())
    }

    /// Collect names, outcomes and height, then generate the game.
    pub fn setup(&mut self) -> Result<Game, SessionError> {
        let delimiter = self.config.delimiter;
        let max_height = self.config.max_height;
        let input = &mut self.input;

        let roster = retry_until_valid(&mut self.output, || {
            let raw = required(input.read_names()?, "participant names")?;
            let roster = Roster::parse(&raw, delimiter)?;
            roster.width()?;
            Ok(roster)
        })?;

        let participants = roster.len();
        let outcomes = retry_until_valid(&mut self.output, || {
            let raw = required(input.read_outcomes()?, "outcomes")?;
            Ok(Outcome::parse_list(&raw, delimiter, participants)?)
        })?;

        let height = retry_until_valid(&mut self.output, || {
            let raw = required(input.read_height()?, "ladder height")?;
            Ok(Height::parse(&raw, max_height)?)
        })?;

        Ok(Game::draw(roster, outcomes, height, self.seeds.as_ref())?)
    }

    /// Answer queries until the "all" keyword or the end of input.
    ///
    /// Unknown or blank names are reported and the loop keeps going.
    pub fn query_loop(&mut self, board: &ResultBoard) -> Result<(), SessionError> {
        while let Some(raw) = self.input.read_query()? {
            let query = match Query::parse(&raw, &self.config.all_keyword) {
                Ok(query) => query,
                Err(err) => {
                    self.output.show_error(&err)?;
                    continue;
                }
            };
            match query {
                Query::All => {
                    self.output.show_board(board)?;
                    return Ok(());
                }
                Query::Participant(name) => match board.get(name.as_str()) {
                    Ok(outcome) => self.output.show_outcome(&name, outcome)?,
                    Err(err) => {
                        log::info!("{err}");
                        self.output.show_error(&err)?;
                    }
                },
            }
        }
        log::debug!("query input ended before '{}'", self.config.all_keyword);
        Ok(())
    }

    pub fn into_parts(self) -> (I, O) {
        (self.input, self.output)
    }
}
