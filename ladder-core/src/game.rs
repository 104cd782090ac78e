//! Game: one generated ladder and its resolved board.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::{make_result_board, ResultBoard};
use crate::domain::{Height, Outcome, Roster, ValidationError};
use crate::ladder::{generate_ladder, Ladder, RandomRungs, RungSource};
use crate::rng::RngHierarchy;

/// A fully resolved game. Nothing in it changes after construction.
#[derive(Debug, Clone)]
pub struct Game {
    roster: Roster,
    outcomes: Vec<Outcome>,
    ladder: Ladder,
    board: ResultBoard,
}

impl Game {
    /// Validate the inputs, generate the ladder, and resolve every participant.
    ///
    /// All validation runs before the first rung is drawn.
    pub fn new<S: RungSource + ?Sized>(
        roster: Roster,
        outcomes: Vec<Outcome>,
        height: Height,
        source: &mut S,
    ) -> Result<Self, ValidationError> {
        let width = roster.width()?;
        if outcomes.len() != roster.len() {
            return Err(ValidationError::CountMismatch {
                names: roster.len(),
                outcomes: outcomes.len(),
            });
        }

        let ladder = generate_ladder(height, width, source);
        let board = make_result_board(&ladder, &roster, &outcomes)?;
        log::info!(
            "game ready: {} participants, height {}",
            roster.len(),
            height
        );
        Ok(Self {
            roster,
            outcomes,
            ladder,
            board,
        })
    }

    /// Flip a fair coin per position: reproducible under `seeds`, fresh
    /// entropy otherwise.
    pub fn draw(
        roster: Roster,
        outcomes: Vec<Outcome>,
        height: Height,
        seeds: Option<&RngHierarchy>,
    ) -> Result<Self, ValidationError> {
        match seeds {
            Some(seeds) => {
                log::debug!("seeded generation (master seed {})", seeds.master_seed());
                let mut rungs = seeds.rungs_for(&roster);
                Self::new(roster, outcomes, height, &mut rungs)
            }
            None => {
                let mut rungs = RandomRungs::new(StdRng::from_entropy());
                Self::new(roster, outcomes, height, &mut rungs)
            }
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    pub fn ladder(&self) -> &Ladder {
        &self.ladder
    }

    pub fn board(&self) -> &ResultBoard {
        &self.board
    }

    pub fn into_board(self) -> ResultBoard {
        self.board
    }
}
