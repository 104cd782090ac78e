//! Result board: who landed where.
//!
//! Built once from a ladder, the roster and the outcomes, then only read.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::collections::HashMap;

use crate::domain::{Name, NotFoundError, Outcome, Roster, ValidationError};
use crate::ladder::Ladder;

/// Mapping from each participant to the outcome at the bottom of their path.
///
/// Iterates (and serializes) in roster order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultBoard {
    entries: Vec<(Name, Outcome)>,
    index: HashMap<Name, usize>,
}

impl ResultBoard {
    /// Outcome for one participant.
    pub fn get(&self, name: &str) -> Result<&Outcome, NotFoundError> {
        self.index
            .get(name)
            .map(|&i| &self.entries[i].1)
            .ok_or_else(|| NotFoundError {
                name: name.to_string(),
            })
    }

    /// Answer a parsed query against the board.
    pub fn answer(&self, query: &Query) -> Result<Answer<'_>, NotFoundError> {
        match query {
            Query::All => Ok(Answer::All(self)),
            Query::Participant(name) => self.get(name.as_str()).map(Answer::One),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Name, &Outcome)> {
        self.entries.iter().map(|(n, o)| (n, o))
    }
}

impl Serialize for ResultBoard {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, outcome) in &self.entries {
            map.serialize_entry(name, outcome)?;
        }
        map.end()
    }
}

/// Bind `names[i]` to `outcomes[resolve(ladder, i)]` for every participant.
pub fn make_result_board(
    ladder: &Ladder,
    roster: &Roster,
    outcomes: &[Outcome],
) -> Result<ResultBoard, ValidationError> {
    if outcomes.len() != roster.len() {
        return Err(ValidationError::CountMismatch {
            names: roster.len(),
            outcomes: outcomes.len(),
        });
    }
    if roster.len() != ladder.verticals() {
        return Err(ValidationError::LadderMismatch {
            verticals: ladder.verticals(),
            participants: roster.len(),
        });
    }

    let mut entries = Vec::with_capacity(roster.len());
    let mut index = HashMap::with_capacity(roster.len());
    for (start, name) in roster.iter().enumerate() {
        let landing = ladder.resolve(start)?;
        log::debug!("{name}: vertical {start} -> {landing}");
        index.insert(name.clone(), entries.len());
        entries.push((name.clone(), outcomes[landing].clone()));
    }
    Ok(ResultBoard { entries, index })
}

/// A lookup request typed by the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// The reserved keyword: show everyone.
    All,
    Participant(Name),
}

impl Query {
    /// The keyword wins over a participant who happens to share its spelling.
    pub fn parse(raw: &str, all_keyword: &str) -> Result<Self, ValidationError> {
        let name = Name::new(raw)?;
        if name.as_str() == all_keyword {
            return Ok(Self::All);
        }
        Ok(Self::Participant(name))
    }
}

/// What a query resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer<'a> {
    All(&'a ResultBoard),
    One(&'a Outcome),
}
