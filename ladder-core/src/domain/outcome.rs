//! Outcome slots at the bottom of the ladder.

use serde::Serialize;
use std::fmt;

use super::error::ValidationError;

/// The value written under a vertical at the bottom of the ladder.
///
/// Outcomes need not be distinct: two slots may both read "lose".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Outcome(String);

impl Outcome {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::BlankOutcome);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Parse a delimited list and check it lines up one-to-one with the roster.
    pub fn parse_list(
        raw: &str,
        delimiter: char,
        participants: usize,
    ) -> Result<Vec<Self>, ValidationError> {
        let outcomes = raw
            .split(delimiter)
            .map(Self::new)
            .collect::<Result<Vec<_>, _>>()?;
        if outcomes.len() != participants {
            return Err(ValidationError::CountMismatch {
                names: participants,
                outcomes: outcomes.len(),
            });
        }
        Ok(outcomes)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Outcome {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_must_match_participants() {
        let outcomes = Outcome::parse_list("꽝, 5000,꽝,3000", ',', 4).unwrap();
        assert_eq!(outcomes[1].as_str(), "5000");
        assert_eq!(outcomes[0], outcomes[2]);

        assert_eq!(
            Outcome::parse_list("1,2", ',', 3),
            Err(ValidationError::CountMismatch { names: 3, outcomes: 2 })
        );
    }

    #[test]
    fn blank_outcome_is_rejected() {
        assert_eq!(Outcome::new(" "), Err(ValidationError::BlankOutcome));
        assert!(Outcome::parse_list("1,,3", ',', 3).is_err());
    }
}
