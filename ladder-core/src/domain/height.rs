//! Height: number of rung rows in a ladder.

use serde::Serialize;
use std::fmt;

use super::error::ValidationError;

/// Ladder height. Always positive; the upper bound comes from
/// `GameConfig::max_height` rather than from the type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Height(usize);

impl Height {
    pub fn new(value: usize) -> Result<Self, ValidationError> {
        if value == 0 {
            return Err(ValidationError::HeightNotPositive { value: 0 });
        }
        Ok(Self(value))
    }

    /// Parse a raw height string and enforce the configured ceiling.
    pub fn parse(raw: &str, max: usize) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| ValidationError::HeightNotNumber {
                raw: trimmed.to_string(),
            })?;
        if value <= 0 {
            return Err(ValidationError::HeightNotPositive { value });
        }
        let value = usize::try_from(value).map_err(|_| ValidationError::HeightTooTall {
            value: usize::MAX,
            max,
        })?;
        if value > max {
            return Err(ValidationError::HeightTooTall { value, max });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> usize {
        self.0
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
