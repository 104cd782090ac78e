//! Width: number of gaps between verticals.

use serde::Serialize;
use std::fmt;

use super::error::ValidationError;

/// Ladder width: the number of gaps between adjacent verticals,
/// one less than the number of participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Width(usize);

impl Width {
    pub const MIN: usize = 1;
    pub const MAX: usize = 99;

    pub fn new(value: usize) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::WidthOutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(value))
    }

    /// Width of a ladder with one vertical per participant.
    pub fn for_participants(count: usize) -> Result<Self, ValidationError> {
        Self::new(count.saturating_sub(1))
    }

    pub fn value(self) -> usize {
        self.0
    }

    /// Number of verticals (participants) this width spans.
    pub fn verticals(self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
