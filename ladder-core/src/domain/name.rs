//! Participant names and the validated roster.

use serde::Serialize;
use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;

use super::error::ValidationError;
use super::width::Width;

/// A participant name: trimmed, never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::BlankName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Name {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered, duplicate-free list of participants.
///
/// Position in the roster is the vertical each participant starts on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Roster(Vec<Name>);

impl Roster {
    pub fn new(names: Vec<Name>) -> Result<Self, ValidationError> {
        let mut seen = HashSet::with_capacity(names.len());
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(ValidationError::DuplicateName {
                    name: name.to_string(),
                });
            }
        }
        Ok(Self(names))
    }

    /// Parse a delimited list such as `"pobi, honux,crong"`.
    pub fn parse(raw: &str, delimiter: char) -> Result<Self, ValidationError> {
        let names = raw
            .split(delimiter)
            .map(Name::new)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(names)
    }

    /// Ladder width needed to seat every participant.
    pub fn width(&self) -> Result<Width, ValidationError> {
        Width::for_participants(self.0.len())
    }

    pub fn names(&self) -> &[Name] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Name> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Name;
    type IntoIter = std::slice::Iter<'a, Name>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
