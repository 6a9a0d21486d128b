//! Card identity used to match rows between inventory and price exports.

use std::fmt;

use crate::error::KeyError;

/// Normalized `(name, set, number, condition)` identity of a card listing.
///
/// Name, set and condition are trimmed and lowercased. The collector number is
/// only trimmed, so `"007"` and `"123a"` stay distinct from `"7"` and `"123"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardKey {
    pub name: String,
    pub set_name: String,
    pub number: String,
    pub condition: String,
}

impl CardKey {
    /// Builds a key from raw field values, folding case and whitespace
    pub fn new(name: &str, set_name: &str, number: &str, condition: &str) -> Self {
        Self {
            name: fold(name),
            set_name: fold(set_name),
            number: number.trim().to_string(),
            condition: fold(condition),
        }
    }

    /// Builds a key from cells that may be absent.
    ///
    /// An empty cell is a valid (empty) value; only a missing cell is an error.
    pub fn from_fields(
        name: Option<&str>,
        set_name: Option<&str>,
        number: Option<&str>,
        condition: Option<&str>,
    ) -> Result<Self, KeyError> {
        Ok(Self::new(
            name.ok_or(KeyError::MissingField("name"))?,
            set_name.ok_or(KeyError::MissingField("set name"))?,
            number.ok_or(KeyError::MissingField("number"))?,
            condition.ok_or(KeyError::MissingField("condition"))?,
        ))
    }
}

impl fmt::Display for CardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] #{} ({})",
            self.name, self.set_name, self.number, self.condition
        )
    }
}

fn fold(value: &str) -> String {
    value.trim().to_lowercase()
}

#[cfg(test)]
#[path = "card_key_tests.rs"]
mod tests;
