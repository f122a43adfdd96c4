//! # Vehicle Identification Number
//!
//! A [`Vin`] can only be built through [`Vin::parse`], which trims and
//! uppercases the raw input and enforces the 17 character length. No checksum
//! or character-set validation is performed.

use std::fmt;
use std::str::FromStr;

use crate::error::LookupError;

/// Required length of a VIN, in characters.
pub const VIN_LENGTH: usize = 17;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Vin(String);

impl Vin {
    /// Normalizes `raw` and checks its length.
    ///
    /// Returns [`LookupError::InvalidLength`] when the trimmed, uppercased input
    /// is not exactly [`VIN_LENGTH`] characters long.
    pub fn parse(raw: &str) -> Result<Self, LookupError> {
        let normalized: String = raw.trim().to_uppercase();

        if normalized.chars().count() != VIN_LENGTH {
            return Err(LookupError::InvalidLength);
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Vin {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Vin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Vin {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
