//! ISO 3166 alpha-3 country codes

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// Rejected country code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid ISO code `{0}`: expected three ASCII letters")]
pub struct InvalidIso(pub String);

/// A three-letter country code, always stored upper case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Iso(String);

impl Iso {
    /// For compile-time constants known to be valid codes.
    pub(crate) fn from_static(code: &'static str) -> Self {
        debug_assert!(code.parse::<Iso>().is_ok(), "invalid ISO constant {code}");
        Iso(code.to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First two letters of the code, used by the borrower link.
    pub fn prefix(&self) -> &str {
        &self.0[..2]
    }
}

impl FromStr for Iso {
    type Err = InvalidIso;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.len() == 3 && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(Iso(trimmed.to_ascii_uppercase()))
        } else {
            Err(InvalidIso(s.to_string()))
        }
    }
}

impl TryFrom<String> for Iso {
    type Error = InvalidIso;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Iso> for String {
    fn from(iso: Iso) -> Self {
        iso.0
    }
}

impl Display for Iso {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
