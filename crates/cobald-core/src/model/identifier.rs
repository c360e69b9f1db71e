use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Token identifier within one sentence
///
/// Three kinds share one ordering:
/// - `Integer(n)`: an ordinary word position, `n >= 1`
/// - `Decimal { base, minor }`: an empty node attached after word `base`
///   (`base` may be 0 for a node before the first word), `minor >= 1`
/// - `Range { low, high }`: a multiword token spanning words `low..=high`,
///   `1 <= low < high`
///
/// `Range(low, _)` sorts immediately before `Integer(low)`; `Decimal(base, _)`
/// sorts after `Integer(base)` and before `Integer(base + 1)`, by ascending minor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Identifier {
    Integer(u32),
    Decimal { base: u32, minor: u32 },
    Range { low: u32, high: u32 },
}

/// Textual identifier did not match any of the three forms
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("malformed token identifier: '{0}'")]
pub struct ParseIdentifierError(pub String);

impl Identifier {
    fn sort_key(&self) -> (u32, u8, u32) {
        match *self {
            Identifier::Range { low, high } => (low, 0, high),
            Identifier::Integer(n) => (n, 1, 0),
            Identifier::Decimal { base, minor } => (base, 2, minor),
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Identifier::Integer(_))
    }

    pub fn is_decimal(&self) -> bool {
        matches!(self, Identifier::Decimal { .. })
    }

    pub fn is_range(&self) -> bool {
        matches!(self, Identifier::Range { .. })
    }

    /// The word position, for `Integer` identifiers only
    pub fn as_integer(&self) -> Option<u32> {
        match *self {
            Identifier::Integer(n) => Some(n),
            _ => None,
        }
    }

    /// Identifier after a new integer token is inserted at `position`
    ///
    /// Integers and decimal bases `>= position` move up by one. Range bounds
    /// move independently, so a span that strictly contains `position` grows.
    /// `None` if a shifted number would not fit in a `u32`.
    pub fn shifted_for_insert(self, position: u32) -> Option<Identifier> {
        let bump = |n: u32| if n >= position { n.checked_add(1) } else { Some(n) };
        Some(match self {
            Identifier::Integer(n) => Identifier::Integer(bump(n)?),
            Identifier::Decimal { base, minor } => Identifier::Decimal {
                base: bump(base)?,
                minor,
            },
            Identifier::Range { low, high } => Identifier::Range {
                low: bump(low)?,
                high: bump(high)?,
            },
        })
    }
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Integer(n) => write!(f, "{}", n),
            Identifier::Decimal { base, minor } => write!(f, "{}.{}", base, minor),
            Identifier::Range { low, high } => write!(f, "{}-{}", low, high),
        }
    }
}

/// Parse a canonical unsigned number: ASCII digits, no sign, no leading zero
pub(crate) fn parse_number(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if s.len() > 1 && s.starts_with('0') {
        return None;
    }
    s.parse().ok()
}

impl FromStr for Identifier {
    type Err = ParseIdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseIdentifierError(s.to_string());

        if let Some((low, high)) = s.split_once('-') {
            let low = parse_number(low).ok_or_else(malformed)?;
            let high = parse_number(high).ok_or_else(malformed)?;
            if low == 0 || low >= high {
                return Err(malformed());
            }
            return Ok(Identifier::Range { low, high });
        }

        if let Some((base, minor)) = s.split_once('.') {
            let base = parse_number(base).ok_or_else(malformed)?;
            let minor = parse_number(minor).ok_or_else(malformed)?;
            if minor == 0 {
                return Err(malformed());
            }
            return Ok(Identifier::Decimal { base, minor });
        }

        match parse_number(s) {
            Some(n) if n >= 1 => Ok(Identifier::Integer(n)),
            _ => Err(malformed()),
        }
    }
}

impl TryFrom<String> for Identifier {
    type Error = ParseIdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Identifier> for String {
    fn from(id: Identifier) -> Self {
        id.to_string()
    }
}
