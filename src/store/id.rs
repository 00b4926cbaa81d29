//! Path identifier parsing.
//!
//! Path segments are parsed with integer-prefix semantics: leading
//! whitespace is skipped, an optional sign is accepted, and the longest run
//! of leading decimal digits is taken. `"2abc"` is `2`, `"1.9"` is `1`.
//! A `0x`/`0X` prefix switches to hexadecimal digits, so `"0x2"` is `2`.
//! A segment without leading digits is not a number and matches no record.

use serde::{Deserialize, Deserializer};

/// A resource id taken from a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceId(Option<u64>);

impl ResourceId {
    /// Parse a raw path segment.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim_start();
        let (negative, unsigned) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let (radix, digits) = match unsigned.get(..2) {
            Some("0x") | Some("0X") => (16, &unsigned[2..]),
            _ => (10, unsigned),
        };

        let digits_len = digits
            .chars()
            .take_while(|c| c.is_digit(radix))
            .count();
        if digits_len == 0 {
            return Self(None);
        }

        let value = u64::from_str_radix(&digits[..digits_len], radix).ok();
        // Negative ids never exist; `-0` collapses to zero which is never issued either.
        match value {
            Some(0) => Self(Some(0)),
            Some(_) if negative => Self(None),
            other => Self(other),
        }
    }

    /// Whether this id refers to the record with the given id.
    pub fn matches(&self, id: u64) -> bool {
        self.0 == Some(id)
    }

    /// The parsed value, or `None` when the segment was not a number.
    pub fn value(&self) -> Option<u64> {
        self.0
    }
}

impl From<u64> for ResourceId {
    fn from(id: u64) -> Self {
        Self(Some(id))
    }
}

impl<'de> Deserialize<'de> for ResourceId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

impl std::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(id) => write!(f, "{}", id),
            None => write!(f, "NaN"),
        }
    }
}
