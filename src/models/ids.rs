//! Strongly-typed identifier for expense records
//!
//! Ids are derived from the creation time (milliseconds since the Unix
//! epoch) so they sort in insertion order. Uniqueness within a collection is
//! enforced at assignment time: a fresh id that collides with or precedes an
//! existing one is bumped past the current maximum.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier for an expense record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(i64);

impl ExpenseId {
    /// Create an id from a creation timestamp
    pub fn from_datetime(at: DateTime<Utc>) -> Self {
        Self(at.timestamp_millis())
    }

    /// Create an id from raw milliseconds since the Unix epoch
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Get the raw millisecond value
    pub const fn as_millis(&self) -> i64 {
        self.0
    }

    /// The next id after this one
    ///
    /// Used to keep ids strictly increasing when two records are created
    /// within the same millisecond.
    pub const fn succ(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ExpenseId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}
