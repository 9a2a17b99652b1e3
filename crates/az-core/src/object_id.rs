//! Object ID type identifying a data point in the host's object tree

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for unparsable object IDs
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ObjectIdError {
    #[error("object id must be an integer, got '{0}'")]
    NotAnInteger(String),
}

/// Identifier of a variable in the host's object tree
///
/// IDs `0` (root category) and `1` (none selected) are sentinels and never
/// refer to an actual data point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(i64);

impl ObjectId {
    /// The root category sentinel
    pub const ROOT: ObjectId = ObjectId(0);

    /// The "nothing selected" sentinel
    pub const NONE: ObjectId = ObjectId(1);

    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> i64 {
        self.0
    }

    /// Whether this ID can point at a real data point (id > 1)
    pub const fn is_assignable(self) -> bool {
        self.0 > Self::NONE.0
    }
}

impl From<i64> for ObjectId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl FromStr for ObjectId {
    type Err = ObjectIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| ObjectIdError::NotAnInteger(s.to_string()))
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
