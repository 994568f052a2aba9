//! Core type definitions for the social graph

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::store::GraphError;

/// Unique, stable identity key for a user (e.g., "helena42")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct Username(String);

impl Username {
    pub fn new(username: impl Into<String>) -> Self {
        Username(username.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Username {
    fn from(s: String) -> Self {
        Username(s)
    }
}

impl From<&str> for Username {
    fn from(s: &str) -> Self {
        Username(s.to_string())
    }
}

/// Strength of a connection
///
/// The domain is open to future values; comparisons treat it as a totally
/// ordered numeric strength, higher sorting first in stories order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct Weight(i64);

impl Weight {
    /// Mutual/common friend
    pub const COMMON_FRIEND: Weight = Weight(1);

    /// Best friend
    pub const BEST_FRIEND: Weight = Weight(2);

    pub fn new(weight: i64) -> Self {
        Weight(weight)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Weight {
    fn from(weight: i64) -> Self {
        Weight(weight)
    }
}

impl FromStr for Weight {
    type Err = GraphError;

    /// Parse the raw text weight field from an ingestion feed (base-10)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(Weight)
            .map_err(|_| GraphError::InvalidWeight(s.to_string()))
    }
}
