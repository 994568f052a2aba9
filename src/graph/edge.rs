//! Edge implementation for the following graph

use super::types::{Username, Weight};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A directed, weighted "follows" relationship
///
/// The edge is owned by the user on the source side; the destination is
/// identified by its username key, never an owning pointer, so users stay
/// exclusively owned by the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Connection strength (higher = closer friend)
    weight: Weight,

    /// Username of the followed user (edge goes TO this user)
    destiny: Username,
}

impl Edge {
    /// Create a new directed edge
    pub fn new(weight: Weight, destiny: impl Into<Username>) -> Self {
        Edge {
            weight,
            destiny: destiny.into(),
        }
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Overwrite the weight in place, returning the previous value
    pub fn set_weight(&mut self, weight: Weight) -> Weight {
        std::mem::replace(&mut self.weight, weight)
    }

    pub fn destiny(&self) -> &Username {
        &self.destiny
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.destiny, self.weight)
    }
}
