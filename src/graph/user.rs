//! User (node) implementation for the social graph

use super::edge::Edge;
use super::types::{Username, Weight};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// A registered identity in the social graph
///
/// Holds the user's outgoing connections (`following`, keyed by followee
/// username) and a reverse index of incoming connections (`followers`).
/// The reverse index is mutated only as a side effect of adding a forward
/// connection, so for every edge A -> B, B's followers contains A.
///
/// Traversal scratch state lives in the path finder, not on the node, so
/// users are immutable once ingestion completes and independent queries
/// cannot leak state into each other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Display name; first registration wins
    name: String,

    /// Unique identity key
    username: Username,

    /// Outgoing connections, keyed by followee username.
    /// Insertion-order iteration keeps query output deterministic for a
    /// given ingestion sequence.
    following: IndexMap<Username, Edge>,

    /// Reverse index: usernames of users following this one
    followers: IndexSet<Username>,
}

impl User {
    /// Create a new user with no connections
    pub fn new(name: impl Into<String>, username: impl Into<Username>) -> Self {
        User {
            name: name.into(),
            username: username.into(),
            following: IndexMap::new(),
            followers: IndexSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Add or update the outgoing connection to `destiny`
    ///
    /// Idempotent on the destination: a repeated call overwrites the weight
    /// in place instead of creating a duplicate edge. Returns the previous
    /// weight when there was one.
    pub(crate) fn follow(&mut self, destiny: Username, weight: Weight) -> Option<Weight> {
        match self.following.get_mut(&destiny) {
            Some(edge) => Some(edge.set_weight(weight)),
            None => {
                self.following.insert(destiny.clone(), Edge::new(weight, destiny));
                None
            }
        }
    }

    /// Record `origin` in the reverse index; returns false if already present
    pub(crate) fn add_follower(&mut self, origin: Username) -> bool {
        self.followers.insert(origin)
    }

    /// Number of users this user follows
    pub fn following_count(&self) -> usize {
        self.following.len()
    }

    /// Number of users following this user
    pub fn followers_count(&self) -> usize {
        self.followers.len()
    }

    /// The outgoing edge to `username`, if this user follows them
    pub fn get_following(&self, username: &Username) -> Option<&Edge> {
        self.following.get(username)
    }

    pub fn is_followed_by(&self, username: &Username) -> bool {
        self.followers.contains(username)
    }

    /// Outgoing edges, in insertion order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.following.values()
    }

    /// Usernames following this user, in insertion order
    pub fn followers(&self) -> impl Iterator<Item = &Username> {
        self.followers.iter()
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.username == other.username
    }
}

impl Eq for User {}

impl std::hash::Hash for User {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.username.hash(state);
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.username)
    }
}
