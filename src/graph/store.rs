//! The social graph: ownership, ingestion, and query surface

use super::types::{Username, Weight};
use super::user::User;
use crate::algo::pathfinding::{self, Path};
use crate::algo::ranking;
use indexmap::IndexMap;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during graph operations
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GraphError {
    #[error("user {0} not found")]
    UserNotFound(Username),

    #[error("invalid connection weight {0:?}: expected a base-10 integer")]
    InvalidWeight(String),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Directed, weighted social-following graph
///
/// Owns every [`User`] exclusively, keyed by username. Built once through
/// the two ingestion operations ([`ensure_user`](SocialGraph::ensure_user),
/// [`ensure_connection`](SocialGraph::ensure_connection)), then queried
/// read-only; there are no deletion operations.
#[derive(Debug, Clone, Default)]
pub struct SocialGraph {
    /// All registered users, in registration order
    users: IndexMap<Username, User>,
}

impl SocialGraph {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- ingestion ----

    /// Register a user, returning the stored entry
    ///
    /// Idempotent: if the username is already registered this is a no-op
    /// that returns the existing user; the name is not updated (first
    /// write wins).
    pub fn ensure_user(&mut self, name: impl Into<String>, username: impl Into<Username>) -> &User {
        let username = username.into();
        let name = name.into();
        self.users
            .entry(username.clone())
            .or_insert_with(|| User::new(name, username))
    }

    /// Register a connection origin -> destiny with the given weight
    ///
    /// Both endpoints must already be registered; if either is missing the
    /// call silently does nothing (defined behavior, not an error). On
    /// success the forward edge and the reverse follower index mutate
    /// together, and a repeated call with the same endpoints overwrites
    /// the weight in place.
    pub fn ensure_connection(&mut self, origin: &Username, destiny: &Username, weight: Weight) {
        if !self.users.contains_key(origin) || !self.users.contains_key(destiny) {
            debug!(%origin, %destiny, "connection references unknown user, dropped");
            return;
        }

        if let Some(user) = self.users.get_mut(origin) {
            if let Some(previous) = user.follow(destiny.clone(), weight) {
                if previous != weight {
                    debug!(%origin, %destiny, %previous, %weight, "connection weight overwritten");
                }
            }
        }
        if let Some(user) = self.users.get_mut(destiny) {
            user.add_follower(origin.clone());
        }
    }

    // ---- lookups ----

    pub fn get_user(&self, username: &Username) -> Option<&User> {
        self.users.get(username)
    }

    pub fn contains_user(&self, username: &Username) -> bool {
        self.users.contains_key(username)
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// All users, in registration order
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    // ---- simple queries ----

    /// Number of users `username` follows
    pub fn following_count(&self, username: &Username) -> GraphResult<usize> {
        self.get_user(username)
            .map(User::following_count)
            .ok_or_else(|| GraphError::UserNotFound(username.clone()))
    }

    /// Number of users following `username`
    pub fn followers_count(&self, username: &Username) -> GraphResult<usize> {
        self.get_user(username)
            .map(User::followers_count)
            .ok_or_else(|| GraphError::UserNotFound(username.clone()))
    }

    // ---- structural queries ----

    /// Stories order for `username`: followees ranked best friend first,
    /// ties broken by ascending username
    pub fn ranked_following(&self, username: &Username) -> GraphResult<Vec<Username>> {
        let user = self
            .get_user(username)
            .ok_or_else(|| GraphError::UserNotFound(username.clone()))?;
        Ok(ranking::rank_stories(user))
    }

    /// The `k` most-followed users as (username, follower count) pairs,
    /// descending; returns everyone when `k` exceeds the population
    pub fn top_influencers(&self, k: usize) -> Vec<(Username, usize)> {
        ranking::rank_influencers(self, k)
    }

    /// Minimum-hop directed path from `origin` to `destiny`
    ///
    /// `None` when either endpoint is unknown or the destination is
    /// unreachable.
    pub fn shortest_path(&self, origin: &Username, destiny: &Username) -> Option<Path> {
        pathfinding::shortest_path(self, origin, destiny)
    }
}
