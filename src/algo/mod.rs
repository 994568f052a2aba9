//! Graph algorithms
//!
//! The two nontrivial query components: the ranking engine (merge sort
//! with explicit comparison policies) and the path finder (breadth-first
//! search with parent-pointer reconstruction). Both operate read-only on
//! a [`SocialGraph`](crate::graph::SocialGraph).

pub mod pathfinding;
pub mod ranking;

// Re-export algorithms
pub use pathfinding::{shortest_path, Path};
pub use ranking::{rank_influencers, rank_stories};
