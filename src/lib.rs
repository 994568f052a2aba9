//! Sociograph
//!
//! An in-memory engine for directed, weighted social-following graphs.
//! The graph is built once through idempotent ingestion calls, then
//! answers read-only structural queries:
//!
//! - follower / following counts
//! - "stories order": a user's followees ranked best friend first, ties
//!   broken alphabetically
//! - global influencer ranking by follower count
//! - minimum-hop shortest path between two users
//!
//! # Example
//!
//! ```rust
//! use sociograph::{SocialGraph, Weight};
//!
//! let mut graph = SocialGraph::new();
//! graph.ensure_user("Helena", "helena42");
//! graph.ensure_user("Ana Clara", "ana_clara30");
//! graph.ensure_user("Isadora", "isadora45");
//!
//! graph.ensure_connection(&"helena42".into(), &"ana_clara30".into(), Weight::BEST_FRIEND);
//! graph.ensure_connection(&"ana_clara30".into(), &"isadora45".into(), Weight::COMMON_FRIEND);
//!
//! assert_eq!(graph.following_count(&"helena42".into()).unwrap(), 1);
//! assert_eq!(graph.followers_count(&"isadora45".into()).unwrap(), 1);
//!
//! let path = graph.shortest_path(&"helena42".into(), &"isadora45".into()).unwrap();
//! assert_eq!(path.to_string(), "helena42 -> ana_clara30 -> isadora45");
//! ```

#![warn(clippy::all)]

pub mod algo;
pub mod graph;
pub mod ingest;

// Re-export main types for convenience
pub use algo::{rank_influencers, rank_stories, shortest_path, Path};
pub use graph::{Edge, GraphError, GraphResult, SocialGraph, User, Username, Weight};
pub use ingest::{IngestError, IngestResult};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version() -> &'static str {
    VERSION
}
