//! Social graph data model
//!
//! Implements the directed, weighted following graph:
//! - Users keyed by a unique, stable username
//! - Directed edges with an integer connection strength
//! - A reverse follower index kept consistent with the forward edges
//! - Idempotent ingestion (ensure-user / ensure-connection), no deletion

pub mod edge;
pub mod store;
pub mod types;
pub mod user;

// Re-export main types
pub use edge::Edge;
pub use store::{GraphError, GraphResult, SocialGraph};
pub use types::{Username, Weight};
pub use user::User;
