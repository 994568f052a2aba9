//! Shortest-path discovery over the directed following graph

use crate::graph::{SocialGraph, Username};
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::collections::VecDeque;
use std::fmt;

/// A directed path through the following graph, origin to destination
/// inclusive
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Path {
    hops: Vec<Username>,
}

impl Path {
    /// Usernames along the path, origin first
    pub fn hops(&self) -> &[Username] {
        &self.hops
    }

    /// Number of edges traversed
    pub fn hop_count(&self) -> usize {
        self.hops.len().saturating_sub(1)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, hop) in self.hops.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{hop}")?;
        }
        Ok(())
    }
}

/// Breadth-first search for the minimum-hop path origin -> destiny
///
/// Traversal follows `following` edges only, in each map's iteration
/// order, and stops as soon as the destination is first discovered; BFS
/// processes users in nondecreasing distance order, so the parent chain
/// is a shortest path. Visitation state is a per-call map, never stored
/// on the nodes, so nothing leaks between queries and concurrent reads
/// are safe.
///
/// Returns `None` when either endpoint is unknown or the destination is
/// unreachable from the origin.
pub fn shortest_path(graph: &SocialGraph, origin: &Username, destiny: &Username) -> Option<Path> {
    let root = graph.get_user(origin)?;
    graph.get_user(destiny)?;

    if origin == destiny {
        return Some(Path {
            hops: vec![origin.clone()],
        });
    }

    // username -> parent username (None for the origin)
    let mut parents: FxHashMap<&Username, Option<&Username>> = FxHashMap::default();
    parents.insert(root.username(), None);

    let mut queue = VecDeque::new();
    queue.push_back(root);

    let mut found = false;
    'search: while let Some(user) = queue.pop_front() {
        for edge in user.edges() {
            if parents.contains_key(edge.destiny()) {
                continue;
            }
            // Endpoint existence is guaranteed by ensure_connection
            let Some(adjacent) = graph.get_user(edge.destiny()) else {
                continue;
            };
            parents.insert(adjacent.username(), Some(user.username()));
            queue.push_back(adjacent);

            if adjacent.username() == destiny {
                found = true;
                break 'search;
            }
        }
    }

    if !found {
        return None;
    }

    // Walk parent pointers backward from the destination
    let mut hops = Vec::new();
    let mut current = Some(destiny);
    while let Some(username) = current {
        hops.push(username.clone());
        current = parents.get(username).copied().flatten();
    }
    hops.reverse();

    Some(Path { hops })
}
