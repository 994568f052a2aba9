//! Ranking engine: a generic merge sort with two comparison policies
//!
//! The output order is a correctness contract for callers, so the
//! comparators are explicit here rather than delegated to the standard
//! library sort:
//! - stories mode ranks one user's followees by weight descending, ties
//!   broken by ascending username
//! - top mode ranks all users by follower count descending, with no
//!   defined tie-break (equal counts emerge in whatever order the merge
//!   produces from graph enumeration order)

use crate::graph::{Edge, SocialGraph, User, Username};

/// Recursive divide-and-conquer merge sort
///
/// `prefer_left` returns true when the left head must be taken before the
/// right head. Recursion depth is log2(n), safe for any realistic graph.
pub(crate) fn merge_sort<T, F>(items: Vec<T>, prefer_left: &F) -> Vec<T>
where
    F: Fn(&T, &T) -> bool,
{
    if items.len() <= 1 {
        return items;
    }

    let middle = items.len() / 2;
    let mut left = items;
    let right = left.split_off(middle);

    let left = merge_sort(left, prefer_left);
    let right = merge_sort(right, prefer_left);
    merge(left, right, prefer_left)
}

/// Merge two sorted halves by repeatedly taking the preferred head
fn merge<T, F>(left: Vec<T>, right: Vec<T>, prefer_left: &F) -> Vec<T>
where
    F: Fn(&T, &T) -> bool,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => prefer_left(l, r),
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        if let Some(item) = next {
            merged.push(item);
        }
    }

    merged
}

/// Stories order for one user: followee usernames, best friends first,
/// ties broken alphabetically
pub fn rank_stories(user: &User) -> Vec<Username> {
    let edges: Vec<&Edge> = user.edges().collect();
    let ranked = merge_sort(edges, &|left: &&Edge, right: &&Edge| {
        left.weight() > right.weight()
            || (left.weight() == right.weight() && left.destiny() < right.destiny())
    });
    ranked.into_iter().map(|edge| edge.destiny().clone()).collect()
}

/// The `k` most-followed users as (username, follower count) pairs
///
/// Count descending only; equal counts keep the order the merge produces.
/// A `k` larger than the population returns every user.
pub fn rank_influencers(graph: &SocialGraph, k: usize) -> Vec<(Username, usize)> {
    let users: Vec<(Username, usize)> = graph
        .users()
        .map(|user| (user.username().clone(), user.followers_count()))
        .collect();

    let mut ranked = merge_sort(users, &|left: &(Username, usize), right: &(Username, usize)| {
        left.1 > right.1
    });
    ranked.truncate(k);
    ranked
}
