use sociograph::{GraphError, SocialGraph, Username, Weight};

fn u(username: &str) -> Username {
    Username::from(username)
}

/// helena42 -> ana_clara30 -> isadora45, plus a few bystanders
fn sample_graph() -> SocialGraph {
    let mut graph = SocialGraph::new();
    for (name, username) in [
        ("Helena", "helena42"),
        ("Ana Clara", "ana_clara30"),
        ("Isadora", "isadora45"),
        ("Miguel", "miguel1"),
        ("Isis", "isis3"),
    ] {
        graph.ensure_user(name, username);
    }

    graph.ensure_connection(&u("helena42"), &u("ana_clara30"), Weight::BEST_FRIEND);
    graph.ensure_connection(&u("ana_clara30"), &u("isadora45"), Weight::COMMON_FRIEND);
    graph.ensure_connection(&u("helena42"), &u("miguel1"), Weight::COMMON_FRIEND);
    graph.ensure_connection(&u("miguel1"), &u("isis3"), Weight::COMMON_FRIEND);
    graph.ensure_connection(&u("isis3"), &u("isadora45"), Weight::COMMON_FRIEND);
    graph
}

#[test]
fn connection_is_symmetric() {
    let graph = sample_graph();

    // Forward side visible in the stories-eligible set
    let stories = graph.ranked_following(&u("helena42")).unwrap();
    assert!(stories.contains(&u("ana_clara30")));

    // Reverse index has the follower
    let ana = graph.get_user(&u("ana_clara30")).unwrap();
    assert!(ana.is_followed_by(&u("helena42")));
}

#[test]
fn ensure_user_is_idempotent() {
    let mut graph = SocialGraph::new();
    graph.ensure_user("Helena", "helena42");
    graph.ensure_user("Helena Again", "helena42");

    assert_eq!(graph.user_count(), 1);
    assert_eq!(graph.get_user(&u("helena42")).unwrap().name(), "Helena");
}

#[test]
fn ensure_connection_is_idempotent_with_latest_weight() {
    let mut graph = SocialGraph::new();
    graph.ensure_user("Helena", "helena42");
    graph.ensure_user("Miguel", "miguel1");

    graph.ensure_connection(&u("helena42"), &u("miguel1"), Weight::COMMON_FRIEND);
    graph.ensure_connection(&u("helena42"), &u("miguel1"), Weight::BEST_FRIEND);

    assert_eq!(graph.following_count(&u("helena42")).unwrap(), 1);
    assert_eq!(graph.followers_count(&u("miguel1")).unwrap(), 1);

    let edge = graph
        .get_user(&u("helena42"))
        .unwrap()
        .get_following(&u("miguel1"))
        .unwrap();
    assert_eq!(edge.weight(), Weight::BEST_FRIEND);
}

#[test]
fn connection_to_unknown_user_is_dropped_without_error() {
    let mut graph = SocialGraph::new();
    graph.ensure_user("Helena", "helena42");

    graph.ensure_connection(&u("helena42"), &u("nobody"), Weight::BEST_FRIEND);

    assert_eq!(graph.following_count(&u("helena42")).unwrap(), 0);
    assert!(!graph.contains_user(&u("nobody")));
}

#[test]
fn counts_match_feed_sizes() {
    let mut graph = SocialGraph::new();
    graph.ensure_user("Helena", "helena42");

    for i in 0..18 {
        let username = format!("follower{i}");
        graph.ensure_user(username.clone(), username.clone());
        graph.ensure_connection(&username.into(), &u("helena42"), Weight::COMMON_FRIEND);
    }
    for i in 0..16 {
        let username = format!("followee{i}");
        graph.ensure_user(username.clone(), username.clone());
        graph.ensure_connection(&u("helena42"), &username.into(), Weight::COMMON_FRIEND);
    }

    assert_eq!(graph.followers_count(&u("helena42")).unwrap(), 18);
    assert_eq!(graph.following_count(&u("helena42")).unwrap(), 16);
}

#[test]
fn stories_order_breaks_weight_ties_alphabetically() {
    let mut graph = SocialGraph::new();
    for username in ["helena42", "pietro33", "ana_julia22", "alice43", "caua11"] {
        graph.ensure_user(username, username);
    }

    graph.ensure_connection(&u("helena42"), &u("pietro33"), Weight::BEST_FRIEND);
    graph.ensure_connection(&u("helena42"), &u("ana_julia22"), Weight::BEST_FRIEND);
    graph.ensure_connection(&u("helena42"), &u("caua11"), Weight::COMMON_FRIEND);
    graph.ensure_connection(&u("helena42"), &u("alice43"), Weight::COMMON_FRIEND);

    let stories = graph.ranked_following(&u("helena42")).unwrap();
    assert_eq!(
        stories,
        vec![
            u("ana_julia22"),
            u("pietro33"),
            u("alice43"),
            u("caua11"),
        ]
    );
}

#[test]
fn top_influencers_returns_exactly_k_descending() {
    let mut graph = SocialGraph::new();
    for i in 0..8 {
        let username = format!("user{i}");
        graph.ensure_user(username.clone(), username);
    }
    // user{i} is followed by users 0..i, giving distinct follower counts
    for i in 0..8 {
        for j in 0..i {
            graph.ensure_connection(
                &format!("user{j}").into(),
                &format!("user{i}").into(),
                Weight::COMMON_FRIEND,
            );
        }
    }

    let top = graph.top_influencers(5);
    assert_eq!(top.len(), 5);
    assert_eq!(top[0], (u("user7"), 7));
    for pair in top.windows(2) {
        assert!(pair[0].1 >= pair[1].1);
    }
}

#[test]
fn top_influencers_with_oversized_k_returns_everyone() {
    let graph = sample_graph();
    let all = graph.top_influencers(50);
    assert_eq!(all.len(), graph.user_count());
}

#[test]
fn shortest_path_end_to_end() {
    let graph = sample_graph();

    // Two-hop route through ana_clara30 beats the three-hop route through
    // miguel1 and isis3
    let path = graph
        .shortest_path(&u("helena42"), &u("isadora45"))
        .unwrap();
    assert_eq!(path.to_string(), "helena42 -> ana_clara30 -> isadora45");
    assert_eq!(path.hop_count(), 2);
}

#[test]
fn shortest_path_prefers_fewer_hops() {
    let mut graph = SocialGraph::new();
    for username in ["a", "b", "c", "d", "z"] {
        graph.ensure_user(username, username);
    }
    // Long chain a -> b -> c -> d -> z, direct edge a -> z
    graph.ensure_connection(&u("a"), &u("b"), Weight::BEST_FRIEND);
    graph.ensure_connection(&u("b"), &u("c"), Weight::BEST_FRIEND);
    graph.ensure_connection(&u("c"), &u("d"), Weight::BEST_FRIEND);
    graph.ensure_connection(&u("d"), &u("z"), Weight::BEST_FRIEND);
    graph.ensure_connection(&u("a"), &u("z"), Weight::COMMON_FRIEND);

    let path = graph.shortest_path(&u("a"), &u("z")).unwrap();
    assert_eq!(path.hop_count(), 1);
    assert_eq!(path.to_string(), "a -> z");
}

#[test]
fn shortest_path_unreachable_is_none() {
    let mut graph = SocialGraph::new();
    graph.ensure_user("Helena", "helena42");
    graph.ensure_user("Miguel", "miguel1");

    assert!(graph.shortest_path(&u("helena42"), &u("miguel1")).is_none());
}

#[test]
fn shortest_path_unknown_user_is_none() {
    let graph = sample_graph();
    assert!(graph.shortest_path(&u("helena42"), &u("nobody")).is_none());
    assert!(graph.shortest_path(&u("nobody"), &u("helena42")).is_none());
}

#[test]
fn count_queries_on_unknown_user_fail_explicitly() {
    let graph = sample_graph();

    assert_eq!(
        graph.following_count(&u("nobody")),
        Err(GraphError::UserNotFound(u("nobody")))
    );
    assert_eq!(
        graph.followers_count(&u("nobody")),
        Err(GraphError::UserNotFound(u("nobody")))
    );
}
