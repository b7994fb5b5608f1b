//! Windowed Graph Scenarios
//!
//! Drives the public engine API through the canonical walkthrough:
//! 1. Posts build a clique of edges and the average degree tracks them
//! 2. Advancing the window retires old posts and their vertices
//! 3. Stale and sub-two-tag posts leave the graph untouched
//! 4. Aggregates keep the handshake property under arbitrary mixes

use tagmesh_core::prelude::*;

fn tags(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn row(avg: f64) -> String {
    format!("{avg:.2}")
}

#[test]
fn average_degree_follows_the_window() {
    let mut engine = Engine::new();

    // (t=0, {a,b}) — one edge, both endpoints at degree 1.
    let avg = engine.insert(0, &tags(&["a", "b"])).unwrap();
    assert_eq!(row(avg), "1.00");

    // (t=10, {b,c}) — edges {a-b, b-c}, degrees {a:1, b:2, c:1}.
    let avg = engine.insert(10, &tags(&["b", "c"])).unwrap();
    assert_eq!(row(avg), "1.33");

    // (t=61, {d,e}) — floor becomes 1, the t=0 post expires, edge a-b
    // goes and vertex a with it. Remaining edges {b-c, d-e}.
    let avg = engine.insert(61, &tags(&["d", "e"])).unwrap();
    assert_eq!(row(avg), "1.00");

    let stats = engine.stats();
    assert_eq!(stats.vertex_count, 4);
    assert_eq!(stats.edge_count, 2);
    assert!(!engine.graph().contains_vertex("a"));
    assert!(engine.graph().contains_vertex("b"));

    let mut edges: Vec<(String, String)> = engine
        .graph()
        .edges()
        .into_iter()
        .map(|(u, v)| {
            let (u, v) = if u <= v { (u, v) } else { (v, u) };
            (u.to_string(), v.to_string())
        })
        .collect();
    edges.sort();
    assert_eq!(
        edges,
        vec![
            ("b".to_string(), "c".to_string()),
            ("d".to_string(), "e".to_string()),
        ]
    );
}

#[test]
fn single_tag_posts_produce_a_row_but_no_mutation() {
    let mut engine = Engine::new();
    engine.insert(0, &tags(&["a", "b"])).unwrap();
    engine.insert(10, &tags(&["b", "c"])).unwrap();
    let before = engine.stats();

    let avg = engine.insert(5, &tags(&["f"])).unwrap();

    assert_eq!(row(avg), row(before.average_degree));
    let after = engine.stats();
    assert_eq!(after.vertex_count, before.vertex_count);
    assert_eq!(after.edge_count, before.edge_count);
    assert_eq!(after.live_supports, before.live_supports);
    assert!(!engine.graph().contains_vertex("f"));
}

#[test]
fn stale_posts_return_the_previous_average() {
    let mut engine = Engine::new();
    engine.insert(0, &tags(&["a", "b"])).unwrap();
    engine.insert(10, &tags(&["b", "c"])).unwrap();
    let previous = engine.insert(61, &tags(&["d", "e"])).unwrap();

    // Floor is 1; a post from far in the past must change nothing.
    let avg = engine.insert(-100, &tags(&["p", "q"])).unwrap();

    assert_eq!(row(avg), row(previous));
    assert_eq!(row(avg), row(engine.average_degree()));
    let stats = engine.stats();
    assert_eq!(stats.latest_timestamp, Some(61));
    assert!(!engine.graph().contains_vertex("p"));
}

#[test]
fn maximum_timestamp_never_decreases() {
    let mut engine = Engine::new();
    let sequence = [50, 20, 80, 79, 81, 30];

    let mut seen = i64::MIN;
    for (i, t) in sequence.into_iter().enumerate() {
        engine
            .insert(t, &[format!("x{i}"), format!("y{i}")])
            .unwrap();
        let latest = engine.stats().latest_timestamp.unwrap();
        assert!(
            latest >= seen,
            "latest went backwards: {seen} -> {latest} after t={t}"
        );
        seen = latest;
    }
    assert_eq!(seen, 81);
}

#[test]
fn handshake_property_holds_throughout() {
    let mut engine = Engine::new();
    let posts: Vec<(i64, Vec<String>)> = vec![
        (0, tags(&["a", "b", "c"])),
        (15, tags(&["b", "c"])),
        (30, tags(&["c", "d", "e", "f"])),
        (45, tags(&["solo"])),
        (75, tags(&["a", "f"])),
        (120, tags(&["g", "h"])),
        (121, tags(&["g", "h", "i"])),
    ];

    for (t, post_tags) in posts {
        engine.insert(t, &post_tags).unwrap();
        let stats = engine.stats();
        assert_eq!(
            stats.sum_degrees,
            2 * stats.edge_count as u64,
            "handshake violated at t={t}: sum={}, edges={}",
            stats.sum_degrees,
            stats.edge_count
        );
        // No vertex may linger at degree zero.
        for tag in engine.graph().vertices() {
            assert!(
                engine.graph().degree(tag) > 0,
                "vertex {tag} left at degree zero at t={t}"
            );
        }
    }
}

#[test]
fn re_eviction_with_the_same_floor_is_idempotent() {
    let mut engine = Engine::new();
    engine.insert(0, &tags(&["a", "b"])).unwrap();
    engine.insert(61, &tags(&["c", "d"])).unwrap();
    let first = engine.stats();

    // Same maximum, same floor — the second eviction pass finds nothing.
    engine.insert(61, &tags(&["c", "d"])).unwrap();
    let second = engine.stats();

    assert_eq!(second.vertex_count, first.vertex_count);
    assert_eq!(second.edge_count, first.edge_count);
    assert_eq!(second.window_floor, first.window_floor);
}

#[test]
fn non_expiring_batches_are_order_independent() {
    // Two interleavings of the same posts, both with increasing
    // timestamps and no expirations, must agree on every aggregate.
    let batch_a: Vec<(i64, Vec<String>)> = vec![
        (0, tags(&["a", "b"])),
        (1, tags(&["b", "c", "d"])),
        (2, tags(&["d", "e"])),
        (3, tags(&["a", "e"])),
    ];
    let batch_b: Vec<(i64, Vec<String>)> = vec![
        (0, tags(&["a", "e"])),
        (1, tags(&["d", "e"])),
        (2, tags(&["b", "c", "d"])),
        (3, tags(&["a", "b"])),
    ];

    let mut left = Engine::new();
    for (t, post_tags) in batch_a {
        left.insert(t, &post_tags).unwrap();
    }
    let mut right = Engine::new();
    for (t, post_tags) in batch_b {
        right.insert(t, &post_tags).unwrap();
    }

    let (ls, rs) = (left.stats(), right.stats());
    assert_eq!(ls.vertex_count, rs.vertex_count);
    assert_eq!(ls.edge_count, rs.edge_count);
    assert_eq!(ls.sum_degrees, rs.sum_degrees);
    assert_eq!(row(ls.average_degree), row(rs.average_degree));
}

#[test]
fn a_post_cannot_evict_itself_at_the_floor() {
    let mut engine = Engine::new();
    engine.insert(100, &tags(&["a", "b"])).unwrap();

    // Floor is 40; a post exactly at the floor stays in the window.
    let avg = engine.insert(40, &tags(&["c", "d"])).unwrap();
    assert_eq!(row(avg), "1.00");
    assert!(engine.graph().contains_edge("c", "d"));
}

#[test]
fn stats_snapshot_serialises() {
    let mut engine = Engine::new();
    engine.insert(0, &tags(&["a", "b"])).unwrap();

    let json = serde_json::to_value(engine.stats()).unwrap();
    assert_eq!(json["vertex_count"], 2);
    assert_eq!(json["edge_count"], 1);
    assert_eq!(json["window_secs"], 60);
}
