//! Graph Store — tag adjacency with O(1) degree aggregates.
//!
//! Backed by a petgraph stable graph with a label index for tag→vertex
//! lookup. Stable indices matter here: vertices are removed the moment
//! their degree drops to zero, and the label index must stay valid
//! across removals.

use petgraph::stable_graph::{NodeIndex, StableUnGraph};
use std::collections::HashMap;

/// Undirected co-occurrence graph over tags.
///
/// A tag exists as a vertex exactly while it has at least one incident
/// edge. `sum_degrees` is maintained on every mutation so the average
/// degree is read from aggregates, never by rescanning the graph; by the
/// handshake property it always equals twice the edge count.
#[derive(Debug, Clone, Default)]
pub struct TagGraph {
    graph: StableUnGraph<String, ()>,
    vertex_index: HashMap<String, NodeIndex>,
    sum_degrees: u64,
}

impl TagGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the edge between `u` and `v`, interning either endpoint that
    /// is not yet a vertex. Adding an edge that already exists changes
    /// nothing.
    pub fn add_edge(&mut self, u: &str, v: &str) {
        let u_idx = self.intern(u);
        let v_idx = self.intern(v);

        if self.graph.find_edge(u_idx, v_idx).is_none() {
            self.graph.add_edge(u_idx, v_idx, ());
            self.sum_degrees += 2;
        }
    }

    /// Remove the edge between `u` and `v`; an endpoint left with degree
    /// zero leaves the graph with it. Absent edges are ignored.
    pub fn remove_edge(&mut self, u: &str, v: &str) {
        let Some(&u_idx) = self.vertex_index.get(u) else {
            return;
        };
        let Some(&v_idx) = self.vertex_index.get(v) else {
            return;
        };
        let Some(edge) = self.graph.find_edge(u_idx, v_idx) else {
            return;
        };

        self.graph.remove_edge(edge);
        self.sum_degrees = self.sum_degrees.saturating_sub(2);

        self.release_if_isolated(u, u_idx);
        self.release_if_isolated(v, v_idx);
    }

    /// Average vertex degree from the maintained aggregates, in O(1).
    /// Exactly 0 for the empty graph.
    pub fn average_degree(&self) -> f64 {
        if self.vertex_index.is_empty() {
            0.0
        } else {
            self.sum_degrees as f64 / self.vertex_index.len() as f64
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_index.len()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn sum_degrees(&self) -> u64 {
        self.sum_degrees
    }

    /// Degree of a tag (0 for tags not in the graph).
    pub fn degree(&self, tag: &str) -> usize {
        self.vertex_index
            .get(tag)
            .map_or(0, |&idx| self.graph.edges(idx).count())
    }

    pub fn contains_vertex(&self, tag: &str) -> bool {
        self.vertex_index.contains_key(tag)
    }

    pub fn contains_edge(&self, u: &str, v: &str) -> bool {
        let (Some(&u_idx), Some(&v_idx)) =
            (self.vertex_index.get(u), self.vertex_index.get(v))
        else {
            return false;
        };
        self.graph.find_edge(u_idx, v_idx).is_some()
    }

    /// All tags currently in the graph.
    pub fn vertices(&self) -> Vec<&str> {
        self.vertex_index.keys().map(String::as_str).collect()
    }

    /// All edges as endpoint label pairs.
    pub fn edges(&self) -> Vec<(&str, &str)> {
        self.graph
            .edge_indices()
            .filter_map(|edge| {
                let (a, b) = self.graph.edge_endpoints(edge)?;
                Some((self.graph[a].as_str(), self.graph[b].as_str()))
            })
            .collect()
    }

    /// The `k` highest-degree tags, ties broken alphabetically.
    pub fn top_degrees(&self, k: usize) -> Vec<(String, usize)> {
        let mut degrees: Vec<(String, usize)> = self
            .vertex_index
            .iter()
            .map(|(tag, &idx)| (tag.clone(), self.graph.edges(idx).count()))
            .collect();
        degrees.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        degrees.truncate(k);
        degrees
    }

    fn intern(&mut self, tag: &str) -> NodeIndex {
        match self.vertex_index.get(tag) {
            Some(&idx) => idx,
            None => {
                let idx = self.graph.add_node(tag.to_string());
                self.vertex_index.insert(tag.to_string(), idx);
                idx
            }
        }
    }

    fn release_if_isolated(&mut self, tag: &str, idx: NodeIndex) {
        if self.graph.edges(idx).count() == 0 {
            self.graph.remove_node(idx);
            self.vertex_index.remove(tag);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_edge_interns_both_endpoints() {
        let mut graph = TagGraph::new();
        graph.add_edge("a", "b");

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.sum_degrees(), 2);
        assert!(graph.contains_edge("a", "b"));
        assert!(graph.contains_edge("b", "a"));
    }

    #[test]
    fn re_adding_an_edge_changes_nothing() {
        let mut graph = TagGraph::new();
        graph.add_edge("a", "b");
        graph.add_edge("b", "a");

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.sum_degrees(), 2);
    }

    #[test]
    fn isolated_endpoints_leave_with_their_last_edge() {
        let mut graph = TagGraph::new();
        graph.add_edge("a", "b");
        graph.add_edge("b", "c");

        graph.remove_edge("a", "b");
        assert!(!graph.contains_vertex("a"));
        assert!(graph.contains_vertex("b"));
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.sum_degrees(), 2);

        graph.remove_edge("b", "c");
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.sum_degrees(), 0);
    }

    #[test]
    fn removing_an_absent_edge_is_ignored() {
        let mut graph = TagGraph::new();
        graph.add_edge("a", "b");
        graph.remove_edge("a", "c");
        graph.remove_edge("x", "y");

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.sum_degrees(), 2);
    }

    #[test]
    fn vertex_interning_survives_removals() {
        // Removing a vertex must not disturb the indices of the rest.
        let mut graph = TagGraph::new();
        graph.add_edge("a", "b");
        graph.add_edge("c", "d");
        graph.add_edge("e", "f");

        graph.remove_edge("a", "b");
        graph.add_edge("c", "e");

        assert_eq!(graph.degree("c"), 2);
        assert_eq!(graph.degree("e"), 2);
        assert_eq!(graph.degree("d"), 1);
        assert_eq!(graph.sum_degrees(), 2 * graph.edge_count() as u64);
    }

    #[test]
    fn average_degree_reads_from_aggregates() {
        let mut graph = TagGraph::new();
        assert_eq!(graph.average_degree(), 0.0);

        graph.add_edge("a", "b");
        assert!((graph.average_degree() - 1.0).abs() < f64::EPSILON);

        graph.add_edge("b", "c");
        assert!((graph.average_degree() - 4.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn top_degrees_orders_by_degree_then_name() {
        let mut graph = TagGraph::new();
        graph.add_edge("hub", "a");
        graph.add_edge("hub", "b");
        graph.add_edge("hub", "c");
        graph.add_edge("a", "b");

        let top = graph.top_degrees(3);
        assert_eq!(top[0], ("hub".to_string(), 3));
        assert_eq!(top[1], ("a".to_string(), 2));
        assert_eq!(top[2], ("b".to_string(), 2));
    }
}
