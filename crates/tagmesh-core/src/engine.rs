//! Graph Engine — the single insert-and-report operation.
//!
//! The engine is a fold over the input stream. Each accepted post:
//! 1. Is checked against the floor derived from the previous maximum —
//!    stale posts mutate nothing and never advance the maximum
//! 2. Advances the maximum timestamp
//! 3. Adds one support per tag pair, creating edges on first support
//! 4. Evicts supports that fell below the new floor (insert-then-evict,
//!    so a post cannot evict itself even sitting exactly at the floor)
//! 5. Reports the current average vertex degree

use crate::error::{EngineError, Result};
use crate::graph::TagGraph;
use crate::ledger::PairLedger;
use crate::types::{tag_pairs, Timestamp};
use crate::window::WindowTracker;
use serde::{Deserialize, Serialize};

/// Configuration for one engine instance, fixed at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Trailing window length in seconds (default: 60).
    pub window_secs: i64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { window_secs: 60 }
    }
}

/// Serialisable snapshot of the engine's aggregates.
#[derive(Debug, Clone, Serialize)]
pub struct EngineStats {
    pub window_secs: i64,
    pub latest_timestamp: Option<Timestamp>,
    pub window_floor: Option<Timestamp>,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub sum_degrees: u64,
    pub average_degree: f64,
    pub tracked_pairs: usize,
    pub live_supports: usize,
}

/// The windowed co-occurrence engine.
///
/// Owns the window tracker, the multiplicity ledger, and the graph store
/// exclusively; one engine per input stream, no shared state across
/// instances. Posts must arrive strictly sequentially.
pub struct Engine {
    window: WindowTracker,
    ledger: PairLedger,
    graph: TagGraph,
}

impl Engine {
    /// Create an engine with the default 60-second window.
    pub fn new() -> Self {
        Self {
            window: WindowTracker::new(EngineConfig::default().window_secs),
            ledger: PairLedger::new(),
            graph: TagGraph::new(),
        }
    }

    pub fn with_config(config: EngineConfig) -> Result<Self> {
        if config.window_secs <= 0 {
            return Err(EngineError::invalid_config(
                "window_secs",
                config.window_secs.to_string(),
                "window length must be positive",
            ));
        }
        Ok(Self {
            window: WindowTracker::new(config.window_secs),
            ledger: PairLedger::new(),
            graph: TagGraph::new(),
        })
    }

    /// Process one post and return the resulting average vertex degree.
    ///
    /// Stale posts (timestamp below the current floor at arrival) are a
    /// defined no-op: the unchanged average is returned and the maximum
    /// does not advance. A duplicate tag in `tags` is a contract
    /// violation and is rejected before any mutation.
    pub fn insert(&mut self, timestamp: Timestamp, tags: &[String]) -> Result<f64> {
        if let Some(floor) = self.window.floor() {
            if timestamp < floor {
                return Ok(self.graph.average_degree());
            }
        }

        // Expand the clique up front: a contract violation must leave
        // the engine untouched.
        let pairs = tag_pairs(tags)?;

        let floor = self.window.observe(timestamp);

        for pair in &pairs {
            if self.ledger.add_support(pair, timestamp) {
                self.graph.add_edge(pair.first(), pair.second());
            }
        }

        self.evict(floor);

        Ok(self.graph.average_degree())
    }

    /// Current average vertex degree without processing anything.
    pub fn average_degree(&self) -> f64 {
        self.graph.average_degree()
    }

    /// The graph store, for read-only inspection.
    pub fn graph(&self) -> &TagGraph {
        &self.graph
    }

    pub fn window_secs(&self) -> i64 {
        self.window.window_secs()
    }

    /// Snapshot of the engine's aggregates.
    pub fn stats(&self) -> EngineStats {
        EngineStats {
            window_secs: self.window.window_secs(),
            latest_timestamp: self.window.latest(),
            window_floor: self.window.floor(),
            vertex_count: self.graph.vertex_count(),
            edge_count: self.graph.edge_count(),
            sum_degrees: self.graph.sum_degrees(),
            average_degree: self.graph.average_degree(),
            tracked_pairs: self.ledger.tracked_pairs(),
            live_supports: self.ledger.live_supports(),
        }
    }

    /// Eviction pass: expire supports below `floor` and drop the edges
    /// whose last support went with them.
    fn evict(&mut self, floor: Timestamp) {
        for pair in self.ledger.expire_before(floor) {
            self.graph.remove_edge(pair.first(), pair.second());
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
