//! # Tagmesh Core
//!
//! Windowed co-occurrence graph engine over streaming tagged posts.
//!
//! Tags are vertices; two tags are joined by an edge while at least one
//! post inside the trailing time window contains both. After every post
//! the engine reports the graph's current average vertex degree.
//!
//! The engine is built from four parts:
//!
//! - **Window Tracker** — monotone maximum timestamp and the derived
//!   window floor (maximum − window length)
//! - **Multiplicity Ledger** — per-pair support counts with a
//!   time-ordered expiry index, so eviction touches only what expires
//! - **Graph Store** — petgraph-backed tag adjacency with O(1) degree
//!   aggregates
//! - **Graph Engine** — the orchestrator exposing one operation:
//!   accept a post, return the average degree
//!
//! ## Quick start
//!
//! ```rust
//! use tagmesh_core::prelude::*;
//!
//! let mut engine = Engine::new();
//! let avg = engine.insert(0, &["rust".into(), "graphs".into()]).unwrap();
//! assert!((avg - 1.0).abs() < f64::EPSILON);
//! ```

pub mod engine;
pub mod error;
pub mod graph;
pub mod ledger;
pub mod types;
pub mod window;
pub mod prelude;
