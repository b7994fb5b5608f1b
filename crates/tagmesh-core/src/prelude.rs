//! Tagmesh Core Prelude — convenient imports for common usage.
//!
//! ```rust
//! use tagmesh_core::prelude::*;
//! ```

// Re-export commonly used types
pub use crate::types::{tag_pairs, Pair, Post, Timestamp};

// Re-export the engine and its companions
pub use crate::engine::{Engine, EngineConfig, EngineStats};
pub use crate::graph::TagGraph;
pub use crate::ledger::PairLedger;
pub use crate::window::WindowTracker;

// Re-export error types
pub use crate::error::{EngineError, Result};
