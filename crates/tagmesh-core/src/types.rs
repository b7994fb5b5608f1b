//! Shared types for the windowed co-occurrence graph.

use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};

/// Seconds since the Unix epoch.
pub type Timestamp = i64;

/// A timestamped set of tags, as delivered by the record producer.
///
/// The producer is responsible for removing duplicate tags before a post
/// reaches the engine; a duplicate that slips through is rejected as a
/// contract violation rather than deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub timestamp: Timestamp,
    pub tags: Vec<String>,
}

impl Post {
    pub fn new(timestamp: Timestamp, tags: Vec<String>) -> Self {
        Self { timestamp, tags }
    }

    /// All C(n,2) unordered pairs of this post's tag set.
    pub fn pairs(&self) -> Result<Vec<Pair>> {
        tag_pairs(&self.tags)
    }
}

/// An unordered pair of distinct tags co-occurring in one post.
///
/// Normalised so the lexicographically smaller tag comes first; pairs
/// built from the same two tags in either order compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pair {
    first: String,
    second: String,
}

impl Pair {
    /// Build a normalised pair, or `None` when both tags are equal.
    pub fn new(a: &str, b: &str) -> Option<Self> {
        match a.cmp(b) {
            std::cmp::Ordering::Less => Some(Self {
                first: a.to_string(),
                second: b.to_string(),
            }),
            std::cmp::Ordering::Greater => Some(Self {
                first: b.to_string(),
                second: a.to_string(),
            }),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }

    pub fn endpoints(&self) -> (&str, &str) {
        (&self.first, &self.second)
    }
}

/// Expand a tag set into its C(n,2) unordered pairs (the tags form a
/// clique). Fewer than two tags yield no pairs.
///
/// A repeated tag is a caller contract violation and is reported as an
/// error before the engine mutates anything.
pub fn tag_pairs(tags: &[String]) -> Result<Vec<Pair>> {
    let n = tags.len();
    let mut pairs = Vec::with_capacity(n * n.saturating_sub(1) / 2);

    for (i, a) in tags.iter().enumerate() {
        for b in &tags[i + 1..] {
            match Pair::new(a, b) {
                Some(pair) => pairs.push(pair),
                None => return Err(EngineError::duplicate_tag(a)),
            }
        }
    }

    Ok(pairs)
}
