//! Twitter-format record decoding.
//!
//! One JSON object per input line. Lines that fail to parse, lack the
//! timestamp or entities fields, or carry an unparseable `created_at`
//! are dropped silently — streaming dumps interleave rate-limit notices
//! and connection messages with real records, and those must never
//! reach the engine.

use chrono::DateTime;
use serde::Deserialize;
use std::collections::HashSet;
use tagmesh_core::types::Post;

/// `created_at` format used by the Twitter streaming API.
const CREATED_AT_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

#[derive(Debug, Deserialize)]
struct RawTweet {
    created_at: String,
    entities: RawEntities,
}

#[derive(Debug, Deserialize)]
struct RawEntities {
    hashtags: Vec<RawHashtag>,
}

#[derive(Debug, Deserialize)]
struct RawHashtag {
    text: String,
}

/// Decode one input line into a post, or `None` for lines that are not
/// well-formed tweet records.
///
/// Duplicate hashtags are removed here, keeping the first occurrence —
/// the engine treats a duplicate as a contract violation, so
/// deduplication must happen at this boundary.
pub fn parse_line(line: &str) -> Option<Post> {
    let raw: RawTweet = serde_json::from_str(line.trim()).ok()?;

    let timestamp = DateTime::parse_from_str(&raw.created_at, CREATED_AT_FORMAT)
        .ok()?
        .timestamp();

    let mut seen = HashSet::new();
    let tags: Vec<String> = raw
        .entities
        .hashtags
        .into_iter()
        .map(|hashtag| hashtag.text)
        .filter(|tag| seen.insert(tag.clone()))
        .collect();

    Some(Post::new(timestamp, tags))
}
