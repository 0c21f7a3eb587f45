//! Spork history: the raw feed and the display records built from it.
//!
//! The feed is published as
//! `{ "networks": { "<network>": { "<sporkId>": { ...snapshot } } } }`.
//! Key order in both levels is significant (it is the display order), so the
//! maps are [`IndexMap`]s.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The raw sporks feed, grouped by network then by spork id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SporksFeed {
    #[serde(default)]
    pub networks: IndexMap<String, IndexMap<String, SporkSnapshot>>,
}

impl SporksFeed {
    /// Snapshots for one network, in feed order.
    pub fn snapshots(&self, network: &str) -> impl Iterator<Item = &SporkSnapshot> {
        self.networks
            .get(network)
            .into_iter()
            .flat_map(IndexMap::values)
    }
}

/// One spork as it appears in the feed.
///
/// The feed is not schema-validated: any field that is missing
/// deserializes to its empty value and is passed through as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SporkSnapshot {
    pub id: Option<u64>,
    pub name: String,
    /// ISO-8601 timestamp of the spork.
    pub spork_time: String,
    pub access_nodes: Vec<String>,
    pub root_height: String,
    pub root_parent_id: String,
    pub root_state_commitment: String,
    pub git_commit_hash: String,
}

/// A spork ready for display in a spork history card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SporkRecord {
    pub heading: String,
    pub timestamp: String,
    pub spork_metadata: SporkMetadata,
}

/// Detail rows shown inside a spork card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SporkMetadata {
    /// All access nodes of the spork joined with `", "`.
    pub access_node: String,
    pub date: String,
    pub root_height: String,
    pub root_parent_id: String,
    pub root_state_commit: String,
    pub git_commit: String,
}
