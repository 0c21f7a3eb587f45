//! Spork history normalization.

use devportal_model::{SporkMetadata, SporkRecord, SporkSnapshot, SporksFeed};
use indexmap::IndexMap;
use serde::Serialize;

/// Spork records grouped by network, in feed order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NormalizedSporks(IndexMap<String, Vec<SporkRecord>>);

impl NormalizedSporks {
    /// Records for `network`; empty when the feed has no such network.
    pub fn network(&self, network: &str) -> &[SporkRecord] {
        self.0.get(network).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn networks(&self) -> impl Iterator<Item = (&str, &[SporkRecord])> {
        self.0
            .iter()
            .map(|(name, records)| (name.as_str(), records.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> IndexMap<String, Vec<SporkRecord>> {
        self.0
    }
}

/// Regroup the feed into display records per network.
///
/// Order is taken from the feed as-is; nothing is sorted.
pub fn normalize_sporks(feed: &SporksFeed) -> NormalizedSporks {
    let normalized = feed
        .networks
        .iter()
        .map(|(network, sporks)| {
            let records: Vec<_> = sporks.values().map(spork_record).collect();
            tracing::debug!(network = %network, count = records.len(), "normalized sporks");
            (network.clone(), records)
        })
        .collect();
    NormalizedSporks(normalized)
}

fn spork_record(snapshot: &SporkSnapshot) -> SporkRecord {
    SporkRecord {
        heading: snapshot.name.clone(),
        timestamp: snapshot.spork_time.clone(),
        spork_metadata: SporkMetadata {
            access_node: snapshot.access_nodes.join(", "),
            date: snapshot.spork_time.clone(),
            root_height: snapshot.root_height.clone(),
            root_parent_id: snapshot.root_parent_id.clone(),
            root_state_commit: snapshot.root_state_commitment.clone(),
            git_commit: snapshot.git_commit_hash.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(json: &str) -> SporksFeed {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn renames_fields_and_joins_access_nodes() {
        let feed = feed(
            r#"{ "networks": { "testnet": { "s1": {
                "name": "A", "sporkTime": "t", "accessNodes": ["x", "y"],
                "rootHeight": "1", "rootParentId": "p",
                "rootStateCommitment": "c", "gitCommitHash": "g"
            } } } }"#,
        );
        let normalized = normalize_sporks(&feed);
        assert_eq!(
            normalized.network("testnet"),
            &[SporkRecord {
                heading: "A".to_string(),
                timestamp: "t".to_string(),
                spork_metadata: SporkMetadata {
                    access_node: "x, y".to_string(),
                    date: "t".to_string(),
                    root_height: "1".to_string(),
                    root_parent_id: "p".to_string(),
                    root_state_commit: "c".to_string(),
                    git_commit: "g".to_string(),
                },
            }]
        );
    }

    #[test]
    fn absent_network_is_empty() {
        let normalized = normalize_sporks(&SporksFeed::default());
        assert!(normalized.is_empty());
        assert!(normalized.network("mainnet").is_empty());
    }

    #[test]
    fn keeps_feed_order() {
        let feed = feed(
            r#"{ "networks": {
                "mainnet": { "m2": {"name": "M2"}, "m1": {"name": "M1"} },
                "testnet": { "t1": {"name": "T1"} }
            } }"#,
        );
        let normalized = normalize_sporks(&feed);
        let networks: Vec<_> = normalized.networks().map(|(name, _)| name).collect();
        assert_eq!(networks, vec!["mainnet", "testnet"]);
        let headings: Vec<_> = normalized
            .network("mainnet")
            .iter()
            .map(|r| r.heading.as_str())
            .collect();
        assert_eq!(headings, vec!["M2", "M1"]);
    }
}
