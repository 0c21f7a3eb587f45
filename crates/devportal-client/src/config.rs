//! Network configuration: which chain to talk to and where its contracts
//! live.
//!
//! A config file only needs the values it overrides:
//!
//! ```toml
//! network = "mainnet"
//!
//! [contracts]
//! GoldStar = "0x0123456789abcdef"
//! ```

use std::path::Path;

use devportal_model::FlowNetwork;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};

/// Public Discourse instance of the Flow forum.
pub const DEFAULT_DISCOURSE_URL: &str = "https://forum.onflow.org";

/// Wallet discovery service base URL.
const DISCOVERY_URL: &str = "https://fcl-discovery.onflow.org";

/// Core contract addresses shared by every deployment.
const CORE_CONTRACTS: &[(&str, &str, &str)] = &[
    // (contract, mainnet, testnet)
    ("FungibleToken", "0xf233dcee88fe0abe", "0x9a0766d93b6608b7"),
    ("FlowToken", "0x1654653399040a61", "0x7e60df042a9c0868"),
    ("NonFungibleToken", "0x1d7e57aa55817448", "0x631e88ae7f1d7c20"),
    ("MetadataViews", "0x1d7e57aa55817448", "0x631e88ae7f1d7c20"),
];

/// Resolved configuration for one network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkConfig {
    pub network: FlowNetwork,
    /// REST access node URL.
    pub access_node: String,
    /// Wallet discovery endpoint.
    pub discovery_wallet: String,
    pub discourse_url: String,
    /// Contract name to `0x`-prefixed address.
    pub contracts: IndexMap<String, String>,
}

/// On-disk form: every field optional, missing values fall back to the
/// network defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    network: Option<FlowNetwork>,
    access_node: Option<String>,
    discovery_wallet: Option<String>,
    discourse_url: Option<String>,
    #[serde(default)]
    contracts: IndexMap<String, String>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self::for_network(FlowNetwork::default())
    }
}

impl NetworkConfig {
    /// Built-in defaults for `network`.
    pub fn for_network(network: FlowNetwork) -> Self {
        let contracts = CORE_CONTRACTS
            .iter()
            .map(|&(name, mainnet, testnet)| {
                let address = match network {
                    FlowNetwork::Mainnet => mainnet,
                    FlowNetwork::Testnet => testnet,
                };
                (name.to_string(), address.to_string())
            })
            .collect();

        Self {
            network,
            access_node: network.default_access_node().to_string(),
            discovery_wallet: format!("{DISCOVERY_URL}/{network}/authn"),
            discourse_url: DEFAULT_DISCOURSE_URL.to_string(),
            contracts,
        }
    }

    /// Parse a TOML config. `network` in the file wins over `fallback`.
    pub fn from_toml_str(contents: &str, fallback: FlowNetwork) -> Result<Self> {
        let file: ConfigFile = toml::from_str(contents)?;
        let mut config = Self::for_network(file.network.unwrap_or(fallback));

        if let Some(access_node) = file.access_node {
            config.access_node = access_node;
        }
        if let Some(discovery_wallet) = file.discovery_wallet {
            config.discovery_wallet = discovery_wallet;
        }
        if let Some(discourse_url) = file.discourse_url {
            config.discourse_url = discourse_url;
        }
        for (name, address) in file.contracts {
            if address.trim().is_empty() {
                return Err(ClientError::Config(format!(
                    "contract {name} has an empty address"
                )));
            }
            config
                .contracts
                .insert(name, devportal_transform::with_prefix(address.trim()));
        }
        Ok(config)
    }

    /// Load a TOML config file.
    pub fn load(path: &Path, fallback: FlowNetwork) -> Result<Self> {
        tracing::debug!(path = %path.display(), "loading network config");
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents, fallback)
    }

    /// Add or replace a contract address.
    #[must_use]
    pub fn with_contract(mut self, name: impl Into<String>, address: &str) -> Self {
        self.contracts
            .insert(name.into(), devportal_transform::with_prefix(address));
        self
    }

    /// Address of `contract` on this network.
    ///
    /// A missing entry is a deployment mistake, so this fails instead of
    /// guessing.
    pub fn contract_address(&self, contract: &str) -> Result<&str> {
        self.contracts
            .get(contract)
            .map(String::as_str)
            .ok_or_else(|| ClientError::MissingContractAddress {
                network: self.network,
                contract: contract.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn testnet_defaults() {
        let config = NetworkConfig::default();
        assert_eq!(config.network, FlowNetwork::Testnet);
        assert_eq!(config.access_node, "https://rest-testnet.onflow.org");
        assert_eq!(
            config.discovery_wallet,
            "https://fcl-discovery.onflow.org/testnet/authn"
        );
        assert_eq!(
            config.contract_address("FlowToken").unwrap(),
            "0x7e60df042a9c0868"
        );
    }

    #[test]
    fn mainnet_uses_mainnet_addresses() {
        let config = NetworkConfig::for_network(FlowNetwork::Mainnet);
        assert_eq!(
            config.contract_address("FungibleToken").unwrap(),
            "0xf233dcee88fe0abe"
        );
    }

    #[test]
    fn missing_contract_fails() {
        let err = NetworkConfig::default()
            .contract_address("GoldStar")
            .unwrap_err();
        assert!(matches!(
            err,
            ClientError::MissingContractAddress { ref contract, .. } if contract == "GoldStar"
        ));
    }

    #[test]
    fn file_overrides_defaults() {
        let config = NetworkConfig::from_toml_str(
            r#"
            network = "mainnet"
            discourse_url = "https://forum.example"

            [contracts]
            GoldStar = "0123456789abcdef"
            "#,
            FlowNetwork::Testnet,
        )
        .unwrap();
        assert_eq!(config.network, FlowNetwork::Mainnet);
        assert_eq!(config.access_node, "https://rest-mainnet.onflow.org");
        assert_eq!(config.discourse_url, "https://forum.example");
        assert_eq!(
            config.contract_address("GoldStar").unwrap(),
            "0x0123456789abcdef"
        );
        assert_eq!(
            config.contract_address("FlowToken").unwrap(),
            "0x1654653399040a61"
        );
    }

    #[test]
    fn rejects_unknown_keys_and_empty_addresses() {
        assert!(
            NetworkConfig::from_toml_str("netwrok = \"mainnet\"", FlowNetwork::Testnet).is_err()
        );
        assert!(
            NetworkConfig::from_toml_str("[contracts]\nGoldStar = \"\"", FlowNetwork::Testnet)
                .is_err()
        );
    }
}
