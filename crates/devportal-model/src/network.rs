//! Flow networks: the chain a deployment talks to, and the status-page
//! components shown on the network pages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Chain network selected at build/deploy time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowNetwork {
    Mainnet,
    #[default]
    Testnet,
}

impl FlowNetwork {
    pub const ALL: [FlowNetwork; 2] = [FlowNetwork::Mainnet, FlowNetwork::Testnet];

    pub const fn as_str(&self) -> &'static str {
        match self {
            FlowNetwork::Mainnet => "mainnet",
            FlowNetwork::Testnet => "testnet",
        }
    }

    /// Public REST access node for this network.
    pub const fn default_access_node(&self) -> &'static str {
        match self {
            FlowNetwork::Mainnet => "https://rest-mainnet.onflow.org",
            FlowNetwork::Testnet => "https://rest-testnet.onflow.org",
        }
    }
}

impl fmt::Display for FlowNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlowNetwork {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" => Ok(FlowNetwork::Mainnet),
            "testnet" => Ok(FlowNetwork::Testnet),
            other => Err(ModelError::UnknownNetwork(other.to_string())),
        }
    }
}

/// A network component tracked on the status page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusNetwork {
    /// statuspage.io component id.
    pub component_id: &'static str,
    /// Matches the network key used by the sporks feed.
    pub id: &'static str,
    pub title: &'static str,
    /// Path segment of the network detail page (`/networks/<url_path>`).
    pub url_path: &'static str,
}

pub const STATUS_NETWORKS: &[StatusNetwork] = &[
    StatusNetwork {
        component_id: "nfr4t4jf0jw5",
        id: "mainnet-core-components",
        title: "Flow Mainnet Core Components",
        url_path: "flow-mainnet-core-components",
    },
    StatusNetwork {
        component_id: "xmgzlt62mtg4",
        id: "mainnet-access-apis",
        title: "Flow Mainnet Access APIs",
        url_path: "flow-mainnet-access-apis",
    },
    StatusNetwork {
        component_id: "g9d7vtywpdfq",
        id: "testnet",
        title: "Flow Testnet",
        url_path: "flow-testnet",
    },
    StatusNetwork {
        component_id: "1zmp931swvcs",
        id: "sandboxnet-core-components",
        title: "Flow Sandboxnet Core Components",
        url_path: "flow-sandboxnet-core-components",
    },
    StatusNetwork {
        component_id: "xc3zrll5td5p",
        id: "sandboxnet-access-apis",
        title: "Flow Sandboxnet Access APIs",
        url_path: "flow-sandboxnet-access-apis",
    },
];

impl StatusNetwork {
    pub fn find_by_url_path(url_path: &str) -> Option<&'static StatusNetwork> {
        STATUS_NETWORKS
            .iter()
            .find(|network| network.url_path == url_path)
    }

    pub fn find_by_id(id: &str) -> Option<&'static StatusNetwork> {
        STATUS_NETWORKS.iter().find(|network| network.id == id)
    }
}
