//! Boundary to the on-chain client.
//!
//! Scripts and transactions are Cadence source text with typed positional
//! arguments. Signing, wallet discovery and transport all live behind
//! [`FlowGateway`].

use std::fmt;

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::error::Result;

/// A typed positional argument for a script or transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument {
    Address(String),
    String(String),
    UInt64(u64),
    Bool(bool),
    Array(Vec<Argument>),
    Optional(Option<Box<Argument>>),
    Dictionary(Vec<(Argument, Argument)>),
}

impl Argument {
    /// Wrap an optional string.
    pub fn optional_string(value: Option<&str>) -> Self {
        Argument::Optional(value.map(|v| Box::new(Argument::String(v.to_string()))))
    }

    /// JSON-Cadence encoding used by access node REST APIs.
    pub fn to_json_cadence(&self) -> Value {
        match self {
            Argument::Address(address) => {
                json!({ "type": "Address", "value": devportal_transform::with_prefix(address) })
            }
            Argument::String(value) => json!({ "type": "String", "value": value }),
            // 64-bit integers travel as strings.
            Argument::UInt64(value) => json!({ "type": "UInt64", "value": value.to_string() }),
            Argument::Bool(value) => json!({ "type": "Bool", "value": value }),
            Argument::Array(items) => json!({
                "type": "Array",
                "value": items.iter().map(Argument::to_json_cadence).collect::<Vec<_>>(),
            }),
            Argument::Optional(inner) => json!({
                "type": "Optional",
                "value": inner.as_ref().map(|arg| arg.to_json_cadence()),
            }),
            Argument::Dictionary(entries) => json!({
                "type": "Dictionary",
                "value": entries
                    .iter()
                    .map(|(key, value)| json!({
                        "key": key.to_json_cadence(),
                        "value": value.to_json_cadence(),
                    }))
                    .collect::<Vec<_>>(),
            }),
        }
    }
}

/// Identifier of a submitted transaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransactionId(pub String);

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Executes read-only scripts and signed transactions against a Flow
/// network.
#[async_trait]
pub trait FlowGateway: Send + Sync {
    /// Run a script and return its decoded result.
    async fn query(&self, script: &str, args: Vec<Argument>) -> Result<Value>;

    /// Submit a transaction signed by the current user.
    async fn mutate(&self, transaction: &str, args: Vec<Argument>) -> Result<TransactionId>;
}
