//! Cadence type identifiers and contract address helpers.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, TransformError};

static CONTRACT_IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^A\.(0x)?([0-9a-fA-F]{16})\.([a-zA-Z0-9_]+)$")
        .expect("contract identifier pattern is valid")
});

static EVM_ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^0x[a-fA-F0-9]{40}$").expect("EVM address pattern is valid")
});

/// Strip a leading `0x` from a Flow address.
pub fn sans_prefix(address: &str) -> &str {
    address.strip_prefix("0x").unwrap_or(address)
}

/// Ensure a Flow address carries the `0x` prefix.
pub fn with_prefix(address: &str) -> String {
    format!("0x{}", sans_prefix(address))
}

/// Build `A.<address>.<Contract>[.<Type>]`.
pub fn type_identifier(address: &str, contract_name: &str, type_name: Option<&str>) -> String {
    match type_name {
        Some(type_name) => format!("A.{}.{contract_name}.{type_name}", sans_prefix(address)),
        None => format!("A.{}.{contract_name}", sans_prefix(address)),
    }
}

/// A parsed `A.<address>.<Contract>` identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractIdentifier {
    /// Address without the `0x` prefix.
    pub address: String,
    pub contract_name: String,
}

impl ContractIdentifier {
    pub fn address_with_prefix(&self) -> String {
        with_prefix(&self.address)
    }
}

/// Parse a contract identifier entered on a profile.
pub fn parse_contract_identifier(identifier: &str) -> Result<ContractIdentifier> {
    let captures = CONTRACT_IDENTIFIER
        .captures(identifier.trim())
        .ok_or_else(|| TransformError::InvalidContractIdentifier(identifier.to_string()))?;
    Ok(ContractIdentifier {
        address: captures[2].to_string(),
        contract_name: captures[3].to_string(),
    })
}

pub fn is_evm_address(address: &str) -> bool {
    EVM_ADDRESS.is_match(address.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_type_identifiers() {
        assert_eq!(
            type_identifier("0x0123456789abcdef", "LearnFlowChallenge", Some("Challenge")),
            "A.0123456789abcdef.LearnFlowChallenge.Challenge"
        );
        assert_eq!(
            type_identifier("0123456789abcdef", "GoldStar", None),
            "A.0123456789abcdef.GoldStar"
        );
    }

    #[test]
    fn parses_identifiers_with_and_without_prefix() {
        let parsed = parse_contract_identifier("A.0x1654653399040a61.FlowToken").unwrap();
        assert_eq!(parsed.address, "1654653399040a61");
        assert_eq!(parsed.contract_name, "FlowToken");
        assert_eq!(parsed.address_with_prefix(), "0x1654653399040a61");

        let parsed = parse_contract_identifier("A.1654653399040a61.Flow_Token2").unwrap();
        assert_eq!(parsed.contract_name, "Flow_Token2");
    }

    #[test]
    fn rejects_bad_identifiers() {
        for bad in [
            "",
            "A.1234.FlowToken",
            "B.1654653399040a61.FlowToken",
            "A.1654653399040a61.",
            "A.1654653399040a61.Flow.Token",
        ] {
            assert!(parse_contract_identifier(bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn checks_evm_addresses() {
        assert!(is_evm_address("0x52908400098527886E0F7030069857D2E4169EE7"));
        assert!(!is_evm_address("52908400098527886E0F7030069857D2E4169EE7"));
        assert!(!is_evm_address("0x1234"));
    }
}
