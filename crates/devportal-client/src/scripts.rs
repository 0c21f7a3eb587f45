//! Cadence scripts and transactions used by the gold-star adapters.
//!
//! Imports name contracts with `0x<ContractName>` placeholders, filled in
//! from [`NetworkConfig`] before submission.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::config::NetworkConfig;
use crate::error::{ClientError, Result};

static IMPORT_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(\s*import\s+\w+\s+from\s+)0x([A-Za-z_][A-Za-z0-9_]*)\b")
        .expect("import placeholder pattern is valid")
});

pub const GET_PROFILE: &str = r#"import GoldStar from 0xGoldStar

access(all) fun main(address: Address): GoldStar.ProfileView? {
    return GoldStar.getProfile(address: address)?.view()
}
"#;

pub const GET_CHALLENGES: &str = r#"import GoldStar from 0xGoldStar

access(all) fun main(): {String: GoldStar.ChallengeView} {
    return GoldStar.getChallenges()
}
"#;

pub const CREATE_PROFILE: &str = r#"import GoldStar from 0xGoldStar

transaction(
    handle: String,
    referralSource: String?,
    socials: {String: String},
    cadenceContracts: {Address: [String]},
    evmContracts: [String]
) {
    prepare(signer: auth(SaveValue, IssueStorageCapabilityController, PublishCapability) &Account) {
        let profile <- GoldStar.createProfile(handle: handle, referralSource: referralSource)
        profile.setSocials(socials)
        profile.setDeployedContracts(cadence: cadenceContracts, evm: evmContracts)
        signer.storage.save(<-profile, to: GoldStar.profileStoragePath)
        let cap = signer.capabilities.storage.issue<&GoldStar.Profile>(GoldStar.profileStoragePath)
        signer.capabilities.publish(cap, at: GoldStar.profilePublicPath)
    }
}
"#;

pub const UPDATE_PROFILE: &str = r#"import GoldStar from 0xGoldStar

transaction(
    handle: String,
    referralSource: String?,
    socials: {String: String},
    cadenceContracts: {Address: [String]},
    evmContracts: [String]
) {
    let profile: auth(GoldStar.Edit) &GoldStar.Profile

    prepare(signer: auth(BorrowValue) &Account) {
        self.profile = signer.storage
            .borrow<auth(GoldStar.Edit) &GoldStar.Profile>(from: GoldStar.profileStoragePath)
            ?? panic("No profile found")
    }

    execute {
        self.profile.setHandle(handle)
        self.profile.setReferralSource(referralSource)
        self.profile.setSocials(socials)
        self.profile.setDeployedContracts(cadence: cadenceContracts, evm: evmContracts)
    }
}
"#;

/// Replace every `import X from 0xName` placeholder with the configured
/// address of `Name`.
///
/// Configured names always win. An unconfigured placeholder is kept as a
/// literal address only when it is lowercase hex (`0xf8d6e0586b0a20c7`);
/// anything else is a contract name and fails with
/// [`ClientError::MissingContractAddress`].
pub fn resolve_imports(source: &str, config: &NetworkConfig) -> Result<String> {
    let mut missing: Option<ClientError> = None;
    let resolved = IMPORT_PLACEHOLDER.replace_all(source, |caps: &Captures<'_>| {
        let name = &caps[2];
        if let Some(address) = config.contracts.get(name) {
            return format!("{}{address}", &caps[1]);
        }
        if is_literal_address(name) {
            return caps[0].to_string();
        }
        if let Err(err) = config.contract_address(name) {
            missing.get_or_insert(err);
        }
        caps[0].to_string()
    });
    match missing {
        Some(err) => Err(err),
        None => Ok(resolved.into_owned()),
    }
}

/// Contract names are PascalCase, so an uppercase letter rules out an
/// address even when every character is a hex digit.
fn is_literal_address(digits: &str) -> bool {
    digits
        .chars()
        .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use devportal_model::FlowNetwork;

    #[test]
    fn resolves_named_imports() {
        let config = NetworkConfig::for_network(FlowNetwork::Testnet)
            .with_contract("GoldStar", "0x0123456789abcdef");
        let source = "import FlowToken from 0xFlowToken\nimport GoldStar from 0xGoldStar\n";
        let resolved = resolve_imports(source, &config).unwrap();
        assert_eq!(
            resolved,
            "import FlowToken from 0x7e60df042a9c0868\nimport GoldStar from 0x0123456789abcdef\n"
        );
    }

    #[test]
    fn leaves_literal_addresses() {
        let config = NetworkConfig::default();
        let source = "import Crypto from 0xabcdef\n";
        assert_eq!(resolve_imports(source, &config).unwrap(), source);
    }

    #[test]
    fn hex_letter_contract_names_resolve() {
        let config = NetworkConfig::default()
            .with_contract("Faded", "0x0123456789abcdef")
            .with_contract("BEEF", "0xfedcba9876543210");
        let source = "import Faded from 0xFaded\nimport BEEF from 0xBEEF\n";
        assert_eq!(
            resolve_imports(source, &config).unwrap(),
            "import Faded from 0x0123456789abcdef\nimport BEEF from 0xfedcba9876543210\n"
        );
    }

    #[test]
    fn unconfigured_hex_letter_contract_fails() {
        let err = resolve_imports("import Cafe from 0xCafe\n", &NetworkConfig::default())
            .unwrap_err();
        assert!(matches!(
            err,
            ClientError::MissingContractAddress { ref contract, .. } if contract == "Cafe"
        ));
    }

    #[test]
    fn missing_contract_fails_fast() {
        let config = NetworkConfig::for_network(FlowNetwork::Mainnet);
        let err = resolve_imports(GET_PROFILE, &config).unwrap_err();
        assert!(matches!(
            err,
            ClientError::MissingContractAddress { network: FlowNetwork::Mainnet, ref contract }
                if contract == "GoldStar"
        ));
    }
}
