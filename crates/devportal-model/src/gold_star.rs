//! Gold-star developer profiles and challenges stored on chain.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Social accounts a profile can link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialType {
    Github,
}

impl SocialType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            SocialType::Github => "github",
        }
    }
}

impl fmt::Display for SocialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SocialType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "github" => Ok(SocialType::Github),
            other => Err(ModelError::UnknownSocial(other.to_string())),
        }
    }
}

/// Contracts a developer has deployed, as declared on their profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeployedContracts {
    /// Cadence contract names keyed by account address.
    pub cadence_contracts: IndexMap<String, Vec<String>>,
    pub evm_contracts: Vec<String>,
}

impl DeployedContracts {
    pub fn is_empty(&self) -> bool {
        self.cadence_contracts.is_empty() && self.evm_contracts.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub completed: bool,
}

/// Editable part of a profile, sent with create/update transactions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSettings {
    pub handle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referral_source: Option<String>,
    #[serde(default)]
    pub socials: IndexMap<String, String>,
    #[serde(default)]
    pub deployed_contracts: DeployedContracts,
}

/// Profile as returned by the `GetProfile` script.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub handle: String,
    #[serde(default)]
    pub socials: IndexMap<String, String>,
    #[serde(default)]
    pub submissions: IndexMap<String, Submission>,
    #[serde(default)]
    pub deployed_contracts: DeployedContracts,
    #[serde(default)]
    pub referral_source: Option<String>,
}

/// A developer profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub handle: String,
    pub referral_source: Option<String>,
    pub socials: IndexMap<String, String>,
    pub deployed_contracts: DeployedContracts,
    /// Challenge completion keyed by challenge type identifier.
    pub submissions: IndexMap<String, Submission>,
}

impl Profile {
    pub fn social(&self, social: SocialType) -> Option<&str> {
        self.socials
            .get(social.as_str())
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn has_completed(&self, challenge_type: &str) -> bool {
        self.submissions
            .get(challenge_type)
            .is_some_and(|submission| submission.completed)
    }

    pub fn settings(&self) -> ProfileSettings {
        ProfileSettings {
            handle: self.handle.clone(),
            referral_source: self.referral_source.clone(),
            socials: self.socials.clone(),
            deployed_contracts: self.deployed_contracts.clone(),
        }
    }
}

impl From<ProfileResponse> for Profile {
    fn from(response: ProfileResponse) -> Self {
        Self {
            handle: response.handle,
            referral_source: response.referral_source.filter(|s| !s.is_empty()),
            socials: response
                .socials
                .into_iter()
                .filter(|(_, value)| !value.is_empty())
                .collect(),
            deployed_contracts: response.deployed_contracts,
            submissions: response.submissions,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    pub name: String,
    pub description: String,
}

/// All registered challenges keyed by their type identifier
/// (`A.<address>.<Contract>.<Resource>`).
pub type Challenges = IndexMap<String, Challenge>;

/// Where a challenge resource is declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChallengeContract {
    pub contract_name: &'static str,
    pub resource_identifier: &'static str,
}

impl ChallengeContract {
    pub const LEARN_FLOW: ChallengeContract = ChallengeContract {
        contract_name: "LearnFlowChallenge",
        resource_identifier: "Challenge",
    };
}
