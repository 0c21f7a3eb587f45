//! Gold-star profile and challenge adapters.

use devportal_model::{ChallengeContract, Challenges, Profile, ProfileResponse, ProfileSettings};
use devportal_transform::ProgressItem;
use serde_json::Value;

use crate::config::NetworkConfig;
use crate::error::{ClientError, Result};
use crate::gateway::{Argument, FlowGateway, TransactionId};
use crate::resource::Memoized;
use crate::scripts;

/// Reads and writes gold-star data through a [`FlowGateway`].
///
/// Profile reads are remembered per address until a create or update
/// invalidates them.
pub struct GoldStar<G> {
    gateway: G,
    config: NetworkConfig,
    profiles: Memoized<String, Option<Profile>>,
    challenges: Memoized<(), Challenges>,
}

impl<G: FlowGateway> GoldStar<G> {
    pub fn new(gateway: G, config: NetworkConfig) -> Self {
        Self {
            gateway,
            config,
            profiles: Memoized::default(),
            challenges: Memoized::default(),
        }
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Profile stored at `address`, `None` when the account has none.
    pub async fn profile(&self, address: &str) -> Result<Option<Profile>> {
        let address = devportal_transform::with_prefix(address);
        let args = vec![Argument::Address(address.clone())];
        self.profiles
            .fetch(address, || async move {
                let script = scripts::resolve_imports(scripts::GET_PROFILE, &self.config)?;
                let value = self.gateway.query(&script, args).await?;
                decode_profile(value)
            })
            .await
    }

    /// Every registered challenge, keyed by type identifier.
    pub async fn challenges(&self) -> Result<Challenges> {
        self.challenges
            .fetch((), || async {
                let script = scripts::resolve_imports(scripts::GET_CHALLENGES, &self.config)?;
                let value = self.gateway.query(&script, Vec::new()).await?;
                Ok::<_, ClientError>(serde_json::from_value(value)?)
            })
            .await
    }

    /// Create a profile for the signing account.
    pub async fn create_profile(
        &self,
        address: &str,
        settings: &ProfileSettings,
    ) -> Result<TransactionId> {
        let transaction = scripts::resolve_imports(scripts::CREATE_PROFILE, &self.config)?;
        let id = self
            .gateway
            .mutate(&transaction, settings_arguments(settings))
            .await?;
        tracing::info!(%id, handle = %settings.handle, "submitted profile creation");
        self.profiles
            .invalidate(&devportal_transform::with_prefix(address));
        Ok(id)
    }

    /// Replace the signing account's profile settings.
    pub async fn update_profile(
        &self,
        address: &str,
        settings: &ProfileSettings,
    ) -> Result<TransactionId> {
        let transaction = scripts::resolve_imports(scripts::UPDATE_PROFILE, &self.config)?;
        let id = self
            .gateway
            .mutate(&transaction, settings_arguments(settings))
            .await?;
        tracing::info!(%id, handle = %settings.handle, "submitted profile update");
        self.profiles
            .invalidate(&devportal_transform::with_prefix(address));
        Ok(id)
    }

    /// Type identifier of the introductory challenge on this network.
    pub fn first_challenge_type(&self) -> Result<String> {
        let contract = ChallengeContract::LEARN_FLOW;
        let address = self.config.contract_address(contract.contract_name)?;
        Ok(devportal_transform::type_identifier(
            address,
            contract.contract_name,
            Some(contract.resource_identifier),
        ))
    }

    /// Onboarding checklist for `address`; every item is open when no
    /// account is connected.
    pub async fn checklist(&self, address: Option<&str>) -> Result<Vec<ProgressItem>> {
        let profile = match address {
            Some(address) => self.profile(address).await?,
            None => None,
        };
        let challenge_type = self.first_challenge_type()?;
        let mut items = devportal_transform::profile_items(profile.as_ref());
        items.extend(devportal_transform::challenge_items(
            profile.as_ref(),
            &challenge_type,
        ));
        Ok(items)
    }
}

fn decode_profile(value: Value) -> Result<Option<Profile>> {
    if value.is_null() {
        return Ok(None);
    }
    let response: ProfileResponse = serde_json::from_value(value)?;
    Ok(Some(response.into()))
}

/// Positional arguments shared by the create and update transactions.
fn settings_arguments(settings: &ProfileSettings) -> Vec<Argument> {
    let socials = settings
        .socials
        .iter()
        .map(|(kind, value)| {
            (
                Argument::String(kind.clone()),
                Argument::String(value.clone()),
            )
        })
        .collect();
    let cadence_contracts = settings
        .deployed_contracts
        .cadence_contracts
        .iter()
        .map(|(address, names)| {
            (
                Argument::Address(address.clone()),
                Argument::Array(names.iter().cloned().map(Argument::String).collect()),
            )
        })
        .collect();
    let evm_contracts = settings
        .deployed_contracts
        .evm_contracts
        .iter()
        .cloned()
        .map(Argument::String)
        .collect();

    vec![
        Argument::String(settings.handle.clone()),
        Argument::optional_string(settings.referral_source.as_deref()),
        Argument::Dictionary(socials),
        Argument::Dictionary(cadence_contracts),
        Argument::Array(evm_contracts),
    ]
}
