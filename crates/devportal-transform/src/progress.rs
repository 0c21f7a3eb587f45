//! Onboarding checklist derived from a developer's profile.

use devportal_model::{Profile, SocialType};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressItem {
    pub label: &'static str,
    pub completed: bool,
}

impl ProgressItem {
    fn new(label: &'static str, completed: bool) -> Self {
        Self { label, completed }
    }
}

/// Profile set-up steps. Nothing is complete without a profile.
pub fn profile_items(profile: Option<&Profile>) -> Vec<ProgressItem> {
    let check = |f: fn(&Profile) -> bool| profile.is_some_and(f);
    vec![
        ProgressItem::new("Create handle", check(|p| !p.handle.is_empty())),
        ProgressItem::new(
            "Add Github Profile",
            check(|p| p.social(SocialType::Github).is_some()),
        ),
        ProgressItem::new(
            "Add how you found Flow",
            check(|p| p.referral_source.as_deref().is_some_and(|s| !s.is_empty())),
        ),
        ProgressItem::new(
            "Add contract addresses",
            check(|p| !p.deployed_contracts.is_empty()),
        ),
    ]
}

/// Challenge steps; `challenge_type` is the first challenge's type identifier.
pub fn challenge_items(profile: Option<&Profile>, challenge_type: &str) -> Vec<ProgressItem> {
    vec![ProgressItem::new(
        "Complete first challenge",
        profile.is_some_and(|p| p.has_completed(challenge_type)),
    )]
}

/// Fraction of completed items, `0.0` for an empty list.
pub fn progress(items: &[ProgressItem]) -> f64 {
    if items.is_empty() {
        return 0.0;
    }
    let completed = items.iter().filter(|item| item.completed).count();
    completed as f64 / items.len() as f64
}
