//! Data model for the Flow developer portal.
//!
//! Everything in this crate is a plain value type. Remote payloads
//! (sporks feed, Discourse topics, GitHub users, gold-star profiles) deserialize into the
//! wire types here, and the display records produced from them by
//! `devportal-transform` live here too so every crate agrees on one shape.

pub mod cards;
pub mod error;
pub mod forum;
pub mod github;
pub mod gold_star;
pub mod icons;
pub mod network;
pub mod sporks;

pub use cards::{PageCard, PageCategory, start_building_categories};
pub use error::{ModelError, Result};
pub use forum::{
    Category, CategoryResponse, ForumTopicSummary, ForumUser, Topic, TopicList, TopicsResponse,
    TopicsUser,
};
pub use github::GithubUser;
pub use gold_star::{
    Challenge, ChallengeContract, Challenges, DeployedContracts, Profile, ProfileResponse,
    ProfileSettings, SocialType, Submission,
};
pub use icons::{PageCardImage, SocialIcon};
pub use network::{FlowNetwork, STATUS_NETWORKS, StatusNetwork};
pub use sporks::{SporkMetadata, SporkRecord, SporkSnapshot, SporksFeed};
