//! Remote data adapters for the Flow developer portal.
//!
//! - [`DiscourseClient`]: forum topics and category names over HTTP
//! - [`GithubClient`]: GitHub users, avatars behind a persisted LRU cache
//! - [`GoldStar`]: developer profiles and challenges via a [`FlowGateway`]
//! - [`Memoized`] and the [`cache`] module: request memoization
//! - [`NetworkConfig`]: network selection and contract addresses
//!
//! Adapters never retry. A failed request surfaces as a [`ClientError`] and
//! callers decide what to show instead.

pub mod cache;
pub mod config;
pub mod discourse;
pub mod error;
pub mod gateway;
pub mod github;
pub mod gold_star;
pub mod resource;
pub mod scripts;

pub use cache::{LruCache, MemoCache, PersistentCache, UnboundedCache};
pub use config::{DEFAULT_DISCOURSE_URL, NetworkConfig};
pub use discourse::DiscourseClient;
pub use error::{ClientError, Result};
pub use gateway::{Argument, FlowGateway, TransactionId};
pub use github::GithubClient;
pub use gold_star::GoldStar;
pub use resource::{Memoized, Resource};
