//! Single-pass transformations from remote or static data into the records
//! the portal displays.
//!
//! Nothing here performs I/O. Every function takes a fully-fetched payload
//! and returns a new value.

pub mod contracts;
pub mod email;
pub mod error;
pub mod forum;
pub mod progress;
pub mod sporks;
pub mod youtube;

pub use contracts::{
    ContractIdentifier, is_evm_address, parse_contract_identifier, sans_prefix, type_identifier,
    with_prefix,
};
pub use email::{INVALID_EMAIL_MESSAGE, email_error_message, is_valid_email};
pub use error::{Result, TransformError, YoutubeError};
pub use forum::{
    DEFAULT_AVATAR_URL, LATEST_TOPIC_LIMIT, forum_link, forum_user, latest_topics, topic_summary,
};
pub use progress::{ProgressItem, challenge_items, profile_items, progress};
pub use sporks::{NormalizedSporks, normalize_sporks};
pub use youtube::extract_youtube_video_id;
