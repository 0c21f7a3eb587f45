use thiserror::Error;

/// Why a YouTube link could not be turned into a video id.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum YoutubeError {
    #[error("Unrecognized URL")]
    UnrecognizedUrl,
    #[error("Video ID not found")]
    VideoIdNotFound,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    #[error(transparent)]
    Youtube(#[from] YoutubeError),
    #[error("invalid contract identifier: {0}")]
    InvalidContractIdentifier(String),
}

pub type Result<T> = std::result::Result<T, TransformError>;
