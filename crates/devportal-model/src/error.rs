use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// An icon/image key read from untyped data matched no known variant.
    #[error("icon type not recognized: {0}")]
    UnknownIcon(String),
    #[error("unknown network: {0}")]
    UnknownNetwork(String),
    #[error("unknown social type: {0}")]
    UnknownSocial(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
