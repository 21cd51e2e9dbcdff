use thiserror::Error;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid email address {address:?}: {source}")]
    InvalidAddress {
        address: String,
        source: lettre::address::AddressError,
    },

    /// The configured From address does not parse. Raised at startup.
    #[error("invalid sender address {address:?}: {source}")]
    InvalidSender {
        address: String,
        source: lettre::address::AddressError,
    },

    #[error("failed to build message: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("invalid attachment content type: {0}")]
    ContentType(String),

    #[error("SMTP delivery failed: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}
