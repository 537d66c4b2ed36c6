use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Malformed provider configuration: {0}")]
    MalformedConfig(String),

    #[error("Unknown record type: {0}")]
    UnknownRecordType(String),

    #[error("Invalid result key: {0:?}")]
    InvalidResultKey(String),

    #[error("Failed to encode configuration: {0}")]
    EncodeFailed(String),
}
