//! Cotendo DNS Domain Layer
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod markup;
pub mod provider_response;

pub use config::{
    CliOverrides, Config, ConfigError, LoggingConfig, MarkupConfig, ZoneConfig,
    DEFAULT_SELF_CLOSING_TAGS,
};
pub use dns_record::{RecordData, RecordType, ResultEntry, ZoneRecord};
pub use errors::DomainError;
pub use markup::{is_valid_name, MarkupElement, MarkupNode};
pub use provider_response::ProviderResponse;
