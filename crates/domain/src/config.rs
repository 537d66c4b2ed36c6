pub mod errors;
pub mod logging;
pub mod markup;
pub mod root;
pub mod zone;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use markup::{MarkupConfig, DEFAULT_SELF_CLOSING_TAGS};
pub use root::{CliOverrides, Config};
pub use zone::ZoneConfig;
