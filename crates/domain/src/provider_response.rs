use std::sync::Arc;

/// Raw `(token, config)` pair handed over by the provider session.
///
/// The token is an opaque session/version identifier and is passed through
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderResponse {
    pub token: Arc<str>,
    pub config: String,
}

impl ProviderResponse {
    pub fn new(token: impl Into<Arc<str>>, config: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            config: config.into(),
        }
    }
}

impl From<(String, String)> for ProviderResponse {
    fn from((token, config): (String, String)) -> Self {
        Self::new(token, config)
    }
}

impl From<(&str, &str)> for ProviderResponse {
    fn from((token, config): (&str, &str)) -> Self {
        Self::new(token, config)
    }
}
