use cotendo_dns_domain::{DomainError, MarkupElement, ProviderResponse};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::MarkupCodec;

/// Decoded provider response shared by the DNS and CDN views.
#[derive(Clone)]
pub struct ProviderDocument {
    token: Arc<str>,
    data: MarkupElement,
    codec: Arc<dyn MarkupCodec>,
}

impl ProviderDocument {
    #[instrument(skip_all, fields(config_len = response.config.len()))]
    pub fn load(
        response: ProviderResponse,
        codec: Arc<dyn MarkupCodec>,
    ) -> Result<Self, DomainError> {
        let data = codec.decode(&response.config)?;
        debug!(root = %data.tag, "Provider configuration decoded");

        Ok(Self {
            token: response.token,
            data,
            codec,
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn data(&self) -> &MarkupElement {
        &self.data
    }

    pub fn codec(&self) -> &Arc<dyn MarkupCodec> {
        &self.codec
    }
}

impl std::fmt::Debug for ProviderDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderDocument")
            .field("token", &self.token)
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}
