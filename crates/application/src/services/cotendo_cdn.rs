use cotendo_dns_domain::{DomainError, MarkupElement, ProviderResponse};
use std::sync::Arc;

use super::ProviderDocument;
use crate::ports::MarkupCodec;

/// Pass-through view over a CDN configuration response; no record typing.
#[derive(Debug, Clone)]
pub struct CotendoCdn {
    document: ProviderDocument,
}

impl CotendoCdn {
    pub fn new(
        response: ProviderResponse,
        codec: Arc<dyn MarkupCodec>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            document: ProviderDocument::load(response, codec)?,
        })
    }

    pub fn token(&self) -> &str {
        self.document.token()
    }

    pub fn document(&self) -> &MarkupElement {
        self.document.data()
    }

    /// The decoded tree encoded back to text.
    pub fn entries(&self) -> Result<String, DomainError> {
        self.document.codec().encode(self.document.data())
    }
}
