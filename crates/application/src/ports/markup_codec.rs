use cotendo_dns_domain::{DomainError, MarkupElement};

/// Port for turning provider markup into a tree and back.
pub trait MarkupCodec: Send + Sync {
    /// Repairs and parses raw provider markup. Fails with
    /// [`DomainError::MalformedConfig`] when no tree can be produced.
    fn decode(&self, raw: &str) -> Result<MarkupElement, DomainError>;

    /// Encodes a tree as UTF-8 text ready for upload.
    fn encode(&self, root: &MarkupElement) -> Result<String, DomainError>;
}
