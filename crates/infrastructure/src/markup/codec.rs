use cotendo_dns_application::ports::MarkupCodec;
use cotendo_dns_domain::{DomainError, MarkupConfig, MarkupElement};
use tracing::{debug, warn};

use super::normalizer::MarkupNormalizer;
use super::parser::parse_document;
use super::writer::write_document;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Two-stage decoder (tolerant repair, then strict parse) paired with the
/// pretty-printing writer.
#[derive(Debug, Clone)]
pub struct LenientMarkupCodec {
    normalizer: MarkupNormalizer,
}

impl LenientMarkupCodec {
    pub fn new(config: &MarkupConfig) -> Self {
        Self {
            normalizer: MarkupNormalizer::new(config),
        }
    }

    pub fn normalizer(&self) -> &MarkupNormalizer {
        &self.normalizer
    }
}

impl Default for LenientMarkupCodec {
    fn default() -> Self {
        Self::new(&MarkupConfig::default())
    }
}

impl MarkupCodec for LenientMarkupCodec {
    fn decode(&self, raw: &str) -> Result<MarkupElement, DomainError> {
        let repaired = self
            .normalizer
            .normalize(raw.trim_start_matches(BYTE_ORDER_MARK));
        debug!(
            raw_len = raw.len(),
            repaired_len = repaired.len(),
            "Provider markup repaired"
        );

        parse_document(&repaired).map_err(|e| {
            warn!(error = %e, "Provider markup could not be parsed");
            e
        })
    }

    fn encode(&self, root: &MarkupElement) -> Result<String, DomainError> {
        write_document(root)
    }
}
