mod cotendo_cdn;
mod cotendo_dns;
mod provider_document;

pub use cotendo_cdn::CotendoCdn;
pub use cotendo_dns::{CotendoDns, RecordChange, RecordDiff};
pub use provider_document::ProviderDocument;
