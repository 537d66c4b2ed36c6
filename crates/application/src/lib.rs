//! Cotendo DNS Application Layer
pub mod ports;
pub mod services;

pub use ports::MarkupCodec;
pub use services::{CotendoCdn, CotendoDns, ProviderDocument, RecordChange, RecordDiff};
