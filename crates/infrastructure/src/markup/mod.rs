pub mod codec;
pub mod normalizer;
pub mod parser;
pub mod writer;

pub use codec::LenientMarkupCodec;
pub use normalizer::MarkupNormalizer;
pub use parser::parse_document;
pub use writer::write_document;
