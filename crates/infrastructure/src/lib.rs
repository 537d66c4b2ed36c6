//! Cotendo DNS Infrastructure Layer
pub mod markup;

pub use markup::{LenientMarkupCodec, MarkupNormalizer};
