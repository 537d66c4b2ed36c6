mod markup_codec;

pub use markup_codec::MarkupCodec;
