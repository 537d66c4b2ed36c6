mod mock_codec;

#[allow(unused_imports)]
pub use mock_codec::{record_element, result, zone_document, MockMarkupCodec};
