mod record;
mod record_type;
mod result_entry;

pub use record::{RecordData, ZoneRecord, HOST_ATTRIBUTE, RESULT_TAG};
pub use record_type::RecordType;
pub use result_entry::ResultEntry;
