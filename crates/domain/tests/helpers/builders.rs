#![allow(dead_code)]
use cotendo_dns_domain::{RecordData, RecordType, ResultEntry, ZoneRecord};

pub fn result(pairs: &[(&str, &str)]) -> ResultEntry {
    pairs.iter().copied().collect()
}

pub struct ZoneRecordBuilder {
    record_type: RecordType,
    host: String,
    results: Vec<ResultEntry>,
}

impl ZoneRecordBuilder {
    pub fn new() -> Self {
        Self {
            record_type: RecordType::A,
            host: "www".to_string(),
            results: Vec::new(),
        }
    }

    pub fn record_type(mut self, record_type: RecordType) -> Self {
        self.record_type = record_type;
        self
    }

    pub fn host(mut self, host: &str) -> Self {
        self.host = host.to_string();
        self
    }

    pub fn result(mut self, pairs: &[(&str, &str)]) -> Self {
        self.results.push(result(pairs));
        self
    }

    pub fn value(self, value: &str) -> Self {
        self.result(&[("value", value), ("ttl", "300")])
    }

    pub fn build(self) -> ZoneRecord {
        ZoneRecord::new(self.record_type, RecordData::new(self.host, self.results))
    }
}

impl Default for ZoneRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_record_builder() {
        let record = ZoneRecordBuilder::new()
            .record_type(RecordType::Mx)
            .host("mail")
            .value("mx1.example.com")
            .build();

        assert_eq!(record.record_type(), RecordType::Mx);
        assert_eq!(record.host(), "mail");
        assert_eq!(record.results().len(), 1);
    }
}
