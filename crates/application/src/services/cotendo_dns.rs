use cotendo_dns_domain::dns_record::{HOST_ATTRIBUTE, RESULT_TAG};
use cotendo_dns_domain::{
    is_valid_name, DomainError, MarkupElement, ProviderResponse, RecordData, RecordType,
    ResultEntry, ZoneConfig, ZoneRecord,
};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt::Write;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::ProviderDocument;
use crate::ports::MarkupCodec;

const ROOT_TAG: &str = "xml";
const RESOURCE_RECORDS_TAG: &str = "resource_records";
const COMMENT_TAG: &str = "comment";

/// Bucket order of a sorted record set. SRV is left out on purpose: the
/// provider tooling has always dropped it here.
const SORT_ORDER: &[RecordType] = &[
    RecordType::A,
    RecordType::Cname,
    RecordType::Mx,
    RecordType::Ptr,
    RecordType::Txt,
];

const SORT_ORDER_WITH_SRV: &[RecordType] = &[
    RecordType::A,
    RecordType::Cname,
    RecordType::Mx,
    RecordType::Ptr,
    RecordType::Srv,
    RecordType::Txt,
];

/// Outcome of [`CotendoDns::add_record`]. Both variants are successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordChange {
    Added,
    Updated,
}

/// Result-level difference between a stored record and a candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecordDiff {
    /// Results held by the stored record but missing from the candidate.
    pub removed: BTreeSet<ResultEntry>,
    /// Results of the candidate the stored record lacks.
    pub added: BTreeSet<ResultEntry>,
}

impl RecordDiff {
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.added.is_empty()
    }
}

/// Record-set manager for a Cotendo DNS zone configuration.
///
/// Owns the visible records of one decoded response (SOA and NS excluded),
/// keeps them unique per `(record_type, host)` and sorted, and serializes
/// them back into the provider's markup.
#[derive(Debug, Clone)]
pub struct CotendoDns {
    document: ProviderDocument,
    entries: Vec<ZoneRecord>,
    options: ZoneConfig,
}

impl CotendoDns {
    pub fn new(
        response: ProviderResponse,
        codec: Arc<dyn MarkupCodec>,
    ) -> Result<Self, DomainError> {
        Self::with_options(response, codec, ZoneConfig::default())
    }

    /// Decodes the response and extracts its records. Any failure aborts
    /// construction as a whole.
    #[instrument(skip_all, fields(retain_srv = options.retain_srv))]
    pub fn with_options(
        response: ProviderResponse,
        codec: Arc<dyn MarkupCodec>,
        options: ZoneConfig,
    ) -> Result<Self, DomainError> {
        let document = ProviderDocument::load(response, codec)?;
        let entries = extract_entries(document.data())?;

        let mut dns = Self {
            document,
            entries,
            options,
        };
        dns.sort();

        info!(records = dns.entries.len(), "Zone records loaded");
        Ok(dns)
    }

    pub fn token(&self) -> &str {
        self.document.token()
    }

    /// The decoded tree as received, before record extraction.
    pub fn document(&self) -> &MarkupElement {
        self.document.data()
    }

    pub fn options(&self) -> &ZoneConfig {
        &self.options
    }

    pub fn entries(&self) -> &[ZoneRecord] {
        &self.entries
    }

    pub fn records_of(&self, record_type: RecordType) -> impl Iterator<Item = &ZoneRecord> {
        self.entries
            .iter()
            .filter(move |record| record.record_type() == record_type)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reorders the records by type bucket, then by host.
    ///
    /// Records whose type has no bucket are dropped. Without
    /// [`ZoneConfig::retain_srv`] that includes every SRV record.
    pub fn sort(&mut self) {
        let order = if self.options.retain_srv {
            SORT_ORDER_WITH_SRV
        } else {
            SORT_ORDER
        };

        let (mut kept, dropped): (Vec<_>, Vec<_>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|record| order.contains(&record.record_type()));

        if !dropped.is_empty() {
            warn!(
                dropped = dropped.len(),
                "Records without a sort bucket were dropped from the zone"
            );
        }

        kept.sort_by(|a, b| {
            bucket(order, a)
                .cmp(&bucket(order, b))
                .then_with(|| a.host().cmp(b.host()))
        });
        self.entries = kept;
    }

    pub fn get_record(&self, record_type: RecordType, host: &str) -> Option<&ZoneRecord> {
        self.entries
            .iter()
            .find(|record| record.matches(record_type, host))
    }

    /// Adds the record, or replaces the one holding the same
    /// `(record_type, host)` slot, then re-sorts.
    pub fn add_record(&mut self, record: ZoneRecord) -> RecordChange {
        let change = upsert(&mut self.entries, record);
        self.sort();
        change
    }

    /// Removes the record for the slot and returns it. Deleting a missing
    /// record is a no-op. Survivors keep their relative order.
    pub fn del_record(&mut self, record_type: RecordType, host: &str) -> Option<ZoneRecord> {
        let index = self
            .entries
            .iter()
            .position(|record| record.matches(record_type, host))?;
        debug!(%record_type, host, "Record removed");
        Some(self.entries.remove(index))
    }

    /// Compares `record` with the stored record of the same slot, or returns
    /// `None` when the slot is empty. Results are compared as sets.
    pub fn diff_record(&self, record: &ZoneRecord) -> Option<RecordDiff> {
        let stored = self.get_record(record.record_type(), record.host())?;

        let stored_results: BTreeSet<&ResultEntry> = stored.results().iter().collect();
        let candidate_results: BTreeSet<&ResultEntry> = record.results().iter().collect();

        Some(RecordDiff {
            removed: stored_results
                .difference(&candidate_results)
                .map(|entry| (*entry).clone())
                .collect(),
            added: candidate_results
                .difference(&stored_results)
                .map(|entry| (*entry).clone())
                .collect(),
        })
    }

    /// Builds a record of `record_type` with one result per entry.
    ///
    /// Result keys are case-insensitive and stored lower-case, matching what
    /// a decode of the serialized record yields. Keys that cannot be written
    /// as attribute names are rejected.
    pub fn create_record(
        record_type: &str,
        host: &str,
        results: impl IntoIterator<Item = ResultEntry>,
    ) -> Result<ZoneRecord, DomainError> {
        let mut element = MarkupElement::new(record_type).with_attribute(HOST_ATTRIBUTE, host);
        for result in results {
            let mut child = MarkupElement::new(RESULT_TAG);
            for (key, value) in result.iter() {
                let key = key.to_ascii_lowercase();
                if !is_valid_name(&key) {
                    return Err(DomainError::InvalidResultKey(key));
                }
                child.set_attribute(key, value);
            }
            element.push_element(child);
        }

        ZoneRecord::from_element(&element)
    }

    /// The configuration to upload: SOA and NS placeholders followed by the
    /// records in their current order.
    pub fn config(&self) -> Result<String, DomainError> {
        let mut resource_records = MarkupElement::new(RESOURCE_RECORDS_TAG);
        resource_records.push_element(self.placeholder(RecordType::Soa).to_element());
        resource_records.push_element(self.placeholder(RecordType::Ns).to_element());
        for record in &self.entries {
            resource_records.push_element(record.to_element());
        }

        let root = MarkupElement::new(ROOT_TAG).with_child(resource_records);
        self.document.codec().encode(&root)
    }

    /// One line per record, in set order.
    pub fn show(&self) -> String {
        let mut out = String::new();
        for record in &self.entries {
            let _ = writeln!(out, "{}", record);
        }
        out
    }

    fn placeholder(&self, record_type: RecordType) -> ZoneRecord {
        let host = match record_type {
            RecordType::Ns => &self.options.ns_host,
            _ => &self.options.soa_host,
        };
        ZoneRecord::new(record_type, RecordData::new(host.as_str(), Vec::new()))
    }
}

/// Records of the document's first container. Comments and the SOA/NS
/// singletons are skipped; a later duplicate of a slot replaces the earlier
/// one.
fn extract_entries(document: &MarkupElement) -> Result<Vec<ZoneRecord>, DomainError> {
    let container = document.first_element().ok_or_else(|| {
        DomainError::MalformedConfig("configuration has no record container".to_string())
    })?;

    let mut entries = Vec::new();
    for element in container.elements() {
        if element.tag == COMMENT_TAG {
            continue;
        }

        let record = ZoneRecord::from_element(element)?;
        if record.record_type().is_hidden() {
            continue;
        }

        if upsert(&mut entries, record) == RecordChange::Updated {
            warn!(
                tag = %element.tag,
                host = element.attribute(HOST_ATTRIBUTE).unwrap_or_default(),
                "Duplicate record in provider configuration, keeping the last one"
            );
        }
    }

    Ok(entries)
}

/// Replaces the record holding the same slot, dropping any further
/// duplicates, or appends.
fn upsert(entries: &mut Vec<ZoneRecord>, record: ZoneRecord) -> RecordChange {
    let Some(index) = entries.iter().position(|existing| existing.same_key(&record)) else {
        entries.push(record);
        return RecordChange::Added;
    };

    let mut position = 0;
    entries.retain(|existing| {
        let keep = position == index || !existing.same_key(&record);
        position += 1;
        keep
    });
    entries[index] = record;
    RecordChange::Updated
}

fn bucket(order: &[RecordType], record: &ZoneRecord) -> usize {
    order
        .iter()
        .position(|record_type| *record_type == record.record_type())
        .unwrap_or(order.len())
}
