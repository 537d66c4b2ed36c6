#![allow(dead_code)]

use cotendo_dns_application::ports::MarkupCodec;
use cotendo_dns_domain::{DomainError, MarkupElement, ResultEntry};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Codec double: `decode` looks up trees registered under a raw key,
/// `encode` records the tree it was given.
#[derive(Clone, Default)]
pub struct MockMarkupCodec {
    documents: Arc<RwLock<HashMap<String, MarkupElement>>>,
    encoded: Arc<RwLock<Vec<MarkupElement>>>,
    fail_encode: Arc<RwLock<bool>>,
}

impl MockMarkupCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(self, raw: &str, document: MarkupElement) -> Self {
        self.documents
            .write()
            .unwrap()
            .insert(raw.to_string(), document);
        self
    }

    pub fn set_fail_encode(&self, fail: bool) {
        *self.fail_encode.write().unwrap() = fail;
    }

    pub fn last_encoded(&self) -> Option<MarkupElement> {
        self.encoded.read().unwrap().last().cloned()
    }

    pub fn encode_count(&self) -> usize {
        self.encoded.read().unwrap().len()
    }
}

impl MarkupCodec for MockMarkupCodec {
    fn decode(&self, raw: &str) -> Result<MarkupElement, DomainError> {
        self.documents
            .read()
            .unwrap()
            .get(raw)
            .cloned()
            .ok_or_else(|| DomainError::MalformedConfig(format!("no fixture for {:?}", raw)))
    }

    fn encode(&self, root: &MarkupElement) -> Result<String, DomainError> {
        if *self.fail_encode.read().unwrap() {
            return Err(DomainError::EncodeFailed("mock encode failure".to_string()));
        }
        self.encoded.write().unwrap().push(root.clone());
        Ok(format!("<{}>", root.tag))
    }
}

pub fn result(pairs: &[(&str, &str)]) -> ResultEntry {
    pairs.iter().copied().collect()
}

/// `<tag host="..."><result .../>...</tag>`
pub fn record_element(tag: &str, host: &str, results: &[&[(&str, &str)]]) -> MarkupElement {
    let mut element = MarkupElement::new(tag).with_attribute("host", host);
    for pairs in results {
        let mut child = MarkupElement::new("result");
        for (key, value) in pairs.iter() {
            child.set_attribute(*key, *value);
        }
        element.push_element(child);
    }
    element
}

/// `<xml><resource_records>...</resource_records></xml>`
pub fn zone_document(records: Vec<MarkupElement>) -> MarkupElement {
    let mut container = MarkupElement::new("resource_records");
    for record in records {
        container.push_element(record);
    }
    MarkupElement::new("xml").with_child(container)
}
