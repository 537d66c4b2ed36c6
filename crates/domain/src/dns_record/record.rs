use super::{RecordType, ResultEntry};
use crate::errors::DomainError;
use crate::markup::MarkupElement;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const HOST_ATTRIBUTE: &str = "host";
pub const RESULT_TAG: &str = "result";

/// Host key plus the ordered results nested under it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordData {
    pub host: String,
    pub results: Vec<ResultEntry>,
}

impl RecordData {
    pub fn new(host: impl Into<String>, results: Vec<ResultEntry>) -> Self {
        Self {
            host: host.into(),
            results,
        }
    }
}

/// One DNS resource record of the zone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ZoneRecord {
    Soa(RecordData),
    Ns(RecordData),
    A(RecordData),
    Cname(RecordData),
    Mx(RecordData),
    Ptr(RecordData),
    Srv(RecordData),
    Txt(RecordData),
}

impl ZoneRecord {
    pub fn new(record_type: RecordType, data: RecordData) -> Self {
        match record_type {
            RecordType::Soa => ZoneRecord::Soa(data),
            RecordType::Ns => ZoneRecord::Ns(data),
            RecordType::A => ZoneRecord::A(data),
            RecordType::Cname => ZoneRecord::Cname(data),
            RecordType::Mx => ZoneRecord::Mx(data),
            RecordType::Ptr => ZoneRecord::Ptr(data),
            RecordType::Srv => ZoneRecord::Srv(data),
            RecordType::Txt => ZoneRecord::Txt(data),
        }
    }

    /// Builds a record from a provider element such as
    /// `<a host="www"><result value="1.2.3.4" ttl="300"/></a>`.
    ///
    /// A missing `host` attribute yields an empty host; children other than
    /// `result` elements are ignored.
    pub fn from_element(element: &MarkupElement) -> Result<Self, DomainError> {
        let record_type = RecordType::from_tag(&element.tag)?;
        let host = element.attribute(HOST_ATTRIBUTE).unwrap_or_default();
        let results = element
            .elements()
            .filter(|child| child.tag == RESULT_TAG)
            .map(|child| {
                child
                    .attributes
                    .iter()
                    .map(|(k, v)| (k.as_str(), v.as_str()))
                    .collect::<ResultEntry>()
            })
            .collect();

        Ok(Self::new(record_type, RecordData::new(host, results)))
    }

    pub fn to_element(&self) -> MarkupElement {
        let mut element = MarkupElement::new(self.record_type().as_tag())
            .with_attribute(HOST_ATTRIBUTE, self.host());
        for result in self.results() {
            let mut child = MarkupElement::new(RESULT_TAG);
            for (key, value) in result.iter() {
                child.set_attribute(key, value);
            }
            element.push_element(child);
        }
        element
    }

    pub fn record_type(&self) -> RecordType {
        match self {
            ZoneRecord::Soa(_) => RecordType::Soa,
            ZoneRecord::Ns(_) => RecordType::Ns,
            ZoneRecord::A(_) => RecordType::A,
            ZoneRecord::Cname(_) => RecordType::Cname,
            ZoneRecord::Mx(_) => RecordType::Mx,
            ZoneRecord::Ptr(_) => RecordType::Ptr,
            ZoneRecord::Srv(_) => RecordType::Srv,
            ZoneRecord::Txt(_) => RecordType::Txt,
        }
    }

    pub fn data(&self) -> &RecordData {
        match self {
            ZoneRecord::Soa(data)
            | ZoneRecord::Ns(data)
            | ZoneRecord::A(data)
            | ZoneRecord::Cname(data)
            | ZoneRecord::Mx(data)
            | ZoneRecord::Ptr(data)
            | ZoneRecord::Srv(data)
            | ZoneRecord::Txt(data) => data,
        }
    }

    pub fn host(&self) -> &str {
        &self.data().host
    }

    pub fn results(&self) -> &[ResultEntry] {
        &self.data().results
    }

    /// True when both records address the same `(record_type, host)` slot.
    pub fn same_key(&self, other: &ZoneRecord) -> bool {
        self.matches(other.record_type(), other.host())
    }

    pub fn matches(&self, record_type: RecordType, host: &str) -> bool {
        self.record_type() == record_type && self.host() == host
    }
}

impl fmt::Display for ZoneRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.record_type(), self.host())?;
        for result in self.results() {
            write!(f, " {}", result)?;
        }
        Ok(())
    }
}
