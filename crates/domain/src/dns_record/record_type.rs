use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Record kinds understood by the Cotendo DNS configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    Soa,
    Ns,
    A,
    Cname,
    Mx,
    Ptr,
    Srv,
    Txt,
}

impl RecordType {
    /// Fixed registry of every kind the provider markup may carry.
    pub const ALL: [RecordType; 8] = [
        RecordType::Soa,
        RecordType::Ns,
        RecordType::A,
        RecordType::Cname,
        RecordType::Mx,
        RecordType::Ptr,
        RecordType::Srv,
        RecordType::Txt,
    ];

    /// Markup tag used by the provider for this kind.
    pub fn as_tag(&self) -> &'static str {
        match self {
            RecordType::Soa => "soa",
            RecordType::Ns => "ns",
            RecordType::A => "a",
            RecordType::Cname => "cname",
            RecordType::Mx => "mx",
            RecordType::Ptr => "ptr",
            RecordType::Srv => "srv",
            RecordType::Txt => "txt",
        }
    }

    /// Exact, case-sensitive tag lookup against [`RecordType::ALL`].
    pub fn from_tag(tag: &str) -> Result<Self, DomainError> {
        Self::ALL
            .iter()
            .copied()
            .find(|record_type| record_type.as_tag() == tag)
            .ok_or_else(|| DomainError::UnknownRecordType(tag.to_string()))
    }

    /// SOA and NS are zone singletons the provider manages itself; they are
    /// never part of the visible record set.
    pub fn is_hidden(&self) -> bool {
        matches!(self, RecordType::Soa | RecordType::Ns)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

impl FromStr for RecordType {
    type Err = DomainError;

    /// Lenient variant of [`RecordType::from_tag`] for user input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(&s.trim().to_lowercase())
            .map_err(|_| DomainError::UnknownRecordType(s.to_string()))
    }
}
