use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One value nested under a record (an A target, an MX exchanger, ...).
///
/// Equality, ordering and hashing cover the whole attribute mapping, so two
/// entries are the same result only when every attribute matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultEntry(BTreeMap<String, String>);

impl ResultEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn value(&self) -> Option<&str> {
        self.get("value")
    }

    pub fn ttl(&self) -> Option<u32> {
        self.parsed("ttl")
    }

    pub fn priority(&self) -> Option<u16> {
        self.parsed("priority")
    }

    pub fn weight(&self) -> Option<u16> {
        self.parsed("weight")
    }

    pub fn port(&self) -> Option<u16> {
        self.parsed("port")
    }

    fn parsed<T: std::str::FromStr>(&self, key: &str) -> Option<T> {
        self.get(key).and_then(|raw| raw.trim().parse().ok())
    }
}

impl<K, V> FromIterator<(K, V)> for ResultEntry
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<BTreeMap<String, String>> for ResultEntry {
    fn from(attributes: BTreeMap<String, String>) -> Self {
        Self(attributes)
    }
}

impl fmt::Display for ResultEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}={}", key, value)?;
        }
        write!(f, "]")
    }
}
