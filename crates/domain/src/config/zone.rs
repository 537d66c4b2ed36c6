use serde::{Deserialize, Serialize};

/// Options for the record set and the configuration it serializes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ZoneConfig {
    /// Keep SRV records when sorting. The provider tooling historically
    /// drops them, so this is off unless asked for.
    #[serde(default)]
    pub retain_srv: bool,

    /// Host written on the SOA placeholder of every serialized config.
    #[serde(default = "default_placeholder_host")]
    pub soa_host: String,

    /// Host written on the NS placeholder of every serialized config.
    #[serde(default = "default_placeholder_host")]
    pub ns_host: String,
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            retain_srv: false,
            soa_host: default_placeholder_host(),
            ns_host: default_placeholder_host(),
        }
    }
}

fn default_placeholder_host() -> String {
    "@".to_string()
}
