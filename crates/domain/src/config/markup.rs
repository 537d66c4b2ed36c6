use serde::{Deserialize, Serialize};

/// Tags the provider emits without a closing counterpart.
pub const DEFAULT_SELF_CLOSING_TAGS: &[&str] = &["result"];

/// Settings for the tolerant markup repair pass run before parsing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MarkupConfig {
    #[serde(default = "default_self_closing_tags")]
    pub self_closing_tags: Vec<String>,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            self_closing_tags: default_self_closing_tags(),
        }
    }
}

impl MarkupConfig {
    pub fn is_self_closing(&self, tag: &str) -> bool {
        self.self_closing_tags.iter().any(|t| t == tag)
    }
}

fn default_self_closing_tags() -> Vec<String> {
    DEFAULT_SELF_CLOSING_TAGS
        .iter()
        .map(|tag| tag.to_string())
        .collect()
}
