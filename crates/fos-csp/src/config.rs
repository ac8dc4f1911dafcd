//! Parser Configuration

use serde::{Deserialize, Serialize};

/// What to do when a directive name repeats within one policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// Abort the whole parse
    #[default]
    Reject,
    /// Keep the first occurrence and drop later ones
    IgnoreLater,
}

/// Parser configuration options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Handling of case-insensitive duplicate directive names
    pub duplicates: DuplicatePolicy,
}

impl ParserConfig {
    /// Configuration that drops later duplicates instead of failing
    pub fn lenient() -> Self {
        Self { duplicates: DuplicatePolicy::IgnoreLater }
    }
}
