use chrono::{DateTime, Local};

use crate::error::{Result, TagmakerError};

/// Timestamp layout for generated tag names: two-digit year, month, day,
/// hour and minute, zero-padded, no seconds. Lexically sortable.
const TIMESTAMP_FORMAT: &str = "%y%m%d%H%M";

/// Represents a git tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    /// Create a tag from an existing name
    pub fn new(name: impl Into<String>) -> Self {
        Tag { name: name.into() }
    }

    /// Build the tag name for an environment prefix at a point in time
    /// Example: prefix="develop", 2024-06-01 10:30 -> "develop_2406011030"
    pub fn timestamped(prefix: &str, at: DateTime<Local>) -> Self {
        Tag {
            name: format!("{}_{}", prefix, at.format(TIMESTAMP_FORMAT)),
        }
    }
}

/// Naming pattern shared by all generated tags (`<prefix>_<timestamp>`)
#[derive(Debug, Clone)]
pub struct TagPattern {
    regex: regex::Regex,
}

impl TagPattern {
    /// Create a pattern accepting any of the given prefixes
    pub fn for_prefixes<I, S>(prefixes: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let escaped: Vec<String> = prefixes
            .into_iter()
            .map(|p| regex::escape(p.as_ref()))
            .collect();

        if escaped.is_empty() {
            return Err(TagmakerError::tag("Pattern requires at least one prefix"));
        }

        let regex = regex::Regex::new(&format!(r"^(?:{})_\d{{10}}$", escaped.join("|")))
            .map_err(|e| TagmakerError::tag(format!("Invalid pattern: {}", e)))?;

        Ok(TagPattern { regex })
    }

    /// Validate if a tag name matches this pattern
    pub fn matches(&self, tag: &str) -> bool {
        self.regex.is_match(tag)
    }
}
