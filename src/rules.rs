//! Rule records and the delimited text they are parsed from.
//!
//! The reminders script renders each item as `title|body|id` and AppleScript
//! joins the list items with `", "`, so the raw output looks like
//!
//! ```text
//! Reply within a day|from:boss@corp|x-apple-reminder://1, Archive||x-apple-reminder://2
//! ```
//!
//! Neither delimiter is escaped. A title or note containing `|` or `", "`
//! shifts fields or splits the entry; such entries come out wrong or are
//! dropped. This is a limitation of the text format.

use serde::{Deserialize, Serialize};

/// Separator between items in the script output.
pub const ENTRY_DELIMITER: &str = ", ";
/// Separator between the fields of one item.
pub const FIELD_DELIMITER: char = '|';

/// One reminder, shaped for the sync endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleRecord {
    /// Reminder title.
    pub rule_name: String,
    /// Reminder notes; empty when the reminder has none.
    pub criteria_logic: String,
    /// Identifier assigned by the reminders application.
    pub source_id: String,
}

impl RuleRecord {
    pub fn new(
        rule_name: impl Into<String>,
        criteria_logic: impl Into<String>,
        source_id: impl Into<String>,
    ) -> Self {
        Self {
            rule_name: rule_name.into(),
            criteria_logic: criteria_logic.into(),
            source_id: source_id.into(),
        }
    }

    /// Parse one `title|body|id` entry.
    ///
    /// Returns `None` for entries with fewer than three fields. Fields past
    /// the third are ignored and every field is trimmed.
    pub fn parse_entry(entry: &str) -> Option<Self> {
        let mut parts = entry.split(FIELD_DELIMITER).map(str::trim);
        let rule_name = parts.next()?;
        let criteria_logic = parts.next()?;
        let source_id = parts.next()?;
        Some(Self::new(rule_name, criteria_logic, source_id))
    }
}

/// Parse the whole script output into records, preserving order.
///
/// Blank output yields an empty vector. Malformed entries are dropped.
pub fn parse_rules(raw: &str) -> Vec<RuleRecord> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(ENTRY_DELIMITER)
        .filter_map(RuleRecord::parse_entry)
        .collect()
}
