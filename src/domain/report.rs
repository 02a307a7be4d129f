//! Deposit report extraction and daily digests.
//!
//! A deposit report is a free-text form (see `/form`) with labelled lines.
//! Only three fields are kept: the report date, the khaifa (agent) name and
//! the customer's contact. They are flattened into a single line that is
//! stored per chat and per report day.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

/// Placeholder for a field that is missing from a report.
pub const MISSING: &str = "N/A";

/// Separator between fields of a stored entry line.
pub const FIELD_SEPARATOR: &str = "    ";

/// Line placed between khaifa groups in a digest.
pub const GROUP_SEPARATOR: &str = "------------------------------------";

/// Longest digest that fits in a single Telegram message.
pub const MESSAGE_LIMIT: usize = 4096;

/// Length a digest is cut to when it exceeds [`MESSAGE_LIMIT`].
pub const TRUNCATED_LENGTH: usize = 4000;

static KHAIFA_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)(?:Khaifa|Khat)\s*[-–]?\s*(.+?)(?:\r?\n|$)").expect("valid khaifa regex")
});

static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)Date\s*[-–]?\s*(.+?)(?:\n|$)").expect("valid date regex"));

static CONTACT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)(?:Gmail|Email|Phone number|Phone)\s*[-–]?\s*(.+?)(?:\n|$)")
        .expect("valid contact regex")
});

/// Fields extracted from one deposit report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub date: String,
    pub khaifa: String,
    pub contact: String,
}

impl ReportEntry {
    /// Extract a report from free text.
    ///
    /// Returns `None` unless the text mentions both `khaifa` and `date`
    /// (case-insensitive). Individual fields that cannot be found are
    /// filled with [`MISSING`].
    #[must_use]
    pub fn extract(text: &str) -> Option<Self> {
        if !is_report(text) {
            return None;
        }

        Some(Self {
            date: capture(&DATE_PATTERN, text),
            khaifa: capture(&KHAIFA_PATTERN, text),
            contact: capture(&CONTACT_PATTERN, text),
        })
    }

    /// The single-line form stored in the ledger and echoed to the chat.
    #[must_use]
    pub fn to_line(&self) -> String {
        [self.date.as_str(), self.khaifa.as_str(), self.contact.as_str()].join(FIELD_SEPARATOR)
    }
}

/// True when the text carries both required labels.
#[must_use]
pub fn is_report(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.contains("khaifa") && lower.contains("date")
}

fn capture(pattern: &Regex, text: &str) -> String {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| MISSING.to_string())
}

/// Grouping key of a stored entry line: the khaifa name without spaces,
/// lowercased.
#[must_use]
pub fn group_key(line: &str) -> String {
    let khaifa = line
        .split(FIELD_SEPARATOR)
        .nth(1)
        .map(str::trim)
        .unwrap_or(MISSING);

    if khaifa == MISSING {
        return MISSING.to_lowercase();
    }
    khaifa.replace(' ', "").to_lowercase()
}

/// Render a day's entries grouped by khaifa.
///
/// Groups are ordered by key and keep their entries in arrival order.
/// Returns `None` when there is nothing to show.
#[must_use]
pub fn render_digest(entries: &[String]) -> Option<String> {
    if entries.is_empty() {
        return None;
    }

    let mut groups: BTreeMap<String, Vec<&str>> = BTreeMap::new();
    for entry in entries {
        groups.entry(group_key(entry)).or_default().push(entry);
    }

    let mut lines: Vec<&str> = Vec::with_capacity(entries.len() + groups.len());
    for (index, group) in groups.values().enumerate() {
        if index > 0 {
            lines.push(GROUP_SEPARATOR);
        }
        lines.extend(group.iter().copied());
    }

    Some(lines.join("\n"))
}

/// A digest prepared for sending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Digest {
    /// Fits in one message.
    Full(String),
    /// Too long; only the leading part is sent, after a warning.
    Truncated(String),
}

impl Digest {
    #[must_use]
    pub fn fit(text: String) -> Self {
        if text.chars().count() > MESSAGE_LIMIT {
            Self::Truncated(text.chars().take(TRUNCATED_LENGTH).collect())
        } else {
            Self::Full(text)
        }
    }
}
