//! Bot data: tracked chats, daily report entries and number check counts.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::chat::ChatKind;

/// Everything the bot remembers between restarts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotData {
    /// Private chats that have talked to the bot.
    #[serde(default)]
    pub users: BTreeSet<i64>,
    /// Groups and supergroups the bot has seen messages in.
    #[serde(default)]
    pub groups: BTreeSet<i64>,
    /// How many times each canonical number has been checked.
    #[serde(default)]
    pub check_records: BTreeMap<String, u64>,
    /// Report lines per chat, per report-day key.
    #[serde(default)]
    pub group_data: BTreeMap<i64, BTreeMap<String, Vec<String>>>,
}

/// Counters shown by `/stats`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LedgerStats {
    pub users: usize,
    pub groups: usize,
    pub checked_numbers: usize,
}

impl BotData {
    /// Remember a chat for broadcasts and stats.
    ///
    /// Returns `true` when the chat was not tracked before.
    pub fn register_chat(&mut self, chat_id: i64, kind: ChatKind) -> bool {
        match kind {
            ChatKind::Private => self.users.insert(chat_id),
            ChatKind::Group | ChatKind::Supergroup => self.groups.insert(chat_id),
            ChatKind::Channel => false,
        }
    }

    #[must_use]
    pub fn is_tracked(&self, chat_id: i64) -> bool {
        self.users.contains(&chat_id) || self.groups.contains(&chat_id)
    }

    /// Record one more check of `number` and return the new count.
    pub fn check_number(&mut self, number: &str) -> u64 {
        let count = self.check_records.entry(number.to_string()).or_insert(0);
        *count += 1;
        *count
    }

    pub fn append_entry(&mut self, chat_id: i64, day: &str, line: String) {
        self.group_data
            .entry(chat_id)
            .or_default()
            .entry(day.to_string())
            .or_default()
            .push(line);
    }

    #[must_use]
    pub fn entries(&self, chat_id: i64, day: &str) -> &[String] {
        self.group_data
            .get(&chat_id)
            .and_then(|days| days.get(day))
            .map_or(&[], Vec::as_slice)
    }

    /// Drop one day's entries for a chat. Returns whether anything was removed.
    pub fn clear_day(&mut self, chat_id: i64, day: &str) -> bool {
        self.group_data
            .get_mut(&chat_id)
            .is_some_and(|days| days.remove(day).is_some())
    }

    /// Drop every day's entries for a chat. Returns whether anything was removed.
    pub fn clear_chat(&mut self, chat_id: i64) -> bool {
        self.group_data.remove(&chat_id).is_some()
    }

    #[must_use]
    pub fn stats(&self) -> LedgerStats {
        LedgerStats {
            users: self.users.len(),
            groups: self.groups.len(),
            checked_numbers: self.check_records.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_chats_by_kind() {
        let mut data = BotData::default();
        assert!(data.register_chat(10, ChatKind::Private));
        assert!(!data.register_chat(10, ChatKind::Private));
        assert!(data.register_chat(-100, ChatKind::Group));
        assert!(data.register_chat(-200, ChatKind::Supergroup));
        assert!(!data.register_chat(-300, ChatKind::Channel));

        assert_eq!(data.users.len(), 1);
        assert_eq!(data.groups.len(), 2);
    }

    #[test]
    fn check_counts_increase_per_number() {
        let mut data = BotData::default();
        assert_eq!(data.check_number("0911111111"), 1);
        assert_eq!(data.check_number("0911111111"), 2);
        assert_eq!(data.check_number("0922222222"), 1);
        assert_eq!(data.stats().checked_numbers, 2);
    }

    #[test]
    fn entries_are_kept_per_chat_and_day() {
        let mut data = BotData::default();
        data.append_entry(-1, "2024-05-17", "a".into());
        data.append_entry(-1, "2024-05-17", "b".into());
        data.append_entry(-1, "2024-05-18", "c".into());
        data.append_entry(-2, "2024-05-17", "d".into());

        assert_eq!(data.entries(-1, "2024-05-17"), ["a", "b"]);
        assert_eq!(data.entries(-1, "2024-05-18"), ["c"]);
        assert_eq!(data.entries(-2, "2024-05-17"), ["d"]);
        assert!(data.entries(-3, "2024-05-17").is_empty());
    }

    #[test]
    fn clear_day_only_touches_that_day() {
        let mut data = BotData::default();
        data.append_entry(-1, "2024-05-17", "a".into());
        data.append_entry(-1, "2024-05-18", "b".into());

        assert!(data.clear_day(-1, "2024-05-17"));
        assert!(!data.clear_day(-1, "2024-05-17"));
        assert!(!data.clear_day(-9, "2024-05-17"));
        assert_eq!(data.entries(-1, "2024-05-18"), ["b"]);
    }

    #[test]
    fn clear_chat_drops_all_days() {
        let mut data = BotData::default();
        data.append_entry(-1, "2024-05-17", "a".into());
        data.append_entry(-1, "2024-05-18", "b".into());

        assert!(data.clear_chat(-1));
        assert!(!data.clear_chat(-1));
        assert!(data.group_data.is_empty());
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let mut data = BotData::default();
        data.register_chat(5, ChatKind::Private);
        data.check_number("1234567");
        data.append_entry(-1, "2024-05-17", "x    y    z".into());

        let json = serde_json::to_string(&data).unwrap();
        let back: BotData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let data: BotData = serde_json::from_str(r#"{"users":[1]}"#).unwrap();
        assert_eq!(data.users.len(), 1);
        assert!(data.groups.is_empty());
        assert!(data.group_data.is_empty());
    }
}
