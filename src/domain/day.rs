//! Report-day keys.
//!
//! Deposit reports are collected per working day rather than per calendar
//! day. A working day starts at the configured cut-off time in the
//! configured UTC offset; anything before the cut-off still belongs to the
//! previous day's sheet.

use chrono::{DateTime, Duration, FixedOffset, NaiveTime, Offset, Utc};

/// Format of a report-day key, e.g. `2024-05-17`.
pub const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

/// Asia/Yangon (UTC+06:30, no daylight saving).
pub const DEFAULT_UTC_OFFSET_SECS: i32 = 6 * 3600 + 30 * 60;

/// Computes report-day keys from wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportClock {
    offset: FixedOffset,
    cutoff: NaiveTime,
}

impl ReportClock {
    #[must_use]
    pub const fn new(offset: FixedOffset, cutoff: NaiveTime) -> Self {
        Self { offset, cutoff }
    }

    #[must_use]
    pub const fn offset(&self) -> FixedOffset {
        self.offset
    }

    #[must_use]
    pub const fn cutoff(&self) -> NaiveTime {
        self.cutoff
    }

    /// Key for the working day that contains `now`.
    #[must_use]
    pub fn day_key(&self, now: DateTime<Utc>) -> String {
        let local = now.with_timezone(&self.offset);
        let date = if local.time() < self.cutoff {
            local.date_naive() - Duration::days(1)
        } else {
            local.date_naive()
        };
        date.format(DAY_KEY_FORMAT).to_string()
    }

    /// Key for the working day at the current instant.
    #[must_use]
    pub fn current_key(&self) -> String {
        self.day_key(Utc::now())
    }
}

impl Default for ReportClock {
    fn default() -> Self {
        let offset = FixedOffset::east_opt(DEFAULT_UTC_OFFSET_SECS).unwrap_or_else(|| Utc.fix());
        let cutoff = NaiveTime::from_hms_opt(18, 30, 0).unwrap_or(NaiveTime::MIN);
        Self::new(offset, cutoff)
    }
}

/// Parse a `+HH:MM` / `-HH:MM` UTC offset.
pub fn parse_utc_offset(value: &str) -> Option<FixedOffset> {
    let value = value.trim();
    let (sign, rest) = match value.chars().next()? {
        '+' => (1, &value[1..]),
        '-' => (-1, &value[1..]),
        _ => (1, value),
    };
    let (hours, minutes) = rest.split_once(':')?;
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if !(0..=23).contains(&hours) || !(0..=59).contains(&minutes) {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// Parse an `HH:MM` or `HH:MM:SS` cut-off time.
pub fn parse_cutoff(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .ok()
}
