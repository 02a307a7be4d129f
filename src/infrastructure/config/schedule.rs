//! Report-day schedule configuration.

use serde::Deserialize;

use crate::domain::{parse_cutoff, parse_utc_offset, ReportClock};
use crate::error::ConfigError;

/// When a report day starts, in the reporting time zone.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Fixed UTC offset of the reporting time zone, `+HH:MM`.
    pub utc_offset: String,
    /// Local time at which a new report day begins, `HH:MM`.
    pub cutoff: String,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            utc_offset: "+06:30".into(),
            cutoff: "18:30".into(),
        }
    }
}

impl ScheduleConfig {
    /// Build the report clock.
    ///
    /// # Errors
    ///
    /// Returns an error when the offset or cutoff is malformed.
    pub fn clock(&self) -> Result<ReportClock, ConfigError> {
        let offset = parse_utc_offset(&self.utc_offset).ok_or_else(|| ConfigError::InvalidValue {
            field: "utc_offset",
            reason: format!("expected +HH:MM, got {:?}", self.utc_offset),
        })?;
        let cutoff = parse_cutoff(&self.cutoff).ok_or_else(|| ConfigError::InvalidValue {
            field: "cutoff",
            reason: format!("expected HH:MM, got {:?}", self.cutoff),
        })?;
        Ok(ReportClock::new(offset, cutoff))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn default_schedule_is_yangon_evening() {
        let clock = ScheduleConfig::default().clock().unwrap();
        assert_eq!(clock.offset().local_minus_utc(), 6 * 3600 + 30 * 60);
        assert_eq!(clock.cutoff(), NaiveTime::from_hms_opt(18, 30, 0).unwrap());
    }

    #[test]
    fn rejects_bad_offset() {
        let schedule = ScheduleConfig {
            utc_offset: "Asia/Yangon".into(),
            ..ScheduleConfig::default()
        };
        assert!(matches!(
            schedule.clock(),
            Err(ConfigError::InvalidValue { field: "utc_offset", .. })
        ));
    }

    #[test]
    fn rejects_bad_cutoff() {
        let schedule = ScheduleConfig {
            cutoff: "25:00".into(),
            ..ScheduleConfig::default()
        };
        assert!(matches!(
            schedule.clock(),
            Err(ConfigError::InvalidValue { field: "cutoff", .. })
        ));
    }
}
