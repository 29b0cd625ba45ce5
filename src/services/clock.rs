//! Clock adapter
//!
//! Current time in the configured target timezone and its spoken format.

use crate::config::ClockConfig;
use crate::render::ordinal_suffix;
use chrono::{DateTime, Datelike, FixedOffset, Offset, Utc};
use tracing::warn;

/// Source of the current time at the target location
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;

    /// Spoken name of the target location
    fn location(&self) -> &str;

    /// Formatted date and time; the clock never fails
    fn fetch(&self) -> String {
        format_date_time(&self.now())
    }
}

/// Wall clock pinned to a fixed UTC offset
#[derive(Debug, Clone)]
pub struct SystemClock {
    offset: FixedOffset,
    location: String,
}

impl SystemClock {
    pub fn new(config: &ClockConfig) -> Self {
        let seconds = config.utc_offset_minutes.saturating_mul(60);
        let offset = FixedOffset::east_opt(seconds).unwrap_or_else(|| {
            warn!(
                "⚠️ Invalid UTC offset {} minutes, using UTC",
                config.utc_offset_minutes
            );
            Utc.fix()
        });

        Self {
            offset,
            location: config.location.clone(),
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.offset)
    }

    fn location(&self) -> &str {
        &self.location
    }
}

/// "Monday, the 1st of January, 2024, 3:05PM"
pub fn format_date_time(now: &DateTime<FixedOffset>) -> String {
    let day = now.day();
    let pattern = format!("%A, the {}{} of %B, %Y, %-I:%M%p", day, ordinal_suffix(day));
    now.format(&pattern).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn colombo() -> FixedOffset {
        FixedOffset::east_opt(330 * 60).unwrap()
    }

    #[test]
    fn test_format_date_time() {
        let dt = colombo().with_ymd_and_hms(2024, 1, 1, 15, 5, 0).unwrap();
        assert_eq!(
            format_date_time(&dt),
            "Monday, the 1st of January, 2024, 3:05PM"
        );
    }

    #[test]
    fn test_format_drops_hour_leading_zero_only() {
        let dt = colombo().with_ymd_and_hms(2023, 3, 22, 9, 7, 0).unwrap();
        assert_eq!(
            format_date_time(&dt),
            "Wednesday, the 22nd of March, 2023, 9:07AM"
        );

        let dt = colombo().with_ymd_and_hms(2023, 3, 13, 0, 30, 0).unwrap();
        assert_eq!(
            format_date_time(&dt),
            "Monday, the 13th of March, 2023, 12:30AM"
        );
    }

    #[test]
    fn test_system_clock_offset() {
        let clock = SystemClock::new(&ClockConfig::default());
        assert_eq!(clock.now().offset().local_minus_utc(), 330 * 60);
        assert_eq!(clock.location(), "Colombo Sri Lanka");
    }

    #[test]
    fn test_invalid_offset_falls_back_to_utc() {
        let clock = SystemClock::new(&ClockConfig {
            location: "Nowhere".into(),
            utc_offset_minutes: 100_000,
        });
        assert_eq!(clock.now().offset().local_minus_utc(), 0);
    }
}
