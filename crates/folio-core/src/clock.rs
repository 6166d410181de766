//! Local clock shown on the profile.
//!
//! The clock is read on every render and never cached, so each page shows the
//! wall-clock time in the owner's timezone at the moment it was produced.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Where the current instant comes from.
pub trait TimeSource: Send + Sync {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the host clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedTimeSource(pub DateTime<Utc>);

impl TimeSource for FixedTimeSource {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// A formatted reading of the clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockSnapshot {
    /// 24-hour `HH:MM` in the target timezone
    pub display_text: String,
}

impl fmt::Display for ClockSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_text)
    }
}

/// Converts the current instant to a fixed timezone.
#[derive(Clone)]
pub struct LocalClock {
    tz: Tz,
    source: Arc<dyn TimeSource>,
}

impl LocalClock {
    /// A clock for `tz` backed by the host clock.
    pub fn new(tz: Tz) -> Self {
        Self::with_source(tz, Arc::new(SystemTimeSource))
    }

    /// A clock for `tz` backed by an arbitrary time source.
    pub fn with_source(tz: Tz, source: Arc<dyn TimeSource>) -> Self {
        Self { tz, source }
    }

    /// The target timezone.
    pub fn tz(&self) -> Tz {
        self.tz
    }

    /// Read the clock.
    pub fn now(&self) -> ClockSnapshot {
        format_instant(self.source.now(), self.tz)
    }
}

impl fmt::Debug for LocalClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalClock").field("tz", &self.tz).finish()
    }
}

/// Format `instant` as `HH:MM` in `tz`.
pub fn format_instant(instant: DateTime<Utc>, tz: Tz) -> ClockSnapshot {
    ClockSnapshot {
        display_text: instant.with_timezone(&tz).format("%H:%M").to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn test_fixed_offset_zone() {
        // Etc/GMT-2 is UTC+2 all year (POSIX sign inversion)
        let clock = LocalClock::with_source(
            chrono_tz::Etc::GMTMinus2,
            Arc::new(FixedTimeSource(at(2024, 1, 10, 14, 30))),
        );
        assert_eq!(clock.now().display_text, "16:30");
    }

    #[test]
    fn test_paris_summer_time() {
        let clock = LocalClock::with_source(
            chrono_tz::Europe::Paris,
            Arc::new(FixedTimeSource(at(2024, 7, 1, 14, 30))),
        );
        assert_eq!(clock.now().to_string(), "16:30");
    }

    #[test]
    fn test_paris_winter_time() {
        let snapshot = format_instant(at(2024, 1, 15, 14, 30), chrono_tz::Europe::Paris);
        assert_eq!(snapshot.display_text, "15:30");
    }

    #[test]
    fn test_wraps_past_midnight_in_24h_format() {
        let snapshot = format_instant(at(2024, 7, 1, 23, 5), chrono_tz::Europe::Paris);
        assert_eq!(snapshot.display_text, "01:05");
    }

    #[test]
    fn test_system_clock_formats() {
        let text = LocalClock::new(chrono_tz::UTC).now().display_text;
        assert_eq!(text.len(), 5);
        assert_eq!(&text[2..3], ":");
    }

    proptest! {
        #[test]
        fn test_utc_zone_matches_host_reading(secs in 0i64..4_102_444_800) {
            let instant = DateTime::<Utc>::from_timestamp(secs, 0).unwrap();
            let snapshot = format_instant(instant, chrono_tz::UTC);
            prop_assert_eq!(snapshot.display_text, instant.format("%H:%M").to_string());
        }
    }
}
