//! Date, time and offset display utilities.
//!
//! Timestamps are shown in the system timezone; countdown offsets are shown
//! as coarse human durations relative to "now".

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// A wrapper around `Timestamp` that formats it in the system timezone as
/// `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// A signed millisecond offset from now, shown as `in 1h 05m`,
/// `3m 20s ago` or `now`.
///
/// Sub-second remainders are dropped.
///
/// # Examples
///
/// ```rust
/// use horizon_core::display::RelativeOffset;
///
/// assert_eq!(RelativeOffset(90_000).to_string(), "in 1m 30s");
/// assert_eq!(RelativeOffset(-7_260_000).to_string(), "2h 01m ago");
/// assert_eq!(RelativeOffset(400).to_string(), "now");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelativeOffset(pub i64);

impl fmt::Display for RelativeOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.0.unsigned_abs() / 1000;
        if total == 0 {
            return write!(f, "now");
        }

        let (days, hours) = (total / 86_400, total / 3600 % 24);
        let (minutes, seconds) = (total / 60 % 60, total % 60);
        let span = if days > 0 {
            format!("{days}d {hours:02}h")
        } else if hours > 0 {
            format!("{hours}h {minutes:02}m")
        } else if minutes > 0 {
            format!("{minutes}m {seconds:02}s")
        } else {
            format!("{seconds}s")
        };

        if self.0 > 0 {
            write!(f, "in {span}")
        } else {
            write!(f, "{span} ago")
        }
    }
}
