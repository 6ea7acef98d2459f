//! Time normalization for todo windows.
//!
//! Client input arrives as optional, possibly stale ISO-8601 strings. The
//! functions here turn it into a [`Window`] that always ends after it starts
//! and lasts at least [`WindowPolicy::min_duration`].

use jiff::{SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};

use crate::error::{AgendaError, Result};

/// Shortest window a todo may have.
pub const MIN_DURATION: SignedDuration = SignedDuration::from_mins(5);

/// Window length used when a todo is created without an end.
pub const DEFAULT_DURATION: SignedDuration = SignedDuration::from_mins(25);

/// A `[start_at, end_at]` instant pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Window {
    pub start_at: Timestamp,
    pub end_at: Timestamp,
}

impl Window {
    /// Builds a window, rejecting one that does not end after it starts.
    ///
    /// Normalization never produces such a window, so hitting this error
    /// means a logic defect upstream; it is reported rather than corrected.
    pub fn checked(start_at: Timestamp, end_at: Timestamp) -> Result<Self> {
        if end_at <= start_at {
            return Err(AgendaError::InvalidRange {
                start: start_at,
                end: end_at,
            });
        }
        Ok(Self { start_at, end_at })
    }

    /// Whether `now` lies inside the window, boundaries included.
    pub fn contains(&self, now: Timestamp) -> bool {
        self.start_at <= now && now <= self.end_at
    }

    /// Length of the window.
    pub fn duration(&self) -> SignedDuration {
        self.end_at.duration_since(self.start_at)
    }
}

/// Durations governing window normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowPolicy {
    /// Windows shorter than this are stretched to exactly this length
    pub min_duration: SignedDuration,
    /// Length of a freshly created window when no end is supplied
    pub default_duration: SignedDuration,
}

impl Default for WindowPolicy {
    fn default() -> Self {
        Self {
            min_duration: MIN_DURATION,
            default_duration: DEFAULT_DURATION,
        }
    }
}

impl WindowPolicy {
    /// Validates the policy itself; both durations must be positive.
    pub fn validate(&self) -> Result<()> {
        if !self.min_duration.is_positive() {
            return Err(AgendaError::Configuration {
                message: format!("minimum duration must be positive, got {:?}", self.min_duration),
            });
        }
        if !self.default_duration.is_positive() {
            return Err(AgendaError::Configuration {
                message: format!(
                    "default duration must be positive, got {:?}",
                    self.default_duration
                ),
            });
        }
        Ok(())
    }

    /// Normalizes the window of a todo being created.
    ///
    /// A supplied start is clamped to `now`; a missing one becomes `now`. A
    /// missing end defaults to `start + default_duration`. The end is then
    /// pushed out to honor the minimum duration.
    pub fn normalize_new(
        &self,
        start_at: Option<Timestamp>,
        end_at: Option<Timestamp>,
        now: Timestamp,
    ) -> Result<Window> {
        let start = start_at.map_or(now, |s| clamp_to_future(s, now));
        let end = match end_at {
            Some(end) => end,
            None => offset(start, self.default_duration)?,
        };
        let end = ensure_minimum_duration(start, end, self.min_duration)?;
        Window::checked(start, end)
    }

    /// Normalizes the window of an existing todo being updated.
    ///
    /// Only a start supplied in this request is clamped; an inherited start
    /// is kept even when it lies in the past. The end (supplied or
    /// inherited) is measured against the resulting start.
    pub fn normalize_update(
        &self,
        existing: Window,
        start_at: Option<Timestamp>,
        end_at: Option<Timestamp>,
        now: Timestamp,
    ) -> Result<Window> {
        let start = start_at.map_or(existing.start_at, |s| clamp_to_future(s, now));
        let end = end_at.unwrap_or(existing.end_at);
        let end = ensure_minimum_duration(start, end, self.min_duration)?;
        Window::checked(start, end)
    }
}

/// Parses an ISO-8601 instant such as `2025-03-01T09:00:00Z`.
///
/// Returns `None` when the text is not a valid instant; the caller decides
/// whether that is an omission or an error.
pub fn parse_instant(raw: &str) -> Option<Timestamp> {
    raw.trim().parse::<Timestamp>().ok()
}

/// Interprets an optional, client-supplied timestamp field.
///
/// Absent and blank values mean "not supplied". Anything else must parse,
/// otherwise the request is rejected with [`AgendaError::InvalidInput`].
pub fn parse_supplied(field: &str, raw: Option<&str>) -> Result<Option<Timestamp>> {
    match raw {
        None => Ok(None),
        Some(text) if text.trim().is_empty() => Ok(None),
        Some(text) => parse_instant(text).map(Some).ok_or_else(|| {
            AgendaError::invalid_input(field).with_reason(format!(
                "'{text}' is not an ISO-8601 timestamp (expected e.g. 2025-03-01T09:00:00Z)"
            ))
        }),
    }
}

/// Returns `candidate` if it is not in the past, else `now`.
pub fn clamp_to_future(candidate: Timestamp, now: Timestamp) -> Timestamp {
    if candidate >= now {
        candidate
    } else {
        now
    }
}

/// Returns `end_at`, or `start_at + min_duration` when the window would be
/// inverted or shorter than `min_duration`.
pub fn ensure_minimum_duration(
    start_at: Timestamp,
    end_at: Timestamp,
    min_duration: SignedDuration,
) -> Result<Timestamp> {
    if end_at <= start_at || end_at.duration_since(start_at) < min_duration {
        offset(start_at, min_duration)
    } else {
        Ok(end_at)
    }
}

fn offset(start: Timestamp, duration: SignedDuration) -> Result<Timestamp> {
    start
        .checked_add(duration)
        .map_err(|_| AgendaError::InvalidRange {
            start,
            end: Timestamp::MAX,
        })
}
