//! Dose window computation: the next local occurrence of each dose hour,
//! expressed as a UTC start/end pair.

use chrono::{DateTime, Duration, FixedOffset, Timelike, Utc};

/// Reminder length for a single dose.
pub const DOSE_DURATION_MINUTES: i64 = 15;

#[derive(Clone, Debug, PartialEq)]
pub struct DoseWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Compute one window per dose hour, anchored to the next occurrence of
/// `hour:00:00` relative to `now_local`. An hour that has already passed
/// today starts tomorrow instead.
///
/// `now_local` carries the UTC offset used for the conversion, so the
/// caller captures the local offset at the moment of computation rather
/// than assuming a fixed one.
pub fn dose_windows(hours: &[u32], now_local: DateTime<FixedOffset>) -> Vec<DoseWindow> {
    hours
        .iter()
        .map(|&hour| {
            let mut start = now_local
                .with_hour(hour)
                .and_then(|dt| dt.with_minute(0))
                .and_then(|dt| dt.with_second(0))
                .and_then(|dt| dt.with_nanosecond(0))
                .expect("dose hours are valid clock hours");
            if start < now_local {
                start += Duration::days(1);
            }
            let start = start.with_timezone(&Utc);
            DoseWindow {
                start,
                end: start + Duration::minutes(DOSE_DURATION_MINUTES),
            }
        })
        .collect()
}
