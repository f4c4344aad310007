//! Derivation of a recurring reminder calendar from extracted label data.
//!
//! Split into three units: frequency classification ([`rules`]), dose
//! window computation ([`events`]), and document rendering ([`ics`]).
//! [`derive_schedule`] composes them.

mod events;
mod ics;
mod rules;

pub use events::{DOSE_DURATION_MINUTES, DoseWindow, dose_windows};
pub use ics::{CalendarEvent, render_calendar};
pub use rules::{DOSE_RULES, DoseRule, classify};

use chrono::{DateTime, FixedOffset, Utc};
use uuid::Uuid;

use crate::gemini::ExtractionResult;

pub const SCHEDULE_GENERATED: &str = "Successfully generated daily medication schedule.";
pub const SCHEDULE_UNDETERMINED: &str =
    "Frequency could not be determined for automatic scheduling.";

/// Outcome of a derivation: either a complete calendar document or an
/// explanation of why no schedule could be produced. An undetermined
/// frequency (e.g. "TAKE AS NEEDED") is a normal outcome, not an error.
#[derive(Clone, Debug)]
pub struct DerivedSchedule {
    pub calendar: Option<String>,
    pub status: &'static str,
}

/// Derive the reminder calendar for one extraction.
///
/// `now_local` anchors the first occurrence of each dose and carries the
/// local UTC offset; `stamp` is the document creation instant. The
/// directions text is authoritative: the extractor's frequency hint is only
/// compared against the derived classification to flag disagreement.
pub fn derive_schedule(
    extraction: &ExtractionResult,
    now_local: DateTime<FixedOffset>,
    stamp: DateTime<Utc>,
) -> DerivedSchedule {
    let Some(rule) = classify(&extraction.directions) else {
        return DerivedSchedule {
            calendar: None,
            status: SCHEDULE_UNDETERMINED,
        };
    };

    if let Some(hint) = classify(&extraction.frequency)
        && hint.label != rule.label
    {
        tracing::warn!(
            "Frequency hint '{}' disagrees with directions-derived '{}'; using directions",
            extraction.frequency,
            rule.label
        );
    }

    let summary = format!(
        "Take {} - {} ({})",
        extraction.medication_name, extraction.dosage_strength, rule.label
    );
    let description = format!(
        "Medication: {}\nDosage: {}\nInstructions: {}",
        extraction.medication_name, extraction.dosage_strength, extraction.directions
    );

    let calendar_events: Vec<CalendarEvent> = dose_windows(rule.hours, now_local)
        .into_iter()
        .map(|window| CalendarEvent {
            uid: Uuid::new_v4().to_string(),
            start: window.start,
            end: window.end,
            summary: summary.clone(),
            description: description.clone(),
        })
        .collect();

    DerivedSchedule {
        calendar: Some(render_calendar(&calendar_events, stamp)),
        status: SCHEDULE_GENERATED,
    }
}
