//! iCalendar rendering for recurring dose reminders.

use chrono::{DateTime, Utc};

/// One recurring daily reminder, ready to serialize.
#[derive(Clone, Debug)]
pub struct CalendarEvent {
    pub uid: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub summary: String,
    pub description: String,
}

const CALENDAR_HEADER: &[&str] = &[
    "BEGIN:VCALENDAR",
    "VERSION:2.0",
    "PRODID:-//MediScan//NONSGML v1.0//EN",
];

/// Compact UTC form calendar clients expect, e.g. `20250601T070000Z`.
fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Escape embedded line breaks so each property stays one logical line.
fn escape_text(text: &str) -> String {
    text.replace('\n', "\\n")
}

/// Render a complete VCALENDAR document. Every event recurs daily with no
/// end date; `stamp` is the shared creation timestamp for the document.
pub fn render_calendar(events: &[CalendarEvent], stamp: DateTime<Utc>) -> String {
    let mut lines: Vec<String> = CALENDAR_HEADER.iter().map(|line| line.to_string()).collect();

    for event in events {
        lines.extend([
            "BEGIN:VEVENT".to_string(),
            format!("UID:{}", event.uid),
            format!("DTSTAMP:{}", format_timestamp(&stamp)),
            format!("DTSTART:{}", format_timestamp(&event.start)),
            format!("DTEND:{}", format_timestamp(&event.end)),
            "RRULE:FREQ=DAILY".to_string(),
            format!("SUMMARY:{}", escape_text(&event.summary)),
            format!("DESCRIPTION:{}", escape_text(&event.description)),
            "END:VEVENT".to_string(),
        ]);
    }

    lines.push("END:VCALENDAR".to_string());
    lines.join("\r\n")
}
