/// Reminder evaluation - decides which birthday notifications are due
use chrono::{Datelike, NaiveDate};
use tracing::warn;

use crate::models::BirthdayRecord;
use crate::utils::datetime::{occurrence_in_year, parse_birthday};

/// A notification due on a given day
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notification {
    /// The birthday falls on the day after the evaluated date
    UpcomingTomorrow { name: String, occurrence: NaiveDate },
    /// The birthday falls on the evaluated date
    Today { name: String },
}

/// Evaluate which notifications are due on `today`.
///
/// Pure with respect to its inputs: the same date and record set always
/// produce the same sequence, in record order. Deduplication of repeated
/// daily triggers is the caller's responsibility; no already-notified state
/// is kept here. A record whose stored date no longer parses is logged and
/// skipped without affecting the rest.
pub fn evaluate(today: NaiveDate, records: &[BirthdayRecord]) -> Vec<Notification> {
    records
        .iter()
        .filter_map(|record| evaluate_record(today, record))
        .collect()
}

fn evaluate_record(today: NaiveDate, record: &BirthdayRecord) -> Option<Notification> {
    let birthday = match parse_birthday(&record.date) {
        Ok(date) => date,
        Err(e) => {
            warn!(
                "Skipping malformed birthday entry {} ({:?}): {}",
                record.id, record.date, e
            );
            return None;
        }
    };

    let occurrence = occurrence_in_year(birthday, today.year());

    match (occurrence - today).num_days() {
        1 => Some(Notification::UpcomingTomorrow {
            name: record.name.clone(),
            occurrence,
        }),
        0 => Some(Notification::Today {
            name: record.name.clone(),
        }),
        // Already passed this year, or further out than tomorrow: the daily
        // re-evaluation catches the two windows as the date advances.
        _ => None,
    }
}
