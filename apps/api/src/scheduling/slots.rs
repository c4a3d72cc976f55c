//! Interview slot proposal — business days only.

use chrono::{Datelike, NaiveDate, Weekday};

/// Time-of-day options offered for each proposed date.
pub const INTERVIEW_TIMES: &[&str] = &["10:00 AM", "2:00 PM", "4:00 PM"];

/// Number of distinct business-day dates proposed per invitation.
pub const PROPOSED_DATE_COUNT: usize = 3;

/// Hard cap on total proposed slots.
pub const MAX_SLOTS: usize = 5;

/// Collects the next `count` business days strictly after `after`,
/// walking forward one day at a time and skipping weekends.
pub fn next_business_days(after: NaiveDate, count: usize) -> Vec<NaiveDate> {
    let mut days = Vec::with_capacity(count);
    let mut day = after;
    while days.len() < count {
        day = match day.succ_opt() {
            Some(next) => next,
            None => break, // end of the representable calendar
        };
        if !matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            days.push(day);
        }
    }
    days
}

/// Proposes interview slots starting the day after `today`: three business
/// days, each paired with a time-of-day option (cycled), capped at
/// `MAX_SLOTS` total.
pub fn propose_slots(today: NaiveDate) -> Vec<String> {
    next_business_days(today, PROPOSED_DATE_COUNT)
        .iter()
        .enumerate()
        .take(MAX_SLOTS)
        .map(|(i, date)| {
            format!(
                "{} at {}",
                date.format("%A, %B %-d, %Y"),
                INTERVIEW_TIMES[i % INTERVIEW_TIMES.len()]
            )
        })
        .collect()
}
