//! Date arithmetic behind the upcoming-birthday report.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Length of the default upcoming-birthday window, in days after today.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Move a birthday's month and day onto `year`.
///
/// Feb 29 lands on Feb 28 when `year` is not a leap year.
pub fn anchor_to_year(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day()).or_else(|| {
        (birthday.month() == 2 && birthday.day() == 29)
            .then(|| NaiveDate::from_ymd_opt(year, 2, 28))
            .flatten()
    })
}

/// The first anniversary of `birthday` on or after `today`.
pub fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let candidate = anchor_to_year(birthday, today.year())?;
    if candidate < today {
        anchor_to_year(birthday, today.year() + 1)
    } else {
        Some(candidate)
    }
}

/// Saturdays and Sundays move forward to the following Monday.
pub fn shift_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => {
            let shift = 7 - i64::from(date.weekday().num_days_from_monday());
            date + Duration::days(shift)
        }
        _ => date,
    }
}

/// The greeting date for `birthday` if its next occurrence is within
/// `window_days` of `today` (both ends inclusive).
pub fn congratulation_date(
    birthday: NaiveDate,
    today: NaiveDate,
    window_days: u32,
) -> Option<NaiveDate> {
    let occurrence = next_occurrence(birthday, today)?;
    let window_end = today + Duration::days(i64::from(window_days));
    (occurrence <= window_end).then(|| shift_weekend(occurrence))
}
