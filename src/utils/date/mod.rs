// Date utility functions
// Calendar arithmetic shared by the grid, navigation and recurrence code

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

pub fn is_same_day(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.date() == b.date()
}

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::default())
}

/// Last representable instant of `date`.
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    start_of_day(date) + Duration::days(1) - Duration::nanoseconds(1)
}

/// Calculate the start of the week containing the given date.
pub fn week_start(date: NaiveDate, first_day: Weekday) -> NaiveDate {
    let weekday = date.weekday().num_days_from_sunday() as i64;
    let offset = (weekday - first_day.num_days_from_sunday() as i64 + 7) % 7;
    date - Duration::days(offset)
}

/// Days between the configured week start and `date`'s weekday (0..=6).
pub fn weekday_offset(date: NaiveDate, first_day: Weekday) -> u32 {
    (date.weekday().num_days_from_sunday() + 7 - first_day.num_days_from_sunday()) % 7
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn days_in_month(date: NaiveDate) -> u32 {
    let first = first_of_month(date);
    first
        .checked_add_months(Months::new(1))
        .map(|next| (next - first).num_days() as u32)
        // December of the last representable year
        .unwrap_or(31)
}

/// Shift by whole months, clamping the day to the target month's length
/// (Jan 31 + 1 month = Feb 28/29).
pub fn shift_month_preserving_day(date: NaiveDate, delta_months: i32) -> Option<NaiveDate> {
    let months = Months::new(delta_months.unsigned_abs());
    if delta_months >= 0 {
        date.checked_add_months(months)
    } else {
        date.checked_sub_months(months)
    }
}

/// Same as `shift_month_preserving_day`, keeping the time of day.
pub fn shift_months(datetime: NaiveDateTime, delta_months: i32) -> Option<NaiveDateTime> {
    shift_month_preserving_day(datetime.date(), delta_months).map(|d| d.and_time(datetime.time()))
}

/// Whole calendar months from `from` to `to` (ignoring the day of month).
pub fn months_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to.year() as i64 - from.year() as i64) * 12 + to.month() as i64 - from.month() as i64
}

/// "Today", "Tomorrow", or a short date such as "Dec 16".
pub fn day_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else if today.succ_opt() == Some(date) {
        "Tomorrow".to_string()
    } else {
        date.format("%b %-d").to_string()
    }
}
