//! Calendar view computation.
//!
//! # Responsibility
//! - Build the month/week/day structures the calendar views render.
//! - Select and order the tasks shown in each day cell.
//!
//! # Invariants
//! - Weeks start on Sunday.
//! - The month grid always consists of whole weeks covering the anchor's
//!   month, so leading/trailing days of adjacent months are included.
//! - Month navigation clamps the day-of-month instead of overflowing.

use crate::model::task::Task;
use crate::view::filter::StatusFilter;
use chrono::{Datelike, Duration, Months, NaiveDate};

/// Step size for calendar navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarUnit {
    Day,
    Week,
    Month,
}

/// Returns the Sunday on or before the given day.
pub fn start_of_week(day: NaiveDate) -> NaiveDate {
    day - Duration::days(i64::from(day.weekday().num_days_from_sunday()))
}

/// Returns the Saturday on or after the given day.
pub fn end_of_week(day: NaiveDate) -> NaiveDate {
    start_of_week(day) + Duration::days(6)
}

/// Builds the full-week grid covering the anchor's month.
pub fn month_grid(anchor: NaiveDate) -> Vec<[NaiveDate; 7]> {
    let month_start = anchor - Duration::days(i64::from(anchor.day0()));
    let month_end = advance(month_start, CalendarUnit::Month, 1)
        .pred_opt()
        .unwrap_or(month_start);

    let mut weeks = Vec::new();
    let mut week_start = start_of_week(month_start);
    let last = end_of_week(month_end);

    while week_start <= last {
        weeks.push(std::array::from_fn(|i| {
            week_start + Duration::days(i as i64)
        }));
        week_start = week_start + Duration::days(7);
    }

    weeks
}

/// Returns the seven days of the anchor's week, Sunday first.
pub fn week_days(anchor: NaiveDate) -> [NaiveDate; 7] {
    let week_start = start_of_week(anchor);
    std::array::from_fn(|i| week_start + Duration::days(i as i64))
}

/// Moves the anchor by whole days, weeks or months.
///
/// Month steps clamp the day-of-month to the target month's length
/// (Jan 31 advanced one month lands on Feb 28/29).
pub fn advance(anchor: NaiveDate, unit: CalendarUnit, steps: i64) -> NaiveDate {
    match unit {
        CalendarUnit::Day => anchor + Duration::days(steps),
        CalendarUnit::Week => anchor + Duration::days(steps * 7),
        CalendarUnit::Month => {
            let months = steps.unsigned_abs() as u32;
            let shifted = if steps >= 0 {
                anchor.checked_add_months(Months::new(months))
            } else {
                anchor.checked_sub_months(Months::new(months))
            };
            shifted.unwrap_or(anchor)
        }
    }
}

/// Tasks due on the given day that pass the active filter.
pub fn tasks_on_day<'a>(
    tasks: &'a [Task],
    day: NaiveDate,
    filter: StatusFilter,
    today: NaiveDate,
) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|task| task.is_due_on(day) && filter.matches(task, today))
        .collect()
}

/// Day-view schedule: incomplete first, then priority high to low, then
/// title.
pub fn day_schedule<'a>(
    tasks: &'a [Task],
    day: NaiveDate,
    filter: StatusFilter,
    today: NaiveDate,
) -> Vec<&'a Task> {
    let mut scheduled = tasks_on_day(tasks, day, filter, today);
    scheduled.sort_by(|a, b| {
        a.completed
            .cmp(&b.completed)
            .then_with(|| a.priority.urgency_rank().cmp(&b.priority.urgency_rank()))
            .then_with(|| a.title.cmp(&b.title))
    });
    scheduled
}
