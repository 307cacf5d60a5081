//! Due-date presentation helpers.
//!
//! # Responsibility
//! - Classify due dates into badge urgency levels.
//! - Produce the short labels list views render next to tasks.
//!
//! # Invariants
//! - Classification works at calendar-day granularity and ignores the
//!   completion flag (a finished task keeps its date badge).

use crate::model::task::Task;
use chrono::{DateTime, NaiveDate, Utc};

/// Urgency bucket for a task's due date badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueStatus {
    /// Strictly before today.
    Overdue,
    DueToday,
    /// Today has not reached the due day yet.
    Upcoming,
}

/// Classifies a task's due date; `None` when the task has no due date.
pub fn due_status(task: &Task, today: NaiveDate) -> Option<DueStatus> {
    let due_day = task.due_date?.date_naive();
    let status = if due_day < today {
        DueStatus::Overdue
    } else if due_day == today {
        DueStatus::DueToday
    } else {
        DueStatus::Upcoming
    };
    Some(status)
}

/// Short human label for a due date: "Today", "Tomorrow", else "Jul 05".
pub fn due_date_label(due: DateTime<Utc>, today: NaiveDate) -> String {
    let due_day = due.date_naive();
    if due_day == today {
        return "Today".to_string();
    }
    if today.succ_opt() == Some(due_day) {
        return "Tomorrow".to_string();
    }
    due_day.format("%b %d").to_string()
}

#[cfg(test)]
mod tests {
    use super::{due_date_label, due_status, DueStatus};
    use crate::model::task::{Priority, Task};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn task_due(y: i32, m: u32, d: u32) -> Task {
        Task {
            id: 1,
            title: "t".to_string(),
            description: String::new(),
            category_id: 1,
            priority: Priority::Medium,
            due_date: Some(Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()),
            completed: false,
            created_at: Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap(),
            order: 1,
        }
    }

    #[test]
    fn due_status_buckets_by_day() {
        let today = NaiveDate::from_ymd_opt(2025, 7, 20).unwrap();

        assert_eq!(due_status(&task_due(2025, 7, 19), today), Some(DueStatus::Overdue));
        assert_eq!(due_status(&task_due(2025, 7, 20), today), Some(DueStatus::DueToday));
        assert_eq!(due_status(&task_due(2025, 7, 21), today), Some(DueStatus::Upcoming));

        let mut undated = task_due(2025, 7, 21);
        undated.due_date = None;
        assert_eq!(due_status(&undated, today), None);
    }

    #[test]
    fn labels_name_today_tomorrow_and_short_dates() {
        let today = NaiveDate::from_ymd_opt(2025, 7, 20).unwrap();
        let at = |y, m, d| Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap();

        assert_eq!(due_date_label(at(2025, 7, 20), today), "Today");
        assert_eq!(due_date_label(at(2025, 7, 21), today), "Tomorrow");
        assert_eq!(due_date_label(at(2025, 7, 5), today), "Jul 05");
    }
}
