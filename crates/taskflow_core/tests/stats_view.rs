use chrono::{NaiveDate, TimeZone, Utc};
use taskflow_core::view::stats::{filter_counts, Insight, TaskStats};
use taskflow_core::{Category, Priority, Task};

#[test]
fn collect_aggregates_totals_and_overdue_by_day() {
    let today = date(2025, 7, 20);
    let tasks = vec![
        task(1, false, Priority::Medium, Some(date(2025, 7, 10))),
        task(2, false, Priority::Medium, Some(date(2025, 7, 25))),
        task(3, true, Priority::Medium, Some(date(2025, 7, 10))),
        task(4, true, Priority::Medium, None),
    ];

    let stats = TaskStats::collect(&tasks, today);
    assert_eq!(stats.total, 4);
    assert_eq!(stats.completed, 2);
    assert_eq!(stats.pending, 2);
    assert_eq!(stats.overdue, 1);
}

#[test]
fn completion_percentage_rounds_and_handles_empty() {
    let today = date(2025, 7, 20);

    assert_eq!(TaskStats::collect(&[], today).completion_percentage(), 0);

    let tasks = vec![
        task(1, true, Priority::Medium, None),
        task(2, true, Priority::Medium, None),
        task(3, false, Priority::Medium, None),
    ];
    assert_eq!(TaskStats::collect(&tasks, today).completion_percentage(), 67);
}

#[test]
fn insights_are_empty_for_an_empty_collection() {
    let stats = TaskStats::collect(&[], date(2025, 7, 20));
    assert!(stats.insights().is_empty());
}

#[test]
fn overdue_backlog_suppresses_the_remaining_insight() {
    let today = date(2025, 7, 20);
    let tasks = vec![
        task(1, false, Priority::Medium, Some(date(2025, 7, 10))),
        task(2, false, Priority::Medium, None),
        task(3, false, Priority::Medium, None),
    ];

    let insights = TaskStats::collect(&tasks, today).insights();
    assert_eq!(insights, vec![Insight::OverdueBacklog(1)]);
}

#[test]
fn remaining_tasks_show_when_nothing_is_overdue() {
    let today = date(2025, 7, 20);
    let tasks = vec![
        task(1, true, Priority::Medium, None),
        task(2, false, Priority::Medium, Some(date(2025, 7, 25))),
    ];

    let insights = TaskStats::collect(&tasks, today).insights();
    assert_eq!(insights, vec![Insight::RemainingTasks(1)]);
}

#[test]
fn great_progress_appears_at_eighty_percent() {
    let today = date(2025, 7, 20);
    let mut tasks: Vec<Task> = (1..=4)
        .map(|id| task(id, true, Priority::Medium, None))
        .collect();
    tasks.push(task(5, false, Priority::Medium, None));

    let insights = TaskStats::collect(&tasks, today).insights();
    assert_eq!(
        insights,
        vec![Insight::GreatProgress, Insight::RemainingTasks(1)]
    );
}

#[test]
fn all_done_combines_with_great_progress() {
    let today = date(2025, 7, 20);
    let tasks = vec![
        task(1, true, Priority::Medium, None),
        task(2, true, Priority::Medium, None),
    ];

    let insights = TaskStats::collect(&tasks, today).insights();
    assert_eq!(insights, vec![Insight::GreatProgress, Insight::AllDone]);
}

#[test]
fn filter_counts_cover_every_sidebar_badge() {
    let today = date(2025, 7, 20);
    let categories = vec![category(1, "Work"), category(2, "Personal"), category(3, "Idle")];
    let tasks = vec![
        with_category(task(1, false, Priority::High, Some(date(2025, 7, 10))), 1),
        with_category(task(2, false, Priority::Medium, Some(date(2025, 7, 20))), 1),
        with_category(task(3, true, Priority::Medium, Some(date(2025, 7, 20))), 2),
        with_category(task(4, false, Priority::Medium, None), 2),
    ];

    let counts = filter_counts(&tasks, &categories, today);
    assert_eq!(counts.all, 4);
    assert_eq!(counts.pending, 3);
    assert_eq!(counts.completed, 1);
    assert_eq!(counts.overdue, 1);
    assert_eq!(counts.due_today, 2);
    assert_eq!(counts.high_priority, 1);

    assert_eq!(counts.per_category.get(&1), Some(&2));
    assert_eq!(counts.per_category.get(&2), Some(&2));
    assert_eq!(counts.per_category.get(&3), Some(&0));
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn task(id: i64, completed: bool, priority: Priority, due: Option<NaiveDate>) -> Task {
    Task {
        id,
        title: format!("task {id}"),
        description: String::new(),
        category_id: 1,
        priority,
        due_date: due.map(|d| d.and_hms_opt(0, 0, 0).unwrap().and_utc()),
        completed,
        created_at: Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap(),
        order: id,
    }
}

fn with_category(mut task: Task, category_id: i64) -> Task {
    task.category_id = category_id;
    task
}

fn category(id: i64, name: &str) -> Category {
    Category {
        id,
        name: name.to_string(),
        color: "#6366F1".to_string(),
        icon: "Briefcase".to_string(),
        order: id,
    }
}
