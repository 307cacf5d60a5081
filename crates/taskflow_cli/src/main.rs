//! CLI smoke entry point.
//!
//! # Responsibility
//! - Exercise the mock data layer end to end: open, seed, query, mutate.
//! - Keep output deterministic apart from the simulated latency.

use chrono::Utc;
use taskflow_core::view::filter::{filter_tasks, StatusFilter};
use taskflow_core::view::stats::TaskStats;
use taskflow_core::{
    open_db_in_memory, seed_mock_data, CategoryService, SqliteCategoryRepository,
    SqliteTaskRepository, TaskService,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("taskflow_core version={}", taskflow_core::core_version());

    let conn = open_db_in_memory()?;
    let summary = seed_mock_data(&conn)?;
    println!(
        "seeded categories={} tasks={}",
        summary.categories, summary.tasks
    );

    let tasks = TaskService::new(SqliteTaskRepository::new(&conn));
    let categories = CategoryService::new(SqliteCategoryRepository::new(&conn));

    let today = Utc::now().date_naive();
    let all_tasks = tasks.get_all()?;
    let stats = TaskStats::collect(&all_tasks, today);
    println!(
        "stats total={} completed={} pending={} overdue={} completion={}%",
        stats.total,
        stats.completed,
        stats.pending,
        stats.overdue,
        stats.completion_percentage()
    );

    for category in categories.get_all()? {
        println!("category #{} {} {}", category.id, category.name, category.color);
    }

    for task in filter_tasks(&all_tasks, StatusFilter::Overdue, "", today) {
        println!("overdue #{} {} (priority {})", task.id, task.title, task.priority);
    }

    for task in tasks.search("report")? {
        println!("search hit #{} {}", task.id, task.title);
    }

    Ok(())
}
