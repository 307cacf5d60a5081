//! Task repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide storage primitives over the `tasks` collection.
//! - Keep SQL details inside the storage boundary.
//!
//! # Invariants
//! - List queries are always ordered by `display_order ASC, id ASC`.
//! - `next_task_id` returns `max(id) + 1`, or 1 for an empty collection.

use crate::model::task::{CategoryId, Priority, Task, TaskId};
use crate::repo::{RepoError, RepoResult};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};

const TASK_SELECT_SQL: &str = "SELECT
    id,
    title,
    description,
    category_id,
    priority,
    due_date,
    completed,
    created_at,
    display_order
FROM tasks";

const TASK_LIST_ORDER_SQL: &str = " ORDER BY display_order ASC, id ASC";

/// Repository interface for the task collection.
pub trait TaskRepository {
    /// Inserts a fully assembled record (service- or seed-assigned id).
    fn insert_task(&self, task: &Task) -> RepoResult<()>;
    /// Replaces the record with the matching id; `false` when absent.
    fn update_task(&self, task: &Task) -> RepoResult<bool>;
    fn get_task(&self, id: TaskId) -> RepoResult<Option<Task>>;
    fn list_tasks(&self) -> RepoResult<Vec<Task>>;
    fn list_tasks_by_category(&self, category_id: CategoryId) -> RepoResult<Vec<Task>>;
    fn list_tasks_by_completion(&self, completed: bool) -> RepoResult<Vec<Task>>;
    /// Case-insensitive substring match on title or description.
    fn search_tasks(&self, query: &str) -> RepoResult<Vec<Task>>;
    /// Removes the record with the matching id and returns it.
    fn delete_task(&self, id: TaskId) -> RepoResult<Option<Task>>;
    fn next_task_id(&self) -> RepoResult<TaskId>;
    fn task_count(&self) -> RepoResult<i64>;
}

/// SQLite-backed task repository.
pub struct SqliteTaskRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TaskRepository for SqliteTaskRepository<'_> {
    fn insert_task(&self, task: &Task) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO tasks (
                id,
                title,
                description,
                category_id,
                priority,
                due_date,
                completed,
                created_at,
                display_order
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9);",
            params![
                task.id,
                task.title.as_str(),
                task.description.as_str(),
                task.category_id,
                priority_to_db(task.priority),
                task.due_date,
                bool_to_int(task.completed),
                task.created_at,
                task.order,
            ],
        )?;

        Ok(())
    }

    fn update_task(&self, task: &Task) -> RepoResult<bool> {
        let changed = self.conn.execute(
            "UPDATE tasks
             SET
                title = ?1,
                description = ?2,
                category_id = ?3,
                priority = ?4,
                due_date = ?5,
                completed = ?6,
                created_at = ?7,
                display_order = ?8
             WHERE id = ?9;",
            params![
                task.title.as_str(),
                task.description.as_str(),
                task.category_id,
                priority_to_db(task.priority),
                task.due_date,
                bool_to_int(task.completed),
                task.created_at,
                task.order,
                task.id,
            ],
        )?;

        Ok(changed > 0)
    }

    fn get_task(&self, id: TaskId) -> RepoResult<Option<Task>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TASK_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_task_row(row)?));
        }

        Ok(None)
    }

    fn list_tasks(&self) -> RepoResult<Vec<Task>> {
        collect_tasks(
            self.conn,
            &format!("{TASK_SELECT_SQL}{TASK_LIST_ORDER_SQL};"),
            params![],
        )
    }

    fn list_tasks_by_category(&self, category_id: CategoryId) -> RepoResult<Vec<Task>> {
        collect_tasks(
            self.conn,
            &format!("{TASK_SELECT_SQL} WHERE category_id = ?1{TASK_LIST_ORDER_SQL};"),
            params![category_id],
        )
    }

    fn list_tasks_by_completion(&self, completed: bool) -> RepoResult<Vec<Task>> {
        collect_tasks(
            self.conn,
            &format!("{TASK_SELECT_SQL} WHERE completed = ?1{TASK_LIST_ORDER_SQL};"),
            params![bool_to_int(completed)],
        )
    }

    fn search_tasks(&self, query: &str) -> RepoResult<Vec<Task>> {
        let pattern = format!("%{}%", escape_like_pattern(query));
        collect_tasks(
            self.conn,
            &format!(
                "{TASK_SELECT_SQL}
                 WHERE title LIKE ?1 ESCAPE '\\'
                    OR description LIKE ?1 ESCAPE '\\'{TASK_LIST_ORDER_SQL};"
            ),
            params![pattern],
        )
    }

    fn delete_task(&self, id: TaskId) -> RepoResult<Option<Task>> {
        let Some(task) = self.get_task(id)? else {
            return Ok(None);
        };

        self.conn
            .execute("DELETE FROM tasks WHERE id = ?1;", params![id])?;

        Ok(Some(task))
    }

    fn next_task_id(&self) -> RepoResult<TaskId> {
        let next = self
            .conn
            .query_row("SELECT COALESCE(MAX(id), 0) + 1 FROM tasks;", [], |row| {
                row.get::<_, i64>(0)
            })?;
        Ok(next)
    }

    fn task_count(&self) -> RepoResult<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM tasks;", [], |row| {
                row.get::<_, i64>(0)
            })?;
        Ok(count)
    }
}

fn collect_tasks(
    conn: &Connection,
    sql: &str,
    bind: impl rusqlite::Params,
) -> RepoResult<Vec<Task>> {
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query(bind)?;
    let mut tasks = Vec::new();

    while let Some(row) = rows.next()? {
        tasks.push(parse_task_row(row)?);
    }

    Ok(tasks)
}

fn parse_task_row(row: &Row<'_>) -> RepoResult<Task> {
    let priority_text: String = row.get("priority")?;
    let priority = parse_priority(&priority_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid priority `{priority_text}` in tasks.priority"))
    })?;

    let completed = match row.get::<_, i64>("completed")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid completed value `{other}` in tasks.completed"
            )));
        }
    };

    let due_date: Option<DateTime<Utc>> = row.get("due_date")?;
    let created_at: DateTime<Utc> = row.get("created_at")?;

    Ok(Task {
        id: row.get("id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        category_id: row.get("category_id")?,
        priority,
        due_date,
        completed,
        created_at,
        order: row.get("display_order")?,
    })
}

fn priority_to_db(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "low",
        Priority::Medium => "medium",
        Priority::High => "high",
    }
}

fn parse_priority(value: &str) -> Option<Priority> {
    match value {
        "low" => Some(Priority::Low),
        "medium" => Some(Priority::Medium),
        "high" => Some(Priority::High),
        _ => None,
    }
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}

/// Escapes LIKE wildcards so user input matches literally.
fn escape_like_pattern(raw: &str) -> String {
    raw.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::escape_like_pattern;

    #[test]
    fn like_wildcards_are_escaped_literally() {
        assert_eq!(escape_like_pattern("100%"), "100\\%");
        assert_eq!(escape_like_pattern("snake_case"), "snake\\_case");
        assert_eq!(escape_like_pattern("a\\b"), "a\\\\b");
    }
}
