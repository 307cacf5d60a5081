use chrono::{TimeZone, Utc};
use rusqlite::Connection;
use taskflow_core::{
    open_db_in_memory, Priority, SqliteTaskRepository, TaskDraft, TaskPatch, TaskService,
    TaskServiceError,
};

#[test]
fn create_assigns_id_one_on_empty_collection() {
    let conn = open_db_in_memory().unwrap();
    let service = task_service(&conn);

    let task = service.create(&TaskDraft::new("first", 1)).unwrap();

    assert_eq!(task.id, 1);
    assert_eq!(task.order, 1);
    assert!(!task.completed);
    assert_eq!(task.priority, Priority::Medium);
    assert_eq!(task.description, "");
}

#[test]
fn create_assigns_max_id_plus_one() {
    let conn = open_db_in_memory().unwrap();
    let service = task_service(&conn);

    for title in ["a", "b", "c"] {
        service.create(&TaskDraft::new(title, 1)).unwrap();
    }

    // Deleting the highest id frees it for reuse.
    service.delete(3).unwrap().unwrap();
    let reused = service.create(&TaskDraft::new("d", 1)).unwrap();
    assert_eq!(reused.id, 3);

    // Deleting a middle id does not.
    service.delete(2).unwrap().unwrap();
    let next = service.create(&TaskDraft::new("e", 1)).unwrap();
    assert_eq!(next.id, 4);
}

#[test]
fn create_assigns_order_as_count_plus_one() {
    let conn = open_db_in_memory().unwrap();
    let service = task_service(&conn);

    service.create(&TaskDraft::new("a", 1)).unwrap();
    service.create(&TaskDraft::new("b", 1)).unwrap();
    service.delete(1).unwrap().unwrap();

    let task = service.create(&TaskDraft::new("c", 1)).unwrap();
    assert_eq!(task.order, 2);
}

#[test]
fn create_trims_title_and_description() {
    let conn = open_db_in_memory().unwrap();
    let service = task_service(&conn);

    let mut draft = TaskDraft::new("  Pay rent  ", 1);
    draft.description = " transfer before the 1st ".to_string();

    let task = service.create(&draft).unwrap();
    assert_eq!(task.title, "Pay rent");
    assert_eq!(task.description, "transfer before the 1st");
}

#[test]
fn create_rejects_blank_title() {
    let conn = open_db_in_memory().unwrap();
    let service = task_service(&conn);

    let err = service.create(&TaskDraft::new("   ", 1)).unwrap_err();
    assert!(matches!(err, TaskServiceError::Validation(_)));
    assert!(service.get_all().unwrap().is_empty());
}

#[test]
fn get_by_id_returns_record_or_none() {
    let conn = open_db_in_memory().unwrap();
    let service = task_service(&conn);

    let created = service.create(&TaskDraft::new("lookup", 2)).unwrap();

    let fetched = service.get_by_id(created.id).unwrap().unwrap();
    assert_eq!(fetched, created);
    assert!(service.get_by_id(99).unwrap().is_none());
}

#[test]
fn update_merges_patch_over_existing_record() {
    let conn = open_db_in_memory().unwrap();
    let service = task_service(&conn);

    let mut draft = TaskDraft::new("draft", 1);
    draft.description = "keep me".to_string();
    draft.due_date = Some(Utc.with_ymd_and_hms(2025, 7, 20, 0, 0, 0).unwrap());
    let created = service.create(&draft).unwrap();

    let patch = TaskPatch {
        title: Some("updated".to_string()),
        priority: Some(Priority::High),
        ..TaskPatch::default()
    };
    let updated = service.update(created.id, &patch).unwrap().unwrap();

    assert_eq!(updated.title, "updated");
    assert_eq!(updated.priority, Priority::High);
    assert_eq!(updated.description, "keep me");
    assert_eq!(updated.due_date, created.due_date);
    assert_eq!(updated.id, created.id);
}

#[test]
fn update_can_clear_the_due_date() {
    let conn = open_db_in_memory().unwrap();
    let service = task_service(&conn);

    let mut draft = TaskDraft::new("dated", 1);
    draft.due_date = Some(Utc.with_ymd_and_hms(2025, 7, 20, 0, 0, 0).unwrap());
    let created = service.create(&draft).unwrap();

    let patch = TaskPatch {
        due_date: Some(None),
        ..TaskPatch::default()
    };
    let updated = service.update(created.id, &patch).unwrap().unwrap();
    assert_eq!(updated.due_date, None);
}

#[test]
fn update_missing_id_returns_none_and_leaves_collection_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let service = task_service(&conn);

    let created = service.create(&TaskDraft::new("only", 1)).unwrap();

    let patch = TaskPatch {
        title: Some("ghost".to_string()),
        ..TaskPatch::default()
    };
    assert!(service.update(99, &patch).unwrap().is_none());

    let all = service.get_all().unwrap();
    assert_eq!(all, vec![created]);
}

#[test]
fn delete_removes_exactly_one_record_and_returns_it() {
    let conn = open_db_in_memory().unwrap();
    let service = task_service(&conn);

    service.create(&TaskDraft::new("keep", 1)).unwrap();
    let doomed = service.create(&TaskDraft::new("remove", 1)).unwrap();

    let deleted = service.delete(doomed.id).unwrap().unwrap();
    assert_eq!(deleted, doomed);
    assert!(service.get_by_id(doomed.id).unwrap().is_none());
    assert_eq!(service.get_all().unwrap().len(), 1);

    assert!(service.delete(doomed.id).unwrap().is_none());
}

#[test]
fn toggle_complete_flips_and_is_idempotent_under_two_calls() {
    let conn = open_db_in_memory().unwrap();
    let service = task_service(&conn);

    let created = service.create(&TaskDraft::new("flip", 1)).unwrap();

    let toggled = service.toggle_complete(created.id).unwrap().unwrap();
    assert!(toggled.completed);

    let restored = service.toggle_complete(created.id).unwrap().unwrap();
    assert!(!restored.completed);
    assert_eq!(restored, created);

    assert!(service.toggle_complete(99).unwrap().is_none());
}

#[test]
fn update_order_moves_task_within_get_all() {
    let conn = open_db_in_memory().unwrap();
    let service = task_service(&conn);

    for title in ["a", "b", "c"] {
        service.create(&TaskDraft::new(title, 1)).unwrap();
    }

    let moved = service.update_order(1, 10).unwrap().unwrap();
    assert_eq!(moved.order, 10);

    let ids: Vec<_> = service.get_all().unwrap().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![2, 3, 1]);
}

#[test]
fn get_by_status_partitions_on_completion() {
    let conn = open_db_in_memory().unwrap();
    let service = task_service(&conn);

    service.create(&TaskDraft::new("open", 1)).unwrap();
    let done = service.create(&TaskDraft::new("done", 1)).unwrap();
    service.toggle_complete(done.id).unwrap();

    let completed = service.get_by_status(true).unwrap();
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].title, "done");

    let pending = service.get_by_status(false).unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].title, "open");
}

#[test]
fn get_by_category_returns_only_matching_tasks() {
    let conn = open_db_in_memory().unwrap();
    let service = task_service(&conn);

    service.create(&TaskDraft::new("work", 1)).unwrap();
    service.create(&TaskDraft::new("home", 2)).unwrap();
    service.create(&TaskDraft::new("more work", 1)).unwrap();

    let work = service.get_by_category(1).unwrap();
    assert_eq!(work.len(), 2);
    assert!(work.iter().all(|t| t.category_id == 1));

    assert!(service.get_by_category(9).unwrap().is_empty());
}

#[test]
fn search_matches_title_and_description_case_insensitively() {
    let conn = open_db_in_memory().unwrap();
    let service = task_service(&conn);

    let mut draft = TaskDraft::new("Write REPORT", 1);
    draft.description = "quarterly numbers".to_string();
    service.create(&draft).unwrap();
    service.create(&TaskDraft::new("walk dog", 1)).unwrap();

    assert_eq!(service.search("report").unwrap().len(), 1);
    assert_eq!(service.search("QUARTERLY").unwrap().len(), 1);
    assert!(service.search("missing").unwrap().is_empty());

    // A blank query matches everything, like the backend this mocks.
    assert_eq!(service.search("").unwrap().len(), 2);
}

#[test]
fn search_treats_like_wildcards_literally() {
    let conn = open_db_in_memory().unwrap();
    let service = task_service(&conn);

    service.create(&TaskDraft::new("reach 100% coverage", 1)).unwrap();
    service.create(&TaskDraft::new("rename snake_case fields", 1)).unwrap();

    let percent = service.search("100%").unwrap();
    assert_eq!(percent.len(), 1);
    assert_eq!(percent[0].title, "reach 100% coverage");

    let underscore = service.search("snake_case").unwrap();
    assert_eq!(underscore.len(), 1);

    // `%` alone is not a match-all wildcard.
    assert_eq!(service.search("%").unwrap().len(), 1);
}

fn task_service(conn: &Connection) -> TaskService<SqliteTaskRepository<'_>> {
    TaskService::without_latency(SqliteTaskRepository::new(conn))
}
