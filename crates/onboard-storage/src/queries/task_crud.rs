//! Insert, list, status update, delete for tasks.

use rusqlite::types::Type;
use rusqlite::{params, Connection, Row};

use onboard_core::errors::OnboardResult;
use onboard_core::roster::{NewTask, Task, TaskStatus};

use crate::to_storage_err;

fn row_to_task(row: &Row<'_>) -> rusqlite::Result<Task> {
    let status_raw: String = row.get("status")?;
    let status: TaskStatus = status_raw.parse().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(e))
    })?;
    Ok(Task {
        id: row.get("id")?,
        employee_id: row.get("employee_id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        status,
        due_date: row.get("due_date")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_task(conn: &Connection, task: &NewTask) -> OnboardResult<i64> {
    conn.execute(
        "INSERT INTO tasks (employee_id, title, description, status, due_date)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            task.employee_id,
            task.title,
            task.description,
            task.status.as_str(),
            task.due_date,
        ],
    )
    .map_err(|e| to_storage_err(format!("insert_task: {e}")))?;
    Ok(conn.last_insert_rowid())
}

pub fn tasks_for_employee(conn: &Connection, employee_id: i64) -> OnboardResult<Vec<Task>> {
    let mut stmt = conn
        .prepare("SELECT * FROM tasks WHERE employee_id = ?1 ORDER BY id")
        .map_err(|e| to_storage_err(format!("tasks_for_employee prepare: {e}")))?;
    let rows = stmt
        .query_map(params![employee_id], row_to_task)
        .map_err(|e| to_storage_err(format!("tasks_for_employee: {e}")))?;
    rows.collect::<rusqlite::Result<Vec<_>>>()
        .map_err(|e| to_storage_err(format!("tasks_for_employee row: {e}")))
}

pub fn update_task_status(conn: &Connection, id: i64, status: TaskStatus) -> OnboardResult<bool> {
    let changed = conn
        .execute(
            "UPDATE tasks SET status = ?1 WHERE id = ?2",
            params![status.as_str(), id],
        )
        .map_err(|e| to_storage_err(format!("update_task_status: {e}")))?;
    Ok(changed > 0)
}

pub fn delete_task(conn: &Connection, id: i64) -> OnboardResult<bool> {
    let changed = conn
        .execute("DELETE FROM tasks WHERE id = ?1", params![id])
        .map_err(|e| to_storage_err(format!("delete_task: {e}")))?;
    Ok(changed > 0)
}
