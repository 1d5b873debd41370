//! Insert, get, list for employees.

use rusqlite::{params, Connection, OptionalExtension, Row};

use onboard_core::errors::OnboardResult;
use onboard_core::roster::{Employee, NewEmployee};

use crate::to_storage_err;

fn row_to_employee(row: &Row<'_>) -> rusqlite::Result<Employee> {
    Ok(Employee {
        id: row.get("id")?,
        name: row.get("name")?,
        email: row.get("email")?,
        department: row.get("department")?,
        start_date: row.get("start_date")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_employee(conn: &Connection, employee: &NewEmployee) -> OnboardResult<i64> {
    conn.execute(
        "INSERT INTO employees (name, email, department, start_date) VALUES (?1, ?2, ?3, ?4)",
        params![
            employee.name,
            employee.email,
            employee.department,
            employee.start_date,
        ],
    )
    .map_err(|e| to_storage_err(format!("insert_employee: {e}")))?;
    Ok(conn.last_insert_rowid())
}

pub fn get_employee(conn: &Connection, id: i64) -> OnboardResult<Option<Employee>> {
    conn.query_row(
        "SELECT * FROM employees WHERE id = ?1",
        params![id],
        row_to_employee,
    )
    .optional()
    .map_err(|e| to_storage_err(format!("get_employee: {e}")))
}

pub fn find_by_email(conn: &Connection, email: &str) -> OnboardResult<Option<Employee>> {
    conn.query_row(
        "SELECT * FROM employees WHERE email = ?1",
        params![email],
        row_to_employee,
    )
    .optional()
    .map_err(|e| to_storage_err(format!("find_by_email: {e}")))
}

pub fn list_employees(conn: &Connection) -> OnboardResult<Vec<Employee>> {
    let mut stmt = conn
        .prepare("SELECT * FROM employees ORDER BY id")
        .map_err(|e| to_storage_err(format!("list_employees prepare: {e}")))?;
    let rows = stmt
        .query_map([], row_to_employee)
        .map_err(|e| to_storage_err(format!("list_employees: {e}")))?;
    rows.collect::<rusqlite::Result<Vec<_>>>()
        .map_err(|e| to_storage_err(format!("list_employees row: {e}")))
}
