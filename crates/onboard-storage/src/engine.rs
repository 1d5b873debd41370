//! StorageEngine — owns the SQLite connection, runs migrations at open,
//! implements IRosterStorage.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use onboard_core::errors::OnboardResult;
use onboard_core::roster::{Employee, NewEmployee, NewTask, Task, TaskStatus};
use onboard_core::traits::IRosterStorage;

use crate::migrations;
use crate::queries::{employee_crud, task_crud};
use crate::to_storage_err;

/// The main storage engine. A single serialized connection is enough for
/// this workload; reads on the prediction path are short and synchronous.
pub struct StorageEngine {
    conn: Mutex<Connection>,
}

impl StorageEngine {
    /// Open a storage engine backed by a file on disk.
    pub fn open(path: &Path) -> OnboardResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(format!("open: {e}")))?;
        Self::from_connection(conn)
    }

    /// Open an in-memory storage engine (for testing).
    pub fn open_in_memory() -> OnboardResult<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| to_storage_err(format!("open: {e}")))?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> OnboardResult<Self> {
        conn.pragma_update(None, "foreign_keys", true)
            .map_err(|e| to_storage_err(format!("foreign_keys pragma: {e}")))?;
        migrations::run_migrations(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn with_conn<F, T>(&self, f: F) -> OnboardResult<T>
    where
        F: FnOnce(&Connection) -> OnboardResult<T>,
    {
        let conn = self
            .conn
            .lock()
            .map_err(|_| to_storage_err("connection mutex poisoned"))?;
        f(&conn)
    }
}

impl IRosterStorage for StorageEngine {
    fn create_employee(&self, employee: &NewEmployee) -> OnboardResult<i64> {
        self.with_conn(|conn| employee_crud::insert_employee(conn, employee))
    }

    fn get_employee(&self, id: i64) -> OnboardResult<Option<Employee>> {
        self.with_conn(|conn| employee_crud::get_employee(conn, id))
    }

    fn find_employee_by_email(&self, email: &str) -> OnboardResult<Option<Employee>> {
        self.with_conn(|conn| employee_crud::find_by_email(conn, email))
    }

    fn list_employees(&self) -> OnboardResult<Vec<Employee>> {
        self.with_conn(employee_crud::list_employees)
    }

    fn create_task(&self, task: &NewTask) -> OnboardResult<i64> {
        self.with_conn(|conn| task_crud::insert_task(conn, task))
    }

    fn tasks_for_employee(&self, employee_id: i64) -> OnboardResult<Vec<Task>> {
        self.with_conn(|conn| task_crud::tasks_for_employee(conn, employee_id))
    }

    fn update_task_status(&self, id: i64, status: TaskStatus) -> OnboardResult<bool> {
        self.with_conn(|conn| task_crud::update_task_status(conn, id, status))
    }

    fn delete_task(&self, id: i64) -> OnboardResult<bool> {
        self.with_conn(|conn| task_crud::delete_task(conn, id))
    }
}
