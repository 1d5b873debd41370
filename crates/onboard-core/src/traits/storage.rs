use crate::errors::OnboardResult;
use crate::roster::{Employee, NewEmployee, NewTask, Task, TaskStatus};

/// Employee/task persistence consumed by the prediction engine and the
/// HTTP routes. Reads return snapshots; the prediction path never mutates.
pub trait IRosterStorage: Send + Sync {
    // --- Employees ---
    fn create_employee(&self, employee: &NewEmployee) -> OnboardResult<i64>;
    fn get_employee(&self, id: i64) -> OnboardResult<Option<Employee>>;
    fn find_employee_by_email(&self, email: &str) -> OnboardResult<Option<Employee>>;
    fn list_employees(&self) -> OnboardResult<Vec<Employee>>;

    // --- Tasks ---
    fn create_task(&self, task: &NewTask) -> OnboardResult<i64>;
    fn tasks_for_employee(&self, employee_id: i64) -> OnboardResult<Vec<Task>>;
    /// Returns false when no task with that id exists.
    fn update_task_status(&self, id: i64, status: TaskStatus) -> OnboardResult<bool>;
    /// Returns false when no task with that id exists.
    fn delete_task(&self, id: i64) -> OnboardResult<bool>;
}

impl<T: IRosterStorage + ?Sized> IRosterStorage for std::sync::Arc<T> {
    fn create_employee(&self, employee: &NewEmployee) -> OnboardResult<i64> {
        (**self).create_employee(employee)
    }

    fn get_employee(&self, id: i64) -> OnboardResult<Option<Employee>> {
        (**self).get_employee(id)
    }

    fn find_employee_by_email(&self, email: &str) -> OnboardResult<Option<Employee>> {
        (**self).find_employee_by_email(email)
    }

    fn list_employees(&self) -> OnboardResult<Vec<Employee>> {
        (**self).list_employees()
    }

    fn create_task(&self, task: &NewTask) -> OnboardResult<i64> {
        (**self).create_task(task)
    }

    fn tasks_for_employee(&self, employee_id: i64) -> OnboardResult<Vec<Task>> {
        (**self).tasks_for_employee(employee_id)
    }

    fn update_task_status(&self, id: i64, status: TaskStatus) -> OnboardResult<bool> {
        (**self).update_task_status(id, status)
    }

    fn delete_task(&self, id: i64) -> OnboardResult<bool> {
        (**self).delete_task(id)
    }
}
