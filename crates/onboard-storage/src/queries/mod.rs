//! Row-level SQL operations, grouped per table.

pub mod employee_crud;
pub mod task_crud;
