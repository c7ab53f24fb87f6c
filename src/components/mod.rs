//! UI Components
//!
//! Leptos components composed by the root `App`.

mod add_task_form;
mod task_table;

pub use add_task_form::AddTaskForm;
#[cfg(test)]
pub use add_task_form::{submit_draft, TaskDraft};
pub use task_table::TaskTable;
#[cfg(test)]
pub use task_table::empty_state;
