//! Task Sequence Operations
//!
//! Total functions over the owned task sequence. Unknown ids are no-ops.

use crate::models::Task;

/// Flip `completed` on the task with `id`. Returns whether a task matched.
pub fn toggle_completed(tasks: &mut [Task], id: &str) -> bool {
    match tasks.iter_mut().find(|task| task.id == id) {
        Some(task) => {
            task.completed = !task.completed;
            true
        }
        None => false,
    }
}

/// Remove the task with `id`, keeping the relative order of the rest
pub fn remove_task(tasks: &mut Vec<Task>, id: &str) -> bool {
    let before = tasks.len();
    tasks.retain(|task| task.id != id);
    tasks.len() != before
}

/// Append a task at the end of the sequence
pub fn append_task(tasks: &mut Vec<Task>, task: Task) {
    tasks.push(task);
}

/// Pair each task with its 1-based display position.
/// Positions come from the current order, so they re-flow after deletions.
pub fn numbered(tasks: &[Task]) -> Vec<(usize, Task)> {
    tasks
        .iter()
        .cloned()
        .enumerate()
        .map(|(index, task)| (index + 1, task))
        .collect()
}
