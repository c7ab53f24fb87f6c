//! Task Table Component
//!
//! Renders the task sequence as a numbered table. Stateless: toggle and
//! delete are reported upward through callbacks.

use leptos::prelude::*;

use crate::models::Task;
use crate::tasks::numbered;

/// Label for the status button
pub fn status_label(completed: bool) -> &'static str {
    if completed { "✅ Completed" } else { "❌ Pending" }
}

/// Placeholder text shown instead of rows when there are no tasks
pub fn empty_state(tasks: &[Task]) -> Option<&'static str> {
    tasks.is_empty().then_some("No ToDos yet. Add something! 🚀")
}

/// Task table with header row and empty-state placeholder
#[component]
pub fn TaskTable(
    #[prop(into)] tasks: Signal<Vec<Task>>,
    #[prop(into)] on_toggle: Callback<String>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    let rows = move || tasks.with(|tasks| numbered(tasks));

    view! {
        <div class="task-table">
            <h2 class="task-table-title">"📝 ToDo List"</h2>

            <div class="task-table-header">
                <span>"S.N."</span>
                <span>"Title"</span>
                <span>"Status"</span>
                <span>"Action"</span>
            </div>

            <ul class="task-rows">
                <For
                    each=rows
                    // Position is part of the key so numbers re-flow after a delete
                    key=|(position, task)| (*position, task.id.clone(), task.title.clone(), task.completed)
                    children=move |(position, task)| {
                        let completed = task.completed;
                        let toggle_id = task.id.clone();
                        let delete_id = task.id.clone();

                        view! {
                            <li class="task-row">
                                <span class="task-position">{position}</span>
                                <span class=if completed { "task-title completed" } else { "task-title" }>
                                    {task.title.clone()}
                                </span>
                                <span>
                                    <button
                                        class=if completed { "status-btn completed" } else { "status-btn pending" }
                                        on:click=move |_| on_toggle.run(toggle_id.clone())
                                    >
                                        {status_label(completed)}
                                    </button>
                                </span>
                                <span>
                                    <button
                                        class="remove-btn"
                                        on:click=move |_| on_delete.run(delete_id.clone())
                                    >
                                        "🗑 Remove"
                                    </button>
                                </span>
                            </li>
                        }
                    }
                />
            </ul>

            {move || tasks.with(|tasks| empty_state(tasks)).map(|text| view! {
                <p class="empty-placeholder">{text}</p>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: &str) -> Task {
        Task {
            id: id.to_string(),
            title: format!("Task {}", id),
            completed: false,
            user_id: "1".to_string(),
        }
    }

    #[test]
    fn test_empty_state_only_without_tasks() {
        assert_eq!(empty_state(&[]), Some("No ToDos yet. Add something! 🚀"));
        assert_eq!(empty_state(&[make_task("1")]), None);
    }

    #[test]
    fn test_status_label() {
        assert_eq!(status_label(true), "✅ Completed");
        assert_eq!(status_label(false), "❌ Pending");
    }
}
