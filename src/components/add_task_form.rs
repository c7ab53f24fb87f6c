//! Add Task Form Component
//!
//! Modal form for creating a task locally.

use leptos::prelude::*;

use crate::models::Task;

/// Status options for the select: (value, label)
const STATUS_OPTIONS: &[(&str, &str)] = &[
    ("true", "Completed"),
    ("false", "Pending"),
];

/// Uncommitted form input, owned by the form only
#[derive(Clone, Debug, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub completed: bool,
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            completed: true,
        }
    }
}

impl TaskDraft {
    /// Build a task from the draft. An empty title yields `None`.
    pub fn to_task(&self) -> Option<Task> {
        if self.title.is_empty() {
            return None;
        }
        Some(Task::new_local(self.title.clone(), self.completed))
    }

    pub fn set_status(&mut self, value: &str) {
        self.completed = value == "true";
    }
}

/// Commit the draft: add, reset, then close. Empty titles do nothing.
pub fn submit_draft(draft: RwSignal<TaskDraft>, on_add: Callback<Task>, on_close: Callback<()>) {
    let Some(task) = draft.with_untracked(|d| d.to_task()) else { return };

    on_add.run(task);
    draft.set(TaskDraft::default());
    on_close.run(());
}

/// Modal form producing a new task
#[component]
pub fn AddTaskForm(
    #[prop(into)] on_add: Callback<Task>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let draft = RwSignal::new(TaskDraft::default());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        submit_draft(draft, on_add, on_close);
    };

    let cancel = move |_| {
        draft.set(TaskDraft::default());
        on_close.run(());
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal">
                <button type="button" class="modal-close-btn" on:click=cancel>"×"</button>
                <h2 class="modal-title">"Add New ToDo"</h2>

                <form class="add-task-form" on:submit=on_submit>
                    <div class="form-field">
                        <label for="title">"Title"</label>
                        <input
                            id="title"
                            type="text"
                            placeholder="Enter your task"
                            prop:value=move || draft.with(|d| d.title.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.title = value);
                            }
                        />
                    </div>

                    <div class="form-field">
                        <label for="status">"Status"</label>
                        <select
                            id="status"
                            prop:value=move || draft.with(|d| d.completed.to_string())
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.set_status(&value));
                            }
                        >
                            {STATUS_OPTIONS.iter().map(|(value, label)| view! {
                                <option value=*value>{*label}</option>
                            }).collect_view()}
                        </select>
                    </div>

                    <button type="submit" class="submit-btn">"Add Task"</button>
                </form>
            </div>
        </div>
    }
}
