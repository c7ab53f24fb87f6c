//! Task Board App
//!
//! Root component: owns the task store, runs the mount-time fetch and
//! composes the form, banners and task table.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::{self, CancelToken, FetchConfig};
use crate::components::{AddTaskForm, TaskTable};
use crate::models::Task;
use crate::store::{
    mount_fetch_effect, store_add_task, store_close_form, store_remove_task, store_toggle_form,
    store_toggle_task, AppState, AppStateStoreFields,
};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());

    // Late fetch results are dropped once the app is torn down
    let cancel = CancelToken::new();
    on_cleanup({
        let cancel = cancel.clone();
        move || cancel.cancel()
    });

    // Fetch once on mount
    mount_fetch_effect(store, cancel, || async {
        let config = FetchConfig::default();
        web_sys::console::log_1(&format!("[FETCH] GET {}", config.url()).into());
        let outcome = api::fetch_tasks(&config).await;
        match &outcome {
            Ok(tasks) => web_sys::console::log_1(&format!("[FETCH] Loaded {} tasks", tasks.len()).into()),
            Err(err) => web_sys::console::error_1(&format!("[FETCH] Failed: {}", err).into()),
        }
        outcome
    });

    let on_toggle = Callback::new(move |id: String| store_toggle_task(&store, &id));
    let on_delete = Callback::new(move |id: String| {
        web_sys::console::log_1(&format!("[APP] Removing task {}", id).into());
        store_remove_task(&store, &id);
    });
    let on_add = Callback::new(move |task: Task| {
        web_sys::console::log_1(&format!("[APP] Adding task {}", task.id).into());
        store_add_task(&store, task);
    });
    let on_close = Callback::new(move |_: ()| store_close_form(&store));

    let tasks = Signal::derive(move || store.tasks().get());
    let form_open = move || store.form().get().is_open();

    view! {
        <div class="page">
            <div class="board">
                <div class="toolbar">
                    <button
                        class=move || if form_open() { "toggle-form-btn open" } else { "toggle-form-btn" }
                        on:click=move |_| store_toggle_form(&store)
                    >
                        {move || if form_open() { "❌ Close" } else { "➕ Add Task" }}
                    </button>
                </div>

                <Show when=form_open>
                    <AddTaskForm on_add=on_add on_close=on_close />
                </Show>

                <Show when=move || !store.error().get().is_empty()>
                    <div class="error-banner">"❗ " {move || store.error().get()}</div>
                </Show>

                <Show
                    when=move || !store.loading().get()
                    fallback=|| view! { <div class="loading-banner">"🔄 Fetching ToDo..."</div> }
                >
                    <TaskTable tasks=tasks on_toggle=on_toggle on_delete=on_delete />
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use crate::api::FetchError;
    use crate::components::{empty_state, submit_draft, TaskDraft};
    use crate::models::Task;
    use crate::store::*;
    use crate::tasks::numbered;
    use leptos::prelude::*;
    use pretty_assertions::assert_eq;
    use reactive_stores::Store;

    fn setup_store() -> (Owner, AppStore) {
        let owner = Owner::new();
        owner.set();
        (owner, Store::new(AppState::new()))
    }

    fn add_callback(store: AppStore) -> Callback<Task> {
        Callback::new(move |task: Task| store_add_task(&store, task))
    }

    fn close_callback(store: AppStore) -> Callback<()> {
        Callback::new(move |_: ()| store_close_form(&store))
    }

    fn remote(id: u32, title: &str) -> Task {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            completed: false,
            user_id: "1".to_string(),
        }
    }

    #[test]
    fn test_mount_then_successful_fetch() {
        let (_owner, store) = setup_store();
        assert!(store.tasks().get_untracked().is_empty());
        assert!(store.loading().get_untracked());

        let batch: Vec<Task> = (1..=5).map(|i| remote(i, "remote")).collect();
        store_begin_fetch(&store);
        store_finish_fetch(&store, Ok(batch.clone()));

        assert!(!store.loading().get_untracked());
        assert_eq!(store.error().get_untracked(), "");
        assert_eq!(store.tasks().get_untracked(), batch);
    }

    #[test]
    fn test_network_error_leaves_empty_board() {
        let (_owner, store) = setup_store();
        store_begin_fetch(&store);
        store_finish_fetch(&store, Err(FetchError::Transport("Network Error".into())));

        assert!(!store.loading().get_untracked());
        assert_eq!(store.error().get_untracked(), "Network Error");
        assert!(store.tasks().get_untracked().is_empty());
        assert!(empty_state(&store.tasks().get_untracked()).is_some());
    }

    #[test]
    fn test_add_through_form() {
        let (_owner, store) = setup_store();
        store_finish_fetch(&store, Ok(vec![remote(1, "existing")]));
        store_toggle_form(&store);

        let draft = RwSignal::new(TaskDraft::default());
        draft.update(|d| d.title = "Buy milk".to_string());
        submit_draft(draft, add_callback(store), close_callback(store));

        let tasks = store.tasks().get_untracked();
        assert_eq!(tasks.len(), 2);
        let last = tasks.last().unwrap();
        assert_eq!(last.title, "Buy milk");
        assert!(last.completed);
        assert!(!store.form().get_untracked().is_open());
    }

    #[test]
    fn test_empty_submit_changes_nothing() {
        let (_owner, store) = setup_store();
        store_finish_fetch(&store, Ok(vec![remote(1, "existing")]));
        store_toggle_form(&store);

        let draft = RwSignal::new(TaskDraft::default());
        submit_draft(draft, add_callback(store), close_callback(store));

        assert_eq!(store.tasks().get_untracked(), vec![remote(1, "existing")]);
        assert_eq!(store.form().get_untracked(), FormVisibility::Open);
    }

    #[test]
    fn test_delete_middle_reflows_positions() {
        let (_owner, store) = setup_store();
        store_finish_fetch(
            &store,
            Ok(vec![remote(1, "first"), remote(2, "second"), remote(3, "third")]),
        );

        store_remove_task(&store, "2");

        let rows = numbered(&store.tasks().get_untracked());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].0, 2);
        assert_eq!(rows[1].1.title, "third");
    }
}
