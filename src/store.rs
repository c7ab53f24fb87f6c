//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! All task mutations go through the `store_*` helpers below.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::{CancelToken, FetchOutcome};
use crate::models::Task;
use crate::tasks;

/// Visibility of the add-task modal
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormVisibility {
    #[default]
    Closed,
    Open,
}

impl FormVisibility {
    pub fn is_open(self) -> bool {
        self == FormVisibility::Open
    }

    /// State after pressing the header toggle button
    pub fn toggled(self) -> Self {
        match self {
            FormVisibility::Closed => FormVisibility::Open,
            FormVisibility::Open => FormVisibility::Closed,
        }
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Owned task sequence, in insertion order
    pub tasks: Vec<Task>,
    /// True while the mount-time fetch is in flight
    pub loading: bool,
    /// Last fetch failure message, empty when none
    pub error: String,
    pub form: FormVisibility,
}

impl AppState {
    /// Initial state. The fetch starts on mount, so we begin in `loading`.
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Fetch lifecycle
// ========================

/// Mark the fetch as started and clear any previous error
pub fn store_begin_fetch(store: &AppStore) {
    store.error().set(String::new());
    store.loading().set(true);
}

/// Apply the fetch result. `loading` is cleared on both paths.
pub fn store_finish_fetch(store: &AppStore, outcome: FetchOutcome) {
    match outcome {
        Ok(fetched) => {
            store.tasks().set(fetched);
            store.error().set(String::new());
        }
        Err(err) => store.error().set(err.to_string()),
    }
    store.loading().set(false);
}

/// Run one fetch against the store: begin, await, then apply unless cancelled.
/// Returns whether the outcome reached the store.
pub async fn run_mount_fetch<Fut>(store: AppStore, cancel: CancelToken, pending: Fut) -> bool
where
    Fut: Future<Output = FetchOutcome>,
{
    if cancel.is_cancelled() {
        return false;
    }
    store_begin_fetch(&store);
    let outcome = pending.await;
    if cancel.is_cancelled() {
        return false;
    }
    store_finish_fetch(&store, outcome);
    true
}

/// Spawn the fetch once when the owning component mounts.
/// The effect reads no signals, so later store writes never re-run it.
pub fn mount_fetch_effect<F, Fut>(store: AppStore, cancel: CancelToken, fetch: F)
where
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = FetchOutcome> + 'static,
{
    Effect::new(move |_| {
        let cancel = cancel.clone();
        let pending = fetch();
        spawn_local(async move {
            run_mount_fetch(store, cancel, pending).await;
        });
    });
}

// ========================
// Task mutations
// ========================

/// Flip completion of a task by ID
pub fn store_toggle_task(store: &AppStore, id: &str) {
    tasks::toggle_completed(&mut store.tasks().write(), id);
}

/// Append a task and close the creation form
pub fn store_add_task(store: &AppStore, task: Task) {
    tasks::append_task(&mut store.tasks().write(), task);
    store.form().set(FormVisibility::Closed);
}

/// Remove a task from the store by ID
pub fn store_remove_task(store: &AppStore, id: &str) {
    tasks::remove_task(&mut store.tasks().write(), id);
}

// ========================
// Form visibility
// ========================

pub fn store_toggle_form(store: &AppStore) {
    store.form().update(|form| *form = form.toggled());
}

pub fn store_close_form(store: &AppStore) {
    store.form().set(FormVisibility::Closed);
}
