//! Remote Task Fetch
//!
//! One-shot GET against the public todo endpoint using the browser fetch API.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::models::Task;

/// Remote todo collection
pub const TASKS_URL: &str = "https://jsonplaceholder.typicode.com/todos";

/// Number of records requested on mount
pub const FETCH_LIMIT: usize = 5;

/// Where and how much to fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub base_url: String,
    pub limit: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: TASKS_URL.to_string(),
            limit: FETCH_LIMIT,
        }
    }
}

impl FetchConfig {
    /// Full request URL including the `_limit` query
    pub fn url(&self) -> String {
        format!("{}?_limit={}", self.base_url, self.limit)
    }
}

/// Everything that can go wrong between issuing the request and holding `Vec<Task>`
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("failed to build request: {0}")]
    Request(String),
    /// Network-level failure, shown with the browser's own message
    #[error("{0}")]
    Transport(String),
    #[error("request failed with status {0}")]
    Status(u16),
    #[error("failed to read response body: {0}")]
    Body(String),
    #[error("unexpected response format: {0}")]
    Parse(String),
}

/// Result of the mount-time fetch, delivered to the store
pub type FetchOutcome = Result<Vec<Task>, FetchError>;

/// Extract a readable message from a thrown JS value
fn js_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Fetch a batch of tasks. No retry and no timeout.
pub async fn fetch_tasks(config: &FetchConfig) -> FetchOutcome {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    let request = Request::new_with_str_and_init(&config.url(), &opts)
        .map_err(|e| FetchError::Request(js_message(&e)))?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| FetchError::Transport(js_message(&e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|e| FetchError::Transport(js_message(&e)))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let body = response.json().map_err(|e| FetchError::Body(js_message(&e)))?;
    let body = JsFuture::from(body)
        .await
        .map_err(|e| FetchError::Body(js_message(&e)))?;

    serde_wasm_bindgen::from_value(body).map_err(|e| FetchError::Parse(e.to_string()))
}

/// Cancellation flag shared between a spawned fetch and its owner.
/// The owner cancels at teardown; the task drops its result once cancelled.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}
