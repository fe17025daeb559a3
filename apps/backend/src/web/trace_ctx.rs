//! Task-local trace id for the request currently being served.
//!
//! `TraceSpan` opens the scope; error rendering and the DB error mapper read
//! from it so every log line and error body for a request carries the same id.

use std::cell::RefCell;
use std::future::Future;

use tokio::task_local;

task_local! {
    static TRACE_ID: RefCell<Option<String>>;
}

const UNKNOWN: &str = "unknown";

/// Trace id of the current request, or `"unknown"` outside a request scope.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(|cell| cell.borrow().clone())
        .ok()
        .flatten()
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Run `future` with `trace_id` installed as the task-local trace id.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: Future<Output = R>,
{
    TRACE_ID.scope(RefCell::new(Some(trace_id)), future).await
}
