pub mod cors;
pub mod request_trace;
pub mod structured_logger;
pub mod trace_span;

pub use cors::cors_middleware;
pub use request_trace::{RequestId, RequestTrace};
pub use structured_logger::{CatalogOutcome, StructuredLogger};
pub use trace_span::TraceSpan;
