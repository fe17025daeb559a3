//! Per-request tracing span and trace-id scope.
//!
//! Opens a span named "request" carrying `trace_id`, `method` and `path`, and
//! installs the same id in [`crate::web::trace_ctx`] so error bodies and the
//! DB error mapper report it.
//!
//! Expects [`RequestTrace`](super::RequestTrace) to run first, so wire it
//! inside `RequestTrace`:
//!
//! App::new()
//!     .wrap(TraceSpan)      // reads the id, opens span + scope
//!     .wrap(RequestTrace)   // generates + stores the id, sets header

use std::future::{ready, Ready};

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{info_span, Instrument};

use super::request_trace::RequestId;
use crate::web::trace_ctx;

#[derive(Clone, Default)]
pub struct TraceSpan;

impl<S, B> Transform<S, ServiceRequest> for TraceSpan
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TraceSpanMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TraceSpanMiddleware { service }))
    }
}

pub struct TraceSpanMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for TraceSpanMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let trace_id = req
            .extensions()
            .get::<RequestId>()
            .map(|id| id.as_str().to_string())
            .unwrap_or_else(|| "missing-trace-id".to_string());

        let span = info_span!(
            "request",
            trace_id = %trace_id,
            method = %req.method(),
            path = %req.path()
        );

        let fut = self.service.call(req);

        Box::pin(trace_ctx::with_trace_id(trace_id, fut).instrument(span))
    }
}
