use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error as ActixError, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn};

use super::request_trace::RequestId;
use crate::domain::GameFilter;

/// What a catalog handler answered with.
///
/// Handlers attach it to their response; the logger reads it back so the
/// completion line carries the parsed filter and the number of games served.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogOutcome {
    pub filter: GameFilter,
    pub results: usize,
}

/// One `request_completed` line per request, level chosen by status class.
///
/// Catalog requests also log `catalog.filter` and `catalog.results`.
pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

fn catalog_outcome<B>(result: &Result<ServiceResponse<B>, ActixError>) -> Option<CatalogOutcome> {
    result
        .as_ref()
        .ok()
        .and_then(|res| res.response().extensions().get::<CatalogOutcome>().copied())
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let method = req.method().to_string();
        let path = req.path().to_string();

        let trace_id = req
            .extensions()
            .get::<RequestId>()
            .map(|id| id.as_str().to_string())
            .unwrap_or_else(|| "unknown".to_string());

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            let status = match &result {
                Ok(res) => res.status(),
                Err(err) => err.as_response_error().status_code(),
            };
            let outcome = catalog_outcome(&result);
            let filter = outcome.map(|o| o.filter.to_string());
            let results = outcome.map(|o| o.results as u64);

            let duration_us = start.elapsed().as_micros() as u64;
            let status_code = status.as_u16();

            macro_rules! completed {
                ($level:ident) => {
                    $level!(
                        http.method = %method,
                        url.path = %path,
                        http.status_code = status_code,
                        catalog.filter = filter.as_deref(),
                        catalog.results = results,
                        duration_us,
                        trace_id = %trace_id,
                        "request_completed"
                    )
                };
            }

            if status.is_server_error() {
                completed!(error);
            } else if status.is_client_error() {
                completed!(warn);
            } else {
                completed!(info);
            }

            result
        })
    }
}
