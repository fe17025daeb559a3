use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderName, HeaderValue},
    HttpMessage,
};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Per-request id, stored in request extensions by [`RequestTrace`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

impl RequestId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Assigns every request a fresh id and echoes it in `x-request-id`.
pub struct RequestTrace;

impl<S, B> Transform<S, ServiceRequest> for RequestTrace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RequestTraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestTraceMiddleware { service }))
    }
}

pub struct RequestTraceMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestTraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let request_id = Uuid::new_v4().to_string();
        req.extensions_mut().insert(RequestId(request_id.clone()));

        let fut = self.service.call(req);

        Box::pin(async move {
            let mut res = fut.await?;

            // a v4 uuid is always a valid header value
            if let Ok(value) = HeaderValue::from_str(&request_id) {
                res.headers_mut()
                    .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
            }

            Ok(res)
        })
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App, HttpMessage, HttpRequest, HttpResponse};

    use super::*;

    async fn echo(req: HttpRequest) -> HttpResponse {
        let id = req
            .extensions()
            .get::<RequestId>()
            .map(|id| id.as_str().to_string())
            .unwrap_or_default();
        HttpResponse::Ok().body(id)
    }

    #[actix_web::test]
    async fn header_matches_extension() {
        let app = test::init_service(
            App::new()
                .wrap(RequestTrace)
                .route("/", web::get().to(echo)),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        let header = resp
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .unwrap();
        let body = test::read_body(resp).await;

        assert_eq!(header.as_bytes(), &body[..]);
        assert!(Uuid::parse_str(&header).is_ok());
    }
}
