//! Given an AppState, build an initialized Actix **test service** wrapped in
//! the production middleware and routes.

use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::web;
use actix_web::{App, Error as ActixError};

use crate::middleware::{RequestTrace, StructuredLogger, TraceSpan};
use crate::state::app_state::AppState;

pub fn create_test_app_builder(state: AppState) -> TestAppBuilder {
    TestAppBuilder { state }
}

pub struct TestAppBuilder {
    state: AppState,
}

impl TestAppBuilder {
    /// Build and initialize the Actix test service.
    pub async fn build(
        self,
    ) -> impl Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = ActixError>
    {
        let app = App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(web::Data::new(self.state))
            .configure(crate::routes::configure);

        actix_web::test::init_service(app).await
    }
}
