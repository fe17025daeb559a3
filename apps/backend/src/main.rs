use actix_web::{web, App, HttpServer};
use picker_backend::config::db::{db_kind_from_env, RuntimeEnv};
use picker_backend::config::server::ServerConfig;
use picker_backend::infra::state::build_state;
use picker_backend::middleware::cors::cors_middleware;
use picker_backend::middleware::request_trace::RequestTrace;
use picker_backend::middleware::structured_logger::StructuredLogger;
use picker_backend::middleware::trace_span::TraceSpan;
use picker_backend::routes;
use tracing::{error, info};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: set via docker-compose env_file or docker run --env-file
    // - Local dev: source env files manually (e.g., set -a; . ./.env; set +a)
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid server configuration");
            std::process::exit(1);
        }
    };

    let db_kind = match db_kind_from_env() {
        Ok(kind) => kind,
        Err(e) => {
            error!(error = %e, "invalid database configuration");
            std::process::exit(1);
        }
    };

    info!(host = %config.host, port = config.port, ?db_kind, "starting picker backend");

    let app_state = match build_state()
        .with_env(RuntimeEnv::Prod)
        .with_db(db_kind)
        .with_rng_seed(config.rng_seed)
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "failed to build application state");
            std::process::exit(1);
        }
    };

    // Wrap AppState with web::Data before passing to HttpServer
    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
