//! Catalog routes: `/api/games` and `/api/games/random`.

use actix_web::{web, HttpResponse};
use tracing::debug;

use crate::adapters::CatalogRepoSea;
use crate::error::AppError;
use crate::extractors::CatalogQuery;
use crate::middleware::CatalogOutcome;
use crate::services::CatalogService;
use crate::state::app_state::AppState;

fn catalog(app_state: &AppState) -> Result<CatalogService<CatalogRepoSea>, AppError> {
    app_state.catalog().ok_or_else(AppError::db_unavailable)
}

/// GET /api/games?players={n}&maxDuration={m}
///
/// Every matching game as a JSON array, ordered by id.
async fn list_games(
    query: CatalogQuery,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let filter = query.into_inner();
    let games = catalog(&app_state)?.list_games(&filter).await?;
    let results = games.len();
    debug!(%filter, count = results, "listing games");

    let mut resp = HttpResponse::Ok().json(games);
    resp.extensions_mut().insert(CatalogOutcome { filter, results });
    Ok(resp)
}

/// GET /api/games/random?players={n}&maxDuration={m}
///
/// One matching game, or JSON `null` when nothing matches.
async fn random_game(
    query: CatalogQuery,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let filter = query.into_inner();
    let pick = catalog(&app_state)?
        .pick_random(&filter, &app_state.picker)
        .await?;
    let game = pick.into_option();
    let results = usize::from(game.is_some());

    let mut resp = HttpResponse::Ok().json(game);
    resp.extensions_mut().insert(CatalogOutcome { filter, results });
    Ok(resp)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::get().to(list_games)))
        .service(web::resource("/random").route(web::get().to(random_game)));
}
