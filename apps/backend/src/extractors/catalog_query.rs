use std::collections::HashMap;
use std::convert::Infallible;
use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use tracing::debug;

use crate::domain::GameFilter;

/// Catalog filter built from the query string.
///
/// Never rejects a request: an unparsable query string, unknown parameters
/// and malformed values all fall back to "no constraint". When a parameter
/// repeats, the last value wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogQuery(pub GameFilter);

impl CatalogQuery {
    pub fn from_query_string(query: &str) -> Self {
        let params = match web::Query::<HashMap<String, String>>::from_query(query) {
            Ok(q) => q.into_inner(),
            Err(e) => {
                debug!(error = %e, "unparsable query string, matching all games");
                HashMap::new()
            }
        };

        CatalogQuery(GameFilter::build(
            params.get("players").map(String::as_str),
            params.get("maxDuration").map(String::as_str),
        ))
    }

    pub fn into_inner(self) -> GameFilter {
        self.0
    }
}

impl FromRequest for CatalogQuery {
    type Error = Infallible;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Ok(Self::from_query_string(req.query_string())))
    }
}
