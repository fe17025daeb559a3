//! Catalog repository seam: what the selection logic needs from a store.

use async_trait::async_trait;
use tracing::error;

use crate::domain::{Game, GameFilter};
use crate::entities::games;
use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::web::trace_ctx;

const CORRUPT_ROW_DETAIL: &str = "Stored game data is invalid";

/// Read-only access to the game catalog.
///
/// `find` and `find_at` must agree on ordering so that an offset drawn from
/// `count` addresses the same row `find` would list at that position.
#[async_trait]
pub trait CatalogRepo: Send + Sync {
    /// Exact number of games matching `filter`.
    async fn count(&self, filter: &GameFilter) -> Result<u64, DomainError>;

    /// All games matching `filter`, ordered by id.
    async fn find(&self, filter: &GameFilter) -> Result<Vec<Game>, DomainError>;

    /// Game at zero-based `offset` within the matching set, if any.
    async fn find_at(&self, filter: &GameFilter, offset: u64) -> Result<Option<Game>, DomainError>;

    /// Size of the whole catalog.
    async fn count_all(&self) -> Result<u64, DomainError> {
        self.count(&GameFilter::match_all()).await
    }
}

impl TryFrom<games::Model> for Game {
    type Error = DomainError;

    fn try_from(row: games::Model) -> Result<Self, Self::Error> {
        let id = row.id;
        let corrupt = |column: &str| {
            error!(trace_id = %trace_ctx::trace_id(), game_id = id, column, "Stored row breaks game invariants");
            DomainError::infra(InfraErrorKind::DataCorruption, CORRUPT_ROW_DETAIL)
        };

        let min_players = u32::try_from(row.min_players)
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| corrupt("min_players"))?;
        let max_players = u32::try_from(row.max_players)
            .ok()
            .filter(|n| *n >= min_players)
            .ok_or_else(|| corrupt("max_players"))?;
        let avg_duration = u32::try_from(row.avg_duration)
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| corrupt("avg_duration"))?;

        Ok(Game {
            id: row.id,
            name: row.name,
            description: row.description,
            min_players,
            max_players,
            avg_duration,
            picture: row.picture,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(min: i32, max: i32, duration: i32) -> games::Model {
        games::Model {
            id: 9,
            name: "Carcassonne".into(),
            description: "Tiles".into(),
            min_players: min,
            max_players: max,
            avg_duration: duration,
            picture: "/c.png".into(),
        }
    }

    #[test]
    fn converts_valid_row() {
        let game = Game::try_from(row(2, 5, 35)).unwrap();
        assert_eq!(game.id, 9);
        assert_eq!((game.min_players, game.max_players, game.avg_duration), (2, 5, 35));
    }

    #[test]
    fn rejects_rows_breaking_invariants() {
        for bad in [row(0, 4, 30), row(-1, 4, 30), row(5, 2, 30), row(2, 4, 0)] {
            let err = Game::try_from(bad).unwrap_err();
            assert!(matches!(
                err,
                DomainError::Infra(InfraErrorKind::DataCorruption, _)
            ));
        }
    }

    #[test]
    fn corrupt_row_detail_hides_row_identity() {
        let err = Game::try_from(row(5, 2, 30)).unwrap_err();
        let DomainError::Infra(_, detail) = err else {
            panic!("expected an infra error");
        };
        assert_eq!(detail, "Stored game data is invalid");
        assert!(!detail.contains('9'), "{detail}");
        assert!(!detail.contains("max_players"), "{detail}");
    }
}
