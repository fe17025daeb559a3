//! Catalog service: the lister and the random selector.

use tracing::{debug, warn};

use crate::domain::{CatalogPick, Game, GameFilter, OffsetPicker};
use crate::errors::domain::DomainError;
use crate::repos::catalog::CatalogRepo;

/// Redraws allowed when the matching set shrinks between count and fetch.
const MAX_PICK_ATTEMPTS: usize = 3;

pub struct CatalogService<R: CatalogRepo> {
    repo: R,
}

impl<R: CatalogRepo> CatalogService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Every game matching `filter`, ordered by id. Store failures propagate;
    /// they are never turned into an empty list.
    pub async fn list_games(&self, filter: &GameFilter) -> Result<Vec<Game>, DomainError> {
        self.repo.find(filter).await
    }

    /// One game drawn uniformly from the matching set.
    ///
    /// Count and fetch are separate statements. If a writer shrinks the
    /// matching set in between, the offset can point past its end; in that
    /// case the set is recounted and a new offset drawn. After
    /// `MAX_PICK_ATTEMPTS` the first matching game is returned instead, and
    /// `NoMatch` only if even that is gone.
    pub async fn pick_random(
        &self,
        filter: &GameFilter,
        picker: &OffsetPicker,
    ) -> Result<CatalogPick, DomainError> {
        for attempt in 1..=MAX_PICK_ATTEMPTS {
            let count = self.repo.count(filter).await?;
            let Some(offset) = picker.pick(count) else {
                debug!(%filter, "no game matches");
                return Ok(CatalogPick::NoMatch);
            };

            if let Some(game) = self.repo.find_at(filter, offset).await? {
                debug!(%filter, count, offset, game_id = game.id, "random game picked");
                return Ok(CatalogPick::Found(game));
            }

            warn!(%filter, count, offset, attempt, "matching set shrank between count and fetch");
        }

        Ok(match self.repo.find_at(filter, 0).await? {
            Some(game) => CatalogPick::Found(game),
            None => CatalogPick::NoMatch,
        })
    }

    pub async fn catalog_size(&self) -> Result<u64, DomainError> {
        self.repo.count_all().await
    }
}
