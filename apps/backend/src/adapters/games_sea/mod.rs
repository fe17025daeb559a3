//! SeaORM adapter for the game catalog - generic over ConnectionTrait.

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Select, Set, TransactionTrait,
};

use crate::domain::{DurationClause, Game, GameFilter, PlayerClause};
use crate::entities::games;
use crate::errors::domain::DomainError;
use crate::repos::catalog::CatalogRepo;

pub mod dto;

pub use dto::GameCreate;

// Adapter functions return DbErr; the repo impl below maps to DomainError.

/// Translate a filter into a SeaORM condition.
pub fn condition(filter: &GameFilter) -> Condition {
    let mut cond = Condition::all();

    if let PlayerClause::Seats(n) = filter.players {
        let n = i64::from(n.get());
        cond = cond
            .add(games::Column::MinPlayers.lte(n))
            .add(games::Column::MaxPlayers.gte(n));
    }

    if let DurationClause::AtMost(max) = filter.duration {
        cond = cond.add(games::Column::AvgDuration.lte(i64::from(max.get())));
    }

    cond
}

/// Matching set in its canonical order (primary key ascending).
fn matching(filter: &GameFilter) -> Select<games::Entity> {
    games::Entity::find()
        .filter(condition(filter))
        .order_by_asc(games::Column::Id)
}

pub async fn count_matching<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    filter: &GameFilter,
) -> Result<u64, sea_orm::DbErr> {
    games::Entity::find()
        .filter(condition(filter))
        .count(conn)
        .await
}

pub async fn find_matching<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    filter: &GameFilter,
) -> Result<Vec<games::Model>, sea_orm::DbErr> {
    matching(filter).all(conn).await
}

/// Row at ordinal `offset` within the matching set, if the set is still that large.
pub async fn find_matching_at<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    filter: &GameFilter,
    offset: u64,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    matching(filter).offset(offset).one(conn).await
}

pub async fn count_all<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, sea_orm::DbErr> {
    games::Entity::find().count(conn).await
}

pub async fn insert_games<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dtos: &[GameCreate],
) -> Result<(), sea_orm::DbErr> {
    if dtos.is_empty() {
        return Ok(());
    }

    let rows = dtos.iter().map(|dto| games::ActiveModel {
        name: Set(dto.name.clone()),
        description: Set(dto.description.clone()),
        min_players: Set(to_column(dto.min_players)),
        max_players: Set(to_column(dto.max_players)),
        avg_duration: Set(to_column(dto.avg_duration)),
        picture: Set(dto.picture.clone()),
        ..Default::default()
    });

    games::Entity::insert_many(rows).exec(conn).await?;
    Ok(())
}

// Callers validate first; saturate rather than wrap if they did not.
fn to_column(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// SeaORM implementation of [`CatalogRepo`].
#[derive(Debug, Clone)]
pub struct CatalogRepoSea {
    db: DatabaseConnection,
}

impl CatalogRepoSea {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validate every entry, then insert them all in one transaction.
    ///
    /// Returns the number of inserted rows. A failing entry aborts the
    /// whole import and is reported by its zero-based index.
    pub async fn import(&self, dtos: &[GameCreate]) -> Result<usize, DomainError> {
        for (index, dto) in dtos.iter().enumerate() {
            dto.validate().map_err(|e| match e {
                DomainError::Validation(detail) => {
                    DomainError::validation(format!("entry {index} ({}): {detail}", dto.name))
                }
                other => other,
            })?;
        }

        let txn = self.db.begin().await?;
        insert_games(&txn, dtos).await?;
        txn.commit().await?;
        Ok(dtos.len())
    }
}

#[async_trait]
impl CatalogRepo for CatalogRepoSea {
    async fn count(&self, filter: &GameFilter) -> Result<u64, DomainError> {
        Ok(count_matching(&self.db, filter).await?)
    }

    async fn find(&self, filter: &GameFilter) -> Result<Vec<Game>, DomainError> {
        find_matching(&self.db, filter)
            .await?
            .into_iter()
            .map(Game::try_from)
            .collect()
    }

    async fn find_at(&self, filter: &GameFilter, offset: u64) -> Result<Option<Game>, DomainError> {
        find_matching_at(&self.db, filter, offset)
            .await?
            .map(Game::try_from)
            .transpose()
    }

    async fn count_all(&self) -> Result<u64, DomainError> {
        Ok(count_all(&self.db).await?)
    }
}
