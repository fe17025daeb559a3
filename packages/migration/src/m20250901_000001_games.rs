use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum Games {
    Table,
    Id,
    Name,
    Description,
    MinPlayers,
    MaxPlayers,
    AvgDuration,
    Picture,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Games::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Games::Name).string().not_null())
                    .col(ColumnDef::new(Games::Description).text().not_null())
                    .col(ColumnDef::new(Games::MinPlayers).integer().not_null())
                    .col(ColumnDef::new(Games::MaxPlayers).integer().not_null())
                    .col(ColumnDef::new(Games::AvgDuration).integer().not_null())
                    .col(ColumnDef::new(Games::Picture).string().not_null())
                    .check(Expr::col(Games::MinPlayers).lte(Expr::col(Games::MaxPlayers)))
                    .to_owned(),
            )
            .await?;

        // Player-range lookups
        manager
            .create_index(
                Index::create()
                    .name("ix_games_players")
                    .table(Games::Table)
                    .col(Games::MinPlayers)
                    .col(Games::MaxPlayers)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_games_avg_duration")
                    .table(Games::Table)
                    .col(Games::AvgDuration)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("ix_games_avg_duration")
                    .table(Games::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ix_games_players")
                    .table(Games::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Games::Table).to_owned())
            .await?;

        Ok(())
    }
}
