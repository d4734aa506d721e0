use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create projects table
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Projects::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Projects::Name).string().not_null())
                    .col(ColumnDef::new(Projects::Url).string().not_null())
                    .col(
                        ColumnDef::new(Projects::IsPaused)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Projects::OwnerId).integer().not_null())
                    .col(
                        ColumnDef::new(Projects::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Create keywords table
        manager
            .create_table(
                Table::create()
                    .table(Keywords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Keywords::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Keywords::ProjectId).integer().not_null())
                    .col(ColumnDef::new(Keywords::Name).string().not_null())
                    .col(
                        ColumnDef::new(Keywords::IsPaused)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Keywords::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_keywords_project_id")
                            .from(Keywords::Table, Keywords::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create keyword_rankings table
        manager
            .create_table(
                Table::create()
                    .table(KeywordRankings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(KeywordRankings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(KeywordRankings::KeywordId).integer().not_null())
                    .col(ColumnDef::new(KeywordRankings::ProjectId).integer().not_null())
                    .col(ColumnDef::new(KeywordRankings::SearchEngine).string().not_null())
                    .col(ColumnDef::new(KeywordRankings::Region).string().not_null())
                    .col(ColumnDef::new(KeywordRankings::Device).string().not_null())
                    .col(ColumnDef::new(KeywordRankings::Position).integer().not_null())
                    .col(ColumnDef::new(KeywordRankings::Title).string().not_null())
                    .col(ColumnDef::new(KeywordRankings::Url).string().not_null())
                    .col(
                        ColumnDef::new(KeywordRankings::Snippet)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(KeywordRankings::CheckedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_keyword_rankings_keyword_id")
                            .from(KeywordRankings::Table, KeywordRankings::KeywordId)
                            .to(Keywords::Table, Keywords::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create indexes
        manager
            .create_index(
                Index::create()
                    .name("idx_keywords_project_id")
                    .table(Keywords::Table)
                    .col(Keywords::ProjectId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_keyword_rankings_keyword_checked")
                    .table(KeywordRankings::Table)
                    .col(KeywordRankings::KeywordId)
                    .col(KeywordRankings::CheckedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_keyword_rankings_project_id")
                    .table(KeywordRankings::Table)
                    .col(KeywordRankings::ProjectId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(KeywordRankings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Keywords::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    Name,
    Url,
    IsPaused,
    OwnerId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Keywords {
    Table,
    Id,
    ProjectId,
    Name,
    IsPaused,
    CreatedAt,
}

#[derive(DeriveIden)]
enum KeywordRankings {
    Table,
    Id,
    KeywordId,
    ProjectId,
    SearchEngine,
    Region,
    Device,
    Position,
    Title,
    Url,
    Snippet,
    CheckedAt,
}
