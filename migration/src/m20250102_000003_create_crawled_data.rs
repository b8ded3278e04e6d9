use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CrawledData::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CrawledData::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CrawledData::UserId).integer().not_null())
                    .col(ColumnDef::new(CrawledData::Url).string().not_null())
                    .col(ColumnDef::new(CrawledData::CrawlData).json().not_null())
                    .col(ColumnDef::new(CrawledData::Status).string().not_null())
                    .col(
                        ColumnDef::new(CrawledData::CrawlDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_crawled_data_user")
                            .from(CrawledData::Table, CrawledData::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CrawledData::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CrawledData {
    Table,
    Id,
    UserId,
    Url,
    CrawlData,
    Status,
    CrawlDate,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
