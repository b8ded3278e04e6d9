use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Owner-scoped lookups hit these on every dashboard/history request
        manager
            .create_index(
                Index::create()
                    .name("idx_inventory_user")
                    .table(Inventory::Table)
                    .col(Inventory::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_crawled_data_user")
                    .table(CrawledData::Table)
                    .col(CrawledData::UserId)
                    .to_owned(),
            )
            .await?;

        // Duplicate catalog inserts are skipped, enforced here as well
        manager
            .create_index(
                Index::create()
                    .name("idx_youtube_data_user_video")
                    .table(YoutubeData::Table)
                    .col(YoutubeData::UserId)
                    .col(YoutubeData::VideoId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_inventory_user")
                    .table(Inventory::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_crawled_data_user")
                    .table(CrawledData::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_youtube_data_user_video")
                    .table(YoutubeData::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Inventory {
    Table,
    UserId,
}

#[derive(DeriveIden)]
enum CrawledData {
    Table,
    UserId,
}

#[derive(DeriveIden)]
enum YoutubeData {
    Table,
    UserId,
    VideoId,
}
