use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(YoutubeData::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(YoutubeData::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(YoutubeData::UserId).integer().not_null())
                    .col(ColumnDef::new(YoutubeData::VideoId).string().not_null())
                    .col(ColumnDef::new(YoutubeData::Title).string().not_null())
                    .col(ColumnDef::new(YoutubeData::Url).string().not_null())
                    .col(
                        ColumnDef::new(YoutubeData::ThumbnailUrl)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(YoutubeData::ChannelName)
                            .string()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_youtube_data_user")
                            .from(YoutubeData::Table, YoutubeData::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(YoutubeData::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum YoutubeData {
    Table,
    Id,
    UserId,
    VideoId,
    Title,
    Url,
    ThumbnailUrl,
    ChannelName,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
