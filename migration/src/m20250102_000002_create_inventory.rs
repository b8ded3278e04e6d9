use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Inventory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Inventory::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Inventory::UserId).integer().not_null())
                    .col(ColumnDef::new(Inventory::Name).string().not_null())
                    .col(ColumnDef::new(Inventory::Quantity).big_integer().not_null())
                    .col(ColumnDef::new(Inventory::Category).string().not_null())
                    .col(ColumnDef::new(Inventory::Sector).string().not_null())
                    .col(ColumnDef::new(Inventory::Application).string().not_null())
                    .col(
                        ColumnDef::new(Inventory::DateAdded)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inventory_user")
                            .from(Inventory::Table, Inventory::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Inventory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Inventory {
    Table,
    Id,
    UserId,
    Name,
    Quantity,
    Category,
    Sector,
    Application,
    DateAdded,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
