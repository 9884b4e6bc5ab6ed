use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Gear::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Gear::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Gear::Name).string().not_null())
                    .col(ColumnDef::new(Gear::Category).string().not_null())
                    .col(ColumnDef::new(Gear::Description).text().null())
                    .col(ColumnDef::new(Gear::OwnerId).integer().null())
                    .col(
                        ColumnDef::new(Gear::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Gear::Table, Gear::OwnerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Gear::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Gear {
    Table,
    Id,
    Name,
    Category,
    Description,
    OwnerId,
    CreatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
