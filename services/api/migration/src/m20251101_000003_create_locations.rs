use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Locations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Locations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Locations::Name).string().not_null())
                    .col(ColumnDef::new(Locations::ZipCode).string().not_null())
                    .col(ColumnDef::new(Locations::Address).string().null())
                    .col(ColumnDef::new(Locations::Notes).text().null())
                    .col(ColumnDef::new(Locations::Latitude).double().null())
                    .col(ColumnDef::new(Locations::Longitude).double().null())
                    .col(ColumnDef::new(Locations::Country).string().null())
                    .col(ColumnDef::new(Locations::OwnerId).integer().not_null())
                    .col(
                        ColumnDef::new(Locations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Locations::Table, Locations::OwnerId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Locations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Locations {
    Table,
    Id,
    Name,
    ZipCode,
    Address,
    Notes,
    Latitude,
    Longitude,
    Country,
    OwnerId,
    CreatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
