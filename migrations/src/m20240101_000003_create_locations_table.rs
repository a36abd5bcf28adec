use sea_orm_migration::prelude::*;

use crate::m20240101_000002_create_racks_table::Racks;

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
                            .uuid()
                            .primary_key()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Locations::RackId).uuid().not_null())
                    .col(ColumnDef::new(Locations::Row).integer().not_null())
                    .col(ColumnDef::new(Locations::Grid).integer().not_null())
                    .col(ColumnDef::new(Locations::Zone).string().not_null())
                    .col(ColumnDef::new(Locations::Capacity).integer().not_null())
                    .col(ColumnDef::new(Locations::XCoordinates).string().not_null())
                    .col(ColumnDef::new(Locations::YCoordinates).string().not_null())
                    .col(ColumnDef::new(Locations::ZCoordinates).string().not_null())
                    .col(
                        ColumnDef::new(Locations::Description)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Locations::IsDeleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Locations::CreatedDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Locations::UpdatedDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Locations::DeletedDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_locations_rack_id")
                            .from(Locations::Table, Locations::RackId)
                            .to(Racks::Table, Racks::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_locations_rack_id")
                    .table(Locations::Table)
                    .col(Locations::RackId)
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

#[derive(DeriveIden)]
pub enum Locations {
    Table,
    Id,
    RackId,
    Row,
    Grid,
    Zone,
    Capacity,
    XCoordinates,
    YCoordinates,
    ZCoordinates,
    Description,
    IsDeleted,
    CreatedDate,
    UpdatedDate,
    DeletedDate,
}
