use sea_orm_migration::prelude::*;

use crate::m20240101_000003_create_locations_table::Locations;
use crate::m20240101_000006_create_products_table::Products;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Inventories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Inventories::Id)
                            .uuid()
                            .primary_key()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Inventories::ProductId).uuid().not_null())
                    .col(ColumnDef::new(Inventories::LocationId).uuid().not_null())
                    .col(
                        ColumnDef::new(Inventories::CurrentStock)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Inventories::ReorderLevel)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Inventories::UnitsOnOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Inventories::LastUpdated)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Inventories::IsDeleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Inventories::CreatedDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Inventories::UpdatedDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Inventories::DeletedDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inventories_product_id")
                            .from(Inventories::Table, Inventories::ProductId)
                            .to(Products::Table, Products::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inventories_location_id")
                            .from(Inventories::Table, Inventories::LocationId)
                            .to(Locations::Table, Locations::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_inventories_product_id")
                    .table(Inventories::Table)
                    .col(Inventories::ProductId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Inventories::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Inventories {
    Table,
    Id,
    ProductId,
    LocationId,
    CurrentStock,
    ReorderLevel,
    UnitsOnOrder,
    LastUpdated,
    IsDeleted,
    CreatedDate,
    UpdatedDate,
    DeletedDate,
}
