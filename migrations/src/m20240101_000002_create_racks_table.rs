use sea_orm_migration::prelude::*;

use crate::m20240101_000001_create_blueprints_table::Blueprints;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Racks::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Racks::Id).uuid().primary_key().not_null())
                    .col(ColumnDef::new(Racks::BlueprintId).uuid().not_null())
                    .col(ColumnDef::new(Racks::Name).string().not_null())
                    .col(ColumnDef::new(Racks::PositionX).decimal().not_null())
                    .col(ColumnDef::new(Racks::PositionY).decimal().not_null())
                    .col(ColumnDef::new(Racks::Width).decimal().not_null())
                    .col(ColumnDef::new(Racks::Height).decimal().not_null())
                    .col(ColumnDef::new(Racks::Rows).integer().not_null())
                    .col(ColumnDef::new(Racks::Grids).integer().not_null())
                    .col(
                        ColumnDef::new(Racks::RotationDegrees)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Racks::IsDeleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Racks::CreatedDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Racks::UpdatedDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Racks::DeletedDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_racks_blueprint_id")
                            .from(Racks::Table, Racks::BlueprintId)
                            .to(Blueprints::Table, Blueprints::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_racks_blueprint_id")
                    .table(Racks::Table)
                    .col(Racks::BlueprintId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Racks::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Racks {
    Table,
    Id,
    BlueprintId,
    Name,
    PositionX,
    PositionY,
    Width,
    Height,
    Rows,
    Grids,
    RotationDegrees,
    IsDeleted,
    CreatedDate,
    UpdatedDate,
    DeletedDate,
}
