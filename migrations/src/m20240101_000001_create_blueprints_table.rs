use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Blueprints::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Blueprints::Id)
                            .uuid()
                            .primary_key()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Blueprints::Name).string().not_null())
                    .col(ColumnDef::new(Blueprints::Width).decimal().not_null())
                    .col(ColumnDef::new(Blueprints::Height).decimal().not_null())
                    .col(ColumnDef::new(Blueprints::GridSize).integer().not_null())
                    .col(
                        ColumnDef::new(Blueprints::IsDeleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Blueprints::CreatedDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Blueprints::UpdatedDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Blueprints::DeletedDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Blueprints::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Blueprints {
    Table,
    Id,
    Name,
    Width,
    Height,
    GridSize,
    IsDeleted,
    CreatedDate,
    UpdatedDate,
    DeletedDate,
}
