use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One storage slot inside a rack, addressed by 1-based (row, grid) indices.
/// Locations are bulk-generated whenever a rack is created or its row/grid
/// counts change; they are never created one-by-one from the designer.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "locations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub rack_id: Uuid,
    pub row: i32,
    pub grid: i32,
    pub zone: String,
    pub capacity: i32,
    pub x_coordinates: String,
    pub y_coordinates: String,
    pub z_coordinates: String,
    pub description: String,
    pub is_deleted: bool,
    pub created_date: DateTimeUtc,
    pub updated_date: Option<DateTimeUtc>,
    pub deleted_date: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::rack::Entity",
        from = "Column::RackId",
        to = "super::rack::Column::Id"
    )]
    Rack,
    #[sea_orm(has_many = "super::inventory::Entity")]
    Inventories,
}

impl Related<super::rack::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rack.def()
    }
}

impl Related<super::inventory::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Inventories.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
