use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A rectangular storage unit placed inside exactly one blueprint.
///
/// `rotation_degrees` is one of {0, 90, 180, 270}; at 90/270 the effective
/// bounding box swaps `width` and `height` for collision and boundary checks.
/// The stored `width`/`height` themselves never change on rotation.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "racks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub blueprint_id: Uuid,
    pub name: String,
    pub position_x: Decimal,
    pub position_y: Decimal,
    pub width: Decimal,
    pub height: Decimal,
    pub rows: i32,
    pub grids: i32,
    pub rotation_degrees: i32,
    pub is_deleted: bool,
    pub created_date: DateTimeUtc,
    pub updated_date: Option<DateTimeUtc>,
    pub deleted_date: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::blueprint::Entity",
        from = "Column::BlueprintId",
        to = "super::blueprint::Column::Id"
    )]
    Blueprint,
    #[sea_orm(has_many = "super::location::Entity")]
    Locations,
}

impl Related<super::blueprint::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Blueprint.def()
    }
}

impl Related<super::location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Locations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
