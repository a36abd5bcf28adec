use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A bounded floor plan. `width`/`height` are meters, `grid_size` is the
/// snapping unit in centimeters.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "blueprints")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub width: Decimal,
    pub height: Decimal,
    pub grid_size: i32,
    pub is_deleted: bool,
    pub created_date: DateTimeUtc,
    pub updated_date: Option<DateTimeUtc>,
    pub deleted_date: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::rack::Entity")]
    Racks,
}

impl Related<super::rack::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Racks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
