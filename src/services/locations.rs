use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::{db::DbPool, entities::location, errors::ServiceError};

/// Locations are owned by racks and bulk-generated there; this service only
/// reads them and edits the free-form fields of a single slot.
#[derive(Clone)]
pub struct LocationService {
    db_pool: Arc<DbPool>,
}

/// Editable fields of a location. Row/grid indices are fixed at generation.
#[derive(Debug, Clone)]
pub struct LocationEdit {
    pub zone: String,
    pub capacity: i32,
    pub description: String,
}

impl LocationService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    #[instrument(skip(self))]
    pub async fn get_location(&self, id: Uuid) -> Result<Option<location::Model>, ServiceError> {
        let found = location::Entity::find_by_id(id)
            .filter(location::Column::IsDeleted.eq(false))
            .one(&*self.db_pool)
            .await?;
        Ok(found)
    }

    /// Active locations of a rack in (row, grid) order.
    #[instrument(skip(self))]
    pub async fn list_by_rack(&self, rack_id: Uuid) -> Result<Vec<location::Model>, ServiceError> {
        let locations = location::Entity::find()
            .filter(location::Column::RackId.eq(rack_id))
            .filter(location::Column::IsDeleted.eq(false))
            .order_by_asc(location::Column::Row)
            .order_by_asc(location::Column::Grid)
            .all(&*self.db_pool)
            .await?;
        Ok(locations)
    }

    #[instrument(skip(self, edit))]
    pub async fn update_location(&self, id: Uuid, edit: LocationEdit) -> Result<(), ServiceError> {
        if edit.capacity < 0 {
            return Err(ServiceError::ValidationError(
                "location capacity cannot be negative".into(),
            ));
        }

        let existing = location::Entity::find_by_id(id)
            .filter(location::Column::IsDeleted.eq(false))
            .one(&*self.db_pool)
            .await?
            .ok_or_else(|| ServiceError::not_found("Location", id))?;

        let mut model: location::ActiveModel = existing.into();
        model.zone = Set(edit.zone);
        model.capacity = Set(edit.capacity);
        model.description = Set(edit.description);
        model.updated_date = Set(Some(Utc::now()));
        model.update(&*self.db_pool).await?;

        Ok(())
    }
}
