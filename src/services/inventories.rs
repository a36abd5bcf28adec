use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::{
    db::DbPool,
    entities::inventory,
    errors::ServiceError,
    events::{Event, EventSender},
};

#[derive(Debug, Clone)]
pub struct InventoryLevels {
    pub current_stock: i32,
    pub reorder_level: i32,
    pub units_on_order: i32,
}

impl InventoryLevels {
    fn validate(&self) -> Result<(), ServiceError> {
        if self.current_stock < 0 || self.reorder_level < 0 || self.units_on_order < 0 {
            return Err(ServiceError::ValidationError(
                "inventory quantities cannot be negative".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Clone)]
pub struct InventoryService {
    db_pool: Arc<DbPool>,
    event_sender: Arc<EventSender>,
}

impl InventoryService {
    pub fn new(db_pool: Arc<DbPool>, event_sender: Arc<EventSender>) -> Self {
        Self {
            db_pool,
            event_sender,
        }
    }

    #[instrument(skip(self, levels))]
    pub async fn create_inventory(
        &self,
        product_id: Uuid,
        location_id: Uuid,
        levels: InventoryLevels,
    ) -> Result<Uuid, ServiceError> {
        levels.validate()?;

        let id = Uuid::new_v4();
        let now = Utc::now();
        inventory::ActiveModel {
            id: Set(id),
            product_id: Set(product_id),
            location_id: Set(location_id),
            current_stock: Set(levels.current_stock),
            reorder_level: Set(levels.reorder_level),
            units_on_order: Set(levels.units_on_order),
            last_updated: Set(Some(now)),
            is_deleted: Set(false),
            created_date: Set(now),
            updated_date: Set(None),
            deleted_date: Set(None),
        }
        .insert(&*self.db_pool)
        .await?;

        self.event_sender
            .send(Event::InventoryUpdated {
                inventory_id: id,
                current_stock: levels.current_stock,
            })
            .await
            .map_err(ServiceError::EventError)?;

        Ok(id)
    }

    #[instrument(skip(self, levels))]
    pub async fn update_inventory(
        &self,
        id: Uuid,
        levels: InventoryLevels,
    ) -> Result<(), ServiceError> {
        levels.validate()?;

        let existing = inventory::Entity::find_by_id(id)
            .filter(inventory::Column::IsDeleted.eq(false))
            .one(&*self.db_pool)
            .await?
            .ok_or_else(|| ServiceError::not_found("Inventory", id))?;

        let now = Utc::now();
        let mut model: inventory::ActiveModel = existing.into();
        model.current_stock = Set(levels.current_stock);
        model.reorder_level = Set(levels.reorder_level);
        model.units_on_order = Set(levels.units_on_order);
        model.last_updated = Set(Some(now));
        model.updated_date = Set(Some(now));
        model.update(&*self.db_pool).await?;

        self.event_sender
            .send(Event::InventoryUpdated {
                inventory_id: id,
                current_stock: levels.current_stock,
            })
            .await
            .map_err(ServiceError::EventError)?;

        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete_inventory(&self, id: Uuid) -> Result<(), ServiceError> {
        let existing = inventory::Entity::find_by_id(id)
            .filter(inventory::Column::IsDeleted.eq(false))
            .one(&*self.db_pool)
            .await?
            .ok_or_else(|| ServiceError::not_found("Inventory", id))?;

        let mut model: inventory::ActiveModel = existing.into();
        model.is_deleted = Set(true);
        model.deleted_date = Set(Some(Utc::now()));
        model.update(&*self.db_pool).await?;

        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn get_inventory(&self, id: Uuid) -> Result<Option<inventory::Model>, ServiceError> {
        let found = inventory::Entity::find_by_id(id)
            .filter(inventory::Column::IsDeleted.eq(false))
            .one(&*self.db_pool)
            .await?;
        Ok(found)
    }

    /// Inventory rows for one product across all locations.
    #[instrument(skip(self))]
    pub async fn list_by_product(
        &self,
        product_id: Uuid,
    ) -> Result<Vec<inventory::Model>, ServiceError> {
        let items = inventory::Entity::find()
            .filter(inventory::Column::ProductId.eq(product_id))
            .filter(inventory::Column::IsDeleted.eq(false))
            .all(&*self.db_pool)
            .await?;
        Ok(items)
    }

    #[instrument(skip(self))]
    pub async fn list_inventories(
        &self,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<inventory::Model>, u64), ServiceError> {
        let query = inventory::Entity::find().filter(inventory::Column::IsDeleted.eq(false));

        let total = query.clone().count(&*self.db_pool).await?;
        let items = query
            .order_by_desc(inventory::Column::CreatedDate)
            .limit(limit)
            .offset(offset)
            .all(&*self.db_pool)
            .await?;

        Ok((items, total))
    }
}
