use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    db::DbPool,
    entities::product,
    errors::ServiceError,
    events::{Event, EventSender},
};

/// Optional filter criteria for product listings. Empty filter returns all
/// non-deleted products.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub category_id: Option<Uuid>,
    pub supplier_id: Option<Uuid>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub name_contains: Option<String>,
    pub sku_contains: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub sku: String,
    pub price: Decimal,
    pub description: Option<String>,
    pub category_id: Option<Uuid>,
    pub supplier_id: Option<Uuid>,
}

#[derive(Clone)]
pub struct ProductService {
    db_pool: Arc<DbPool>,
    event_sender: Arc<EventSender>,
}

impl ProductService {
    pub fn new(db_pool: Arc<DbPool>, event_sender: Arc<EventSender>) -> Self {
        Self {
            db_pool,
            event_sender,
        }
    }

    #[instrument(skip(self, new))]
    pub async fn create_product(&self, new: NewProduct) -> Result<Uuid, ServiceError> {
        if new.name.trim().is_empty() || new.sku.trim().is_empty() {
            return Err(ServiceError::ValidationError(
                "product name and sku are required".into(),
            ));
        }
        if new.price < Decimal::ZERO {
            return Err(ServiceError::ValidationError(
                "product price cannot be negative".into(),
            ));
        }

        let id = Uuid::new_v4();
        product::ActiveModel {
            id: Set(id),
            name: Set(new.name),
            sku: Set(new.sku),
            price: Set(new.price),
            description: Set(new.description),
            category_id: Set(new.category_id),
            supplier_id: Set(new.supplier_id),
            is_deleted: Set(false),
            created_date: Set(Utc::now()),
            updated_date: Set(None),
            deleted_date: Set(None),
        }
        .insert(&*self.db_pool)
        .await?;

        info!(product_id = %id, "product created");
        self.event_sender
            .send(Event::ProductCreated(id))
            .await
            .map_err(ServiceError::EventError)?;

        Ok(id)
    }

    #[instrument(skip(self, update))]
    pub async fn update_product(&self, id: Uuid, update: NewProduct) -> Result<(), ServiceError> {
        if update.price < Decimal::ZERO {
            return Err(ServiceError::ValidationError(
                "product price cannot be negative".into(),
            ));
        }

        let existing = product::Entity::find_by_id(id)
            .filter(product::Column::IsDeleted.eq(false))
            .one(&*self.db_pool)
            .await?
            .ok_or_else(|| ServiceError::not_found("Product", id))?;

        let mut model: product::ActiveModel = existing.into();
        model.name = Set(update.name);
        model.sku = Set(update.sku);
        model.price = Set(update.price);
        model.description = Set(update.description);
        model.category_id = Set(update.category_id);
        model.supplier_id = Set(update.supplier_id);
        model.updated_date = Set(Some(Utc::now()));
        model.update(&*self.db_pool).await?;

        self.event_sender
            .send(Event::ProductUpdated(id))
            .await
            .map_err(ServiceError::EventError)?;

        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: Uuid) -> Result<(), ServiceError> {
        let existing = product::Entity::find_by_id(id)
            .filter(product::Column::IsDeleted.eq(false))
            .one(&*self.db_pool)
            .await?
            .ok_or_else(|| ServiceError::not_found("Product", id))?;

        let mut model: product::ActiveModel = existing.into();
        model.is_deleted = Set(true);
        model.deleted_date = Set(Some(Utc::now()));
        model.update(&*self.db_pool).await?;

        self.event_sender
            .send(Event::ProductDeleted(id))
            .await
            .map_err(ServiceError::EventError)?;

        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: Uuid) -> Result<Option<product::Model>, ServiceError> {
        let found = product::Entity::find_by_id(id)
            .filter(product::Column::IsDeleted.eq(false))
            .one(&*self.db_pool)
            .await?;
        Ok(found)
    }

    /// Filtered, paginated listing of non-deleted products.
    #[instrument(skip(self, filter))]
    pub async fn filter_products(
        &self,
        filter: ProductFilter,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<product::Model>, u64), ServiceError> {
        let mut query = product::Entity::find().filter(product::Column::IsDeleted.eq(false));

        if let Some(category_id) = filter.category_id {
            query = query.filter(product::Column::CategoryId.eq(category_id));
        }
        if let Some(supplier_id) = filter.supplier_id {
            query = query.filter(product::Column::SupplierId.eq(supplier_id));
        }
        if let Some(min_price) = filter.min_price {
            query = query.filter(product::Column::Price.gte(min_price));
        }
        if let Some(max_price) = filter.max_price {
            query = query.filter(product::Column::Price.lte(max_price));
        }
        if let Some(name) = filter.name_contains.filter(|s| !s.trim().is_empty()) {
            query = query.filter(product::Column::Name.contains(&name));
        }
        if let Some(sku) = filter.sku_contains.filter(|s| !s.trim().is_empty()) {
            query = query.filter(product::Column::Sku.contains(&sku));
        }

        let total = query.clone().count(&*self.db_pool).await?;
        let items = query
            .order_by_desc(product::Column::CreatedDate)
            .limit(limit)
            .offset(offset)
            .all(&*self.db_pool)
            .await?;

        Ok((items, total))
    }
}
