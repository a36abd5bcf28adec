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
    entities::supplier,
    errors::ServiceError,
    events::{Event, EventSender},
};

#[derive(Debug, Clone, Default)]
pub struct SupplierFilter {
    pub country: Option<String>,
    pub name_contains: Option<String>,
    pub email_contains: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewSupplier {
    pub name: String,
    pub contact_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub country: Option<String>,
}

#[derive(Clone)]
pub struct SupplierService {
    db_pool: Arc<DbPool>,
    event_sender: Arc<EventSender>,
}

impl SupplierService {
    pub fn new(db_pool: Arc<DbPool>, event_sender: Arc<EventSender>) -> Self {
        Self {
            db_pool,
            event_sender,
        }
    }

    #[instrument(skip(self, new))]
    pub async fn create_supplier(&self, new: NewSupplier) -> Result<Uuid, ServiceError> {
        if new.name.trim().is_empty() {
            return Err(ServiceError::ValidationError(
                "supplier name is required".into(),
            ));
        }

        let id = Uuid::new_v4();
        supplier::ActiveModel {
            id: Set(id),
            name: Set(new.name),
            contact_name: Set(new.contact_name),
            email: Set(new.email),
            phone: Set(new.phone),
            address: Set(new.address),
            country: Set(new.country),
            is_deleted: Set(false),
            created_date: Set(Utc::now()),
            updated_date: Set(None),
            deleted_date: Set(None),
        }
        .insert(&*self.db_pool)
        .await?;

        self.event_sender
            .send(Event::SupplierCreated(id))
            .await
            .map_err(ServiceError::EventError)?;

        Ok(id)
    }

    #[instrument(skip(self, update))]
    pub async fn update_supplier(&self, id: Uuid, update: NewSupplier) -> Result<(), ServiceError> {
        let existing = supplier::Entity::find_by_id(id)
            .filter(supplier::Column::IsDeleted.eq(false))
            .one(&*self.db_pool)
            .await?
            .ok_or_else(|| ServiceError::not_found("Supplier", id))?;

        let mut model: supplier::ActiveModel = existing.into();
        model.name = Set(update.name);
        model.contact_name = Set(update.contact_name);
        model.email = Set(update.email);
        model.phone = Set(update.phone);
        model.address = Set(update.address);
        model.country = Set(update.country);
        model.updated_date = Set(Some(Utc::now()));
        model.update(&*self.db_pool).await?;

        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete_supplier(&self, id: Uuid) -> Result<(), ServiceError> {
        let existing = supplier::Entity::find_by_id(id)
            .filter(supplier::Column::IsDeleted.eq(false))
            .one(&*self.db_pool)
            .await?
            .ok_or_else(|| ServiceError::not_found("Supplier", id))?;

        let mut model: supplier::ActiveModel = existing.into();
        model.is_deleted = Set(true);
        model.deleted_date = Set(Some(Utc::now()));
        model.update(&*self.db_pool).await?;

        self.event_sender
            .send(Event::SupplierDeleted(id))
            .await
            .map_err(ServiceError::EventError)?;

        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn get_supplier(&self, id: Uuid) -> Result<Option<supplier::Model>, ServiceError> {
        let found = supplier::Entity::find_by_id(id)
            .filter(supplier::Column::IsDeleted.eq(false))
            .one(&*self.db_pool)
            .await?;
        Ok(found)
    }

    #[instrument(skip(self, filter))]
    pub async fn filter_suppliers(
        &self,
        filter: SupplierFilter,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<supplier::Model>, u64), ServiceError> {
        let mut query = supplier::Entity::find().filter(supplier::Column::IsDeleted.eq(false));

        if let Some(country) = filter.country.filter(|s| !s.trim().is_empty()) {
            query = query.filter(supplier::Column::Country.eq(country));
        }
        if let Some(name) = filter.name_contains.filter(|s| !s.trim().is_empty()) {
            query = query.filter(supplier::Column::Name.contains(&name));
        }
        if let Some(email) = filter.email_contains.filter(|s| !s.trim().is_empty()) {
            query = query.filter(supplier::Column::Email.contains(&email));
        }

        let total = query.clone().count(&*self.db_pool).await?;
        let items = query
            .order_by_asc(supplier::Column::Name)
            .limit(limit)
            .offset(offset)
            .all(&*self.db_pool)
            .await?;

        Ok((items, total))
    }
}
