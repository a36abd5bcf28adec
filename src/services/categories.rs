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
    entities::category,
    errors::ServiceError,
    events::{Event, EventSender},
};

#[derive(Clone)]
pub struct CategoryService {
    db_pool: Arc<DbPool>,
    event_sender: Arc<EventSender>,
}

impl CategoryService {
    pub fn new(db_pool: Arc<DbPool>, event_sender: Arc<EventSender>) -> Self {
        Self {
            db_pool,
            event_sender,
        }
    }

    #[instrument(skip(self))]
    pub async fn create_category(
        &self,
        name: String,
        description: Option<String>,
    ) -> Result<Uuid, ServiceError> {
        if name.trim().is_empty() {
            return Err(ServiceError::ValidationError(
                "category name is required".into(),
            ));
        }

        let id = Uuid::new_v4();
        category::ActiveModel {
            id: Set(id),
            name: Set(name),
            description: Set(description),
            is_deleted: Set(false),
            created_date: Set(Utc::now()),
            updated_date: Set(None),
            deleted_date: Set(None),
        }
        .insert(&*self.db_pool)
        .await?;

        self.event_sender
            .send(Event::CategoryCreated(id))
            .await
            .map_err(ServiceError::EventError)?;

        Ok(id)
    }

    #[instrument(skip(self))]
    pub async fn update_category(
        &self,
        id: Uuid,
        name: String,
        description: Option<String>,
    ) -> Result<(), ServiceError> {
        let existing = category::Entity::find_by_id(id)
            .filter(category::Column::IsDeleted.eq(false))
            .one(&*self.db_pool)
            .await?
            .ok_or_else(|| ServiceError::not_found("Category", id))?;

        let mut model: category::ActiveModel = existing.into();
        model.name = Set(name);
        model.description = Set(description);
        model.updated_date = Set(Some(Utc::now()));
        model.update(&*self.db_pool).await?;

        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete_category(&self, id: Uuid) -> Result<(), ServiceError> {
        let existing = category::Entity::find_by_id(id)
            .filter(category::Column::IsDeleted.eq(false))
            .one(&*self.db_pool)
            .await?
            .ok_or_else(|| ServiceError::not_found("Category", id))?;

        let mut model: category::ActiveModel = existing.into();
        model.is_deleted = Set(true);
        model.deleted_date = Set(Some(Utc::now()));
        model.update(&*self.db_pool).await?;

        self.event_sender
            .send(Event::CategoryDeleted(id))
            .await
            .map_err(ServiceError::EventError)?;

        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn get_category(&self, id: Uuid) -> Result<Option<category::Model>, ServiceError> {
        let found = category::Entity::find_by_id(id)
            .filter(category::Column::IsDeleted.eq(false))
            .one(&*self.db_pool)
            .await?;
        Ok(found)
    }

    #[instrument(skip(self))]
    pub async fn list_categories(
        &self,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<category::Model>, u64), ServiceError> {
        let query = category::Entity::find().filter(category::Column::IsDeleted.eq(false));

        let total = query.clone().count(&*self.db_pool).await?;
        let items = query
            .order_by_asc(category::Column::Name)
            .limit(limit)
            .offset(offset)
            .all(&*self.db_pool)
            .await?;

        Ok((items, total))
    }
}
