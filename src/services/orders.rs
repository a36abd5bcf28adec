use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::{
    db::DbPool,
    entities::{order, ArrivalStatus},
    errors::ServiceError,
    events::{Event, EventSender},
};

#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub supplier_id: Option<Uuid>,
    pub arrival_status: Option<ArrivalStatus>,
    pub ordered_after: Option<DateTime<Utc>>,
    pub ordered_before: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct OrderChange {
    pub supplier_id: Uuid,
    pub order_date: Option<DateTime<Utc>>,
    pub arrival_time: Option<DateTime<Utc>>,
    pub arrival_status: ArrivalStatus,
}

#[derive(Clone)]
pub struct OrderService {
    db_pool: Arc<DbPool>,
    event_sender: Arc<EventSender>,
}

impl OrderService {
    pub fn new(db_pool: Arc<DbPool>, event_sender: Arc<EventSender>) -> Self {
        Self {
            db_pool,
            event_sender,
        }
    }

    #[instrument(skip(self, change))]
    pub async fn create_order(&self, change: OrderChange) -> Result<Uuid, ServiceError> {
        let id = Uuid::new_v4();
        order::ActiveModel {
            id: Set(id),
            supplier_id: Set(change.supplier_id),
            order_date: Set(change.order_date),
            arrival_time: Set(change.arrival_time),
            arrival_status: Set(change.arrival_status),
            is_deleted: Set(false),
            created_date: Set(Utc::now()),
            updated_date: Set(None),
            deleted_date: Set(None),
        }
        .insert(&*self.db_pool)
        .await?;

        self.event_sender
            .send(Event::OrderCreated(id))
            .await
            .map_err(ServiceError::EventError)?;

        Ok(id)
    }

    #[instrument(skip(self, change))]
    pub async fn update_order(&self, id: Uuid, change: OrderChange) -> Result<(), ServiceError> {
        let existing = order::Entity::find_by_id(id)
            .filter(order::Column::IsDeleted.eq(false))
            .one(&*self.db_pool)
            .await?
            .ok_or_else(|| ServiceError::not_found("Order", id))?;

        let mut model: order::ActiveModel = existing.into();
        model.supplier_id = Set(change.supplier_id);
        model.order_date = Set(change.order_date);
        model.arrival_time = Set(change.arrival_time);
        model.arrival_status = Set(change.arrival_status);
        model.updated_date = Set(Some(Utc::now()));
        model.update(&*self.db_pool).await?;

        self.event_sender
            .send(Event::OrderUpdated(id))
            .await
            .map_err(ServiceError::EventError)?;

        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete_order(&self, id: Uuid) -> Result<(), ServiceError> {
        let existing = order::Entity::find_by_id(id)
            .filter(order::Column::IsDeleted.eq(false))
            .one(&*self.db_pool)
            .await?
            .ok_or_else(|| ServiceError::not_found("Order", id))?;

        let mut model: order::ActiveModel = existing.into();
        model.is_deleted = Set(true);
        model.deleted_date = Set(Some(Utc::now()));
        model.update(&*self.db_pool).await?;

        self.event_sender
            .send(Event::OrderDeleted(id))
            .await
            .map_err(ServiceError::EventError)?;

        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn get_order(&self, id: Uuid) -> Result<Option<order::Model>, ServiceError> {
        let found = order::Entity::find_by_id(id)
            .filter(order::Column::IsDeleted.eq(false))
            .one(&*self.db_pool)
            .await?;
        Ok(found)
    }

    #[instrument(skip(self, filter))]
    pub async fn filter_orders(
        &self,
        filter: OrderFilter,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<order::Model>, u64), ServiceError> {
        let mut query = order::Entity::find().filter(order::Column::IsDeleted.eq(false));

        if let Some(supplier_id) = filter.supplier_id {
            query = query.filter(order::Column::SupplierId.eq(supplier_id));
        }
        if let Some(status) = filter.arrival_status {
            query = query.filter(order::Column::ArrivalStatus.eq(status));
        }
        if let Some(after) = filter.ordered_after {
            query = query.filter(order::Column::OrderDate.gte(after));
        }
        if let Some(before) = filter.ordered_before {
            query = query.filter(order::Column::OrderDate.lte(before));
        }

        let total = query.clone().count(&*self.db_pool).await?;
        let items = query
            .order_by_desc(order::Column::CreatedDate)
            .limit(limit)
            .offset(offset)
            .all(&*self.db_pool)
            .await?;

        Ok((items, total))
    }
}
