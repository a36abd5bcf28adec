use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::{
    db::DbPool,
    entities::{order, order_line},
    errors::ServiceError,
    events::{Event, EventSender},
};

#[derive(Debug, Clone, Default)]
pub struct OrderLineFilter {
    pub order_id: Option<Uuid>,
    pub product_id: Option<Uuid>,
    pub min_quantity: Option<i32>,
    pub max_quantity: Option<i32>,
}

#[derive(Clone)]
pub struct OrderLineService {
    db_pool: Arc<DbPool>,
    event_sender: Arc<EventSender>,
}

impl OrderLineService {
    pub fn new(db_pool: Arc<DbPool>, event_sender: Arc<EventSender>) -> Self {
        Self {
            db_pool,
            event_sender,
        }
    }

    /// Adds a line to an existing, non-deleted order.
    #[instrument(skip(self))]
    pub async fn add_order_line(
        &self,
        order_id: Uuid,
        product_id: Uuid,
        quantity: i32,
        unit_price: Decimal,
    ) -> Result<Uuid, ServiceError> {
        if quantity <= 0 {
            return Err(ServiceError::ValidationError(
                "order line quantity must be positive".into(),
            ));
        }
        if unit_price < Decimal::ZERO {
            return Err(ServiceError::ValidationError(
                "order line unit price cannot be negative".into(),
            ));
        }

        order::Entity::find_by_id(order_id)
            .filter(order::Column::IsDeleted.eq(false))
            .one(&*self.db_pool)
            .await?
            .ok_or_else(|| ServiceError::not_found("Order", order_id))?;

        let id = Uuid::new_v4();
        order_line::ActiveModel {
            id: Set(id),
            order_id: Set(order_id),
            product_id: Set(product_id),
            quantity: Set(quantity),
            unit_price: Set(unit_price),
            is_deleted: Set(false),
            created_date: Set(Utc::now()),
            updated_date: Set(None),
            deleted_date: Set(None),
        }
        .insert(&*self.db_pool)
        .await?;

        self.event_sender
            .send(Event::OrderLineAdded {
                order_id,
                order_line_id: id,
            })
            .await
            .map_err(ServiceError::EventError)?;

        Ok(id)
    }

    #[instrument(skip(self))]
    pub async fn get_order_line(
        &self,
        id: Uuid,
    ) -> Result<Option<order_line::Model>, ServiceError> {
        let found = order_line::Entity::find_by_id(id)
            .filter(order_line::Column::IsDeleted.eq(false))
            .one(&*self.db_pool)
            .await?;
        Ok(found)
    }

    #[instrument(skip(self, filter))]
    pub async fn filter_order_lines(
        &self,
        filter: OrderLineFilter,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<order_line::Model>, u64), ServiceError> {
        let mut query = order_line::Entity::find().filter(order_line::Column::IsDeleted.eq(false));

        if let Some(order_id) = filter.order_id {
            query = query.filter(order_line::Column::OrderId.eq(order_id));
        }
        if let Some(product_id) = filter.product_id {
            query = query.filter(order_line::Column::ProductId.eq(product_id));
        }
        if let Some(min) = filter.min_quantity {
            query = query.filter(order_line::Column::Quantity.gte(min));
        }
        if let Some(max) = filter.max_quantity {
            query = query.filter(order_line::Column::Quantity.lte(max));
        }

        let total = query.clone().count(&*self.db_pool).await?;
        let items = query
            .order_by_desc(order_line::Column::CreatedDate)
            .limit(limit)
            .offset(offset)
            .all(&*self.db_pool)
            .await?;

        Ok((items, total))
    }
}
