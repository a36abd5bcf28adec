use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QuerySelect, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    commands::Command,
    db::DbPool,
    entities::{blueprint, location, rack},
    errors::ServiceError,
    events::{Event, EventSender},
};

/// Soft-deletes a blueprint and cascades to its racks and their locations in
/// one transaction.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteBlueprintCommand {
    pub id: Uuid,
}

#[async_trait]
impl Command for DeleteBlueprintCommand {
    type Result = ();

    #[instrument(skip(self, db_pool, event_sender), fields(blueprint_id = %self.id))]
    async fn execute(
        &self,
        db_pool: Arc<DbPool>,
        event_sender: Arc<EventSender>,
    ) -> Result<Self::Result, ServiceError> {
        let txn = db_pool.begin().await?;

        let existing = blueprint::Entity::find_by_id(self.id)
            .filter(blueprint::Column::IsDeleted.eq(false))
            .one(&txn)
            .await?
            .ok_or_else(|| ServiceError::not_found("Blueprint", self.id))?;

        let now = Utc::now();

        let rack_ids: Vec<Uuid> = rack::Entity::find()
            .select_only()
            .column(rack::Column::Id)
            .filter(rack::Column::BlueprintId.eq(self.id))
            .filter(rack::Column::IsDeleted.eq(false))
            .into_tuple()
            .all(&txn)
            .await?;

        if !rack_ids.is_empty() {
            location::Entity::update_many()
                .col_expr(location::Column::IsDeleted, Expr::value(true))
                .col_expr(location::Column::DeletedDate, Expr::value(Some(now)))
                .filter(location::Column::RackId.is_in(rack_ids.clone()))
                .filter(location::Column::IsDeleted.eq(false))
                .exec(&txn)
                .await?;

            rack::Entity::update_many()
                .col_expr(rack::Column::IsDeleted, Expr::value(true))
                .col_expr(rack::Column::DeletedDate, Expr::value(Some(now)))
                .filter(rack::Column::Id.is_in(rack_ids))
                .exec(&txn)
                .await?;
        }

        let mut model: blueprint::ActiveModel = existing.into();
        model.is_deleted = Set(true);
        model.deleted_date = Set(Some(now));
        model.update(&txn).await?;

        txn.commit().await?;

        info!(blueprint_id = %self.id, "blueprint deleted");
        event_sender
            .send(Event::BlueprintDeleted(self.id))
            .await
            .map_err(ServiceError::EventError)?;

        Ok(())
    }
}
