use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set, TransactionTrait};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    commands::Command,
    db::DbPool,
    entities::rack,
    errors::ServiceError,
    events::{Event, EventSender},
};

use super::soft_delete_locations;

/// Soft-deletes a rack and cascades to all of its non-deleted locations.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteRackCommand {
    pub id: Uuid,
}

#[async_trait]
impl Command for DeleteRackCommand {
    type Result = ();

    #[instrument(skip(self, db_pool, event_sender), fields(rack_id = %self.id))]
    async fn execute(
        &self,
        db_pool: Arc<DbPool>,
        event_sender: Arc<EventSender>,
    ) -> Result<Self::Result, ServiceError> {
        let txn = db_pool.begin().await?;

        let existing = rack::Entity::find_by_id(self.id)
            .filter(rack::Column::IsDeleted.eq(false))
            .one(&txn)
            .await?
            .ok_or_else(|| ServiceError::not_found("Rack", self.id))?;

        let now = Utc::now();
        let mut model: rack::ActiveModel = existing.into();
        model.is_deleted = Set(true);
        model.deleted_date = Set(Some(now));
        model.update(&txn).await?;

        soft_delete_locations(&txn, self.id).await?;

        txn.commit().await?;

        info!(rack_id = %self.id, "rack deleted");
        event_sender
            .send(Event::RackDeleted(self.id))
            .await
            .map_err(ServiceError::EventError)?;

        Ok(())
    }
}
