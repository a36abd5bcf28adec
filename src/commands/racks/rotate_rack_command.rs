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
    geometry::{can_place, effective_rect},
};

use super::{load_snapshot, stored_rotation};

/// Advances a rack's rotation by 90° and persists it, provided the rotated
/// bounding box still fits at the rack's current position. Stored
/// width/height are never touched; only `rotation_degrees` changes.
#[derive(Debug, Serialize, Deserialize)]
pub struct RotateRackCommand {
    pub id: Uuid,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RotateRackResult {
    pub rotation_degrees: i32,
}

#[async_trait]
impl Command for RotateRackCommand {
    type Result = RotateRackResult;

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

        let next = stored_rotation(&existing)?.advanced();
        let snapshot = load_snapshot(&txn, existing.blueprint_id).await?;

        let candidate = effective_rect(
            existing.position_x,
            existing.position_y,
            existing.width,
            existing.height,
            next,
        );
        can_place(snapshot.bounds, &candidate, &snapshot.racks, Some(self.id))
            .map_err(|e| ServiceError::from_placement(e, &existing.name))?;

        let degrees = next.degrees();
        let mut model: rack::ActiveModel = existing.into();
        model.rotation_degrees = Set(degrees);
        model.updated_date = Set(Some(Utc::now()));
        model.update(&txn).await?;

        txn.commit().await?;

        info!(rack_id = %self.id, degrees, "rack rotated");
        event_sender
            .send(Event::RackRotated {
                rack_id: self.id,
                degrees,
            })
            .await
            .map_err(ServiceError::EventError)?;

        Ok(RotateRackResult {
            rotation_degrees: degrees,
        })
    }
}
