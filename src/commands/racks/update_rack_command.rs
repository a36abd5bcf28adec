use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set, TransactionTrait};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::{
    commands::Command,
    db::DbPool,
    entities::{location, rack},
    errors::ServiceError,
    events::{Event, EventSender},
    geometry::{can_place, effective_rect, snap},
};

use super::{
    ensure_positive_size, generate_locations, load_snapshot, soft_delete_locations,
    stored_rotation,
};

/// Move and/or resize a rack. Changing `rows`/`grids` soft-deletes the old
/// location set and regenerates it; pure moves leave locations untouched
/// because their (row, grid) indices are position-independent.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct UpdateRackCommand {
    pub id: Uuid,
    #[validate(length(min = 1))]
    pub name: String,
    pub position_x: Decimal,
    pub position_y: Decimal,
    pub width: Decimal,
    pub height: Decimal,
    #[validate(range(min = 1))]
    pub rows: i32,
    #[validate(range(min = 1))]
    pub grids: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateRackResult {
    pub locations_regenerated: bool,
}

#[async_trait]
impl Command for UpdateRackCommand {
    type Result = UpdateRackResult;

    #[instrument(skip(self, db_pool, event_sender), fields(rack_id = %self.id))]
    async fn execute(
        &self,
        db_pool: Arc<DbPool>,
        event_sender: Arc<EventSender>,
    ) -> Result<Self::Result, ServiceError> {
        self.validate()
            .map_err(|e| ServiceError::ValidationError(e.to_string()))?;
        ensure_positive_size(self.width, self.height)?;

        let txn = db_pool.begin().await?;

        let existing = rack::Entity::find_by_id(self.id)
            .filter(rack::Column::IsDeleted.eq(false))
            .one(&txn)
            .await?
            .ok_or_else(|| ServiceError::not_found("Rack", self.id))?;

        let snapshot = load_snapshot(&txn, existing.blueprint_id).await?;
        let x = snap(self.position_x, snapshot.grid);
        let y = snap(self.position_y, snapshot.grid);

        // Validate the new footprint at the rack's current rotation,
        // excluding its own previous footprint from the overlap check.
        let rotation = stored_rotation(&existing)?;
        let candidate = effective_rect(x, y, self.width, self.height, rotation);
        can_place(snapshot.bounds, &candidate, &snapshot.racks, Some(self.id))
            .map_err(|e| ServiceError::from_placement(e, &self.name))?;

        let regenerate = existing.rows != self.rows || existing.grids != self.grids;

        let mut model: rack::ActiveModel = existing.into();
        model.name = Set(self.name.clone());
        model.position_x = Set(x);
        model.position_y = Set(y);
        model.width = Set(self.width);
        model.height = Set(self.height);
        model.rows = Set(self.rows);
        model.grids = Set(self.grids);
        model.updated_date = Set(Some(Utc::now()));
        model.update(&txn).await?;

        if regenerate {
            soft_delete_locations(&txn, self.id).await?;
            let locations = generate_locations(self.id, &self.name, x, y, self.rows, self.grids);
            location::Entity::insert_many(locations).exec(&txn).await?;
        }

        txn.commit().await?;

        info!(rack_id = %self.id, regenerate, "rack updated");
        event_sender
            .send(Event::RackUpdated {
                rack_id: self.id,
                locations_regenerated: regenerate,
            })
            .await
            .map_err(ServiceError::EventError)?;

        Ok(UpdateRackResult {
            locations_regenerated: regenerate,
        })
    }
}
