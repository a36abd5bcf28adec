use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, EntityTrait, Set, TransactionTrait};
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
    geometry::{can_place, snap, Rect},
};

use super::{ensure_positive_size, generate_locations, load_snapshot};

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateRackCommand {
    pub blueprint_id: Uuid,
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
pub struct CreateRackResult {
    pub id: Uuid,
    pub location_count: usize,
}

#[async_trait]
impl Command for CreateRackCommand {
    type Result = CreateRackResult;

    #[instrument(skip(self, db_pool, event_sender), fields(blueprint_id = %self.blueprint_id))]
    async fn execute(
        &self,
        db_pool: Arc<DbPool>,
        event_sender: Arc<EventSender>,
    ) -> Result<Self::Result, ServiceError> {
        self.validate()
            .map_err(|e| ServiceError::ValidationError(e.to_string()))?;
        ensure_positive_size(self.width, self.height)?;

        let txn = db_pool.begin().await?;

        let snapshot = load_snapshot(&txn, self.blueprint_id).await?;
        let x = snap(self.position_x, snapshot.grid);
        let y = snap(self.position_y, snapshot.grid);

        // New racks start at rotation 0, so the stored size is the effective size.
        let candidate = Rect::new(x, y, self.width, self.height);
        can_place(snapshot.bounds, &candidate, &snapshot.racks, None)
            .map_err(|e| ServiceError::from_placement(e, &self.name))?;

        let rack_id = Uuid::new_v4();
        rack::ActiveModel {
            id: Set(rack_id),
            blueprint_id: Set(self.blueprint_id),
            name: Set(self.name.clone()),
            position_x: Set(x),
            position_y: Set(y),
            width: Set(self.width),
            height: Set(self.height),
            rows: Set(self.rows),
            grids: Set(self.grids),
            rotation_degrees: Set(0),
            is_deleted: Set(false),
            created_date: Set(Utc::now()),
            updated_date: Set(None),
            deleted_date: Set(None),
        }
        .insert(&txn)
        .await?;

        let locations = generate_locations(rack_id, &self.name, x, y, self.rows, self.grids);
        let location_count = locations.len();
        location::Entity::insert_many(locations).exec(&txn).await?;

        txn.commit().await?;

        info!(%rack_id, location_count, "rack created");
        event_sender
            .send(Event::RackCreated {
                rack_id,
                blueprint_id: self.blueprint_id,
                location_count,
            })
            .await
            .map_err(ServiceError::EventError)?;

        Ok(CreateRackResult {
            id: rack_id,
            location_count,
        })
    }
}
