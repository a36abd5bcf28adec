use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, Set};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::{
    commands::Command,
    db::DbPool,
    entities::blueprint,
    errors::ServiceError,
    events::{Event, EventSender},
};

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateBlueprintCommand {
    #[validate(length(min = 1))]
    pub name: String,
    pub width: Decimal,
    pub height: Decimal,
    /// Snapping unit in centimeters
    #[validate(range(min = 1))]
    pub grid_size: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateBlueprintResult {
    pub id: Uuid,
}

#[async_trait]
impl Command for CreateBlueprintCommand {
    type Result = CreateBlueprintResult;

    #[instrument(skip(self, db_pool, event_sender))]
    async fn execute(
        &self,
        db_pool: Arc<DbPool>,
        event_sender: Arc<EventSender>,
    ) -> Result<Self::Result, ServiceError> {
        self.validate()
            .map_err(|e| ServiceError::ValidationError(e.to_string()))?;
        if self.width <= Decimal::ZERO || self.height <= Decimal::ZERO {
            return Err(ServiceError::ValidationError(
                "blueprint width and height must be positive".into(),
            ));
        }

        let id = Uuid::new_v4();
        blueprint::ActiveModel {
            id: Set(id),
            name: Set(self.name.clone()),
            width: Set(self.width),
            height: Set(self.height),
            grid_size: Set(self.grid_size),
            is_deleted: Set(false),
            created_date: Set(Utc::now()),
            updated_date: Set(None),
            deleted_date: Set(None),
        }
        .insert(&*db_pool)
        .await?;

        info!(blueprint_id = %id, "blueprint created");
        event_sender
            .send(Event::BlueprintCreated(id))
            .await
            .map_err(ServiceError::EventError)?;

        Ok(CreateBlueprintResult { id })
    }
}
