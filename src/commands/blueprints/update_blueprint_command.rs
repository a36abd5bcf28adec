use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
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

/// Edits a blueprint's name, dimensions or grid size. Racks already placed
/// are not re-validated against a shrunk floor plan; the designer surfaces
/// any resulting conflict on the next rack mutation.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct UpdateBlueprintCommand {
    pub id: Uuid,
    #[validate(length(min = 1))]
    pub name: String,
    pub width: Decimal,
    pub height: Decimal,
    #[validate(range(min = 1))]
    pub grid_size: i32,
}

#[async_trait]
impl Command for UpdateBlueprintCommand {
    type Result = ();

    #[instrument(skip(self, db_pool, event_sender), fields(blueprint_id = %self.id))]
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

        let existing = blueprint::Entity::find_by_id(self.id)
            .filter(blueprint::Column::IsDeleted.eq(false))
            .one(&*db_pool)
            .await?
            .ok_or_else(|| ServiceError::not_found("Blueprint", self.id))?;

        let mut model: blueprint::ActiveModel = existing.into();
        model.name = Set(self.name.clone());
        model.width = Set(self.width);
        model.height = Set(self.height);
        model.grid_size = Set(self.grid_size);
        model.updated_date = Set(Some(Utc::now()));
        model.update(&*db_pool).await?;

        info!(blueprint_id = %self.id, "blueprint updated");
        event_sender
            .send(Event::BlueprintUpdated(self.id))
            .await
            .map_err(ServiceError::EventError)?;

        Ok(())
    }
}
