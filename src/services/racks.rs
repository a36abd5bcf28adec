use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::{
    commands::racks::{
        CreateRackCommand, CreateRackResult, DeleteRackCommand, RotateRackCommand,
        RotateRackResult, UpdateRackCommand, UpdateRackResult,
    },
    commands::Command,
    db::DbPool,
    entities::rack,
    errors::ServiceError,
    events::EventSender,
};

/// Service for managing racks and their generated locations.
#[derive(Clone)]
pub struct RackService {
    db_pool: Arc<DbPool>,
    event_sender: Arc<EventSender>,
}

impl RackService {
    pub fn new(db_pool: Arc<DbPool>, event_sender: Arc<EventSender>) -> Self {
        Self {
            db_pool,
            event_sender,
        }
    }

    #[instrument(skip(self))]
    pub async fn create_rack(
        &self,
        command: CreateRackCommand,
    ) -> Result<CreateRackResult, ServiceError> {
        command
            .execute(self.db_pool.clone(), self.event_sender.clone())
            .await
    }

    #[instrument(skip(self))]
    pub async fn update_rack(
        &self,
        command: UpdateRackCommand,
    ) -> Result<UpdateRackResult, ServiceError> {
        command
            .execute(self.db_pool.clone(), self.event_sender.clone())
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete_rack(&self, command: DeleteRackCommand) -> Result<(), ServiceError> {
        command
            .execute(self.db_pool.clone(), self.event_sender.clone())
            .await
    }

    #[instrument(skip(self))]
    pub async fn rotate_rack(
        &self,
        command: RotateRackCommand,
    ) -> Result<RotateRackResult, ServiceError> {
        command
            .execute(self.db_pool.clone(), self.event_sender.clone())
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_rack(&self, id: Uuid) -> Result<Option<rack::Model>, ServiceError> {
        let rack = rack::Entity::find_by_id(id)
            .filter(rack::Column::IsDeleted.eq(false))
            .one(&*self.db_pool)
            .await?;
        Ok(rack)
    }

    /// All non-deleted racks of a blueprint, ordered by name.
    #[instrument(skip(self))]
    pub async fn list_by_blueprint(
        &self,
        blueprint_id: Uuid,
    ) -> Result<Vec<rack::Model>, ServiceError> {
        let racks = rack::Entity::find()
            .filter(rack::Column::BlueprintId.eq(blueprint_id))
            .filter(rack::Column::IsDeleted.eq(false))
            .order_by_asc(rack::Column::Name)
            .all(&*self.db_pool)
            .await?;
        Ok(racks)
    }
}
