use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect};
use std::sync::Arc;
use std::time::Duration;
use tracing::{instrument, warn};
use uuid::Uuid;

use crate::{
    cache::{self, CacheBackend, InMemoryCache},
    commands::blueprints::{
        CreateBlueprintCommand, CreateBlueprintResult, DeleteBlueprintCommand,
        UpdateBlueprintCommand,
    },
    commands::Command,
    db::DbPool,
    entities::blueprint,
    errors::ServiceError,
    events::EventSender,
};

fn cache_key(id: Uuid) -> String {
    format!("blueprint:{id}")
}

/// Service for managing blueprints. Blueprint-by-id is read-through cached;
/// mutations invalidate the entry.
#[derive(Clone)]
pub struct BlueprintService {
    db_pool: Arc<DbPool>,
    event_sender: Arc<EventSender>,
    cache: Arc<InMemoryCache>,
    cache_ttl: Duration,
}

impl BlueprintService {
    pub fn new(
        db_pool: Arc<DbPool>,
        event_sender: Arc<EventSender>,
        cache: Arc<InMemoryCache>,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            db_pool,
            event_sender,
            cache,
            cache_ttl,
        }
    }

    #[instrument(skip(self))]
    pub async fn create_blueprint(
        &self,
        command: CreateBlueprintCommand,
    ) -> Result<CreateBlueprintResult, ServiceError> {
        command
            .execute(self.db_pool.clone(), self.event_sender.clone())
            .await
    }

    #[instrument(skip(self))]
    pub async fn update_blueprint(
        &self,
        command: UpdateBlueprintCommand,
    ) -> Result<(), ServiceError> {
        let id = command.id;
        command
            .execute(self.db_pool.clone(), self.event_sender.clone())
            .await?;
        self.invalidate(id).await;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete_blueprint(
        &self,
        command: DeleteBlueprintCommand,
    ) -> Result<(), ServiceError> {
        let id = command.id;
        command
            .execute(self.db_pool.clone(), self.event_sender.clone())
            .await?;
        self.invalidate(id).await;
        Ok(())
    }

    /// Gets a blueprint by id, read-through cached.
    #[instrument(skip(self))]
    pub async fn get_blueprint(&self, id: Uuid) -> Result<Option<blueprint::Model>, ServiceError> {
        let key = cache_key(id);
        match cache::get_json::<blueprint::Model>(self.cache.as_ref(), &key).await {
            Ok(Some(cached)) => return Ok(Some(cached)),
            Ok(None) => {}
            Err(e) => warn!("blueprint cache read failed: {}", e),
        }

        let found = blueprint::Entity::find_by_id(id)
            .filter(blueprint::Column::IsDeleted.eq(false))
            .one(&*self.db_pool)
            .await?;

        if let Some(model) = &found {
            if let Err(e) =
                cache::set_json(self.cache.as_ref(), &key, model, Some(self.cache_ttl)).await
            {
                warn!("blueprint cache write failed: {}", e);
            }
        }

        Ok(found)
    }

    /// Lists non-deleted blueprints, newest first.
    #[instrument(skip(self))]
    pub async fn list_blueprints(
        &self,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<blueprint::Model>, u64), ServiceError> {
        let filter = blueprint::Entity::find().filter(blueprint::Column::IsDeleted.eq(false));

        let total = filter.clone().count(&*self.db_pool).await?;
        let items = filter
            .order_by_desc(blueprint::Column::CreatedDate)
            .limit(limit)
            .offset(offset)
            .all(&*self.db_pool)
            .await?;

        Ok((items, total))
    }

    async fn invalidate(&self, id: Uuid) {
        if let Err(e) = self.cache.delete(&cache_key(id)).await {
            warn!("blueprint cache invalidation failed: {}", e);
        }
    }
}
