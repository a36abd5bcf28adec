use crate::{db::DbPool, errors::ServiceError, events::EventSender};
use async_trait::async_trait;
use std::sync::Arc;

/// Command trait for the mutation side of the API.
///
/// A command encapsulates one business operation: validation, the
/// transactional database work, and the domain event it publishes. Handlers
/// build commands from request DTOs and services execute them.
#[async_trait]
pub trait Command: Send + Sync {
    /// The return type of the command when executed successfully
    type Result;

    async fn execute(
        &self,
        db_pool: Arc<DbPool>,
        event_sender: Arc<EventSender>,
    ) -> Result<Self::Result, ServiceError>;
}

pub mod blueprints;
pub mod racks;
