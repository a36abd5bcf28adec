use crate::cache::InMemoryCache;
use crate::db::DbPool;
use crate::events::EventSender;
use crate::services::{
    blueprints::BlueprintService, categories::CategoryService, inventories::InventoryService,
    locations::LocationService, order_lines::OrderLineService, orders::OrderService,
    products::ProductService, racks::RackService, suppliers::SupplierService,
};
use std::sync::Arc;
use std::time::Duration;

pub mod blueprints;
pub mod categories;
pub mod common;
pub mod health;
pub mod inventories;
pub mod locations;
pub mod order_lines;
pub mod orders;
pub mod products;
pub mod racks;
pub mod suppliers;

pub use crate::AppState;

/// All domain services, constructed once at startup and shared through
/// [`AppState`].
#[derive(Clone)]
pub struct AppServices {
    pub blueprints: BlueprintService,
    pub racks: RackService,
    pub locations: LocationService,
    pub products: ProductService,
    pub categories: CategoryService,
    pub suppliers: SupplierService,
    pub inventories: InventoryService,
    pub orders: OrderService,
    pub order_lines: OrderLineService,
}

impl AppServices {
    pub fn new(
        db_pool: Arc<DbPool>,
        event_sender: Arc<EventSender>,
        cache: Arc<InMemoryCache>,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            blueprints: BlueprintService::new(
                db_pool.clone(),
                event_sender.clone(),
                cache,
                cache_ttl,
            ),
            racks: RackService::new(db_pool.clone(), event_sender.clone()),
            locations: LocationService::new(db_pool.clone()),
            products: ProductService::new(db_pool.clone(), event_sender.clone()),
            categories: CategoryService::new(db_pool.clone(), event_sender.clone()),
            suppliers: SupplierService::new(db_pool.clone(), event_sender.clone()),
            inventories: InventoryService::new(db_pool.clone(), event_sender.clone()),
            orders: OrderService::new(db_pool.clone(), event_sender.clone()),
            order_lines: OrderLineService::new(db_pool, event_sender),
        }
    }
}
