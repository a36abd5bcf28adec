pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_blueprints_table;
mod m20240101_000002_create_racks_table;
mod m20240101_000003_create_locations_table;
mod m20240101_000004_create_categories_table;
mod m20240101_000005_create_suppliers_table;
mod m20240101_000006_create_products_table;
mod m20240101_000007_create_inventories_table;
mod m20240101_000008_create_orders_table;
mod m20240101_000009_create_order_lines_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_blueprints_table::Migration),
            Box::new(m20240101_000002_create_racks_table::Migration),
            Box::new(m20240101_000003_create_locations_table::Migration),
            Box::new(m20240101_000004_create_categories_table::Migration),
            Box::new(m20240101_000005_create_suppliers_table::Migration),
            Box::new(m20240101_000006_create_products_table::Migration),
            Box::new(m20240101_000007_create_inventories_table::Migration),
            Box::new(m20240101_000008_create_orders_table::Migration),
            Box::new(m20240101_000009_create_order_lines_table::Migration),
        ]
    }
}
