//! Business-logic services used by the HTTP handlers. Mutations of the
//! placement domain (blueprints, racks) go through commands; the plain CRUD
//! domains talk to the database directly.

pub mod blueprints;
pub mod categories;
pub mod inventories;
pub mod locations;
pub mod order_lines;
pub mod orders;
pub mod products;
pub mod racks;
pub mod suppliers;
