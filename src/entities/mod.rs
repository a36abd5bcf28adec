//! Database entities. Every table carries the soft-delete columns
//! (`is_deleted`, `deleted_date`) plus creation/update timestamps; reads must
//! always filter on `is_deleted = false`.

pub mod blueprint;
pub mod category;
pub mod inventory;
pub mod location;
pub mod order;
pub mod order_line;
pub mod product;
pub mod rack;
pub mod supplier;

pub use order::ArrivalStatus;
