//! The Sowtime plant catalog.
//!
//! A fixed, ordered table of vegetable crops with their planting calendar
//! and cultivation attributes. Read-only after construction; catalog
//! order is display order.

pub mod catalog;
pub mod month;
pub mod types;

pub use catalog::PlantCatalog;
pub use types::PlantRecord;
