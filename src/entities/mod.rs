//! Entities module - the resources served by the API

pub mod dish;
pub mod order;

// Re-export models for convenience
pub use dish::{Dish, DishDescriptor};
pub use order::{Order, OrderDescriptor, OrderLine, OrderStatus};
