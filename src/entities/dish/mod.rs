//! Dish entity module

pub mod descriptor;
pub mod model;

pub use descriptor::DishDescriptor;
pub use model::{Dish, DishDraft};
