//! Order entity module

pub mod descriptor;
pub mod model;

pub use descriptor::OrderDescriptor;
pub use model::{Order, OrderChanges, OrderDraft, OrderLine, OrderStatus};
