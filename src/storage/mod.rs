//! In-memory storage for the API's collections

pub mod in_memory;
pub mod store;

pub use in_memory::{Collection, SharedCollection};
pub use store::Store;
