//! Server module: routing, handlers, and the builder that wires them
//!
//! The `ServerBuilder` registers:
//! - list/create/read/update routes for dishes and orders (plus delete for orders)
//! - a 405 fallback on every known path
//! - health check routes and a 404 fallback for unknown paths

pub mod builder;
pub mod entity_registry;
pub mod handlers;
pub mod router;

pub use builder::ServerBuilder;
pub use entity_registry::{EntityDescriptor, EntityRegistry};
