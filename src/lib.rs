//! # GrubDash
//!
//! An in-memory REST API for a food delivery service, built on axum.
//!
//! ## Resources
//!
//! - **Dishes**: menu items with a name, description, price and image.
//!   Listed, created, read and updated; never deleted.
//! - **Orders**: a delivery address, a phone number, a status and a list of
//!   dish quantities. Deletable only while still `pending`.
//!
//! Request and response bodies are wrapped as `{"data": ...}`. Every payload
//! is validated fail-fast before anything is written.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use grubdash::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     ServerBuilder::new()
//!         .with_config(AppConfig::load()?)
//!         .serve()
//!         .await
//! }
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        ApiError, ApiResult, Deletable, Envelope, IdGenerator, Resource, ResourceController,
        SequentialIdGenerator, UuidIdGenerator, ValidationError,
    };

    // === Entities ===
    pub use crate::entities::{Dish, Order, OrderLine, OrderStatus};

    // === Storage ===
    pub use crate::storage::{Collection, Store};

    // === Config ===
    pub use crate::config::{AppConfig, SeedConfig, ServerConfig};

    // === Server ===
    pub use crate::server::{EntityDescriptor, EntityRegistry, ServerBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
}
