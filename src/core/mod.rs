//! Core module containing the controller, resource traits, and error types

pub mod controller;
pub mod error;
pub mod id;
pub mod resource;
pub mod validation;

pub use controller::ResourceController;
pub use error::{ApiError, ApiResult, EntityError, RequestError, StorageError, ValidationError};
pub use id::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use resource::{Deletable, Envelope, Resource};
