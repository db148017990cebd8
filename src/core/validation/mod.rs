//! Validation system
//!
//! Field validators shared by every resource, plus the extractor that
//! unwraps request payloads before they reach the controllers.

pub mod extractor;
pub mod validators;

pub use extractor::Payload;
