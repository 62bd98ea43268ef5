//! Custom Axum extractors.
//!
//! Extractors for parsing and validating request data.

pub mod entity_id;
pub mod validated_json;

pub use entity_id::EntityId;
pub use validated_json::ValidatedJson;
