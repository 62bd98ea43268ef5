//! Persistence layer for the FlexFit backend.
//!
//! This crate contains:
//! - The in-memory record store and its configuration
//! - Auto-incrementing tables, one per entity
//! - Repository implementations
//! - Demo seed data

pub mod error;
pub mod metrics;
pub mod repositories;
pub mod seed;
pub mod store;
pub mod table;

pub use error::StoreError;
pub use store::{create_store, MemoryStore, StoreConfig};
