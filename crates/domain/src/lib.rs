//! Domain layer for the FlexFit backend.
//!
//! This crate contains:
//! - Domain models (plans, trainers, classes, schedules, bookings, ...)
//! - Request payloads and their validation rules
//! - Business rules: the class capacity check and schedule enrichment

pub mod models;
pub mod services;
