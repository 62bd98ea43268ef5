//! Domain services for FlexFit.
//!
//! Services contain business logic that operates on domain models.

pub mod booking;
pub mod enrichment;

pub use booking::confirm_booking;
pub use enrichment::enrich_schedule;
