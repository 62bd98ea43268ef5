//! HTTP route handlers.

pub mod bookings;
pub mod class_schedules;
pub mod classes;
pub mod contact;
pub mod facilities;
pub mod health;
pub mod membership_plans;
pub mod membership_registrations;
pub mod testimonials;
pub mod trainers;
pub mod users;
