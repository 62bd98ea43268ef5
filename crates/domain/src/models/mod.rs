//! Domain models for FlexFit.

pub mod booking;
pub mod class_schedule;
pub mod contact_message;
pub mod facility;
pub mod gym_class;
pub mod membership_plan;
pub mod membership_registration;
pub mod testimonial;
pub mod trainer;
pub mod user;

pub use booking::{BookClassRequest, Booking, BookingError, BookingStatus, NewBooking};
pub use class_schedule::{ClassSchedule, DayOfWeek, EnrichedClassSchedule, NewClassSchedule};
pub use contact_message::{ContactMessage, ContactMessageRequest};
pub use facility::{Facility, NewFacility};
pub use gym_class::{GymClass, NewGymClass};
pub use membership_plan::{MembershipPlan, NewMembershipPlan};
pub use membership_registration::{
    MembershipRegistration, NewMembershipRegistration, RegisterMembershipRequest,
    RegistrationError, RegistrationStatus,
};
pub use testimonial::{NewTestimonial, Testimonial};
pub use trainer::{NewTrainer, Trainer};
pub use user::{NewUser, User};
