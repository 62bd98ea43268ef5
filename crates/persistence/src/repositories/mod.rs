//! Repository implementations over the record store.

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

pub use booking::BookingRepository;
pub use class_schedule::ClassScheduleRepository;
pub use contact_message::ContactMessageRepository;
pub use facility::FacilityRepository;
pub use gym_class::GymClassRepository;
pub use membership_plan::MembershipPlanRepository;
pub use membership_registration::MembershipRegistrationRepository;
pub use testimonial::TestimonialRepository;
pub use trainer::TrainerRepository;
pub use user::UserRepository;
