//! Member testimonial model.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A member quote shown in the testimonials carousel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub testimonial: String,
    /// Headline result, e.g. "Lost 30 lbs".
    pub achievement: String,
    /// Star rating, 1 to 5.
    pub rating: u8,
    /// Membership length as free text, e.g. "Member for 6 months".
    pub duration: String,
}

#[derive(Debug, Clone, Validate)]
pub struct NewTestimonial {
    pub name: String,
    pub image: String,
    pub testimonial: String,
    pub achievement: String,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: u8,
    pub duration: String,
}

impl NewTestimonial {
    pub fn with_id(self, id: i64) -> Testimonial {
        Testimonial {
            id,
            name: self.name,
            image: self.image,
            testimonial: self.testimonial,
            achievement: self.achievement,
            rating: self.rating,
            duration: self.duration,
        }
    }
}
