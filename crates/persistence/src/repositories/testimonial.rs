//! Testimonial repository.

use domain::models::{NewTestimonial, Testimonial};
use validator::Validate;

use crate::error::StoreError;
use crate::metrics::OperationTimer;
use crate::store::MemoryStore;

/// Repository for member testimonials.
#[derive(Clone)]
pub struct TestimonialRepository {
    store: MemoryStore,
}

impl TestimonialRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    pub async fn find_all(&self) -> Vec<Testimonial> {
        let timer = OperationTimer::new("find_all_testimonials");
        let testimonials = self.store.read().await.testimonials.all();
        timer.record();
        testimonials
    }

    pub async fn find_by_id(&self, id: i64) -> Option<Testimonial> {
        let timer = OperationTimer::new("find_testimonial_by_id");
        let testimonial = self.store.read().await.testimonials.get(id);
        timer.record();
        testimonial
    }

    /// Stores a testimonial. Ratings outside 1..=5 are rejected.
    pub async fn create(&self, testimonial: NewTestimonial) -> Result<Testimonial, StoreError> {
        testimonial.validate()?;

        let timer = OperationTimer::new("create_testimonial");
        let testimonial = self
            .store
            .write()
            .await
            .testimonials
            .insert_with(|id| testimonial.with_id(id));
        timer.record();
        Ok(testimonial)
    }
}
