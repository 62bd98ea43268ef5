//! Gym class repository.

use domain::models::{GymClass, NewGymClass};

use crate::metrics::OperationTimer;
use crate::store::MemoryStore;

/// Repository for gym classes.
#[derive(Clone)]
pub struct GymClassRepository {
    store: MemoryStore,
}

impl GymClassRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    pub async fn find_all(&self) -> Vec<GymClass> {
        let timer = OperationTimer::new("find_all_gym_classes");
        let classes = self.store.read().await.gym_classes.all();
        timer.record();
        classes
    }

    pub async fn find_by_id(&self, id: i64) -> Option<GymClass> {
        let timer = OperationTimer::new("find_gym_class_by_id");
        let class = self.store.read().await.gym_classes.get(id);
        timer.record();
        class
    }

    /// Stores a class. The trainer reference is not checked; enrichment
    /// reports a dangling reference as a missing trainer.
    pub async fn create(&self, class: NewGymClass) -> GymClass {
        let timer = OperationTimer::new("create_gym_class");
        let class = self
            .store
            .write()
            .await
            .gym_classes
            .insert_with(|id| class.with_id(id));
        timer.record();
        class
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_find_by_id() {
        let repo = GymClassRepository::new(MemoryStore::new());
        let created = repo
            .create(NewGymClass {
                name: "HIIT Training".to_string(),
                description: "High intensity intervals".to_string(),
                duration: 45,
                image: "/images/hiit.jpg".to_string(),
                category: "Cardio".to_string(),
                price: 20,
                trainer_id: 99,
            })
            .await;

        assert_eq!(repo.find_by_id(created.id).await, Some(created));
        assert!(repo.find_by_id(2).await.is_none());
    }
}
