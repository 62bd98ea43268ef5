//! Trainer repository.

use domain::models::{NewTrainer, Trainer};

use crate::metrics::OperationTimer;
use crate::store::MemoryStore;

/// Repository for trainers.
#[derive(Clone)]
pub struct TrainerRepository {
    store: MemoryStore,
}

impl TrainerRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    pub async fn find_all(&self) -> Vec<Trainer> {
        let timer = OperationTimer::new("find_all_trainers");
        let trainers = self.store.read().await.trainers.all();
        timer.record();
        trainers
    }

    pub async fn find_by_id(&self, id: i64) -> Option<Trainer> {
        let timer = OperationTimer::new("find_trainer_by_id");
        let trainer = self.store.read().await.trainers.get(id);
        timer.record();
        trainer
    }

    pub async fn create(&self, trainer: NewTrainer) -> Trainer {
        let timer = OperationTimer::new("create_trainer");
        let trainer = self
            .store
            .write()
            .await
            .trainers
            .insert_with(|id| trainer.with_id(id));
        timer.record();
        trainer
    }
}
