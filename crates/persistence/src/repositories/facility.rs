//! Facility repository.

use domain::models::{Facility, NewFacility};

use crate::metrics::OperationTimer;
use crate::store::MemoryStore;

/// Repository for facilities.
#[derive(Clone)]
pub struct FacilityRepository {
    store: MemoryStore,
}

impl FacilityRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    pub async fn find_all(&self) -> Vec<Facility> {
        let timer = OperationTimer::new("find_all_facilities");
        let facilities = self.store.read().await.facilities.all();
        timer.record();
        facilities
    }

    pub async fn find_by_id(&self, id: i64) -> Option<Facility> {
        let timer = OperationTimer::new("find_facility_by_id");
        let facility = self.store.read().await.facilities.get(id);
        timer.record();
        facility
    }

    pub async fn create(&self, facility: NewFacility) -> Facility {
        let timer = OperationTimer::new("create_facility");
        let facility = self
            .store
            .write()
            .await
            .facilities
            .insert_with(|id| facility.with_id(id));
        timer.record();
        facility
    }
}
