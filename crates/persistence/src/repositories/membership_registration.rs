//! Membership registration repository.

use chrono::Utc;
use domain::models::{MembershipRegistration, NewMembershipRegistration, RegistrationError};

use crate::metrics::OperationTimer;
use crate::store::MemoryStore;

/// Repository for membership registrations.
#[derive(Clone)]
pub struct MembershipRegistrationRepository {
    store: MemoryStore,
}

impl MembershipRegistrationRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    pub async fn find_by_user(&self, user_id: i64) -> Vec<MembershipRegistration> {
        let timer = OperationTimer::new("find_membership_registrations_by_user");
        let registrations = self
            .store
            .read()
            .await
            .membership_registrations
            .filter(|r| r.user_id == user_id);
        timer.record();
        registrations
    }

    /// Registers `user_id` for `plan_id`, starting now and open-ended.
    ///
    /// Both references are checked under the same write guard as the insert.
    pub async fn register(
        &self,
        user_id: i64,
        plan_id: i64,
    ) -> Result<MembershipRegistration, RegistrationError> {
        let timer = OperationTimer::new("register_membership");
        let result = {
            let mut tables = self.store.write().await;
            if !tables.users.contains(user_id) {
                Err(RegistrationError::UserNotFound { user_id })
            } else if !tables.membership_plans.contains(plan_id) {
                Err(RegistrationError::PlanNotFound { plan_id })
            } else {
                let registration = NewMembershipRegistration::active(user_id, plan_id, Utc::now());
                Ok(tables
                    .membership_registrations
                    .insert_with(|id| registration.with_id(id)))
            }
        };
        timer.record();
        result
    }
}
