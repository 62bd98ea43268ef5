//! Membership plan repository.

use domain::models::{MembershipPlan, NewMembershipPlan};

use crate::metrics::OperationTimer;
use crate::store::MemoryStore;

/// Repository for membership plans.
#[derive(Clone)]
pub struct MembershipPlanRepository {
    store: MemoryStore,
}

impl MembershipPlanRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    /// All plans in catalog order.
    pub async fn find_all(&self) -> Vec<MembershipPlan> {
        let timer = OperationTimer::new("find_all_membership_plans");
        let plans = self.store.read().await.membership_plans.all();
        timer.record();
        plans
    }

    pub async fn find_by_id(&self, id: i64) -> Option<MembershipPlan> {
        let timer = OperationTimer::new("find_membership_plan_by_id");
        let plan = self.store.read().await.membership_plans.get(id);
        timer.record();
        plan
    }

    pub async fn create(&self, plan: NewMembershipPlan) -> MembershipPlan {
        let timer = OperationTimer::new("create_membership_plan");
        let plan = self
            .store
            .write()
            .await
            .membership_plans
            .insert_with(|id| plan.with_id(id));
        timer.record();
        plan
    }
}
