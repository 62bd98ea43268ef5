//! In-memory record store.

use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::info;

use domain::models::{
    Booking, ClassSchedule, ContactMessage, Facility, GymClass, MembershipPlan,
    MembershipRegistration, Testimonial, Trainer, User,
};

use crate::error::StoreError;
use crate::metrics::record_table_sizes;
use crate::seed;
use crate::table::Table;

/// Record store configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Load the demo catalog and demo member at startup.
    #[serde(default = "default_seed_demo_data")]
    pub seed_demo_data: bool,

    #[serde(default = "default_demo_username")]
    pub demo_username: String,

    #[serde(default = "default_demo_password")]
    pub demo_password: String,

    #[serde(default = "default_demo_name")]
    pub demo_name: String,

    #[serde(default = "default_demo_email")]
    pub demo_email: String,
}

fn default_seed_demo_data() -> bool {
    true
}

fn default_demo_username() -> String {
    "member".to_string()
}

fn default_demo_password() -> String {
    "flexfit-demo".to_string()
}

fn default_demo_name() -> String {
    "Demo Member".to_string()
}

fn default_demo_email() -> String {
    "member@flexfit.example".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: default_seed_demo_data(),
            demo_username: default_demo_username(),
            demo_password: default_demo_password(),
            demo_name: default_demo_name(),
            demo_email: default_demo_email(),
        }
    }
}

/// One table per entity.
#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub users: Table<User>,
    pub membership_plans: Table<MembershipPlan>,
    pub trainers: Table<Trainer>,
    pub gym_classes: Table<GymClass>,
    pub class_schedules: Table<ClassSchedule>,
    pub bookings: Table<Booking>,
    pub facilities: Table<Facility>,
    pub testimonials: Table<Testimonial>,
    pub membership_registrations: Table<MembershipRegistration>,
    pub contact_messages: Table<ContactMessage>,
}

impl Tables {
    fn sizes(&self) -> StoreStats {
        StoreStats {
            users: self.users.len(),
            membership_plans: self.membership_plans.len(),
            trainers: self.trainers.len(),
            gym_classes: self.gym_classes.len(),
            class_schedules: self.class_schedules.len(),
            bookings: self.bookings.len(),
            facilities: self.facilities.len(),
            testimonials: self.testimonials.len(),
            membership_registrations: self.membership_registrations.len(),
            contact_messages: self.contact_messages.len(),
        }
    }
}

/// Row counts per table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreStats {
    pub users: usize,
    pub membership_plans: usize,
    pub trainers: usize,
    pub gym_classes: usize,
    pub class_schedules: usize,
    pub bookings: usize,
    pub facilities: usize,
    pub testimonials: usize,
    pub membership_registrations: usize,
    pub contact_messages: usize,
}

impl StoreStats {
    fn as_pairs(&self) -> [(&'static str, usize); 10] {
        [
            ("users", self.users),
            ("membership_plans", self.membership_plans),
            ("trainers", self.trainers),
            ("gym_classes", self.gym_classes),
            ("class_schedules", self.class_schedules),
            ("bookings", self.bookings),
            ("facilities", self.facilities),
            ("testimonials", self.testimonials),
            ("membership_registrations", self.membership_registrations),
            ("contact_messages", self.contact_messages),
        ]
    }
}

/// Shared handle to the record store.
///
/// Cloning is cheap; every clone sees the same tables. Reads share the lock,
/// writes hold it exclusively for the whole operation.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.inner.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.inner.write().await
    }

    /// Current row counts, also published as gauges.
    pub async fn stats(&self) -> StoreStats {
        let stats = self.read().await.sizes();
        record_table_sizes(&stats.as_pairs());
        stats
    }
}

/// Creates the record store, seeding demo data when configured.
pub async fn create_store(config: &StoreConfig) -> Result<MemoryStore, StoreError> {
    let store = MemoryStore::new();

    if config.seed_demo_data {
        seed::seed_demo_data(&store, config).await?;
        let stats = store.stats().await;
        info!(
            plans = stats.membership_plans,
            classes = stats.gym_classes,
            schedules = stats.class_schedules,
            users = stats.users,
            "Seeded demo data"
        );
    }

    Ok(store)
}
