//! Gym class model.

use serde::{Deserialize, Serialize};

/// A class type offered by the gym (HIIT, yoga, ...).
///
/// Concrete sessions of a class are [`ClassSchedule`](super::ClassSchedule)s.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GymClass {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Session length in minutes.
    pub duration: u32,
    pub image: String,
    pub category: String,
    /// Drop-in price in whole currency units.
    pub price: u32,
    /// Lead trainer. Not checked against the trainer table.
    pub trainer_id: i64,
}

#[derive(Debug, Clone)]
pub struct NewGymClass {
    pub name: String,
    pub description: String,
    pub duration: u32,
    pub image: String,
    pub category: String,
    pub price: u32,
    pub trainer_id: i64,
}

impl NewGymClass {
    pub fn with_id(self, id: i64) -> GymClass {
        GymClass {
            id,
            name: self.name,
            description: self.description,
            duration: self.duration,
            image: self.image,
            category: self.category,
            price: self.price,
            trainer_id: self.trainer_id,
        }
    }
}
