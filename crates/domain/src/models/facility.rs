//! Facility model.

use serde::{Deserialize, Serialize};

/// An area of the gym shown in the facilities showcase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub image: String,
}

#[derive(Debug, Clone)]
pub struct NewFacility {
    pub name: String,
    pub description: String,
    pub image: String,
}

impl NewFacility {
    pub fn with_id(self, id: i64) -> Facility {
        Facility {
            id,
            name: self.name,
            description: self.description,
            image: self.image,
        }
    }
}
