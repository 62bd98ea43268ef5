//! Trainer model.

use serde::{Deserialize, Serialize};

/// A coach featured on the trainers page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Trainer {
    pub id: i64,
    pub name: String,
    pub speciality: String,
    pub image: String,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub twitter: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewTrainer {
    pub name: String,
    pub speciality: String,
    pub image: String,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub twitter: Option<String>,
}

impl NewTrainer {
    pub fn with_id(self, id: i64) -> Trainer {
        Trainer {
            id,
            name: self.name,
            speciality: self.speciality,
            image: self.image,
            instagram: self.instagram,
            facebook: self.facebook,
            twitter: self.twitter,
        }
    }
}
