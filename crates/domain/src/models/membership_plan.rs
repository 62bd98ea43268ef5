//! Membership plan model.

use serde::{Deserialize, Serialize};

/// A purchasable membership tier shown on the pricing page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MembershipPlan {
    pub id: i64,
    pub name: String,
    /// Monthly price in whole currency units.
    pub price: u32,
    pub description: String,
    /// Feature bullet points, in display order.
    pub features: Vec<String>,
    /// Icon tag understood by the web client (e.g. `fa-crown`).
    pub icon: String,
    pub popular: bool,
}

/// Plan data before an identifier is assigned.
#[derive(Debug, Clone)]
pub struct NewMembershipPlan {
    pub name: String,
    pub price: u32,
    pub description: String,
    pub features: Vec<String>,
    pub icon: String,
    pub popular: bool,
}

impl NewMembershipPlan {
    /// Attaches the identifier assigned by the record store.
    pub fn with_id(self, id: i64) -> MembershipPlan {
        MembershipPlan {
            id,
            name: self.name,
            price: self.price,
            description: self.description,
            features: self.features,
            icon: self.icon,
            popular: self.popular,
        }
    }
}
