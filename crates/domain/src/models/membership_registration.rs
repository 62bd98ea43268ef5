//! Membership registration domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

/// Status of a membership registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    Active,
}

impl std::fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistrationStatus::Active => write!(f, "active"),
        }
    }
}

/// A member signed up to a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MembershipRegistration {
    pub id: i64,
    pub user_id: i64,
    pub plan_id: i64,
    pub start_date: DateTime<Utc>,
    /// Open-ended registrations have no end date.
    pub end_date: Option<DateTime<Utc>>,
    pub status: RegistrationStatus,
}

#[derive(Debug, Clone)]
pub struct NewMembershipRegistration {
    pub user_id: i64,
    pub plan_id: i64,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub status: RegistrationStatus,
}

impl NewMembershipRegistration {
    /// An open-ended, active registration starting at `start_date`.
    pub fn active(user_id: i64, plan_id: i64, start_date: DateTime<Utc>) -> Self {
        Self {
            user_id,
            plan_id,
            start_date,
            end_date: None,
            status: RegistrationStatus::Active,
        }
    }

    pub fn with_id(self, id: i64) -> MembershipRegistration {
        MembershipRegistration {
            id,
            user_id: self.user_id,
            plan_id: self.plan_id,
            start_date: self.start_date,
            end_date: self.end_date,
            status: self.status,
        }
    }
}

/// Request payload for registering to a membership plan.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterMembershipRequest {
    pub user_id: i64,
    pub plan_id: i64,
}

/// Reasons a registration request is refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("User not found")]
    UserNotFound { user_id: i64 },

    #[error("Membership plan not found")]
    PlanNotFound { plan_id: i64 },
}
