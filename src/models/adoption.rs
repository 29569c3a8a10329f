use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle of an adoption request: `pending` is the only non-terminal
/// state; `approved` and `rejected` are never transitioned out of.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display, Default)]
pub enum AdoptionStatus {
    #[default]
    #[serde(rename = "pending")]
    #[display("pending")]
    Pending,
    #[serde(rename = "approved")]
    #[display("approved")]
    Approved,
    #[serde(rename = "rejected")]
    #[display("rejected")]
    Rejected,
}

impl FromStr for AdoptionStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(AdoptionStatus::Pending),
            "approved" => Ok(AdoptionStatus::Approved),
            "rejected" => Ok(AdoptionStatus::Rejected),
            other => Err(format!("unknown adoption status: {}", other)),
        }
    }
}

/// An adoption request row, optionally carrying joined pet/requester display
/// columns depending on which listing produced it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AdoptionRequest {
    pub id: i64,
    pub pet_id: i64,
    pub user_id: i64,
    pub reason: String,
    pub status: AdoptionStatus,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_phone: Option<String>,
}
