use chrono::{DateTime, Utc};
use derive_more::Display;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Serialize)]
pub struct PricingPlan {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub description: Option<String>,
    /// Comma-joined feature list, kept as stored.
    pub features: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display, Default)]
pub enum OrderStatus {
    #[default]
    #[serde(rename = "pending")]
    #[display("pending")]
    Pending,
    #[serde(rename = "active")]
    #[display("active")]
    Active,
    #[serde(rename = "cancelled")]
    #[display("cancelled")]
    Cancelled,
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(OrderStatus::Pending),
            "active" => Ok(OrderStatus::Active),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(format!("unknown order status: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanOrder {
    pub id: i64,
    pub user_id: i64,
    pub plan_id: i64,
    pub order_date: DateTime<Utc>,
    pub status: OrderStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
}
