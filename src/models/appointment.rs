use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use derive_more::Display;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display, Default)]
pub enum AppointmentStatus {
    #[default]
    #[serde(rename = "scheduled")]
    #[display("scheduled")]
    Scheduled,
    #[serde(rename = "completed")]
    #[display("completed")]
    Completed,
    #[serde(rename = "cancelled")]
    #[display("cancelled")]
    Cancelled,
}

impl FromStr for AppointmentStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "scheduled" => Ok(AppointmentStatus::Scheduled),
            "completed" => Ok(AppointmentStatus::Completed),
            "cancelled" => Ok(AppointmentStatus::Cancelled),
            other => Err(format!("unknown appointment status: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Appointment {
    pub id: i64,
    pub pet_id: i64,
    pub clinic_id: i64,
    pub appointment_date: NaiveDate,
    pub appointment_time: NaiveTime,
    pub reason: Option<String>,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clinic_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clinic_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
    /// Booked services, join-fetched per appointment on reads.
    #[serde(default)]
    pub services: Vec<AppointmentService>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AppointmentService {
    pub service_id: i64,
    pub name: String,
    pub price: Decimal,
}

/// POST /appointments body.
#[derive(Debug, Deserialize)]
pub struct NewAppointment {
    pub pet_id: i64,
    pub clinic_id: i64,
    pub appointment_date: NaiveDate,
    pub appointment_time: NaiveTime,
    pub reason: Option<String>,
    #[serde(default)]
    pub services: Vec<i64>,
}

/// PUT /appointments body. Unsupplied fields keep the stored values
/// (read-modify-merge); a supplied `services` list replaces the join rows
/// entirely.
#[derive(Debug, Default, Deserialize)]
pub struct AppointmentUpdate {
    pub id: i64,
    pub pet_id: Option<i64>,
    pub clinic_id: Option<i64>,
    pub appointment_date: Option<NaiveDate>,
    pub appointment_time: Option<NaiveTime>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub reason: Option<Option<String>>,
    pub status: Option<String>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub notes: Option<Option<String>>,
    pub services: Option<Vec<i64>>,
}
