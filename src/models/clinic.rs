use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize)]
pub struct Clinic {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Nested child collections, only populated by the single-clinic read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<Vec<ClinicHour>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<ClinicService>>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ClinicHour {
    pub day: String,
    pub open_time: String,
    pub close_time: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClinicService {
    pub id: i64,
    pub clinic_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clinic_name: Option<String>,
}

/// Nested hour entry on clinic create/update. Entries missing any of the
/// three keys are skipped, not rejected.
#[derive(Debug, Clone, Deserialize)]
pub struct ClinicHourInput {
    pub day: Option<String>,
    pub open_time: Option<String>,
    pub close_time: Option<String>,
}

impl ClinicHourInput {
    pub fn complete(&self) -> Option<(&str, &str, &str)> {
        match (&self.day, &self.open_time, &self.close_time) {
            (Some(day), Some(open), Some(close)) => Some((day, open, close)),
            _ => None,
        }
    }
}

/// Nested service entry on clinic create/update; same skip semantics.
#[derive(Debug, Clone, Deserialize)]
pub struct ClinicServiceInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
}

impl ClinicServiceInput {
    pub fn complete(&self) -> Option<(&str, Option<&str>, Decimal)> {
        match (&self.name, self.price) {
            (Some(name), Some(price)) => Some((name, self.description.as_deref(), price)),
            _ => None,
        }
    }
}

/// POST /clinics body.
#[derive(Debug, Deserialize)]
pub struct NewClinic {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub hours: Option<Vec<ClinicHourInput>>,
    pub services: Option<Vec<ClinicServiceInput>>,
}

/// PUT /clinics body. Supplying `hours` or `services` replaces the existing
/// child rows entirely; omitting them leaves the children untouched.
#[derive(Debug, Default, Deserialize)]
pub struct ClinicUpdate {
    pub id: i64,
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub image: Option<Option<String>>,
    pub hours: Option<Vec<ClinicHourInput>>,
    pub services: Option<Vec<ClinicServiceInput>>,
}

impl ClinicUpdate {
    pub fn has_scalar_updates(&self) -> bool {
        self.name.is_some()
            || self.address.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.description.is_some()
            || self.image.is_some()
    }
}

/// PUT /services body (standalone clinic-service resource).
#[derive(Debug, Default, Deserialize)]
pub struct ServiceUpdate {
    pub id: i64,
    pub clinic_id: Option<i64>,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub description: Option<Option<String>>,
    pub price: Option<Decimal>,
}

impl ServiceUpdate {
    pub fn has_updates(&self) -> bool {
        self.clinic_id.is_some()
            || self.name.is_some()
            || self.description.is_some()
            || self.price.is_some()
    }
}
