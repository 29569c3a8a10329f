pub mod adoption;
pub mod appointment;
pub mod clinic;
pub mod pet;
pub mod pricing;
pub mod user;

use serde::{Deserialize, Deserializer};

/// Deserializer for update-body fields backed by nullable columns.
///
/// `Option<Option<T>>` keeps "field omitted" (`None`) distinct from "field
/// explicitly set to null" (`Some(None)`), so a PUT can clear a column
/// without every absent field being interpreted as a clear.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
