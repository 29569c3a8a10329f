use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// PUT /categories body.
#[derive(Debug, Default, Deserialize)]
pub struct CategoryUpdate {
    pub id: i64,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub description: Option<Option<String>>,
}

impl CategoryUpdate {
    pub fn has_updates(&self) -> bool {
        self.name.is_some() || self.description.is_some()
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Pet {
    pub id: i64,
    pub name: String,
    pub category_id: i64,
    pub breed: Option<String>,
    pub age: Option<i64>,
    pub gender: String,
    pub size: Option<String>,
    pub color: Option<String>,
    pub description: Option<String>,
    pub medical_history: Option<String>,
    pub is_available: bool,
    pub image_url: Option<String>,
    pub owner_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    /// Joined from pet_categories on reads.
    pub category_name: Option<String>,
}

fn default_true() -> bool {
    true
}

/// POST /pets body.
#[derive(Debug, Deserialize)]
pub struct NewPet {
    pub name: String,
    pub category_id: i64,
    pub breed: Option<String>,
    pub age: Option<i64>,
    pub gender: String,
    pub size: Option<String>,
    pub color: Option<String>,
    pub description: Option<String>,
    pub medical_history: Option<String>,
    #[serde(default = "default_true")]
    pub is_available: bool,
    pub image_url: Option<String>,
    pub owner_id: Option<i64>,
}

/// PUT /pets body. Nullable columns accept an explicit null to clear.
#[derive(Debug, Default, Deserialize)]
pub struct PetUpdate {
    pub id: i64,
    pub name: Option<String>,
    pub category_id: Option<i64>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub breed: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub age: Option<Option<i64>>,
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub size: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub color: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub medical_history: Option<Option<String>>,
    pub is_available: Option<bool>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub image_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub owner_id: Option<Option<i64>>,
}

impl PetUpdate {
    pub fn has_updates(&self) -> bool {
        self.name.is_some()
            || self.category_id.is_some()
            || self.breed.is_some()
            || self.age.is_some()
            || self.gender.is_some()
            || self.size.is_some()
            || self.color.is_some()
            || self.description.is_some()
            || self.medical_history.is_some()
            || self.is_available.is_some()
            || self.image_url.is_some()
            || self.owner_id.is_some()
    }
}
