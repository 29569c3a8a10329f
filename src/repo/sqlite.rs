use crate::models;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, prelude::ToPrimitive};
use sqlx::{FromRow, QueryBuilder, Row, Sqlite, SqlitePool, sqlite::SqliteRow};

use super::{AppRepo, sqlite_queries};

/// Full database schema, applied idempotently on startup.
const SCHEMA: &str = include_str!("../db/schema.sql");

#[derive(Clone)]
pub struct SqlxSqliteRepo {
    pub db_pool: SqlitePool,
}

impl SqlxSqliteRepo {
    pub async fn apply_schema(&self) -> anyhow::Result<()> {
        sqlx::raw_sql(SCHEMA).execute(&self.db_pool).await?;
        Ok(())
    }

    /// Seeds the administrative account. A no-op when the email is already
    /// registered, so redeploys never clobber a rotated password.
    pub async fn seed_admin(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> anyhow::Result<()> {
        sqlx::query(sqlite_queries::QUERY_SEED_ADMIN)
            .bind(name)
            .bind(email)
            .bind(password_hash)
            .bind(Utc::now())
            .execute(&self.db_pool)
            .await?;
        Ok(())
    }

    async fn fetch_appointment_services(
        &self,
        appointment_id: i64,
    ) -> anyhow::Result<Vec<models::appointment::AppointmentService>> {
        Ok(
            sqlx::query_as::<_, models::appointment::AppointmentService>(
                sqlite_queries::QUERY_GET_APPOINTMENT_SERVICES,
            )
            .bind(appointment_id)
            .fetch_all(&self.db_pool)
            .await?,
        )
    }

    async fn attach_services(
        &self,
        mut appointments: Vec<models::appointment::Appointment>,
    ) -> anyhow::Result<Vec<models::appointment::Appointment>> {
        for appointment in &mut appointments {
            appointment.services = self.fetch_appointment_services(appointment.id).await?;
        }

        Ok(appointments)
    }
}

fn decimal_from_row(row: &SqliteRow, column: &str) -> sqlx::Result<Decimal> {
    let value: f64 = row.try_get(column)?;
    Ok(Decimal::try_from(value).unwrap_or_default())
}

impl FromRow<'_, SqliteRow> for models::user::User {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            phone: row.try_get("phone")?,
            role: row
                .try_get::<String, _>("role")?
                .parse()
                .unwrap_or_default(),
            created_at: row.try_get("created_at")?,
        })
    }
}

impl FromRow<'_, SqliteRow> for models::user::UserRecord {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            user: models::user::User::from_row(row)?,
            password_hash: row.try_get("password_hash")?,
        })
    }
}

impl FromRow<'_, SqliteRow> for models::pet::Category {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
        })
    }
}

impl FromRow<'_, SqliteRow> for models::pet::Pet {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            category_id: row.try_get("category_id")?,
            breed: row.try_get("breed")?,
            age: row.try_get("age")?,
            gender: row.try_get("gender")?,
            size: row.try_get("size")?,
            color: row.try_get("color")?,
            description: row.try_get("description")?,
            medical_history: row.try_get("medical_history")?,
            is_available: row.try_get("is_available")?,
            image_url: row.try_get("image_url")?,
            owner_id: row.try_get("owner_id")?,
            created_at: row.try_get("created_at")?,
            category_name: row.try_get("category_name").unwrap_or_default(),
        })
    }
}

impl FromRow<'_, SqliteRow> for models::adoption::AdoptionRequest {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            pet_id: row.try_get("pet_id")?,
            user_id: row.try_get("user_id")?,
            reason: row.try_get("reason")?,
            status: row
                .try_get::<String, _>("status")?
                .parse()
                .unwrap_or_default(),
            created_at: row.try_get("created_at")?,
            // joined display columns; absent in queries that do not join them
            pet_name: row.try_get("pet_name").unwrap_or_default(),
            breed: row.try_get("breed").unwrap_or_default(),
            gender: row.try_get("gender").unwrap_or_default(),
            image_url: row.try_get("image_url").unwrap_or_default(),
            user_name: row.try_get("user_name").unwrap_or_default(),
            user_email: row.try_get("user_email").unwrap_or_default(),
            user_phone: row.try_get("user_phone").unwrap_or_default(),
        })
    }
}

impl FromRow<'_, SqliteRow> for models::clinic::Clinic {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            address: row.try_get("address")?,
            phone: row.try_get("phone")?,
            email: row.try_get("email")?,
            description: row.try_get("description")?,
            image: row.try_get("image")?,
            created_at: row.try_get("created_at")?,
            hours: None,
            services: None,
        })
    }
}

impl FromRow<'_, SqliteRow> for models::clinic::ClinicHour {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            day: row.try_get("day")?,
            open_time: row.try_get("open_time")?,
            close_time: row.try_get("close_time")?,
        })
    }
}

impl FromRow<'_, SqliteRow> for models::clinic::ClinicService {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            clinic_id: row.try_get("clinic_id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price: decimal_from_row(row, "price")?,
            clinic_name: row.try_get("clinic_name").unwrap_or_default(),
        })
    }
}

impl FromRow<'_, SqliteRow> for models::appointment::Appointment {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            pet_id: row.try_get("pet_id")?,
            clinic_id: row.try_get("clinic_id")?,
            appointment_date: row.try_get("appointment_date")?,
            appointment_time: row.try_get("appointment_time")?,
            reason: row.try_get("reason")?,
            status: row
                .try_get::<String, _>("status")?
                .parse()
                .unwrap_or_default(),
            notes: row.try_get("notes")?,
            created_at: row.try_get("created_at")?,
            pet_name: row.try_get("pet_name").unwrap_or_default(),
            clinic_name: row.try_get("clinic_name").unwrap_or_default(),
            clinic_address: row.try_get("clinic_address").unwrap_or_default(),
            owner_name: row.try_get("owner_name").unwrap_or_default(),
            services: vec![],
        })
    }
}

impl FromRow<'_, SqliteRow> for models::appointment::AppointmentService {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            service_id: row.try_get("service_id")?,
            name: row.try_get("name")?,
            price: decimal_from_row(row, "price")?,
        })
    }
}

impl FromRow<'_, SqliteRow> for models::pricing::PricingPlan {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            price: decimal_from_row(row, "price")?,
            description: row.try_get("description")?,
            features: row.try_get("features")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

impl FromRow<'_, SqliteRow> for models::pricing::PlanOrder {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            plan_id: row.try_get("plan_id")?,
            order_date: row.try_get("order_date")?,
            status: row
                .try_get::<String, _>("status")?
                .parse()
                .unwrap_or_default(),
            user_name: row.try_get("user_name").unwrap_or_default(),
            plan_name: row.try_get("plan_name").unwrap_or_default(),
            price: row
                .try_get::<Option<f64>, _>("price")
                .unwrap_or_default()
                .and_then(|value| Decimal::try_from(value).ok()),
        })
    }
}

#[async_trait]
impl AppRepo for SqlxSqliteRepo {
    async fn get_user_record_by_email(
        &self,
        email: &str,
    ) -> anyhow::Result<Option<models::user::UserRecord>> {
        Ok(
            sqlx::query_as::<_, models::user::UserRecord>(sqlite_queries::QUERY_GET_USER_BY_EMAIL)
                .bind(email)
                .fetch_optional(&self.db_pool)
                .await?,
        )
    }

    async fn get_user_by_id(&self, user_id: i64) -> anyhow::Result<Option<models::user::User>> {
        Ok(
            sqlx::query_as::<_, models::user::User>(sqlite_queries::QUERY_GET_USER_BY_ID)
                .bind(user_id)
                .fetch_optional(&self.db_pool)
                .await?,
        )
    }

    async fn list_users(&self) -> anyhow::Result<Vec<models::user::User>> {
        Ok(
            sqlx::query_as::<_, models::user::User>(sqlite_queries::QUERY_LIST_USERS)
                .fetch_all(&self.db_pool)
                .await?,
        )
    }

    async fn user_email_taken(
        &self,
        email: &str,
        exclude_id: Option<i64>,
    ) -> anyhow::Result<bool> {
        Ok(
            sqlx::query_scalar(sqlite_queries::QUERY_USER_EMAIL_TAKEN)
                .bind(email)
                .bind(exclude_id)
                .fetch_one(&self.db_pool)
                .await?,
        )
    }

    async fn user_exists(&self, user_id: i64) -> anyhow::Result<bool> {
        Ok(sqlx::query_scalar(sqlite_queries::QUERY_USER_EXISTS)
            .bind(user_id)
            .fetch_one(&self.db_pool)
            .await?)
    }

    async fn insert_user(&self, user: models::user::NewUser) -> anyhow::Result<i64> {
        Ok(sqlx::query(sqlite_queries::QUERY_INSERT_USER)
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.phone)
            .bind(user.role.to_string())
            .bind(Utc::now())
            .execute(&self.db_pool)
            .await?
            .last_insert_rowid())
    }

    async fn update_user(
        &self,
        user_id: i64,
        patch: models::user::UserPatch,
    ) -> anyhow::Result<()> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE users SET ");
        {
            let mut columns = builder.separated(", ");
            if let Some(name) = patch.name {
                columns.push("name = ").push_bind_unseparated(name);
            }
            if let Some(email) = patch.email {
                columns.push("email = ").push_bind_unseparated(email);
            }
            if let Some(password_hash) = patch.password_hash {
                columns
                    .push("password_hash = ")
                    .push_bind_unseparated(password_hash);
            }
            if let Some(phone) = patch.phone {
                columns.push("phone = ").push_bind_unseparated(phone);
            }
            if let Some(role) = patch.role {
                columns.push("role = ").push_bind_unseparated(role.to_string());
            }
        }
        builder.push(" WHERE id = ").push_bind(user_id);

        builder.build().execute(&self.db_pool).await?;
        Ok(())
    }

    async fn delete_user(&self, user_id: i64) -> anyhow::Result<()> {
        sqlx::query(sqlite_queries::QUERY_DELETE_USER)
            .bind(user_id)
            .execute(&self.db_pool)
            .await?;
        Ok(())
    }

    async fn insert_session(
        &self,
        token: &str,
        user_id: i64,
        expires_at: DateTime<Utc>,
    ) -> anyhow::Result<()> {
        sqlx::query(sqlite_queries::QUERY_INSERT_SESSION)
            .bind(token)
            .bind(user_id)
            .bind(Utc::now())
            .bind(expires_at)
            .execute(&self.db_pool)
            .await?;
        Ok(())
    }

    async fn get_session_user(&self, token: &str) -> anyhow::Result<Option<models::user::User>> {
        Ok(
            sqlx::query_as::<_, models::user::User>(sqlite_queries::QUERY_GET_SESSION_USER)
                .bind(token)
                .bind(Utc::now())
                .fetch_optional(&self.db_pool)
                .await?,
        )
    }

    async fn delete_session(&self, token: &str) -> anyhow::Result<()> {
        sqlx::query(sqlite_queries::QUERY_DELETE_SESSION)
            .bind(token)
            .execute(&self.db_pool)
            .await?;
        Ok(())
    }

    async fn list_categories(&self) -> anyhow::Result<Vec<models::pet::Category>> {
        Ok(
            sqlx::query_as::<_, models::pet::Category>(sqlite_queries::QUERY_LIST_CATEGORIES)
                .fetch_all(&self.db_pool)
                .await?,
        )
    }

    async fn get_category(
        &self,
        category_id: i64,
    ) -> anyhow::Result<Option<models::pet::Category>> {
        Ok(
            sqlx::query_as::<_, models::pet::Category>(sqlite_queries::QUERY_GET_CATEGORY)
                .bind(category_id)
                .fetch_optional(&self.db_pool)
                .await?,
        )
    }

    async fn category_name_taken(
        &self,
        name: &str,
        exclude_id: Option<i64>,
    ) -> anyhow::Result<bool> {
        Ok(
            sqlx::query_scalar(sqlite_queries::QUERY_CATEGORY_NAME_TAKEN)
                .bind(name)
                .bind(exclude_id)
                .fetch_one(&self.db_pool)
                .await?,
        )
    }

    async fn insert_category(
        &self,
        name: &str,
        description: Option<String>,
    ) -> anyhow::Result<i64> {
        Ok(sqlx::query(sqlite_queries::QUERY_INSERT_CATEGORY)
            .bind(name)
            .bind(description)
            .execute(&self.db_pool)
            .await?
            .last_insert_rowid())
    }

    async fn update_category(&self, patch: models::pet::CategoryUpdate) -> anyhow::Result<()> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE pet_categories SET ");
        {
            let mut columns = builder.separated(", ");
            if let Some(name) = patch.name {
                columns.push("name = ").push_bind_unseparated(name);
            }
            if let Some(description) = patch.description {
                columns
                    .push("description = ")
                    .push_bind_unseparated(description);
            }
        }
        builder.push(" WHERE id = ").push_bind(patch.id);

        builder.build().execute(&self.db_pool).await?;
        Ok(())
    }

    async fn delete_category(&self, category_id: i64) -> anyhow::Result<()> {
        sqlx::query(sqlite_queries::QUERY_DELETE_CATEGORY)
            .bind(category_id)
            .execute(&self.db_pool)
            .await?;
        Ok(())
    }

    async fn category_pet_count(&self, category_id: i64) -> anyhow::Result<i64> {
        Ok(
            sqlx::query_scalar(sqlite_queries::QUERY_CATEGORY_PET_COUNT)
                .bind(category_id)
                .fetch_one(&self.db_pool)
                .await?,
        )
    }

    async fn list_pets(&self) -> anyhow::Result<Vec<models::pet::Pet>> {
        Ok(
            sqlx::query_as::<_, models::pet::Pet>(sqlite_queries::QUERY_LIST_PETS)
                .fetch_all(&self.db_pool)
                .await?,
        )
    }

    async fn list_pets_by_category(
        &self,
        category_name: &str,
    ) -> anyhow::Result<Vec<models::pet::Pet>> {
        Ok(
            sqlx::query_as::<_, models::pet::Pet>(sqlite_queries::QUERY_LIST_PETS_BY_CATEGORY)
                .bind(category_name)
                .fetch_all(&self.db_pool)
                .await?,
        )
    }

    async fn get_pet(&self, pet_id: i64) -> anyhow::Result<Option<models::pet::Pet>> {
        Ok(
            sqlx::query_as::<_, models::pet::Pet>(sqlite_queries::QUERY_GET_PET)
                .bind(pet_id)
                .fetch_optional(&self.db_pool)
                .await?,
        )
    }

    async fn pet_exists(&self, pet_id: i64) -> anyhow::Result<bool> {
        Ok(sqlx::query_scalar(sqlite_queries::QUERY_PET_EXISTS)
            .bind(pet_id)
            .fetch_one(&self.db_pool)
            .await?)
    }

    async fn pet_availability(&self, pet_id: i64) -> anyhow::Result<Option<bool>> {
        Ok(
            sqlx::query_scalar::<_, bool>(sqlite_queries::QUERY_PET_AVAILABILITY)
                .bind(pet_id)
                .fetch_optional(&self.db_pool)
                .await?,
        )
    }

    async fn insert_pet(&self, pet: models::pet::NewPet) -> anyhow::Result<i64> {
        Ok(sqlx::query(sqlite_queries::QUERY_INSERT_PET)
            .bind(&pet.name)
            .bind(pet.category_id)
            .bind(&pet.breed)
            .bind(pet.age)
            .bind(&pet.gender)
            .bind(&pet.size)
            .bind(&pet.color)
            .bind(&pet.description)
            .bind(&pet.medical_history)
            .bind(pet.is_available)
            .bind(&pet.image_url)
            .bind(pet.owner_id)
            .bind(Utc::now())
            .execute(&self.db_pool)
            .await?
            .last_insert_rowid())
    }

    async fn update_pet(&self, patch: models::pet::PetUpdate) -> anyhow::Result<()> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE pets SET ");
        {
            let mut columns = builder.separated(", ");
            if let Some(name) = patch.name {
                columns.push("name = ").push_bind_unseparated(name);
            }
            if let Some(category_id) = patch.category_id {
                columns
                    .push("category_id = ")
                    .push_bind_unseparated(category_id);
            }
            if let Some(breed) = patch.breed {
                columns.push("breed = ").push_bind_unseparated(breed);
            }
            if let Some(age) = patch.age {
                columns.push("age = ").push_bind_unseparated(age);
            }
            if let Some(gender) = patch.gender {
                columns.push("gender = ").push_bind_unseparated(gender);
            }
            if let Some(size) = patch.size {
                columns.push("size = ").push_bind_unseparated(size);
            }
            if let Some(color) = patch.color {
                columns.push("color = ").push_bind_unseparated(color);
            }
            if let Some(description) = patch.description {
                columns
                    .push("description = ")
                    .push_bind_unseparated(description);
            }
            if let Some(medical_history) = patch.medical_history {
                columns
                    .push("medical_history = ")
                    .push_bind_unseparated(medical_history);
            }
            if let Some(is_available) = patch.is_available {
                columns
                    .push("is_available = ")
                    .push_bind_unseparated(is_available);
            }
            if let Some(image_url) = patch.image_url {
                columns.push("image_url = ").push_bind_unseparated(image_url);
            }
            if let Some(owner_id) = patch.owner_id {
                columns.push("owner_id = ").push_bind_unseparated(owner_id);
            }
        }
        builder.push(" WHERE id = ").push_bind(patch.id);

        builder.build().execute(&self.db_pool).await?;
        Ok(())
    }

    async fn delete_pet(&self, pet_id: i64) -> anyhow::Result<()> {
        sqlx::query(sqlite_queries::QUERY_DELETE_PET)
            .bind(pet_id)
            .execute(&self.db_pool)
            .await?;
        Ok(())
    }

    async fn list_adoption_requests(
        &self,
    ) -> anyhow::Result<Vec<models::adoption::AdoptionRequest>> {
        Ok(sqlx::query_as::<_, models::adoption::AdoptionRequest>(
            sqlite_queries::QUERY_LIST_ADOPTIONS,
        )
        .fetch_all(&self.db_pool)
        .await?)
    }

    async fn get_adoption_request(
        &self,
        request_id: i64,
    ) -> anyhow::Result<Option<models::adoption::AdoptionRequest>> {
        Ok(sqlx::query_as::<_, models::adoption::AdoptionRequest>(
            sqlite_queries::QUERY_GET_ADOPTION,
        )
        .bind(request_id)
        .fetch_optional(&self.db_pool)
        .await?)
    }

    async fn list_user_adoption_requests(
        &self,
        user_id: i64,
    ) -> anyhow::Result<Vec<models::adoption::AdoptionRequest>> {
        Ok(sqlx::query_as::<_, models::adoption::AdoptionRequest>(
            sqlite_queries::QUERY_LIST_USER_ADOPTIONS,
        )
        .bind(user_id)
        .fetch_all(&self.db_pool)
        .await?)
    }

    async fn list_pet_adoption_requests(
        &self,
        pet_id: i64,
    ) -> anyhow::Result<Vec<models::adoption::AdoptionRequest>> {
        Ok(sqlx::query_as::<_, models::adoption::AdoptionRequest>(
            sqlite_queries::QUERY_LIST_PET_ADOPTIONS,
        )
        .bind(pet_id)
        .fetch_all(&self.db_pool)
        .await?)
    }

    async fn has_pending_request(&self, pet_id: i64, user_id: i64) -> anyhow::Result<bool> {
        Ok(
            sqlx::query_scalar(sqlite_queries::QUERY_HAS_PENDING_REQUEST)
                .bind(pet_id)
                .bind(user_id)
                .fetch_one(&self.db_pool)
                .await?,
        )
    }

    async fn insert_adoption_request(
        &self,
        pet_id: i64,
        user_id: i64,
        reason: &str,
    ) -> anyhow::Result<i64> {
        Ok(sqlx::query(sqlite_queries::QUERY_INSERT_ADOPTION)
            .bind(pet_id)
            .bind(user_id)
            .bind(reason)
            .bind(models::adoption::AdoptionStatus::Pending.to_string())
            .bind(Utc::now())
            .execute(&self.db_pool)
            .await?
            .last_insert_rowid())
    }

    async fn get_adoption_summary(
        &self,
        request_id: i64,
    ) -> anyhow::Result<Option<(i64, models::adoption::AdoptionStatus)>> {
        Ok(sqlx::query(sqlite_queries::QUERY_GET_ADOPTION_SUMMARY)
            .bind(request_id)
            .map(|row: SqliteRow| {
                (
                    row.try_get("pet_id").unwrap_or_default(),
                    row.try_get::<String, _>("status")
                        .unwrap_or_default()
                        .parse()
                        .unwrap_or_default(),
                )
            })
            .fetch_optional(&self.db_pool)
            .await?)
    }

    async fn set_adoption_status(
        &self,
        request_id: i64,
        status: models::adoption::AdoptionStatus,
    ) -> anyhow::Result<()> {
        sqlx::query(sqlite_queries::QUERY_SET_ADOPTION_STATUS)
            .bind(request_id)
            .bind(status.to_string())
            .execute(&self.db_pool)
            .await?;
        Ok(())
    }

    async fn approve_adoption_request(&self, request_id: i64, pet_id: i64) -> anyhow::Result<()> {
        let mut transaction = self.db_pool.begin().await?;

        sqlx::query(sqlite_queries::QUERY_SET_ADOPTION_STATUS)
            .bind(request_id)
            .bind(models::adoption::AdoptionStatus::Approved.to_string())
            .execute(&mut *transaction)
            .await?;

        sqlx::query(sqlite_queries::QUERY_SET_PET_UNAVAILABLE)
            .bind(pet_id)
            .execute(&mut *transaction)
            .await?;

        sqlx::query(sqlite_queries::QUERY_REJECT_OTHER_PENDING)
            .bind(pet_id)
            .bind(request_id)
            .execute(&mut *transaction)
            .await?;

        transaction.commit().await?;

        Ok(())
    }

    async fn delete_adoption_request(&self, request_id: i64) -> anyhow::Result<()> {
        sqlx::query(sqlite_queries::QUERY_DELETE_ADOPTION)
            .bind(request_id)
            .execute(&self.db_pool)
            .await?;
        Ok(())
    }

    async fn list_clinics(&self) -> anyhow::Result<Vec<models::clinic::Clinic>> {
        Ok(
            sqlx::query_as::<_, models::clinic::Clinic>(sqlite_queries::QUERY_LIST_CLINICS)
                .fetch_all(&self.db_pool)
                .await?,
        )
    }

    async fn get_clinic(&self, clinic_id: i64) -> anyhow::Result<Option<models::clinic::Clinic>> {
        Ok(
            sqlx::query_as::<_, models::clinic::Clinic>(sqlite_queries::QUERY_GET_CLINIC)
                .bind(clinic_id)
                .fetch_optional(&self.db_pool)
                .await?,
        )
    }

    async fn get_clinic_hours(
        &self,
        clinic_id: i64,
    ) -> anyhow::Result<Vec<models::clinic::ClinicHour>> {
        Ok(
            sqlx::query_as::<_, models::clinic::ClinicHour>(sqlite_queries::QUERY_GET_CLINIC_HOURS)
                .bind(clinic_id)
                .fetch_all(&self.db_pool)
                .await?,
        )
    }

    async fn get_clinic_services(
        &self,
        clinic_id: i64,
    ) -> anyhow::Result<Vec<models::clinic::ClinicService>> {
        Ok(sqlx::query_as::<_, models::clinic::ClinicService>(
            sqlite_queries::QUERY_GET_CLINIC_SERVICES,
        )
        .bind(clinic_id)
        .fetch_all(&self.db_pool)
        .await?)
    }

    async fn clinic_exists(&self, clinic_id: i64) -> anyhow::Result<bool> {
        Ok(sqlx::query_scalar(sqlite_queries::QUERY_CLINIC_EXISTS)
            .bind(clinic_id)
            .fetch_one(&self.db_pool)
            .await?)
    }

    async fn clinic_name_taken(
        &self,
        name: &str,
        exclude_id: Option<i64>,
    ) -> anyhow::Result<bool> {
        Ok(sqlx::query_scalar(sqlite_queries::QUERY_CLINIC_NAME_TAKEN)
            .bind(name)
            .bind(exclude_id)
            .fetch_one(&self.db_pool)
            .await?)
    }

    async fn insert_clinic(&self, clinic: models::clinic::NewClinic) -> anyhow::Result<i64> {
        let mut transaction = self.db_pool.begin().await?;

        let clinic_id = sqlx::query(sqlite_queries::QUERY_INSERT_CLINIC)
            .bind(&clinic.name)
            .bind(&clinic.address)
            .bind(&clinic.phone)
            .bind(&clinic.email)
            .bind(&clinic.description)
            .bind(&clinic.image)
            .bind(Utc::now())
            .execute(&mut *transaction)
            .await?
            .last_insert_rowid();

        for hour in clinic.hours.iter().flatten() {
            if let Some((day, open_time, close_time)) = hour.complete() {
                sqlx::query(sqlite_queries::QUERY_INSERT_CLINIC_HOUR)
                    .bind(clinic_id)
                    .bind(day)
                    .bind(open_time)
                    .bind(close_time)
                    .execute(&mut *transaction)
                    .await?;
            }
        }

        for service in clinic.services.iter().flatten() {
            if let Some((name, description, price)) = service.complete() {
                sqlx::query(sqlite_queries::QUERY_INSERT_CLINIC_SERVICE)
                    .bind(clinic_id)
                    .bind(name)
                    .bind(description)
                    .bind(price.to_f64().unwrap_or_default())
                    .execute(&mut *transaction)
                    .await?;
            }
        }

        transaction.commit().await?;

        Ok(clinic_id)
    }

    async fn update_clinic(&self, patch: models::clinic::ClinicUpdate) -> anyhow::Result<()> {
        let mut transaction = self.db_pool.begin().await?;

        if patch.has_scalar_updates() {
            let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE vet_clinics SET ");
            {
                let mut columns = builder.separated(", ");
                if let Some(name) = &patch.name {
                    columns.push("name = ").push_bind_unseparated(name.clone());
                }
                if let Some(address) = &patch.address {
                    columns
                        .push("address = ")
                        .push_bind_unseparated(address.clone());
                }
                if let Some(phone) = &patch.phone {
                    columns.push("phone = ").push_bind_unseparated(phone.clone());
                }
                if let Some(email) = &patch.email {
                    columns.push("email = ").push_bind_unseparated(email.clone());
                }
                if let Some(description) = &patch.description {
                    columns
                        .push("description = ")
                        .push_bind_unseparated(description.clone());
                }
                if let Some(image) = &patch.image {
                    columns.push("image = ").push_bind_unseparated(image.clone());
                }
            }
            builder.push(" WHERE id = ").push_bind(patch.id);

            builder.build().execute(&mut *transaction).await?;
        }

        // replace-entirely: supplied child sets fully override the stored ones
        if let Some(hours) = &patch.hours {
            sqlx::query(sqlite_queries::QUERY_DELETE_CLINIC_HOURS)
                .bind(patch.id)
                .execute(&mut *transaction)
                .await?;

            for hour in hours {
                if let Some((day, open_time, close_time)) = hour.complete() {
                    sqlx::query(sqlite_queries::QUERY_INSERT_CLINIC_HOUR)
                        .bind(patch.id)
                        .bind(day)
                        .bind(open_time)
                        .bind(close_time)
                        .execute(&mut *transaction)
                        .await?;
                }
            }
        }

        if let Some(services) = &patch.services {
            sqlx::query(sqlite_queries::QUERY_DELETE_CLINIC_SERVICES)
                .bind(patch.id)
                .execute(&mut *transaction)
                .await?;

            for service in services {
                if let Some((name, description, price)) = service.complete() {
                    sqlx::query(sqlite_queries::QUERY_INSERT_CLINIC_SERVICE)
                        .bind(patch.id)
                        .bind(name)
                        .bind(description)
                        .bind(price.to_f64().unwrap_or_default())
                        .execute(&mut *transaction)
                        .await?;
                }
            }
        }

        transaction.commit().await?;

        Ok(())
    }

    async fn clinic_has_appointments(&self, clinic_id: i64) -> anyhow::Result<bool> {
        Ok(
            sqlx::query_scalar(sqlite_queries::QUERY_CLINIC_HAS_APPOINTMENTS)
                .bind(clinic_id)
                .fetch_one(&self.db_pool)
                .await?,
        )
    }

    async fn delete_clinic(&self, clinic_id: i64) -> anyhow::Result<()> {
        let mut transaction = self.db_pool.begin().await?;

        sqlx::query(sqlite_queries::QUERY_DELETE_CLINIC_HOURS)
            .bind(clinic_id)
            .execute(&mut *transaction)
            .await?;

        sqlx::query(sqlite_queries::QUERY_DELETE_CLINIC_SERVICES)
            .bind(clinic_id)
            .execute(&mut *transaction)
            .await?;

        sqlx::query(sqlite_queries::QUERY_DELETE_CLINIC)
            .bind(clinic_id)
            .execute(&mut *transaction)
            .await?;

        transaction.commit().await?;

        Ok(())
    }

    async fn list_services(&self) -> anyhow::Result<Vec<models::clinic::ClinicService>> {
        Ok(
            sqlx::query_as::<_, models::clinic::ClinicService>(sqlite_queries::QUERY_LIST_SERVICES)
                .fetch_all(&self.db_pool)
                .await?,
        )
    }

    async fn get_service(
        &self,
        service_id: i64,
    ) -> anyhow::Result<Option<models::clinic::ClinicService>> {
        Ok(
            sqlx::query_as::<_, models::clinic::ClinicService>(sqlite_queries::QUERY_GET_SERVICE)
                .bind(service_id)
                .fetch_optional(&self.db_pool)
                .await?,
        )
    }

    async fn get_service_clinic(&self, service_id: i64) -> anyhow::Result<Option<i64>> {
        Ok(
            sqlx::query_scalar::<_, i64>(sqlite_queries::QUERY_GET_SERVICE_CLINIC)
                .bind(service_id)
                .fetch_optional(&self.db_pool)
                .await?,
        )
    }

    async fn service_name_taken(
        &self,
        clinic_id: i64,
        name: &str,
        exclude_id: Option<i64>,
    ) -> anyhow::Result<bool> {
        Ok(
            sqlx::query_scalar(sqlite_queries::QUERY_SERVICE_NAME_TAKEN)
                .bind(clinic_id)
                .bind(name)
                .bind(exclude_id)
                .fetch_one(&self.db_pool)
                .await?,
        )
    }

    async fn service_belongs_to_clinic(
        &self,
        service_id: i64,
        clinic_id: i64,
    ) -> anyhow::Result<bool> {
        Ok(
            sqlx::query_scalar(sqlite_queries::QUERY_SERVICE_BELONGS_TO_CLINIC)
                .bind(service_id)
                .bind(clinic_id)
                .fetch_one(&self.db_pool)
                .await?,
        )
    }

    async fn service_in_use(&self, service_id: i64) -> anyhow::Result<bool> {
        Ok(sqlx::query_scalar(sqlite_queries::QUERY_SERVICE_IN_USE)
            .bind(service_id)
            .fetch_one(&self.db_pool)
            .await?)
    }

    async fn insert_service(
        &self,
        clinic_id: i64,
        name: &str,
        description: Option<String>,
        price: Decimal,
    ) -> anyhow::Result<i64> {
        Ok(sqlx::query(sqlite_queries::QUERY_INSERT_CLINIC_SERVICE)
            .bind(clinic_id)
            .bind(name)
            .bind(description)
            .bind(price.to_f64().unwrap_or_default())
            .execute(&self.db_pool)
            .await?
            .last_insert_rowid())
    }

    async fn update_service(&self, patch: models::clinic::ServiceUpdate) -> anyhow::Result<()> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE clinic_services SET ");
        {
            let mut columns = builder.separated(", ");
            if let Some(clinic_id) = patch.clinic_id {
                columns.push("clinic_id = ").push_bind_unseparated(clinic_id);
            }
            if let Some(name) = patch.name {
                columns.push("name = ").push_bind_unseparated(name);
            }
            if let Some(description) = patch.description {
                columns
                    .push("description = ")
                    .push_bind_unseparated(description);
            }
            if let Some(price) = patch.price {
                columns
                    .push("price = ")
                    .push_bind_unseparated(price.to_f64().unwrap_or_default());
            }
        }
        builder.push(" WHERE id = ").push_bind(patch.id);

        builder.build().execute(&self.db_pool).await?;
        Ok(())
    }

    async fn delete_service(&self, service_id: i64) -> anyhow::Result<()> {
        sqlx::query(sqlite_queries::QUERY_DELETE_SERVICE)
            .bind(service_id)
            .execute(&self.db_pool)
            .await?;
        Ok(())
    }

    async fn list_appointments(&self) -> anyhow::Result<Vec<models::appointment::Appointment>> {
        let appointments = sqlx::query_as::<_, models::appointment::Appointment>(
            sqlite_queries::QUERY_LIST_APPOINTMENTS,
        )
        .fetch_all(&self.db_pool)
        .await?;

        self.attach_services(appointments).await
    }

    async fn get_appointment(
        &self,
        appointment_id: i64,
    ) -> anyhow::Result<Option<models::appointment::Appointment>> {
        let appointment = sqlx::query_as::<_, models::appointment::Appointment>(
            sqlite_queries::QUERY_GET_APPOINTMENT,
        )
        .bind(appointment_id)
        .fetch_optional(&self.db_pool)
        .await?;

        match appointment {
            Some(mut appointment) => {
                appointment.services = self.fetch_appointment_services(appointment.id).await?;
                Ok(Some(appointment))
            }
            None => Ok(None),
        }
    }

    async fn list_pet_appointments(
        &self,
        pet_id: i64,
    ) -> anyhow::Result<Vec<models::appointment::Appointment>> {
        let appointments = sqlx::query_as::<_, models::appointment::Appointment>(
            sqlite_queries::QUERY_LIST_PET_APPOINTMENTS,
        )
        .bind(pet_id)
        .fetch_all(&self.db_pool)
        .await?;

        self.attach_services(appointments).await
    }

    async fn list_clinic_appointments(
        &self,
        clinic_id: i64,
    ) -> anyhow::Result<Vec<models::appointment::Appointment>> {
        let appointments = sqlx::query_as::<_, models::appointment::Appointment>(
            sqlite_queries::QUERY_LIST_CLINIC_APPOINTMENTS,
        )
        .bind(clinic_id)
        .fetch_all(&self.db_pool)
        .await?;

        self.attach_services(appointments).await
    }

    async fn list_user_appointments(
        &self,
        user_id: i64,
    ) -> anyhow::Result<Vec<models::appointment::Appointment>> {
        let appointments = sqlx::query_as::<_, models::appointment::Appointment>(
            sqlite_queries::QUERY_LIST_USER_APPOINTMENTS,
        )
        .bind(user_id)
        .fetch_all(&self.db_pool)
        .await?;

        self.attach_services(appointments).await
    }

    async fn get_appointment_row(
        &self,
        appointment_id: i64,
    ) -> anyhow::Result<Option<models::appointment::Appointment>> {
        Ok(sqlx::query_as::<_, models::appointment::Appointment>(
            sqlite_queries::QUERY_GET_APPOINTMENT_ROW,
        )
        .bind(appointment_id)
        .fetch_optional(&self.db_pool)
        .await?)
    }

    async fn appointment_exists(&self, appointment_id: i64) -> anyhow::Result<bool> {
        Ok(sqlx::query_scalar(sqlite_queries::QUERY_APPOINTMENT_EXISTS)
            .bind(appointment_id)
            .fetch_one(&self.db_pool)
            .await?)
    }

    async fn insert_appointment(
        &self,
        appointment: models::appointment::NewAppointment,
    ) -> anyhow::Result<i64> {
        let mut transaction = self.db_pool.begin().await?;

        let appointment_id = sqlx::query(sqlite_queries::QUERY_INSERT_APPOINTMENT)
            .bind(appointment.pet_id)
            .bind(appointment.clinic_id)
            .bind(appointment.appointment_date)
            .bind(appointment.appointment_time)
            .bind(&appointment.reason)
            .bind(Utc::now())
            .execute(&mut *transaction)
            .await?
            .last_insert_rowid();

        for service_id in &appointment.services {
            sqlx::query(sqlite_queries::QUERY_INSERT_APPOINTMENT_SERVICE)
                .bind(appointment_id)
                .bind(service_id)
                .execute(&mut *transaction)
                .await?;
        }

        transaction.commit().await?;

        Ok(appointment_id)
    }

    async fn update_appointment(
        &self,
        appointment: models::appointment::Appointment,
        services: Option<Vec<i64>>,
    ) -> anyhow::Result<()> {
        let mut transaction = self.db_pool.begin().await?;

        sqlx::query(sqlite_queries::QUERY_UPDATE_APPOINTMENT)
            .bind(appointment.id)
            .bind(appointment.pet_id)
            .bind(appointment.clinic_id)
            .bind(appointment.appointment_date)
            .bind(appointment.appointment_time)
            .bind(&appointment.reason)
            .bind(appointment.status.to_string())
            .bind(&appointment.notes)
            .execute(&mut *transaction)
            .await?;

        if let Some(services) = services {
            sqlx::query(sqlite_queries::QUERY_DELETE_APPOINTMENT_SERVICES)
                .bind(appointment.id)
                .execute(&mut *transaction)
                .await?;

            for service_id in services {
                sqlx::query(sqlite_queries::QUERY_INSERT_APPOINTMENT_SERVICE)
                    .bind(appointment.id)
                    .bind(service_id)
                    .execute(&mut *transaction)
                    .await?;
            }
        }

        transaction.commit().await?;

        Ok(())
    }

    async fn delete_appointment(&self, appointment_id: i64) -> anyhow::Result<()> {
        let mut transaction = self.db_pool.begin().await?;

        sqlx::query(sqlite_queries::QUERY_DELETE_APPOINTMENT_SERVICES)
            .bind(appointment_id)
            .execute(&mut *transaction)
            .await?;

        sqlx::query(sqlite_queries::QUERY_DELETE_APPOINTMENT)
            .bind(appointment_id)
            .execute(&mut *transaction)
            .await?;

        transaction.commit().await?;

        Ok(())
    }

    async fn list_pricing_plans(&self) -> anyhow::Result<Vec<models::pricing::PricingPlan>> {
        Ok(
            sqlx::query_as::<_, models::pricing::PricingPlan>(sqlite_queries::QUERY_LIST_PLANS)
                .fetch_all(&self.db_pool)
                .await?,
        )
    }

    async fn plan_exists(&self, plan_id: i64) -> anyhow::Result<bool> {
        Ok(sqlx::query_scalar(sqlite_queries::QUERY_PLAN_EXISTS)
            .bind(plan_id)
            .fetch_one(&self.db_pool)
            .await?)
    }

    async fn list_plan_orders(&self) -> anyhow::Result<Vec<models::pricing::PlanOrder>> {
        Ok(
            sqlx::query_as::<_, models::pricing::PlanOrder>(sqlite_queries::QUERY_LIST_PLAN_ORDERS)
                .fetch_all(&self.db_pool)
                .await?,
        )
    }

    async fn insert_plan_order(&self, user_id: i64, plan_id: i64) -> anyhow::Result<i64> {
        Ok(sqlx::query(sqlite_queries::QUERY_INSERT_PLAN_ORDER)
            .bind(user_id)
            .bind(plan_id)
            .bind(Utc::now())
            .execute(&self.db_pool)
            .await?
            .last_insert_rowid())
    }

    async fn plan_order_exists(&self, order_id: i64) -> anyhow::Result<bool> {
        Ok(sqlx::query_scalar(sqlite_queries::QUERY_PLAN_ORDER_EXISTS)
            .bind(order_id)
            .fetch_one(&self.db_pool)
            .await?)
    }

    async fn set_plan_order_status(
        &self,
        order_id: i64,
        status: models::pricing::OrderStatus,
    ) -> anyhow::Result<()> {
        sqlx::query(sqlite_queries::QUERY_SET_PLAN_ORDER_STATUS)
            .bind(order_id)
            .bind(status.to_string())
            .execute(&self.db_pool)
            .await?;
        Ok(())
    }
}
