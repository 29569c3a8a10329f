pub mod sqlite;
pub mod sqlite_queries;

use crate::models;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AppRepo {
    // users & sessions

    async fn get_user_record_by_email(
        &self,
        email: &str,
    ) -> anyhow::Result<Option<models::user::UserRecord>>;

    async fn get_user_by_id(&self, user_id: i64) -> anyhow::Result<Option<models::user::User>>;

    async fn list_users(&self) -> anyhow::Result<Vec<models::user::User>>;

    async fn user_email_taken(&self, email: &str, exclude_id: Option<i64>)
    -> anyhow::Result<bool>;

    async fn user_exists(&self, user_id: i64) -> anyhow::Result<bool>;

    async fn insert_user(&self, user: models::user::NewUser) -> anyhow::Result<i64>;

    async fn update_user(
        &self,
        user_id: i64,
        patch: models::user::UserPatch,
    ) -> anyhow::Result<()>;

    async fn delete_user(&self, user_id: i64) -> anyhow::Result<()>;

    async fn insert_session(
        &self,
        token: &str,
        user_id: i64,
        expires_at: DateTime<Utc>,
    ) -> anyhow::Result<()>;

    async fn get_session_user(&self, token: &str) -> anyhow::Result<Option<models::user::User>>;

    async fn delete_session(&self, token: &str) -> anyhow::Result<()>;

    // pet categories

    async fn list_categories(&self) -> anyhow::Result<Vec<models::pet::Category>>;

    async fn get_category(&self, category_id: i64)
    -> anyhow::Result<Option<models::pet::Category>>;

    async fn category_name_taken(
        &self,
        name: &str,
        exclude_id: Option<i64>,
    ) -> anyhow::Result<bool>;

    async fn insert_category(&self, name: &str, description: Option<String>)
    -> anyhow::Result<i64>;

    async fn update_category(&self, patch: models::pet::CategoryUpdate) -> anyhow::Result<()>;

    async fn delete_category(&self, category_id: i64) -> anyhow::Result<()>;

    async fn category_pet_count(&self, category_id: i64) -> anyhow::Result<i64>;

    // pets

    async fn list_pets(&self) -> anyhow::Result<Vec<models::pet::Pet>>;

    async fn list_pets_by_category(
        &self,
        category_name: &str,
    ) -> anyhow::Result<Vec<models::pet::Pet>>;

    async fn get_pet(&self, pet_id: i64) -> anyhow::Result<Option<models::pet::Pet>>;

    async fn pet_exists(&self, pet_id: i64) -> anyhow::Result<bool>;

    /// `None` when the pet does not exist.
    async fn pet_availability(&self, pet_id: i64) -> anyhow::Result<Option<bool>>;

    async fn insert_pet(&self, pet: models::pet::NewPet) -> anyhow::Result<i64>;

    async fn update_pet(&self, patch: models::pet::PetUpdate) -> anyhow::Result<()>;

    async fn delete_pet(&self, pet_id: i64) -> anyhow::Result<()>;

    // adoption requests

    async fn list_adoption_requests(&self)
    -> anyhow::Result<Vec<models::adoption::AdoptionRequest>>;

    async fn get_adoption_request(
        &self,
        request_id: i64,
    ) -> anyhow::Result<Option<models::adoption::AdoptionRequest>>;

    async fn list_user_adoption_requests(
        &self,
        user_id: i64,
    ) -> anyhow::Result<Vec<models::adoption::AdoptionRequest>>;

    async fn list_pet_adoption_requests(
        &self,
        pet_id: i64,
    ) -> anyhow::Result<Vec<models::adoption::AdoptionRequest>>;

    async fn has_pending_request(&self, pet_id: i64, user_id: i64) -> anyhow::Result<bool>;

    async fn insert_adoption_request(
        &self,
        pet_id: i64,
        user_id: i64,
        reason: &str,
    ) -> anyhow::Result<i64>;

    /// `(pet_id, status)` of an existing request, `None` when unknown.
    async fn get_adoption_summary(
        &self,
        request_id: i64,
    ) -> anyhow::Result<Option<(i64, models::adoption::AdoptionStatus)>>;

    async fn set_adoption_status(
        &self,
        request_id: i64,
        status: models::adoption::AdoptionStatus,
    ) -> anyhow::Result<()>;

    /// Single transaction: approve the request, flip the pet to unavailable
    /// and reject every other pending request for the same pet.
    async fn approve_adoption_request(&self, request_id: i64, pet_id: i64) -> anyhow::Result<()>;

    async fn delete_adoption_request(&self, request_id: i64) -> anyhow::Result<()>;

    // vet clinics

    async fn list_clinics(&self) -> anyhow::Result<Vec<models::clinic::Clinic>>;

    async fn get_clinic(&self, clinic_id: i64) -> anyhow::Result<Option<models::clinic::Clinic>>;

    async fn get_clinic_hours(&self, clinic_id: i64)
    -> anyhow::Result<Vec<models::clinic::ClinicHour>>;

    async fn get_clinic_services(
        &self,
        clinic_id: i64,
    ) -> anyhow::Result<Vec<models::clinic::ClinicService>>;

    async fn clinic_exists(&self, clinic_id: i64) -> anyhow::Result<bool>;

    async fn clinic_name_taken(
        &self,
        name: &str,
        exclude_id: Option<i64>,
    ) -> anyhow::Result<bool>;

    /// Single transaction: clinic row plus any complete nested hour/service
    /// entries.
    async fn insert_clinic(&self, clinic: models::clinic::NewClinic) -> anyhow::Result<i64>;

    /// Single transaction: scalar column updates plus replace-entirely child
    /// collections for whichever of `hours`/`services` were supplied.
    async fn update_clinic(&self, patch: models::clinic::ClinicUpdate) -> anyhow::Result<()>;

    async fn clinic_has_appointments(&self, clinic_id: i64) -> anyhow::Result<bool>;

    /// Single transaction: hours, services, then the clinic row.
    async fn delete_clinic(&self, clinic_id: i64) -> anyhow::Result<()>;

    // clinic services (standalone resource)

    async fn list_services(&self) -> anyhow::Result<Vec<models::clinic::ClinicService>>;

    async fn get_service(
        &self,
        service_id: i64,
    ) -> anyhow::Result<Option<models::clinic::ClinicService>>;

    async fn get_service_clinic(&self, service_id: i64) -> anyhow::Result<Option<i64>>;

    async fn service_name_taken(
        &self,
        clinic_id: i64,
        name: &str,
        exclude_id: Option<i64>,
    ) -> anyhow::Result<bool>;

    async fn service_belongs_to_clinic(
        &self,
        service_id: i64,
        clinic_id: i64,
    ) -> anyhow::Result<bool>;

    async fn service_in_use(&self, service_id: i64) -> anyhow::Result<bool>;

    async fn insert_service(
        &self,
        clinic_id: i64,
        name: &str,
        description: Option<String>,
        price: Decimal,
    ) -> anyhow::Result<i64>;

    async fn update_service(&self, patch: models::clinic::ServiceUpdate) -> anyhow::Result<()>;

    async fn delete_service(&self, service_id: i64) -> anyhow::Result<()>;

    // vet appointments

    async fn list_appointments(&self)
    -> anyhow::Result<Vec<models::appointment::Appointment>>;

    async fn get_appointment(
        &self,
        appointment_id: i64,
    ) -> anyhow::Result<Option<models::appointment::Appointment>>;

    async fn list_pet_appointments(
        &self,
        pet_id: i64,
    ) -> anyhow::Result<Vec<models::appointment::Appointment>>;

    async fn list_clinic_appointments(
        &self,
        clinic_id: i64,
    ) -> anyhow::Result<Vec<models::appointment::Appointment>>;

    async fn list_user_appointments(
        &self,
        user_id: i64,
    ) -> anyhow::Result<Vec<models::appointment::Appointment>>;

    /// Bare row without joined display columns or services; used for the
    /// read-modify-merge update.
    async fn get_appointment_row(
        &self,
        appointment_id: i64,
    ) -> anyhow::Result<Option<models::appointment::Appointment>>;

    async fn appointment_exists(&self, appointment_id: i64) -> anyhow::Result<bool>;

    /// Single transaction: appointment row plus one join row per service.
    async fn insert_appointment(
        &self,
        appointment: models::appointment::NewAppointment,
    ) -> anyhow::Result<i64>;

    /// Single transaction: full row update with the merged values plus, when
    /// `services` is supplied, delete-all + insert-new join rows.
    async fn update_appointment(
        &self,
        appointment: models::appointment::Appointment,
        services: Option<Vec<i64>>,
    ) -> anyhow::Result<()>;

    /// Single transaction: join rows, then the appointment row.
    async fn delete_appointment(&self, appointment_id: i64) -> anyhow::Result<()>;

    // pricing plans & orders

    async fn list_pricing_plans(&self) -> anyhow::Result<Vec<models::pricing::PricingPlan>>;

    async fn plan_exists(&self, plan_id: i64) -> anyhow::Result<bool>;

    async fn list_plan_orders(&self) -> anyhow::Result<Vec<models::pricing::PlanOrder>>;

    async fn insert_plan_order(&self, user_id: i64, plan_id: i64) -> anyhow::Result<i64>;

    async fn plan_order_exists(&self, order_id: i64) -> anyhow::Result<bool>;

    async fn set_plan_order_status(
        &self,
        order_id: i64,
        status: models::pricing::OrderStatus,
    ) -> anyhow::Result<()>;
}

pub type ImplAppRepo = Box<dyn AppRepo>;
