//! Clinic management, including the nested hours/services collections.
//!
//! Child collections follow replace-entirely semantics: a supplied set fully
//! overrides the stored rows inside the same transaction as the scalar
//! update. Deletion is blocked while any appointment references the clinic.

use crate::{front::errors::ApiError, models, repo};

pub async fn list_clinics(
    repo: &repo::ImplAppRepo,
) -> Result<Vec<models::clinic::Clinic>, ApiError> {
    Ok(repo.list_clinics().await?)
}

/// Single-clinic read, with opening hours (weekday order) and services
/// (name order) nested in the payload.
pub async fn get_clinic(
    clinic_id: i64,
    repo: &repo::ImplAppRepo,
) -> Result<models::clinic::Clinic, ApiError> {
    let mut clinic = repo
        .get_clinic(clinic_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Clinic not found".into()))?;

    clinic.hours = Some(repo.get_clinic_hours(clinic_id).await?);
    clinic.services = Some(repo.get_clinic_services(clinic_id).await?);

    Ok(clinic)
}

pub async fn create_clinic(
    clinic: models::clinic::NewClinic,
    repo: &repo::ImplAppRepo,
) -> Result<i64, ApiError> {
    let required = [
        &clinic.name,
        &clinic.address,
        &clinic.phone,
        &clinic.email,
    ];
    if required.iter().any(|field| field.trim().is_empty()) {
        return Err(ApiError::Validation("Missing required fields".into()));
    }

    if repo.clinic_name_taken(&clinic.name, None).await? {
        return Err(ApiError::Conflict(
            "A clinic with this name already exists".into(),
        ));
    }

    Ok(repo.insert_clinic(clinic).await?)
}

pub async fn update_clinic(
    patch: models::clinic::ClinicUpdate,
    repo: &repo::ImplAppRepo,
) -> Result<(), ApiError> {
    if !repo.clinic_exists(patch.id).await? {
        return Err(ApiError::NotFound("Clinic not found".into()));
    }

    if !patch.has_scalar_updates() && patch.hours.is_none() && patch.services.is_none() {
        return Err(ApiError::Validation("No fields to update".into()));
    }

    Ok(repo.update_clinic(patch).await?)
}

pub async fn delete_clinic(clinic_id: i64, repo: &repo::ImplAppRepo) -> Result<(), ApiError> {
    if !repo.clinic_exists(clinic_id).await? {
        return Err(ApiError::NotFound("Clinic not found".into()));
    }

    if repo.clinic_has_appointments(clinic_id).await? {
        return Err(ApiError::Validation(
            "Cannot delete clinic with existing appointments".into(),
        ));
    }

    Ok(repo.delete_clinic(clinic_id).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::clinic::{Clinic, ClinicHour, ClinicHourInput, ClinicUpdate, NewClinic};
    use crate::repo::MockAppRepo;
    use chrono::Utc;
    use mockall::predicate::*;

    fn new_clinic_fixture() -> NewClinic {
        NewClinic {
            name: "Happy Paws".to_string(),
            address: "12 Main St".to_string(),
            phone: "555-0000".to_string(),
            email: "clinic@example.com".to_string(),
            description: None,
            image: None,
            hours: None,
            services: None,
        }
    }

    fn stored_clinic(id: i64) -> Clinic {
        Clinic {
            id,
            name: "Happy Paws".to_string(),
            address: "12 Main St".to_string(),
            phone: "555-0000".to_string(),
            email: "clinic@example.com".to_string(),
            created_at: Utc::now(),
            ..Default::default()
        }
    }

    #[ntex::test]
    async fn test_create_clinic_with_unique_name() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_clinic_name_taken()
            .with(eq("Happy Paws"), eq(None))
            .times(1)
            .returning(|_, _| Ok(false));
        mock_repo
            .expect_insert_clinic()
            .withf(|clinic| clinic.name == "Happy Paws")
            .times(1)
            .returning(|_| Ok(8));

        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);
        let result = create_clinic(new_clinic_fixture(), &mock_repo).await;

        assert!(result.is_ok_and(|id| id == 8));
    }

    #[ntex::test]
    async fn test_create_clinic_duplicate_name_conflicts_without_insert() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_clinic_name_taken()
            .times(1)
            .returning(|_, _| Ok(true));
        // no insert expectation: a call would panic the test

        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);
        let result = create_clinic(new_clinic_fixture(), &mock_repo).await;

        assert!(matches!(result, Err(ApiError::Conflict(_))));
    }

    #[ntex::test]
    async fn test_create_clinic_blank_required_field_is_invalid() {
        let mock_repo: repo::ImplAppRepo = Box::new(MockAppRepo::new());

        let clinic = NewClinic {
            phone: "  ".to_string(),
            ..new_clinic_fixture()
        };
        let result = create_clinic(clinic, &mock_repo).await;

        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[ntex::test]
    async fn test_update_clinic_passes_replacement_hours_through() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo.expect_clinic_exists().returning(|_| Ok(true));
        mock_repo
            .expect_update_clinic()
            .withf(|patch| {
                patch.id == 8
                    && patch
                        .hours
                        .as_ref()
                        .is_some_and(|hours| hours.len() == 1)
            })
            .times(1)
            .returning(|_| Ok(()));

        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);
        let patch = ClinicUpdate {
            id: 8,
            hours: Some(vec![ClinicHourInput {
                day: Some("Friday".to_string()),
                open_time: Some("10:00".to_string()),
                close_time: Some("14:00".to_string()),
            }]),
            ..Default::default()
        };

        assert!(update_clinic(patch, &mock_repo).await.is_ok());
    }

    #[ntex::test]
    async fn test_update_clinic_without_any_fields_is_invalid() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo.expect_clinic_exists().returning(|_| Ok(true));

        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);
        let patch = ClinicUpdate {
            id: 8,
            ..Default::default()
        };
        let result = update_clinic(patch, &mock_repo).await;

        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[ntex::test]
    async fn test_update_unknown_clinic_is_not_found() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_clinic_exists()
            .with(eq(99))
            .times(1)
            .returning(|_| Ok(false));

        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);
        let patch = ClinicUpdate {
            id: 99,
            name: Some("New Name".to_string()),
            ..Default::default()
        };
        let result = update_clinic(patch, &mock_repo).await;

        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[ntex::test]
    async fn test_delete_clinic_blocked_while_appointments_exist() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo.expect_clinic_exists().returning(|_| Ok(true));
        mock_repo
            .expect_clinic_has_appointments()
            .with(eq(8))
            .times(1)
            .returning(|_| Ok(true));
        // no delete expectation: a call would panic the test

        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);
        let result = delete_clinic(8, &mock_repo).await;

        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[ntex::test]
    async fn test_delete_clinic_without_appointments_cascades() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo.expect_clinic_exists().returning(|_| Ok(true));
        mock_repo
            .expect_clinic_has_appointments()
            .returning(|_| Ok(false));
        mock_repo
            .expect_delete_clinic()
            .with(eq(8))
            .times(1)
            .returning(|_| Ok(()));

        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);

        assert!(delete_clinic(8, &mock_repo).await.is_ok());
    }

    #[ntex::test]
    async fn test_get_clinic_nests_hours_and_services() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_clinic()
            .with(eq(8))
            .times(1)
            .returning(|id| Ok(Some(stored_clinic(id))));
        mock_repo.expect_get_clinic_hours().times(1).returning(|_| {
            Ok(vec![ClinicHour {
                day: "Monday".to_string(),
                open_time: "09:00".to_string(),
                close_time: "17:00".to_string(),
            }])
        });
        mock_repo
            .expect_get_clinic_services()
            .times(1)
            .returning(|_| Ok(vec![]));

        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);
        let clinic = get_clinic(8, &mock_repo).await.unwrap();

        assert!(clinic.hours.is_some_and(|hours| hours.len() == 1));
        assert!(clinic.services.is_some_and(|services| services.is_empty()));
    }
}
