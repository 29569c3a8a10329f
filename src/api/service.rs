//! Clinic services as a standalone resource.
//!
//! A service name is unique within its clinic, and a service referenced by
//! any appointment cannot be deleted.

use crate::{front::errors::ApiError, models, repo};
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct NewServiceRequest {
    pub clinic_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
}

pub async fn list_services(
    repo: &repo::ImplAppRepo,
) -> Result<Vec<models::clinic::ClinicService>, ApiError> {
    Ok(repo.list_services().await?)
}

pub async fn list_clinic_services(
    clinic_id: i64,
    repo: &repo::ImplAppRepo,
) -> Result<Vec<models::clinic::ClinicService>, ApiError> {
    if !repo.clinic_exists(clinic_id).await? {
        return Err(ApiError::NotFound("Clinic not found".into()));
    }

    Ok(repo.get_clinic_services(clinic_id).await?)
}

pub async fn get_service(
    service_id: i64,
    repo: &repo::ImplAppRepo,
) -> Result<models::clinic::ClinicService, ApiError> {
    repo.get_service(service_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Service not found".into()))
}

pub async fn create_service(
    request: &NewServiceRequest,
    repo: &repo::ImplAppRepo,
) -> Result<i64, ApiError> {
    if request.name.trim().is_empty() {
        return Err(ApiError::Validation(
            "Clinic ID, name, and price are required".into(),
        ));
    }

    if !repo.clinic_exists(request.clinic_id).await? {
        return Err(ApiError::NotFound("Clinic not found".into()));
    }

    if repo
        .service_name_taken(request.clinic_id, &request.name, None)
        .await?
    {
        return Err(ApiError::Conflict(
            "Service with this name already exists for this clinic".into(),
        ));
    }

    Ok(repo
        .insert_service(
            request.clinic_id,
            &request.name,
            request.description.clone(),
            request.price,
        )
        .await?)
}

pub async fn update_service(
    patch: models::clinic::ServiceUpdate,
    repo: &repo::ImplAppRepo,
) -> Result<(), ApiError> {
    if !patch.has_updates() {
        return Err(ApiError::Validation("No fields to update".into()));
    }

    let current_clinic = repo
        .get_service_clinic(patch.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Service not found".into()))?;

    // moving the service re-validates the destination clinic
    if let Some(clinic_id) = patch.clinic_id {
        if clinic_id != current_clinic && !repo.clinic_exists(clinic_id).await? {
            return Err(ApiError::NotFound("Clinic not found".into()));
        }
    }

    if let Some(name) = &patch.name {
        let effective_clinic = patch.clinic_id.unwrap_or(current_clinic);
        if repo
            .service_name_taken(effective_clinic, name, Some(patch.id))
            .await?
        {
            return Err(ApiError::Conflict(
                "Service with this name already exists for this clinic".into(),
            ));
        }
    }

    Ok(repo.update_service(patch).await?)
}

pub async fn delete_service(service_id: i64, repo: &repo::ImplAppRepo) -> Result<(), ApiError> {
    if repo.get_service_clinic(service_id).await?.is_none() {
        return Err(ApiError::NotFound("Service not found".into()));
    }

    if repo.service_in_use(service_id).await? {
        return Err(ApiError::Conflict(
            "Cannot delete service because it is used in one or more appointments".into(),
        ));
    }

    Ok(repo.delete_service(service_id).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::clinic::ServiceUpdate;
    use crate::repo::MockAppRepo;
    use mockall::predicate::*;

    #[ntex::test]
    async fn test_create_service_duplicate_name_in_clinic_conflicts() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo.expect_clinic_exists().returning(|_| Ok(true));
        mock_repo
            .expect_service_name_taken()
            .with(eq(2), eq("Checkup"), eq(None))
            .times(1)
            .returning(|_, _, _| Ok(true));
        // no insert expectation: a call would panic the test

        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);
        let request = NewServiceRequest {
            clinic_id: 2,
            name: "Checkup".to_string(),
            description: None,
            price: Decimal::new(2500, 2),
        };
        let result = create_service(&request, &mock_repo).await;

        assert!(matches!(result, Err(ApiError::Conflict(_))));
    }

    #[ntex::test]
    async fn test_update_service_move_validates_destination_clinic() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_service_clinic()
            .with(eq(4))
            .times(1)
            .returning(|_| Ok(Some(2)));
        mock_repo
            .expect_clinic_exists()
            .with(eq(9))
            .times(1)
            .returning(|_| Ok(false));

        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);
        let patch = ServiceUpdate {
            id: 4,
            clinic_id: Some(9),
            ..Default::default()
        };
        let result = update_service(patch, &mock_repo).await;

        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[ntex::test]
    async fn test_delete_service_in_use_conflicts() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_service_clinic()
            .returning(|_| Ok(Some(2)));
        mock_repo
            .expect_service_in_use()
            .with(eq(4))
            .times(1)
            .returning(|_| Ok(true));
        // no delete expectation: a call would panic the test

        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);
        let result = delete_service(4, &mock_repo).await;

        assert!(matches!(result, Err(ApiError::Conflict(_))));
    }

    #[ntex::test]
    async fn test_delete_unused_service_succeeds() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_service_clinic()
            .returning(|_| Ok(Some(2)));
        mock_repo.expect_service_in_use().returning(|_| Ok(false));
        mock_repo
            .expect_delete_service()
            .with(eq(4))
            .times(1)
            .returning(|_| Ok(()));

        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);

        assert!(delete_service(4, &mock_repo).await.is_ok());
    }
}
