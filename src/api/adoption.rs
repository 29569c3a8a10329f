//! Adoption request lifecycle.
//!
//! A request starts `pending` and ends `approved` or `rejected`; both are
//! terminal. Approving a request is the one multi-row write in this module:
//! the pet flips to unavailable and every sibling pending request is
//! rejected in the same transaction as the status change.

use crate::{front::errors::ApiError, models, repo};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateAdoptionRequest {
    pub pet_id: i64,
    pub user_id: i64,
    pub reason: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAdoptionRequest {
    pub id: i64,
    pub status: String,
}

pub async fn list_requests(
    repo: &repo::ImplAppRepo,
) -> Result<Vec<models::adoption::AdoptionRequest>, ApiError> {
    Ok(repo.list_adoption_requests().await?)
}

pub async fn get_request(
    request_id: i64,
    repo: &repo::ImplAppRepo,
) -> Result<models::adoption::AdoptionRequest, ApiError> {
    repo.get_adoption_request(request_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Adoption request not found".into()))
}

pub async fn list_user_requests(
    user_id: i64,
    repo: &repo::ImplAppRepo,
) -> Result<Vec<models::adoption::AdoptionRequest>, ApiError> {
    Ok(repo.list_user_adoption_requests(user_id).await?)
}

pub async fn list_pet_requests(
    pet_id: i64,
    repo: &repo::ImplAppRepo,
) -> Result<Vec<models::adoption::AdoptionRequest>, ApiError> {
    Ok(repo.list_pet_adoption_requests(pet_id).await?)
}

/// Preconditions are checked in a fixed order, each with its own failure:
/// pet exists, pet available, requester exists, no pending request for the
/// same (pet, requester) pair. Only then is the row inserted.
pub async fn create_request(
    request: &CreateAdoptionRequest,
    repo: &repo::ImplAppRepo,
) -> Result<i64, ApiError> {
    if request.reason.trim().is_empty() {
        return Err(ApiError::Validation("Missing required fields".into()));
    }

    match repo.pet_availability(request.pet_id).await? {
        None => return Err(ApiError::NotFound("Pet not found".into())),
        Some(false) => {
            return Err(ApiError::Validation(
                "Pet is not available for adoption".into(),
            ));
        }
        Some(true) => {}
    }

    if !repo.user_exists(request.user_id).await? {
        return Err(ApiError::NotFound("User not found".into()));
    }

    if repo
        .has_pending_request(request.pet_id, request.user_id)
        .await?
    {
        return Err(ApiError::Conflict(
            "You already have a pending adoption request for this pet".into(),
        ));
    }

    Ok(repo
        .insert_adoption_request(request.pet_id, request.user_id, &request.reason)
        .await?)
}

/// Status update. A transition into `approved` (from any non-approved state)
/// runs the atomic approval transaction; every other change is a plain
/// single-row status write with no side effects.
pub async fn update_request(
    request: &UpdateAdoptionRequest,
    repo: &repo::ImplAppRepo,
) -> Result<(), ApiError> {
    let status: models::adoption::AdoptionStatus = request.status.parse().map_err(|_| {
        ApiError::Validation("Invalid status. Must be one of: pending, approved, rejected".into())
    })?;

    let (pet_id, current_status) = repo
        .get_adoption_summary(request.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Adoption request not found".into()))?;

    if status == models::adoption::AdoptionStatus::Approved
        && current_status != models::adoption::AdoptionStatus::Approved
    {
        repo.approve_adoption_request(request.id, pet_id).await?;
    } else {
        repo.set_adoption_status(request.id, status).await?;
    }

    Ok(())
}

pub async fn delete_request(request_id: i64, repo: &repo::ImplAppRepo) -> Result<(), ApiError> {
    Ok(repo.delete_adoption_request(request_id).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::adoption::AdoptionStatus;
    use crate::repo::MockAppRepo;
    use mockall::predicate::*;

    fn create_request_fixture() -> CreateAdoptionRequest {
        CreateAdoptionRequest {
            pet_id: 3,
            user_id: 7,
            reason: "big yard, lots of time".to_string(),
        }
    }

    #[ntex::test]
    async fn test_create_request_inserts_pending_row() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_pet_availability()
            .with(eq(3))
            .times(1)
            .returning(|_| Ok(Some(true)));
        mock_repo
            .expect_user_exists()
            .with(eq(7))
            .times(1)
            .returning(|_| Ok(true));
        mock_repo
            .expect_has_pending_request()
            .with(eq(3), eq(7))
            .times(1)
            .returning(|_, _| Ok(false));
        mock_repo
            .expect_insert_adoption_request()
            .with(eq(3), eq(7), eq("big yard, lots of time"))
            .times(1)
            .returning(|_, _, _| Ok(11));

        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);
        let result = create_request(&create_request_fixture(), &mock_repo).await;

        assert!(result.is_ok_and(|id| id == 11));
    }

    #[ntex::test]
    async fn test_create_request_unknown_pet_is_not_found() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_pet_availability()
            .with(eq(3))
            .times(1)
            .returning(|_| Ok(None));

        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);
        let result = create_request(&create_request_fixture(), &mock_repo).await;

        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[ntex::test]
    async fn test_create_request_unavailable_pet_is_rejected() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_pet_availability()
            .with(eq(3))
            .times(1)
            .returning(|_| Ok(Some(false)));

        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);
        let result = create_request(&create_request_fixture(), &mock_repo).await;

        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[ntex::test]
    async fn test_create_request_duplicate_pending_conflicts_without_insert() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_pet_availability()
            .returning(|_| Ok(Some(true)));
        mock_repo.expect_user_exists().returning(|_| Ok(true));
        mock_repo
            .expect_has_pending_request()
            .with(eq(3), eq(7))
            .times(1)
            .returning(|_, _| Ok(true));
        // no insert expectation: a call would panic the test

        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);
        let result = create_request(&create_request_fixture(), &mock_repo).await;

        assert!(matches!(result, Err(ApiError::Conflict(_))));
    }

    #[ntex::test]
    async fn test_create_request_blank_reason_is_invalid() {
        let mock_repo: repo::ImplAppRepo = Box::new(MockAppRepo::new());

        let request = CreateAdoptionRequest {
            reason: "   ".to_string(),
            ..create_request_fixture()
        };
        let result = create_request(&request, &mock_repo).await;

        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[ntex::test]
    async fn test_approving_pending_request_runs_approval_transaction() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_adoption_summary()
            .with(eq(5))
            .times(1)
            .returning(|_| Ok(Some((3, AdoptionStatus::Pending))));
        mock_repo
            .expect_approve_adoption_request()
            .with(eq(5), eq(3))
            .times(1)
            .returning(|_, _| Ok(()));

        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);
        let request = UpdateAdoptionRequest {
            id: 5,
            status: "approved".to_string(),
        };

        assert!(update_request(&request, &mock_repo).await.is_ok());
    }

    #[ntex::test]
    async fn test_reapproving_approved_request_is_a_plain_update() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_adoption_summary()
            .with(eq(5))
            .times(1)
            .returning(|_| Ok(Some((3, AdoptionStatus::Approved))));
        mock_repo
            .expect_set_adoption_status()
            .with(eq(5), eq(AdoptionStatus::Approved))
            .times(1)
            .returning(|_, _| Ok(()));

        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);
        let request = UpdateAdoptionRequest {
            id: 5,
            status: "approved".to_string(),
        };

        assert!(update_request(&request, &mock_repo).await.is_ok());
    }

    #[ntex::test]
    async fn test_rejecting_request_has_no_side_effects() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_adoption_summary()
            .with(eq(5))
            .times(1)
            .returning(|_| Ok(Some((3, AdoptionStatus::Pending))));
        mock_repo
            .expect_set_adoption_status()
            .with(eq(5), eq(AdoptionStatus::Rejected))
            .times(1)
            .returning(|_, _| Ok(()));

        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);
        let request = UpdateAdoptionRequest {
            id: 5,
            status: "rejected".to_string(),
        };

        assert!(update_request(&request, &mock_repo).await.is_ok());
    }

    #[ntex::test]
    async fn test_update_with_unknown_status_value_is_invalid() {
        let mock_repo: repo::ImplAppRepo = Box::new(MockAppRepo::new());

        let request = UpdateAdoptionRequest {
            id: 5,
            status: "adopted".to_string(),
        };
        let result = update_request(&request, &mock_repo).await;

        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[ntex::test]
    async fn test_update_with_unknown_id_writes_nothing() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_adoption_summary()
            .with(eq(99))
            .times(1)
            .returning(|_| Ok(None));

        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);
        let request = UpdateAdoptionRequest {
            id: 99,
            status: "approved".to_string(),
        };
        let result = update_request(&request, &mock_repo).await;

        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[ntex::test]
    async fn test_delete_request_is_unconditional() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_delete_adoption_request()
            .with(eq(5))
            .times(1)
            .returning(|_| Ok(()));

        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);

        assert!(delete_request(5, &mock_repo).await.is_ok());
    }
}
