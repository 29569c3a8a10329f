//! Pet catalog CRUD.
//!
//! `is_available` starts true and is only ever cleared by the adoption
//! approval transaction or an explicit admin update.

use crate::{front::errors::ApiError, models, repo};

pub async fn list_pets(repo: &repo::ImplAppRepo) -> Result<Vec<models::pet::Pet>, ApiError> {
    Ok(repo.list_pets().await?)
}

pub async fn list_pets_by_category(
    category_name: &str,
    repo: &repo::ImplAppRepo,
) -> Result<Vec<models::pet::Pet>, ApiError> {
    Ok(repo.list_pets_by_category(category_name).await?)
}

pub async fn get_pet(pet_id: i64, repo: &repo::ImplAppRepo) -> Result<models::pet::Pet, ApiError> {
    repo.get_pet(pet_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Pet not found".into()))
}

pub async fn create_pet(
    pet: models::pet::NewPet,
    repo: &repo::ImplAppRepo,
) -> Result<i64, ApiError> {
    if pet.name.trim().is_empty() || pet.gender.trim().is_empty() {
        return Err(ApiError::Validation("Missing required fields".into()));
    }

    Ok(repo.insert_pet(pet).await?)
}

pub async fn update_pet(
    patch: models::pet::PetUpdate,
    repo: &repo::ImplAppRepo,
) -> Result<(), ApiError> {
    if !patch.has_updates() {
        return Err(ApiError::Validation("No fields to update".into()));
    }

    Ok(repo.update_pet(patch).await?)
}

pub async fn delete_pet(pet_id: i64, repo: &repo::ImplAppRepo) -> Result<(), ApiError> {
    Ok(repo.delete_pet(pet_id).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::MockAppRepo;
    use mockall::predicate::*;

    fn new_pet_fixture() -> models::pet::NewPet {
        models::pet::NewPet {
            name: "Rex".to_string(),
            category_id: 1,
            breed: Some("Beagle".to_string()),
            age: Some(3),
            gender: "male".to_string(),
            size: None,
            color: None,
            description: None,
            medical_history: None,
            is_available: true,
            image_url: None,
            owner_id: None,
        }
    }

    #[ntex::test]
    async fn test_create_pet_defaults_to_available() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_insert_pet()
            .withf(|pet| pet.name == "Rex" && pet.is_available)
            .times(1)
            .returning(|_| Ok(3));

        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);
        let result = create_pet(new_pet_fixture(), &mock_repo).await;

        assert!(result.is_ok_and(|id| id == 3));
    }

    #[ntex::test]
    async fn test_create_pet_missing_name_is_invalid() {
        let mock_repo: repo::ImplAppRepo = Box::new(MockAppRepo::new());

        let pet = models::pet::NewPet {
            name: " ".to_string(),
            ..new_pet_fixture()
        };
        let result = create_pet(pet, &mock_repo).await;

        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[ntex::test]
    async fn test_update_pet_without_fields_is_invalid() {
        let mock_repo: repo::ImplAppRepo = Box::new(MockAppRepo::new());

        let patch = models::pet::PetUpdate {
            id: 3,
            ..Default::default()
        };
        let result = update_pet(patch, &mock_repo).await;

        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[ntex::test]
    async fn test_get_missing_pet_is_not_found() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_pet()
            .with(eq(99))
            .times(1)
            .returning(|_| Ok(None));

        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);
        let result = get_pet(99, &mock_repo).await;

        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }
}
