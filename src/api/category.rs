//! Pet category CRUD.

use crate::{front::errors::ApiError, models, repo};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CategoryRequest {
    pub name: String,
    pub description: Option<String>,
}

pub async fn list_categories(
    repo: &repo::ImplAppRepo,
) -> Result<Vec<models::pet::Category>, ApiError> {
    Ok(repo.list_categories().await?)
}

pub async fn get_category(
    category_id: i64,
    repo: &repo::ImplAppRepo,
) -> Result<models::pet::Category, ApiError> {
    repo.get_category(category_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Category not found".into()))
}

pub async fn create_category(
    request: &CategoryRequest,
    repo: &repo::ImplAppRepo,
) -> Result<i64, ApiError> {
    if request.name.trim().is_empty() {
        return Err(ApiError::Validation("Category name is required".into()));
    }

    if repo.category_name_taken(&request.name, None).await? {
        return Err(ApiError::Conflict("Category already exists".into()));
    }

    Ok(repo
        .insert_category(&request.name, request.description.clone())
        .await?)
}

pub async fn update_category(
    patch: models::pet::CategoryUpdate,
    repo: &repo::ImplAppRepo,
) -> Result<(), ApiError> {
    if !patch.has_updates() {
        return Err(ApiError::Validation("No fields to update".into()));
    }

    if let Some(name) = &patch.name {
        if repo.category_name_taken(name, Some(patch.id)).await? {
            return Err(ApiError::Conflict(
                "Another category with this name already exists".into(),
            ));
        }
    }

    Ok(repo.update_category(patch).await?)
}

/// Deletion is blocked while any pet still references the category.
pub async fn delete_category(category_id: i64, repo: &repo::ImplAppRepo) -> Result<(), ApiError> {
    if repo.category_pet_count(category_id).await? > 0 {
        return Err(ApiError::Validation(
            "Cannot delete category with pets. Remove or reassign pets first.".into(),
        ));
    }

    Ok(repo.delete_category(category_id).await?)
}
