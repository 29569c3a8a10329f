//! User accounts, registration and session-token login.
//!
//! Passwords are stored as argon2 hashes and never returned in any payload.
//! Login issues a server-side session token verified on every mutating
//! request; the administrative account is a seeded row in the same store,
//! not an in-code special case.

use crate::{config, front::errors::ApiError, models, repo, utils};
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: models::user::User,
    pub token: String,
}

pub async fn register(
    request: &RegisterRequest,
    repo: &repo::ImplAppRepo,
) -> Result<models::user::User, ApiError> {
    let required = [&request.name, &request.email, &request.password];
    if required.iter().any(|field| field.trim().is_empty()) {
        return Err(ApiError::Validation(
            "Name, email and password are required".into(),
        ));
    }

    if repo.user_email_taken(&request.email, None).await? {
        return Err(ApiError::Conflict("Email already exists".into()));
    }

    let password_hash = utils::hash_password(&request.password)?;
    let user_id = repo
        .insert_user(models::user::NewUser {
            name: request.name.clone(),
            email: request.email.clone(),
            password_hash,
            phone: request.phone.clone(),
            role: models::user::Role::User,
        })
        .await?;

    repo.get_user_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::Storage("registered user could not be read back".into()))
}

/// Credential check plus session issuance. The response user object carries
/// no credential material.
pub async fn login(
    request: &LoginRequest,
    repo: &repo::ImplAppRepo,
) -> Result<LoginResponse, ApiError> {
    if request.email.trim().is_empty() || request.password.trim().is_empty() {
        return Err(ApiError::Validation("Email and password are required".into()));
    }

    let record = repo.get_user_record_by_email(&request.email).await?;

    match record {
        Some(record) if utils::verify_password(&request.password, &record.password_hash) => {
            let token = Uuid::new_v4().to_string();
            let expires_at =
                Utc::now() + Duration::hours(config::APP_CONFIG.session_ttl_hours);

            repo.insert_session(&token, record.user.id, expires_at)
                .await?;

            Ok(LoginResponse {
                user: record.user,
                token,
            })
        }
        _ => Err(ApiError::Unauthorized("Invalid credentials".into())),
    }
}

pub async fn logout(token: &str, repo: &repo::ImplAppRepo) -> Result<(), ApiError> {
    Ok(repo.delete_session(token).await?)
}

pub async fn list_users(repo: &repo::ImplAppRepo) -> Result<Vec<models::user::User>, ApiError> {
    Ok(repo.list_users().await?)
}

pub async fn get_user(
    user_id: i64,
    repo: &repo::ImplAppRepo,
) -> Result<models::user::User, ApiError> {
    repo.get_user_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".into()))
}

pub async fn update_user(
    request: models::user::UserUpdate,
    repo: &repo::ImplAppRepo,
) -> Result<(), ApiError> {
    if !request.has_updates() {
        return Err(ApiError::Validation("No fields to update".into()));
    }

    if let Some(email) = &request.email {
        if repo.user_email_taken(email, Some(request.id)).await? {
            return Err(ApiError::Conflict("Email already exists".into()));
        }
    }

    let password_hash = match &request.password {
        Some(password) => Some(utils::hash_password(password)?),
        None => None,
    };

    let patch = models::user::UserPatch {
        name: request.name,
        email: request.email,
        password_hash,
        phone: request.phone,
        role: request.role,
    };

    Ok(repo.update_user(request.id, patch).await?)
}

pub async fn delete_user(user_id: i64, repo: &repo::ImplAppRepo) -> Result<(), ApiError> {
    Ok(repo.delete_user(user_id).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::{Role, User, UserRecord, UserUpdate};
    use crate::repo::MockAppRepo;
    use mockall::predicate::*;

    fn test_user(id: i64, email: &str) -> User {
        User {
            id,
            name: "Jane".to_string(),
            email: email.to_string(),
            phone: None,
            role: Role::User,
            created_at: Utc::now(),
        }
    }

    #[ntex::test]
    async fn test_register_hashes_password_before_insert() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_user_email_taken()
            .with(eq("jane@x.com"), eq(None))
            .times(1)
            .returning(|_, _| Ok(false));
        mock_repo
            .expect_insert_user()
            .withf(|user| {
                user.email == "jane@x.com"
                    && user.role == Role::User
                    && user.password_hash != "secret1"
                    && user.password_hash.starts_with("$argon2")
            })
            .times(1)
            .returning(|_| Ok(42));
        mock_repo
            .expect_get_user_by_id()
            .with(eq(42))
            .times(1)
            .returning(|id| Ok(Some(test_user(id, "jane@x.com"))));

        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);
        let request = RegisterRequest {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            password: "secret1".to_string(),
            phone: None,
        };
        let result = register(&request, &mock_repo).await;

        assert!(result.is_ok_and(|user| user.id == 42 && user.email == "jane@x.com"));
    }

    #[ntex::test]
    async fn test_register_duplicate_email_conflicts_without_insert() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_user_email_taken()
            .times(1)
            .returning(|_, _| Ok(true));
        // no insert expectation: a call would panic the test

        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);
        let request = RegisterRequest {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            password: "secret1".to_string(),
            phone: None,
        };
        let result = register(&request, &mock_repo).await;

        assert!(matches!(result, Err(ApiError::Conflict(_))));
    }

    #[ntex::test]
    async fn test_register_missing_fields_is_invalid() {
        let mock_repo: repo::ImplAppRepo = Box::new(MockAppRepo::new());

        let request = RegisterRequest {
            name: "Jane".to_string(),
            email: "".to_string(),
            password: "secret1".to_string(),
            phone: None,
        };
        let result = register(&request, &mock_repo).await;

        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[ntex::test]
    async fn test_login_issues_session_token() {
        let password_hash = utils::hash_password("secret1").unwrap();

        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_user_record_by_email()
            .with(eq("jane@x.com"))
            .times(1)
            .returning(move |_| {
                Ok(Some(UserRecord {
                    user: test_user(42, "jane@x.com"),
                    password_hash: password_hash.clone(),
                }))
            });
        mock_repo
            .expect_insert_session()
            .withf(|token, user_id, expires_at| {
                !token.is_empty() && *user_id == 42 && *expires_at > Utc::now()
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);
        let request = LoginRequest {
            email: "jane@x.com".to_string(),
            password: "secret1".to_string(),
        };
        let result = login(&request, &mock_repo).await.unwrap();

        assert_eq!(result.user.id, 42);
        assert!(!result.token.is_empty());
    }

    #[ntex::test]
    async fn test_login_wrong_password_is_unauthorized() {
        let password_hash = utils::hash_password("secret1").unwrap();

        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_user_record_by_email()
            .times(1)
            .returning(move |_| {
                Ok(Some(UserRecord {
                    user: test_user(42, "jane@x.com"),
                    password_hash: password_hash.clone(),
                }))
            });

        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);
        let request = LoginRequest {
            email: "jane@x.com".to_string(),
            password: "wrong".to_string(),
        };
        let result = login(&request, &mock_repo).await;

        assert!(matches!(result, Err(ApiError::Unauthorized(_))));
    }

    #[ntex::test]
    async fn test_login_unknown_email_is_unauthorized() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_user_record_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);
        let request = LoginRequest {
            email: "ghost@x.com".to_string(),
            password: "secret1".to_string(),
        };
        let result = login(&request, &mock_repo).await;

        assert!(matches!(result, Err(ApiError::Unauthorized(_))));
    }

    #[ntex::test]
    async fn test_update_user_rehashes_new_password() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_update_user()
            .withf(|user_id, patch| {
                *user_id == 42
                    && patch
                        .password_hash
                        .as_ref()
                        .is_some_and(|hash| hash.starts_with("$argon2"))
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);
        let request = UserUpdate {
            id: 42,
            password: Some("new-secret".to_string()),
            ..Default::default()
        };

        assert!(update_user(request, &mock_repo).await.is_ok());
    }

    #[ntex::test]
    async fn test_update_user_taken_email_conflicts() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_user_email_taken()
            .with(eq("other@x.com"), eq(Some(42)))
            .times(1)
            .returning(|_, _| Ok(true));

        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);
        let request = UserUpdate {
            id: 42,
            email: Some("other@x.com".to_string()),
            ..Default::default()
        };
        let result = update_user(request, &mock_repo).await;

        assert!(matches!(result, Err(ApiError::Conflict(_))));
    }

    #[ntex::test]
    async fn test_update_user_without_fields_is_invalid() {
        let mock_repo: repo::ImplAppRepo = Box::new(MockAppRepo::new());

        let request = UserUpdate {
            id: 42,
            ..Default::default()
        };
        let result = update_user(request, &mock_repo).await;

        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[ntex::test]
    async fn test_logout_deletes_the_presented_token() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_delete_session()
            .with(eq("token-123"))
            .times(1)
            .returning(|_| Ok(()));

        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);

        assert!(logout("token-123", &mock_repo).await.is_ok());
    }
}
