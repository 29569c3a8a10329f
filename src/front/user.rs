//! /users endpoints: registration and login via the `action` query flag,
//! plus admin-scoped account management.

use crate::{
    api,
    front::{
        AppState, errors,
        middleware::auth_token::{AdminOnly, BearerToken},
    },
    models,
};
use ntex::web;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct UserListQuery {
    pub id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct ActionQuery {
    pub action: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    pub id: Option<i64>,
}

#[web::get("")]
async fn list_users(
    _: AdminOnly,
    app_state: web::types::State<AppState>,
    query: web::types::Query<UserListQuery>,
) -> Result<impl web::Responder, web::Error> {
    if let Some(user_id) = query.id {
        let user = api::user::get_user(user_id, &app_state.repo).await?;
        return Ok(web::HttpResponse::Ok().json(&json!({ "success": true, "data": user })));
    }

    let users = api::user::list_users(&app_state.repo).await?;
    Ok(web::HttpResponse::Ok().json(&json!({ "success": true, "data": users })))
}

#[web::post("")]
async fn register_or_login(
    app_state: web::types::State<AppState>,
    query: web::types::Query<ActionQuery>,
    body: web::types::Json<serde_json::Value>,
) -> Result<impl web::Responder, web::Error> {
    match query.action.as_deref() {
        Some("register") => {
            let request: api::user::RegisterRequest =
                serde_json::from_value(body.into_inner())
                    .map_err(|e| errors::ApiError::Validation(e.to_string()))?;

            let user = api::user::register(&request, &app_state.repo).await?;

            Ok(web::HttpResponse::Ok().json(&json!({
                "success": true,
                "message": "Registration successful",
                "user": user,
            })))
        }
        Some("login") => {
            let request: api::user::LoginRequest = serde_json::from_value(body.into_inner())
                .map_err(|e| errors::ApiError::Validation(e.to_string()))?;

            let login = api::user::login(&request, &app_state.repo).await?;

            Ok(web::HttpResponse::Ok().json(&json!({
                "success": true,
                "message": "Login successful",
                "user": login.user,
                "token": login.token,
            })))
        }
        _ => Err(errors::ApiError::Validation(
            "Unknown action. Use ?action=register or ?action=login".into(),
        )
        .into()),
    }
}

#[web::post("/logout")]
async fn logout(
    BearerToken(token): BearerToken,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    api::user::logout(&token, &app_state.repo).await?;

    Ok(web::HttpResponse::Ok().json(&json!({
        "success": true,
        "message": "Logged out successfully",
    })))
}

#[web::put("")]
async fn update_user(
    _: AdminOnly,
    app_state: web::types::State<AppState>,
    body: web::types::Json<models::user::UserUpdate>,
) -> Result<impl web::Responder, web::Error> {
    api::user::update_user(body.into_inner(), &app_state.repo).await?;

    Ok(web::HttpResponse::Ok().json(&json!({
        "success": true,
        "message": "User updated successfully",
    })))
}

#[web::delete("")]
async fn delete_user(
    _: AdminOnly,
    app_state: web::types::State<AppState>,
    query: web::types::Query<DeleteQuery>,
) -> Result<impl web::Responder, web::Error> {
    let user_id = query
        .id
        .ok_or_else(|| errors::ApiError::Validation("User ID is required".into()))?;

    api::user::delete_user(user_id, &app_state.repo).await?;

    Ok(web::HttpResponse::Ok().json(&json!({
        "success": true,
        "message": "User deleted successfully",
    })))
}
