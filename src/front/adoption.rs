//! /adoptions endpoints.

use crate::{
    api,
    front::{
        AppState, errors,
        middleware::auth_token::{AdminOnly, AuthedUser},
    },
};
use ntex::web;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct AdoptionListQuery {
    pub id: Option<i64>,
    pub user_id: Option<i64>,
    pub pet_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    pub id: Option<i64>,
}

#[web::get("")]
async fn list_adoptions(
    app_state: web::types::State<AppState>,
    query: web::types::Query<AdoptionListQuery>,
) -> Result<impl web::Responder, web::Error> {
    if let Some(request_id) = query.id {
        let request = api::adoption::get_request(request_id, &app_state.repo).await?;
        return Ok(web::HttpResponse::Ok().json(&json!({ "success": true, "data": request })));
    }

    let requests = if let Some(user_id) = query.user_id {
        api::adoption::list_user_requests(user_id, &app_state.repo).await?
    } else if let Some(pet_id) = query.pet_id {
        api::adoption::list_pet_requests(pet_id, &app_state.repo).await?
    } else {
        api::adoption::list_requests(&app_state.repo).await?
    };

    Ok(web::HttpResponse::Ok().json(&json!({ "success": true, "data": requests })))
}

#[web::post("")]
async fn create_adoption(
    AuthedUser(user): AuthedUser,
    app_state: web::types::State<AppState>,
    body: web::types::Json<api::adoption::CreateAdoptionRequest>,
) -> Result<impl web::Responder, web::Error> {
    // the requester id must belong to the presented session
    if body.user_id != user.id && !user.is_admin() {
        return Err(errors::ApiError::Unauthorized(
            "Cannot submit an adoption request for another user".into(),
        )
        .into());
    }

    let request_id = api::adoption::create_request(&body, &app_state.repo).await?;

    Ok(web::HttpResponse::Ok().json(&json!({
        "success": true,
        "message": "Adoption request submitted successfully",
        "id": request_id,
    })))
}

#[web::put("")]
async fn update_adoption(
    AdminOnly(admin): AdminOnly,
    app_state: web::types::State<AppState>,
    body: web::types::Json<api::adoption::UpdateAdoptionRequest>,
) -> Result<impl web::Responder, web::Error> {
    api::adoption::update_request(&body, &app_state.repo).await?;

    log::info!(
        "adoption request {} set to {} by {}",
        body.id,
        body.status,
        admin.email
    );

    let message = if body.status == "approved" {
        "Adoption request approved successfully"
    } else {
        "Adoption request updated successfully"
    };

    Ok(web::HttpResponse::Ok().json(&json!({ "success": true, "message": message })))
}

#[web::delete("")]
async fn delete_adoption(
    _: AdminOnly,
    app_state: web::types::State<AppState>,
    query: web::types::Query<DeleteQuery>,
) -> Result<impl web::Responder, web::Error> {
    let request_id = query
        .id
        .ok_or_else(|| errors::ApiError::Validation("Adoption request ID is required".into()))?;

    api::adoption::delete_request(request_id, &app_state.repo).await?;

    Ok(web::HttpResponse::Ok().json(&json!({
        "success": true,
        "message": "Adoption request deleted successfully",
    })))
}
