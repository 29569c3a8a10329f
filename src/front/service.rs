//! /services endpoints (clinic services as a standalone resource).

use crate::{
    api,
    front::{AppState, errors, middleware::auth_token::AdminOnly},
    models,
};
use ntex::web;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct ServiceListQuery {
    pub id: Option<i64>,
    pub clinic_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    pub id: Option<i64>,
}

#[web::get("")]
async fn list_services(
    app_state: web::types::State<AppState>,
    query: web::types::Query<ServiceListQuery>,
) -> Result<impl web::Responder, web::Error> {
    if let Some(service_id) = query.id {
        let service = api::service::get_service(service_id, &app_state.repo).await?;
        return Ok(web::HttpResponse::Ok().json(&json!({ "success": true, "data": service })));
    }

    let services = if let Some(clinic_id) = query.clinic_id {
        api::service::list_clinic_services(clinic_id, &app_state.repo).await?
    } else {
        api::service::list_services(&app_state.repo).await?
    };

    Ok(web::HttpResponse::Ok().json(&json!({ "success": true, "data": services })))
}

#[web::post("")]
async fn create_service(
    _: AdminOnly,
    app_state: web::types::State<AppState>,
    body: web::types::Json<api::service::NewServiceRequest>,
) -> Result<impl web::Responder, web::Error> {
    let service_id = api::service::create_service(&body, &app_state.repo).await?;

    Ok(web::HttpResponse::Ok().json(&json!({
        "success": true,
        "message": "Service created successfully",
        "id": service_id,
    })))
}

#[web::put("")]
async fn update_service(
    _: AdminOnly,
    app_state: web::types::State<AppState>,
    body: web::types::Json<models::clinic::ServiceUpdate>,
) -> Result<impl web::Responder, web::Error> {
    api::service::update_service(body.into_inner(), &app_state.repo).await?;

    Ok(web::HttpResponse::Ok().json(&json!({
        "success": true,
        "message": "Service updated successfully",
    })))
}

#[web::delete("")]
async fn delete_service(
    _: AdminOnly,
    app_state: web::types::State<AppState>,
    query: web::types::Query<DeleteQuery>,
) -> Result<impl web::Responder, web::Error> {
    let service_id = query
        .id
        .ok_or_else(|| errors::ApiError::Validation("Service ID is required".into()))?;

    api::service::delete_service(service_id, &app_state.repo).await?;

    Ok(web::HttpResponse::Ok().json(&json!({
        "success": true,
        "message": "Service deleted successfully",
    })))
}
