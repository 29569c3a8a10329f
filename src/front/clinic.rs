//! /clinics endpoints.

use crate::{
    api,
    front::{AppState, errors, middleware::auth_token::AdminOnly},
    models,
};
use ntex::web;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct ClinicListQuery {
    pub id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    pub id: Option<i64>,
}

#[web::get("")]
async fn list_clinics(
    app_state: web::types::State<AppState>,
    query: web::types::Query<ClinicListQuery>,
) -> Result<impl web::Responder, web::Error> {
    if let Some(clinic_id) = query.id {
        let clinic = api::clinic::get_clinic(clinic_id, &app_state.repo).await?;
        return Ok(web::HttpResponse::Ok().json(&json!({ "success": true, "data": clinic })));
    }

    let clinics = api::clinic::list_clinics(&app_state.repo).await?;
    Ok(web::HttpResponse::Ok().json(&json!({ "success": true, "data": clinics })))
}

#[web::post("")]
async fn create_clinic(
    _: AdminOnly,
    app_state: web::types::State<AppState>,
    body: web::types::Json<models::clinic::NewClinic>,
) -> Result<impl web::Responder, web::Error> {
    let clinic_id = api::clinic::create_clinic(body.into_inner(), &app_state.repo).await?;

    Ok(web::HttpResponse::Ok().json(&json!({
        "success": true,
        "message": "Clinic created successfully",
        "id": clinic_id,
    })))
}

#[web::put("")]
async fn update_clinic(
    _: AdminOnly,
    app_state: web::types::State<AppState>,
    body: web::types::Json<models::clinic::ClinicUpdate>,
) -> Result<impl web::Responder, web::Error> {
    api::clinic::update_clinic(body.into_inner(), &app_state.repo).await?;

    Ok(web::HttpResponse::Ok().json(&json!({
        "success": true,
        "message": "Clinic updated successfully",
    })))
}

#[web::delete("")]
async fn delete_clinic(
    _: AdminOnly,
    app_state: web::types::State<AppState>,
    query: web::types::Query<DeleteQuery>,
) -> Result<impl web::Responder, web::Error> {
    let clinic_id = query
        .id
        .ok_or_else(|| errors::ApiError::Validation("Clinic ID is required".into()))?;

    api::clinic::delete_clinic(clinic_id, &app_state.repo).await?;

    Ok(web::HttpResponse::Ok().json(&json!({
        "success": true,
        "message": "Clinic deleted successfully",
    })))
}
