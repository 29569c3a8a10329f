//! /appointments endpoints.

use crate::{
    api,
    front::{AppState, errors, middleware::auth_token::AuthedUser},
    models,
};
use ntex::web;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct AppointmentListQuery {
    pub id: Option<i64>,
    pub pet_id: Option<i64>,
    pub clinic_id: Option<i64>,
    pub user_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    pub id: Option<i64>,
}

#[web::get("")]
async fn list_appointments(
    app_state: web::types::State<AppState>,
    query: web::types::Query<AppointmentListQuery>,
) -> Result<impl web::Responder, web::Error> {
    if let Some(appointment_id) = query.id {
        let appointment = api::appointment::get_appointment(appointment_id, &app_state.repo).await?;
        return Ok(web::HttpResponse::Ok().json(&json!({ "success": true, "data": appointment })));
    }

    let appointments = if let Some(pet_id) = query.pet_id {
        api::appointment::list_pet_appointments(pet_id, &app_state.repo).await?
    } else if let Some(clinic_id) = query.clinic_id {
        api::appointment::list_clinic_appointments(clinic_id, &app_state.repo).await?
    } else if let Some(user_id) = query.user_id {
        api::appointment::list_user_appointments(user_id, &app_state.repo).await?
    } else {
        api::appointment::list_appointments(&app_state.repo).await?
    };

    Ok(web::HttpResponse::Ok().json(&json!({ "success": true, "data": appointments })))
}

#[web::post("")]
async fn create_appointment(
    _: AuthedUser,
    app_state: web::types::State<AppState>,
    body: web::types::Json<models::appointment::NewAppointment>,
) -> Result<impl web::Responder, web::Error> {
    let appointment_id =
        api::appointment::create_appointment(body.into_inner(), &app_state.repo).await?;

    Ok(web::HttpResponse::Ok().json(&json!({
        "success": true,
        "message": "Appointment created successfully",
        "id": appointment_id,
    })))
}

#[web::put("")]
async fn update_appointment(
    _: AuthedUser,
    app_state: web::types::State<AppState>,
    body: web::types::Json<models::appointment::AppointmentUpdate>,
) -> Result<impl web::Responder, web::Error> {
    api::appointment::update_appointment(body.into_inner(), &app_state.repo).await?;

    Ok(web::HttpResponse::Ok().json(&json!({
        "success": true,
        "message": "Appointment updated successfully",
    })))
}

#[web::delete("")]
async fn delete_appointment(
    _: AuthedUser,
    app_state: web::types::State<AppState>,
    query: web::types::Query<DeleteQuery>,
) -> Result<impl web::Responder, web::Error> {
    let appointment_id = query
        .id
        .ok_or_else(|| errors::ApiError::Validation("Appointment ID is required".into()))?;

    api::appointment::delete_appointment(appointment_id, &app_state.repo).await?;

    Ok(web::HttpResponse::Ok().json(&json!({
        "success": true,
        "message": "Appointment deleted successfully",
    })))
}
