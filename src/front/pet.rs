//! /pets endpoints.

use crate::{
    api,
    front::{AppState, errors, middleware::auth_token::AdminOnly},
    models,
};
use ntex::web;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct PetListQuery {
    pub id: Option<i64>,
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    pub id: Option<i64>,
}

#[web::get("")]
async fn list_pets(
    app_state: web::types::State<AppState>,
    query: web::types::Query<PetListQuery>,
) -> Result<impl web::Responder, web::Error> {
    if let Some(pet_id) = query.id {
        let pet = api::pet::get_pet(pet_id, &app_state.repo).await?;
        return Ok(web::HttpResponse::Ok().json(&json!({ "success": true, "data": pet })));
    }

    let pets = if let Some(category) = &query.category {
        api::pet::list_pets_by_category(category, &app_state.repo).await?
    } else {
        api::pet::list_pets(&app_state.repo).await?
    };

    Ok(web::HttpResponse::Ok().json(&json!({ "success": true, "data": pets })))
}

#[web::post("")]
async fn create_pet(
    _: AdminOnly,
    app_state: web::types::State<AppState>,
    body: web::types::Json<models::pet::NewPet>,
) -> Result<impl web::Responder, web::Error> {
    let pet_id = api::pet::create_pet(body.into_inner(), &app_state.repo).await?;

    Ok(web::HttpResponse::Ok().json(&json!({
        "success": true,
        "message": "Pet added successfully",
        "id": pet_id,
    })))
}

#[web::put("")]
async fn update_pet(
    _: AdminOnly,
    app_state: web::types::State<AppState>,
    body: web::types::Json<models::pet::PetUpdate>,
) -> Result<impl web::Responder, web::Error> {
    api::pet::update_pet(body.into_inner(), &app_state.repo).await?;

    Ok(web::HttpResponse::Ok().json(&json!({
        "success": true,
        "message": "Pet updated successfully",
    })))
}

#[web::delete("")]
async fn delete_pet(
    _: AdminOnly,
    app_state: web::types::State<AppState>,
    query: web::types::Query<DeleteQuery>,
) -> Result<impl web::Responder, web::Error> {
    let pet_id = query
        .id
        .ok_or_else(|| errors::ApiError::Validation("Pet ID is required".into()))?;

    api::pet::delete_pet(pet_id, &app_state.repo).await?;

    Ok(web::HttpResponse::Ok().json(&json!({
        "success": true,
        "message": "Pet deleted successfully",
    })))
}
