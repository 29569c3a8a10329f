//! /categories endpoints.

use crate::{
    api,
    front::{AppState, errors, middleware::auth_token::AdminOnly},
    models,
};
use ntex::web;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct CategoryListQuery {
    pub id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    pub id: Option<i64>,
}

#[web::get("")]
async fn list_categories(
    app_state: web::types::State<AppState>,
    query: web::types::Query<CategoryListQuery>,
) -> Result<impl web::Responder, web::Error> {
    if let Some(category_id) = query.id {
        let category = api::category::get_category(category_id, &app_state.repo).await?;
        return Ok(web::HttpResponse::Ok().json(&json!({ "success": true, "data": category })));
    }

    let categories = api::category::list_categories(&app_state.repo).await?;
    Ok(web::HttpResponse::Ok().json(&json!({ "success": true, "data": categories })))
}

#[web::post("")]
async fn create_category(
    _: AdminOnly,
    app_state: web::types::State<AppState>,
    body: web::types::Json<api::category::CategoryRequest>,
) -> Result<impl web::Responder, web::Error> {
    let category_id = api::category::create_category(&body, &app_state.repo).await?;

    Ok(web::HttpResponse::Ok().json(&json!({
        "success": true,
        "message": "Category added successfully",
        "id": category_id,
    })))
}

#[web::put("")]
async fn update_category(
    _: AdminOnly,
    app_state: web::types::State<AppState>,
    body: web::types::Json<models::pet::CategoryUpdate>,
) -> Result<impl web::Responder, web::Error> {
    api::category::update_category(body.into_inner(), &app_state.repo).await?;

    Ok(web::HttpResponse::Ok().json(&json!({
        "success": true,
        "message": "Category updated successfully",
    })))
}

#[web::delete("")]
async fn delete_category(
    _: AdminOnly,
    app_state: web::types::State<AppState>,
    query: web::types::Query<DeleteQuery>,
) -> Result<impl web::Responder, web::Error> {
    let category_id = query
        .id
        .ok_or_else(|| errors::ApiError::Validation("Category ID is required".into()))?;

    api::category::delete_category(category_id, &app_state.repo).await?;

    Ok(web::HttpResponse::Ok().json(&json!({
        "success": true,
        "message": "Category deleted successfully",
    })))
}
