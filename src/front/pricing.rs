//! /pricing endpoints: plan catalog and plan orders.

use crate::{
    api,
    front::{
        AppState, errors,
        middleware::auth_token::{AdminOnly, AuthedUser},
    },
};
use ntex::web;
use serde_json::json;

#[web::get("/plans")]
async fn list_plans(
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let plans = api::pricing::list_plans(&app_state.repo).await?;

    Ok(web::HttpResponse::Ok().json(&json!({ "success": true, "data": plans })))
}

#[web::get("/orders")]
async fn list_orders(
    _: AdminOnly,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let orders = api::pricing::list_orders(&app_state.repo).await?;

    Ok(web::HttpResponse::Ok().json(&json!({ "success": true, "data": orders })))
}

#[web::post("/orders")]
async fn create_order(
    AuthedUser(user): AuthedUser,
    app_state: web::types::State<AppState>,
    body: web::types::Json<api::pricing::NewOrderRequest>,
) -> Result<impl web::Responder, web::Error> {
    // the ordering user id must belong to the presented session
    if body.user_id != user.id && !user.is_admin() {
        return Err(errors::ApiError::Unauthorized(
            "Cannot place an order for another user".into(),
        )
        .into());
    }

    let order_id = api::pricing::create_order(&body, &app_state.repo).await?;

    Ok(web::HttpResponse::Ok().json(&json!({
        "success": true,
        "message": "Order placed successfully",
        "order_id": order_id,
    })))
}

#[web::put("/orders")]
async fn update_order(
    _: AdminOnly,
    app_state: web::types::State<AppState>,
    body: web::types::Json<api::pricing::UpdateOrderRequest>,
) -> Result<impl web::Responder, web::Error> {
    api::pricing::update_order(&body, &app_state.repo).await?;

    Ok(web::HttpResponse::Ok().json(&json!({
        "success": true,
        "message": "Status updated successfully",
    })))
}
