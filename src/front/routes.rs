//! Route configuration.
//!
//! One scope per resource, method-dispatched handlers inside. Filtering and
//! id lookup ride on query parameters (`?id=`, `?pet_id=`, `?category=`,
//! `?action=`) to match the API the browser front end consumes.

use super::{adoption, appointment, category, clinic, pet, pricing, service, user};
use ntex::web;

/// `GET/POST/PUT/DELETE /users`, `POST /users?action=register|login`,
/// `POST /users/logout`
pub fn users(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/users").service((
        user::list_users,
        user::register_or_login,
        user::logout,
        user::update_user,
        user::delete_user,
    )));
}

/// `GET/POST/PUT/DELETE /categories`
pub fn categories(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/categories").service((
        category::list_categories,
        category::create_category,
        category::update_category,
        category::delete_category,
    )));
}

/// `GET/POST/PUT/DELETE /pets`, filterable with `?category=`
pub fn pets(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/pets").service((
        pet::list_pets,
        pet::create_pet,
        pet::update_pet,
        pet::delete_pet,
    )));
}

/// `GET/POST/PUT/DELETE /adoptions`, filterable with `?user_id=` / `?pet_id=`
pub fn adoptions(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/adoptions").service((
        adoption::list_adoptions,
        adoption::create_adoption,
        adoption::update_adoption,
        adoption::delete_adoption,
    )));
}

/// `GET/POST/PUT/DELETE /clinics`
pub fn clinics(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/clinics").service((
        clinic::list_clinics,
        clinic::create_clinic,
        clinic::update_clinic,
        clinic::delete_clinic,
    )));
}

/// `GET/POST/PUT/DELETE /services`, filterable with `?clinic_id=`
pub fn services(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/services").service((
        service::list_services,
        service::create_service,
        service::update_service,
        service::delete_service,
    )));
}

/// `GET/POST/PUT/DELETE /appointments`, filterable with `?pet_id=` /
/// `?clinic_id=` / `?user_id=`
pub fn appointments(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/appointments").service((
        appointment::list_appointments,
        appointment::create_appointment,
        appointment::update_appointment,
        appointment::delete_appointment,
    )));
}

/// `GET /pricing/plans`, `GET/POST/PUT /pricing/orders`
pub fn pricing(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/pricing").service((
        pricing::list_plans,
        pricing::list_orders,
        pricing::create_order,
        pricing::update_order,
    )));
}
