//! # Pet Care Web Service
//!
//! REST API for the pet-adoption and veterinary-clinic management
//! application: pets, categories, users, adoption requests, clinics,
//! clinic services, appointments and subscription-plan orders, backed by
//! SQLite.
#![recursion_limit = "256"]

pub mod api;
pub mod config;
pub mod front;
pub mod logger;
pub mod models;
pub mod repo;
pub mod utils;

use ntex::web;
use ntex_cors::Cors;

#[ntex::main]
async fn main() -> anyhow::Result<()> {
    logger::setup_simple_logger()?;

    // Initialize database connection pool and bring the schema up
    let sqlite_repo = repo::sqlite::SqlxSqliteRepo {
        db_pool: utils::setup_sqlite_db_pool().await?,
    };
    sqlite_repo.apply_schema().await?;

    // The administrative account lives in the same users table as everyone
    // else; only the seeding is special.
    let admin_hash = utils::hash_password(&config::APP_CONFIG.admin_password)?;
    sqlite_repo
        .seed_admin(
            &config::APP_CONFIG.admin_name,
            &config::APP_CONFIG.admin_email,
            &admin_hash,
        )
        .await?;

    configure_and_run_server(sqlite_repo).await
}

/// Creates application state from the provided repo
fn create_app_state(sqlite_repo: repo::sqlite::SqlxSqliteRepo) -> front::AppState {
    front::AppState {
        repo: Box::new(sqlite_repo),
    }
}

/// Configures and starts the web server
async fn configure_and_run_server(sqlite_repo: repo::sqlite::SqlxSqliteRepo) -> anyhow::Result<()> {
    let server_addr = (
        config::APP_CONFIG.web_server_host.clone(),
        config::APP_CONFIG.web_server_port,
    );

    let server = web::server(move || {
        web::App::new()
            .wrap(
                Cors::new()
                    .allowed_methods(vec![
                        "GET", "HEAD", "POST", "OPTIONS", "PUT", "PATCH", "DELETE",
                    ])
                    .finish(),
            )
            .wrap(web::middleware::Logger::default())
            .wrap(web::middleware::Compress::default())
            .state(create_app_state(sqlite_repo.clone()))
            .configure(front::routes::users)
            .configure(front::routes::categories)
            .configure(front::routes::pets)
            .configure(front::routes::adoptions)
            .configure(front::routes::clinics)
            .configure(front::routes::services)
            .configure(front::routes::appointments)
            .configure(front::routes::pricing)
            .default_service(web::route().to(front::server::fallback))
    });

    server
        .bind(server_addr)?
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
