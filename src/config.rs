//! Application configuration loaded from environment variables.
//!
//! Sensitive fields (the admin seed password) must come from a secret manager
//! in production deployments; defaults exist only so local setups boot.

use envconfig::Envconfig;
use std::sync::LazyLock;

#[derive(Envconfig, Clone)]
pub struct AppConfig {
    /// Environment name to deploy the app.
    /// Values: "local", "dev", "staging", "prod"
    #[envconfig(default = "local")]
    pub env: String,

    /// Database url
    /// Example: "sqlite:data/pet_care.db?mode=rwc"
    #[envconfig(default = "sqlite:data/pet_care.db?mode=rwc")]
    pub db_host: String,

    /// Host address for web server binding
    #[envconfig(default = "0.0.0.0")]
    pub web_server_host: String,

    /// Port for web server binding
    #[envconfig(default = "8080")]
    pub web_server_port: u16,

    /// Email of the seeded administrative account
    #[envconfig(default = "admin@gmail.com")]
    pub admin_email: String,

    /// 🔒 SENSITIVE: password of the seeded administrative account.
    /// Override anywhere that is not a throwaway local database.
    #[envconfig(default = "admin")]
    pub admin_password: String,

    /// Display name of the seeded administrative account
    #[envconfig(default = "Administrator")]
    pub admin_name: String,

    /// Lifetime of issued session tokens, in hours
    #[envconfig(default = "24")]
    pub session_ttl_hours: i64,
}

impl AppConfig {
    pub fn is_prod(&self) -> bool {
        self.env.to_lowercase() == "prod"
    }
}

/// Global application configuration instance, validated on first access.
pub static APP_CONFIG: LazyLock<AppConfig> = LazyLock::new(|| {
    AppConfig::init_from_env()
        .expect("Failed to load application configuration. Check environment variables.")
});
