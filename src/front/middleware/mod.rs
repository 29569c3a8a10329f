pub mod auth_token;
