use derive_more::{Display, Error};
use log::error;
use ntex::{http, web};
use serde_json::json;

/// Error taxonomy shared by the api/ layer and the HTTP boundary. Every
/// variant renders as the standard `{success: false, error: ...}` envelope
/// with the matching status code.
#[derive(Debug, Display, Error)]
pub enum ApiError {
    #[display("{_0}")]
    Validation(#[error(not(source))] String),
    #[display("{_0}")]
    Unauthorized(#[error(not(source))] String),
    #[display("{_0}")]
    NotFound(#[error(not(source))] String),
    #[display("Method not allowed")]
    MethodNotAllowed,
    #[display("{_0}")]
    Conflict(#[error(not(source))] String),
    #[display("Database error: {_0}")]
    Storage(#[error(not(source))] String),
}

/// Repo failures surface the underlying storage error text verbatim.
impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Storage(err.to_string())
    }
}

impl web::error::WebResponseError for ApiError {
    fn error_response(&self, _: &web::HttpRequest) -> web::HttpResponse {
        error!("{:#?}", self);

        web::HttpResponse::build(self.status_code()).json(&json!({
            "success": false,
            "error": self.to_string(),
        }))
    }

    fn status_code(&self) -> http::StatusCode {
        match *self {
            ApiError::Validation(_) => http::StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => http::StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => http::StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => http::StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Conflict(_) => http::StatusCode::CONFLICT,
            ApiError::Storage(_) => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
