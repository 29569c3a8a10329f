//! Fallback handling for requests no route matched.

use crate::front::errors;
use ntex::{http, web};

/// Unmatched GETs are missing resources; anything else on a known server is
/// an unsupported method.
pub async fn fallback(req: web::HttpRequest) -> Result<web::HttpResponse, web::Error> {
    if req.method() == http::Method::GET {
        return Err(errors::ApiError::NotFound("Resource not found".into()).into());
    }

    Err(errors::ApiError::MethodNotAllowed.into())
}
