//! Bearer-token session extractors.
//!
//! Every mutating endpoint pulls one of these, so the acting user is always
//! a server-verified session rather than a client-supplied id. Tokens are
//! issued at login, stored server-side and checked against their expiry on
//! every extraction.

use ntex::{
    http::Payload,
    web::{Error, FromRequest, HttpRequest},
};

use crate::front::{AppState, errors};
use crate::models;

/// Any logged-in user.
pub struct AuthedUser(pub models::user::User);

/// A logged-in user with the admin role.
pub struct AdminOnly(pub models::user::User);

/// The raw presented token; used by logout to invalidate itself.
pub struct BearerToken(pub String);

fn bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|token| token.trim().to_string())
}

async fn lookup_session_user(req: HttpRequest) -> Result<models::user::User, Error> {
    let token = bearer_token(&req)
        .ok_or_else(|| errors::ApiError::Unauthorized("Authentication required".into()))?;

    let app_state = req
        .app_state::<AppState>()
        .ok_or_else(|| errors::ApiError::Storage("application state is missing".into()))?;

    let user = app_state
        .repo
        .get_session_user(&token)
        .await
        .map_err(errors::ApiError::from)?;

    user.ok_or_else(|| errors::ApiError::Unauthorized("Invalid or expired session".into()).into())
}

impl<Err> FromRequest<Err> for AuthedUser {
    type Error = Error;

    fn from_request(
        req: &HttpRequest,
        _: &mut Payload,
    ) -> impl std::future::Future<Output = Result<Self, Self::Error>> {
        let req = req.clone();
        async move { lookup_session_user(req).await.map(AuthedUser) }
    }
}

impl<Err> FromRequest<Err> for AdminOnly {
    type Error = Error;

    fn from_request(
        req: &HttpRequest,
        _: &mut Payload,
    ) -> impl std::future::Future<Output = Result<Self, Self::Error>> {
        let req = req.clone();
        async move {
            let user = lookup_session_user(req).await?;

            if !user.is_admin() {
                return Err(
                    errors::ApiError::Unauthorized("Administrator access required".into()).into(),
                );
            }

            Ok(AdminOnly(user))
        }
    }
}

impl<Err> FromRequest<Err> for BearerToken {
    type Error = Error;

    fn from_request(
        req: &HttpRequest,
        _: &mut Payload,
    ) -> impl std::future::Future<Output = Result<Self, Self::Error>> {
        let token = bearer_token(req);
        futures::future::ready(token.map(BearerToken).ok_or_else(|| {
            errors::ApiError::Unauthorized("Authentication required".into()).into()
        }))
    }
}
