//! `Session` extractor: pulls the session token from the request.

use axum::extract::FromRequestParts;
use axum::http::header::{AUTHORIZATION, COOKIE};
use axum::http::request::Parts;

use console_core::error::AppError;
use console_core::types::Principal;

use crate::error::ApiError;

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "token";

/// The caller's session, taken from a bearer header or the session cookie.
#[derive(Debug, Clone)]
pub struct Session(pub Principal);

impl std::ops::Deref for Session {
    type Target = Principal;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Session {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        bearer_token(parts)
            .or_else(|| cookie_token(parts))
            .map(|token| Session(Principal::new(token)))
            .ok_or_else(|| AppError::authentication("Missing session token").into())
    }
}

fn bearer_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
}

fn cookie_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.to_string())
        .filter(|t| !t.is_empty())
}
