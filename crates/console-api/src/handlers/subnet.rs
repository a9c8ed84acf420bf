//! SUBNET handlers: login, MFA login, registration, license info,
//! registration token, and API key.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use validator::Validate;

use console_core::error::{AppError, DEFAULT_ERROR_MESSAGE, ErrorKind};

use crate::dto::request::{
    ApiKeyQuery, SubnetLoginRequest, SubnetMfaLoginRequest, SubnetRegisterRequest,
};
use crate::dto::response::{ApiKeyResponse, LicenseResponse, RegTokenResponse, SubnetLoginResponse};
use crate::error::ApiError;
use crate::extractors::{ApiJson, Session};
use crate::state::AppState;

fn validate<T: Validate>(req: &T) -> Result<(), ApiError> {
    req.validate().map_err(|e| {
        AppError::with_source(ErrorKind::Validation, DEFAULT_ERROR_MESSAGE, e).into()
    })
}

/// POST /api/v1/subnet/login
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    ApiJson(req): ApiJson<SubnetLoginRequest>,
) -> Result<Json<SubnetLoginResponse>, ApiError> {
    let result = state.subnet_service.login(&session, &req.into()).await?;
    Ok(Json(result.into()))
}

/// POST /api/v1/subnet/login/mfa
pub async fn login_mfa(
    State(state): State<AppState>,
    session: Session,
    ApiJson(req): ApiJson<SubnetMfaLoginRequest>,
) -> Result<Json<SubnetLoginResponse>, ApiError> {
    validate(&req)?;
    let result = state
        .subnet_service
        .login_with_mfa(&session, &req.into())
        .await?;
    Ok(Json(result.into()))
}

/// POST /api/v1/subnet/register
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    ApiJson(req): ApiJson<SubnetRegisterRequest>,
) -> Result<StatusCode, ApiError> {
    validate(&req)?;
    state.subnet_service.register(&session, &req.into()).await?;
    Ok(StatusCode::OK)
}

/// GET /api/v1/subnet/info
pub async fn info(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<LicenseResponse>, ApiError> {
    let license = state.subnet_service.info(&session).await?;
    Ok(Json(license.into()))
}

/// GET /api/v1/subnet/registration-token
pub async fn registration_token(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<RegTokenResponse>, ApiError> {
    let reg_token = state.subnet_service.reg_token(&session).await?;
    Ok(Json(RegTokenResponse { reg_token }))
}

/// GET /api/v1/subnet/apikey?token=...
pub async fn api_key(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ApiKeyQuery>,
) -> Result<Json<ApiKeyResponse>, ApiError> {
    validate(&query)?;
    let api_key = state.subnet_service.api_key(&session, &query.token).await?;
    Ok(Json(ApiKeyResponse { api_key }))
}
