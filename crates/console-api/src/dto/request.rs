//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use console_service::subnet::{LoginCredentials, MfaLoginCredentials, RegisterParams};

/// SUBNET login body: an API key or a username/password pair.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct SubnetLoginRequest {
    #[serde(default, rename = "apiKey")]
    pub api_key: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl std::fmt::Debug for SubnetLoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubnetLoginRequest")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl From<SubnetLoginRequest> for LoginCredentials {
    fn from(req: SubnetLoginRequest) -> Self {
        Self {
            api_key: req.api_key,
            username: req.username,
            password: req.password,
        }
    }
}

/// SUBNET MFA login body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SubnetMfaLoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "One-time password is required"))]
    pub otp: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "MFA token is required"))]
    pub mfa_token: String,
}

impl From<SubnetMfaLoginRequest> for MfaLoginCredentials {
    fn from(req: SubnetMfaLoginRequest) -> Self {
        Self {
            username: req.username,
            mfa_token: req.mfa_token,
            otp: req.otp,
        }
    }
}

/// SUBNET registration body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SubnetRegisterRequest {
    /// Access token from a previous SUBNET login.
    #[serde(default)]
    #[validate(length(min = 1, message = "Token is required"))]
    pub token: String,
    /// Account to register the cluster under.
    #[serde(default)]
    #[validate(length(min = 1, message = "Account id is required"))]
    pub account_id: String,
}

impl From<SubnetRegisterRequest> for RegisterParams {
    fn from(req: SubnetRegisterRequest) -> Self {
        Self {
            token: req.token,
            account_id: req.account_id,
        }
    }
}

/// Query of `GET /subnet/apikey`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ApiKeyQuery {
    #[serde(default)]
    #[validate(length(min = 1, message = "Token is required"))]
    pub token: String,
}
