//! SUBNET account calls: login, MFA login, organizations, and API keys.

use serde::{Deserialize, Serialize};

use console_core::error::AppError;
use console_core::result::AppResult;

use crate::client::{SubnetClient, parse_body};

/// Tokens returned by a login attempt. At most one is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginTokens {
    /// Bearer token for further SUBNET calls.
    pub access_token: String,
    /// Challenge token to complete login with a one-time password.
    pub mfa_token: String,
}

/// An organization the SUBNET user belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    #[serde(default)]
    pub account_id: i64,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub is_account_owner: bool,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub subscription_status: String,
    #[serde(default)]
    pub user_id: i64,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct MfaLoginRequest<'a> {
    username: &'a str,
    otp: &'a str,
    token: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    mfa_required: bool,
    #[serde(default)]
    mfa_token: String,
    #[serde(default)]
    token_info: Option<TokenInfo>,
}

#[derive(Debug, Default, Deserialize)]
struct TokenInfo {
    #[serde(default)]
    access_token: Option<String>,
}

impl LoginResponse {
    fn access_token(self) -> AppResult<String> {
        self.token_info
            .and_then(|t| t.access_token)
            .ok_or_else(|| AppError::external("access token not found in response"))
    }
}

#[derive(Debug, Default, Deserialize)]
struct ApiKeyResponse {
    #[serde(default)]
    api_key: String,
}

/// Logs in with username and password.
///
/// When the account has MFA enabled the result carries only the MFA token.
pub async fn login(client: &SubnetClient, username: &str, password: &str) -> AppResult<LoginTokens> {
    let body = client
        .post(
            client.endpoints().login(),
            &LoginRequest { username, password },
            None,
        )
        .await?;
    let response: LoginResponse = parse_body(&body)?;

    if response.mfa_required {
        return Ok(LoginTokens {
            mfa_token: response.mfa_token,
            ..LoginTokens::default()
        });
    }

    Ok(LoginTokens {
        access_token: response.access_token()?,
        ..LoginTokens::default()
    })
}

/// Completes an MFA login with the challenge token and one-time password.
///
/// The returned access token may be empty if SUBNET answered without one.
pub async fn login_with_mfa(
    client: &SubnetClient,
    username: &str,
    mfa_token: &str,
    otp: &str,
) -> AppResult<LoginTokens> {
    let body = client
        .post(
            client.endpoints().mfa_login(),
            &MfaLoginRequest {
                username,
                otp,
                token: mfa_token,
            },
            None,
        )
        .await?;
    let response: LoginResponse = parse_body(&body)?;

    Ok(LoginTokens {
        access_token: response
            .token_info
            .and_then(|t| t.access_token)
            .unwrap_or_default(),
        ..LoginTokens::default()
    })
}

/// Lists the organizations visible to the holder of `access_token`.
pub async fn get_organizations(
    client: &SubnetClient,
    access_token: &str,
) -> AppResult<Vec<Organization>> {
    let body = client
        .get(client.endpoints().organizations(), Some(access_token))
        .await?;
    parse_body(&body)
}

/// Fetches the SUBNET API key for the holder of `token`.
pub async fn get_api_key(client: &SubnetClient, token: &str) -> AppResult<String> {
    let body = client.get(client.endpoints().api_key(), Some(token)).await?;
    let response: ApiKeyResponse = parse_body(&body)?;
    Ok(response.api_key)
}
