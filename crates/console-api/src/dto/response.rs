//! Response DTOs.

use serde::{Deserialize, Serialize};

use console_service::subnet::SubnetLoginResult;
use console_subnet::{LicenseInfo, Organization};

/// SUBNET login and MFA login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubnetLoginResponse {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub access_token: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub mfa_token: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub registered: bool,
    #[serde(default)]
    pub organizations: Vec<Organization>,
}

impl From<SubnetLoginResult> for SubnetLoginResponse {
    fn from(result: SubnetLoginResult) -> Self {
        Self {
            access_token: result.access_token,
            mfa_token: result.mfa_token,
            registered: result.registered,
            organizations: result.organizations,
        }
    }
}

/// License details of the registered cluster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LicenseResponse {
    pub email: String,
    pub account_id: i64,
    pub storage_capacity: i64,
    pub plan: String,
    pub expires_at: String,
    pub organization: String,
}

impl From<LicenseInfo> for LicenseResponse {
    fn from(info: LicenseInfo) -> Self {
        Self {
            expires_at: info.expires_at_display(),
            email: info.email,
            account_id: info.account_id,
            storage_capacity: info.storage_capacity,
            plan: info.plan,
            organization: info.organization,
        }
    }
}

/// Registration token for offline registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegTokenResponse {
    #[serde(rename = "regToken")]
    pub reg_token: String,
}

/// SUBNET API key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiKeyResponse {
    #[serde(rename = "apiKey")]
    pub api_key: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
