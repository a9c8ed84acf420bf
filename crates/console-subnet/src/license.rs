//! License verification.
//!
//! A SUBNET license is an ES384-signed JWT. The verification key is
//! downloaded from SUBNET; when that fails the configured offline keys
//! are tried instead.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::Deserialize;

use console_core::error::{AppError, ErrorKind};
use console_core::result::AppResult;

use crate::client::SubnetClient;

/// Reported when the SUBNET key cannot be downloaded and no offline key
/// is configured in `subnet.public_keys`.
pub const NO_LICENSE_KEY_MESSAGE: &str =
    "SUBNET public key unavailable and no offline public keys configured";

/// Details carried by a verified license.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseInfo {
    pub email: String,
    pub organization: String,
    pub account_id: i64,
    /// Licensed capacity in TB.
    pub storage_capacity: i64,
    pub plan: String,
    pub expires_at: DateTime<Utc>,
}

impl LicenseInfo {
    /// Expiry rendered as `YYYY-MM-DD HH:MM:SS +0000 UTC`.
    pub fn expires_at_display(&self) -> String {
        self.expires_at.format("%Y-%m-%d %H:%M:%S %z UTC").to_string()
    }
}

#[derive(Debug, Deserialize)]
struct LicenseClaims {
    sub: String,
    exp: i64,
    #[serde(default)]
    aid: i64,
    #[serde(default)]
    cap: i64,
    #[serde(default)]
    plan: String,
    #[serde(default)]
    org: String,
}

/// Verifies `license` against a PEM-encoded EC public key.
pub fn verify_license(license: &str, public_key_pem: &str) -> AppResult<LicenseInfo> {
    let key = DecodingKey::from_ec_pem(public_key_pem.as_bytes()).map_err(|e| {
        AppError::with_source(ErrorKind::Configuration, "Invalid license public key", e)
    })?;

    let mut validation = Validation::new(Algorithm::ES384);
    validation.validate_exp = true;
    validation.validate_aud = false;

    let data = decode::<LicenseClaims>(license, &key, &validation).map_err(|e| {
        AppError::with_source(ErrorKind::Validation, "License verification failed", e)
    })?;
    let claims = data.claims;

    let expires_at = DateTime::<Utc>::from_timestamp(claims.exp, 0)
        .ok_or_else(|| AppError::validation("License expiry out of range"))?;

    Ok(LicenseInfo {
        email: claims.sub,
        organization: claims.org,
        account_id: claims.aid,
        storage_capacity: claims.cap,
        plan: claims.plan,
        expires_at,
    })
}

/// Downloads SUBNET's current license public key.
pub async fn download_public_key(client: &SubnetClient) -> AppResult<String> {
    client.get(client.endpoints().public_key(), None).await
}

/// Verifies a license with SUBNET's published key, falling back to
/// `offline_keys` when the key cannot be downloaded.
pub async fn parse_license(
    client: &SubnetClient,
    license: &str,
    offline_keys: &[String],
) -> AppResult<LicenseInfo> {
    let keys = match download_public_key(client).await {
        Ok(key) => vec![key],
        Err(err) if offline_keys.is_empty() => {
            return Err(AppError::with_source(
                ErrorKind::ExternalService,
                NO_LICENSE_KEY_MESSAGE,
                err,
            ));
        }
        Err(err) => {
            tracing::warn!(
                error = %err,
                offline_keys = offline_keys.len(),
                "Could not download SUBNET public key, using offline keys"
            );
            offline_keys.to_vec()
        }
    };

    for key in &keys {
        match verify_license(license, key) {
            Ok(info) => return Ok(info),
            Err(err) => tracing::debug!(error = %err, "License rejected by key"),
        }
    }

    Err(AppError::validation("invalid license key"))
}
