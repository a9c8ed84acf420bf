//! SUBNET console operations.

use std::sync::Arc;

use console_admin::{format_subnet_config, license_from_config, subnet_key_from_config};
use console_core::config::SubnetConfig;
use console_core::error::AppError;
use console_core::result::AppResult;
use console_core::traits::{AdminClient, AdminClientFactory};
use console_core::types::{LicenseTokenConfig, Principal};
use console_subnet::license::parse_license;
use console_subnet::register::{RegisterCredentials, reg_token_from_server_info, register};
use console_subnet::{LicenseInfo, SubnetClient, auth, resolve_proxy};

use super::models::{LoginCredentials, MfaLoginCredentials, RegisterParams, SubnetLoginResult};

/// Runs the SUBNET operations on behalf of a session.
///
/// Nothing is cached between calls: every operation builds a fresh admin
/// client from the caller's principal and a fresh SUBNET client.
#[derive(Clone)]
pub struct SubnetService {
    /// SUBNET settings, including the seeded license and configured proxy.
    config: SubnetConfig,
    /// Builds admin clients per session.
    admin_factory: Arc<dyn AdminClientFactory>,
}

impl std::fmt::Debug for SubnetService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubnetService")
            .field("base_url", &self.config.base_url)
            .finish_non_exhaustive()
    }
}

impl SubnetService {
    /// Creates a new SUBNET service.
    pub fn new(config: SubnetConfig, admin_factory: Arc<dyn AdminClientFactory>) -> Self {
        Self {
            config,
            admin_factory,
        }
    }

    /// Logs in to SUBNET with an API key or a username and password.
    ///
    /// With an API key the cluster is registered straight away and the
    /// result only reports `registered`. With a password the result carries
    /// either an access token or an MFA challenge; organizations are listed
    /// by the MFA step.
    pub async fn login(
        &self,
        principal: &Principal,
        credentials: &LoginCredentials,
    ) -> AppResult<SubnetLoginResult> {
        let with_password = !credentials.username.is_empty() && !credentials.password.is_empty();
        if credentials.api_key.is_empty() && !with_password {
            return Err(AppError::bad_request());
        }

        let admin = self.admin_factory.create(principal)?;
        let stored = subnet_key_from_config(admin.as_ref()).await?;
        let client = self.client_for(&stored)?;

        if !credentials.api_key.is_empty() {
            self.register_cluster(
                admin.as_ref(),
                &client,
                &stored,
                RegisterCredentials::ApiKey(&credentials.api_key),
            )
            .await?;
            tracing::info!("Cluster registered with SUBNET API key");
            return Ok(SubnetLoginResult {
                registered: true,
                ..SubnetLoginResult::default()
            });
        }

        let tokens = auth::login(&client, &credentials.username, &credentials.password).await?;
        if tokens.access_token.is_empty() && tokens.mfa_token.is_empty() {
            return Err(AppError::generic());
        }

        tracing::info!(
            username = %credentials.username,
            mfa_required = !tokens.mfa_token.is_empty(),
            "SUBNET login succeeded"
        );

        Ok(SubnetLoginResult {
            access_token: tokens.access_token,
            mfa_token: tokens.mfa_token,
            ..SubnetLoginResult::default()
        })
    }

    /// Completes an MFA login and lists the user's organizations.
    pub async fn login_with_mfa(
        &self,
        principal: &Principal,
        credentials: &MfaLoginCredentials,
    ) -> AppResult<SubnetLoginResult> {
        let admin = self.admin_factory.create(principal)?;
        let client = self.subnet_http_client(admin.as_ref()).await?;

        let tokens = auth::login_with_mfa(
            &client,
            &credentials.username,
            &credentials.mfa_token,
            &credentials.otp,
        )
        .await?;

        if tokens.access_token.is_empty() {
            tracing::warn!(username = %credentials.username, "SUBNET MFA login returned no access token");
            return Err(AppError::generic());
        }

        let organizations = auth::get_organizations(&client, &tokens.access_token).await?;

        Ok(SubnetLoginResult {
            access_token: tokens.access_token,
            organizations,
            ..SubnetLoginResult::default()
        })
    }

    /// Registers the cluster under the given account.
    pub async fn register(&self, principal: &Principal, params: &RegisterParams) -> AppResult<()> {
        if params.token.is_empty() || params.account_id.is_empty() {
            return Err(AppError::bad_request());
        }

        let admin = self.admin_factory.create(principal)?;
        let stored = subnet_key_from_config(admin.as_ref()).await?;
        let client = self.client_for(&stored)?;

        self.register_cluster(
            admin.as_ref(),
            &client,
            &stored,
            RegisterCredentials::Token {
                token: &params.token,
                account_id: &params.account_id,
            },
        )
        .await?;

        tracing::info!(account_id = %params.account_id, "Cluster registered with SUBNET account");
        Ok(())
    }

    /// Reads and verifies the cluster's license.
    ///
    /// A seeded license is used as is; otherwise the cluster configuration
    /// is consulted.
    pub async fn info(&self, principal: &Principal) -> AppResult<LicenseInfo> {
        let license = match self.config.seeded_license() {
            Some(seeded) => seeded.to_string(),
            None => {
                let admin = self.admin_factory.create(principal)?;
                license_from_config(admin.as_ref())
                    .await?
                    .ok_or_else(AppError::license_not_found)?
            }
        };

        let client = SubnetClient::new(&self.config, self.config.configured_proxy())?;
        parse_license(&client, &license, &self.config.public_keys).await
    }

    /// Derives the registration token for offline registration.
    pub async fn reg_token(&self, principal: &Principal) -> AppResult<String> {
        let admin = self.admin_factory.create(principal)?;
        let server_info = admin.server_info().await?;
        reg_token_from_server_info(&server_info)
    }

    /// Exchanges a SUBNET access token for the account's API key.
    pub async fn api_key(&self, principal: &Principal, token: &str) -> AppResult<String> {
        let admin = self.admin_factory.create(principal)?;
        let client = self.subnet_http_client(admin.as_ref()).await?;
        auth::get_api_key(&client, token).await
    }

    /// Builds the SUBNET client, honoring a proxy stored in the cluster
    /// configuration before the configured one.
    pub async fn subnet_http_client(&self, admin: &dyn AdminClient) -> AppResult<SubnetClient> {
        let stored = subnet_key_from_config(admin).await?;
        self.client_for(&stored)
    }

    fn client_for(&self, stored: &LicenseTokenConfig) -> AppResult<SubnetClient> {
        let proxy = resolve_proxy(stored.proxy(), self.config.configured_proxy());
        SubnetClient::new(&self.config, proxy.as_deref())
    }

    /// Registers with SUBNET and writes the issued credentials back,
    /// keeping the stored proxy.
    async fn register_cluster(
        &self,
        admin: &dyn AdminClient,
        client: &SubnetClient,
        stored: &LicenseTokenConfig,
        credentials: RegisterCredentials<'_>,
    ) -> AppResult<()> {
        let server_info = admin.server_info().await?;
        let issued = register(client, &server_info, credentials).await?;

        let kv = format_subnet_config(&issued.license, &issued.api_key, &stored.proxy);
        let restart_required = admin.set_config_kv(&kv).await?;
        if restart_required {
            tracing::warn!("SUBNET configuration stored; cluster restart required to apply it");
        }
        Ok(())
    }
}
