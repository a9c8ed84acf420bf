//! Inputs and outputs of the SUBNET operations.

use console_subnet::Organization;

/// Login input: either an API key or a username/password pair.
#[derive(Clone, Default)]
pub struct LoginCredentials {
    pub api_key: String,
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("username", &self.username)
            .field("api_key", &(!self.api_key.is_empty()))
            .finish()
    }
}

/// Second step of an MFA login.
#[derive(Clone, Default)]
pub struct MfaLoginCredentials {
    pub username: String,
    pub mfa_token: String,
    pub otp: String,
}

impl std::fmt::Debug for MfaLoginCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MfaLoginCredentials")
            .field("username", &self.username)
            .finish()
    }
}

/// Registration with a logged-in user's token and chosen account.
#[derive(Debug, Clone, Default)]
pub struct RegisterParams {
    pub token: String,
    pub account_id: String,
}

/// Outcome of a login or MFA login.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubnetLoginResult {
    pub access_token: String,
    pub mfa_token: String,
    /// Set when the cluster was registered with an API key.
    pub registered: bool,
    pub organizations: Vec<Organization>,
}
