//! SUBNET endpoint paths.

/// Builds SUBNET URLs from a base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubnetEndpoints {
    base: String,
}

impl SubnetEndpoints {
    /// Creates endpoints rooted at `base_url`.
    pub fn new(base_url: &str) -> Self {
        Self {
            base: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn login(&self) -> String {
        format!("{}/api/auth/login", self.base)
    }

    pub fn mfa_login(&self) -> String {
        format!("{}/api/auth/mfa-login", self.base)
    }

    pub fn organizations(&self) -> String {
        format!("{}/api/auth/organizations", self.base)
    }

    pub fn api_key(&self) -> String {
        format!("{}/api/auth/api-key", self.base)
    }

    pub fn register(&self) -> String {
        format!("{}/api/cluster/register", self.base)
    }

    pub fn public_key(&self) -> String {
        format!("{}/downloads/license-pubkey.pem", self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let endpoints = SubnetEndpoints::new("https://subnet.min.io/");
        assert_eq!(endpoints.login(), "https://subnet.min.io/api/auth/login");
        assert_eq!(
            endpoints.public_key(),
            "https://subnet.min.io/downloads/license-pubkey.pem"
        );
    }
}
