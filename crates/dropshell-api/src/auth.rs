//! Access token acquisition
//!
//! The listing client receives its credential through an [`Authenticator`]
//! handed to its constructor, so tests can swap in a mock instead of
//! touching the process environment.

use dropshell_core::prelude::*;

/// Environment variable holding the DigitalOcean personal access token
pub const DEFAULT_TOKEN_ENV: &str = "DIGITALOCEAN_ACCESS_TOKEN";

/// Bearer token for the remote API
#[derive(Clone, PartialEq, Eq)]
pub struct ApiCredential {
    token: String,
}

impl ApiCredential {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

// Never print the token itself
impl std::fmt::Debug for ApiCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredential")
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Source of API credentials
#[cfg_attr(test, mockall::automock)]
pub trait Authenticator {
    fn authenticate(&self) -> Result<ApiCredential>;
}

/// Reads the token from an environment variable
#[derive(Debug, Clone)]
pub struct EnvAuthenticator {
    var: String,
}

impl EnvAuthenticator {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    pub fn var(&self) -> &str {
        &self.var
    }
}

impl Default for EnvAuthenticator {
    fn default() -> Self {
        Self::new(DEFAULT_TOKEN_ENV)
    }
}

impl Authenticator for EnvAuthenticator {
    fn authenticate(&self) -> Result<ApiCredential> {
        match std::env::var(&self.var) {
            Ok(token) if !token.trim().is_empty() => {
                debug!("Loaded API token from {}", self.var);
                Ok(ApiCredential::new(token.trim()))
            }
            _ => Err(Error::missing_credential(&self.var)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const TEST_VAR: &str = "DROPSHELL_TEST_ACCESS_TOKEN";

    #[test]
    #[serial]
    fn test_env_authenticator_reads_token() {
        std::env::set_var(TEST_VAR, "dop_v1_abc");
        let cred = EnvAuthenticator::new(TEST_VAR).authenticate().unwrap();
        assert_eq!(cred.token(), "dop_v1_abc");
        std::env::remove_var(TEST_VAR);
    }

    #[test]
    #[serial]
    fn test_env_authenticator_missing_token() {
        std::env::remove_var(TEST_VAR);
        let err = EnvAuthenticator::new(TEST_VAR).authenticate().unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("the environment variable {TEST_VAR} is not set")
        );
    }

    #[test]
    #[serial]
    fn test_env_authenticator_blank_token_is_missing() {
        std::env::set_var(TEST_VAR, "   ");
        let err = EnvAuthenticator::new(TEST_VAR).authenticate().unwrap_err();
        assert!(matches!(err, Error::MissingCredential { .. }));
        std::env::remove_var(TEST_VAR);
    }

    #[test]
    fn test_default_reads_digitalocean_variable() {
        assert_eq!(EnvAuthenticator::default().var(), "DIGITALOCEAN_ACCESS_TOKEN");
    }

    #[test]
    fn test_credential_debug_is_redacted() {
        let cred = ApiCredential::new("secret-token");
        let debug = format!("{cred:?}");
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("redacted"));
    }
}
