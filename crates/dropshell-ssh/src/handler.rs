//! `russh` client handler and host key verification

use russh::client::Handler;
use serde::{Deserialize, Serialize};

use crate::error::SshError;

/// How the server's host key is checked
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HostKeyPolicy {
    /// Trust any host key. Exposes the session to man-in-the-middle attacks.
    #[default]
    AcceptAny,
    /// Require a matching entry in `~/.ssh/known_hosts`
    KnownHosts,
}

impl std::fmt::Display for HostKeyPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HostKeyPolicy::AcceptAny => write!(f, "accept-any"),
            HostKeyPolicy::KnownHosts => write!(f, "known-hosts"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClientHandler {
    host: String,
    port: u16,
    policy: HostKeyPolicy,
}

impl ClientHandler {
    pub fn new(host: impl Into<String>, port: u16, policy: HostKeyPolicy) -> Self {
        Self {
            host: host.into(),
            port,
            policy,
        }
    }
}

impl Handler for ClientHandler {
    type Error = SshError;

    async fn check_server_key(
        &mut self,
        server_public_key: &russh::keys::PublicKey,
    ) -> Result<bool, Self::Error> {
        match self.policy {
            HostKeyPolicy::AcceptAny => {
                tracing::debug!("Accepting host key for {} without verification", self.host);
                Ok(true)
            }
            HostKeyPolicy::KnownHosts => {
                match russh::keys::check_known_hosts(&self.host, self.port, server_public_key) {
                    Ok(true) => Ok(true),
                    Ok(false) => {
                        tracing::warn!("Host {} is not in known_hosts", self.host);
                        Ok(false)
                    }
                    Err(e) => Err(SshError::HostKeyCheck {
                        host: self.host.clone(),
                        message: e.to_string(),
                    }),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        policy: HostKeyPolicy,
    }

    #[test]
    fn test_policy_default_is_accept_any() {
        assert_eq!(HostKeyPolicy::default(), HostKeyPolicy::AcceptAny);
    }

    #[test]
    fn test_policy_kebab_case() {
        let w: Wrapper = toml::from_str(r#"policy = "known-hosts""#).unwrap();
        assert_eq!(w.policy, HostKeyPolicy::KnownHosts);
        assert_eq!(HostKeyPolicy::KnownHosts.to_string(), "known-hosts");

        assert!(toml::from_str::<Wrapper>(r#"policy = "sometimes""#).is_err());
    }
}
