//! Configuration types for dropshell

use std::path::PathBuf;
use std::time::Duration;

use dropshell_api::{ClientOptions, DEFAULT_BASE_URL, DEFAULT_TOKEN_ENV};
use dropshell_ssh::{HostKeyPolicy, SshConfig};
use serde::{Deserialize, Serialize};

/// Page sizes outside this range are clamped; 200 is the API maximum
pub const PAGE_SIZE_RANGE: std::ops::RangeInclusive<u32> = 1..=200;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub selector: SelectorSettings,

    #[serde(default)]
    pub list: ListSettings,

    #[serde(default)]
    pub ssh: SshSettings,
}

impl Settings {
    /// Clamp out-of-range values, returning the names of fields that changed
    pub fn normalize(&mut self) -> Vec<&'static str> {
        let mut clamped = Vec::new();
        if clamp_page_size(&mut self.selector.page_size) {
            clamped.push("selector.page_size");
        }
        if clamp_page_size(&mut self.list.page_size) {
            clamped.push("list.page_size");
        }
        if self.api.timeout_secs == 0 {
            self.api.timeout_secs = default_timeout_secs();
            clamped.push("api.timeout_secs");
        }
        clamped
    }
}

fn clamp_page_size(size: &mut u32) -> bool {
    let clamped = (*size).clamp(*PAGE_SIZE_RANGE.start(), *PAGE_SIZE_RANGE.end());
    let changed = clamped != *size;
    *size = clamped;
    changed
}

/// Remote API settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Environment variable holding the access token
    #[serde(default = "default_token_env")]
    pub token_env: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            token_env: default_token_env(),
        }
    }
}

impl ApiSettings {
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_token_env() -> String {
    DEFAULT_TOKEN_ENV.to_string()
}

/// Interactive selector settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SelectorSettings {
    /// Droplets per page
    #[serde(default = "default_selector_page_size")]
    pub page_size: u32,
}

impl Default for SelectorSettings {
    fn default() -> Self {
        Self {
            page_size: default_selector_page_size(),
        }
    }
}

fn default_selector_page_size() -> u32 {
    4
}

/// `droplet list` settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ListSettings {
    #[serde(default = "default_list_page_size")]
    pub page_size: u32,
}

impl Default for ListSettings {
    fn default() -> Self {
        Self {
            page_size: default_list_page_size(),
        }
    }
}

fn default_list_page_size() -> u32 {
    20
}

/// Remote shell settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SshSettings {
    #[serde(default = "default_user")]
    pub user: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Private key; a leading `~/` expands to the home directory
    #[serde(default = "default_key_path")]
    pub key_path: String,

    /// TERM sent with the PTY request
    #[serde(default = "default_term")]
    pub term: String,

    #[serde(default)]
    pub host_verification: HostKeyPolicy,
}

impl Default for SshSettings {
    fn default() -> Self {
        Self {
            user: default_user(),
            port: default_port(),
            key_path: default_key_path(),
            term: default_term(),
            host_verification: HostKeyPolicy::default(),
        }
    }
}

impl SshSettings {
    pub fn resolved_key_path(&self) -> PathBuf {
        expand_home(&self.key_path)
    }

    pub fn launcher_config(&self) -> SshConfig {
        SshConfig {
            user: self.user.clone(),
            port: self.port,
            key_path: self.resolved_key_path(),
            term: self.term.clone(),
            host_key_policy: self.host_verification,
        }
    }
}

fn default_user() -> String {
    "root".to_string()
}

fn default_port() -> u16 {
    22
}

fn default_key_path() -> String {
    "~/.ssh/id_rsa".to_string()
}

fn default_term() -> String {
    "xterm".to_string()
}

fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ if path == "~" => dirs::home_dir().unwrap_or_else(|| PathBuf::from(path)),
        _ => PathBuf::from(path),
    }
}
