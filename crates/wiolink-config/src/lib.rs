//! Shared configuration for Wio Link tools.
//!
//! TOML profiles, token resolution (env + plaintext), and translation to
//! `wiolink_api` client settings. The CLI adds flag-aware overrides on top.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use url::Url;

use wiolink_api::{Region, TlsMode, TransportConfig, WioClient};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no {kind} token configured for profile '{profile}'")]
    NoToken { kind: TokenKind, profile: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

/// Which of the two Wio tokens a call needs.
///
/// Account-level calls (node management, drivers, boards) take the user
/// token; node I/O and cotf calls take the node's own token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    User,
    Node,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::User => "user",
            Self::Node => "node",
        })
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named server profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default)]
    pub region: Region,

    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            region: Region::default(),
            output: default_output(),
            timeout: default_timeout(),
        }
    }
}

fn default_output() -> String {
    "json".into()
}
fn default_timeout() -> u64 {
    30
}

/// A named profile: which server to talk to and with which tokens.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Profile {
    /// Server region (`us` or `cn`). Ignored when `base_url` is set.
    pub region: Option<Region>,

    /// Self-hosted server base URL (e.g. "https://wio.example.org/v1/").
    pub base_url: Option<String>,

    /// User token (plaintext -- prefer `user_token_env`).
    pub user_token: Option<String>,

    /// Environment variable name containing the user token.
    pub user_token_env: Option<String>,

    /// Node token (plaintext -- prefer `node_token_env`).
    pub node_token: Option<String>,

    /// Environment variable name containing the node token.
    pub node_token_env: Option<String>,

    /// Path to a custom CA certificate (self-hosted servers).
    pub ca_cert: Option<PathBuf>,

    /// Accept invalid TLS certificates.
    pub insecure: Option<bool>,

    /// Override timeout.
    pub timeout: Option<u64>,
}

impl Profile {
    fn token_sources(&self, kind: TokenKind) -> (Option<&str>, Option<&str>) {
        match kind {
            TokenKind::User => (self.user_token_env.as_deref(), self.user_token.as_deref()),
            TokenKind::Node => (self.node_token_env.as_deref(), self.node_token.as_deref()),
        }
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("io", "seeed", "wiolink").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("wiolink");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load a Config from `path` layered with `WIOLINK_*` environment variables.
///
/// Nested keys use a double underscore: `WIOLINK_DEFAULTS__REGION=cn`.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    debug!(path = %path.display(), "loading config");
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("WIOLINK_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(cfg, &config_path())
}

/// Serialize config to TOML and write it to `path`.
pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Token resolution ────────────────────────────────────────────────

/// Resolve a token from the profile's chain: named env var, then plaintext.
pub fn resolve_token(
    profile: &Profile,
    profile_name: &str,
    kind: TokenKind,
) -> Result<SecretString, ConfigError> {
    let (env_name, plaintext) = profile.token_sources(kind);

    // 1. Profile's *_token_env → env var lookup
    if let Some(env_name) = env_name {
        if let Ok(val) = std::env::var(env_name) {
            return Ok(SecretString::from(val));
        }
    }

    // 2. Plaintext in config
    if let Some(token) = plaintext {
        return Ok(SecretString::from(token.to_owned()));
    }

    Err(ConfigError::NoToken {
        kind,
        profile: profile_name.into(),
    })
}

// ── Client settings ─────────────────────────────────────────────────

/// Everything needed to construct a `WioClient`.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub region: Region,
    /// Overrides `region` when set.
    pub base_url: Option<Url>,
    pub transport: TransportConfig,
}

impl ClientSettings {
    /// Build the client these settings describe.
    pub fn build_client(&self) -> Result<WioClient, wiolink_api::Error> {
        match self.base_url {
            Some(ref url) => WioClient::with_base_url(url.as_str(), &self.transport),
            None => WioClient::for_region(self.region, &self.transport),
        }
    }
}

/// Build `ClientSettings` from a profile and global defaults.
pub fn profile_to_settings(
    profile: &Profile,
    defaults: &Defaults,
) -> Result<ClientSettings, ConfigError> {
    let base_url = profile
        .base_url
        .as_deref()
        .map(|raw| {
            raw.parse::<Url>().map_err(|_| ConfigError::Validation {
                field: "base_url".into(),
                reason: format!("invalid URL: {raw}"),
            })
        })
        .transpose()?;

    let tls = if profile.insecure.unwrap_or(false) {
        TlsMode::DangerAcceptInvalid
    } else if let Some(ref ca_path) = profile.ca_cert {
        TlsMode::CustomCa(ca_path.clone())
    } else {
        TlsMode::System
    };

    let timeout = Duration::from_secs(profile.timeout.unwrap_or(defaults.timeout));

    Ok(ClientSettings {
        region: profile.region.unwrap_or(defaults.region),
        base_url,
        transport: TransportConfig::default()
            .with_tls(tls)
            .with_timeout(timeout),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn default_config_has_default_profile_name() {
        let cfg = Config::default();
        assert_eq!(cfg.default_profile.as_deref(), Some("default"));
        assert_eq!(cfg.defaults.region, Region::Us);
        assert_eq!(cfg.defaults.timeout, 30);
    }

    #[test]
    fn plaintext_token() {
        let profile = Profile {
            node_token: Some("n-123".into()),
            ..Profile::default()
        };
        let token = resolve_token(&profile, "lab", TokenKind::Node).unwrap();
        assert_eq!(token.expose_secret(), "n-123");
    }

    #[test]
    fn missing_token_names_profile_and_kind() {
        let err = resolve_token(&Profile::default(), "lab", TokenKind::User).unwrap_err();
        assert_eq!(err.to_string(), "no user token configured for profile 'lab'");
    }

    #[test]
    fn settings_prefer_profile_values() {
        let profile = Profile {
            region: Some(Region::Cn),
            timeout: Some(5),
            insecure: Some(true),
            ..Profile::default()
        };
        let settings = profile_to_settings(&profile, &Defaults::default()).unwrap();
        assert_eq!(settings.region, Region::Cn);
        assert_eq!(settings.transport.timeout, Some(Duration::from_secs(5)));
        assert!(matches!(settings.transport.tls, TlsMode::DangerAcceptInvalid));
        assert!(settings.base_url.is_none());
    }

    #[test]
    fn settings_reject_bad_base_url() {
        let profile = Profile {
            base_url: Some("not a url".into()),
            ..Profile::default()
        };
        let err = profile_to_settings(&profile, &Defaults::default()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation { ref field, .. } if field == "base_url"));
    }

    #[test]
    fn settings_build_region_client() {
        let settings = profile_to_settings(&Profile::default(), &Defaults::default()).unwrap();
        let client = settings.build_client().unwrap();
        assert_eq!(client.base_url().as_str(), "https://us.wio.seeed.io/v1/");
    }
}
