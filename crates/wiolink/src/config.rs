//! CLI configuration -- thin wrapper around `wiolink_config` shared types.
//!
//! Adds resolution that respects `GlobalOpts` flag overrides
//! (--region, --base-url, --token, --timeout, --insecure).

use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use wiolink_api::{Region, TlsMode};
use wiolink_config::{ClientSettings, Profile, TokenKind};

use crate::cli::GlobalOpts;
use crate::error::CliError;

pub use wiolink_config::{Config, config_path, load_config, save_config};

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Translate the active profile + global flags into `ClientSettings`.
///
/// Flags take priority over profile values; a missing profile is fine as
/// long as the flags describe a server (the default region always does).
pub fn resolve_settings(global: &GlobalOpts, config: &Config) -> Result<ClientSettings, CliError> {
    let name = active_profile_name(global, config);
    let empty = Profile::default();
    let profile = config.profiles.get(&name).unwrap_or(&empty);

    let mut settings = wiolink_config::profile_to_settings(profile, &config.defaults)?;

    if let Some(ref region) = global.region {
        settings.region = region.parse::<Region>()?;
        // An explicit region wins over a profile's self-hosted URL.
        settings.base_url = None;
    }

    if let Some(ref raw) = global.base_url {
        let url = raw.parse::<Url>().map_err(|_| CliError::Validation {
            field: "base-url".into(),
            reason: format!("invalid URL: {raw}"),
        })?;
        settings.base_url = Some(url);
    }

    if let Some(secs) = global.timeout {
        settings.transport.timeout = Some(Duration::from_secs(secs));
    }

    if global.insecure {
        settings.transport.tls = TlsMode::DangerAcceptInvalid;
    }

    Ok(settings)
}

/// The token for a command: `--token` first, then the active profile.
pub fn require_token(
    global: &GlobalOpts,
    config: &Config,
    kind: TokenKind,
) -> Result<SecretString, CliError> {
    if let Some(ref token) = global.token {
        return Ok(SecretString::from(token.clone()));
    }

    let name = active_profile_name(global, config);
    match config.profiles.get(&name) {
        Some(profile) => Ok(wiolink_config::resolve_token(profile, &name, kind)?),
        None => Err(CliError::NoToken {
            kind,
            profile: name,
        }),
    }
}

/// Like [`require_token`] but absence is not an error.
pub fn optional_token(
    global: &GlobalOpts,
    config: &Config,
    kind: TokenKind,
) -> Option<SecretString> {
    require_token(global, config, kind).ok()
}
