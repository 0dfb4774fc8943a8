//! Config command handlers. These never touch the network.

use serde_json::{Value, json};

use wiolink_api::Region;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config};
use crate::error::CliError;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<Option<Value>, CliError> {
    match args.command {
        ConfigCommand::Init {
            name,
            user_token,
            node_token,
        } => {
            let mut cfg = config::load_config()?;
            let region: Option<Region> = global
                .region
                .as_deref()
                .map(str::parse)
                .transpose()?;

            let profile = cfg.profiles.entry(name.clone()).or_default();
            if region.is_some() {
                profile.region = region;
            }
            if let Some(ref url) = global.base_url {
                profile.base_url = Some(url.clone());
            }
            if user_token.is_some() {
                profile.user_token = user_token;
            }
            if node_token.is_some() {
                profile.node_token = node_token;
            }
            if cfg.profiles.len() == 1 {
                cfg.default_profile = Some(name.clone());
            }

            config::save_config(&cfg)?;
            if !global.quiet {
                eprintln!(
                    "Profile '{name}' saved to {}",
                    config::config_path().display()
                );
            }
            Ok(None)
        }

        ConfigCommand::Show => Ok(Some(redacted(&config::load_config()?))),

        ConfigCommand::Path => Ok(Some(Value::String(
            config::config_path().display().to_string(),
        ))),
    }
}

/// The effective configuration with plaintext tokens masked.
fn redacted(cfg: &Config) -> Value {
    let mask = |t: Option<&String>| t.map(|_| "********");

    let profiles: serde_json::Map<String, Value> = cfg
        .profiles
        .iter()
        .map(|(name, p)| {
            (
                name.clone(),
                json!({
                    "region": p.region,
                    "base_url": p.base_url,
                    "user_token": mask(p.user_token.as_ref()),
                    "user_token_env": p.user_token_env,
                    "node_token": mask(p.node_token.as_ref()),
                    "node_token_env": p.node_token_env,
                    "ca_cert": p.ca_cert,
                    "insecure": p.insecure,
                    "timeout": p.timeout,
                }),
            )
        })
        .collect();

    json!({
        "default_profile": cfg.default_profile,
        "defaults": {
            "region": cfg.defaults.region,
            "output": cfg.defaults.output,
            "timeout": cfg.defaults.timeout,
        },
        "profiles": profiles,
    })
}
