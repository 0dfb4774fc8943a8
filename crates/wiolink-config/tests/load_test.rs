#![allow(clippy::unwrap_used)]
// Loading and saving configuration files.

use std::path::Path;

use figment::Jail;
use secrecy::ExposeSecret;

use wiolink_api::Region;
use wiolink_config::{
    Config, Profile, TokenKind, load_config_from, profile_to_settings, resolve_token,
    save_config_to,
};

const SAMPLE: &str = r#"
default_profile = "lab"

[defaults]
region = "cn"
timeout = 10

[profiles.lab]
user_token = "u-plain"
node_token_env = "LAB_NODE_TOKEN"

[profiles.home]
region = "us"
base_url = "https://wio.example.org/v1/"
timeout = 3
"#;

#[test]
fn test_load_profiles_from_file() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", SAMPLE)?;

        let cfg = load_config_from(Path::new("config.toml")).map_err(|e| e.to_string())?;

        assert_eq!(cfg.default_profile.as_deref(), Some("lab"));
        assert_eq!(cfg.defaults.region, Region::Cn);
        assert_eq!(cfg.defaults.timeout, 10);
        assert_eq!(cfg.defaults.output, "json");
        assert_eq!(cfg.profiles.len(), 2);

        let home = &cfg.profiles["home"];
        let settings = profile_to_settings(home, &cfg.defaults).map_err(|e| e.to_string())?;
        assert_eq!(
            settings.base_url.as_ref().map(url::Url::as_str),
            Some("https://wio.example.org/v1/")
        );
        assert_eq!(settings.transport.timeout.map(|t| t.as_secs()), Some(3));
        Ok(())
    });
}

#[test]
fn test_env_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", SAMPLE)?;
        jail.set_env("WIOLINK_DEFAULT_PROFILE", "home");
        jail.set_env("WIOLINK_DEFAULTS__REGION", "us");

        let cfg = load_config_from(Path::new("config.toml")).map_err(|e| e.to_string())?;

        assert_eq!(cfg.default_profile.as_deref(), Some("home"));
        assert_eq!(cfg.defaults.region, Region::Us);
        Ok(())
    });
}

#[test]
fn test_region_names_are_case_insensitive() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[profiles.lab]
user_token = "u-plain"

[profiles.cn]
region = "CN"
"#,
        )?;
        jail.set_env("WIOLINK_DEFAULTS__REGION", "Cn");

        let cfg = load_config_from(Path::new("config.toml")).map_err(|e| e.to_string())?;

        assert_eq!(cfg.profiles["cn"].region, Some(Region::Cn));
        assert_eq!(cfg.defaults.region, Region::Cn);
        Ok(())
    });
}

#[test]
fn test_token_env_takes_priority() {
    Jail::expect_with(|jail| {
        jail.set_env("LAB_NODE_TOKEN", "n-from-env");

        let profile = Profile {
            node_token: Some("n-plain".into()),
            node_token_env: Some("LAB_NODE_TOKEN".into()),
            ..Profile::default()
        };
        let token = resolve_token(&profile, "lab", TokenKind::Node).map_err(|e| e.to_string())?;
        assert_eq!(token.expose_secret(), "n-from-env");
        Ok(())
    });
}

#[test]
fn test_missing_file_yields_defaults() {
    Jail::expect_with(|_jail| {
        let cfg = load_config_from(Path::new("absent.toml")).map_err(|e| e.to_string())?;
        assert_eq!(cfg.default_profile.as_deref(), Some("default"));
        assert!(cfg.profiles.is_empty());
        Ok(())
    });
}

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut cfg = Config::default();
    cfg.profiles.insert(
        "default".into(),
        Profile {
            region: Some(Region::Cn),
            user_token: Some("u-1".into()),
            ..Profile::default()
        },
    );
    save_config_to(&cfg, &path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("region = \"cn\""), "unexpected TOML:\n{written}");

    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded.profiles["default"].region, Some(Region::Cn));
    assert_eq!(loaded.profiles["default"].user_token.as_deref(), Some("u-1"));
}
