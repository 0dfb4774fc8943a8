//! CLI error types with miette diagnostics.
//!
//! Maps `wiolink_api::Error` and `ConfigError` into user-facing errors
//! with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use wiolink_config::{ConfigError, TokenKind};

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the Wio server")]
    #[diagnostic(
        code(wiolink::connection_failed),
        help("Check your network connection and the selected region (--region us|cn).")
    )]
    ConnectionFailed {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Request timed out")]
    #[diagnostic(
        code(wiolink::timeout),
        help("Increase timeout with --timeout or try again later.")
    )]
    Timeout,

    #[error("TLS setup failed: {message}")]
    #[diagnostic(
        code(wiolink::tls_error),
        help("Check ca_cert in your profile, or use --insecure (-k) for test servers.")
    )]
    Tls { message: String },

    // ── Authentication ───────────────────────────────────────────────
    #[error("No {kind} token available for profile '{profile}'")]
    #[diagnostic(
        code(wiolink::no_token),
        help(
            "Pass --token, set WIOLINK_TOKEN, or store one with:\n\
             wiolink config init --{kind}-token <TOKEN>"
        )
    )]
    NoToken { kind: TokenKind, profile: String },

    #[error("The server rejected the token (HTTP {status})")]
    #[diagnostic(
        code(wiolink::unauthorized),
        help(
            "User tokens come from `wiolink user login`; node tokens from `wiolink nodes list`.\n\
             Server said: {body}"
        )
    )]
    Unauthorized { status: u16, body: String },

    // ── Server ───────────────────────────────────────────────────────
    #[error("Not found (HTTP 404): {body}")]
    #[diagnostic(code(wiolink::not_found))]
    NotFound { body: String },

    #[error("Server error (HTTP {status}): {body}")]
    #[diagnostic(code(wiolink::server_error))]
    Server { status: u16, body: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(wiolink::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error(transparent)]
    #[diagnostic(
        code(wiolink::config),
        help("Inspect the effective configuration with: wiolink config show")
    )]
    Config(Box<ConfigError>),

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON payload: {0}")]
    #[diagnostic(code(wiolink::json), help("Check the JSON input and try again."))]
    Json(#[from] serde_json::Error),

    #[error("YAML output failed: {0}")]
    #[diagnostic(code(wiolink::yaml))]
    Yaml(#[from] serde_yaml::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } | Self::Tls { .. } => exit_code::CONNECTION,
            Self::Timeout => exit_code::TIMEOUT,
            Self::NoToken { .. } | Self::Unauthorized { .. } => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NoToken { kind, profile } => Self::NoToken { kind, profile },
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            other => Self::Config(Box::new(other)),
        }
    }
}

// ── wiolink_api::Error → CliError mapping ────────────────────────────

impl From<wiolink_api::Error> for CliError {
    fn from(err: wiolink_api::Error) -> Self {
        use wiolink_api::Error as ApiError;

        match err {
            ApiError::InvalidRegion { region } => Self::Validation {
                field: "region".into(),
                reason: format!("expected 'us' or 'cn', got '{region}'"),
            },
            ApiError::InvalidUrl(e) => Self::Validation {
                field: "url".into(),
                reason: e.to_string(),
            },
            ApiError::InvalidToken { message } => Self::Validation {
                field: "token".into(),
                reason: message,
            },
            ApiError::InvalidBody { message } => Self::Validation {
                field: "body".into(),
                reason: message,
            },
            ApiError::Tls(message) => Self::Tls { message },
            ApiError::Transport(e) if e.is_timeout() => Self::Timeout,
            ApiError::Transport(e) => Self::ConnectionFailed {
                source: Box::new(e),
            },
            ApiError::Server { status, body } => {
                let body = body.to_string();
                match status {
                    401 | 403 => Self::Unauthorized { status, body },
                    404 => Self::NotFound { body },
                    _ => Self::Server { status, body },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn server_statuses_map_to_exit_codes() {
        let unauthorized: CliError = wiolink_api::Error::Server {
            status: 403,
            body: json!({ "error": "Please login" }),
        }
        .into();
        assert_eq!(unauthorized.exit_code(), exit_code::AUTH);

        let missing: CliError = wiolink_api::Error::Server {
            status: 404,
            body: json!({ "error": "no such node" }),
        }
        .into();
        assert_eq!(missing.exit_code(), exit_code::NOT_FOUND);

        let other: CliError = wiolink_api::Error::Server {
            status: 400,
            body: json!({ "code": 1001, "message": "x" }),
        }
        .into();
        assert_eq!(other.exit_code(), exit_code::GENERAL);
        assert_eq!(
            other.to_string(),
            r#"Server error (HTTP 400): {"code":1001,"message":"x"}"#
        );
    }

    #[test]
    fn invalid_region_is_usage_error() {
        let err: CliError = wiolink_api::Error::InvalidRegion {
            region: "eu".into(),
        }
        .into();
        assert_eq!(err.exit_code(), exit_code::USAGE);
    }
}
