use thiserror::Error;

/// Top-level error type for the `wiolink-api` crate.
///
/// Construction problems are reported synchronously; everything else comes
/// back from a single request. Server-reported errors carry the decoded
/// body verbatim -- this crate never classifies the platform's error codes.
#[derive(Debug, Error)]
pub enum Error {
    // ── Construction ────────────────────────────────────────────────
    /// The region selector is not one of the known server locations.
    #[error("Invalid server location: \"{region}\"")]
    InvalidRegion { region: String },

    /// Base URL parsing failed, or a path could not be joined onto it.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The HTTP client could not be built (TLS backend, CA certificate).
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Request ─────────────────────────────────────────────────────
    /// The token contains bytes that cannot go into an HTTP header.
    #[error("Invalid token: {message}")]
    InvalidToken { message: String },

    /// The request body could not be serialized for the wire.
    #[error("Invalid request body: {message}")]
    InvalidBody { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// No response was obtained (connection refused, DNS, timeout).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    // ── Server ──────────────────────────────────────────────────────
    /// Non-success HTTP status. `body` is the decoded error payload:
    /// JSON when the server sent JSON, the raw text otherwise, `Null`
    /// when the body was empty.
    #[error("Server error (HTTP {status}): {body}")]
    Server {
        status: u16,
        body: serde_json::Value,
    },
}

impl Error {
    /// The server's decoded error payload, if this is a server error.
    pub fn server_body(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Server { body, .. } => Some(body),
            _ => None,
        }
    }

    /// The HTTP status of a server error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` if this is a transient error worth retrying.
    ///
    /// The client itself never retries; this is a hint for callers.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Server { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns `true` if the server rejected the token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }
}
