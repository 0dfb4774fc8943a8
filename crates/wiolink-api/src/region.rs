use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::Error;

/// Host shared by every regional server; the region is its subdomain.
pub const SERVICE_HOST: &str = "wio.seeed.io";

/// API version prefix appended to every regional base URL.
pub const API_PREFIX: &str = "v1";

/// The server location a client talks to.
///
/// Chosen once at construction and fixed for the lifetime of the client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Region {
    /// International server (`us.wio.seeed.io`) -- the default.
    #[default]
    Us,
    /// Mainland China server (`cn.wio.seeed.io`).
    Cn,
}

impl Region {
    /// Every selectable region, in display order.
    pub const ALL: [Self; 2] = [Self::Us, Self::Cn];

    /// The subdomain selector for this region.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Us => "us",
            Self::Cn => "cn",
        }
    }

    /// Resolve an optional, case-insensitive selector.
    ///
    /// `None` and the empty string pick the default region; any other
    /// value must name a known region.
    pub fn resolve(selector: Option<&str>) -> Result<Self, Error> {
        match selector {
            None | Some("") => Ok(Self::default()),
            Some(s) => s.parse(),
        }
    }

    /// `https://<region>.wio.seeed.io/v1/`
    pub fn base_url(self) -> Url {
        let raw = format!("https://{}.{SERVICE_HOST}/{API_PREFIX}/", self.as_str());
        // Built from two fixed components, so always a valid absolute URL.
        Url::parse(&raw).unwrap_or_else(|e| unreachable!("static base URL {raw}: {e}"))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == normalized)
            .ok_or(Error::InvalidRegion { region: normalized })
    }
}

impl TryFrom<String> for Region {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::resolve(Some(&s))
    }
}
