// Wio Link REST client
//
// Wraps `reqwest::Client` with base-URL resolution, uniform header
// construction, and response unwrapping. Endpoint groups (user, nodes,
// node, cotf, ...) live in `endpoints/` as thin views over `execute`,
// keeping this module focused on transport mechanics.

use serde_json::Value;
use tracing::{debug, trace};
use url::Url;

use crate::endpoints::{Boards, Cotf, Custom, GroveDriver, Node, NodeManagement, User};
use crate::error::Error;
use crate::region::Region;
use crate::request::{Encoding, RequestSpec, request_headers};
use crate::transport::TransportConfig;

/// Async client for the Wio Link cloud API.
///
/// Stateless beyond its base URL and the connection pool: tokens are passed
/// per call and never stored. Safe to share across tasks; concurrent calls
/// only share the underlying `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct WioClient {
    http: reqwest::Client,
    base_url: Url,
    region: Option<Region>,
}

impl WioClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build a client for a region selector (`"us"`, `"cn"`, any case).
    ///
    /// `None` selects the default region. Unknown selectors fail here,
    /// before any network activity.
    pub fn new(region: Option<&str>) -> Result<Self, Error> {
        Self::for_region(Region::resolve(region)?, &TransportConfig::default())
    }

    /// Build a client for a resolved region with a custom transport.
    pub fn for_region(region: Region, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        debug!(%region, "building client");
        Ok(Self {
            http,
            base_url: region.base_url(),
            region: Some(region),
        })
    }

    /// Build a client against an arbitrary base URL (self-hosted server).
    pub fn with_base_url(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Self::from_reqwest(base_url, http)
    }

    /// Wrap an existing `reqwest::Client` (caller manages default headers).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        Ok(Self {
            http,
            base_url: Self::normalize_base_url(base_url)?,
            region: None,
        })
    }

    /// Make sure the base ends with `/` so relative paths join beneath it.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }

    // ── Accessors ────────────────────────────────────────────────────

    /// The resolved base URL every path is joined onto.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The region this client was built for, if built from one.
    pub fn region(&self) -> Option<Region> {
        self.region
    }

    /// The underlying HTTP client.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    // ── Endpoint groups ──────────────────────────────────────────────

    pub fn user(&self) -> User<'_> {
        User::new(self)
    }

    pub fn node_management(&self) -> NodeManagement<'_> {
        NodeManagement::new(self)
    }

    pub fn grove_driver(&self) -> GroveDriver<'_> {
        GroveDriver::new(self)
    }

    pub fn boards(&self) -> Boards<'_> {
        Boards::new(self)
    }

    pub fn node(&self) -> Node<'_> {
        Node::new(self)
    }

    pub fn cotf(&self) -> Cotf<'_> {
        Cotf::new(self)
    }

    pub fn custom(&self) -> Custom<'_> {
        Custom::new(self)
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Join a path (e.g. `"nodes/list"`) onto the base URL.
    ///
    /// A leading `/` is dropped so the path stays under the API prefix.
    pub(crate) fn url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    /// Send a GET.
    pub async fn get(
        &self,
        token: Option<&str>,
        path: &str,
        using_form_encoding: bool,
    ) -> Result<Value, Error> {
        let spec =
            RequestSpec::get(path).with_encoding(Encoding::from_form_flag(using_form_encoding));
        self.execute(token, spec).await
    }

    /// Send a POST. `None` sends an empty object as the body.
    pub async fn post(
        &self,
        token: Option<&str>,
        path: &str,
        body: Option<Value>,
        using_form_encoding: bool,
    ) -> Result<Value, Error> {
        let encoding = Encoding::from_form_flag(using_form_encoding);
        let spec = RequestSpec::post(path, body).with_encoding(encoding);
        self.execute(token, spec).await
    }

    /// Issue exactly one request described by `spec`.
    pub async fn execute(&self, token: Option<&str>, spec: RequestSpec) -> Result<Value, Error> {
        let url = self.url(&spec.path)?;
        debug!("{} {url}", spec.method);

        let mut builder = self
            .http
            .request(spec.method, url)
            .headers(request_headers(token, spec.encoding)?);
        if let Some(ref body) = spec.body {
            builder = builder.body(spec.encoding.encode(body)?);
        }

        let resp = builder.send().await?;
        handle_response(resp).await
    }
}

// ── Response handling ────────────────────────────────────────────────

async fn handle_response(resp: reqwest::Response) -> Result<Value, Error> {
    let status = resp.status();
    let body = resp.text().await?;
    trace!(status = status.as_u16(), len = body.len(), "response received");

    if status.is_success() {
        Ok(decode_success(body))
    } else {
        debug!(status = status.as_u16(), "server rejected request");
        Err(Error::Server {
            status: status.as_u16(),
            body: decode_error_body(&body),
        })
    }
}

/// A 2xx body is handed back as sent: JSON if it parses, else the raw text.
fn decode_success(body: String) -> Value {
    if body.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(&body).unwrap_or(Value::String(body))
}

/// Error bodies are surfaced as sent: JSON if it parses, else the raw text.
fn decode_error_body(body: &str) -> Value {
    if body.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_owned()))
}
