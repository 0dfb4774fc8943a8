// Request templates and per-call header construction.
//
// Every endpoint is described by a `RequestSpec` value; the client turns it
// into exactly one HTTP exchange. Keeping the headers here means every
// group gets identical auth/content-type handling.

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::{Map, Value};
use url::form_urlencoded;

use crate::error::Error;

/// Scheme marker placed in front of the token in the `Authorization` header.
pub const AUTH_SCHEME: &str = "token";

/// How a request body is encoded, and which `Content-Type` is announced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Encoding {
    /// `application/json`
    #[default]
    Json,
    /// `application/x-www-form-urlencoded`
    Form,
}

impl Encoding {
    pub fn content_type(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Form => "application/x-www-form-urlencoded",
        }
    }

    /// Serialize a body for the wire in this encoding.
    pub fn encode(self, body: &Value) -> Result<Vec<u8>, Error> {
        match self {
            Self::Json => serde_json::to_vec(body).map_err(|e| Error::InvalidBody {
                message: e.to_string(),
            }),
            Self::Form => Ok(encode_form(body).into_bytes()),
        }
    }

    /// `true` selects form encoding.
    pub fn from_form_flag(using_form_encoding: bool) -> Self {
        if using_form_encoding {
            Self::Form
        } else {
            Self::Json
        }
    }
}

/// One request to issue: verb, path relative to the base URL, body, encoding.
///
/// Lives only for the duration of a single call.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
    pub encoding: Encoding,
}

impl RequestSpec {
    fn new(method: Method, path: impl Into<String>, body: Option<Value>) -> Self {
        Self {
            method,
            path: path.into(),
            body,
            encoding: Encoding::Json,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path, None)
    }

    /// A POST. A missing body becomes an empty object, never an absent body.
    pub fn post(path: impl Into<String>, body: Option<Value>) -> Self {
        Self::new(Method::POST, path, Some(body.unwrap_or_else(empty_object)))
    }

    /// A PUT. Like [`post`](Self::post), a missing body becomes `{}`.
    pub fn put(path: impl Into<String>, body: Option<Value>) -> Self {
        Self::new(Method::PUT, path, Some(body.unwrap_or_else(empty_object)))
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path, None)
    }

    pub fn head(path: impl Into<String>) -> Self {
        Self::new(Method::HEAD, path, None)
    }

    /// Switch this request to form encoding.
    pub fn form(mut self) -> Self {
        self.encoding = Encoding::Form;
        self
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

/// Form-encode a JSON body.
///
/// Nested keys use bracket notation (`a[b]=1`, `list[0]=x`); a top-level
/// array is keyed by index. A bare scalar is sent as its text.
fn encode_form(body: &Value) -> String {
    if !matches!(body, Value::Object(_) | Value::Array(_)) {
        return scalar_text(body);
    }
    let mut pairs = Vec::new();
    flatten_form(None, body, &mut pairs);
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

fn flatten_form(prefix: Option<&str>, value: &Value, pairs: &mut Vec<(String, String)>) {
    let key = |name: &str| match prefix {
        Some(prefix) => format!("{prefix}[{name}]"),
        None => name.to_owned(),
    };
    match value {
        Value::Object(map) => {
            for (name, nested) in map {
                flatten_form(Some(&key(name)), nested, pairs);
            }
        }
        Value::Array(items) => {
            for (index, nested) in items.iter().enumerate() {
                flatten_form(Some(&key(&index.to_string())), nested, pairs);
            }
        }
        scalar => pairs.push((prefix.unwrap_or_default().to_owned(), scalar_text(scalar))),
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Per-call headers: `Authorization` iff a token is given, and always a
/// `Content-Type` matching the encoding.
pub fn request_headers(token: Option<&str>, encoding: Encoding) -> Result<HeaderMap, Error> {
    let mut headers = HeaderMap::new();

    if let Some(token) = token {
        let mut value = HeaderValue::from_str(&format!("{AUTH_SCHEME} {token}")).map_err(|e| {
            Error::InvalidToken {
                message: format!("invalid authorization header value: {e}"),
            }
        })?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static(encoding.content_type()),
    );

    Ok(headers)
}
