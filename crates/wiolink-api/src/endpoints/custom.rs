// Raw passthrough for endpoints the other groups don't model.
//
// Same header handling as every other group; the token is optional and is
// sent whenever the caller supplies one.

use serde_json::Value;

use crate::client::WioClient;
use crate::error::Error;
use crate::request::RequestSpec;

/// Arbitrary requests under the client's base URL.
#[derive(Debug, Clone, Copy)]
pub struct Custom<'a> {
    client: &'a WioClient,
}

impl<'a> Custom<'a> {
    pub(crate) fn new(client: &'a WioClient) -> Self {
        Self { client }
    }

    /// The body of a HEAD response is always empty, so this yields `Null`
    /// on success.
    pub async fn head(&self, token: Option<&str>, path: &str) -> Result<Value, Error> {
        self.client.execute(token, RequestSpec::head(path)).await
    }

    pub async fn get(&self, token: Option<&str>, path: &str) -> Result<Value, Error> {
        self.client.execute(token, RequestSpec::get(path)).await
    }

    pub async fn post(
        &self,
        token: Option<&str>,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, Error> {
        self.client.execute(token, RequestSpec::post(path, body)).await
    }

    pub async fn put(
        &self,
        token: Option<&str>,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, Error> {
        self.client.execute(token, RequestSpec::put(path, body)).await
    }

    pub async fn delete(&self, token: Option<&str>, path: &str) -> Result<Value, Error> {
        self.client.execute(token, RequestSpec::delete(path)).await
    }
}
