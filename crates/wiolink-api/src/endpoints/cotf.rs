// COTF project facade
//
// Upload/download of the node's ULB project plus access to the variables
// and functions that project exposes.

use serde_json::{Value, json};
use tracing::debug;

use crate::client::WioClient;
use crate::error::Error;
use crate::request::RequestSpec;

/// `cotf/*` and `node/variable|function/*` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Cotf<'a> {
    client: &'a WioClient,
}

impl<'a> Cotf<'a> {
    pub(crate) fn new(client: &'a WioClient) -> Self {
        Self { client }
    }

    /// `POST cotf/project` with the project document as body.
    pub async fn upload_ulb(&self, node_token: &str, data: Value) -> Result<Value, Error> {
        debug!("uploading ULB project");
        self.client
            .execute(Some(node_token), RequestSpec::post("cotf/project", Some(data)))
            .await
    }

    /// `GET cotf/project`
    pub async fn download_ulb(&self, node_token: &str) -> Result<Value, Error> {
        self.client
            .execute(Some(node_token), RequestSpec::get("cotf/project"))
            .await
    }

    /// `GET node/variable/{name}`
    pub async fn get_variable(&self, node_token: &str, name: &str) -> Result<Value, Error> {
        self.client
            .execute(Some(node_token), RequestSpec::get(format!("node/variable/{name}")))
            .await
    }

    /// Set a variable. The value travels in the path; the body is `{}`.
    ///
    /// `POST node/variable/{name}/{value}`
    pub async fn set_variable(
        &self,
        node_token: &str,
        name: &str,
        value: &str,
    ) -> Result<Value, Error> {
        debug!(name, value, "setting variable");
        self.client
            .execute(
                Some(node_token),
                RequestSpec::post(format!("node/variable/{name}/{value}"), None),
            )
            .await
    }

    /// `POST node/function/{name}` with `{"arg"}`
    pub async fn call_function(
        &self,
        node_token: &str,
        name: &str,
        arg: impl Into<Value>,
    ) -> Result<Value, Error> {
        debug!(name, "calling function");
        let arg: Value = arg.into();
        let body = json!({ "arg": arg });
        self.client
            .execute(
                Some(node_token),
                RequestSpec::post(format!("node/function/{name}"), Some(body)),
            )
            .await
    }
}
