// Grove driver metadata
//
// The driver catalogue is built server-side by scanning the firmware tree;
// these two calls read the result and the progress of the scan.

use serde_json::Value;

use crate::client::WioClient;
use crate::error::Error;
use crate::request::RequestSpec;

/// `scan/*` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct GroveDriver<'a> {
    client: &'a WioClient,
}

impl<'a> GroveDriver<'a> {
    pub(crate) fn new(client: &'a WioClient) -> Self {
        Self { client }
    }

    /// Every known grove driver with its methods and properties.
    ///
    /// `GET scan/drivers`
    pub async fn info(&self, user_token: &str) -> Result<Value, Error> {
        self.client
            .execute(Some(user_token), RequestSpec::get("scan/drivers"))
            .await
    }

    /// `GET scan/status`
    pub async fn scan_status(&self, user_token: &str) -> Result<Value, Error> {
        self.client
            .execute(Some(user_token), RequestSpec::get("scan/status"))
            .await
    }
}
