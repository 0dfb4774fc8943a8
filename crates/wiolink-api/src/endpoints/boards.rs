use serde_json::Value;

use crate::client::WioClient;
use crate::error::Error;
use crate::request::RequestSpec;

/// `boards/*` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Boards<'a> {
    client: &'a WioClient,
}

impl<'a> Boards<'a> {
    pub(crate) fn new(client: &'a WioClient) -> Self {
        Self { client }
    }

    /// Supported board types and their grove interfaces.
    ///
    /// `GET boards/list`
    pub async fn list(&self, user_token: &str) -> Result<Value, Error> {
        self.client
            .execute(Some(user_token), RequestSpec::get("boards/list"))
            .await
    }
}
