// Node management endpoints
//
// Creating, listing, renaming and deleting nodes on a user account.
// All calls take the user token.

use serde_json::{Value, json};
use tracing::debug;

use crate::client::WioClient;
use crate::error::Error;
use crate::request::RequestSpec;

/// `nodes/*` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct NodeManagement<'a> {
    client: &'a WioClient,
}

impl<'a> NodeManagement<'a> {
    pub(crate) fn new(client: &'a WioClient) -> Self {
        Self { client }
    }

    /// Create a node for a board type (e.g. `"Wio Link v1.0"`).
    ///
    /// `POST nodes/create` with `{"name", "board"}`
    pub async fn create(
        &self,
        user_token: &str,
        name: &str,
        board_type: &str,
    ) -> Result<Value, Error> {
        debug!(name, board_type, "creating node");
        let body = json!({ "name": name, "board": board_type });
        self.client
            .execute(Some(user_token), RequestSpec::post("nodes/create", Some(body)))
            .await
    }

    /// `GET nodes/list`
    pub async fn list(&self, user_token: &str) -> Result<Value, Error> {
        self.client
            .execute(Some(user_token), RequestSpec::get("nodes/list"))
            .await
    }

    /// `POST nodes/rename` with `{"name", "node_sn"}`
    pub async fn rename(
        &self,
        user_token: &str,
        new_name: &str,
        node_sn: &str,
    ) -> Result<Value, Error> {
        debug!(node_sn, new_name, "renaming node");
        let body = json!({ "name": new_name, "node_sn": node_sn });
        self.client
            .execute(Some(user_token), RequestSpec::post("nodes/rename", Some(body)))
            .await
    }

    /// `POST nodes/delete` with `{"node_sn"}`
    pub async fn delete(&self, user_token: &str, node_sn: &str) -> Result<Value, Error> {
        debug!(node_sn, "deleting node");
        let body = json!({ "node_sn": node_sn });
        self.client
            .execute(Some(user_token), RequestSpec::post("nodes/delete", Some(body)))
            .await
    }
}
