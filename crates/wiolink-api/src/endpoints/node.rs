// Node I/O and OTA endpoints
//
// Everything here authenticates with a node token (not the user token):
// reading and writing grove properties, power management, OTA firmware
// builds and node configuration.

use serde_json::{Value, json};
use tracing::debug;

use crate::client::WioClient;
use crate::error::Error;
use crate::request::RequestSpec;

/// `node/*` and `ota/*` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Node<'a> {
    client: &'a WioClient,
}

impl<'a> Node<'a> {
    pub(crate) fn new(client: &'a WioClient) -> Self {
        Self { client }
    }

    /// The node's API description: every grove instance and its
    /// readable/writable properties.
    ///
    /// `GET node/.well-known`
    pub async fn well_known(&self, node_token: &str) -> Result<Value, Error> {
        self.client
            .execute(Some(node_token), RequestSpec::get("node/.well-known"))
            .await
    }

    /// Read a grove property, e.g. `read(tok, "GroveTempHumD0", "temperature", &[])`.
    ///
    /// `GET node/{grove}/{property}/{args...}` (form encoded). The trailing
    /// arguments are joined with `/` verbatim.
    pub async fn read(
        &self,
        node_token: &str,
        grove_instance: &str,
        property: &str,
        args: &[&str],
    ) -> Result<Value, Error> {
        let path = io_path(grove_instance, property, args);
        self.client
            .execute(Some(node_token), RequestSpec::get(path).form())
            .await
    }

    /// Write a grove property or call a grove method.
    ///
    /// `POST node/{grove}/{method}/{args...}` (form encoded, empty body)
    pub async fn write(
        &self,
        node_token: &str,
        grove_instance: &str,
        method: &str,
        args: &[&str],
    ) -> Result<Value, Error> {
        let path = io_path(grove_instance, method, args);
        debug!(grove_instance, method, "writing grove");
        self.client
            .execute(Some(node_token), RequestSpec::post(path, None).form())
            .await
    }

    /// Put the node into deep sleep.
    ///
    /// `POST node/pm/sleep/{seconds}`
    pub async fn sleep(&self, node_token: &str, seconds: u32) -> Result<Value, Error> {
        debug!(seconds, "putting node to sleep");
        self.client
            .execute(
                Some(node_token),
                RequestSpec::post(format!("node/pm/sleep/{seconds}"), None),
            )
            .await
    }

    /// `GET node/resources`
    pub async fn resources(&self, node_token: &str) -> Result<Value, Error> {
        self.client
            .execute(Some(node_token), RequestSpec::get("node/resources"))
            .await
    }

    /// Start an OTA firmware build from a connection description
    /// (`{"board_name", "connections": [...]}`).
    ///
    /// `POST ota/trigger[?build_phase=N]`
    pub async fn ota_trigger(
        &self,
        node_token: &str,
        data: Option<Value>,
        build_phase: Option<u32>,
    ) -> Result<Value, Error> {
        // A zero phase is sent like no phase at all.
        let path = match build_phase.filter(|&phase| phase != 0) {
            Some(phase) => format!("ota/trigger?build_phase={phase}"),
            None => "ota/trigger".to_owned(),
        };
        debug!(?build_phase, "triggering OTA");
        self.client
            .execute(Some(node_token), RequestSpec::post(path, data))
            .await
    }

    /// `GET ota/status`
    pub async fn ota_status(&self, node_token: &str) -> Result<Value, Error> {
        self.client
            .execute(Some(node_token), RequestSpec::get("ota/status"))
            .await
    }

    /// `GET node/config`
    pub async fn config(&self, node_token: &str) -> Result<Value, Error> {
        self.client
            .execute(Some(node_token), RequestSpec::get("node/config"))
            .await
    }

    /// Point the node at another data exchange server.
    ///
    /// `POST node/setting/dataxserver/{address}` with `{"dataxurl"}`
    pub async fn change_data_exchange_server(
        &self,
        node_token: &str,
        address: &str,
        dataxurl: &str,
    ) -> Result<Value, Error> {
        debug!(address, dataxurl, "changing data exchange server");
        let body = json!({ "dataxurl": dataxurl });
        self.client
            .execute(
                Some(node_token),
                RequestSpec::post(format!("node/setting/dataxserver/{address}"), Some(body)),
            )
            .await
    }
}

/// `node/{grove}/{member}/{args joined by /}`
///
/// With no arguments the path keeps its trailing `/`.
fn io_path(grove_instance: &str, member: &str, args: &[&str]) -> String {
    format!("node/{grove_instance}/{member}/{}", args.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_path_joins_arguments() {
        assert_eq!(
            io_path("grove1", "temperature", &["c"]),
            "node/grove1/temperature/c"
        );
        assert_eq!(
            io_path("GroveServoD1", "angle", &["90", "slow"]),
            "node/GroveServoD1/angle/90/slow"
        );
        assert_eq!(io_path("GroveLedD0", "onoff", &[]), "node/GroveLedD0/onoff/");
    }
}
