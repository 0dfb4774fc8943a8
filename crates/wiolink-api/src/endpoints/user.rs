// User account endpoints
//
// Sign-up, login and password management. Only `change_password` needs a
// user token; the rest are anonymous.

use serde_json::{Value, json};
use tracing::debug;

use crate::client::WioClient;
use crate::error::Error;
use crate::request::RequestSpec;

/// `user/*` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct User<'a> {
    client: &'a WioClient,
}

impl<'a> User<'a> {
    pub(crate) fn new(client: &'a WioClient) -> Self {
        Self { client }
    }

    /// Register a new account.
    ///
    /// `POST user/create` with `{"email", "password"}`
    pub async fn create(&self, email: &str, password: &str) -> Result<Value, Error> {
        debug!(email, "creating user");
        let body = json!({ "email": email, "password": password });
        self.client
            .execute(None, RequestSpec::post("user/create", Some(body)))
            .await
    }

    /// Change the password of the account owning `user_token`.
    ///
    /// `POST user/changepassword` with `{"password"}`
    pub async fn change_password(
        &self,
        user_token: &str,
        new_password: &str,
    ) -> Result<Value, Error> {
        let body = json!({ "password": new_password });
        self.client
            .execute(
                Some(user_token),
                RequestSpec::post("user/changepassword", Some(body)),
            )
            .await
    }

    /// Ask the server to send a password reset mail.
    ///
    /// `POST user/retrievepassword` with `{"email"}`
    pub async fn retrieve_password(&self, email: &str) -> Result<Value, Error> {
        debug!(email, "requesting password reset");
        let body = json!({ "email": email });
        self.client
            .execute(None, RequestSpec::post("user/retrievepassword", Some(body)))
            .await
    }

    /// Log in. The response carries the user token.
    ///
    /// `POST user/login` with `{"email", "password"}`
    pub async fn login(&self, email: &str, password: &str) -> Result<Value, Error> {
        debug!(email, "logging in");
        let body = json!({ "email": email, "password": password });
        self.client
            .execute(None, RequestSpec::post("user/login", Some(body)))
            .await
    }
}
