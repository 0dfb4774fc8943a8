//! User account command handlers.

use secrecy::ExposeSecret;
use serde_json::Value;

use wiolink_config::TokenKind;

use crate::cli::{UserArgs, UserCommand};
use crate::error::CliError;

use super::Context;

pub async fn handle(ctx: &Context<'_>, args: UserArgs) -> Result<Value, CliError> {
    let user = ctx.client.user();
    Ok(match args.command {
        UserCommand::Create { email, password } => user.create(&email, &password).await?,
        UserCommand::Login { email, password } => user.login(&email, &password).await?,
        UserCommand::RetrievePassword { email } => user.retrieve_password(&email).await?,
        UserCommand::ChangePassword { new_password } => {
            let token = ctx.token(TokenKind::User)?;
            user.change_password(token.expose_secret(), &new_password)
                .await?
        }
    })
}
