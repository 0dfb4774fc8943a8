//! Raw request command handlers.
//!
//! The token is optional here: `--token` or the profile's user token is
//! sent when available, otherwise the request goes out anonymously.

use secrecy::ExposeSecret;
use serde_json::Value;

use wiolink_config::TokenKind;

use crate::cli::{CustomArgs, CustomCommand};
use crate::config;
use crate::error::CliError;

use super::Context;

pub async fn handle(ctx: &Context<'_>, args: CustomArgs) -> Result<Value, CliError> {
    let secret = config::optional_token(ctx.global, &ctx.config, TokenKind::User);
    let token = secret.as_ref().map(ExposeSecret::expose_secret);
    let custom = ctx.client.custom();

    Ok(match args.command {
        CustomCommand::Head { path } => custom.head(token, &path).await?,
        CustomCommand::Get { path } => custom.get(token, &path).await?,
        CustomCommand::Post { path, data } => {
            custom.post(token, &path, parse_body(data.as_deref())?).await?
        }
        CustomCommand::Put { path, data } => {
            custom.put(token, &path, parse_body(data.as_deref())?).await?
        }
        CustomCommand::Delete { path } => custom.delete(token, &path).await?,
    })
}

fn parse_body(data: Option<&str>) -> Result<Option<Value>, CliError> {
    Ok(data.map(serde_json::from_str).transpose()?)
}
