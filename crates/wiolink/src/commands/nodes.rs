//! Node management command handlers.

use secrecy::ExposeSecret;
use serde_json::Value;

use wiolink_config::TokenKind;

use crate::cli::{NodesArgs, NodesCommand};
use crate::error::CliError;

use super::Context;

pub async fn handle(ctx: &Context<'_>, args: NodesArgs) -> Result<Value, CliError> {
    let token = ctx.token(TokenKind::User)?;
    let token = token.expose_secret();
    let nodes = ctx.client.node_management();

    Ok(match args.command {
        NodesCommand::Create { name, board } => nodes.create(token, &name, &board).await?,
        NodesCommand::List => nodes.list(token).await?,
        NodesCommand::Rename { node_sn, name } => nodes.rename(token, &name, &node_sn).await?,
        NodesCommand::Delete { node_sn } => nodes.delete(token, &node_sn).await?,
    })
}
