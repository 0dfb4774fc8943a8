//! Cotf project command handlers.

use secrecy::ExposeSecret;
use serde_json::Value;

use wiolink_config::TokenKind;

use crate::cli::{CotfArgs, CotfCommand};
use crate::error::CliError;

use super::{Context, read_json_file};

pub async fn handle(ctx: &Context<'_>, args: CotfArgs) -> Result<Value, CliError> {
    let token = ctx.token(TokenKind::Node)?;
    let token = token.expose_secret();
    let cotf = ctx.client.cotf();

    Ok(match args.command {
        CotfCommand::Upload { file } => cotf.upload_ulb(token, read_json_file(&file)?).await?,
        CotfCommand::Download => cotf.download_ulb(token).await?,
        CotfCommand::GetVar { name } => cotf.get_variable(token, &name).await?,
        CotfCommand::SetVar { name, value } => cotf.set_variable(token, &name, &value).await?,
        CotfCommand::Call { name, arg } => cotf.call_function(token, &name, arg).await?,
    })
}
