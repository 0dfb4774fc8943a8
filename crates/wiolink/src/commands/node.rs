//! Node I/O and OTA command handlers.

use secrecy::ExposeSecret;
use serde_json::Value;

use wiolink_config::TokenKind;

use crate::cli::{NodeArgs, NodeCommand};
use crate::error::CliError;

use super::{Context, read_json_file};

pub async fn handle(ctx: &Context<'_>, args: NodeArgs) -> Result<Value, CliError> {
    let token = ctx.token(TokenKind::Node)?;
    let token = token.expose_secret();
    let node = ctx.client.node();

    Ok(match args.command {
        NodeCommand::WellKnown => node.well_known(token).await?,
        NodeCommand::Read {
            grove,
            property,
            args,
        } => {
            let args: Vec<&str> = args.iter().map(String::as_str).collect();
            node.read(token, &grove, &property, &args).await?
        }
        NodeCommand::Write {
            grove,
            method,
            args,
        } => {
            let args: Vec<&str> = args.iter().map(String::as_str).collect();
            node.write(token, &grove, &method, &args).await?
        }
        NodeCommand::Sleep { seconds } => node.sleep(token, seconds).await?,
        NodeCommand::Resources => node.resources(token).await?,
        NodeCommand::OtaTrigger { file, build_phase } => {
            let data = file.as_deref().map(read_json_file).transpose()?;
            node.ota_trigger(token, data, build_phase).await?
        }
        NodeCommand::OtaStatus => node.ota_status(token).await?,
        NodeCommand::Config => node.config(token).await?,
        NodeCommand::SetDataxServer { address, dataxurl } => {
            node.change_data_exchange_server(token, &address, &dataxurl)
                .await?
        }
    })
}
