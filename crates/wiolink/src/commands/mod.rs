//! Command handlers. Each returns the decoded payload to print.

pub mod config_cmd;
pub mod cotf;
pub mod custom;
pub mod node;
pub mod nodes;
pub mod user;

use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use wiolink_api::WioClient;
use wiolink_config::TokenKind;

use crate::cli::{BoardsCommand, Command, DriversCommand, GlobalOpts};
use crate::config::{self, Config};
use crate::error::CliError;

/// What every request handler needs.
pub struct Context<'a> {
    pub client: WioClient,
    pub config: Config,
    pub global: &'a GlobalOpts,
}

impl Context<'_> {
    pub fn token(&self, kind: TokenKind) -> Result<SecretString, CliError> {
        config::require_token(self.global, &self.config, kind)
    }
}

/// Route a request command to its handler.
pub async fn dispatch(cmd: Command, ctx: &Context<'_>) -> Result<Value, CliError> {
    match cmd {
        Command::User(args) => user::handle(ctx, args).await,
        Command::Nodes(args) => nodes::handle(ctx, args).await,
        Command::Drivers(args) => {
            let token = ctx.token(TokenKind::User)?;
            let drivers = ctx.client.grove_driver();
            Ok(match args.command {
                DriversCommand::Info => drivers.info(token.expose_secret()).await?,
                DriversCommand::ScanStatus => drivers.scan_status(token.expose_secret()).await?,
            })
        }
        Command::Boards(args) => {
            let token = ctx.token(TokenKind::User)?;
            match args.command {
                BoardsCommand::List => Ok(ctx.client.boards().list(token.expose_secret()).await?),
            }
        }
        Command::Node(args) => node::handle(ctx, args).await,
        Command::Cotf(args) => cotf::handle(ctx, args).await,
        Command::Custom(args) => custom::handle(ctx, args).await,
        Command::Config(_) | Command::Completions(_) => {
            unreachable!("handled before a client is built")
        }
    }
}

/// Read a JSON document (OTA connections, ULB project) from disk.
pub fn read_json_file(path: &std::path::Path) -> Result<Value, CliError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
