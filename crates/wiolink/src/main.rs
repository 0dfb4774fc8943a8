mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::commands::Context;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let value = match cli.command {
        // Config commands don't need a client
        Command::Config(args) => commands::config_cmd::handle(args, &cli.global)?,

        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "wiolink", &mut std::io::stdout());
            None
        }

        cmd => {
            let config = config::load_config()?;
            let settings = config::resolve_settings(&cli.global, &config)?;
            let client = settings.build_client()?;
            tracing::debug!(base_url = %client.base_url(), "dispatching command");

            let ctx = Context {
                client,
                config,
                global: &cli.global,
            };
            Some(commands::dispatch(cmd, &ctx).await?)
        }
    };

    if let Some(value) = value {
        let out = output::render(&cli.global.output, &value)?;
        output::print_output(&out, cli.global.quiet);
    }
    Ok(())
}
