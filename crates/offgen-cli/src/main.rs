mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command, PathArgs};
use config::{FileConfig, layered_config};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("offgen=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let file = FileConfig::discover(cli.config.as_deref())?;

    match cli.command {
        Command::Generate {
            paths,
            process,
            output,
        } => {
            let mut config = layered_config(file, &paths);
            if let Some(process) = process {
                config.process_name = process;
            }
            output.apply(&mut config);
            debug!("Effective config: {:?}", config);
            commands::generate::run(config)
        }
        Command::Dump {
            snapshot,
            output,
            filter,
        } => {
            let config = layered_config(
                file,
                &PathArgs {
                    snapshot,
                    ..Default::default()
                },
            );
            commands::dump::run(
                config.snapshot_path,
                &config.process_name,
                &config.root_marker,
                output.as_deref(),
                filter.as_deref(),
            )
        }
        Command::Validate { definitions } => {
            let config = layered_config(
                file,
                &PathArgs {
                    definitions,
                    ..Default::default()
                },
            );
            commands::validate::run(config.definitions_path, &config.markers)
        }
    }
}
