use clap::Parser;
use std::process;
use tracing_subscriber::EnvFilter;

use tasklist::cli;
use tasklist::cli::commands::{Cli, Commands};

fn init_logging() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env("TASKLIST_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))
}

fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Warning: {e}");
    }

    let cli_args = Cli::parse();
    let json_output = cli_args.json;
    let store_flag = cli_args.store.clone();

    let exit_code = match cli_args.command {
        Commands::Task(cmd) => cli::task::run(cmd, json_output, store_flag.as_deref()),
        Commands::Theme { name } => cli::theme::run(name.as_deref(), json_output, store_flag.as_deref()),
    };

    process::exit(exit_code);
}
