use anyhow::Result;

use rivals_ranking::cli::{Cli, Command};
use rivals_ranking::{
    handle_completions, handle_rank, handle_serve, handle_stats, handle_tournaments, interpret,
    load_config,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    execute_command(&cli)
}

fn execute_command(cli: &Cli) -> Result<()> {
    if let Command::Completions { shell } = &cli.command {
        return handle_completions(*shell);
    }

    let config = load_config(cli)?;
    match &cli.command {
        Command::Rank { limit, json } => handle_rank(config, *limit, *json),
        Command::Tournaments { json } => handle_tournaments(config, *json),
        Command::Stats { json } => handle_stats(config, *json),
        Command::Serve { port } => handle_serve(config, *port),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
