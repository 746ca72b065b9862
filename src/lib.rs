pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod identity;
pub mod ranking;
pub mod report;
pub mod scoring;
pub mod services;
pub mod statistics;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use serde::Serialize;

use crate::cli::Cli;
use crate::config::settings::AppConfig;
use crate::services::server::ServerService;
use crate::services::standings::{Standings, StandingsService};

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn load_config(cli: &Cli) -> Result<AppConfig> {
    let config = AppConfig::load(cli.config.as_deref())?;
    Ok(config.with_data_dir(cli.data_dir.clone()))
}

pub fn handle_rank(config: AppConfig, limit: Option<usize>, json: bool) -> Result<()> {
    let standings = compute_standings(config);
    if json {
        let ranking: Vec<_> = standings
            .ranking
            .iter()
            .take(limit.unwrap_or(usize::MAX))
            .collect();
        return print_json(&ranking);
    }
    print!("{}", report::render_ranking(&standings, limit));
    Ok(())
}

pub fn handle_tournaments(config: AppConfig, json: bool) -> Result<()> {
    let standings = compute_standings(config);
    if json {
        return print_json(&standings.tournaments);
    }
    print!("{}", report::render_tournaments(&standings));
    Ok(())
}

pub fn handle_stats(config: AppConfig, json: bool) -> Result<()> {
    let standings = compute_standings(config);
    if json {
        return print_json(&serde_json::json!({
            "statistics": standings.statistics,
            "overall": standings.overall,
            "tournaments": standings.tournament_statistics,
            "versions": standings.versions,
        }));
    }
    print!("{}", report::render_statistics(&standings));
    Ok(())
}

pub fn handle_serve(config: AppConfig, port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

fn compute_standings(config: AppConfig) -> Standings {
    StandingsService::from_config(config).compute(false)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
