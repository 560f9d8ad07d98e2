// src/main.rs
//
// Command-line front end: loads config, wires AppState, runs one command
// and prints its result as JSON.

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::info;
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;

use bangumi_client::application::commands::*;
use bangumi_client::application::{AppState, NoticeDto};
use bangumi_client::{ClientConfig, ExternalPlayer};

#[derive(Debug, Parser)]
#[command(name = "bangumi-client", version, about = "Query a bangumi subscription server")]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the API base URL from the config
    #[arg(long, global = true)]
    api: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the initial year/season selection
    Season,
    /// List shows airing in a season
    Calendar {
        /// "<year> <season>", a bare year or a bare season
        #[arg(long)]
        season: Option<String>,
    },
    /// Show one bangumi
    Bangumi { id: i32 },
    /// List a bangumi's episodes
    Episodes { id: i32 },
    /// List torrents collected for a bangumi
    Torrents { id: i32 },
    /// List download tasks
    Downloads {
        #[arg(long, default_value_t = 0)]
        offset: u64,
        #[arg(long, default_value_t = 20)]
        limit: u64,
    },
    /// Search TMDB through the server
    Search { name: String },
    /// Show server metrics
    Metrics,
    /// Print the stream URL of an episode and external player links
    WatchUrl {
        id: i32,
        episode: i32,
        /// iina, infuse, vlc or mpv
        #[arg(long)]
        player: Option<ExternalPlayer>,
    },
}

fn load_config(cli: &Cli) -> anyhow::Result<ClientConfig> {
    let mut config = match &cli.config {
        Some(path) => ClientConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ClientConfig::load().context("Failed to load config")?,
    };
    if let Some(api) = &cli.api {
        config.api_base_url = api.clone();
    }
    Ok(config)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(state: &AppState, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Season => print_json(&current_selection(state).await),
        Command::Calendar { season } => print_json(&show_calendar(state, season.as_deref()).await?),
        Command::Bangumi { id } => print_json(&get_bangumi(state, id).await?),
        Command::Episodes { id } => print_json(&list_episodes(state, id).await?),
        Command::Torrents { id } => print_json(&list_torrents(state, id).await?),
        Command::Downloads { offset, limit } => {
            print_json(&list_downloads(state, offset, limit).await?)
        }
        Command::Search { name } => print_json(&search_tmdb(state, &name).await?),
        Command::Metrics => print_json(&get_metrics(state).await?),
        Command::WatchUrl {
            id,
            episode,
            player,
        } => print_json(&watch_links(state, id, episode, player)),
    }
}

/// How a command run ends.
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Success,
    /// Failed, and the snackbar notice already says why.
    Reported,
}

/// A failure is printed once: through the notice when there is one,
/// otherwise by returning it.
fn settle(result: anyhow::Result<()>, notice: Option<&NoticeDto>) -> anyhow::Result<Outcome> {
    match result {
        Ok(()) => Ok(Outcome::Success),
        Err(_) if notice.is_some() => Ok(Outcome::Reported),
        Err(err) => Err(err),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let env = env_logger::Env::default().default_filter_or(config.log_level.as_str());
    env_logger::Builder::from_env(env).init();
    info!("Using server {}", config.api_base_url);

    let state = AppState::new(&config).context("Failed to build HTTP transport")?;

    let result = run(&state, cli.command).await;

    let notice = NoticeDto::from_snackbar(&state.snackbar.snapshot());
    if let Some(notice) = &notice {
        eprintln!("{}", serde_json::to_string(notice)?);
    }

    match settle(result, notice.as_ref())? {
        Outcome::Success => Ok(ExitCode::SUCCESS),
        Outcome::Reported => Ok(ExitCode::FAILURE),
    }
}
