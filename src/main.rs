use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use courtside::api::state::AppState;
use courtside::calculate::{
    aggregate_player_stats, compare_players, format_metric, head_to_head, MetricKind,
};
use courtside::config::AppConfig;
use courtside::models::{MatchRecord, Player, PlayerId};
use courtside::storage::{read_matches, EntityType, JsonlWriter, StorageConfig};

#[derive(Parser)]
#[command(name = "courtside")]
#[command(about = "Local tennis match tracker with stats aggregation")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: String,

    /// Data directory path (overrides config file)
    #[arg(long)]
    data_dir: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ImportEntity {
    Matches,
    Players,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Bind host (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Bind port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print aggregated stats for one player
    Stats {
        /// Player identifier
        player: i64,
    },

    /// Compare two players
    Compare {
        /// First player identifier
        player1: i64,

        /// Second player identifier
        player2: i64,
    },

    /// Print the head-to-head record between two players
    HeadToHead {
        /// First player identifier
        player1: i64,

        /// Second player identifier
        player2: i64,
    },

    /// Bulk-load records from a JSON array file into the corpus
    Import {
        /// Path to a JSON file containing an array of records
        #[arg(long)]
        file: PathBuf,

        /// Which entity the file contains
        #[arg(long, value_enum)]
        entity: ImportEntity,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if cli.json_logs {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting courtside v{}", env!("CARGO_PKG_VERSION"));

    let mut config = AppConfig::load_or_default(&PathBuf::from(&cli.config))?;
    if let Some(data_dir) = &cli.data_dir {
        config.data_dir = PathBuf::from(data_dir);
    }
    let storage = StorageConfig::new(config.data_dir.clone());

    match cli.command {
        Commands::Serve { host, port } => {
            let host = host.unwrap_or(config.server.host);
            let port = port.unwrap_or(config.server.port);

            let state = AppState::new(storage);
            let app = courtside::api::build_router(state);
            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Listening on http://{}", addr);
            axum::serve(listener, app).await?;
        }

        Commands::Stats { player } => {
            let matches = read_matches(&storage)?;
            let stats = aggregate_player_stats(PlayerId(player), &matches);

            if stats.total_matches == 0 {
                println!("No matches recorded for player {}", player);
            } else {
                println!(
                    "Player {}: {}-{} ({} over {} matches)",
                    player,
                    stats.wins,
                    stats.losses,
                    format_metric(stats.win_rate, MetricKind::Percentage),
                    stats.total_matches,
                );
                println!("{}", serde_json::to_string_pretty(&stats)?);
            }
        }

        Commands::Compare { player1, player2 } => {
            let matches = read_matches(&storage)?;
            let stats1 = aggregate_player_stats(PlayerId(player1), &matches);
            let stats2 = aggregate_player_stats(PlayerId(player2), &matches);
            let result = compare_players(Some(&stats1), Some(&stats2));
            println!("{}", serde_json::to_string_pretty(&result)?);
        }

        Commands::HeadToHead { player1, player2 } => {
            let matches = read_matches(&storage)?;
            let record = head_to_head(PlayerId(player1), PlayerId(player2), &matches);
            println!(
                "{} meetings: player {} leads {}-{}",
                record.total_matches, player1, record.player1_wins, record.player2_wins
            );
            println!("{}", serde_json::to_string_pretty(&record)?);
        }

        Commands::Import { file, entity } => {
            let contents = std::fs::read_to_string(&file)?;
            let count = match entity {
                ImportEntity::Matches => {
                    let records: Vec<MatchRecord> = serde_json::from_str(&contents)?;
                    JsonlWriter::for_entity(&storage, EntityType::Match).append_batch(&records)?
                }
                ImportEntity::Players => {
                    let players: Vec<Player> = serde_json::from_str(&contents)?;
                    JsonlWriter::for_entity(&storage, EntityType::Player).append_batch(&players)?
                }
            };
            tracing::info!("Imported {} records from {:?}", count, file);
        }
    }

    Ok(())
}
