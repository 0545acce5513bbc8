//! Friendgraph CLI - command-line consumer of the relationship engine.

use clap::Parser;
use friendgraph_cli::{ApiResponse, Cli, CliConfig, Command};
use friendgraph_domain::EdgeStore;
use friendgraph_engine::RelationshipEngine;
use friendgraph_store::SqliteStore;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };
    let db_path = cli.db.unwrap_or_else(|| config.db_path.clone());

    let store = SqliteStore::new(&db_path)?;
    let mut engine = RelationshipEngine::new(store, config.engine_config());

    let response = match cli.command {
        Command::Befriend { users } => {
            let users: Vec<&str> = users.iter().map(String::as_str).collect();
            match engine.create_friendship_pair(&users) {
                Ok(()) => ApiResponse::ok(),
                Err(e) => ApiResponse::error(e),
            }
        }
        Command::Friends { email } => match engine.list_friends(&email) {
            Ok(friends) => {
                ApiResponse::with_friends(friends.into_iter().map(|f| f.into_string()).collect())
            }
            Err(e) => ApiResponse::error(e),
        },
        Command::Common { users } => {
            let users: Vec<&str> = users.iter().map(String::as_str).collect();
            match engine.common_friends(&users) {
                Ok(friends) => ApiResponse::with_friends(
                    friends.into_iter().map(|f| f.into_string()).collect(),
                ),
                Err(e) => ApiResponse::error(e),
            }
        }
        Command::Subscribe { requestor, target } => {
            match engine.subscribe(&requestor, &target) {
                Ok(()) => ApiResponse::ok(),
                Err(e) => ApiResponse::error(e),
            }
        }
        Command::Block { requestor, target } => match engine.block(&requestor, &target) {
            Ok(()) => ApiResponse::ok(),
            Err(e) => ApiResponse::error(e),
        },
        Command::Reset => match engine.store_mut().delete_all_edges() {
            Ok(()) => ApiResponse::ok(),
            Err(e) => ApiResponse::error(e),
        },
    };

    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}
