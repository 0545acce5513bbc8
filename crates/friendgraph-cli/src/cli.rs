//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// Friendgraph CLI - manage the user relationship graph.
#[derive(Debug, Parser)]
#[command(name = "friendgraph")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Database path (overrides the config file)
    #[arg(long, global = true)]
    pub db: Option<String>,

    /// Operation to perform
    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a mutual friendship between two users
    Befriend {
        /// The two email addresses to befriend
        users: Vec<String>,
    },

    /// List a user's friends
    Friends {
        /// Email address of the user
        email: String,
    },

    /// List the common friends of two users
    Common {
        /// The two email addresses to compare
        users: Vec<String>,
    },

    /// Subscribe a user to updates about another user
    Subscribe {
        /// Email address of the subscriber
        requestor: String,
        /// Email address of the user being followed
        target: String,
    },

    /// Block a user on behalf of another user
    Block {
        /// Email address of the user placing the block
        requestor: String,
        /// Email address of the user being blocked
        target: String,
    },

    /// Delete every relationship edge (test/reset helper)
    Reset,
}
