//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Drive a paginated news feed from the command line
#[derive(Parser, Debug)]
#[command(name = "scrollfeed")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Server base URL (overrides the config file)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// CSRF token for vote requests (overrides the config file)
    #[arg(long, global = true, env = "SCROLLFEED_CSRF_TOKEN")]
    pub csrf_token: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scroll to the bottom of the feed until it runs out
    Scroll {
        /// Stop after this many pages
        #[arg(long)]
        max_pages: Option<u32>,
    },

    /// Like an item
    Like {
        /// Item id
        item: u64,

        #[command(flatten)]
        initial: InitialFlags,
    },

    /// Dislike an item
    Dislike {
        /// Item id
        item: u64,

        #[command(flatten)]
        initial: InitialFlags,
    },

    /// Print the effective configuration
    Config,
}

/// Vote state the page was rendered with
#[derive(clap::Args, Debug, Clone, Copy, Default)]
pub struct InitialFlags {
    /// The reader already liked the item
    #[arg(long)]
    pub liked: bool,

    /// The reader already disliked the item
    #[arg(long)]
    pub disliked: bool,
}
