// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to the card dataset JSON (overrides config)
    #[arg(short = 'd', long, value_name = "CARDS", global = true)]
    pub cards: Option<PathBuf>,

    /// Directory holding card illustrations and photos (overrides config)
    #[arg(short, long, value_name = "DIR", global = true)]
    pub assets: Option<PathBuf>,

    /// Path to TOML config file (default: ./cardgallery.toml if present)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Render pages without font, texture and motion effects
    #[arg(long, global = true)]
    pub no_decor: bool,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Serve the gallery over HTTP
    Serve {
        /// Address to bind, e.g. 127.0.0.1:8080 (overrides config)
        #[arg(short, long, value_name = "ADDR")]
        bind: Option<String>,
    },

    /// Open the gallery in the browser
    Gallery {
        /// Only show cards whose name contains this text
        #[arg(short, long, value_name = "QUERY")]
        query: Option<String>,
    },

    /// Open a card's detail page in the browser
    View {
        /// Card ID to view
        #[arg(value_name = "CARD_ID")]
        card_id: String,

        /// Output card as JSON instead of opening in browser
        #[arg(long)]
        json: bool,
    },

    /// List cards with ID, name and first line of meaning
    List {
        /// Optional search term to filter cards by name
        #[arg(value_name = "SEARCH")]
        search: Option<String>,
    },

    /// Write the gallery as a static site
    Export {
        /// Output directory
        #[arg(value_name = "DIR")]
        dir: PathBuf,
    },

    /// Print the effective configuration as TOML
    Config,
}
