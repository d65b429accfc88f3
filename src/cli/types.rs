use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "wikitoc")]
#[command(about = "Fetch a Wikipedia article's table of contents and render it as a nested outline", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Custom configuration file (defaults to ./wikitoc.{yml,yaml,toml})
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Fetch an article's table of contents and render it
    #[command(alias = "f")]
    Fetch {
        /// Article to look up
        #[arg(short, long, value_name = "QUERY")]
        query: String,

        /// Wiki language code (defaults to the configured language)
        #[arg(short, long, value_name = "LANG")]
        language: Option<String>,

        /// Output file path for the HTML page
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Print a plain-text listing to the console instead of writing HTML
        #[arg(short = 'C', long, default_value_t = false)]
        console: bool,
    },

    /// Print the effective configuration
    Config {},
}
