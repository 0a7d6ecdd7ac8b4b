//! Command-line interface definitions for lexdoc

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI structure for the lexdoc application
#[derive(Parser)]
#[command(name = "lexdoc")]
#[command(version)]
#[command(about = "WordPress HTML to Lexical document converter", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for lexdoc
#[derive(Subcommand)]
pub enum Commands {
    /// Convert an HTML file (or stdin) to a Lexical JSON document
    Convert {
        /// Input HTML file (reads stdin when omitted)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output JSON file (writes stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// List video URLs found in an HTML file (or stdin), one per line
    Videos {
        /// Input HTML file (reads stdin when omitted)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },
}
