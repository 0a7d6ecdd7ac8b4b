//! lexdoc - WordPress HTML to Lexical document converter
//!
//! A CLI front end over the conversion library, used by the import
//! scripts to turn exported post bodies into storable rich-text JSON.

mod cli;

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use cli::{Cli, Commands};
use lexdoc::converter;

/// Main entry point for the lexdoc CLI application
fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

/// Run the CLI application
fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            pretty,
        } => {
            handle_convert_command(input, output, pretty)?;
        }

        Commands::Videos { input } => {
            handle_videos_command(input)?;
        }
    }

    Ok(())
}

/// Handle the convert command
fn handle_convert_command(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    pretty: bool,
) -> Result<()> {
    let html = read_input(input.as_deref())?;

    let conversion = converter::convert(&html);
    for warning in &conversion.warnings {
        log::warn!("{}", warning);
    }

    let json = if pretty {
        serde_json::to_string_pretty(&conversion.document)
    } else {
        serde_json::to_string(&conversion.document)
    }
    .context("Failed to serialize document to JSON")?;

    match output {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            log::info!(
                "Wrote {} blocks to {}",
                conversion.document.children.len(),
                path.display()
            );
        }
        None => {
            println!("{}", json);
        }
    }

    Ok(())
}

/// Handle the videos command
fn handle_videos_command(input: Option<PathBuf>) -> Result<()> {
    let html = read_input(input.as_deref())?;

    for url in converter::extract_video_urls(&html) {
        println!("{}", url);
    }

    Ok(())
}

/// Read HTML from a file, or from stdin when no path is given
fn read_input(path: Option<&std::path::Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read HTML from stdin")?;
            Ok(buffer)
        }
    }
}
