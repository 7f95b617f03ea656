//! Command-line client for qrlink.
//!
//! Runs the same pipeline as the HTTP service without starting a server.
//!
//! # Usage
//!
//! ```bash
//! # Links for a file already on GitHub
//! cargo run --bin qrlink -- make https://github.com/org/repo/blob/main/audio/a.mp3
//!
//! # Publish a local file, then produce its links
//! cargo run --bin qrlink -- upload ./my\ song.mp3
//!
//! # QR image URL for any text (no network)
//! cargo run --bin qrlink -- qr "https://example.com"
//! ```
//!
//! # Environment Variables
//!
//! Same as the server (see `qrlink::config`); `GITHUB_TOKEN` and
//! `GITHUB_REPO` are required for `upload`.

use qrlink::config;
use qrlink::domain::{MadeLinks, Upload};
use qrlink::server::build_link_service;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::path::PathBuf;

/// CLI tool for producing raw links, short links and QR codes.
#[derive(Parser)]
#[command(name = "qrlink")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Produce links for a GitHub blob or raw URL
    Make {
        /// GitHub URL of the file
        url: String,
    },

    /// Publish a local file to the configured repository, then produce links
    Upload {
        /// File to publish
        file: PathBuf,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Print the QR image URL for arbitrary text
    Qr {
        /// Text to encode
        text: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env().context("Invalid configuration")?;
    let service = build_link_service(&config)?;

    match cli.command {
        Commands::Make { url } => {
            let links = service.make_from_url(&url).await?;
            print_links(&links);
        }
        Commands::Upload { file, yes } => {
            let Some(target) = service.publisher_target() else {
                anyhow::bail!("Uploads are disabled: set GITHUB_TOKEN and GITHUB_REPO");
            };

            let content = tokio::fs::read(&file)
                .await
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let filename = file
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            let upload = Upload::new(&filename, content)?;

            println!("{}", "Upload file".bright_blue().bold());
            println!("  File:   {}", file.display().to_string().cyan());
            println!("  Name:   {}", upload.filename().cyan());
            println!("  Size:   {} bytes", upload.len());
            println!("  Target: {}", target.cyan());
            println!();

            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt("Publish this file?")
                    .default(true)
                    .interact()?;

                if !confirmed {
                    println!("{}", "Cancelled".red());
                    return Ok(());
                }
            }

            let links = service.make_from_upload(upload).await?;
            print_links(&links);
        }
        Commands::Qr { text } => {
            println!("{}", service.qr_url(&text));
        }
    }

    Ok(())
}

/// Prints the produced links.
fn print_links(links: &MadeLinks) {
    println!();
    println!("{}", "Links ready".green().bold());
    if let Some(ref original) = links.original {
        println!("  {} {}", "Original:".bright_white(), original);
    }
    println!("  {} {}", "Raw:     ".bright_white(), links.raw.cyan());
    println!("  {} {}", "Short:   ".bright_white(), links.short.bright_yellow().bold());
    println!("  {} {}", "QR:      ".bright_white(), links.qr);
    println!();
}
