use std::path::Path;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod controller;
mod error;
mod models;
mod services;
mod view;

use config::Config;
use controller::{ConsoleNotifier, Controller};
use models::SelectedFile;
use services::{ArtifactStore, ParseClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "metaview=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Load configuration
    let config = Config::from_env()?;

    tracing::info!("Starting Metaview PDF metadata client");
    tracing::info!("Extraction service: {}", config.base_url);
    tracing::info!("Download directory: {}", config.download_dir.display());

    let client = ParseClient::from_config(&config);
    let artifacts = ArtifactStore::new(config.download_dir.clone());
    let mut controller = Controller::new(client, artifacts, ConsoleNotifier);

    print_usage();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let (command, arg) = match line.split_once(' ') {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };

        match command {
            "select" if !arg.is_empty() => match SelectedFile::from_path(Path::new(arg)) {
                Ok(file) => {
                    println!("Selected {} ({} bytes)", file.name, file.size());
                    if controller.select_file(file).is_err() {
                        println!("Could not store the selection.");
                    }
                }
                Err(e) => println!("Cannot select file: {}", e),
            },
            "parse" => {
                // Failures were already surfaced through the notifier.
                if controller.submit().await.is_ok() {
                    print!("{}", controller.display());
                }
            }
            "download" => {
                if let Ok(path) = controller.retrieve().await {
                    println!("Saved {}", path.display());
                }
            }
            "show" => print!("{}", controller.display()),
            "clear" => {
                controller.reset();
                println!("Cleared.");
            }
            "quit" | "exit" => break,
            "" => {}
            _ => print_usage(),
        }
    }

    Ok(())
}

fn print_usage() {
    println!("Commands:");
    println!("  select <path>   choose a PDF to submit");
    println!("  parse           submit the selected file for extraction");
    println!("  download        save the metadata artifact for the shown file");
    println!("  show            print the current result fields");
    println!("  clear           reset the view and the selection");
    println!("  quit            exit");
}
