mod watcher;

use clap::{Parser, Subcommand};
use hwbot_api::PracticumClient;
use hwbot_channels::telegram::TelegramChannel;
use hwbot_core::config::{self, Credentials};
use std::sync::Arc;
use tracing::error;

#[derive(Parser)]
#[command(name = "hwbot", version, about = "Homework review status notifier")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Start polling for status changes.
    Start,
    /// Check configuration and Telegram connectivity.
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match cli.command {
        Commands::Start => {
            let cfg = config::load(&cli.config)?;

            // Fail fast: no credentials, no loop, no network calls.
            let creds = match Credentials::from_env() {
                Ok(c) => c,
                Err(e) => {
                    error!("startup aborted: {e}");
                    return Err(e.into());
                }
            };

            let source = PracticumClient::new(&cfg.api, creds.practicum_token);
            let channel = TelegramChannel::new(
                &cfg.telegram,
                &creds.telegram_token,
                creds.telegram_chat_id,
            );

            let watcher = watcher::Watcher::new(
                Arc::new(source),
                Arc::new(channel),
                cfg.api.poll_interval_secs,
            );
            watcher.run().await;
        }
        Commands::Status => {
            let cfg = config::load(&cli.config)?;
            println!("hwbot — Status Check\n");
            println!("Config: {}", cli.config);
            println!("Endpoint: {}", cfg.api.endpoint);
            println!("Poll interval: {}s", cfg.api.poll_interval_secs);
            println!();

            for name in ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"] {
                let state = match std::env::var(name) {
                    Ok(v) if !v.is_empty() => "set",
                    _ => "MISSING",
                };
                println!("  {name}: {state}");
            }
            println!();

            match Credentials::from_env() {
                Ok(creds) => {
                    let channel = TelegramChannel::new(
                        &cfg.telegram,
                        &creds.telegram_token,
                        creds.telegram_chat_id,
                    );
                    match channel.get_me().await {
                        Ok(username) => println!("  telegram: connected as @{username}"),
                        Err(e) => println!("  telegram: {e}"),
                    }
                }
                Err(_) => println!("  telegram: skipped (credentials incomplete)"),
            }
        }
    }

    Ok(())
}
