use std::path::PathBuf;

use clap::{Parser, Subcommand};

use host_watch::config::load_config;
use host_watch::health::LinkStatus;
use host_watch::health::{MonitorSettings, ReachabilityWindow};
use host_watch::notify::{Notifier, TelegramNotifier};
use host_watch::probe::HostProbe;
use host_watch::resilience::retry;

#[derive(Parser)]
#[command(name = "watch-cli")]
#[command(about = "Operator CLI for the host reachability monitor", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "host-watch.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the configuration file
    CheckConfig,
    /// Run one retry sequence against the configured host
    Probe,
    /// Send a test message through the configured Telegram channel
    Notify {
        #[arg(short, long, default_value = "host-watch test message")]
        text: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(&cli.config)?;

    match cli.command {
        Commands::CheckConfig => {
            let settings = MonitorSettings::from_target(&config.target);
            println!("Configuration OK: {}", cli.config.display());
            println!("  host:         {}", config.target.host);
            println!("  device:       {}", settings.device_name);
            let window = ReachabilityWindow::with_tolerance(settings.tolerance);
            println!("  window:       {} readings", window.capacity());
            println!("  attempts:     {} per cycle", settings.retry.max_attempts);
            println!(
                "  notifier:     {}",
                if config.telegram.is_some() { "telegram" } else { "log" }
            );
        }
        Commands::Probe => {
            let settings = MonitorSettings::from_target(&config.target);
            let mut probe = HostProbe::from_config(&config.target);
            let outcome = retry(&mut probe, &settings.retry).await;
            println!(
                "{} ({}): {} after {} attempt(s)",
                config.target.host,
                probe.kind(),
                LinkStatus::from(outcome.reading),
                outcome.attempts
            );
        }
        Commands::Notify { text } => {
            let Some(telegram) = config.telegram.as_ref() else {
                return Err(format!("no [telegram] section in {}", cli.config.display()).into());
            };
            TelegramNotifier::new(telegram)?.send(&text).await?;
            println!("Message delivered to chat {}", telegram.channel_id);
        }
    }

    Ok(())
}
