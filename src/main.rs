//! Host reachability monitor.
//!
//! Probes one host, debounces the readings through a sliding-window
//! majority vote and sends a message whenever the stabilized status flips.
//!
//! # Architecture Overview
//!
//! ```text
//!   ┌──────────────────────────── monitor task ─────────────────────────────┐
//!   │                                                                       │
//!   │  ┌────────┐   ┌──────────────┐   ┌──────────────────┐   ┌──────────┐  │
//!   │  │ probe  │──▶│  resilience  │──▶│  health::state   │──▶│  notify  │──┼──▶ Telegram
//!   │  │ (ping) │   │ retry wrapper│   │ stability filter │   │          │  │
//!   │  └────────┘   └──────────────┘   └──────────────────┘   └──────────┘  │
//!   │        ▲              one settled reading per cycle                    │
//!   │        └──────────────── sleep(monitor_delay) ◀────────────────────────┤
//!   └───────────────────────────────────────────────────────────────────────┘
//!                                      ▲ shutdown
//!   ┌──────────────── main task ───────┴────────────────────────────────────┐
//!   │  SIGINT/SIGTERM → stop monitor → final notification → exit 0          │
//!   └───────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use host_watch::config::load_config;
use host_watch::health::Monitor;
use host_watch::lifecycle::{build_components, Components, Shutdown, StartupOptions, TerminationSignals};
use host_watch::observability::init_logging;

#[derive(Parser)]
#[command(name = "host-watch")]
#[command(about = "Monitor a networked device and report online/offline changes", long_about = None)]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "host-watch.toml")]
    config: PathBuf,

    /// Use a scripted flapping host instead of probing the network.
    #[arg(long)]
    simulate: bool,

    /// Log notifications instead of sending them.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = load_config(&args.config)?;
    init_logging(&config.observability)?;

    tracing::info!("host-watch v{} starting", env!("CARGO_PKG_VERSION"));

    let mut signals = TerminationSignals::register()?;

    let options = StartupOptions {
        simulate: args.simulate,
        dry_run: args.dry_run,
    };
    let Components {
        settings,
        probe,
        notifier,
    } = build_components(&config, options)?;
    let device = settings.device_name.clone();
    let notifier = Arc::new(notifier);

    let shutdown = Shutdown::new();
    let monitor_shutdown = shutdown.subscribe();
    let monitor_notifier = notifier.clone();
    let mut monitor = tokio::spawn(async move {
        let monitor = Monitor::start(settings, probe, monitor_notifier).await;
        monitor.run(monitor_shutdown).await;
    });

    let signal = tokio::select! {
        signal = signals.recv() => signal,
        result = &mut monitor => {
            tracing::error!(?result, "Monitor task exited unexpectedly");
            return Err("monitor task exited unexpectedly".into());
        }
    };

    shutdown
        .terminate(monitor, notifier.as_ref(), &device, signal)
        .await;

    tracing::info!("Shutdown complete");
    Ok(())
}
