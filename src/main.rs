//! Demo binary: registers a few slow cleanup hooks on the default instance
//! and waits for a termination signal.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use shutdown_hooks::config::{load_config, ShutdownConfig};
use shutdown_hooks::observability::init_logging;
use shutdown_hooks::{Signal, SignalSet};

#[derive(Parser)]
#[command(name = "shutdown-hooks")]
#[command(about = "Run cleanup hooks when a termination signal arrives", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Signal to wait for (repeatable). Overrides the config file.
    #[arg(short, long = "signal")]
    signals: Vec<Signal>,

    /// Number of demo hooks to register.
    #[arg(long, default_value_t = 3)]
    hooks: usize,

    /// How long each demo hook takes, in milliseconds.
    #[arg(long, default_value_t = 1000)]
    hook_delay_ms: u64,

    /// Print the drain summary as JSON.
    #[arg(long)]
    json: bool,
}

/// Later hooks take longer, to make the drain visible.
fn hook_delay(base_ms: u64, index: usize) -> Duration {
    Duration::from_millis(base_ms.saturating_mul(index as u64 + 1))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ShutdownConfig::default(),
    };

    init_logging(&config.observability.log_level);

    let filter = if cli.signals.is_empty() {
        config.listen.signal_set()
    } else {
        cli.signals.iter().copied().collect::<SignalSet>()
    };

    for i in 0..cli.hooks {
        let delay = hook_delay(cli.hook_delay_ms, i);
        shutdown_hooks::add_with_key(format!("worker-{}", i), move || {
            tracing::info!(worker = i, ?delay, "Stopping...");
            std::thread::sleep(delay);
            tracing::info!(worker = i, "Stopped");
        });
    }
    shutdown_hooks::add_with_key_with_param("announce", |signal| {
        tracing::info!(%signal, description = signal.description(), "Shutting down");
    });

    tracing::info!(
        signals = ?filter.kinds(),
        hooks = shutdown_hooks::hooks().len(),
        "App running, press CTRL + C to stop"
    );

    let summary = shutdown_hooks::listen(&filter.kinds()).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "{}: {} hooks completed, {} failed, {} signals ignored",
            summary.signal, summary.completed, summary.failed, summary.ignored
        );
    }

    tracing::info!("Shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hook_delay_grows_and_saturates() {
        assert_eq!(hook_delay(100, 0), Duration::from_millis(100));
        assert_eq!(hook_delay(100, 2), Duration::from_millis(300));
        assert_eq!(hook_delay(u64::MAX, 3), Duration::from_millis(u64::MAX));
    }
}
