use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use await_loops_directory::checked_count;
use await_loops_drivers::{DemoConfig, Directory, LoopDriver, pause_duration};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "await-loops")]
#[command(about = "Compare sequential and concurrent loops over simulated async lookups")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON settings file with an "awaitLoops" object
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Lookups per driver run
    #[arg(long, global = true, allow_negative_numbers = true)]
    count: Option<i64>,

    /// Perturb each lookup's delay by a random offset
    #[arg(long, global = true)]
    jitter: bool,

    /// Largest jitter offset, in time units
    #[arg(long, global = true)]
    jitter_radius: Option<u32>,

    /// Seed for index selection and jitter
    #[arg(long, global = true, env = "AWAIT_LOOPS_SEED")]
    seed: Option<u64>,

    /// Length of one time unit in milliseconds
    #[arg(long, global = true)]
    time_unit_ms: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Await each lookup before starting the next
    Sequential,

    /// Dispatch every lookup and return without waiting
    FireAndForget {
        /// Use the synchronous lookup instead of spawning tasks
        #[arg(long)]
        sync: bool,
    },

    /// Dispatch every lookup, then wait for all of them
    Collected,

    /// Time a series of plain pauses
    Pause {
        /// Number of pauses
        #[arg(long, allow_negative_numbers = true)]
        iterations: Option<i64>,

        /// Length of each pause in seconds
        #[arg(long, allow_negative_numbers = true)]
        seconds: Option<f64>,
    },

    /// Run every driver in turn
    All,
}

impl Cli {
    /// File settings first, then command-line overrides
    fn resolve_config(&self) -> anyhow::Result<DemoConfig> {
        let mut config = match &self.config {
            Some(path) => DemoConfig::from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => DemoConfig::default(),
        };

        if let Some(count) = self.count {
            config.count = checked_count(count)?;
        }
        config.jitter |= self.jitter;
        if let Some(radius) = self.jitter_radius {
            config.jitter_radius = radius;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(unit) = self.time_unit_ms {
            config.time_unit_ms = unit;
        }
        if let Commands::Pause {
            iterations,
            seconds,
        } = &self.command
        {
            if let Some(iterations) = iterations {
                config.pause_iterations = checked_count(*iterations)?;
            }
            if let Some(seconds) = seconds {
                pause_duration(*seconds)?;
                config.pause_seconds = *seconds;
            }
        }

        config.validate().context("Invalid configuration")?;
        Ok(config)
    }
}

async fn run_fire_and_forget(
    driver: &LoopDriver,
    config: &DemoConfig,
    sync: bool,
) -> anyhow::Result<()> {
    let report = driver.fire_and_forget(config.count, config.jitter, sync)?;
    tracing::info!(
        accumulated = report.accumulated.len(),
        in_flight = report.in_flight(),
        "driver returned"
    );

    // Keep the runtime alive until the spawned lookups have logged
    for result in report.settle().await.context("Lookup task failed")? {
        result?;
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    tracing::info!(?config, "Starting await-loops");

    let driver = LoopDriver::from_config(&config, Arc::new(Directory::roster()));

    match cli.command {
        Commands::Sequential => {
            driver.sequential(config.count, config.jitter).await?;
        }
        Commands::FireAndForget { sync } => {
            run_fire_and_forget(&driver, &config, sync).await?;
        }
        Commands::Collected => {
            driver.collected(config.count, config.jitter).await?;
        }
        Commands::Pause { .. } => {
            driver
                .pause_demo(config.pause_iterations, config.pause_seconds)
                .await?;
        }
        Commands::All => {
            driver.sequential(config.count, config.jitter).await?;
            run_fire_and_forget(&driver, &config, false).await?;
            run_fire_and_forget(&driver, &config, true).await?;
            driver.collected(config.count, config.jitter).await?;
            driver
                .pause_demo(config.pause_iterations, config.pause_seconds)
                .await?;
        }
    }

    Ok(())
}
