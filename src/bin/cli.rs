//! Concurrency primers CLI application

use anyhow::Context;
use clap::{Parser, Subcommand};
use concurrency_primers::{run_demo, Console, Demo, PrimersConfig, PrimersError};
use std::path::PathBuf;
use tracing::{debug, info, Level};

#[derive(Parser)]
#[command(name = "primers-cli")]
#[command(about = "Run small task, channel, lock and atomic demonstrations")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Worker threads for the runtime (overrides the configuration)
    #[arg(short, long, global = true)]
    workers: Option<usize>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a demonstration
    Run {
        #[arg(value_enum, default_value_t = Demo::All)]
        demo: Demo,
    },
    /// List the available demonstrations
    List,
    /// Print the effective configuration as JSON
    ShowConfig,
    /// Show version information
    Version,
}

fn load_config(cli: &Cli) -> anyhow::Result<PrimersConfig> {
    let mut config = match &cli.config {
        Some(path) => PrimersConfig::from_json_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => PrimersConfig::default(),
    };
    if let Some(workers) = cli.workers {
        config.worker_threads = workers;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    let config = load_config(&cli)?;
    debug!(?config, "effective configuration");

    match cli.command {
        Some(Commands::Run { demo }) => run(demo, &config)?,
        None => run(Demo::All, &config)?,
        Some(Commands::List) => {
            for demo in Demo::ALL.iter().chain(std::iter::once(&Demo::All)) {
                println!("{:<16} {}", demo.name(), demo.description());
            }
        },
        Some(Commands::ShowConfig) => {
            println!("{}", config.to_json()?);
        },
        Some(Commands::Version) => {
            println!("{} v{}", concurrency_primers::NAME, concurrency_primers::VERSION);
        },
    }

    Ok(())
}

fn run(demo: Demo, config: &PrimersConfig) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.worker_threads)
        .enable_all()
        .build()
        .map_err(|e| PrimersError::runtime(format!("Failed to create async runtime: {}", e)))?;

    info!(demo = demo.name(), workers = config.worker_threads, "starting");
    runtime.block_on(run_demo(demo, config, &Console::stdout()))?;
    Ok(())
}
