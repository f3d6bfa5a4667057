//! TruthLens - simulated AI text-analysis platform.
//!
//! This binary runs the HTTP API server consumed by the browser UI, or
//! performs one-shot analyses from the command line.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use directories::ProjectDirs;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use truthlens_core::{AnalysisEngine, AnalysisModel, EngineConfig};
use truthlens_server::{Server, ServerConfig, DEFAULT_HOST, DEFAULT_PORT};

/// TruthLens - simulated AI text-analysis platform
#[derive(Parser, Debug)]
#[command(name = "truthlens", version, about)]
struct Args {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP API server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = DEFAULT_HOST)]
        host: String,

        /// Port to bind to
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Simulated inference latency in milliseconds (default: 3000)
        #[arg(long)]
        latency_ms: Option<u64>,
    },

    /// Run a one-shot crime/threat analysis and print the result as JSON
    Analyze {
        /// The text to analyze
        text: String,

        /// Model to credit in the output, e.g. crime-prediction
        #[arg(long, default_value = "crime-prediction", value_parser = parse_model)]
        model: AnalysisModel,

        /// Simulated inference latency in milliseconds (default: none)
        #[arg(long)]
        latency_ms: Option<u64>,
    },

    /// Run a one-shot news-authenticity check and print the result as JSON
    Verify {
        /// The text to check
        text: String,

        /// Simulated inference latency in milliseconds (default: none)
        #[arg(long)]
        latency_ms: Option<u64>,
    },
}

fn parse_model(id: &str) -> Result<AnalysisModel, String> {
    AnalysisModel::from_id(id).ok_or_else(|| {
        let known: Vec<&str> = AnalysisModel::all().iter().map(|m| m.id()).collect();
        format!("unknown model '{}', expected one of: {}", id, known.join(", "))
    })
}

/// Get the logs directory path.
fn logs_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "truthlens", "TruthLens").map(|dirs| dirs.data_dir().join("logs"))
}

/// Initialize logging with file rotation, falling back to console only.
fn init_logging(args: &Args) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let log_level = if args.debug { "debug" } else { &args.log_level };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("truthlens={},warn", log_level)));

    if let Some(log_dir) = logs_dir() {
        if std::fs::create_dir_all(&log_dir).is_ok() {
            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .max_log_files(5)
                .filename_prefix("truthlens")
                .filename_suffix("log")
                .build(&log_dir)
                .ok();

            if let Some(appender) = file_appender {
                let (non_blocking, guard) = tracing_appender::non_blocking(appender);

                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(fmt::layer().with_writer(std::io::stderr))
                    .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
                    .init();

                tracing::debug!("Logging to {:?}", log_dir);
                return Some(guard);
            }
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::warn!("File logging unavailable, using console only");
    None
}

/// Build an engine for one-shot commands: zero latency unless requested.
fn one_shot_engine(latency_ms: Option<u64>) -> AnalysisEngine {
    let config = match latency_ms {
        Some(ms) => EngineConfig::with_latency(Duration::from_millis(ms)),
        None => EngineConfig::instant(),
    };
    AnalysisEngine::new(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Keep the guard alive for the duration of the program.
    let _log_guard = init_logging(&args);

    match args.command {
        Command::Serve {
            host,
            port,
            latency_ms,
        } => {
            let mut config = ServerConfig::default().with_port(port);
            config.host = host;
            if let Some(ms) = latency_ms {
                config = config.with_simulated_latency(Duration::from_millis(ms));
            }

            tracing::info!("Starting TruthLens...");
            let server = Server::new(config)?;
            server.run().await?;
        }

        Command::Analyze {
            text,
            model,
            latency_ms,
        } => {
            let engine = one_shot_engine(latency_ms);
            let assessment = engine.analyze(&text, model).await?;
            println!("{}", serde_json::to_string_pretty(&assessment)?);
        }

        Command::Verify { text, latency_ms } => {
            let engine = one_shot_engine(latency_ms);
            let verdict = engine.verify(&text).await?;
            println!("{}", serde_json::to_string_pretty(&verdict)?);
        }
    }

    Ok(())
}
