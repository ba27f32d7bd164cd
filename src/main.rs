mod assembler;
mod config;
mod error;
mod models;
mod parser;
mod pipeline;
mod scanner;
mod translator;

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::ProtogenConfig;
use error::ProtogenError;
use pipeline::GenerateOptions;

#[derive(Parser)]
#[command(name = "protogen")]
#[command(about = "Generate a proto3 service from the top-level functions of Go source files", long_about = None)]
#[command(version)]
struct Cli {
    /// Name of the generated service
    service: Option<String>,

    /// Go source files to scan, in order
    files: Vec<PathBuf>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the document here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Log level filter (e.g. debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level, cli.log_format);

    let config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => ProtogenConfig::default(),
    };

    if cli.print_config {
        println!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    let service = cli
        .service
        .ok_or_else(|| ProtogenError::Usage("service name".into()))?;
    if cli.files.is_empty() {
        return Err(ProtogenError::Usage("source files".into()).into());
    }

    let options = GenerateOptions {
        result_naming: config.result_naming(),
    };
    let document = pipeline::generate(&service, &cli.files, options)
        .with_context(|| format!("Failed to generate service {}", service))?;

    match &cli.output {
        Some(path) => {
            std::fs::write(path, format!("{}\n", document))
                .map_err(ProtogenError::from)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", document)?;
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout carries only the generated document.
/// `RUST_LOG` takes precedence over `--log-level`.
fn init_logging(level: &str, format: LogFormat) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(env_filter);
    match format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }
}
