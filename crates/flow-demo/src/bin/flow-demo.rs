//! flow-demo binary
//!
//! Prints the control-flow walkthrough to stdout. Logging flags only affect
//! what is written to stderr.
//!
//! ```bash
//! flow-demo
//! flow-demo -vv --log-format json
//! ```

use std::io::{self, BufWriter};

use clap::{Parser, ValueEnum};
use eyre::{Result, WrapErr};
use flow_demo::{
    diagnostics::{render_output_error, setup_error_reporting},
    Bindings,
};
use tracing::{error, info};

#[derive(Parser)]
#[command(
    name = "flow-demo",
    version = env!("CARGO_PKG_VERSION"),
    about = "Walks through if/else chains, loops, comparisons and increments"
)]
struct Cli {
    /// Enable verbose logging (use multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress everything but errors on stderr
    #[arg(short, long)]
    quiet: bool,

    /// Set log level (overrides --verbose/--quiet)
    #[arg(long, value_enum)]
    log: Option<LogLevel>,

    /// Set log output format
    #[arg(long, value_enum, default_value = "pretty")]
    log_format: LogFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_error_reporting().wrap_err("setting up error reporting")?;
    setup_logging(cli.verbose, cli.quiet, cli.log, cli.log_format)?;

    let bindings = Bindings::default();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match flow_demo::run(&bindings, &mut out) {
        Ok(()) => {
            info!("walkthrough completed");
            Ok(())
        }
        Err(e) => {
            error!("{:?}", render_output_error(e));
            std::process::exit(1);
        }
    }
}

fn setup_logging(
    verbose: u8,
    quiet: bool,
    log_level: Option<LogLevel>,
    log_format: LogFormat,
) -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if let Some(level) = log_level {
        EnvFilter::new(match level {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        })
    } else if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    // stdout carries the walkthrough itself
    let formatter = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_level(true);

    match log_format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(formatter)
            .with(filter)
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(formatter.json())
            .with(filter)
            .try_init(),
    }
    .wrap_err("initializing logging")?;

    Ok(())
}
