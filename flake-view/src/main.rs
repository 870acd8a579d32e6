//! Application entry point for the snowflake generator.
//!
//! This binary parses the command line, sets up logging and delegates
//! composition and rasterization to [`app::run`].

mod app;
mod cli;
mod error;
mod exitcode;
mod raster;

use clap::Parser;
use cli::Cli;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Parses arguments, generates the snowflake and prints the written path.
///
/// Argument errors are reported by clap (exit code 2) before anything is
/// drawn. Later failures exit with the code from [`error::AppError::exit_code`].
fn main() {
    let cli = Cli::parse();

    setup_logging(cli.debug);

    match app::run(&cli) {
        Ok(path) => println!("{}", path.display()),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}

/// Installs a stderr subscriber.
///
/// `RUST_LOG` wins when set; otherwise the `-d` count picks the level.
fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    tracing::debug!(?level, "logging initialised");
}
