use std::process;

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use topology::cli::commands::execute_command;
use topology::cli::{output, Cli, CliError};
use topology::config::Settings;
use topology::infrastructure::di::ServiceContainer;

fn main() {
    let cli = Cli::parse();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => fail(CliError::from(e)),
    };

    setup_logging(settings.level_filter().unwrap_or(LevelFilter::WARN));
    if let Ok(effective) = settings.to_toml() {
        tracing::debug!("effective settings:\n{}", effective);
    }

    let container = ServiceContainer::new(settings);
    if let Err(e) = execute_command(&cli, &container) {
        fail(e);
    }
}

fn fail(e: CliError) -> ! {
    output::error(&e);
    process::exit(e.exit_code());
}

fn setup_logging(filter: LevelFilter) {
    // Create a subscriber with formatted output directed to stderr
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr) // Set writer first
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    // Log initial debug level
    match filter {
        LevelFilter::INFO => tracing::info!("Log level: info"),
        LevelFilter::DEBUG => tracing::debug!("Log level: debug"),
        LevelFilter::TRACE => tracing::debug!("Log level: trace"),
        _ => {}
    }
}
