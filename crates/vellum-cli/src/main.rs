//! Vellum CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use vellum::VellumError;
use vellum_cli::{Args, error_adapter::to_reportable};

fn main() {
    // Panics are reported through miette as well
    miette::set_panic_hook();

    let args = Args::parse();
    init_logger(&args.log_level);

    info!(input = args.input; "Starting Vellum");
    debug!(args:?; "Parsed arguments");

    if let Err(err) = vellum_cli::run(&args) {
        report(&err);
        process::exit(1);
    }

    info!(output = args.output; "Completed successfully");
}

/// Initialize `env_logger`, falling back to `warn` for an unknown level name.
fn init_logger(level: &str) {
    let log_level = LevelFilter::from_str(level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {level}. Using 'warn' instead.");
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();
}

/// Log `err` as a graphical miette report.
fn report(err: &VellumError) {
    let mut rendered = String::new();
    miette::GraphicalReportHandler::new()
        .render_report(&mut rendered, &to_reportable(err))
        .expect("Writing to String buffer is infallible");

    error!("{rendered}");
}
