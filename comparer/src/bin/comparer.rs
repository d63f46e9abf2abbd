#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use clap::Parser;
use comparer::app::Comparer;
use comparer::cli::Args;
use comparer::consts::DEFAULT_LOG_FILTER;
use egui::ViewportBuilder;
use std::io::stdout;
use tracing::{error, Level};
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

fn init_log() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let formatting_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_ansi(true)
        .with_line_number(true)
        .with_writer(stdout.with_max_level(Level::TRACE));

    Registry::default()
        .with(env_filter)
        .with(formatting_layer)
        .init();
}

pub fn main() -> eframe::Result<()> {
    init_log();

    let opts = match Args::parse().into_options() {
        Ok(opts) => opts,
        Err(err) => {
            error!("{err}");
            std::process::exit(2);
        }
    };

    let options = eframe::NativeOptions {
        centered: true,
        viewport: ViewportBuilder::default()
            .with_inner_size((900.0, 600.0))
            .with_min_inner_size((400.0, 300.0)),
        ..Default::default()
    };
    Comparer::start(options, opts)
}
