// src/main.rs

// Modules defined in the crate
mod api;
mod config;
mod constants;
mod error;
mod extract;
mod markdown;
mod model;
mod output;
mod pipeline;
mod post;
mod types;

// Specific imports
use crate::config::{CommandLineInput, SyncConfig};
use crate::error::AppError;
use crate::pipeline::{run_sync, ChirpySync};
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use std::fs;

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("notion2chirpy.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stdout_appender = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stdout")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Executes the sync: ensure the posts directory, then query → compose
/// → write for every published page.
async fn execute_sync(config: &SyncConfig) -> Result<(), AppError> {
    let client = api::NotionHttpClient::new(&config.api_key)?;
    let sync = ChirpySync::new(&client, config);

    sync.prepare_output()?;
    let report = run_sync(&sync).await?;

    println!("✅ Sync completed. {} post(s) written.", report.written.len());
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = CommandLineInput::parse();

    if let Err(e) = setup_logging(cli.verbose) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    let result = match SyncConfig::resolve(cli) {
        Ok(config) => execute_sync(&config).await,
        Err(err) => Err(err),
    };

    if let Err(err) = result {
        log::error!("Sync failed: {}", err);
        std::process::exit(1);
    }
}
