// src/main.rs

use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use notion2html::{
    AppError, CommandLineInput, Conversion, DeliveryTarget, DocumentDelivery, FileConverter,
    OutputReport, RenderConfig, RenderedDocument,
};
use std::fs;

/// Sets up logging configuration.
///
/// Console logging goes to stderr so converted documents on stdout stay clean.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("notion2html.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stderr_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stderr")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Executes the three-stage pipeline for every input: load → compose → deliver.
///
/// A bundle that fails to convert is reported and skipped; the rest are
/// still delivered. Any failure turns into an error once delivery is done.
fn execute_pipeline(config: &RenderConfig) -> anyhow::Result<()> {
    let converter = FileConverter::new(config);
    let conversions = converter.convert_all()?;

    let (documents, conversion_failures) = partition_conversions(conversions);
    for failure in &conversion_failures {
        eprintln!("✗ {}", failure);
    }

    let report = converter.deliver(&documents);
    report_completion(config, &report);

    if !conversion_failures.is_empty() {
        return Err(AppError::ConversionFailed {
            failures: conversion_failures,
        }
        .into());
    }

    if !report.is_success() {
        return Err(AppError::DeliveryFailed {
            failures: report.failed.iter().map(|f| f.error.clone()).collect(),
        }
        .into());
    }

    Ok(())
}

/// Splits conversions into rendered documents, in input order, and failure messages.
fn partition_conversions(conversions: Vec<Conversion>) -> (Vec<RenderedDocument>, Vec<String>) {
    let mut documents = Vec::with_capacity(conversions.len());
    let mut failures = Vec::new();

    for conversion in conversions {
        match conversion.result {
            Ok(document) => documents.push(document),
            Err(e) => {
                log::error!("Conversion of {} failed: {}", conversion.input.display(), e);
                failures.push(format!("{}: {}", conversion.input.display(), e));
            }
        }
    }

    (documents, failures)
}

/// Confirms written files on stderr. Stdout output speaks for itself.
fn report_completion(config: &RenderConfig, report: &OutputReport) {
    if config.output_dir.is_none() {
        return;
    }

    for completed in &report.completed {
        if let DeliveryTarget::WriteFile { path, .. } = &completed.operation {
            eprintln!("✓ Wrote {}", path.display());
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose).map_err(|e| anyhow::anyhow!("failed to set up logging: {}", e))?;

    let config = RenderConfig::resolve(cli)?;

    execute_pipeline(&config)?;

    Ok(())
}
