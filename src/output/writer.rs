// src/output/writer.rs
//! Carries out an `OutputPlan`. This is the only place output is written.

use super::types::*;
use crate::error::AppError;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Performs every planned delivery in order.
///
/// A failing delivery is recorded in the report and does not stop the
/// remaining ones.
pub fn deliver(plan: OutputPlan) -> OutputReport {
    log::debug!("Delivering {} documents", plan.operations.len());

    let report = plan
        .operations
        .into_iter()
        .fold(OutputReport::default(), |report, operation| {
            match execute_operation(&operation) {
                Ok(bytes_written) => report.with_completed(CompletedOperation {
                    operation,
                    bytes_written,
                }),
                Err(e) => {
                    log::error!("Delivery failed: {}", e);
                    report.with_failed(FailedOperation {
                        operation,
                        error: e.to_string(),
                    })
                }
            }
        });

    log::info!(
        "Delivered {} documents ({} bytes), {} failed",
        report.completed.len(),
        report.bytes_written,
        report.failed.len()
    );

    report
}

fn execute_operation(operation: &DeliveryTarget) -> Result<usize, AppError> {
    match operation {
        DeliveryTarget::WriteFile { path, content } => write_file(path, content),
        DeliveryTarget::PrintToStdout { content } => {
            print_to_stdout(content)?;
            Ok(content.len())
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<usize, AppError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, content)?;

    log::debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(content.len())
}

/// Prints content to stdout, ending with a newline.
fn print_to_stdout(content: &str) -> Result<(), AppError> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", content)?;
    stdout.flush()?;
    Ok(())
}
