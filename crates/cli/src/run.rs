//! Command execution
//!
//! Wires the parsed mode to the transfer engine: builds the store client
//! from the environment, then runs the copy batch or a listing.

use std::sync::Arc;

use clap::CommandFactory;
use serde::Serialize;

use ocp_core::{Engine, StoreConfig, TransferSpec};
use ocp_s3::S3Client;

use crate::args::{ArgsError, Cli, Mode};
use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

#[derive(Debug, Serialize)]
struct CopyOutput {
    status: &'static str,
    source: String,
    target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    size_bytes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Execute the parsed CLI invocation and return an exit code
pub async fn execute(cli: Cli) -> ExitCode {
    let formatter = Formatter::new(OutputConfig {
        json: cli.json,
        quiet: cli.quiet,
    });

    let mode = match Mode::from_cli(&cli) {
        Ok(mode) => mode,
        Err(ArgsError::MissingPaths) => {
            // No I/O has happened at this point.
            eprintln!("{}", Cli::command().render_usage());
            return ExitCode::UsageError;
        }
        Err(e) => {
            formatter.error(&e.to_string());
            return ExitCode::UsageError;
        }
    };

    let config = match StoreConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            formatter.error(&e.to_string());
            return ExitCode::GeneralError;
        }
    };

    let client = match S3Client::new(config).await {
        Ok(c) => c,
        Err(e) => {
            formatter.error(&format!("Failed to create store client: {e}"));
            return ExitCode::NetworkError;
        }
    };

    let engine = Engine::new(Arc::new(client));

    match mode {
        Mode::ListContainers => print_names(engine.list_containers().await, &formatter),
        Mode::ListObjects(container) => {
            print_names(engine.list_objects(&container).await, &formatter)
        }
        Mode::Copy(spec) => copy(&engine, &spec, &formatter).await,
    }
}

/// Print a listing result, one name per line (JSON array in JSON mode)
fn print_names(result: ocp_core::Result<Vec<String>>, formatter: &Formatter) -> ExitCode {
    match result {
        Ok(names) => {
            if formatter.is_json() {
                formatter.json(&names);
            } else {
                for name in &names {
                    formatter.println(name);
                }
            }
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&format!("Failed to list: {e}"));
            ExitCode::from_error(&e)
        }
    }
}

/// Run a copy batch and report per-source outcomes
///
/// A failed source never aborts its siblings; the exit code reflects whether
/// the whole batch succeeded.
async fn copy(engine: &Engine, spec: &TransferSpec, formatter: &Formatter) -> ExitCode {
    let outcomes = engine.copy_all(spec).await;
    let mut failures = 0usize;

    for outcome in &outcomes {
        match &outcome.result {
            Ok(copied) => {
                if formatter.is_json() {
                    formatter.json(&CopyOutput {
                        status: "success",
                        source: outcome.source.to_string(),
                        target: spec.dest.to_string(),
                        size_bytes: Some(*copied),
                        error: None,
                    });
                } else {
                    formatter.println(&format!(
                        "{} -> {} ({})",
                        outcome.source,
                        spec.dest,
                        humansize::format_size(*copied, humansize::BINARY)
                    ));
                }
            }
            Err(e) => {
                failures += 1;
                if formatter.is_json() {
                    formatter.json(&CopyOutput {
                        status: "error",
                        source: outcome.source.to_string(),
                        target: spec.dest.to_string(),
                        size_bytes: None,
                        error: Some(e.to_string()),
                    });
                } else {
                    formatter.error(&e.to_string());
                }
            }
        }
    }

    if failures > 0 {
        formatter.error(&format!(
            "Completed with errors: {} succeeded, {failures} failed",
            outcomes.len() - failures
        ));
        // Single-source batches keep the specific failure code.
        if let [outcome] = outcomes.as_slice() {
            if let Err(e) = &outcome.result {
                return ExitCode::from_error(e);
            }
        }
        ExitCode::GeneralError
    } else {
        ExitCode::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_output_serializes_without_nulls() {
        let output = CopyOutput {
            status: "success",
            source: "src.txt".into(),
            target: "a:bucket/key".into(),
            size_bytes: Some(42),
            error: None,
        };
        let json = serde_json::to_string(&output).unwrap();
        assert!(json.contains("\"size_bytes\":42"));
        assert!(!json.contains("error"));
    }

    #[test]
    fn test_usage_renders() {
        let usage = Cli::command().render_usage().to_string();
        assert!(usage.contains("ocp"));
    }
}
