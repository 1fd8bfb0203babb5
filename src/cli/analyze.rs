//! Analyze command implementation

use crate::cli::output::{format_prediction_json, format_prediction_pretty};
use crate::cli::{load_config, AnalyzeArgs};
use crate::client::{AnalysisClient, FileHandle, HttpAnalysisClient, PredictionResponse};
use crate::history::{HistoryEntry, HistoryStore};
use colored::Colorize;
use std::path::Path;

/// Extension the service expects for raw generator output.
pub const EXPECTED_EXTENSION: &str = "bin";

/// What happened to the history record for an analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryOutcome {
    Saved,
    /// Saving disabled by flag or configuration
    Skipped,
    /// The analysis succeeded but could not be recorded
    Failed(String),
}

/// Result of a successful analysis
#[derive(Debug, Clone)]
pub struct AnalyzeReport {
    pub file: FileHandle,
    pub prediction: PredictionResponse,
    pub history: HistoryOutcome,
}

/// Reject files the service is not meant to classify
pub fn validate_extension(path: &Path) -> Result<(), String> {
    let is_bin = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case(EXPECTED_EXTENSION))
        .unwrap_or(false);
    if is_bin {
        Ok(())
    } else {
        Err(format!(
            "Invalid file type: {}. Please select a .{} file (or pass --allow-any-extension).",
            path.display(),
            EXPECTED_EXTENSION
        ))
    }
}

/// Build the file handle described by the command arguments
pub fn file_handle_from_args(args: &AnalyzeArgs) -> Result<FileHandle, String> {
    if !args.allow_any_extension {
        validate_extension(&args.file)?;
    }
    let mut file = FileHandle::from_path(&args.file);
    if let Some(ref mime) = args.mime_type {
        file = file.with_mime_type(mime.clone());
    }
    Ok(file)
}

/// Analyze one file and record the outcome
///
/// Errors from the service abort the command. A failed history write does
/// not: the prediction is still returned, with the failure noted in the report.
pub async fn handle_analyze(
    args: &AnalyzeArgs,
    client: &dyn AnalysisClient,
    store: &HistoryStore,
    auto_save: bool,
) -> Result<AnalyzeReport, Box<dyn std::error::Error>> {
    let file = file_handle_from_args(args)?;

    let prediction = client
        .analyze(&file)
        .await
        .map_err(|e| format!("Analysis failed: {}", e))?;

    tracing::info!(
        file = %file.name,
        class = %prediction.predicted_class_name,
        confidence = prediction.confidence(),
        "Analysis complete"
    );

    let history = if args.no_save || !auto_save {
        HistoryOutcome::Skipped
    } else {
        match store
            .append(HistoryEntry::from_prediction(&file.name, &prediction))
            .await
        {
            Ok(()) => HistoryOutcome::Saved,
            Err(e) => {
                tracing::warn!(error = %e, "Analysis succeeded but was not saved");
                HistoryOutcome::Failed(e.to_string())
            }
        }
    };

    Ok(AnalyzeReport {
        file,
        prediction,
        history,
    })
}

/// Run `rng-analyzer analyze`: load config, analyze, print the result
pub async fn run_analyze(args: AnalyzeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config(&args.common)?;
    if let Some(ref endpoint) = args.endpoint {
        config.service.endpoint = endpoint.clone();
    }
    if let Some(timeout) = args.timeout {
        config.service.timeout_seconds = timeout;
    }
    config.validate()?;
    crate::logging::init_tracing(&config.logging)?;

    let client = HttpAnalysisClient::from_config(&config.service);
    let store = HistoryStore::open(&config.history.data_dir);

    let report = tokio::select! {
        result = handle_analyze(&args, &client, &store, config.history.auto_save) => result?,
        _ = tokio::signal::ctrl_c() => {
            return Err("Analysis cancelled".into());
        }
    };

    if args.json {
        println!("{}", format_prediction_json(&report.prediction));
    } else {
        println!("{}", format_prediction_pretty(&report.prediction));
    }

    if let HistoryOutcome::Failed(reason) = &report.history {
        eprintln!(
            "{} result was not saved to history: {}",
            "Warning:".yellow(),
            reason
        );
    }

    Ok(())
}
