//! Output formatting helpers for CLI commands

use crate::classes::{self, ClassInfo};
use crate::client::PredictionResponse;
use crate::history::HistoryEntry;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use serde_json::json;
use std::fmt::Write;

/// Confidence as a percentage with two decimals, e.g. `97.50%`
pub fn format_confidence(probability: f64) -> String {
    format!("{:.2}%", probability * 100.0)
}

/// File size in kilobytes, e.g. `1.50 KB`
pub fn format_size(bytes: u64) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}

/// Human-readable local time for a stored timestamp
pub fn format_timestamp(timestamp: &str) -> String {
    if timestamp.is_empty() {
        return "N/A".to_string();
    }
    match chrono::DateTime::parse_from_rfc3339(timestamp) {
        Ok(t) => t
            .with_timezone(&chrono::Local)
            .format("%b %-d, %Y, %I:%M %p")
            .to_string(),
        Err(_) => "Invalid Date".to_string(),
    }
}

fn status_text(info: &ClassInfo) -> String {
    if info.vulnerable {
        info.display_name.red().to_string()
    } else {
        info.display_name.green().to_string()
    }
}

/// Format a prediction as a result card
pub fn format_prediction_pretty(prediction: &PredictionResponse) -> String {
    let info = classes::lookup(&prediction.predicted_class_name);
    let mut output = String::new();

    let banner = if info.vulnerable {
        "✗ Potential Vulnerability Detected".red().bold()
    } else {
        "✓ Analysis Complete: Healthy".green().bold()
    };
    let _ = writeln!(output, "{}", banner);
    let _ = writeln!(output);
    let _ = writeln!(output, "Predicted Status: {}", status_text(info));
    let _ = writeln!(
        output,
        "Confidence:       {}",
        format_confidence(prediction.confidence())
    );
    if !classes::is_known(&prediction.predicted_class_name) {
        let _ = writeln!(
            output,
            "Reported Class:   {}",
            prediction.predicted_class_name
        );
    }
    if !prediction.detail.is_empty() {
        let _ = writeln!(output, "API Detail:       {}", prediction.detail);
    }
    let _ = writeln!(output);
    let _ = writeln!(output, "{}", info.explanation);
    let _ = writeln!(output, "Recommendation: {}", info.improvement);

    if !prediction.probabilities.is_empty() {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Class", "Probability"]);
        for (name, probability) in prediction.ranked_probabilities() {
            table.add_row(vec![
                Cell::new(format!(
                    "{}{}",
                    classes::lookup(name).display_name,
                    unknown_suffix(name)
                )),
                Cell::new(format_confidence(probability)),
            ]);
        }
        let _ = writeln!(output);
        let _ = writeln!(output, "{}", table);
    }

    let _ = writeln!(output);
    let _ = write!(
        output,
        "File size: {} | Processing time: {:.3}s",
        format_size(prediction.input_file_size_bytes),
        prediction.processing_time_seconds
    );

    output
}

fn unknown_suffix(name: &str) -> String {
    if classes::is_known(name) {
        String::new()
    } else {
        format!(" ({})", name)
    }
}

/// Format a prediction as JSON, with the resolved class details alongside
pub fn format_prediction_json(prediction: &PredictionResponse) -> String {
    let info = classes::lookup(&prediction.predicted_class_name);
    serde_json::to_string_pretty(&json!({
        "prediction": prediction,
        "confidence": prediction.confidence(),
        "class": {
            "known": classes::is_known(&prediction.predicted_class_name),
            "display_name": info.display_name,
            "vulnerable": info.vulnerable,
        }
    }))
    .unwrap_or_default()
}

/// Format history entries as a table
pub fn format_history_table(entries: &[HistoryEntry]) -> String {
    if entries.is_empty() {
        return format!(
            "{}\nYour previous RNG analyses will appear here once saved.",
            "No Analysis History".bold()
        );
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["File", "Date", "Status", "Confidence"]);

    for entry in entries {
        let info = classes::lookup(&entry.result.predicted_class_name);
        table.add_row(vec![
            Cell::new(&entry.filename),
            Cell::new(format_timestamp(&entry.timestamp)),
            Cell::new(status_text(info)),
            Cell::new(format_confidence(entry.result.probability)),
        ]);
    }

    let noun = if entries.len() == 1 {
        "Analysis"
    } else {
        "Analyses"
    };
    format!("{} Stored {}\n{}", entries.len(), noun, table)
}

/// Format history entries as JSON
pub fn format_history_json(entries: &[HistoryEntry]) -> String {
    serde_json::to_string_pretty(&json!({
        "history": entries
    }))
    .unwrap_or_default()
}

/// Format the class catalog as a table
pub fn format_classes_table() -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Class", "Display Name", "Vulnerable"]);

    for info in classes::known() {
        table.add_row(vec![
            Cell::new(info.key),
            Cell::new(status_text(info)),
            Cell::new(if info.vulnerable { "yes" } else { "no" }),
        ]);
    }

    table.to_string()
}

/// Format the class catalog as JSON
pub fn format_classes_json() -> String {
    serde_json::to_string_pretty(&json!({
        "classes": classes::known().collect::<Vec<_>>(),
        "fallback": classes::UNKNOWN_CLASS,
    }))
    .unwrap_or_default()
}
