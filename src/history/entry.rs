//! Persisted history record types

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::client::PredictionResponse;

/// Reduced snapshot of a prediction; the full probability map is not kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub predicted_class_name: String,
    /// Confidence of the predicted class at save time
    pub probability: f64,
}

impl From<&PredictionResponse> for AnalysisSummary {
    fn from(prediction: &PredictionResponse) -> Self {
        Self {
            predicted_class_name: prediction.predicted_class_name.clone(),
            probability: prediction.confidence(),
        }
    }
}

/// One past analysis outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Name of the analyzed file, not its content
    pub filename: String,
    /// ISO-8601 creation time
    pub timestamp: String,
    #[serde(alias = "results")]
    pub result: AnalysisSummary,
}

impl HistoryEntry {
    /// Entry stamped with the current time.
    pub fn new(filename: impl Into<String>, result: AnalysisSummary) -> Self {
        Self::at(filename, result, Utc::now())
    }

    pub fn at(filename: impl Into<String>, result: AnalysisSummary, when: DateTime<Utc>) -> Self {
        Self {
            filename: filename.into(),
            timestamp: when.to_rfc3339_opts(SecondsFormat::Millis, true),
            result,
        }
    }

    pub fn from_prediction(filename: impl Into<String>, prediction: &PredictionResponse) -> Self {
        Self::new(filename, AnalysisSummary::from(prediction))
    }

    /// Parsed timestamp, or None if the stored text is not RFC 3339.
    pub fn recorded_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .ok()
            .map(|t| t.with_timezone(&Utc))
    }
}
