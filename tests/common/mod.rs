//! Shared test utilities for rng-analyzer integration tests.

#![allow(dead_code)]

use rng_analyzer::history::{AnalysisSummary, HistoryEntry};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};

// =============================================================================
// Service Payloads
// =============================================================================

/// A well-formed prediction body as the service returns it.
pub fn prediction_body(class: &str, probabilities: &[(&str, f64)]) -> Value {
    let probabilities: serde_json::Map<String, Value> = probabilities
        .iter()
        .map(|(k, v)| (k.to_string(), json!(v)))
        .collect();
    json!({
        "predicted_class_id": 2,
        "predicted_class_name": class,
        "probabilities": probabilities,
        "detail": "Prediction successful.",
        "input_file_size_bytes": 1024,
        "processing_time_seconds": 0.125
    })
}

// =============================================================================
// Files
// =============================================================================

/// Write `bytes` to `dir/name` and return the path.
pub fn write_sample(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

/// Deterministic pseudo-random payload.
pub fn sample_bytes(len: usize) -> Vec<u8> {
    let mut state: u32 = 0x1234_5678;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state as u8
        })
        .collect()
}

// =============================================================================
// History
// =============================================================================

pub fn make_entry(filename: &str) -> HistoryEntry {
    HistoryEntry::new(
        filename,
        AnalysisSummary {
            predicted_class_name: "Healthy".to_string(),
            probability: 0.99,
        },
    )
}
