//! Aggregated alert statistics.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single result row from an alert stats query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsResult {
    /// The labels that apply to this result.
    pub labels: HashMap<String, String>,
    /// The data frames that apply to this result.
    pub frames: Vec<Vec<f64>>,
}

impl StatsResult {
    /// Creates a result carrying a single scalar value.
    #[must_use]
    pub fn scalar(labels: HashMap<String, String>, value: f64) -> Self {
        Self {
            labels,
            frames: vec![vec![value]],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_result() {
        let result = StatsResult::scalar(HashMap::new(), 42.0);
        assert_eq!(result.frames, vec![vec![42.0]]);
    }

    #[test]
    fn serialization_roundtrip() {
        let mut labels = HashMap::new();
        labels.insert("status".to_string(), "firing".to_string());

        let result = StatsResult::scalar(labels, 3.0);
        let json = serde_json::to_string(&result).unwrap();
        let parsed: StatsResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }
}
