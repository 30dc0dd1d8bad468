use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageStat {
    pub language: String,
    pub percentage: f64,
    pub bytes: u64,
}

impl LanguageStat {
    /// Shares of the total byte count, largest first. Ties keep alphabetical
    /// order. Empty when there are no bytes at all.
    pub fn from_counts(counts: &BTreeMap<String, u64>) -> Vec<LanguageStat> {
        let total: u64 = counts.values().sum();
        if total == 0 {
            return Vec::new();
        }

        let mut stats: Vec<LanguageStat> = counts
            .iter()
            .map(|(language, bytes)| LanguageStat {
                language: language.clone(),
                percentage: *bytes as f64 / total as f64 * 100.0,
                bytes: *bytes,
            })
            .collect();

        stats.sort_by(|a, b| b.bytes.cmp(&a.bytes));
        stats
    }
}
