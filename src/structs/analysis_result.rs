use serde::{Deserialize, Serialize};

/// Structured feedback scraped out of a free-text model response.
///
/// `full_text` always carries the response verbatim so the feedback stays
/// readable even when nothing else could be extracted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub summary: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub score: Option<u32>,
    pub recommendations: Vec<String>,
    pub full_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_error: Option<String>,
}

impl AnalysisResult {
    pub fn new(full_text: &str) -> Self {
        Self {
            full_text: full_text.to_string(),
            ..Self::default()
        }
    }

    /// Improvements followed by recommendations, one item per line.
    pub fn suggestions(&self) -> String {
        self.improvements
            .iter()
            .chain(self.recommendations.iter())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestions_join_improvements_then_recommendations() {
        let result = AnalysisResult {
            improvements: vec!["- Add tests".to_string()],
            recommendations: vec!["- Set up CI".to_string(), "- Write docs".to_string()],
            ..AnalysisResult::new("raw")
        };

        assert_eq!(result.suggestions(), "- Add tests\n- Set up CI\n- Write docs");
    }

    #[test]
    fn suggestions_are_empty_without_items() {
        assert_eq!(AnalysisResult::new("raw").suggestions(), "");
    }
}
