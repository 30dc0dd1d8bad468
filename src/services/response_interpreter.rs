//! Best-effort extraction of structured feedback from model output.
//!
//! The analysis prompt asks the model to bold every section header
//! (`**4. Performance Score (0-100):**`). Splitting on the bold marker gives
//! alternating spans; a span that names a section is a header and the span
//! right after it is that section's body. Nothing here is a guaranteed parse:
//! when the model drifts from the template the affected fields stay empty.

use once_cell::sync::Lazy;
use regex::Regex;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::parse_error::ParseError;

const HEADER_MARKER: &str = "**";
const BULLET_MARKERS: &[char] = &['-', '*'];
const SCORE_HEADER_KEYWORDS: &[&str] = &["performance score", "score (0-100)", "score:", "rating"];
const MIN_SCORE: u32 = 0;
const MAX_SCORE: u32 = 100;

static OUT_OF_HUNDRED_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+)\s*/\s*100").unwrap()
});

static LABELLED_SCORE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:score|rating)[\s:]+(\d{1,3})").unwrap()
});

static STANDALONE_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(\d{2,3})\b").unwrap()
});

static DECIMAL_DIGIT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d$").unwrap()
});

static FULL_TEXT_SCORE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:performance\s+)?score[\s:]+(\d{1,3})").unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SectionKind {
    Summary,
    Strengths,
    Improvements,
    Score,
    Recommendations,
}

impl SectionKind {
    /// First keyword hit wins, in prompt order.
    fn classify(header_lower: &str) -> Option<Self> {
        if header_lower.contains("summary") {
            Some(Self::Summary)
        } else if header_lower.contains("strengths") {
            Some(Self::Strengths)
        } else if header_lower.contains("improvement") {
            Some(Self::Improvements)
        } else if header_lower.contains("score") || header_lower.contains("performance") {
            Some(Self::Score)
        } else if header_lower.contains("recommendation") {
            Some(Self::Recommendations)
        } else {
            None
        }
    }
}

pub struct ResponseInterpreter;

impl ResponseInterpreter {
    /// Turns raw model text into an [`AnalysisResult`]. Never fails: a
    /// problem during extraction lands in `parse_error` and whatever was
    /// extracted before it is kept.
    pub fn interpret(raw_text: &str) -> AnalysisResult {
        let mut result = AnalysisResult::new(raw_text);

        if let Err(e) = Self::scrape_sections(raw_text, &mut result) {
            log::debug!("❌ Parsing error: {}", e);
            result.parse_error = Some(e.to_string());
        }

        result
    }

    fn scrape_sections(raw_text: &str, result: &mut AnalysisResult) -> Result<(), ParseError> {
        let sections: Vec<&str> = raw_text.split(HEADER_MARKER).collect();

        for (header, body) in sections.iter().zip(sections.iter().skip(1)) {
            let header_lower = header.to_lowercase();

            match SectionKind::classify(&header_lower) {
                Some(SectionKind::Summary) => {
                    result.summary = body.trim().to_string();
                }
                Some(SectionKind::Strengths) => {
                    result.strengths = Self::bullet_items(body);
                }
                Some(SectionKind::Improvements) => {
                    result.improvements = Self::bullet_items(body);
                }
                Some(SectionKind::Score) => {
                    if Self::is_score_header(&header_lower) {
                        if let Some(score) = Self::section_score(body.trim())? {
                            result.score = Some(score);
                        }
                    }
                }
                Some(SectionKind::Recommendations) => {
                    result.recommendations = Self::bullet_items(body);
                }
                None => {}
            }
        }

        if result.score.is_none() {
            log::debug!("No score found in sections, trying full text extraction...");
            result.score = Self::full_text_score(raw_text)?;
        }

        match result.score {
            Some(score) => log::debug!("✅ Final score: {}", score),
            None => log::debug!("❌ No score could be extracted from response"),
        }

        Ok(())
    }

    fn bullet_items(body: &str) -> Vec<String> {
        body.trim()
            .split('\n')
            .map(str::trim)
            .filter(|line| line.starts_with(BULLET_MARKERS))
            .map(str::to_string)
            .collect()
    }

    fn is_score_header(header_lower: &str) -> bool {
        SCORE_HEADER_KEYWORDS.iter().any(|keyword| header_lower.contains(keyword))
    }

    /// Ordered strategies against the score section body. A pattern that
    /// matches ends the search even when its value is rejected.
    fn section_score(score_text: &str) -> Result<Option<u32>, ParseError> {
        log::debug!("Found score section: {}", score_text.chars().take(200).collect::<String>());

        // `/100` values are taken as-is, without the range check below.
        if let Some(score) = Self::capture_number(&OUT_OF_HUNDRED_REGEX, score_text, "X/100")? {
            log::debug!("✓ Extracted score from X/100 pattern: {}", score);
            return Ok(Some(score));
        }

        if let Some(value) = Self::capture_number(&LABELLED_SCORE_REGEX, score_text, "Score: XX")? {
            return Ok(Self::within_range(value, "Score: XX"));
        }

        if let Some(value) = Self::capture_number(&STANDALONE_NUMBER_REGEX, score_text, "standalone number")? {
            return Ok(Self::within_range(value, "standalone number"));
        }

        Ok(None)
    }

    fn full_text_score(raw_text: &str) -> Result<Option<u32>, ParseError> {
        if let Some(score) = Self::capture_number(&OUT_OF_HUNDRED_REGEX, raw_text, "full text X/100")? {
            log::debug!("✓ Extracted score from full text X/100: {}", score);
            return Ok(Some(score));
        }

        match Self::capture_number(&FULL_TEXT_SCORE_REGEX, raw_text, "full text score")? {
            Some(value) => Ok(Self::within_range(value, "full text score")),
            None => Ok(None),
        }
    }

    fn capture_number(regex: &Regex, text: &str, strategy: &str) -> Result<Option<u32>, ParseError> {
        let Some(digits) = regex.captures(text).and_then(|captures| captures.get(1)) else {
            return Ok(None);
        };

        Self::ascii_digits(digits.as_str())
            .parse::<u32>()
            .map(Some)
            .map_err(|e| ParseError::InvalidNumber {
                value: digits.as_str().to_string(),
                strategy: strategy.to_string(),
                reason: e.to_string(),
            })
    }

    /// `\d` matches any Unicode decimal digit (`８５`, `٨٥`) while `parse`
    /// only takes ASCII, so digits are rewritten to their ASCII value first.
    fn ascii_digits(digits: &str) -> String {
        digits
            .chars()
            .map(|c| Self::digit_value(c).and_then(|value| char::from_digit(value, 10)).unwrap_or(c))
            .collect()
    }

    /// Decimal digits come in contiguous runs whose length is a multiple of
    /// ten, each run starting at zero, so the value is the offset from the
    /// start of the run modulo ten.
    fn digit_value(c: char) -> Option<u32> {
        if let Some(value) = c.to_digit(10) {
            return Some(value);
        }
        if !Self::is_decimal_digit(c) {
            return None;
        }

        let mut run_start = c;
        while let Some(previous) = (run_start as u32).checked_sub(1).and_then(char::from_u32) {
            if !Self::is_decimal_digit(previous) {
                break;
            }
            run_start = previous;
        }

        Some((c as u32 - run_start as u32) % 10)
    }

    fn is_decimal_digit(c: char) -> bool {
        let mut buffer = [0u8; 4];
        DECIMAL_DIGIT_REGEX.is_match(c.encode_utf8(&mut buffer))
    }

    fn within_range(value: u32, strategy: &str) -> Option<u32> {
        if (MIN_SCORE..=MAX_SCORE).contains(&value) {
            log::debug!("✓ Extracted score from {} pattern: {}", strategy, value);
            Some(value)
        } else {
            log::debug!("✗ Score {} out of range", value);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_RESPONSE: &str = "**1. Summary (50-75 words):**
A small Flask app that tracks expenses. Well organised overall.

**2. Strengths (3-5 points):**
- Clear README
- Consistent commit history

**3. Areas for Improvement (3-5 points):**
- Add unit tests
- Use environment variables for secrets

**4. Performance Score (0-100):**
78/100

**5. Recommendations:**
- Set up CI
- Add type hints
";

    #[test]
    fn extracts_every_section_from_template_shaped_response() {
        let result = ResponseInterpreter::interpret(FULL_RESPONSE);

        assert_eq!(result.summary, "A small Flask app that tracks expenses. Well organised overall.");
        assert_eq!(result.strengths, vec!["- Clear README", "- Consistent commit history"]);
        assert_eq!(result.improvements, vec!["- Add unit tests", "- Use environment variables for secrets"]);
        assert_eq!(result.score, Some(78));
        assert_eq!(result.recommendations, vec!["- Set up CI", "- Add type hints"]);
        assert_eq!(result.full_text, FULL_RESPONSE);
        assert_eq!(result.parse_error, None);
    }

    #[test]
    fn score_out_of_hundred() {
        let result = ResponseInterpreter::interpret("**Performance Score (0-100):**\n\n85/100");
        assert_eq!(result.score, Some(85));
    }

    #[test]
    fn score_with_label() {
        let result = ResponseInterpreter::interpret("**Performance Score (0-100):**\n\nScore: 72");
        assert_eq!(result.score, Some(72));
    }

    #[test]
    fn out_of_hundred_value_is_not_range_checked() {
        let result = ResponseInterpreter::interpret("**Performance Score (0-100):**\n\n150/100");
        assert_eq!(result.score, Some(150));
    }

    #[test]
    fn rating_label_inside_performance_section() {
        let result = ResponseInterpreter::interpret("**Performance rating:**\n\nRating: 88");
        assert_eq!(result.score, Some(88));
    }

    #[test]
    fn standalone_number_as_last_resort() {
        let text = "**4. Performance Score (0-100):**\n\nI would rate it 82 out of a hundred.";
        assert_eq!(ResponseInterpreter::interpret(text).score, Some(82));
    }

    #[test]
    fn rejected_label_does_not_fall_back_to_standalone_number() {
        let text = "**Performance Score (0-100):**\n\nScore: 250 overall, maybe 80";
        assert_eq!(ResponseInterpreter::interpret(text).score, None);
    }

    #[test]
    fn performance_header_without_score_wording_is_ignored() {
        let result = ResponseInterpreter::interpret("**Performance:**\n\n95");
        assert_eq!(result.score, None);
    }

    #[test]
    fn falls_back_to_full_text_label() {
        let result = ResponseInterpreter::interpret("The project is solid. Final score: 91");
        assert_eq!(result.score, Some(91));
    }

    #[test]
    fn falls_back_to_full_text_out_of_hundred() {
        let result = ResponseInterpreter::interpret("Overall I'd give it 67 / 100.");
        assert_eq!(result.score, Some(67));
    }

    #[test]
    fn no_headers_leaves_everything_empty() {
        let text = "Nice project, keep going with the tests.";
        let result = ResponseInterpreter::interpret(text);

        assert_eq!(result.summary, "");
        assert!(result.strengths.is_empty());
        assert!(result.improvements.is_empty());
        assert!(result.recommendations.is_empty());
        assert_eq!(result.score, None);
        assert_eq!(result.full_text, text);
        assert_eq!(result.parse_error, None);
    }

    #[test]
    fn only_bullet_lines_are_kept() {
        let text = "**2. Strengths (3-5 points):**\n  - Clear README  \nThe project is tidy.\n* Frequent commits\n";
        let result = ResponseInterpreter::interpret(text);

        assert_eq!(result.strengths, vec!["- Clear README", "* Frequent commits"]);
    }

    #[test]
    fn empty_input() {
        let result = ResponseInterpreter::interpret("");

        assert_eq!(result, AnalysisResult::new(""));
    }

    #[test]
    fn oversized_number_is_reported_and_earlier_fields_survive() {
        let text = "**1. Summary:**\nNice work.\n\n**4. Performance Score (0-100):**\n99999999999/100";
        let result = ResponseInterpreter::interpret(text);

        assert_eq!(result.summary, "Nice work.");
        assert_eq!(result.score, None);
        assert_eq!(result.full_text, text);
        let error = result.parse_error.expect("parse error recorded");
        assert!(error.contains("99999999999"));
    }

    #[test]
    fn fullwidth_score_is_read_and_later_sections_survive() {
        let text = "**4. Performance Score (0-100):**\n\n８５/100\n\n**5. Recommendations:**\n- Set up CI\n";
        let result = ResponseInterpreter::interpret(text);

        assert_eq!(result.score, Some(85));
        assert_eq!(result.recommendations, vec!["- Set up CI"]);
        assert_eq!(result.parse_error, None);
    }

    #[test]
    fn arabic_indic_and_mathematical_digits_are_read() {
        assert_eq!(ResponseInterpreter::interpret("**Performance Score:**\n\nScore: ٧٢").score, Some(72));
        assert_eq!(ResponseInterpreter::interpret("Overall 𝟗𝟏/100").score, Some(91));
    }

    #[test]
    fn digit_values_across_scripts() {
        assert_eq!(ResponseInterpreter::digit_value('7'), Some(7));
        assert_eq!(ResponseInterpreter::digit_value('０'), Some(0));
        assert_eq!(ResponseInterpreter::digit_value('९'), Some(9));
        assert_eq!(ResponseInterpreter::digit_value('x'), None);
        assert_eq!(ResponseInterpreter::ascii_digits("８５"), "85");
    }

    #[test]
    fn bold_word_inside_body_truncates_the_section() {
        let text = "**2. Strengths:**\n- Uses **pytest** well\n- Good docs\n";
        let result = ResponseInterpreter::interpret(text);

        assert_eq!(result.strengths, vec!["- Uses"]);
    }

    #[test]
    fn later_section_of_same_kind_wins() {
        let text = "**Summary:**\nfirst\n**Executive summary:**\nsecond";
        assert_eq!(ResponseInterpreter::interpret(text).summary, "second");
    }
}
