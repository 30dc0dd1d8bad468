use crate::config::constants::PROMPT_README_EXCERPT_CHARS;
use crate::prompts::analysis_prompt::{ANALYSIS_PROMPT_INSTRUCTIONS, ANALYSIS_PROMPT_INTRO};
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::github::repository_data::RepositoryData;
use crate::structs::language_stat::LanguageStat;

const NOT_AVAILABLE: &str = "N/A";

pub fn generate_analysis_request(data: &RepositoryData) -> AnalysisRequest<'_> {
    AnalysisRequest {
        prompt: generate_analysis_prompt(data),
        source: data,
    }
}

pub fn generate_analysis_prompt(data: &RepositoryData) -> String {
    let language_breakdown = language_breakdown(data);

    let (last_message, last_date) = match &data.last_commit {
        Some(commit) => (
            commit.message.as_deref().unwrap_or(NOT_AVAILABLE),
            commit.date.as_deref().unwrap_or(NOT_AVAILABLE),
        ),
        None => (NOT_AVAILABLE, NOT_AVAILABLE),
    };

    let readme_excerpt = if data.readme_content.is_empty() {
        "No README available".to_string()
    } else {
        data.readme_content.chars().take(PROMPT_README_EXCERPT_CHARS).collect()
    };

    let description = data
        .repo_info
        .description
        .as_deref()
        .unwrap_or("No description available");

    format!(
        "
{intro}

**Repository Information:**
- Total Commits: {commits}
- Languages Used:
{languages}

**Last Commit:**
- Message: {last_message}
- Date: {last_date}

**Contributors:** {contributors}

**README Excerpt:**
{readme}

**Project Description:**
{description}

---

{instructions}",
        intro = ANALYSIS_PROMPT_INTRO,
        commits = data.commit_count,
        languages = language_breakdown,
        last_message = last_message,
        last_date = last_date,
        contributors = data.contributors.len(),
        readme = readme_excerpt,
        description = description,
        instructions = ANALYSIS_PROMPT_INSTRUCTIONS,
    )
}

pub fn generate_summary_prompt(text: &str, max_words: usize) -> String {
    format!("Summarize the following text in {} words or less:\n\n{}", max_words, text)
}

fn language_breakdown(data: &RepositoryData) -> String {
    let stats = LanguageStat::from_counts(&data.languages);
    if stats.is_empty() {
        return "- No language data available".to_string();
    }

    stats
        .iter()
        .map(|stat| format!("- {}: {:.1}%\n", stat.language, stat.percentage))
        .collect()
}
