pub const CONFIG_DIR_NAME: &str = ".edutrack";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const DATA_FILE_NAME: &str = "edutrack.json";

pub const GITHUB_ACCEPT_HEADER: &str = "application/vnd.github.v3+json";
pub const GITHUB_TOKEN_PLACEHOLDER: &str = "your_github_token_here";
pub const COMMITS_PER_PAGE: u32 = 100;
pub const CONTRIBUTORS_PER_PAGE: u32 = 10;
pub const RECENT_COMMITS_KEPT: usize = 10;
pub const README_MAX_CHARS: usize = 2000;
pub const ACTIVITY_WINDOW_DAYS: i64 = 7;

pub const PROMPT_README_EXCERPT_CHARS: usize = 500;
pub const DEFAULT_SUMMARY_WORDS: usize = 100;

pub const DASHBOARD_RECENT_ASSIGNMENTS: usize = 5;
pub const ANALYTICS_TOP_LANGUAGES: usize = 10;
pub const ANALYTICS_LEADERBOARD_SIZE: usize = 5;
pub const REPORT_SUMMARY_PREVIEW_CHARS: usize = 200;
