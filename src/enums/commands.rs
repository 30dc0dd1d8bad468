use std::path::PathBuf;
use clap::Subcommand;
use crate::config::constants::DEFAULT_SUMMARY_WORDS;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Check the configuration for problems
    Validate,
    /// Totals across all of your assignments
    Dashboard,
    #[clap(subcommand)]
    Assignment(AssignmentCommands),
    #[clap(subcommand)]
    Repo(RepoCommands),
    /// Fetch GitHub data for a repository and grade it with the AI model
    Analyze {
        repo_id: u64,
    },
    /// Aggregate statistics for one assignment
    Analytics {
        assignment_id: u64,
        #[clap(long)]
        json: bool,
    },
    /// Generate a markdown report for one assignment
    Report {
        assignment_id: u64,
        #[clap(short, long)]
        output: Option<PathBuf>,
    },
    /// Interpret a saved model response without calling any API
    Interpret {
        file: PathBuf,
        #[clap(long)]
        json: bool,
    },
    /// Summarize a text file with the AI model
    Summarize {
        file: PathBuf,
        #[clap(short, long, default_value_t = DEFAULT_SUMMARY_WORDS)]
        max_words: usize,
    },
}

#[derive(Subcommand, Debug)]
pub enum AssignmentCommands {
    Create {
        #[clap(short, long)]
        title: String,
        #[clap(short, long)]
        description: Option<String>,
        /// ISO 8601 date or date-time
        #[clap(long)]
        deadline: Option<String>,
    },
    List,
    Show {
        assignment_id: u64,
    },
    Delete {
        assignment_id: u64,
    },
}

#[derive(Subcommand, Debug)]
pub enum RepoCommands {
    Add {
        assignment_id: u64,
        #[clap(short, long)]
        student: String,
        #[clap(short, long)]
        url: String,
    },
    /// Import `student name,repository url` lines from a file
    BulkAdd {
        assignment_id: u64,
        file: PathBuf,
    },
    Show {
        repo_id: u64,
    },
}
