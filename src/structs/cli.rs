use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser, Debug)]
#[clap(name = "edutrack")]
#[clap(about = "Track and grade student GitHub repositories with AI feedback", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
