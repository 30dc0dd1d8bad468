use clap::Parser;
use edutrack::errors::ErrorHandler;
use edutrack::structs::cli::Cli;
use edutrack::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut runner = CommandRunner::new();

    if let Err(error) = runner.run_command(cli.command).await {
        ErrorHandler::handle_error(&error);
        return Err(anyhow::anyhow!("edutrack failed with {} severity", error.severity().name()));
    }

    Ok(())
}
