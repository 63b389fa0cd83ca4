use anyhow::Context;
use clap::Parser;
use lock_snitch::errors::ErrorHandler;
use lock_snitch::structs::cli::Cli;
use lock_snitch::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut runner = CommandRunner::new(cli.config).context("could not open settings")?;

    if let Err(e) = runner.run_command(cli.command).await {
        ErrorHandler::handle_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
