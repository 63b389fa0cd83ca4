use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "lock-snitch")]
#[clap(about = "Forward macOS screen lock changes to a webhook", long_about = None)]
pub struct Cli {
    /// Use this settings file instead of ~/lock-snitch/config.toml
    #[clap(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}
