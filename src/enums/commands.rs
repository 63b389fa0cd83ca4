use clap::Subcommand;
use crate::enums::value_format::ValueFormat;

#[derive(Subcommand)]
pub enum Commands {
    /// Watch screen lock events and forward them to the webhook
    Run,
    /// Write default settings for any key that is not set yet
    Init,
    /// Print the stored settings and the resulting webhook URL
    Show,
    /// Change one stored setting
    Set {
        key: String,
        value: String,
    },
    /// Manage the additional URL parameters
    Params {
        #[clap(subcommand)]
        action: ParamsCommand,
    },
    /// Print the URL that would be requested for an unlock event
    Preview,
    /// Send one request using the stored settings, optionally overridden
    Test {
        #[clap(short, long)]
        base_url: Option<String>,
        #[clap(short, long)]
        param_name: Option<String>,
        #[clap(short, long)]
        format: Option<ValueFormat>,
    },
}

#[derive(Subcommand)]
pub enum ParamsCommand {
    List,
    Add {
        key: String,
        #[clap(default_value = "")]
        value: String,
    },
    Remove {
        id: String,
    },
}
