use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod commands;
mod output;

use commands::route::{handle_route, PolicyArg};
use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Black Rock City TimeLetter route planner")]
struct Cli {
    /// Output format for command results.
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the shortest walking route between two TimeLetter addresses.
    Route {
        /// Current location, e.g. 2A or 9:30D; prompted for when omitted.
        #[arg(long = "from")]
        from: Option<String>,
        /// Desired location; prompted for when omitted.
        #[arg(long = "to")]
        to: Option<String>,
        /// Angular-displacement policy.
        #[arg(long, value_enum, default_value_t = PolicyArg::Legacy)]
        policy: PolicyArg,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Route { from, to, policy } => {
            handle_route(from.as_deref(), to.as_deref(), policy, cli.format)
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
