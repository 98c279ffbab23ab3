use anyhow::Result;
use clap::{Parser, Subcommand};

use node_balance::cli::{
    handle_config_command, handle_report_command, handle_run_command, ReportArgs, RunArgs,
    SettingsOverrides,
};
use node_balance::config::{NodeBalancePaths, Settings};

#[derive(Parser)]
#[command(
    name = "node-balance",
    version,
    about = "Daily balance reports for Lightning routing nodes",
    long_about = "node-balance reads the accounting exports of a Lightning node \
                  (via bos), totals forwards, rebalances, invoices and on-chain \
                  activity for the day and the node's lifetime, and sends the \
                  resulting report to a Telegram chat."
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    overrides: SettingsOverrides,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pull today's exports from bos and send the report
    Run(RunArgs),

    /// Build a report from saved export files and print it
    Report(ReportArgs),

    /// Show the configuration and paths in use
    Config {
        /// Write the default settings file if none exists
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let paths = NodeBalancePaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    cli.overrides.apply(&mut settings);

    match cli.command {
        Commands::Run(args) => handle_run_command(&settings, args)?,
        Commands::Report(args) => handle_report_command(&settings, args)?,
        Commands::Config { init } => handle_config_command(&paths, &settings, init)?,
    }

    Ok(())
}
