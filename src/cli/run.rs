//! Report CLI commands
//!
//! `run` pulls today's exports from bos and delivers the report;
//! `report` builds the same report from saved export files.

use std::path::PathBuf;

use chrono::{Datelike, Local};
use clap::{Args, ValueEnum};

use crate::config::Settings;
use crate::delivery::{DeliverySink, StdoutSink, TelegramSink};
use crate::display::{format_totals_table, report_to_json};
use crate::error::{BalanceError, BalanceResult};
use crate::reports::DailyBalanceReport;
use crate::services::{aggregate, collect_exports, run_plan};
use crate::sources::{BosCli, DirectorySource, ExportSource};

/// How a report is printed to the terminal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The chat message, as delivered
    #[default]
    Message,
    /// Per-category totals table
    Table,
    /// Totals, breakdowns and profits as JSON
    Json,
}

/// Arguments of `run`
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Day of month to report on (defaults to today)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=31))]
    pub day: Option<u32>,

    /// Month to report on (defaults to the current month)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,

    /// Print the report instead of sending it
    #[arg(long)]
    pub dry_run: bool,

    /// Output format for --dry-run
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Message)]
    pub format: OutputFormat,
}

/// Arguments of `report`
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Directory holding <category>.csv and <category>-lifetime.csv exports
    #[arg(long)]
    pub from_dir: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Message)]
    pub format: OutputFormat,
}

/// Collect, aggregate and assemble a report
///
/// Fails without a report if any export call fails or any export is
/// malformed.
pub fn build_report(source: &dyn ExportSource, node_name: &str) -> BalanceResult<DailyBalanceReport> {
    let plan = run_plan();
    let blobs = collect_exports(source, &plan)?;
    let aggregation = aggregate(&blobs);

    if !aggregation.is_complete() {
        log::error!(
            "{} export(s) could not be parsed; no report will be produced",
            aggregation.failures.len()
        );
    }

    DailyBalanceReport::from_aggregation(node_name, aggregation)
}

/// Render a report in the requested format
pub fn render(report: &DailyBalanceReport, format: OutputFormat) -> BalanceResult<String> {
    match format {
        OutputFormat::Message => Ok(report.render()),
        OutputFormat::Table => Ok(format_totals_table(report)),
        OutputFormat::Json => report_to_json(report),
    }
}

/// Handle `run`
pub fn handle_run_command(settings: &Settings, args: RunArgs) -> BalanceResult<()> {
    let sink = if args.dry_run {
        None
    } else {
        let (token, chat_id) = settings.telegram.credentials().ok_or_else(|| {
            BalanceError::Config(
                "Telegram bot token and chat id are required (use --dry-run to print instead)"
                    .into(),
            )
        })?;
        Some(TelegramSink::new(token, chat_id)?)
    };

    let today = Local::now().date_naive();
    let day = args.day.unwrap_or_else(|| today.day());
    let month = args.month.unwrap_or_else(|| today.month());
    log::info!(
        "Building daily balance for {} (day {}, month {})",
        settings.node_name,
        day,
        month
    );

    let source = BosCli::new(&settings.bos_path, day, month);
    let report = build_report(&source, &settings.node_name)?;

    match sink {
        Some(sink) => {
            // The report exists at this point; a failed send does not fail the run.
            if let Err(e) = sink.deliver(&report.render()) {
                log::error!("Report was built but not delivered: {}", e);
            }
            Ok(())
        }
        None => StdoutSink.deliver(&render(&report, args.format)?),
    }
}

/// Handle `report`
pub fn handle_report_command(settings: &Settings, args: ReportArgs) -> BalanceResult<()> {
    let source = DirectorySource::new(args.from_dir);
    log::info!("Building report from {}", source.dir().display());

    let report = build_report(&source, &settings.node_name)?;
    StdoutSink.deliver(&render(&report, args.format)?)
}
