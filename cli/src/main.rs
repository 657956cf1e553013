mod logging;
mod report;
mod tui;

use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Parser;
use timesheet_core::{format_short_date, iso_week_number, monday_of, parse_week_anchor, week_key, Config};
use timesheet_core::time::format_week_range;

#[derive(Parser)]
#[command(name = "timeregistrering")]
#[command(about = "Weekly timesheet for the terminal", long_about = None)]
struct Cli {
    /// Config file (default: <config dir>/timeregistrering/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the Terminal User Interface
    Tui {
        /// Week to open: today, next, prev, +2w, 2024-W05 or 2024-01-31
        #[arg(short, long)]
        week: Option<String>,
    },
    /// Print a week as a table (usage: report --week 2024-W05 man:7.5@100 tir:8)
    Report {
        /// Week to print (same forms as `tui --week`)
        #[arg(short, long)]
        week: Option<String>,
        /// Print the week as JSON instead of a table
        #[arg(long)]
        json: bool,
        /// Day assignments as day:hours[@code]
        #[arg(trailing_var_arg = true)]
        entries: Vec<String>,
    },
    /// Show the ISO week number and date range of a date
    Week {
        anchor: Option<String>,
    },
}

fn resolve(week: Option<&str>, today: NaiveDate) -> Result<NaiveDate> {
    parse_week_anchor(week.unwrap_or("today"), today)
}

fn week_summary(date: NaiveDate) -> String {
    let monday = monday_of(date);
    format!(
        "Uge {} ({})\n  Key:   {}\n  Range: {}",
        iso_week_number(date),
        format_short_date(date),
        week_key(monday),
        format_week_range(monday),
    )
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load_or_default(cli.config.as_deref())?;
    let today = Local::now().date_naive();

    match cli.command.unwrap_or(Commands::Tui { week: None }) {
        Commands::Tui { week } => {
            logging::init_file(&config)?;
            tui::run(resolve(week.as_deref(), today)?, today)?;
        },
        Commands::Report { week, json, entries } => {
            logging::init_stderr(&config)?;
            let sheet = report::build_timesheet(resolve(week.as_deref(), today)?, &entries)?;
            report::print(&sheet, json)?;
        },
        Commands::Week { anchor } => {
            logging::init_stderr(&config)?;
            let date = resolve(anchor.as_deref(), today)?;
            println!("{}", week_summary(date));
        },
    }
    Ok(())
}
