mod commands;
mod render;
mod utils;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use meetcal_core::date::{self, MonthCursor};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "meetcal")]
#[command(about = "Browse your meetings by month, week or day and mark them synced")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a month grid with meetings per day
    Month {
        /// Year to show (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Month to show, 1-12 (defaults to the current month)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,

        /// Only count meetings matching this text
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show the Sunday-start week containing a date
    Week {
        /// Any day of the week (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Only show meetings matching this text
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show the agenda for a single day
    Day {
        /// Day to show (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Only show meetings matching this text
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Find meetings by title, attendee or organizer
    Search { query: String },
    /// Mark a meeting as synced
    Sync { id: u64 },
    /// Forget stored meetings and start over from the default set
    Reset,
    /// Show configuration and data paths
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;
    let cli = Cli::parse();
    let today = date::today();

    match cli.command {
        Commands::Month {
            year,
            month,
            search,
        } => {
            let current = MonthCursor::containing(today);
            let cursor = MonthCursor::new(
                year.unwrap_or(current.year()),
                month.map_or(current.month_index() as i32, |m| m as i32 - 1),
            );
            commands::month::run(cursor, search.as_deref(), today)
        }
        Commands::Week { date, search } => {
            let day = resolve_date(date.as_deref(), today)?;
            commands::week::run(day, search.as_deref(), today)
        }
        Commands::Day { date, search } => {
            let day = resolve_date(date.as_deref(), today)?;
            commands::day::run(day, search.as_deref(), today)
        }
        Commands::Search { query } => commands::search::run(&query),
        Commands::Sync { id } => commands::sync::run(id, today).await,
        Commands::Reset => commands::reset::run(),
        Commands::Config => commands::config::run(),
    }
}

/// Log lines go to stderr so they never interleave with rendered views.
fn init_logging() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_env("MEETCAL_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).context("Failed to set up logging")?;

    Ok(())
}

fn resolve_date(input: Option<&str>, today: NaiveDate) -> Result<NaiveDate> {
    match input {
        None => Ok(today),
        Some(s) => date::parse_local_date(s)
            .with_context(|| format!("Invalid date '{s}'. Expected YYYY-MM-DD")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn month_flag_is_bounded() {
        assert!(Cli::try_parse_from(["meetcal", "month", "-m", "13"]).is_err());
        assert!(Cli::try_parse_from(["meetcal", "month", "-y", "2025", "-m", "9"]).is_ok());
    }

    #[test]
    fn resolve_date_defaults_to_today() {
        let today = NaiveDate::from_ymd_opt(2025, 10, 15).unwrap();
        assert_eq!(resolve_date(None, today).unwrap(), today);
        assert_eq!(
            resolve_date(Some("2025-09-29"), today).unwrap(),
            NaiveDate::from_ymd_opt(2025, 9, 29).unwrap()
        );
        assert!(resolve_date(Some("next tuesday"), today).is_err());
    }
}
