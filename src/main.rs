// Agricultural operations calendar
// Command-line front end for the scheduling engine

use std::path::PathBuf;

use agri_calendar::models::ui::ViewType;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

mod cli;

/// Field operations calendar: grids, recurring events and filters
#[derive(Parser, Debug)]
#[command(name = "agri-calendar")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a settings TOML file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// JSON file with an array of events (defaults to the sample schedule)
    #[arg(short, long, global = true)]
    events: Option<PathBuf>,

    /// Override today's date (YYYY-MM-DD)
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a month, week or day grid with its events
    Grid {
        /// month, week or day (defaults to the configured view)
        #[arg(short, long)]
        view: Option<ViewType>,
        /// Date the grid is built around (defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },
    /// List occurrences on a single date
    Day {
        date: NaiveDate,
    },
    /// Expand one event's occurrences over a date range
    Expand {
        /// Event ID
        id: i64,
        #[arg(long)]
        from: NaiveDate,
        #[arg(long)]
        to: NaiveDate,
    },
    /// Show the next upcoming occurrences
    Upcoming {
        /// Maximum number of entries (defaults to the configured limit)
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// List events matching category, member and location filters
    Filter {
        #[arg(long = "category")]
        categories: Vec<String>,
        #[arg(long = "member")]
        members: Vec<String>,
        #[arg(long = "location")]
        locations: Vec<String>,
    },
    /// List the category registry
    Categories,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let ctx = cli::Context::load(args.config.as_deref(), args.events.as_deref(), args.today)?;

    match args.command {
        Command::Grid { view, date } => cli::run_grid(&ctx, view, date, args.json),
        Command::Day { date } => cli::run_day(&ctx, date, args.json),
        Command::Expand { id, from, to } => cli::run_expand(&ctx, id, from, to, args.json),
        Command::Upcoming { limit } => cli::run_upcoming(&ctx, limit, args.json),
        Command::Filter {
            categories,
            members,
            locations,
        } => cli::run_filter(&ctx, categories, members, locations, args.json),
        Command::Categories => cli::run_categories(&ctx, args.json),
    }
}
