mod commands;
mod config;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use timetable_core::JsonFileStore;

#[derive(Parser)]
#[command(name = "timetable")]
#[command(about = "Manage your local timetable: day schedules, recurring copies across days, and group edits")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new event
    New {
        /// Event title
        title: String,

        /// Day, e.g. "2024-01-01" (defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Start time, e.g. "08:00"
        #[arg(short, long)]
        start: String,

        /// End time, e.g. "09:30"
        #[arg(short, long, conflicts_with = "duration")]
        end: Option<String>,

        /// Duration in minutes
        #[arg(long, conflicts_with = "end")]
        duration: Option<u16>,

        /// Color tag: a palette index (0-7) or a #RRGGBB value
        #[arg(short, long)]
        color: Option<String>,
    },
    /// Show one day's schedule
    Show {
        /// Day to show (defaults to today)
        date: Option<NaiveDate>,

        /// Print the raw event records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Copy a day's events onto other days, toggling existing copies off
    Copy {
        /// Day to copy from
        source: NaiveDate,

        /// Days to copy onto
        #[arg(required = true)]
        targets: Vec<NaiveDate>,
    },
    /// Edit every event in a recurring group
    EditGroup {
        /// Group id shared by the recurring instances
        group_id: String,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New start time, e.g. "07:00"
        #[arg(short, long)]
        start: Option<String>,

        /// New end time, e.g. "07:45"
        #[arg(short, long)]
        end: Option<String>,

        /// New color: a palette index (0-7) or a #RRGGBB value
        #[arg(short, long)]
        color: Option<String>,
    },
    /// Delete every event in a recurring group
    DeleteGroup {
        /// Group id shared by the recurring instances
        group_id: String,
    },
    /// Delete one event by id
    Rm {
        /// Event id (shown by `show`)
        id: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = config::load()?;
    log::debug!("using data dir {}", config.data_dir.display());
    let store = JsonFileStore::new(&config.data_dir);

    match cli.command {
        Commands::New {
            title,
            date,
            start,
            end,
            duration,
            color,
        } => commands::new::run(&store, &config, title, date, &start, end, duration, color),
        Commands::Show { date, json } => commands::show::run(&store, date, json),
        Commands::Copy { source, targets } => commands::copy::run(store, source, &targets),
        Commands::EditGroup {
            group_id,
            title,
            start,
            end,
            color,
        } => commands::group::edit(store, &group_id, title, start, end, color),
        Commands::DeleteGroup { group_id } => commands::group::delete(store, &group_id),
        Commands::Rm { id } => commands::rm::run(&store, &id),
    }
}
