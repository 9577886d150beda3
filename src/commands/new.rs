use anyhow::Result;
use chrono::{Local, NaiveDate};
use timetable_core::event::Event;
use timetable_core::store::EventStore;
use timetable_core::time::format_minute;

use crate::commands::{parse_time_arg, resolve_color};
use crate::config::Config;

pub fn run(
    store: &impl EventStore,
    config: &Config,
    title: String,
    date: Option<NaiveDate>,
    start: &str,
    end: Option<String>,
    duration: Option<u16>,
    color: Option<String>,
) -> Result<()> {
    let date = date.unwrap_or_else(|| Local::now().date_naive());
    let start_minute = parse_time_arg(start)?;
    let end_minute = match (end, duration) {
        (Some(end), _) => parse_time_arg(&end)?,
        (None, Some(minutes)) => start_minute.saturating_add(minutes),
        (None, None) => start_minute.saturating_add(config.default_duration_minutes),
    };
    let color_hex = resolve_color(color.as_deref())?;

    let event = Event::new(title, date, start_minute, end_minute, color_hex)?;
    store.insert(event.clone())?;

    println!(
        "Created: {} on {} ({} - {})",
        event.title,
        event.date,
        format_minute(event.start_minute),
        format_minute(event.end_minute)
    );
    println!("  id: {}", event.id);
    Ok(())
}
