use anyhow::Result;
use chrono::{Local, NaiveDate};
use timetable_core::stats::day_stats;
use timetable_core::store::EventStore;
use timetable_core::time::format_minute;

pub fn run(store: &impl EventStore, date: Option<NaiveDate>, json: bool) -> Result<()> {
    let date = date.unwrap_or_else(|| Local::now().date_naive());
    let mut events = store.events_by_date(date)?;
    events.sort_by_key(|e| (e.start_minute, e.end_minute));

    if json {
        println!("{}", serde_json::to_string_pretty(&events)?);
        return Ok(());
    }

    if events.is_empty() {
        println!("No events on {date}");
        return Ok(());
    }

    println!("{date}");
    for event in &events {
        let recurring = if event.group_id.is_some() {
            "  (recurring)"
        } else {
            ""
        };
        println!(
            "  {} - {}  {}  [{}]{}",
            format_minute(event.start_minute),
            format_minute(event.end_minute),
            event.title,
            event.id,
            recurring
        );
    }

    let stats = day_stats(&events);
    let span = match (stats.earliest_start, stats.latest_end) {
        (Some(first), Some(last)) => {
            format!(", {} - {}", format_minute(first), format_minute(last))
        }
        _ => String::new(),
    };
    println!();
    println!(
        "{} event(s), {} busy minute(s){}",
        stats.total_events, stats.busy_minutes, span
    );
    Ok(())
}
