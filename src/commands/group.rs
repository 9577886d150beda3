use anyhow::{bail, Result};
use timetable_core::engine::EventPatch;
use timetable_core::event::MIN_DURATION_MIN;
use timetable_core::{JsonFileStore, Session};

use crate::commands::{parse_time_arg, resolve_color};

pub fn edit(
    store: JsonFileStore,
    group_id: &str,
    title: Option<String>,
    start: Option<String>,
    end: Option<String>,
    color: Option<String>,
) -> Result<()> {
    let start_minute = start.as_deref().map(parse_time_arg).transpose()?;
    let end_minute = end.as_deref().map(parse_time_arg).transpose()?;
    let color_hex = match color.as_deref() {
        Some(color) => Some(resolve_color(Some(color))?),
        None => None,
    };

    // The engine applies patches verbatim, so check the duration rule here
    // when both ends of the range are being changed.
    if let (Some(start), Some(end)) = (start_minute, end_minute) {
        if end < start + MIN_DURATION_MIN {
            bail!("Events must be at least {MIN_DURATION_MIN} minutes long");
        }
    }

    let patch = EventPatch {
        title,
        start_minute,
        end_minute,
        color_hex,
    };
    if patch.is_empty() {
        bail!("Nothing to change: pass at least one of --title/--start/--end/--color");
    }

    let mut session = Session::open(store)?;
    let matches = count_group(&session, group_id);
    if matches == 0 {
        println!("No events in group {group_id}");
        return Ok(());
    }

    session.update_group(group_id, &patch)?;
    println!("Updated {matches} event(s) in group {group_id}");
    Ok(())
}

pub fn delete(store: JsonFileStore, group_id: &str) -> Result<()> {
    let mut session = Session::open(store)?;
    let matches = count_group(&session, group_id);
    if matches == 0 {
        println!("No events in group {group_id}");
        return Ok(());
    }

    session.delete_group(group_id)?;
    println!("Deleted {matches} event(s) in group {group_id}");
    Ok(())
}

fn count_group(session: &Session<JsonFileStore>, group_id: &str) -> usize {
    session
        .events()
        .iter()
        .filter(|e| e.group_id.as_deref() == Some(group_id))
        .count()
}
