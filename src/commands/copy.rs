use std::collections::HashSet;

use anyhow::Result;
use chrono::NaiveDate;
use timetable_core::{JsonFileStore, Session};

pub fn run(store: JsonFileStore, source: NaiveDate, targets: &[NaiveDate]) -> Result<()> {
    let mut session = Session::open(store)?;

    if session.events_on(source).is_empty() {
        println!("No events on {source}, nothing to copy");
        return Ok(());
    }

    let before: HashSet<String> = session.events().iter().map(|e| e.id.clone()).collect();
    session.copy_day(source, targets)?;
    let after: HashSet<String> = session.events().iter().map(|e| e.id.clone()).collect();

    let added = after.difference(&before).count();
    let removed = before.difference(&after).count();
    println!(
        "{added} event(s) added, {removed} toggled off across {} target day(s)",
        targets.len()
    );
    Ok(())
}
