use anyhow::Result;
use timetable_core::store::EventStore;

pub fn run(store: &impl EventStore, id: &str) -> Result<()> {
    let before = store.load()?.len();
    let events = store.delete_by_id(id)?;

    if events.len() == before {
        println!("No event with id {id}");
    } else {
        println!("Deleted {id}");
    }
    Ok(())
}
