use anyhow::Result;

use captains_log::db::Database;
use captains_log::models::EventDraft;
use captains_log::views::events_by_date;
use captains_log::Dashboard;

use super::truncate;

pub fn add(dashboard: &mut Dashboard<Database>, draft: EventDraft) -> Result<()> {
    match dashboard.add_event(draft) {
        Ok(event) => println!(
            "{} Sighted on the horizon #{}: {} ({} {})",
            event.kind.icon(),
            event.id,
            event.title,
            event.date.format("%Y-%m-%d"),
            event.time
        ),
        Err(e) => println!("Event not added: {}", e),
    }
    Ok(())
}

pub fn list(dashboard: &Dashboard<Database>) -> Result<()> {
    let events = events_by_date(dashboard.events());

    if events.is_empty() {
        println!("Nothing on the horizon.");
        return Ok(());
    }

    for event in events {
        println!(
            "#{:<14} {} {} {:<10} {:<36} {}",
            event.id,
            event.date.format("%Y-%m-%d"),
            event.kind.icon(),
            event.time,
            truncate(&event.title, 36),
            event.kind
        );
        if let Some(location) = &event.location {
            println!("    at {}", location);
        }
        if let Some(description) = &event.description {
            for line in description.lines() {
                println!("    {}", line);
            }
        }
    }

    Ok(())
}

pub fn delete(dashboard: &mut Dashboard<Database>, id: &str) -> Result<()> {
    if dashboard.delete_event(id) {
        println!("Removed event #{}", id);
    } else {
        println!("Event #{} not found", id);
    }
    Ok(())
}
