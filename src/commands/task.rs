use anyhow::Result;

use captains_log::db::Database;
use captains_log::models::{Priority, TaskDraft};
use captains_log::views::{filter_tasks, TaskFilter};
use captains_log::Dashboard;

use super::truncate;

pub fn add(
    dashboard: &mut Dashboard<Database>,
    title: &str,
    priority: Priority,
    due: Option<&str>,
) -> Result<()> {
    let draft = TaskDraft {
        title: title.to_string(),
        priority,
        due_date: due.unwrap_or_default().to_string(),
    };

    match dashboard.add_task(draft) {
        Ok(task) => println!("Logged bounty #{}: {}", task.id, task.title),
        Err(e) => println!("Bounty not logged: {}", e),
    }
    Ok(())
}

pub fn list(dashboard: &Dashboard<Database>, filter: TaskFilter) -> Result<()> {
    let tasks = filter_tasks(dashboard.tasks(), filter);

    if tasks.is_empty() {
        println!("No bounties found.");
        return Ok(());
    }

    for task in tasks {
        let checkbox = if task.completed { "[x]" } else { "[ ]" };
        let due = task
            .due_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        println!(
            "#{:<14} {} {} {:<40} {:8} {}",
            task.id,
            checkbox,
            task.priority.flag(),
            truncate(&task.title, 40),
            task.priority,
            due
        );
    }

    Ok(())
}

pub fn toggle(dashboard: &mut Dashboard<Database>, id: &str) -> Result<()> {
    match dashboard.toggle_task(id) {
        Some(task) if task.completed => println!("Completed bounty #{}: {}", task.id, task.title),
        Some(task) => println!("Reopened bounty #{}: {}", task.id, task.title),
        None => println!("Bounty #{} not found", id),
    }
    Ok(())
}

pub fn delete(dashboard: &mut Dashboard<Database>, id: &str) -> Result<()> {
    if dashboard.delete_task(id) {
        println!("Deleted bounty #{}", id);
    } else {
        println!("Bounty #{} not found", id);
    }
    Ok(())
}
