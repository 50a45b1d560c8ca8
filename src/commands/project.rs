use anyhow::Result;

use captains_log::db::Database;
use captains_log::models::ProjectDraft;
use captains_log::Dashboard;

use super::truncate;

pub fn add(dashboard: &mut Dashboard<Database>, draft: ProjectDraft) -> Result<()> {
    match dashboard.add_project(draft) {
        Ok(project) => {
            println!("Plotted voyage #{}: {}", project.id, project.title);
            if !project.milestones.is_empty() {
                println!("  {} milestones", project.milestones.len());
            }
        }
        Err(e) => println!("Voyage not plotted: {}", e),
    }
    Ok(())
}

pub fn list(dashboard: &Dashboard<Database>) -> Result<()> {
    let projects = dashboard.projects();

    if projects.is_empty() {
        println!("No voyages found.");
        return Ok(());
    }

    for p in projects {
        let done = p.milestones.iter().filter(|m| m.completed).count();
        println!(
            "#{:<14} {:<40} {:>3}%  {}/{} milestones  {} crew  due {}",
            p.id,
            truncate(&p.title, 40),
            p.progress,
            done,
            p.milestones.len(),
            p.team_members.len(),
            p.deadline.format("%Y-%m-%d")
        );
        for m in p.milestones.iter().take(3) {
            let marker = if m.completed { "✓" } else { " " };
            println!("    [{}] {}", marker, m.title);
        }
    }

    Ok(())
}

pub fn delete(dashboard: &mut Dashboard<Database>, id: &str) -> Result<()> {
    if dashboard.delete_project(id) {
        println!("Abandoned voyage #{}", id);
    } else {
        println!("Voyage #{} not found", id);
    }
    Ok(())
}
