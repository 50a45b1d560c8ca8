//! Read-only slices of the collections for display.

use std::str::FromStr;

use crate::errors::ValidationError;
use crate::models::{Event, Project, Task};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TaskFilter {
    pub fn matches(self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Active => !task.completed,
            TaskFilter::Completed => task.completed,
        }
    }
}

impl FromStr for TaskFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(TaskFilter::All),
            "active" => Ok(TaskFilter::Active),
            "completed" => Ok(TaskFilter::Completed),
            _ => Err(ValidationError::InvalidChoice {
                field: "filter",
                value: s.to_string(),
                expected: "all, active, completed",
            }),
        }
    }
}

pub fn filter_tasks(tasks: &[Task], filter: TaskFilter) -> Vec<&Task> {
    tasks.iter().filter(|t| filter.matches(t)).collect()
}

/// Events by ascending date; same-day events keep insertion order.
pub fn events_by_date(events: &[Event]) -> Vec<&Event> {
    let mut sorted: Vec<&Event> = events.iter().collect();
    sorted.sort_by_key(|e| e.date);
    sorted
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetStats {
    pub quests_complete: usize,
    pub active_missions: usize,
    pub voyages: usize,
    pub upcoming_events: usize,
}

impl FleetStats {
    pub fn collect(tasks: &[Task], projects: &[Project], events: &[Event]) -> Self {
        let quests_complete = tasks.iter().filter(|t| t.completed).count();
        FleetStats {
            quests_complete,
            active_missions: tasks.len() - quests_complete,
            voyages: projects.len(),
            upcoming_events: events.len(),
        }
    }
}
