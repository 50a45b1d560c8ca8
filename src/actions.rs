//! User intents as plain collection edits.
//!
//! Every handler validates before it takes an id, mutates only the collection it is given and
//! reports how much experience the change is worth. Persistence and awarding happen in
//! [`crate::dashboard::Dashboard`].

use chrono::NaiveDate;

use crate::errors::ValidationError;
use crate::ids::IdSource;
use crate::models::{Event, EventDraft, Milestone, Project, ProjectDraft, Record, Task, TaskDraft};

pub const TASK_ADDED_XP: u32 = 10;
pub const TASK_COMPLETED_XP: u32 = 15;
pub const PROJECT_ADDED_XP: u32 = 25;
pub const EVENT_ADDED_XP: u32 = 5;

/// A record produced or changed by a handler, plus the experience it earned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<T> {
    pub record: T,
    pub award: u32,
}

fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Splits comma-separated input, trimming each piece and dropping empty ones.
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Milestones from comma-separated titles, numbered from "1".
pub fn parse_milestones(input: &str) -> Vec<Milestone> {
    split_list(input)
        .into_iter()
        .enumerate()
        .map(|(i, title)| Milestone {
            id: (i + 1).to_string(),
            title,
            completed: false,
        })
        .collect()
}

fn remove_by_id<T: Record>(records: &mut Vec<T>, id: &str) -> bool {
    let before = records.len();
    records.retain(|r| r.id() != id);
    records.len() != before
}

pub fn add_task(
    tasks: &mut Vec<Task>,
    draft: TaskDraft,
    ids: &mut dyn IdSource,
) -> Result<Outcome<Task>, ValidationError> {
    let title = required("title", &draft.title)?;
    let due_date = match optional_text(&draft.due_date) {
        Some(raw) => Some(parse_date("due date", &raw)?),
        None => None,
    };

    let task = Task {
        id: ids.next_id(),
        title,
        completed: false,
        priority: draft.priority,
        due_date,
    };
    tasks.push(task.clone());
    Ok(Outcome {
        record: task,
        award: TASK_ADDED_XP,
    })
}

/// Flips `completed`. Only completing earns experience; reopening earns nothing.
pub fn toggle_task(tasks: &mut [Task], id: &str) -> Option<Outcome<Task>> {
    let task = tasks.iter_mut().find(|t| t.id == id)?;
    task.completed = !task.completed;
    let award = if task.completed { TASK_COMPLETED_XP } else { 0 };
    Some(Outcome {
        record: task.clone(),
        award,
    })
}

pub fn delete_task(tasks: &mut Vec<Task>, id: &str) -> bool {
    remove_by_id(tasks, id)
}

pub fn add_project(
    projects: &mut Vec<Project>,
    draft: ProjectDraft,
    ids: &mut dyn IdSource,
) -> Result<Outcome<Project>, ValidationError> {
    let title = required("title", &draft.title)?;
    let deadline = parse_date("deadline", &required("deadline", &draft.deadline)?)?;

    let project = Project {
        id: ids.next_id(),
        title,
        description: draft.description.trim().to_string(),
        progress: 0,
        deadline,
        team_members: split_list(&draft.team_members),
        milestones: parse_milestones(&draft.milestones),
    };
    projects.push(project.clone());
    Ok(Outcome {
        record: project,
        award: PROJECT_ADDED_XP,
    })
}

pub fn delete_project(projects: &mut Vec<Project>, id: &str) -> bool {
    remove_by_id(projects, id)
}

pub fn add_event(
    events: &mut Vec<Event>,
    draft: EventDraft,
    ids: &mut dyn IdSource,
) -> Result<Outcome<Event>, ValidationError> {
    let title = required("title", &draft.title)?;
    let date = parse_date("date", &required("date", &draft.date)?)?;
    let time = required("time", &draft.time)?;

    let event = Event {
        id: ids.next_id(),
        title,
        date,
        time,
        kind: draft.kind,
        location: optional_text(&draft.location),
        description: optional_text(&draft.description),
    };
    events.push(event.clone());
    Ok(Outcome {
        record: event,
        award: EVENT_ADDED_XP,
    })
}

pub fn delete_event(events: &mut Vec<Event>, id: &str) -> bool {
    remove_by_id(events, id)
}
