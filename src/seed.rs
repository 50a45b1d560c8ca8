//! First-run contents, used whenever a key is missing or unreadable.

use chrono::NaiveDate;

use crate::models::{Event, EventKind, Milestone, Priority, Project, Task};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn milestone(id: &str, title: &str, completed: bool) -> Milestone {
    Milestone {
        id: id.to_string(),
        title: title.to_string(),
        completed,
    }
}

pub fn tasks() -> Vec<Task> {
    vec![
        Task {
            id: "1".to_string(),
            title: "Complete anime character design".to_string(),
            completed: false,
            priority: Priority::High,
            due_date: Some(date(2024, 1, 15)),
        },
        Task {
            id: "2".to_string(),
            title: "Watch latest episode of One Piece".to_string(),
            completed: true,
            priority: Priority::Medium,
            due_date: None,
        },
        Task {
            id: "3".to_string(),
            title: "Practice drawing manga panels".to_string(),
            completed: false,
            priority: Priority::Low,
            due_date: Some(date(2024, 1, 20)),
        },
    ]
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".to_string(),
            title: "Grand Line Portfolio".to_string(),
            description: "Collect the crew's best artwork into one portfolio".to_string(),
            progress: 40,
            deadline: date(2024, 3, 1),
            team_members: vec!["Luffy".to_string(), "Zoro".to_string(), "Nami".to_string()],
            milestones: vec![
                milestone("1", "Sketch drafts", true),
                milestone("2", "Color pass", false),
                milestone("3", "Publish", false),
            ],
        },
        Project {
            id: "2".to_string(),
            title: "Manga Reading Tracker".to_string(),
            description: "Keep a log of every volume read this season".to_string(),
            progress: 10,
            deadline: date(2024, 2, 15),
            team_members: vec!["Robin".to_string()],
            milestones: vec![
                milestone("1", "Schema", false),
                milestone("2", "Import list", false),
            ],
        },
    ]
}

pub fn events() -> Vec<Event> {
    vec![
        Event {
            id: "1".to_string(),
            title: "Anime Convention".to_string(),
            date: date(2024, 1, 25),
            time: "10:00 AM".to_string(),
            kind: EventKind::Event,
            location: Some("Convention Center".to_string()),
            description: Some("Annual anime and manga convention".to_string()),
        },
        Event {
            id: "2".to_string(),
            title: "Manga Reading Club".to_string(),
            date: date(2024, 1, 18),
            time: "7:00 PM".to_string(),
            kind: EventKind::Meeting,
            location: Some("Local Library".to_string()),
            description: Some("Weekly manga discussion group".to_string()),
        },
        Event {
            id: "3".to_string(),
            title: "Art Submission Deadline".to_string(),
            date: date(2024, 1, 30),
            time: "11:59 PM".to_string(),
            kind: EventKind::Deadline,
            location: None,
            description: Some("Submit artwork for anime art contest".to_string()),
        },
    ]
}
