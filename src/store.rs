use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

pub const TASKS_KEY: &str = "onePiece_tasks";
pub const PROJECTS_KEY: &str = "onePiece_projects";
pub const EVENTS_KEY: &str = "onePiece_events";
pub const LEVEL_KEY: &str = "captainLevel";
pub const XP_KEY: &str = "experiencePoints";
pub const COINS_KEY: &str = "pirateCoins";

/// Durable string-keyed storage. Values are opaque strings (JSON or stringified integers).
pub trait KeyValueStore {
    fn load(&self, key: &str) -> Result<Option<String>>;
    fn save(&self, key: &str, value: &str) -> Result<()>;
}

pub fn load_json<T, S>(store: &S, key: &str) -> Result<Option<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.load(key)? {
        Some(raw) => {
            let value = serde_json::from_str(&raw)
                .with_context(|| format!("Corrupted JSON under '{}'", key))?;
            Ok(Some(value))
        }
        None => Ok(None),
    }
}

pub fn save_json<T, S>(store: &S, key: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value).context("Failed to serialize value")?;
    store.save(key, &raw)
}

pub fn load_scalar<S>(store: &S, key: &str) -> Result<Option<u32>>
where
    S: KeyValueStore + ?Sized,
{
    match store.load(key)? {
        Some(raw) => {
            let value = raw
                .trim()
                .parse::<u32>()
                .with_context(|| format!("'{}' holds '{}', not a non-negative integer", key, raw))?;
            Ok(Some(value))
        }
        None => Ok(None),
    }
}

pub fn save_scalar<S>(store: &S, key: &str, value: u32) -> Result<()>
where
    S: KeyValueStore + ?Sized,
{
    store.save(key, &value.to_string())
}

/// Non-durable store. Counts writes and can be told to refuse them, like a full quota.
#[derive(Debug, Default)]
pub struct MemoryStore {
    cells: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
    failing: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, key: &str, value: &str) -> Self {
        self.cells
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Successful writes since creation. Seeding through `with` does not count.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.cells.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.cells.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        if self.failing.get() {
            bail!("Storage quota exceeded while writing '{}'", key);
        }
        self.cells
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Event, EventKind, Milestone, Priority, Project, Task};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_missing_key_loads_as_none() {
        let store = MemoryStore::new();
        let tasks: Option<Vec<Task>> = load_json(&store, TASKS_KEY).unwrap();
        assert!(tasks.is_none());
        assert!(load_scalar(&store, XP_KEY).unwrap().is_none());
    }

    #[test]
    fn test_corrupted_json_is_an_error() {
        let store = MemoryStore::new().with(TASKS_KEY, "[{\"id\":");
        let result: Result<Option<Vec<Task>>> = load_json(&store, TASKS_KEY);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains(TASKS_KEY));
    }

    #[test]
    fn test_scalar_rejects_garbage() {
        let store = MemoryStore::new().with(COINS_KEY, "lots");
        assert!(load_scalar(&store, COINS_KEY).is_err());
        let store = MemoryStore::new().with(COINS_KEY, "-5");
        assert!(load_scalar(&store, COINS_KEY).is_err());
    }

    #[test]
    fn test_scalar_roundtrip() {
        let store = MemoryStore::new();
        save_scalar(&store, LEVEL_KEY, 12).unwrap();
        assert_eq!(store.raw(LEVEL_KEY).as_deref(), Some("12"));
        assert_eq!(load_scalar(&store, LEVEL_KEY).unwrap(), Some(12));
    }

    #[test]
    fn test_failing_store_refuses_writes() {
        let store = MemoryStore::new();
        store.set_failing(true);
        assert!(store.save(XP_KEY, "1").is_err());
        assert_eq!(store.writes(), 0);
        assert!(store.raw(XP_KEY).is_none());
    }

    #[test]
    fn test_collections_roundtrip_with_optional_fields_absent() {
        let store = MemoryStore::new();
        let tasks = vec![
            Task {
                id: "1".to_string(),
                title: "Raise the sails".to_string(),
                completed: false,
                priority: Priority::High,
                due_date: Some(date(2024, 1, 15)),
            },
            Task {
                id: "2".to_string(),
                title: "Feed the parrot".to_string(),
                completed: true,
                priority: Priority::Low,
                due_date: None,
            },
        ];
        let projects = vec![Project {
            id: "9".to_string(),
            title: "Map the Grand Line".to_string(),
            description: String::new(),
            progress: 0,
            deadline: date(2024, 6, 1),
            team_members: vec![],
            milestones: vec![Milestone {
                id: "1".to_string(),
                title: "Reverse Mountain".to_string(),
                completed: false,
            }],
        }];
        let events = vec![
            Event {
                id: "4".to_string(),
                title: "Crew meeting".to_string(),
                date: date(2024, 1, 18),
                time: "7:00 PM".to_string(),
                kind: EventKind::Meeting,
                location: Some("Galley".to_string()),
                description: None,
            },
            Event {
                id: "5".to_string(),
                title: "Bounty due".to_string(),
                date: date(2024, 1, 30),
                time: "11:59 PM".to_string(),
                kind: EventKind::Deadline,
                location: None,
                description: None,
            },
        ];

        save_json(&store, TASKS_KEY, &tasks).unwrap();
        save_json(&store, PROJECTS_KEY, &projects).unwrap();
        save_json(&store, EVENTS_KEY, &events).unwrap();

        let loaded_tasks: Vec<Task> = load_json(&store, TASKS_KEY).unwrap().unwrap();
        let loaded_projects: Vec<Project> = load_json(&store, PROJECTS_KEY).unwrap().unwrap();
        let loaded_events: Vec<Event> = load_json(&store, EVENTS_KEY).unwrap().unwrap();
        assert_eq!(loaded_tasks, tasks);
        assert_eq!(loaded_projects, projects);
        assert_eq!(loaded_events, events);
        assert_eq!(store.writes(), 3);
    }
}
