//! The application store: collections, gamification and the persist-on-mutate hook.
//!
//! A [`Dashboard`] owns its [`KeyValueStore`] and writes each touched key right after the
//! in-memory change. Write failures are logged and dropped so the in-memory state stays
//! authoritative for the rest of the session.

use anyhow::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::actions::{self, Outcome};
use crate::errors::ValidationError;
use crate::export::ExportData;
use crate::gamification::{Gamification, RankUp};
use crate::ids::{ClockIds, IdSource};
use crate::models::{
    Event, EventDraft, GamificationState, Project, ProjectDraft, Task, TaskDraft,
};
use crate::seed;
use crate::store::{
    load_json, load_scalar, save_json, save_scalar, KeyValueStore, COINS_KEY, EVENTS_KEY,
    LEVEL_KEY, PROJECTS_KEY, TASKS_KEY, XP_KEY,
};
use crate::views::FleetStats;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    RankUp(RankUp),
    Rejected(ValidationError),
}

type Subscriber = Box<dyn FnMut(&Notification)>;

pub struct Dashboard<S: KeyValueStore> {
    store: S,
    tasks: Vec<Task>,
    projects: Vec<Project>,
    events: Vec<Event>,
    gamification: Gamification,
    ids: Box<dyn IdSource>,
    subscribers: Vec<Subscriber>,
}

fn load_or_seed<T, S>(store: &S, key: &str, seed: fn() -> Vec<T>) -> Vec<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match load_json(store, key) {
        Ok(Some(records)) => records,
        Ok(None) => {
            tracing::debug!(key, "no saved value, using seed data");
            seed()
        }
        Err(e) => {
            tracing::warn!(key, error = %format!("{:#}", e), "unreadable saved value, using seed data");
            seed()
        }
    }
}

fn load_scalar_or<S>(store: &S, key: &str, default: u32) -> u32
where
    S: KeyValueStore + ?Sized,
{
    match load_scalar(store, key) {
        Ok(Some(value)) => value,
        Ok(None) => default,
        Err(e) => {
            tracing::warn!(key, error = %format!("{:#}", e), "unreadable saved value, using default");
            default
        }
    }
}

fn load_gamification<S>(store: &S) -> GamificationState
where
    S: KeyValueStore + ?Sized,
{
    let defaults = GamificationState::default();
    let state = GamificationState {
        captain_level: load_scalar_or(store, LEVEL_KEY, defaults.captain_level),
        experience_points: load_scalar_or(store, XP_KEY, defaults.experience_points),
        pirate_coins: load_scalar_or(store, COINS_KEY, defaults.pirate_coins),
    };
    let derived = crate::gamification::level_for(state.experience_points);
    if state.captain_level != derived {
        tracing::warn!(
            level = state.captain_level,
            derived,
            "saved level does not match saved experience"
        );
    }
    state
}

impl<S: KeyValueStore> Dashboard<S> {
    pub fn open(store: S) -> Self {
        Self::with_ids(store, Box::new(ClockIds::default()))
    }

    pub fn with_ids(store: S, ids: Box<dyn IdSource>) -> Self {
        let tasks = load_or_seed(&store, TASKS_KEY, seed::tasks);
        let projects = load_or_seed(&store, PROJECTS_KEY, seed::projects);
        let events = load_or_seed(&store, EVENTS_KEY, seed::events);
        let gamification = Gamification::new(load_gamification(&store));

        Dashboard {
            store,
            tasks,
            projects,
            events,
            gamification,
            ids,
            subscribers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&Notification) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn state(&self) -> GamificationState {
        self.gamification.state()
    }

    pub fn gamification(&self) -> &Gamification {
        &self.gamification
    }

    pub fn stats(&self) -> FleetStats {
        FleetStats::collect(&self.tasks, &self.projects, &self.events)
    }

    pub fn export(&self) -> ExportData {
        ExportData::new(&self.tasks, &self.projects, &self.events, self.state())
    }

    pub fn add_experience(&mut self, points: u32) -> Option<RankUp> {
        if points == 0 {
            return None;
        }
        let rank_up = self.gamification.add_experience(points);
        self.persist_gamification();
        if let Some(up) = rank_up {
            tracing::info!(level = up.level, rank = %up.rank, "rank up");
            self.emit(&Notification::RankUp(up));
        }
        rank_up
    }

    pub fn add_task(&mut self, draft: TaskDraft) -> Result<Task, ValidationError> {
        let result = actions::add_task(&mut self.tasks, draft, self.ids.as_mut());
        let outcome = self.accept(result)?;
        self.persist_tasks();
        Ok(self.award(outcome))
    }

    /// Flips a task's completion. Unknown ids are ignored.
    pub fn toggle_task(&mut self, id: &str) -> Option<Task> {
        let outcome = actions::toggle_task(&mut self.tasks, id)?;
        self.persist_tasks();
        Some(self.award(outcome))
    }

    pub fn delete_task(&mut self, id: &str) -> bool {
        let removed = actions::delete_task(&mut self.tasks, id);
        if removed {
            self.persist_tasks();
        }
        removed
    }

    pub fn add_project(&mut self, draft: ProjectDraft) -> Result<Project, ValidationError> {
        let result = actions::add_project(&mut self.projects, draft, self.ids.as_mut());
        let outcome = self.accept(result)?;
        self.persist_projects();
        Ok(self.award(outcome))
    }

    pub fn delete_project(&mut self, id: &str) -> bool {
        let removed = actions::delete_project(&mut self.projects, id);
        if removed {
            self.persist_projects();
        }
        removed
    }

    pub fn add_event(&mut self, draft: EventDraft) -> Result<Event, ValidationError> {
        let result = actions::add_event(&mut self.events, draft, self.ids.as_mut());
        let outcome = self.accept(result)?;
        self.persist_events();
        Ok(self.award(outcome))
    }

    pub fn delete_event(&mut self, id: &str) -> bool {
        let removed = actions::delete_event(&mut self.events, id);
        if removed {
            self.persist_events();
        }
        removed
    }

    /// Writes every key, e.g. to materialize seed data on first run.
    pub fn save_all(&self) {
        self.persist_tasks();
        self.persist_projects();
        self.persist_events();
        self.persist_gamification();
    }

    fn accept<T>(
        &mut self,
        result: Result<Outcome<T>, ValidationError>,
    ) -> Result<Outcome<T>, ValidationError> {
        result.map_err(|e| {
            tracing::debug!(field = e.field(), "rejected draft");
            self.emit(&Notification::Rejected(e.clone()));
            e
        })
    }

    fn award<T>(&mut self, outcome: Outcome<T>) -> T {
        self.add_experience(outcome.award);
        outcome.record
    }

    fn emit(&mut self, notification: &Notification) {
        for subscriber in self.subscribers.iter_mut() {
            subscriber(notification);
        }
    }

    fn persist_tasks(&self) {
        self.persist_json(TASKS_KEY, &self.tasks);
    }

    fn persist_projects(&self) {
        self.persist_json(PROJECTS_KEY, &self.projects);
    }

    fn persist_events(&self) {
        self.persist_json(EVENTS_KEY, &self.events);
    }

    fn persist_gamification(&self) {
        let state = self.gamification.state();
        self.persist_scalar(LEVEL_KEY, state.captain_level);
        self.persist_scalar(XP_KEY, state.experience_points);
        self.persist_scalar(COINS_KEY, state.pirate_coins);
    }

    fn persist_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        log_failure(key, save_json(&self.store, key, value));
    }

    fn persist_scalar(&self, key: &str, value: u32) {
        log_failure(key, save_scalar(&self.store, key, value));
    }
}

fn log_failure(key: &str, result: Result<()>) {
    if let Err(e) = result {
        tracing::warn!(key, error = %format!("{:#}", e), "could not persist, keeping in-memory state");
    }
}
