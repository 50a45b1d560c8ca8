use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::models::{Event, GamificationState, Project, Task};

pub const BACKUP_FILE_NAME: &str = "captain-fleet-backup.json";

/// Everything the dashboard knows, as one JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportData {
    pub tasks: Vec<Task>,
    pub projects: Vec<Project>,
    pub events: Vec<Event>,
    pub captain_level: u32,
    pub experience_points: u32,
    pub pirate_coins: u32,
}

impl ExportData {
    pub fn new(
        tasks: &[Task],
        projects: &[Project],
        events: &[Event],
        state: GamificationState,
    ) -> Self {
        ExportData {
            tasks: tasks.to_vec(),
            projects: projects.to_vec(),
            events: events.to_vec(),
            captain_level: state.captain_level,
            experience_points: state.experience_points,
            pirate_coins: state.pirate_coins,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize export")
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write export file {}", path.display()))
    }
}
