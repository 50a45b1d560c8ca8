use anyhow::Result;
use std::io::{self, Write};
use std::path::Path;

use captains_log::db::Database;
use captains_log::export::BACKUP_FILE_NAME;
use captains_log::Dashboard;

/// Writes the backup to `output_path`, `captain-fleet-backup.json` when omitted, or stdout for `-`.
pub fn run(dashboard: &Dashboard<Database>, output_path: Option<&str>) -> Result<()> {
    let data = dashboard.export();

    match output_path {
        Some("-") => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", data.to_json()?)?;
        }
        path => {
            let path = Path::new(path.unwrap_or(BACKUP_FILE_NAME));
            data.write_to(path)?;
            eprintln!(
                "Exported {} tasks, {} voyages and {} events to {}",
                data.tasks.len(),
                data.projects.len(),
                data.events.len(),
                path.display()
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::setup_test_dashboard;
    use captains_log::export::ExportData;
    use captains_log::models::TaskDraft;
    use proptest::prelude::*;
    use std::fs;

    #[test]
    fn test_run_json_to_file() {
        let (mut d, dir) = setup_test_dashboard();
        d.add_task(TaskDraft::titled("Stow the cannons")).unwrap();
        let output_path = dir.path().join(BACKUP_FILE_NAME);
        let result = run(&d, Some(output_path.to_str().unwrap()));
        assert!(result.is_ok());
        let content = fs::read_to_string(&output_path).unwrap();
        let data: ExportData = serde_json::from_str(&content).unwrap();
        assert_eq!(data.tasks.len(), 4);
        assert_eq!(data.experience_points, 85);
    }

    #[test]
    fn test_run_json_emptied_collections() {
        let (mut d, dir) = setup_test_dashboard();
        for id in ["1", "2", "3"] {
            d.delete_task(id);
            d.delete_event(id);
        }
        d.delete_project("1");
        d.delete_project("2");
        let output_path = dir.path().join("empty.json");
        run(&d, Some(output_path.to_str().unwrap())).unwrap();
        let content = fs::read_to_string(&output_path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["tasks"].as_array().unwrap().len(), 0);
        assert_eq!(value["projects"].as_array().unwrap().len(), 0);
        assert_eq!(value["events"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_run_to_stdout() {
        let (d, _dir) = setup_test_dashboard();
        assert!(run(&d, Some("-")).is_ok());
    }

    #[test]
    fn test_run_into_missing_dir_fails() {
        let (d, dir) = setup_test_dashboard();
        let output_path = dir.path().join("missing").join("backup.json");
        assert!(run(&d, Some(output_path.to_str().unwrap())).is_err());
    }

    proptest! {
        #[test]
        fn prop_export_is_valid_json(title in "[a-zA-Z0-9 ]{1,30}") {
            let (mut d, dir) = setup_test_dashboard();
            d.add_task(TaskDraft::titled(&title)).unwrap();
            let output_path = dir.path().join("export.json");
            run(&d, Some(output_path.to_str().unwrap())).unwrap();
            let content = fs::read_to_string(&output_path).unwrap();
            let result: Result<ExportData, _> = serde_json::from_str(&content);
            prop_assert!(result.is_ok());
        }
    }
}
