use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

pub const DIR_NAME: &str = ".captains-log";
pub const DB_FILE: &str = "fleet.db";

/// Walks up from `start` looking for a `.captains-log` directory.
pub fn find_log_dir(start: &Path) -> Result<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let candidate = current.join(DIR_NAME);
        if candidate.is_dir() {
            return Ok(candidate);
        }

        if !current.pop() {
            bail!("No captain's log here (or in any parent). Run 'captains-log init' first.");
        }
    }
}

/// An explicit directory (flag or `CAPTAINS_LOG_DIR`) wins over discovery.
pub fn resolve_log_dir(explicit: Option<&Path>, cwd: &Path) -> Result<PathBuf> {
    match explicit {
        Some(dir) if dir.is_dir() => Ok(dir.to_path_buf()),
        Some(dir) => bail!(
            "Log directory {} does not exist. Run 'captains-log init' first.",
            dir.display()
        ),
        None => find_log_dir(cwd),
    }
}

pub fn db_path(log_dir: &Path) -> PathBuf {
    log_dir.join(DB_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_find_in_current_dir() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(DIR_NAME)).unwrap();
        let found = find_log_dir(dir.path()).unwrap();
        assert_eq!(found, dir.path().join(DIR_NAME));
    }

    #[test]
    fn test_find_in_parent() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(DIR_NAME)).unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        let found = find_log_dir(&nested).unwrap();
        assert_eq!(found, dir.path().join(DIR_NAME));
    }

    #[test]
    fn test_file_with_dir_name_is_ignored() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("inner");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join(DIR_NAME), "").unwrap();
        fs::create_dir(dir.path().join(DIR_NAME)).unwrap();
        assert_eq!(find_log_dir(&nested).unwrap(), dir.path().join(DIR_NAME));
    }

    #[test]
    fn test_explicit_dir_wins() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(DIR_NAME)).unwrap();
        let other = tempdir().unwrap();
        let resolved = resolve_log_dir(Some(other.path()), dir.path()).unwrap();
        assert_eq!(resolved, other.path());
    }

    #[test]
    fn test_explicit_missing_dir_fails() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing");
        let err = resolve_log_dir(Some(&missing), dir.path()).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_db_path() {
        assert_eq!(
            db_path(Path::new("/tmp/x/.captains-log")),
            Path::new("/tmp/x/.captains-log/fleet.db")
        );
    }
}
