use super::KeyValueStore;
use crate::error::{Result, RollcallError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const FILE_EXT: &str = ".json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(RollcallError::Store(format!("Invalid storage key: {:?}", key)));
        }
        Ok(self.root.join(format!("{}{}", key, FILE_EXT)))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(RollcallError::Io)?;
        }
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path).map_err(RollcallError::Io)?;
        Ok(Some(content))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;
        self.ensure_dir()?;

        // Write-then-rename so readers never see a half-written value
        let tmp = self.root.join(format!(".{}{}.tmp", key, FILE_EXT));
        fs::write(&tmp, value).map_err(RollcallError::Io)?;
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(RollcallError::Io(e));
        }

        debug!(key, bytes = value.len(), "wrote key");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.key_path(key)?;
        if path.exists() {
            fs::remove_file(&path).map_err(RollcallError::Io)?;
            debug!(key, "removed key");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_key_reads_as_none() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().join("data"));
        assert_eq!(store.get("students").unwrap(), None);
    }

    #[test]
    fn set_creates_dir_and_round_trips() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().join("nested/data"));
        store.set("students", "[]").unwrap();

        assert!(temp.path().join("nested/data/students.json").exists());
        assert_eq!(store.get("students").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn set_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path());
        store.set("isLoggedIn", "true").unwrap();

        let names: Vec<String> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["isLoggedIn.json".to_string()]);
    }

    #[test]
    fn failed_rename_cleans_up_temp_file() {
        let temp = TempDir::new().unwrap();
        // A non-empty directory where the value file should go makes the rename fail
        let blocker = temp.path().join("students.json");
        fs::create_dir(&blocker).unwrap();
        fs::write(blocker.join("keep"), "x").unwrap();

        let mut store = FileStore::new(temp.path());
        assert!(matches!(
            store.set("students", "[]"),
            Err(RollcallError::Io(_))
        ));
        assert!(!temp.path().join(".students.json.tmp").exists());
    }

    #[test]
    fn remove_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path());
        store.set("isLoggedIn", "true").unwrap();
        store.remove("isLoggedIn").unwrap();
        store.remove("isLoggedIn").unwrap();
        assert_eq!(store.get("isLoggedIn").unwrap(), None);
    }

    #[test]
    fn rejects_path_like_keys() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path());
        assert!(matches!(
            store.set("../escape", "x"),
            Err(RollcallError::Store(_))
        ));
        assert!(store.get("").is_err());
    }
}
