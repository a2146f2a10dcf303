use super::{json, DataStore, LinkDatabase};
use crate::error::{LinkDbError, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_FILE_NAME: &str = "links.json";

/// File-backed store: one JSON document in `root`.
pub struct FileStore {
    root: PathBuf,
    file_name: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }

    pub fn with_file_name(mut self, name: &str) -> Self {
        if name.ends_with(".json") {
            self.file_name = name.to_string();
        } else {
            self.file_name = format!("{}.json", name);
        }
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn data_path(&self) -> PathBuf {
        self.root.join(&self.file_name)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(LinkDbError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<LinkDatabase> {
        let path = self.data_path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no data file, starting empty");
            return Ok(LinkDatabase::new());
        }
        json::from_path(&path)
    }

    fn save(&mut self, db: &LinkDatabase) -> Result<()> {
        self.ensure_dir()?;
        let path = self.data_path();
        json::to_path(db, &path)?;
        tracing::debug!(path = %path.display(), links = db.count(), "saved link database");
        Ok(())
    }
}
