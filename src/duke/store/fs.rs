use super::{decode_tasks, encode_tasks, LoadReport, TaskStore};
use crate::error::{DukeError, Result};
use crate::list::TaskList;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_DATA_FILE: &str = "tasks.json";

/// Appended to the data file's name to form its backup, e.g. `tasks.json.bak`.
pub const BACKUP_SUFFIX: &str = ".bak";

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: impl AsRef<Path>, file_name: &str) -> Self {
        Self {
            path: data_dir.as_ref().join(file_name),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(BACKUP_SUFFIX);
        PathBuf::from(name)
    }

    /// Moves the current data file aside so the next save cannot overwrite
    /// tasks that failed to load. An older backup is replaced.
    pub fn back_up(&self) -> Result<PathBuf> {
        let backup = self.backup_path();
        fs::rename(&self.path, &backup)?;
        info!(from = %self.path.display(), to = %backup.display(), "backed up task file");
        Ok(backup)
    }

    fn ensure_parent(&self) -> Result<()> {
        let parent = self.path.parent().ok_or_else(|| {
            DukeError::Store(format!("{} has no parent directory", self.path.display()))
        })?;
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

impl TaskStore for FileStore {
    fn load(&self) -> Result<LoadReport> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no task file yet, starting empty");
            return Ok(LoadReport::default());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(LoadReport::default());
        }
        let report = decode_tasks(&content)?;
        info!(
            path = %self.path.display(),
            tasks = report.list.len(),
            skipped = report.skipped.len(),
            "loaded tasks"
        );
        Ok(report)
    }

    fn save(&mut self, list: &TaskList) -> Result<()> {
        self.ensure_parent()?;
        let content = encode_tasks(list)?;
        fs::write(&self.path, content)?;
        info!(path = %self.path.display(), tasks = list.len(), "saved tasks");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
