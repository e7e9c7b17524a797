use super::{LoadReport, TaskStore};
use crate::error::{DukeError, Result};
use crate::list::TaskList;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    saved: Option<TaskList>,
    saves: usize,
    failure: Option<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `list`.
    pub fn with_list(list: TaskList) -> Self {
        Self {
            saved: Some(list),
            ..Self::default()
        }
    }

    /// A store whose saves always fail with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
            ..Self::default()
        }
    }

    pub fn saved(&self) -> Option<&TaskList> {
        self.saved.as_ref()
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl TaskStore for InMemoryStore {
    fn load(&self) -> Result<LoadReport> {
        Ok(self.saved.clone().unwrap_or_default().into())
    }

    fn save(&mut self, list: &TaskList) -> Result<()> {
        if let Some(reason) = &self.failure {
            return Err(DukeError::Store(reason.clone()));
        }
        self.saved = Some(list.clone());
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Task;
    use chrono::NaiveDate;

    /// Builds a store pre-loaded with tasks, one builder call per task.
    #[derive(Default)]
    pub struct StoreFixture {
        list: TaskList,
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_todos(mut self, count: usize) -> Self {
            for i in 0..count {
                self.list.add_item(Task::todo(format!("Test task {}", i + 1)));
            }
            self
        }

        pub fn with_deadline(mut self, description: &str, by: Option<NaiveDate>) -> Self {
            self.list.add_item(Task::deadline(description, by));
            self
        }

        pub fn with_done_todo(mut self, description: &str) -> Self {
            let mut task = Task::todo(description);
            task.mark_done();
            self.list.add_item(task);
            self
        }

        pub fn build(self) -> InMemoryStore {
            InMemoryStore::with_list(self.list)
        }
    }
}
