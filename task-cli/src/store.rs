use crate::codec;
use crate::error::TaskError;
use crate::task::{Status, Task};
use chrono::{Local, NaiveDateTime, SubsecRound};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

/// Source of the timestamps stamped on tasks.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time, truncated to whole seconds.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local().trunc_subsecs(0)
    }
}

/// Owns the tasks file.
///
/// No state is kept between calls: every operation loads the whole file, applies its change and
/// writes the whole file back.
#[derive(Debug)]
pub struct TaskStore<C: Clock = SystemClock> {
    path: PathBuf,
    clock: C,
}

impl TaskStore<SystemClock> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_clock(path, SystemClock)
    }
}

impl<C: Clock> TaskStore<C> {
    pub fn with_clock(path: impl Into<PathBuf>, clock: C) -> Self {
        Self {
            path: path.into(),
            clock,
        }
    }

    /// Creates a `Todo` task with the next free id and persists it.
    ///
    /// The id is one more than the highest id on file, or 1 for an empty file. Fails with
    /// [`TaskError::IdsExhausted`] once the highest id is `u32::MAX`.
    #[tracing::instrument(skip(self))]
    pub fn add(&self, description: &str) -> Result<Task, TaskError> {
        let mut tasks = self.load()?;
        let id = tasks
            .iter()
            .map(Task::id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or(TaskError::IdsExhausted)?;
        let task = Task::new(id, description, self.clock.now());
        tasks.push(task.clone());
        self.save(&tasks)?;
        debug!(id, "task added");
        Ok(task)
    }

    /// Replaces the description of task `id`.
    #[tracing::instrument(skip(self))]
    pub fn update(&self, id: u32, description: &str) -> Result<Task, TaskError> {
        self.modify(id, |task, now| task.set_description(description, now))
    }

    /// Moves task `id` to `status`.
    #[tracing::instrument(skip(self))]
    pub fn set_status(&self, id: u32, status: Status) -> Result<Task, TaskError> {
        self.modify(id, |task, now| task.set_status(status, now))
    }

    /// Removes task `id` for good. Its id is not handed out again unless it was the highest one.
    #[tracing::instrument(skip(self))]
    pub fn delete(&self, id: u32) -> Result<(), TaskError> {
        let mut tasks = self.load()?;
        let index = position(&tasks, id)?;
        tasks.remove(index);
        self.save(&tasks)?;
        debug!(id, remaining = tasks.len(), "task deleted");
        Ok(())
    }

    /// Returns tasks in file order, keeping only those in `status` when one is given.
    #[tracing::instrument(skip(self))]
    pub fn list(&self, status: Option<Status>) -> Result<Vec<Task>, TaskError> {
        let tasks = self.load()?;
        Ok(match status {
            Some(status) => tasks
                .into_iter()
                .filter(|task| task.status() == status)
                .collect(),
            None => tasks,
        })
    }

    fn modify(
        &self,
        id: u32,
        change: impl FnOnce(&mut Task, NaiveDateTime),
    ) -> Result<Task, TaskError> {
        let mut tasks = self.load()?;
        let index = position(&tasks, id)?;
        change(&mut tasks[index], self.clock.now());
        let task = tasks[index].clone();
        self.save(&tasks)?;
        debug!(id, "task updated");
        Ok(task)
    }

    fn load(&self) -> Result<Vec<Task>, TaskError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(codec::decode(&text)?),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no tasks file yet");
                Ok(Vec::new())
            }
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, tasks: &[Task]) -> Result<(), TaskError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, codec::encode(tasks))?;
        Ok(())
    }
}

fn position(tasks: &[Task], id: u32) -> Result<usize, TaskError> {
    tasks
        .iter()
        .position(|task| task.id() == id)
        .ok_or(TaskError::NotFound(id))
}
