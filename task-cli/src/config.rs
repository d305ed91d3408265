use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_TASKS_FILE: &str = "tasks.json";
pub const DEFAULT_CONFIG_FILE: &str = "task-cli.toml";
pub const ENV_PREFIX: &str = "TASK_CLI";

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Settings {
    pub tasks_file: PathBuf,
}

impl Settings {
    /// Loads settings from `task-cli.toml` in the working directory (if present) and
    /// `TASK_CLI_*` environment variables, in that order of precedence.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(
            Path::new(DEFAULT_CONFIG_FILE),
            config::Environment::with_prefix(ENV_PREFIX),
        )
    }

    pub(crate) fn load_from(
        config_file: &Path,
        environment: config::Environment,
    ) -> anyhow::Result<Self> {
        let settings = config::Config::builder()
            .set_default("tasks_file", DEFAULT_TASKS_FILE)?
            .add_source(config::File::from(config_file).required(false))
            .add_source(environment)
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
