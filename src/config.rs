use std::path::PathBuf;

use directories::ProjectDirs;

use crate::http::DEFAULT_API_BASE;

pub const API_BASE_VAR: &str = "RECIPE_FINDER_API_BASE";
pub const DATA_DIR_VAR: &str = "RECIPE_FINDER_DATA_DIR";
pub const LOG_FILTER_VAR: &str = "RECIPE_FINDER_LOG";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base: String,
    /// `None` when no home directory can be determined; storage then stays
    /// in memory for the session.
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            data_dir: ProjectDirs::from("", "", "recipe-finder")
                .map(|dirs| dirs.data_dir().to_path_buf()),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(base) = lookup(API_BASE_VAR).filter(|v| !v.trim().is_empty()) {
            config.api_base = base.trim().to_string();
        }
        if let Some(dir) = lookup(DATA_DIR_VAR).filter(|v| !v.trim().is_empty()) {
            config.data_dir = Some(PathBuf::from(dir));
        }
        config
    }

    pub fn log_dir(&self) -> Option<PathBuf> {
        self.data_dir.as_ref().map(|dir| dir.join("logs"))
    }
}
