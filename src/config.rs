use std::{collections::BTreeMap, path::PathBuf};

use tracing::{level_filters::LevelFilter, warn};

// NOTE: Plugin configuration keys
pub const DATA_DIR: &str = "data_dir";
pub const SELECTABLE: &str = "selectable";
pub const LOG_LEVEL: &str = "log_level";

/// Zellij maps the plugin's data directory here.
const PLUGIN_DATA_DIR: &str = "/data";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Where the city selection is stored.
    pub data_dir: PathBuf,
    pub selectable: bool,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(PLUGIN_DATA_DIR),
            selectable: true,
            log_level: LevelFilter::INFO,
        }
    }
}

impl Config {
    /// Build from plugin configuration. Unknown keys are ignored and
    /// unparsable values keep their default.
    pub fn from_map(configuration: &BTreeMap<String, String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = configuration.get(DATA_DIR).filter(|dir| !dir.is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(value) = configuration.get(SELECTABLE) {
            match value.parse() {
                Ok(selectable) => config.selectable = selectable,
                Err(_) => warn!(%value, "Ignoring invalid `{SELECTABLE}`"),
            }
        }

        if let Some(value) = configuration.get(LOG_LEVEL) {
            match value.parse() {
                Ok(level) => config.log_level = level,
                Err(_) => warn!(%value, "Ignoring invalid `{LOG_LEVEL}`"),
            }
        }

        config
    }

    /// Same keys as the plugin configuration, read from `WORLDCLOCK_*`
    /// variables. Storage defaults to the user's data directory.
    pub fn from_env() -> Self {
        let mut configuration = BTreeMap::new();
        let home_dir = std::env::var_os("HOME")
            .map(PathBuf::from)
            .map(|home| home.join(".local/share/zellij-worldclock"));
        if let Some(dir) = home_dir {
            configuration.insert(DATA_DIR.to_string(), dir.to_string_lossy().into_owned());
        }
        for (key, var) in [(DATA_DIR, "WORLDCLOCK_DATA_DIR"), (LOG_LEVEL, "WORLDCLOCK_LOG")] {
            if let Ok(value) = std::env::var(var) {
                configuration.insert(key.to_string(), value);
            }
        }
        Self::from_map(&configuration)
    }
}
