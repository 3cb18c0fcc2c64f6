//! Timeline Configuration
//!
//! Fixed at startup; there is no runtime configuration source.

use log::LevelFilter;

/// Storage slot holding the serialized milestone array
pub const DEFAULT_STORAGE_KEY: &str = "timeline_milestone";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineConfig {
    /// Key of the local storage slot
    pub storage_key: String,
    /// Maximum level forwarded to the console
    pub log_level: LevelFilter,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }
}

impl TimelineConfig {
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}
