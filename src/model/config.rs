use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub board: BoardConfig,
    #[serde(default)]
    pub infra: InfraConfig,
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Start the session with the sample schedule, tasks and goals
    #[serde(default = "default_true")]
    pub seed_sample_data: bool,
    /// Duration preset in the add-schedule form, in minutes
    #[serde(default = "default_duration")]
    pub default_duration: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            seed_sample_data: true,
            default_duration: default_duration(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfraConfig {
    /// Simulated refresh delay in milliseconds
    #[serde(default = "default_refresh_delay_ms")]
    pub refresh_delay_ms: u64,
}

impl Default for InfraConfig {
    fn default() -> Self {
        InfraConfig {
            refresh_delay_ms: default_refresh_delay_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter directive used when DAYBOARD_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Hex overrides for theme slots, e.g. `background = "#000000"`
    #[serde(default)]
    pub colors: HashMap<String, String>,
    /// Hex overrides per category key, e.g. `work = "#4488FF"`
    #[serde(default)]
    pub category_colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: HashMap::new(),
            category_colors: HashMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_duration() -> u32 {
    crate::model::schedule::DEFAULT_DURATION
}

fn default_refresh_delay_ms() -> u64 {
    1500
}

fn default_log_level() -> String {
    "info".to_string()
}
