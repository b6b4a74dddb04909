//! Scheduler configuration structures.

use serde::{Deserialize, Serialize};

/// Scheduler configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Name identifying the scheduler in logs.
    pub name: String,
    /// Initial capacity preallocated for each batch.
    pub initial_capacity: usize,
    /// Emit per-round debug events while running.
    #[serde(default)]
    pub trace_rounds: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            name: "roundloop".into(),
            initial_capacity: 16,
            trace_rounds: false,
        }
    }
}

impl SchedulerConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("name must not be empty".into());
        }
        if self.initial_capacity == 0 {
            return Err("initial_capacity must be greater than 0".into());
        }
        Ok(())
    }

    /// Parse scheduler configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: SchedulerConfig =
            serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }
}
