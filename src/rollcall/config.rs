use crate::error::{Result, RollcallError};
use crate::validate::ValidationMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

pub const KEY_COURSES: &str = "courses";
pub const KEY_STRICT_UPDATE_ROLL_NO: &str = "strict-update-roll-no";

/// Configuration for rollcall, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RollcallConfig {
    /// Courses a student can be enrolled in
    #[serde(default = "default_courses")]
    pub courses: Vec<String>,

    /// Check the roll number pattern on update, not just its presence
    #[serde(default = "default_strict_update_roll_no")]
    pub strict_update_roll_no: bool,
}

pub fn default_courses() -> Vec<String> {
    vec![
        "Computer Science".to_string(),
        "Information Technology".to_string(),
        "Electronics".to_string(),
        "Mechanical".to_string(),
        "Civil".to_string(),
    ]
}

fn default_strict_update_roll_no() -> bool {
    true
}

impl Default for RollcallConfig {
    fn default() -> Self {
        Self {
            courses: default_courses(),
            strict_update_roll_no: default_strict_update_roll_no(),
        }
    }
}

impl RollcallConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RollcallError::Io)?;
        let config: RollcallConfig =
            serde_json::from_str(&content).map_err(RollcallError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RollcallError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RollcallError::Serialization)?;
        fs::write(config_path, content).map_err(RollcallError::Io)?;
        Ok(())
    }

    /// Validation mode used by the update command.
    pub fn update_mode(&self) -> ValidationMode {
        if self.strict_update_roll_no {
            ValidationMode::Full
        } else {
            ValidationMode::RollNoPresenceOnly
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            KEY_COURSES => Some(self.courses.join(", ")),
            KEY_STRICT_UPDATE_ROLL_NO => Some(self.strict_update_roll_no.to_string()),
            _ => None,
        }
    }

    /// Sets a key from its string form. Courses are comma separated.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            KEY_COURSES => {
                let courses: Vec<String> = value
                    .split(',')
                    .map(|c| c.trim())
                    .filter(|c| !c.is_empty())
                    .map(str::to_string)
                    .collect();
                if courses.is_empty() {
                    return Err("At least one course is required".to_string());
                }
                self.courses = courses;
                Ok(())
            }
            KEY_STRICT_UPDATE_ROLL_NO => {
                self.strict_update_roll_no = value
                    .parse()
                    .map_err(|_| format!("Expected true or false, got {}", value))?;
                Ok(())
            }
            other => Err(format!("Unknown config key: {}", other)),
        }
    }

    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        [KEY_COURSES, KEY_STRICT_UPDATE_ROLL_NO]
            .into_iter()
            .filter_map(|k| self.get(k).map(|v| (k, v)))
            .collect()
    }
}
