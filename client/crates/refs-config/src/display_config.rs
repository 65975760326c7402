use crate::{ConfigError, ConfigErrorResult, DEFAULT_DATE_FORMAT};

use chrono::format::{Item, StrftimeItems};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// strftime-style pattern for registration timestamps (local time)
    pub date_format: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: String::from(DEFAULT_DATE_FORMAT),
        }
    }
}

impl DisplayConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.date_format.trim().is_empty() {
            return Err(ConfigError::display("display.date_format cannot be empty"));
        }

        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::display(format!(
                "display.date_format is not a valid strftime pattern: '{}'",
                self.date_format
            )));
        }

        Ok(())
    }
}
