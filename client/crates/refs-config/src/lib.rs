mod api_config;
mod config;
mod display_config;
mod error;
mod log_level;
mod logging_config;
mod session_config;


pub use api_config::ApiConfig;
pub use config::Config;
pub use display_config::DisplayConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;

pub const CONFIG_DIR_ENV: &str = "REFS_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".refs";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_API_URL: &str = "http://localhost:8080";
const DEFAULT_REGISTRATION_PATH: &str = "/api/preregister";
const DEFAULT_SESSION_FILE: &str = "storage.json";
const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_DIRECTORY: &str = "log";
