//! Application configuration.
//!
//! Configuration values come from environment variables with working
//! defaults. The SheetDB URL defaults to a placeholder that the feedback
//! store treats as a development-mode sentinel.

use std::env;

pub const APP_NAME: &str = "Gundagardi";
pub const APP_VERSION: &str = "3.00";

/// Default (unconfigured) SheetDB base URL. While the configured URL equals
/// this value the feedback store substitutes mock data instead of failing.
pub const PLACEHOLDER_SHEETDB_URL: &str = "https://sheetdb.io/api/v1/your_sheetdb_api_id";

/// Public definition API used by the dictionary lookups
pub const DEFAULT_DICTIONARY_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the spreadsheet-backed feedback store
    pub sheetdb_api_url: String,

    /// Base URL of the dictionary definition API
    pub dictionary_api_url: String,

    /// Address the web server binds to
    pub bind_addr: String,

    /// Directory holding the credentials and preference files
    pub database_dir: String,
}

impl Default for AppConfig {
    fn default() -> AppConfig {
        AppConfig {
            sheetdb_api_url: PLACEHOLDER_SHEETDB_URL.to_string(),
            dictionary_api_url: DEFAULT_DICTIONARY_API_URL.to_string(),
            bind_addr: "127.0.0.1:3000".to_string(),
            database_dir: "database".to_string(),
        }
    }
}

impl AppConfig {
    /// Build a configuration from the environment, falling back to defaults
    ///
    /// Recognized variables: `SHEETDB_API_URL`, `DICTIONARY_API_URL`,
    /// `BIND_ADDR`, `DATABASE_DIR`.
    pub fn from_env() -> AppConfig {
        let defaults = AppConfig::default();

        AppConfig {
            sheetdb_api_url: env::var("SHEETDB_API_URL")
                .unwrap_or(defaults.sheetdb_api_url),
            dictionary_api_url: env::var("DICTIONARY_API_URL")
                .unwrap_or(defaults.dictionary_api_url),
            bind_addr: env::var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            database_dir: env::var("DATABASE_DIR").unwrap_or(defaults.database_dir),
        }
    }
}
