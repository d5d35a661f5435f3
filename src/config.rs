use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "https://ec-course-api.hexschool.io";
const DEFAULT_API_PATH: &str = "";
const DEFAULT_TOKEN_COOKIE: &str = "hexToken";
const DEFAULT_LANGUAGE: &str = "ZH";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub base_url: String,
    pub api_path: String,
    pub token_cookie: String,
    pub language: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_path: DEFAULT_API_PATH.to_string(),
            token_cookie: DEFAULT_TOKEN_COOKIE.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads the configuration from environment variables captured at compile time
    pub fn from_env() -> Self {
        Self {
            base_url: option_env!("BASE_URL")
                .unwrap_or(DEFAULT_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            api_path: option_env!("API_PATH")
                .unwrap_or(DEFAULT_API_PATH)
                .trim_matches('/')
                .to_string(),
            token_cookie: option_env!("TOKEN_COOKIE")
                .unwrap_or(DEFAULT_TOKEN_COOKIE)
                .to_string(),
            language: option_env!("LANGUAGE")
                .unwrap_or(DEFAULT_LANGUAGE)
                .to_uppercase(),
            log_level: option_env!("LOG_LEVEL")
                .unwrap_or(DEFAULT_LOG_LEVEL)
                .to_string(),
        }
    }

    /// `log::Level` for the console logger; unknown values fall back to `Info`
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Whether the API path segment was provided at build time
    pub fn has_api_path(&self) -> bool {
        !self.api_path.is_empty()
    }
}

// Static global configuration
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
