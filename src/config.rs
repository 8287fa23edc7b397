// ============================================================================
// CONFIG - Compile-time configuration (option_env! + .env via build.rs)
// ============================================================================

use serde::{Deserialize, Serialize};

pub const DEFAULT_AUTH_STORAGE_KEY: &str = "lorian_admin_token";
pub const DEFAULT_TIMER_ELEMENT_ID: &str = "timer";
pub const DEFAULT_TIMER_TICK_MS: u32 = 1000;
pub const DEFAULT_ROUND_END_RELOAD_MS: u32 = 2000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Prefix for every API path; empty means same origin as the page.
    pub api_base_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub log_level: String,
    pub auth_storage_key: String,
    pub timer: TimerConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerConfig {
    pub element_id: String,
    pub tick_ms: u32,
    pub reload_delay_ms: u32,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            element_id: DEFAULT_TIMER_ELEMENT_ID.to_string(),
            tick_ms: DEFAULT_TIMER_TICK_MS,
            reload_delay_ms: DEFAULT_ROUND_END_RELOAD_MS,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            environment: "development".to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
            auth_storage_key: DEFAULT_AUTH_STORAGE_KEY.to_string(),
            timer: TimerConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from compile-time environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: option_env!("API_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            log_level: option_env!("LOG_LEVEL")
                .unwrap_or("info").to_string(),
            auth_storage_key: option_env!("AUTH_STORAGE_KEY")
                .filter(|key| !key.is_empty())
                .unwrap_or(DEFAULT_AUTH_STORAGE_KEY).to_string(),
            timer: TimerConfig {
                element_id: option_env!("TIMER_ELEMENT_ID")
                    .filter(|id| !id.is_empty())
                    .unwrap_or(DEFAULT_TIMER_ELEMENT_ID).to_string(),
                tick_ms: option_env!("TIMER_TICK_MS")
                    .and_then(|v| v.parse().ok())
                    .filter(|ms| *ms > 0)
                    .unwrap_or(DEFAULT_TIMER_TICK_MS),
                reload_delay_ms: option_env!("ROUND_END_RELOAD_MS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_ROUND_END_RELOAD_MS),
            },
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Configured level, `Info` when the value is not a known level name
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Join an API path onto the configured base url
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_contract() {
        let config = AppConfig::default();
        assert_eq!(config.auth_storage_key, "lorian_admin_token");
        assert_eq!(config.timer.element_id, "timer");
        assert_eq!(config.timer.tick_ms, 1000);
        assert_eq!(config.timer.reload_delay_ms, 2000);
        assert_eq!(config.api_url("/api/admin/login"), "/api/admin/login");
    }

    #[test]
    fn unknown_log_level_falls_back_to_info() {
        let config = AppConfig {
            log_level: "chatty".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.log_level(), log::Level::Info);

        let config = AppConfig {
            log_level: "debug".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.log_level(), log::Level::Debug);
    }
}
