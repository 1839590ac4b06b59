//! Runtime settings
//!
//! Everything has a sensible local default; environment variables override.

use once_cell::sync::Lazy;
use std::env;

/// Default origin of the recommendation service
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Default avatar service used by the team roster
pub const DEFAULT_AVATAR_URL: &str = "https://i.pravatar.cc/150";

/// Process-wide settings, read once from the environment
pub static SETTINGS: Lazy<Settings> = Lazy::new(Settings::from_env);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base_url: String,
    pub avatar_base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            avatar_base_url: DEFAULT_AVATAR_URL.to_string(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            api_base_url: get_env_or_default("SHELFWISE_API_URL", DEFAULT_API_URL),
            avatar_base_url: get_env_or_default("SHELFWISE_AVATAR_URL", DEFAULT_AVATAR_URL),
        }
    }

    /// Build settings pointing at a specific recommendation origin
    #[cfg(test)]
    pub fn with_api_url(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            ..Self::default()
        }
    }
}

fn get_env_or_default(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => default.to_string(),
    }
}
