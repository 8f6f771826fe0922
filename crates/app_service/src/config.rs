//! Application configuration

use serde::Deserialize;

/// Application configuration, loaded from the environment
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Log level filter (e.g. "info", "app_service=debug")
    pub log_level: String,
    /// Login email of the single restricted-viewer account
    pub restricted_user_email: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            restricted_user_email: "valeria@g.com".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from `FACTURAS_`-prefixed environment variables,
    /// falling back to the defaults for anything unset
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let defaults = Self::default();
        config::Config::builder()
            .set_default("log_level", defaults.log_level)?
            .set_default("restricted_user_email", defaults.restricted_user_email)?
            .add_source(config::Environment::with_prefix("FACTURAS"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.restricted_user_email, "valeria@g.com");
    }
}
