//! Runtime settings, from built-in defaults overlaid with `ORDERS_*` environment variables.
//!
//! | Key | Env var | Default |
//! |---|---|---|
//! | `channel_capacity` | `ORDERS_CHANNEL_CAPACITY` | 32 |
//! | `max_commit_attempts` | `ORDERS_MAX_COMMIT_ATTEMPTS` | 3 |

use crate::placement::DEFAULT_MAX_COMMIT_ATTEMPTS;
use config::{ConfigError, Environment};
use serde::Deserialize;

const DEFAULT_CHANNEL_CAPACITY: usize = 32;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct OrderSystemConfig {
    /// Mailbox size of every actor.
    pub channel_capacity: usize,
    /// Validate-and-commit rounds per order before giving up on stock conflicts.
    pub max_commit_attempts: u32,
}

impl Default for OrderSystemConfig {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            max_commit_attempts: DEFAULT_MAX_COMMIT_ATTEMPTS,
        }
    }
}

impl OrderSystemConfig {
    /// Reads the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Environment::with_prefix("ORDERS").try_parsing(true))
    }

    pub fn load_from(env: Environment) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let settings = config::Config::builder()
            .set_default("channel_capacity", defaults.channel_capacity as i64)?
            .set_default("max_commit_attempts", i64::from(defaults.max_commit_attempts))?
            .add_source(env)
            .build()?;

        let loaded: Self = settings.try_deserialize()?;
        if loaded.channel_capacity == 0 {
            return Err(ConfigError::Message(
                "channel_capacity must be greater than 0".into(),
            ));
        }
        Ok(loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let mut source = config::Map::new();
        for (key, value) in vars {
            source.insert(key.to_string(), value.to_string());
        }
        Environment::with_prefix("ORDERS")
            .try_parsing(true)
            .source(Some(source))
    }

    #[test]
    fn test_defaults_without_env() {
        let loaded = OrderSystemConfig::load_from(env(&[])).unwrap();
        assert_eq!(loaded, OrderSystemConfig::default());
        assert_eq!(loaded.channel_capacity, 32);
        assert_eq!(loaded.max_commit_attempts, 3);
    }

    #[test]
    fn test_env_overrides_defaults() {
        let loaded = OrderSystemConfig::load_from(env(&[
            ("ORDERS_CHANNEL_CAPACITY", "8"),
            ("ORDERS_MAX_COMMIT_ATTEMPTS", "5"),
        ]))
        .unwrap();
        assert_eq!(loaded.channel_capacity, 8);
        assert_eq!(loaded.max_commit_attempts, 5);
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        let loaded = OrderSystemConfig::load_from(env(&[("ORDERS_CHANNEL_CAPACITY", "0")]));
        assert!(loaded.is_err());
    }
}
