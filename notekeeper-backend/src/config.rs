use std::env;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::notes::IdStrategy;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const PORT: &str = "PORT";
    pub const BIND_ADDRESS: &str = "BIND_ADDRESS";
    /// `sequential` (delete-safe counter) or `count` (length + 1)
    pub const NOTE_ID_STRATEGY: &str = "NOTE_ID_STRATEGY";
    /// Set to "false" or "0" to start with an empty store
    pub const SEED_NOTES: &str = "SEED_NOTES";
    pub const FRONTEND_DIST: &str = "FRONTEND_DIST";
    pub const DISABLE_FRONTEND: &str = "DISABLE_FRONTEND";
}

/// Default values
pub mod defaults {
    pub const PORT: u16 = 8000;
    pub const BIND_ADDRESS: &str = "0.0.0.0";
    pub const FRONTEND_DIST: &str = "./notekeeper-frontend/dist";
}

fn flag(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub bind_address: String,
    pub id_strategy: IdStrategy,
    pub seed_notes: bool,
    /// None when frontend serving is disabled
    pub frontend_dist: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup, so tests need not touch the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup(env_vars::PORT) {
            Some(value) => value.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort {
                var: env_vars::PORT,
                value,
            })?,
            None => defaults::PORT,
        };

        let id_strategy = match lookup(env_vars::NOTE_ID_STRATEGY) {
            Some(value) => IdStrategy::from_str(value.trim()).map_err(|_| {
                ConfigError::InvalidIdStrategy {
                    var: env_vars::NOTE_ID_STRATEGY,
                    value,
                }
            })?,
            None => IdStrategy::default(),
        };

        let seed_notes = lookup(env_vars::SEED_NOTES)
            .map(|v| flag(&v))
            .unwrap_or(true);

        let frontend_disabled = lookup(env_vars::DISABLE_FRONTEND)
            .map(|v| flag(&v))
            .unwrap_or(false);
        let frontend_dist = if frontend_disabled {
            None
        } else {
            Some(
                lookup(env_vars::FRONTEND_DIST)
                    .unwrap_or_else(|| defaults::FRONTEND_DIST.to_string()),
            )
        };

        Ok(Self {
            port,
            bind_address: lookup(env_vars::BIND_ADDRESS)
                .unwrap_or_else(|| defaults::BIND_ADDRESS.to_string()),
            id_strategy,
            seed_notes,
            frontend_dist,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8000);
        assert_eq!(config.bind_address, "0.0.0.0");
        assert_eq!(config.id_strategy, IdStrategy::Sequential);
        assert!(config.seed_notes);
        assert_eq!(config.frontend_dist.as_deref(), Some(defaults::FRONTEND_DIST));
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "9000"),
            ("NOTE_ID_STRATEGY", "count"),
            ("SEED_NOTES", "false"),
            ("DISABLE_FRONTEND", "1"),
        ])
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.id_strategy, IdStrategy::Count);
        assert!(!config.seed_notes);
        assert!(config.frontend_dist.is_none());
    }

    #[test]
    fn test_invalid_port() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { .. }));
    }

    #[test]
    fn test_invalid_id_strategy() {
        let err = config_from(&[("NOTE_ID_STRATEGY", "random")]).unwrap_err();
        assert!(err.to_string().contains("random"));
    }
}
