// src/config/engine_config.rs

use serde::{Deserialize, Serialize};
use config::{Config, ConfigError, Environment, File};
use std::path::Path;

/// Main engine configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Persistent result cache
    pub cache: CacheConfig,

    /// Pollard's Rho bounds
    pub pollard: PollardConfig,

    /// Quadratic sieve delegation policy
    pub sieve: SieveConfig,

    /// Remote factorization oracle
    pub oracle: OracleConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Path of the SQLite database file
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollardConfig {
    /// Tortoise/hare steps allowed per random walk
    pub max_iterations: usize,

    /// Fresh-offset restarts allowed before the strategy reports failure
    pub max_restarts: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SieveConfig {
    /// Inputs below this delegate to trial division, the rest to Pollard's Rho
    pub delegation_threshold: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OracleConfig {
    /// Base URL of the oracle service
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            log_level: "info".to_string(),
            cache: CacheConfig::default(),
            pollard: PollardConfig::default(),
            sieve: SieveConfig::default(),
            oracle: OracleConfig::default(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        CacheConfig {
            path: "factorization_cache.db".to_string(),
        }
    }
}

impl Default for PollardConfig {
    fn default() -> Self {
        PollardConfig {
            max_iterations: 100_000,
            max_restarts: 24,
        }
    }
}

impl Default for SieveConfig {
    fn default() -> Self {
        SieveConfig {
            delegation_threshold: 1_000_000,
        }
    }
}

impl Default for OracleConfig {
    fn default() -> Self {
        OracleConfig {
            base_url: "http://factordb.com".to_string(),
            timeout_secs: 10,
        }
    }
}

impl EngineConfig {
    /// Load configuration with precedence: config file → env vars → defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::builder_with_defaults()?;

        if Path::new("factorizer.toml").exists() {
            builder = builder.add_source(File::with_name("factorizer.toml"));
        }

        // Override with environment variables (prefix: FACTORIZER_)
        builder = builder.add_source(
            Environment::with_prefix("FACTORIZER")
                .separator("_")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut builder = Self::builder_with_defaults()?;

        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        }

        builder = builder.add_source(
            Environment::with_prefix("FACTORIZER")
                .separator("_")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    fn builder_with_defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("log_level", "info")?
            .set_default("cache.path", "factorization_cache.db")?
            .set_default("pollard.max_iterations", 100_000i64)?
            .set_default("pollard.max_restarts", 24i64)?
            .set_default("sieve.delegation_threshold", 1_000_000i64)?
            .set_default("oracle.base_url", "http://factordb.com")?
            .set_default("oracle.timeout_secs", 10i64)
    }
}
