//! Account service configuration.

use std::env;

use common::{HashingConfig, ServiceConfig};

/// Default service name reported in logs
pub const DEFAULT_SERVICE_NAME: &str = "account-service";

/// Account service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountServiceConfig {
    /// Service name and log level
    pub service: ServiceConfig,
    /// Password hashing cost
    pub hashing: HashingConfig,
}

impl AccountServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            service: ServiceConfig {
                service_name: env::var("ACCOUNT_SERVICE_NAME")
                    .unwrap_or(defaults.service.service_name),
                log_level: env::var("ACCOUNT_SERVICE_LOG_LEVEL")
                    .or_else(|_| env::var("LOG_LEVEL"))
                    .unwrap_or(defaults.service.log_level),
            },
            hashing: HashingConfig {
                memory_kib: parse_env("ACCOUNT_SERVICE_HASH_MEMORY_KIB")
                    .unwrap_or(defaults.hashing.memory_kib),
                iterations: parse_env("ACCOUNT_SERVICE_HASH_ITERATIONS")
                    .unwrap_or(defaults.hashing.iterations),
                parallelism: parse_env("ACCOUNT_SERVICE_HASH_PARALLELISM")
                    .unwrap_or(defaults.hashing.parallelism),
            },
        }
    }
}

fn parse_env(key: &str) -> Option<u32> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}

impl Default for AccountServiceConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                service_name: DEFAULT_SERVICE_NAME.to_string(),
                ..ServiceConfig::default()
            },
            hashing: HashingConfig::default(),
        }
    }
}
