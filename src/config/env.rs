//! Configuration loading from the process environment.
//!
//! # Responsibilities
//! - Read every required variable and collect all that are missing
//! - Parse typed values (port) with a distinct diagnostic on failure
//! - Produce an immutable, fully-populated `ServiceConfig`
//!
//! # Design Decisions
//! - The loader is a pure function over a name → value lookup, so tests
//!   never mutate the process environment
//! - A missing variable is fatal at startup; there are no defaults for
//!   credentials or endpoints

use crate::config::schema::{DatabaseConfig, ListenerConfig, ServiceConfig, TelemetryConfig};

const MYSQL_ADDRESS: &str = "MYSQL_ADDRESS";
const MYSQL_PORT: &str = "MYSQL_PORT";
const MYSQL_DATABASE: &str = "MYSQL_DATABASE";
const MYSQL_USER: &str = "MYSQL_USER";
const MYSQL_PASSWORD: &str = "MYSQL_PASSWORD";
const HOST_IP: &str = "HOST_IP";

/// Optional override for the listener bind address.
const BIND_ADDRESS: &str = "PRICE_SERVER_ADDRESS";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// One or more required environment variables are unset.
    #[error("missing required environment variable(s): {}", .0.join(", "))]
    MissingVars(Vec<String>),

    /// A variable is set but does not parse as its expected type.
    #[error("invalid value for {name}: {value:?} ({reason})")]
    InvalidVar {
        name: &'static str,
        value: String,
        reason: String,
    },
}

impl ServiceConfig {
    /// Load and validate configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Checks every required variable before returning, so the error
    /// names all missing variables at once.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let mut require = |name: &'static str| {
            lookup(name).unwrap_or_else(|| {
                missing.push(name.to_string());
                String::new()
            })
        };

        let address = require(MYSQL_ADDRESS);
        let port = require(MYSQL_PORT);
        let database = require(MYSQL_DATABASE);
        let user = require(MYSQL_USER);
        let password = require(MYSQL_PASSWORD);
        let collector_host = require(HOST_IP);

        if !missing.is_empty() {
            return Err(ConfigError::MissingVars(missing));
        }

        let port: u16 = port.parse().map_err(|err| ConfigError::InvalidVar {
            name: MYSQL_PORT,
            value: port.clone(),
            reason: format!("{err}"),
        })?;

        let mut listener = ListenerConfig::default();
        if let Some(bind_address) = lookup(BIND_ADDRESS) {
            listener.bind_address = bind_address;
        }

        Ok(ServiceConfig {
            listener,
            database: DatabaseConfig {
                address,
                port,
                database,
                user,
                password,
            },
            telemetry: TelemetryConfig {
                collector_host,
                service_name: env!("CARGO_PKG_NAME").to_string(),
                service_version: env!("CARGO_PKG_VERSION").to_string(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn full_env() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            (MYSQL_ADDRESS, "db.internal"),
            (MYSQL_PORT, "3306"),
            (MYSQL_DATABASE, "shopping_cart"),
            (MYSQL_USER, "price_reader"),
            (MYSQL_PASSWORD, "hunter2"),
            (HOST_IP, "10.0.0.5"),
        ])
    }

    fn lookup_in<'a>(
        env: &'a HashMap<&'static str, &'static str>,
    ) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| env.get(name).map(|v| v.to_string())
    }

    #[test]
    fn all_vars_present_builds_config() {
        let env = full_env();
        let config = ServiceConfig::from_lookup(lookup_in(&env)).unwrap();

        assert_eq!(config.database.address, "db.internal");
        assert_eq!(config.database.port, 3306);
        assert_eq!(config.database.database, "shopping_cart");
        assert_eq!(config.database.user, "price_reader");
        assert_eq!(config.database.password, "hunter2");
        assert_eq!(config.telemetry.collector_host, "10.0.0.5");
        assert_eq!(
            config.telemetry.collector_endpoint(),
            "http://10.0.0.5:4317"
        );
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
    }

    #[test]
    fn one_missing_var_is_named() {
        let mut env = full_env();
        env.remove(MYSQL_PASSWORD);

        let err = ServiceConfig::from_lookup(lookup_in(&env)).unwrap_err();
        match err {
            ConfigError::MissingVars(names) => assert_eq!(names, vec!["MYSQL_PASSWORD"]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn every_missing_var_is_reported_at_once() {
        let mut env = full_env();
        env.remove(MYSQL_ADDRESS);
        env.remove(HOST_IP);

        let err = ServiceConfig::from_lookup(lookup_in(&env)).unwrap_err();
        match err {
            ConfigError::MissingVars(names) => {
                assert_eq!(names, vec!["MYSQL_ADDRESS", "HOST_IP"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unparsable_port_is_rejected() {
        let mut env = full_env();
        env.insert(MYSQL_PORT, "not-a-port");

        let err = ServiceConfig::from_lookup(lookup_in(&env)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVar { name: "MYSQL_PORT", .. }));
    }

    #[test]
    fn bind_address_override() {
        let mut env = full_env();
        env.insert(BIND_ADDRESS, "127.0.0.1:9090");

        let config = ServiceConfig::from_lookup(lookup_in(&env)).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:9090");
    }
}
