//! Shared configuration types for Tracklift
//!
//! This crate provides the configuration types consumed by the catalog and
//! chart clients and by the enricher pipeline, ensuring consistent
//! environment-variable handling across the workspace.

mod catalog;
mod chart;
mod error;

pub use catalog::CatalogConfig;
pub use chart::ChartConfig;
pub use error::{ConfigError, ConfigResult};

use std::env;

/// Helper function to get a required environment variable
pub fn get_required_env(name: &str) -> ConfigResult<String> {
    env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Helper function to get an optional environment variable with a default
pub fn get_env_or_default(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Helper function to parse an environment variable into a specific type
pub fn parse_env<T>(name: &str, default: T) -> ConfigResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(val) => val
            .parse()
            .map_err(|e| ConfigError::InvalidValue(name.to_string(), format!("{}", e))),
        Err(_) => Ok(default),
    }
}
