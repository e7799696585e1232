use std::str::FromStr;
use std::time::Duration;

use super::error::ConfigError;

pub const CHANNEL_CAPACITY_VAR: &str = "CART_BUDDY_CHANNEL_CAPACITY";
pub const ROUTE_DELAY_VAR: &str = "CART_BUDDY_ROUTE_DELAY_MS";
pub const MAP_DELAY_VAR: &str = "CART_BUDDY_MAP_DELAY_MS";
pub const CATALOG_PATH_VAR: &str = "CART_BUDDY_CATALOG";

/// Runtime settings for the storefront system.
#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontConfig {
    /// Mailbox size of the session actor.
    pub channel_capacity: usize,
    pub route_delay: Duration,
    pub map_delay: Duration,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 32,
            route_delay: Duration::from_millis(1200),
            map_delay: Duration::from_millis(1200),
        }
    }
}

impl StorefrontConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Defaults, overridden by any variable `lookup` returns.
    pub fn from_lookup(lookup: impl Fn(&'static str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(capacity) = parse::<usize>(&lookup, CHANNEL_CAPACITY_VAR)? {
            if capacity == 0 {
                return Err(ConfigError::InvalidValue {
                    var: CHANNEL_CAPACITY_VAR,
                    value: "0".to_string(),
                });
            }
            config.channel_capacity = capacity;
        }
        if let Some(ms) = parse(&lookup, ROUTE_DELAY_VAR)? {
            config.route_delay = Duration::from_millis(ms);
        }
        if let Some(ms) = parse(&lookup, MAP_DELAY_VAR)? {
            config.map_delay = Duration::from_millis(ms);
        }
        Ok(config)
    }
}

fn parse<T: FromStr>(
    lookup: &impl Fn(&'static str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(var) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { var, value }),
    }
}
