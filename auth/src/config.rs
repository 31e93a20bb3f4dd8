//! Auth service configuration parsed from environment variables.
//!
//! Unset or unparsable variables fall back to the defaults. In the browser
//! no variable is ever set, so [`AuthConfig::from_env`] equals
//! [`AuthConfig::default`] there.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::time::Duration;

pub const DEFAULT_LATENCY_MS: u64 = 500;
pub const DEFAULT_TOKEN_TTL_HOURS: u64 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthConfig {
    /// Simulated round-trip delay applied before every service call.
    pub latency: Duration,
    /// Lifetime of issued tokens.
    pub token_ttl: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(DEFAULT_LATENCY_MS),
            token_ttl: Duration::from_secs(DEFAULT_TOKEN_TTL_HOURS * 3600),
        }
    }
}

impl AuthConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `AUTH_LATENCY_MS`: default 500
    /// - `AUTH_TOKEN_TTL_HOURS`: default 24
    #[must_use]
    pub fn from_env() -> Self {
        let latency_ms = env_parse("AUTH_LATENCY_MS", DEFAULT_LATENCY_MS);
        let ttl_hours = env_parse("AUTH_TOKEN_TTL_HOURS", DEFAULT_TOKEN_TTL_HOURS);
        Self {
            latency: Duration::from_millis(latency_ms),
            token_ttl: Duration::from_secs(ttl_hours.saturating_mul(3600)),
        }
    }
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}
