//! Configuration loading and constants.
//!
//! Loads runtime configuration from a TOML file and defines the constants the
//! rest of the application renders from: site metadata, HTTP cache TTLs,
//! default paths, and the log filter. `AppConfig` is the root configuration
//! struct containing all settings.

use const_format::formatcp;
use serde::Deserialize;
use std::path::Path;

// =============================================================================
// Site Metadata
// =============================================================================
// The page content is fixed for the lifetime of the process. These strings are
// compile-time constants rather than config fields so the rendered output is
// the same on every instance behind the load balancer.

/// Document language attribute
pub const SITE_LANG: &str = "en";

/// Document title
pub const SITE_TITLE: &str = "Next.js on ECS";

/// Document meta description
pub const SITE_DESCRIPTION: &str = "Simple Next.js app deployed on AWS ECS";

/// Path of the liveness probe the landing page links to
pub const HEALTH_PATH: &str = "/api/health";

// =============================================================================
// HTTP Response Cache Control
// =============================================================================
// These constants control Cache-Control headers for upstream caches (the load
// balancer, CDNs). All values are in seconds. Directives used:
// - max-age: How long the response is considered fresh
// - stale-while-revalidate: Serve stale while fetching fresh in background
// - stale-if-error: Serve stale content if origin returns 5xx
//
// References:
// - RFC 9111 (HTTP Caching): https://httpwg.org/specs/rfc9111.html
// - RFC 5861 (stale-* extensions): https://httpwg.org/specs/rfc5861.html

/// Home page - content only changes on redeploy
pub const HTTP_CACHE_HOME_MAX_AGE: u32 = 60;
pub const HTTP_CACHE_HOME_SWR: u32 = 30;

/// Stale-if-error duration - serve stale content during backend failures
pub const HTTP_CACHE_STALE_IF_ERROR: u32 = 300;

/// Error responses - short TTL so recovery is picked up quickly
pub const HTTP_CACHE_ERROR_MAX_AGE: u32 = 5;

// Pre-formatted Cache-Control header values (compile-time string concatenation)
pub const CACHE_CONTROL_HOME: &str = formatcp!(
    "public, max-age={}, stale-while-revalidate={}, stale-if-error={}",
    HTTP_CACHE_HOME_MAX_AGE,
    HTTP_CACHE_HOME_SWR,
    HTTP_CACHE_STALE_IF_ERROR
);

pub const CACHE_CONTROL_ERROR: &str = formatcp!("public, max-age={}", HTTP_CACHE_ERROR_MAX_AGE);

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Glob pattern for template files
pub const TEMPLATE_GLOB: &str = "templates/**/*";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "ecs_landing=debug,tower_http=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;

        if config.http.host.is_empty() {
            return Err(ConfigError::Validation(
                "http.host must not be empty".to_string(),
            ));
        }

        match config.logging.format.as_str() {
            "text" | "json" => {}
            other => {
                return Err(ConfigError::Validation(format!(
                    "logging.format must be \"text\" or \"json\", got \"{}\"",
                    other
                )));
            }
        }

        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
