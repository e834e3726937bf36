use std::env;
use std::time::Duration;

use thiserror::Error;
use url::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid API url {raw:?}: {source}")]
    InvalidUrl {
        raw: String,
        #[source]
        source: url::ParseError,
    },

    #[error("API url must use http or https: {0}")]
    UnsupportedScheme(String),

    #[error("invalid timeout {0:?}")]
    InvalidTimeout(String),
}

#[derive(Clone, Debug)]
pub struct GatewayConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

impl GatewayConfig {
    /// # Errors
    ///
    /// Returns `ConfigError` if `raw` is not an absolute http(s) URL.
    pub fn new(raw: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url(raw)?,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Reads `COURSEHUB_API_URL` and `COURSEHUB_API_TIMEOUT_SECS`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if either variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = env::var("COURSEHUB_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());
        let mut config = Self::new(&raw)?;
        if let Ok(secs) = env::var("COURSEHUB_API_TIMEOUT_SECS") {
            config.timeout = parse_timeout(&secs)?;
        }
        Ok(config)
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let trimmed = raw.trim();
    // Joining relative paths drops the last segment unless it ends with '/'.
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_owned()
    } else {
        format!("{trimmed}/")
    };
    let url = Url::parse(&with_slash).map_err(|source| ConfigError::InvalidUrl {
        raw: raw.to_owned(),
        source,
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedScheme(raw.to_owned()));
    }
    Ok(url)
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout(raw.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gets_trailing_slash() {
        let config = GatewayConfig::new("https://api.example.com/v1").unwrap();
        assert_eq!(config.base_url.as_str(), "https://api.example.com/v1/");
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        assert!(matches!(
            GatewayConfig::new("ftp://example.com"),
            Err(ConfigError::UnsupportedScheme(_))
        ));
        assert!(matches!(
            GatewayConfig::new("not a url"),
            Err(ConfigError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn timeout_must_be_positive() {
        assert_eq!(parse_timeout("30").unwrap(), Duration::from_secs(30));
        assert!(parse_timeout("0").is_err());
        assert!(parse_timeout("soon").is_err());
    }
}
