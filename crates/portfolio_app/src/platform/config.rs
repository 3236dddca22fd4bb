use std::env;

use portfolio_core::DeploymentMode;
use thiserror::Error;
use url::Url;

pub const MODE_VAR: &str = "PORTFOLIO_ENV";
pub const ORIGIN_VAR: &str = "PORTFOLIO_ORIGIN";
pub const DEFAULT_ORIGIN: &str = "http://localhost:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown PORTFOLIO_ENV value {0:?} (expected production or development)")]
    UnknownMode(String),
    #[error("invalid PORTFOLIO_ORIGIN: {0}")]
    Origin(#[from] url::ParseError),
    #[error("PORTFOLIO_ORIGIN must be an http(s) origin, got {0}")]
    NotAnOrigin(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub mode: DeploymentMode,
    pub origin: Url,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let mode = env::var(MODE_VAR).ok();
        let origin = env::var(ORIGIN_VAR).ok();
        Self::from_values(mode.as_deref(), origin.as_deref())
    }

    pub fn from_values(mode: Option<&str>, origin: Option<&str>) -> Result<Self, ConfigError> {
        let mode = match mode.map(str::trim) {
            None | Some("") => DeploymentMode::default(),
            Some(value) if value.eq_ignore_ascii_case("production") => DeploymentMode::Production,
            Some(value) if value.eq_ignore_ascii_case("development") => {
                DeploymentMode::Development
            }
            Some(other) => return Err(ConfigError::UnknownMode(other.to_string())),
        };

        let origin = Url::parse(origin.unwrap_or(DEFAULT_ORIGIN))?;
        if !matches!(origin.scheme(), "http" | "https") || origin.cannot_be_a_base() {
            return Err(ConfigError::NotAnOrigin(origin.to_string()));
        }

        Ok(Self { mode, origin })
    }

    /// Site root under the configured base path, with `query` attached.
    pub fn start_location(&self, query: Option<&str>) -> Result<Url, ConfigError> {
        let mut location = self.origin.join(&self.mode.base_path())?;
        let query = query.map(|q| q.trim_start_matches('?')).filter(|q| !q.is_empty());
        location.set_query(query);
        Ok(location)
    }
}
