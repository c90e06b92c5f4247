//! Runtime configuration for the `shoegrid` binary.
//!
//! Everything comes from environment variables with logged defaults:
//!
//! - `SHOEGRID_CATALOG`: path to a JSON catalog (default: bundled sample)
//! - `SHOEGRID_NOW`: RFC 3339 evaluation time (default: system clock)
//! - `SHOEGRID_THEME`: `default` or `dark`

use std::path::PathBuf;

use anyhow::Context;
use chrono::{DateTime, Utc};
use thiserror::Error;

use shoegrid_catalog::{Catalog, Clock, FixedClock, SystemClock};

use crate::SAMPLE_CATALOG;
use crate::theme::ThemeName;

pub const CATALOG_VAR: &str = "SHOEGRID_CATALOG";
pub const NOW_VAR: &str = "SHOEGRID_NOW";
pub const THEME_VAR: &str = "SHOEGRID_THEME";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("SHOEGRID_NOW is not an RFC 3339 timestamp: {0}")]
    InvalidNow(String),
    #[error("SHOEGRID_THEME: {0}")]
    InvalidTheme(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub catalog_path: Option<PathBuf>,
    pub now: Option<DateTime<Utc>>,
    pub theme: ThemeName,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let catalog_path = var(CATALOG_VAR).map(PathBuf::from);
        if catalog_path.is_none() {
            tracing::info!("{CATALOG_VAR} not set; using bundled sample catalog");
        }

        let now = match var(NOW_VAR) {
            Some(raw) => Some(
                DateTime::parse_from_rfc3339(raw.trim())
                    .map_err(|e| ConfigError::InvalidNow(format!("{raw:?}: {e}")))?
                    .with_timezone(&Utc),
            ),
            None => {
                tracing::info!("{NOW_VAR} not set; using system clock");
                None
            }
        };

        let theme = match var(THEME_VAR) {
            Some(raw) => raw.parse::<ThemeName>().map_err(ConfigError::InvalidTheme)?,
            None => {
                tracing::info!("{THEME_VAR} not set; using default theme");
                ThemeName::default()
            }
        };

        Ok(Self {
            catalog_path,
            now,
            theme,
        })
    }

    /// The clock renders are evaluated against.
    pub fn clock(&self) -> Box<dyn Clock> {
        match self.now {
            Some(now) => Box::new(FixedClock(now)),
            None => Box::new(SystemClock),
        }
    }

    pub fn load_catalog(&self) -> anyhow::Result<Catalog> {
        let catalog = match &self.catalog_path {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read catalog at {}", path.display()))?;
                Catalog::from_json(&json)
                    .with_context(|| format!("invalid catalog at {}", path.display()))?
            }
            None => Catalog::from_json(SAMPLE_CATALOG).context("invalid bundled sample catalog")?,
        };

        tracing::info!(shoes = catalog.len(), "catalog loaded");
        Ok(catalog)
    }
}
