//! Environment-driven configuration.
//!
//! Every setting is read once at startup. Parsing goes through a lookup
//! closure so tests can feed a map instead of mutating the process env.

use std::path::PathBuf;

use crate::error::AppError;

pub mod cues;
pub mod gateway;
pub mod logging;
pub mod server;
pub mod sessions;

pub use cues::CueUrls;
pub use gateway::GeminiConfig;
pub use logging::LogFormat;
pub use server::ServerConfig;
pub use sessions::SessionLimits;

/// Top-level application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub gemini: GeminiConfig,
    pub cues: CueUrls,
    pub sessions: SessionLimits,
    /// JSON catalog file; the built-in catalog is used when unset.
    pub catalog_path: Option<PathBuf>,
    /// Seed for reproducible round selection.
    pub round_seed: Option<u64>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let round_seed = match non_empty(&lookup, "ROUND_SEED") {
            Some(raw) => Some(raw.parse::<u64>().map_err(|_| {
                AppError::config(format!("ROUND_SEED must be an unsigned integer, got '{raw}'"))
            })?),
            None => None,
        };

        Ok(Self {
            server: ServerConfig::from_lookup(&lookup)?,
            gemini: GeminiConfig::from_lookup(&lookup)?,
            cues: CueUrls::from_lookup(&lookup),
            sessions: SessionLimits::from_lookup(&lookup)?,
            catalog_path: non_empty(&lookup, "CATALOG_PATH").map(PathBuf::from),
            round_seed,
        })
    }
}

/// Trimmed value of `name`, treating blank as unset.
pub(crate) fn non_empty<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Get required variable or return error
pub(crate) fn must_var<F>(lookup: &F, name: &str) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    non_empty(lookup, name)
        .ok_or_else(|| AppError::config(format!("Required environment variable '{name}' is not set")))
}
