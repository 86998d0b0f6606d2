use std::time::Duration;

use crate::config::non_empty;
use crate::error::AppError;

const DEFAULT_IDLE_TTL_SECS: u64 = 30 * 60;
const DEFAULT_MAX_SESSIONS: usize = 10_000;

/// Bounds on the in-memory session registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionLimits {
    /// Sessions untouched for this long are evicted.
    pub idle_ttl: Duration,
    /// Live sessions allowed at once; creation beyond this is refused.
    pub max_sessions: usize,
}

impl Default for SessionLimits {
    fn default() -> Self {
        Self {
            idle_ttl: Duration::from_secs(DEFAULT_IDLE_TTL_SECS),
            max_sessions: DEFAULT_MAX_SESSIONS,
        }
    }
}

impl SessionLimits {
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let idle_ttl = match non_empty(lookup, "SESSION_IDLE_TTL_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(AppError::config(format!(
                        "SESSION_IDLE_TTL_SECS must be a positive number, got '{raw}'"
                    )))
                }
            },
            None => defaults.idle_ttl,
        };

        let max_sessions = match non_empty(lookup, "MAX_SESSIONS") {
            Some(raw) => match raw.parse::<usize>() {
                Ok(max) if max > 0 => max,
                _ => {
                    return Err(AppError::config(format!(
                        "MAX_SESSIONS must be a positive number, got '{raw}'"
                    )))
                }
            },
            None => defaults.max_sessions,
        };

        Ok(Self {
            idle_ttl,
            max_sessions,
        })
    }
}
