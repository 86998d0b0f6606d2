use crate::config::non_empty;
use crate::error::AppError;

/// Default directives when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,silhouette_backend=debug,actix_web=info,reqwest=warn,hyper=warn";

/// Log line format, from `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per line, request span fields flattened in.
    #[default]
    Json,
    /// Human-readable single-line output for local runs.
    Compact,
}

impl LogFormat {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(&|name: &str| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: &F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match non_empty(lookup, "LOG_FORMAT") {
            None => Ok(Self::default()),
            Some(raw) => match raw.to_ascii_lowercase().as_str() {
                "json" => Ok(Self::Json),
                "compact" | "text" => Ok(Self::Compact),
                _ => Err(AppError::config(format!(
                    "LOG_FORMAT must be 'json' or 'compact', got '{raw}'"
                ))),
            },
        }
    }
}
