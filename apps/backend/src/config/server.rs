use crate::config::non_empty;
use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;

/// HTTP listener and browser-facing settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Origins allowed by CORS; localhost dev origins when empty.
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = non_empty(lookup, "BACKEND_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match non_empty(lookup, "BACKEND_PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| {
                AppError::config(format!("BACKEND_PORT must be a valid port number, got '{raw}'"))
            })?,
            None => DEFAULT_PORT,
        };

        // Comma-separated, e.g. CORS_ALLOWED_ORIGINS=http://localhost:5173,https://play.example
        let allowed_origins = non_empty(lookup, "CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty() && *s != "null")
            .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
            .map(str::to_string)
            .collect();

        Ok(Self {
            host,
            port,
            allowed_origins,
        })
    }
}
