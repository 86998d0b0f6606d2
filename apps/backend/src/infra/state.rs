use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::config::{AppConfig, CueUrls, SessionLimits};
use crate::domain::{Catalog, IndexPicker, RandomPicker};
use crate::error::AppError;
use crate::gateway::{AiGateway, GeminiGateway};
use crate::services::SessionRegistry;
use crate::state::app_state::AppState;

const IMAGE_DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(30);

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    catalog: Option<Catalog>,
    gateway: Option<Arc<dyn AiGateway>>,
    picker: Option<Arc<dyn IndexPicker>>,
    cue_urls: CueUrls,
    limits: SessionLimits,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            catalog: None,
            gateway: None,
            picker: None,
            cue_urls: CueUrls::default(),
            limits: SessionLimits::default(),
        }
    }

    /// Production wiring: catalog file (or the built-in list), Gemini
    /// gateway and an optionally seeded RNG.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let catalog = match &config.catalog_path {
            Some(path) => {
                let catalog = Catalog::load_path(path)?;
                info!(path = %path.display(), size = catalog.len(), "catalog loaded from file");
                catalog
            }
            None => Catalog::builtin(),
        };

        let gateway = GeminiGateway::new(config.gemini.clone())
            .map_err(|e| AppError::config(format!("Failed to build Gemini client: {e}")))?;

        Ok(Self::new()
            .with_catalog(catalog)
            .with_gateway(Arc::new(gateway))
            .with_picker(Arc::new(RandomPicker::new(config.round_seed)))
            .with_cue_urls(config.cues.clone())
            .with_session_limits(config.sessions))
    }

    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn with_gateway(mut self, gateway: Arc<dyn AiGateway>) -> Self {
        self.gateway = Some(gateway);
        self
    }

    pub fn with_picker(mut self, picker: Arc<dyn IndexPicker>) -> Self {
        self.picker = Some(picker);
        self
    }

    pub fn with_cue_urls(mut self, cue_urls: CueUrls) -> Self {
        self.cue_urls = cue_urls;
        self
    }

    pub fn with_session_limits(mut self, limits: SessionLimits) -> Self {
        self.limits = limits;
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let gateway = self
            .gateway
            .ok_or_else(|| AppError::config("No AI gateway configured"))?;
        let catalog = self.catalog.unwrap_or_else(Catalog::builtin);
        if !catalog.is_playable() {
            // Sessions still start; every round start reports CatalogTooSmall
            warn!(size = catalog.len(), "catalog too small to start a round");
        }
        let picker = self
            .picker
            .unwrap_or_else(|| Arc::new(RandomPicker::new(None)));

        let http = reqwest::Client::builder()
            .timeout(IMAGE_DOWNLOAD_TIMEOUT)
            .build()
            .map_err(|e| AppError::config(format!("Failed to build HTTP client: {e}")))?;

        let sessions = SessionRegistry::new(Arc::new(catalog), gateway, picker, self.limits);
        Ok(AppState::new(Arc::new(sessions), self.cue_urls, http))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
