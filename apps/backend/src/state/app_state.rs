use std::sync::Arc;

use crate::config::CueUrls;
use crate::services::SessionRegistry;

/// Shared resources handed to every handler through `web::Data`.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionRegistry>,
    /// Remote audio files the browser plays for each cue.
    pub cue_urls: CueUrls,
    /// Client for fetching result images that are not data URIs.
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(sessions: Arc<SessionRegistry>, cue_urls: CueUrls, http: reqwest::Client) -> Self {
        Self {
            sessions,
            cue_urls,
            http,
        }
    }

    pub fn catalog_size(&self) -> usize {
        self.sessions.catalog().len()
    }
}
