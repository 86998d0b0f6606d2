//! AI gateway - stateless façade over the generative-AI backend.
//!
//! This module provides:
//! - [`AiGateway`]: the two operations the game needs (image morph, hint text)
//! - [`GeminiGateway`]: implementation over the Gemini REST API
//! - prompt templates and image fetch/encode helpers
//!
//! Every call is a single attempt. Callers decide what a failure means;
//! the game controller always degrades to a fallback.

pub mod gemini;
pub mod images;
pub mod prompts;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::HintKind;

pub use gemini::GeminiGateway;

/// Failures of either gateway operation.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("failed to fetch image {url}: HTTP {status}")]
    ImageFetch { url: String, status: u16 },
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend returned HTTP {status}: {body}")]
    Backend { status: u16, body: String },
    #[error("backend did not return a morphed image")]
    NoImage,
    #[error("backend returned no text")]
    EmptyText,
    #[error("undecodable payload: {0}")]
    Decode(String),
}

#[async_trait]
pub trait AiGateway: Send + Sync {
    /// Reshape the source creature into the shape creature's silhouette.
    ///
    /// Returns the result as a `data:` URI.
    async fn morph(
        &self,
        source_image_url: &str,
        shape_image_url: &str,
    ) -> Result<String, GatewayError>;

    /// One-sentence clue about `creature_name` of the requested kind.
    async fn generate_hint(
        &self,
        creature_name: &str,
        kind: HintKind,
    ) -> Result<String, GatewayError>;
}
