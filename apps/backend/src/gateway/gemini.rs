//! Gemini REST implementation of [`AiGateway`].

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::images::{fetch_inline, InlineImage};
use super::prompts::{hint_prompt, MORPH_PROMPT};
use super::{AiGateway, GatewayError};
use crate::config::GeminiConfig;
use crate::domain::HintKind;

/// Longest backend error body kept in a [`GatewayError::Backend`].
const MAX_ERROR_BODY: usize = 512;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerationConfig {
    pub response_modalities: Vec<&'static str>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<Blob>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Blob {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

impl From<InlineImage> for Part {
    fn from(image: InlineImage) -> Self {
        Part {
            text: None,
            inline_data: Some(Blob {
                mime_type: image.mime_type,
                data: image.data,
            }),
        }
    }
}

fn text_part(text: impl Into<String>) -> Part {
    Part {
        text: Some(text.into()),
        inline_data: None,
    }
}

/// Prompt plus (source, shape) images, asking for image and text output.
pub(crate) fn morph_request(source: InlineImage, shape: InlineImage) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            parts: vec![text_part(MORPH_PROMPT), source.into(), shape.into()],
        }],
        generation_config: Some(GenerationConfig {
            response_modalities: vec!["IMAGE", "TEXT"],
        }),
    }
}

pub(crate) fn text_request(prompt: String) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            parts: vec![text_part(prompt)],
        }],
        generation_config: None,
    }
}

/// First inline image of the first candidate, as a `data:` URI.
pub(crate) fn first_inline_image(response: &GenerateContentResponse) -> Option<String> {
    response
        .candidates
        .first()?
        .content
        .as_ref()?
        .parts
        .iter()
        .find_map(|part| part.inline_data.as_ref())
        .map(|blob| format!("data:{};base64,{}", blob.mime_type, blob.data))
}

/// Text parts of the first candidate, concatenated.
pub(crate) fn response_text(response: &GenerateContentResponse) -> Option<String> {
    let content = response.candidates.first()?.content.as_ref()?;
    let text: String = content
        .parts
        .iter()
        .filter_map(|part| part.text.as_deref())
        .collect();
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

pub struct GeminiGateway {
    client: Client,
    config: GeminiConfig,
}

impl GeminiGateway {
    pub fn new(config: GeminiConfig) -> Result<Self, GatewayError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.api_base, model
        )
    }

    async fn generate(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GatewayError> {
        let response = self
            .client
            .post(self.endpoint(model))
            .header("x-goog-api-key", &self.config.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let mut body = response.text().await.unwrap_or_default();
            if body.len() > MAX_ERROR_BODY {
                let mut cut = MAX_ERROR_BODY;
                while !body.is_char_boundary(cut) {
                    cut -= 1;
                }
                body.truncate(cut);
            }
            return Err(GatewayError::Backend {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| GatewayError::Decode(e.to_string()))
    }
}

#[async_trait]
impl AiGateway for GeminiGateway {
    async fn morph(
        &self,
        source_image_url: &str,
        shape_image_url: &str,
    ) -> Result<String, GatewayError> {
        let (source, shape) = tokio::try_join!(
            fetch_inline(&self.client, source_image_url),
            fetch_inline(&self.client, shape_image_url),
        )?;
        debug!(
            source_mime = %source.mime_type,
            shape_mime = %shape.mime_type,
            "images fetched for morph"
        );

        let response = self
            .generate(&self.config.image_model, &morph_request(source, shape))
            .await?;

        first_inline_image(&response).ok_or_else(|| {
            warn!(model = %self.config.image_model, "morph response carried no image part");
            GatewayError::NoImage
        })
    }

    async fn generate_hint(
        &self,
        creature_name: &str,
        kind: HintKind,
    ) -> Result<String, GatewayError> {
        let request = text_request(hint_prompt(creature_name, kind));
        let response = self.generate(&self.config.text_model, &request).await?;
        response_text(&response).ok_or(GatewayError::EmptyText)
    }
}
