//! Image fetch and inline encoding.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

use crate::gateway::GatewayError;

/// Image bytes ready to embed in a generate request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub mime_type: String,
    /// Standard base64 of the raw bytes.
    pub data: String,
}

impl InlineImage {
    pub fn from_bytes(mime_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: BASE64.encode(bytes),
        }
    }

    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

/// Raw image bytes with their content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedImage {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Content type from the response header, else the URL extension, else PNG.
pub fn detect_mime(content_type: Option<&str>, url: &str) -> String {
    if let Some(ct) = content_type {
        let essence = ct.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
        if essence.starts_with("image/") {
            return essence;
        }
    }
    guess_image_mime(url).to_string()
}

fn guess_image_mime(url: &str) -> &'static str {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let ext = path
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "image/png",
    }
}

/// Split a `data:{mime};base64,{payload}` URI into mime type and bytes.
pub fn decode_data_uri(uri: &str) -> Result<FetchedImage, GatewayError> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| GatewayError::Decode("not a data URI".into()))?;
    let (meta, payload) = rest
        .split_once(',')
        .ok_or_else(|| GatewayError::Decode("data URI has no payload".into()))?;
    let mime_type = meta
        .strip_suffix(";base64")
        .ok_or_else(|| GatewayError::Decode("data URI is not base64".into()))?;
    let bytes = BASE64
        .decode(payload)
        .map_err(|e| GatewayError::Decode(format!("bad base64: {e}")))?;

    Ok(FetchedImage {
        mime_type: if mime_type.is_empty() {
            "image/png".to_string()
        } else {
            mime_type.to_string()
        },
        bytes,
    })
}

/// GET an image; `data:` URIs are decoded in place.
pub async fn fetch_image(client: &Client, url: &str) -> Result<FetchedImage, GatewayError> {
    if url.starts_with("data:") {
        return decode_data_uri(url);
    }

    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(GatewayError::ImageFetch {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = response.bytes().await?;

    Ok(FetchedImage {
        mime_type: detect_mime(content_type.as_deref(), url),
        bytes: bytes.to_vec(),
    })
}

pub async fn fetch_inline(client: &Client, url: &str) -> Result<InlineImage, GatewayError> {
    let image = fetch_image(client, url).await?;
    Ok(InlineImage::from_bytes(image.mime_type, &image.bytes))
}
