//! Gemini REST client.

use super::dto::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, ImageConfig,
    Part, PredictInstance, PredictParameters, PredictRequest, PredictResponse,
};
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use visionary_core::ImageCallShape;
use visionary_error::{GenerationError, GenerationErrorKind, GenerationResult};
use visionary_interface::{GeneratedImage, GenerativeBackend, ImageRequest, TextRequest};
use visionary_storage::Credential;

/// Public Gemini API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

const API_KEY_HEADER: &str = "x-goog-api-key";
const STORYBOARD_ASPECT_RATIO: &str = "9:16";

/// Backend for the hosted Gemini and Imagen REST API.
///
/// Text and native image models use `generateContent`; Imagen models use
/// `predict`. The key is sent per request, so one backend serves any key.
#[derive(Debug, Clone)]
pub struct GeminiBackend {
    client: Client,
    base_url: String,
}

impl Default for GeminiBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl GeminiBackend {
    /// Backend for the public endpoint.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Backend for another endpoint, e.g. a local stub server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, model: &str, method: &str) -> String {
        format!("{}/v1beta/models/{}:{}", self.base_url, model, method)
    }

    async fn post<Req, Resp>(
        &self,
        credential: &Credential,
        url: &str,
        body: &Req,
    ) -> GenerationResult<Resp>
    where
        Req: Serialize + Sync,
        Resp: DeserializeOwned + Send,
    {
        debug!(url = %url, "Sending Gemini API request");

        let response = self
            .client
            .post(url)
            .header(API_KEY_HEADER, credential.expose())
            .json(body)
            .send()
            .await
            .map_err(|e| GenerationError::new(GenerationErrorKind::Request(e.to_string())))?;

        if !response.status().is_success() {
            let status_code = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(GenerationError::new(GenerationErrorKind::HttpStatus {
                status_code,
                message,
            }));
        }

        response
            .json()
            .await
            .map_err(|e| GenerationError::malformed(format!("response envelope: {}", e)))
    }

    async fn generate_inline_image(
        &self,
        credential: &Credential,
        request: &ImageRequest,
    ) -> GenerationResult<GeneratedImage> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part::text(request.prompt().as_str())],
            }],
            generation_config: Some(GenerationConfig {
                response_modalities: Some(vec!["TEXT".to_string(), "IMAGE".to_string()]),
                image_config: Some(ImageConfig {
                    aspect_ratio: STORYBOARD_ASPECT_RATIO.to_string(),
                }),
                ..Default::default()
            }),
        };

        let response: GenerateContentResponse = self
            .post(credential, &self.url(request.model(), "generateContent"), &body)
            .await?;

        let inline = response
            .parts()
            .iter()
            .find_map(|part| part.inline_data.as_ref())
            .ok_or_else(|| {
                GenerationError::new(GenerationErrorKind::EmptyResponse(format!(
                    "no image part (finish reason: {})",
                    response.finish_reason().unwrap_or("unknown")
                )))
            })?;

        let data = decode_base64(&inline.data)?;
        Ok(GeneratedImage::new(inline.mime_type.clone(), data))
    }

    async fn generate_dedicated_image(
        &self,
        credential: &Credential,
        request: &ImageRequest,
    ) -> GenerationResult<GeneratedImage> {
        let body = PredictRequest {
            instances: vec![PredictInstance {
                prompt: request.prompt().clone(),
            }],
            parameters: PredictParameters {
                sample_count: 1,
                aspect_ratio: STORYBOARD_ASPECT_RATIO.to_string(),
            },
        };

        let response: PredictResponse = self
            .post(credential, &self.url(request.model(), "predict"), &body)
            .await?;

        let prediction = response.predictions.into_iter().next().ok_or_else(|| {
            GenerationError::new(GenerationErrorKind::EmptyResponse(
                "no predictions returned".to_string(),
            ))
        })?;
        let encoded = prediction.bytes_base64_encoded.ok_or_else(|| {
            GenerationError::new(GenerationErrorKind::EmptyResponse(
                "prediction carried no image bytes".to_string(),
            ))
        })?;

        let data = decode_base64(&encoded)?;
        let mime = prediction.mime_type.unwrap_or_else(|| "image/png".to_string());
        Ok(GeneratedImage::new(mime, data))
    }
}

fn decode_base64(encoded: &str) -> GenerationResult<Vec<u8>> {
    STANDARD
        .decode(encoded)
        .map_err(|e| GenerationError::new(GenerationErrorKind::Base64Decode(e.to_string())))
}

#[async_trait]
impl GenerativeBackend for GeminiBackend {
    #[instrument(skip(self, credential, request), fields(model = %request.model()))]
    async fn generate_text(
        &self,
        credential: &Credential,
        request: &TextRequest,
    ) -> GenerationResult<String> {
        let mut parts = Vec::new();
        if let Some(image) = request.image() {
            parts.push(Part::inline(image.mime().as_str(), STANDARD.encode(image.data())));
        }
        parts.push(Part::text(request.prompt().as_str()));

        let generation_config = request.response_schema().as_ref().map(|schema| GenerationConfig {
            response_mime_type: Some("application/json".to_string()),
            response_schema: Some(schema.clone()),
            ..Default::default()
        });

        let body = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts,
            }],
            generation_config,
        };

        let response: GenerateContentResponse = self
            .post(credential, &self.url(request.model(), "generateContent"), &body)
            .await?;

        let text: String = response
            .parts()
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        let text = text.trim();

        if text.is_empty() {
            return Err(GenerationError::new(GenerationErrorKind::EmptyResponse(
                format!(
                    "no text returned (finish reason: {})",
                    response.finish_reason().unwrap_or("unknown")
                ),
            )));
        }
        Ok(text.to_string())
    }

    #[instrument(skip(self, credential, request), fields(model = %request.model(), shape = ?request.shape()))]
    async fn generate_image(
        &self,
        credential: &Credential,
        request: &ImageRequest,
    ) -> GenerationResult<GeneratedImage> {
        match request.shape() {
            ImageCallShape::InlineContent => self.generate_inline_image(credential, request).await,
            ImageCallShape::DedicatedImage => {
                self.generate_dedicated_image(credential, request).await
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}
