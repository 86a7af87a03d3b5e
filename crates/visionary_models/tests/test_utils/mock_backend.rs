//! Mock generative backend for testing.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use visionary_error::{GenerationError, GenerationErrorKind, GenerationResult};
use visionary_interface::{GeneratedImage, GenerativeBackend, ImageRequest, TextRequest};
use visionary_storage::Credential;

/// A single scripted response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Text(String),
    Image(String, Vec<u8>),
    Error(GenerationErrorKind),
}

/// What the backend was asked to do.
#[derive(Debug, Clone)]
pub enum RecordedCall {
    Text {
        key: String,
        request: TextRequest,
    },
    Image {
        key: String,
        request: ImageRequest,
    },
}

/// Backend that replays a sequence of responses and records every call.
#[derive(Default)]
pub struct MockBackend {
    responses: Mutex<VecDeque<MockResponse>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockBackend {
    /// Create a backend replaying the given responses in order.
    pub fn new_sequence(responses: Vec<MockResponse>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Number of calls received.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Every call received, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn next_response(&self) -> MockResponse {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                MockResponse::Error(GenerationErrorKind::Request(
                    "mock sequence exhausted".to_string(),
                ))
            })
    }
}

#[async_trait]
impl GenerativeBackend for MockBackend {
    async fn generate_text(
        &self,
        credential: &Credential,
        request: &TextRequest,
    ) -> GenerationResult<String> {
        self.calls.lock().unwrap().push(RecordedCall::Text {
            key: credential.expose().to_string(),
            request: request.clone(),
        });
        match self.next_response() {
            MockResponse::Text(text) => Ok(text),
            MockResponse::Image(..) => Err(GenerationError::malformed("expected text")),
            MockResponse::Error(kind) => Err(GenerationError::new(kind)),
        }
    }

    async fn generate_image(
        &self,
        credential: &Credential,
        request: &ImageRequest,
    ) -> GenerationResult<GeneratedImage> {
        self.calls.lock().unwrap().push(RecordedCall::Image {
            key: credential.expose().to_string(),
            request: request.clone(),
        });
        match self.next_response() {
            MockResponse::Image(mime, data) => Ok(GeneratedImage::new(mime, data)),
            MockResponse::Text(_) => Err(GenerationError::malformed("expected image")),
            MockResponse::Error(kind) => Err(GenerationError::new(kind)),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}
